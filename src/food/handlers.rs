use tracing::instrument;

use crate::calendar::{format_date, week_end};
use crate::console::Terminal;
use crate::error::Result;
use crate::food::dto::FoodEntryPatch;
use crate::food::services;
use crate::input::{
    ask_calories, ask_date, ask_optional_date, optional_text, parse_calories, parse_id,
};
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn add_food_entry(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let food = term.prompt("Enter Food Name: ")?;
    let calories = ask_calories(term, "calories", "Enter Calories: ")?;
    let date = ask_date(term, "Enter Date (YYYY-MM-DD): ")?;
    services::add_food_entry(st, &user, &food, calories, date).await?;
    term.say("Food entry added successfully.")?;
    Ok(())
}

pub async fn list_food_entries(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = optional_text(&term.prompt("Enter User Name (leave blank for all): ")?);
    let date = ask_optional_date(term, "Enter Date (YYYY-MM-DD) (optional): ")?;

    let entries = services::food_entries_for(st, user.as_deref(), date).await?;
    if entries.is_empty() {
        term.say("No food entries found.")?;
    }
    for entry in entries {
        term.say(&format!(
            "ID: {} | {} | {} | {} cal | User: {}",
            entry.id,
            format_date(entry.date),
            entry.food,
            entry.calories,
            entry.user_name
        ))?;
    }
    Ok(())
}

#[instrument(skip_all)]
pub async fn update_food_entry(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let id = parse_id("entry id", &term.prompt("Enter Entry ID: ")?)?;
    let food = optional_text(&term.prompt("New Food Name (blank to keep): ")?);
    let calories = match optional_text(&term.prompt("New Calories (blank to keep): ")?) {
        Some(raw) => Some(parse_calories("calories", &raw)?),
        None => None,
    };
    let date = ask_optional_date(term, "New Date (YYYY-MM-DD) (blank to keep): ")?;

    let entry =
        services::update_food_entry(st, &user, id, FoodEntryPatch { food, calories, date }).await?;
    term.say(&format!(
        "Entry {} is now {} | {} | {} cal.",
        entry.id,
        format_date(entry.date),
        entry.food,
        entry.calories
    ))?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn delete_food_entry(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let id = parse_id("entry id", &term.prompt("Enter Entry ID: ")?)?;
    services::delete_food_entry(st, &user, id).await?;
    term.say("Food entry deleted.")?;
    Ok(())
}

pub async fn daily_summary(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let date = ask_date(term, "Enter Date (YYYY-MM-DD): ")?;
    let summary = services::daily_summary(st, &user, date).await?;

    term.say(&format!("=== {} on {} ===", user.trim(), format_date(summary.date)))?;
    for entry in &summary.entries {
        term.say(&format!("  {} | {} cal", entry.food, entry.calories))?;
    }
    match &summary.goal {
        Some(goal) => term.say(&format!(
            "Total: {} / {} cal ({})",
            summary.total, goal.daily_calories, summary.status
        ))?,
        None => term.say(&format!("Total: {} cal ({})", summary.total, summary.status))?,
    }
    Ok(())
}

pub async fn weekly_summary(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let monday = ask_date(term, "Enter Week Start (Monday, YYYY-MM-DD): ")?;
    let summary = services::weekly_summary(st, &user, monday).await?;

    term.say(&format!(
        "=== {} week of {} ===",
        user.trim(),
        format_date(summary.week_start)
    ))?;
    for (day, total) in summary.daily_totals {
        term.say(&format!("  {:<9} {} | {} cal", day.weekday().to_string(), format_date(day), total))?;
    }
    match &summary.goal {
        Some(goal) => term.say(&format!(
            "Total: {} / {} cal ({})",
            summary.total, goal.weekly_calories, summary.status
        ))?,
        None => term.say(&format!("Total: {} cal ({})", summary.total, summary.status))?,
    }
    Ok(())
}

pub async fn calorie_totals(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let date = ask_date(term, "Enter Date (YYYY-MM-DD): ")?;
    let end = week_end(date)?;
    let day = services::daily_total(st, &user, date).await?;
    let seven_days = services::weekly_total(st, &user, date).await?;
    term.say(&format!("{}: {} cal", format_date(date), day))?;
    term.say(&format!(
        "{} to {}: {} cal",
        format_date(date),
        format_date(end),
        seven_days
    ))?;
    Ok(())
}
