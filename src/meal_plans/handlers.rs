use tracing::instrument;

use crate::calendar::{ensure_monday, format_date, week_days};
use crate::console::Terminal;
use crate::error::Result;
use crate::input::{ask_date, parse_week_number, parse_year};
use crate::meal_plans::dto::DaySlot;
use crate::meal_plans::services;
use crate::state::AppState;

fn print_week(term: &mut dyn Terminal, slots: &[DaySlot]) -> Result<()> {
    for slot in slots {
        term.say(&slot.to_string())?;
    }
    Ok(())
}

#[instrument(skip_all)]
pub async fn set_meal_plan(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let day = ask_date(term, "Enter Day (YYYY-MM-DD): ")?;
    let meal = term.prompt("Enter Meal: ")?;
    services::set_meal_plan(st, &user, day, &meal).await?;
    term.say(&format!("Meal plan for {} saved.", format_date(day)))?;
    Ok(())
}

pub async fn list_meal_plans(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let plans = services::list_meal_plans(st, &user).await?;
    if plans.is_empty() {
        term.say("No meal plans.")?;
    }
    for plan in plans {
        term.say(&format!("{} | {}", format_date(plan.day), plan.meal))?;
    }
    Ok(())
}

pub async fn view_week(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let monday = ask_date(term, "Enter Week Start (Monday, YYYY-MM-DD): ")?;
    let slots = services::weekly_view(st, &user, monday).await?;
    print_week(term, &slots)
}

pub async fn view_iso_week(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let year = parse_year(&term.prompt("Enter Year: ")?)?;
    let week = parse_week_number(&term.prompt("Enter Week Number: ")?)?;
    let slots = services::weekly_view_for_iso_week(st, &user, year, week).await?;
    print_week(term, &slots)
}

/// A non-Monday anchor is refused before the seven meal prompts.
#[instrument(skip_all)]
pub async fn generate_week(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let monday = ensure_monday(ask_date(term, "Enter Week Start (Monday, YYYY-MM-DD): ")?)?;

    let mut meals: [Option<String>; 7] = Default::default();
    for (meal, day) in meals.iter_mut().zip(week_days(monday)?) {
        let answer = term.prompt(&format!(
            "Meal for {} {} (blank for none): ",
            day.weekday(),
            format_date(day)
        ))?;
        *meal = Some(answer);
    }

    let slots = services::generate_weekly_meal_plan(st, &user, monday, meals).await?;
    term.say("Weekly meal plan saved:")?;
    print_week(term, &slots)
}

#[instrument(skip_all)]
pub async fn delete_meal_plan(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let day = ask_date(term, "Enter Day (YYYY-MM-DD): ")?;
    services::delete_meal_plan(st, &user, day).await?;
    term.say("Meal plan deleted.")?;
    Ok(())
}
