use tracing::instrument;

use crate::calendar::{format_date, today};
use crate::console::Terminal;
use crate::error::Result;
use crate::goals::repo_types::Goal;
use crate::goals::services;
use crate::input::{ask_calories, parse_id};
use crate::state::AppState;

fn describe(goal: &Goal) -> String {
    format!(
        "ID: {} | Daily: {} | Weekly: {} | Set On: {}",
        goal.id,
        goal.daily_calories,
        goal.weekly_calories,
        format_date(goal.set_date)
    )
}

#[instrument(skip_all)]
pub async fn set_goal(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let daily = ask_calories(term, "daily goal", "Enter Daily Calorie Goal: ")?;
    let weekly = ask_calories(term, "weekly goal", "Enter Weekly Calorie Goal: ")?;
    services::set_goal(st, &user, daily, weekly, today()).await?;
    term.say("Goal set successfully.")?;
    Ok(())
}

pub async fn list_goals(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let goals = services::list_goals(st, &user).await?;
    if goals.is_empty() {
        term.say("No goals set.")?;
    }
    for goal in &goals {
        term.say(&describe(goal))?;
    }
    Ok(())
}

pub async fn show_current_goal(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    match services::latest_goal(st, &user).await? {
        Some(goal) => term.say(&format!("Current goal: {}", describe(&goal)))?,
        None => term.say("No goal set.")?,
    }
    Ok(())
}

#[instrument(skip_all)]
pub async fn update_goal(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let id = parse_id("goal id", &term.prompt("Enter Goal ID: ")?)?;
    let daily = ask_calories(term, "daily goal", "Enter Daily Calorie Goal: ")?;
    let weekly = ask_calories(term, "weekly goal", "Enter Weekly Calorie Goal: ")?;
    let goal = services::update_goal(st, &user, id, daily, weekly).await?;
    term.say(&format!("Goal updated: {}", describe(&goal)))?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn delete_goal(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let user = term.prompt("Enter User Name: ")?;
    let id = parse_id("goal id", &term.prompt("Enter Goal ID: ")?)?;
    services::delete_goal(st, &user, id).await?;
    term.say("Goal deleted.")?;
    Ok(())
}
