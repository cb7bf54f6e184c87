use tracing::instrument;

use crate::calendar::format_timestamp;
use crate::console::Terminal;
use crate::error::Result;
use crate::state::AppState;
use crate::users::services;

#[instrument(skip_all)]
pub async fn create_user(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let name = term.prompt("Enter User Name: ")?;
    let user = services::create_user(st, &name).await?;
    term.say(&format!("User '{}' created successfully.", user.name))?;
    Ok(())
}

pub async fn list_users(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let users = services::list_users(st).await?;
    if users.is_empty() {
        term.say("No users yet.")?;
    }
    for user in users {
        term.say(&format!(
            "ID: {} | Name: {} | Created At: {}",
            user.id,
            user.name,
            format_timestamp(user.created_at)
        ))?;
    }
    Ok(())
}

pub async fn find_user(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let name = term.prompt("Enter User Name: ")?;
    let user = services::lookup_user(st, &name).await?;
    term.say(&format!(
        "ID: {} | Name: {} | Created At: {}",
        user.id,
        user.name,
        format_timestamp(user.created_at)
    ))?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn rename_user(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let current = term.prompt("Enter User Name: ")?;
    let new_name = term.prompt("Enter New Name: ")?;
    let user = services::rename_user(st, &current, &new_name).await?;
    term.say(&format!("User renamed to '{}'.", user.name))?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn delete_user(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    let name = term.prompt("Enter User Name: ")?;
    let removed = services::delete_user(st, &name).await?;
    term.say(&format!(
        "User '{}' deleted ({} food entries, {} goals, {} meal plans removed).",
        name.trim(),
        removed.food_entries,
        removed.goals,
        removed.meal_plans
    ))?;
    Ok(())
}
