//! Command dispatch for the interactive shell.
//!
//! Menus only map keys to [`Command`]s; [`dispatch`] maps each command to its handler.

pub mod menus;

use crate::console::Terminal;
use crate::error::Result;
use crate::state::AppState;
use crate::{food, goals, meal_plans, users};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateUser,
    ListUsers,
    FindUser,
    RenameUser,
    DeleteUser,
    AddFoodEntry,
    ListFoodEntries,
    UpdateFoodEntry,
    DeleteFoodEntry,
    DailySummary,
    WeeklySummary,
    CalorieTotals,
    SetGoal,
    ListGoals,
    ShowCurrentGoal,
    UpdateGoal,
    DeleteGoal,
    SetMealPlan,
    ViewWeek,
    ViewIsoWeek,
    GenerateWeek,
    ListMealPlans,
    DeleteMealPlan,
}

pub async fn dispatch(command: Command, st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    match command {
        Command::CreateUser => users::handlers::create_user(st, term).await,
        Command::ListUsers => users::handlers::list_users(st, term).await,
        Command::FindUser => users::handlers::find_user(st, term).await,
        Command::RenameUser => users::handlers::rename_user(st, term).await,
        Command::DeleteUser => users::handlers::delete_user(st, term).await,
        Command::AddFoodEntry => food::handlers::add_food_entry(st, term).await,
        Command::ListFoodEntries => food::handlers::list_food_entries(st, term).await,
        Command::UpdateFoodEntry => food::handlers::update_food_entry(st, term).await,
        Command::DeleteFoodEntry => food::handlers::delete_food_entry(st, term).await,
        Command::DailySummary => food::handlers::daily_summary(st, term).await,
        Command::WeeklySummary => food::handlers::weekly_summary(st, term).await,
        Command::CalorieTotals => food::handlers::calorie_totals(st, term).await,
        Command::SetGoal => goals::handlers::set_goal(st, term).await,
        Command::ListGoals => goals::handlers::list_goals(st, term).await,
        Command::ShowCurrentGoal => goals::handlers::show_current_goal(st, term).await,
        Command::UpdateGoal => goals::handlers::update_goal(st, term).await,
        Command::DeleteGoal => goals::handlers::delete_goal(st, term).await,
        Command::SetMealPlan => meal_plans::handlers::set_meal_plan(st, term).await,
        Command::ViewWeek => meal_plans::handlers::view_week(st, term).await,
        Command::ViewIsoWeek => meal_plans::handlers::view_iso_week(st, term).await,
        Command::GenerateWeek => meal_plans::handlers::generate_week(st, term).await,
        Command::ListMealPlans => meal_plans::handlers::list_meal_plans(st, term).await,
        Command::DeleteMealPlan => meal_plans::handlers::delete_meal_plan(st, term).await,
    }
}
