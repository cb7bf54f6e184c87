use tracing::{debug, warn};

use crate::console::Terminal;
use crate::error::Result;
use crate::routes::dispatch;
use crate::routes::menus::{Menu, Target};
use crate::state::AppState;

fn render(term: &mut dyn Terminal, menu: Menu) -> Result<()> {
    term.say("")?;
    term.say(menu.title())?;
    for item in menu.items() {
        term.say(&format!("{}. {}", item.key, item.label))?;
    }
    Ok(())
}

/// Drive the menu until the user exits or input runs out.
///
/// User-facing failures are reported and the menu continues; anything else ends the
/// session with the error.
pub async fn run(st: &AppState, term: &mut dyn Terminal) -> Result<()> {
    debug!(database_url = %st.config.database_url, "shell started");
    let mut stack = vec![Menu::Main];

    while let Some(&menu) = stack.last() {
        render(term, menu)?;
        let choice = match term.prompt("Select an option: ") {
            Ok(choice) => choice,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };

        match menu.select(&choice) {
            Some(Target::Open(next)) => stack.push(next),
            Some(Target::Back) => {
                stack.pop();
            }
            Some(Target::Exit) => {
                term.say("Exiting. Goodbye!")?;
                return Ok(());
            }
            Some(Target::Run(command)) => match dispatch(command, st, term).await {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!(?command, error = %e, "command rejected");
                    term.say(&format!("Error: {e}"))?;
                }
                Err(e) if e.is_end_of_input() => {
                    warn!(?command, "input ended mid-command");
                    term.say("")?;
                    term.say("Input ended before the command finished; nothing was saved.")?;
                    break;
                }
                Err(e) => return Err(e),
            },
            None => term.say("Invalid option.")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod shell_tests {
    use super::*;
    use crate::console::Console;
    use crate::food::services::{daily_total, food_entries_for};
    use crate::meal_plans::services::list_meal_plans;
    use crate::users::services::list_users;
    use std::io::Cursor;
    use time::macros::date;

    async fn session(st: &AppState, script: &str) -> String {
        let mut term = Console::new(Cursor::new(script.to_string()), Vec::new());
        run(st, &mut term).await.unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[tokio::test]
    async fn create_user_log_food_and_summarise() {
        let st = AppState::in_memory().await.unwrap();
        let script = "1\n1\nBob\n6\n\
                      2\n1\nBob\nBanana\n105\n2024-01-10\n\
                      5\nBob\n2024-01-10\n8\n5\n";
        let out = session(&st, script).await;

        assert!(out.contains("User 'Bob' created successfully."));
        assert!(out.contains("Food entry added successfully."));
        assert!(out.contains("Total: 105 cal (no goal set)"));
        assert!(out.ends_with("Exiting. Goodbye!\n"));
        assert_eq!(daily_total(&st, "Bob", date!(2024 - 01 - 10)).await.unwrap(), 105);
    }

    #[tokio::test]
    async fn bad_input_is_reported_and_nothing_is_written() {
        let st = AppState::in_memory().await.unwrap();
        let script = "1\n1\nBob\n1\nBob\n6\n\
                      2\n1\nBob\nApple\nninety\n\
                      1\nBob\nApple\n95\n10/01/2024\n8\n5\n";
        let out = session(&st, script).await;

        assert!(out.contains("Error: a user named 'Bob' already exists"));
        assert!(out.contains("Error: invalid input: calories must be a non-negative whole number"));
        assert!(out.contains("is not a YYYY-MM-DD date"));
        assert_eq!(list_users(&st).await.unwrap().len(), 1);
        assert!(food_entries_for(&st, None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn week_plan_on_wednesday_is_refused() {
        let st = AppState::in_memory().await.unwrap();
        let script = "1\n1\nDaisy\n6\n4\n4\nDaisy\n2024-01-10\n7\n5\n";
        let out = session(&st, script).await;

        assert!(out.contains("Error: invalid date: 2024-01-10 is a Wednesday"));
        assert!(!out.contains("Meal for"));
        assert!(list_meal_plans(&st, "Daisy").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn weekly_view_prints_seven_lines() {
        let st = AppState::in_memory().await.unwrap();
        let script = "1\n1\nDaisy\n6\n4\n1\nDaisy\n2024-01-09\nSmoothie\n2\nDaisy\n2024-01-08\n7\n5\n";
        let out = session(&st, script).await;

        let week: Vec<_> = out
            .lines()
            .filter(|l| l.contains(" 2024-01-") && l.contains(" | "))
            .collect();
        assert_eq!(week.len(), 7, "{out}");
        assert!(week[0].ends_with("Monday    2024-01-08 | (no plan)"));
        assert!(week[1].ends_with("Tuesday   2024-01-09 | Smoothie"));
        assert!(week[6].ends_with("Sunday    2024-01-14 | (no plan)"));
    }

    #[tokio::test]
    async fn find_user_and_calorie_totals() {
        let st = AppState::in_memory().await.unwrap();
        let script = "1\n1\nEve\n3\nEve\n6\n\
                      2\n1\nEve\nOats\n300\n2024-01-08\n\
                      1\nEve\nSoup\n250\n2024-01-14\n\
                      7\nEve\n2024-01-08\n8\n5\n";
        let out = session(&st, script).await;

        assert!(out.contains("Name: Eve | Created At: "));
        assert!(out.contains("2024-01-08: 300 cal"));
        assert!(out.contains("2024-01-08 to 2024-01-14: 550 cal"));
    }

    #[tokio::test]
    async fn unknown_option_and_end_of_input() {
        let st = AppState::in_memory().await.unwrap();
        let out = session(&st, "9\n1\n1\n").await;
        assert!(out.contains("Invalid option."));
        assert!(!out.contains("Goodbye"));
        assert!(out.ends_with("Input ended before the command finished; nothing was saved.\n"));
        assert!(list_users(&st).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn end_of_input_at_the_menu_is_quiet() {
        let st = AppState::in_memory().await.unwrap();
        let out = session(&st, "1\n").await;
        assert!(!out.contains("Input ended"));
        assert!(out.ends_with("Select an option: "));
    }

    #[tokio::test]
    async fn calorie_totals_near_the_end_of_the_calendar() {
        let st = AppState::in_memory().await.unwrap();
        let script = "1\n1\nEve\n6\n2\n7\nEve\n9999-12-31\n\
                      6\nEve\n9999-12-27\n8\n5\n";
        let out = session(&st, script).await;

        assert!(out.contains("Error: invalid date: the week starting 9999-12-31 runs past"));
        assert!(out.contains("Error: invalid date: the week starting 9999-12-27 runs past"));
        assert!(out.ends_with("Exiting. Goodbye!\n"));
    }
}
