use std::fmt;

use time::{Date, Weekday};

use crate::calendar::format_date;

/// One day of a weekly meal-plan view. `meal` is `None` when nothing is planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlot {
    pub day: Date,
    pub weekday: Weekday,
    pub meal: Option<String>,
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<9} {} | {}",
            self.weekday.to_string(),
            format_date(self.day),
            self.meal.as_deref().unwrap_or("(no plan)")
        )
    }
}
