use super::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Users,
    Food,
    Goals,
    MealPlans,
}

/// What choosing a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Open(Menu),
    Run(Command),
    Back,
    Exit,
}

pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub target: Target,
}

const fn item(key: &'static str, label: &'static str, target: Target) -> MenuItem {
    MenuItem { key, label, target }
}

const MAIN: &[MenuItem] = &[
    item("1", "Manage Users", Target::Open(Menu::Users)),
    item("2", "Manage Food Entries", Target::Open(Menu::Food)),
    item("3", "Manage Goals", Target::Open(Menu::Goals)),
    item("4", "Manage Meal Plans", Target::Open(Menu::MealPlans)),
    item("5", "Exit", Target::Exit),
];

const USERS: &[MenuItem] = &[
    item("1", "Create User", Target::Run(Command::CreateUser)),
    item("2", "List Users", Target::Run(Command::ListUsers)),
    item("3", "Find User", Target::Run(Command::FindUser)),
    item("4", "Rename User", Target::Run(Command::RenameUser)),
    item("5", "Delete User", Target::Run(Command::DeleteUser)),
    item("6", "Back to Main Menu", Target::Back),
];

const FOOD: &[MenuItem] = &[
    item("1", "Add Food Entry", Target::Run(Command::AddFoodEntry)),
    item("2", "List Food Entries", Target::Run(Command::ListFoodEntries)),
    item("3", "Update Food Entry", Target::Run(Command::UpdateFoodEntry)),
    item("4", "Delete Food Entry", Target::Run(Command::DeleteFoodEntry)),
    item("5", "Daily Summary", Target::Run(Command::DailySummary)),
    item("6", "Weekly Summary", Target::Run(Command::WeeklySummary)),
    item("7", "Calorie Totals", Target::Run(Command::CalorieTotals)),
    item("8", "Back to Main Menu", Target::Back),
];

const GOALS: &[MenuItem] = &[
    item("1", "Set Goal", Target::Run(Command::SetGoal)),
    item("2", "List Goals", Target::Run(Command::ListGoals)),
    item("3", "Show Current Goal", Target::Run(Command::ShowCurrentGoal)),
    item("4", "Update Goal", Target::Run(Command::UpdateGoal)),
    item("5", "Delete Goal", Target::Run(Command::DeleteGoal)),
    item("6", "Back to Main Menu", Target::Back),
];

const MEAL_PLANS: &[MenuItem] = &[
    item("1", "Plan a Day", Target::Run(Command::SetMealPlan)),
    item("2", "View Week", Target::Run(Command::ViewWeek)),
    item("3", "View Week by Number", Target::Run(Command::ViewIsoWeek)),
    item("4", "Generate Weekly Plan", Target::Run(Command::GenerateWeek)),
    item("5", "List All Plans", Target::Run(Command::ListMealPlans)),
    item("6", "Delete Day Plan", Target::Run(Command::DeleteMealPlan)),
    item("7", "Back to Main Menu", Target::Back),
];

impl Menu {
    pub fn title(self) -> &'static str {
        match self {
            Menu::Main => "=== Health Tracker ===",
            Menu::Users => "--- Users ---",
            Menu::Food => "--- Food Entries ---",
            Menu::Goals => "--- Goals ---",
            Menu::MealPlans => "--- Meal Plans ---",
        }
    }

    pub fn items(self) -> &'static [MenuItem] {
        match self {
            Menu::Main => MAIN,
            Menu::Users => USERS,
            Menu::Food => FOOD,
            Menu::Goals => GOALS,
            Menu::MealPlans => MEAL_PLANS,
        }
    }

    pub fn select(self, key: &str) -> Option<Target> {
        let key = key.trim();
        self.items()
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.target)
    }
}
