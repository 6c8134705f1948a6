//! Application state owned by the controller.

/// A navigation tab of the logged-in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Generate,
    MyRecipes,
    Discover,
    Statistics,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Generate,
        Tab::MyRecipes,
        Tab::Discover,
        Tab::Statistics,
        Tab::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Generate => "generate",
            Tab::MyRecipes => "my-recipes",
            Tab::Discover => "discover",
            Tab::Statistics => "statistics",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Generate => "Generate",
            Tab::MyRecipes => "My Recipes",
            Tab::Discover => "Discover",
            Tab::Statistics => "Statistics",
            Tab::Settings => "Settings",
        }
    }
}

/// The last successful generation, kept so it can be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecipe {
    pub input: String,
    pub markup: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub user: Option<String>,
    pub current_tab: Tab,
    pub is_loading: bool,
    pub current_recipe: Option<GeneratedRecipe>,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
