//! The presentation interface the controller drives.

use chrono::{DateTime, Utc};

use crate::state::Tab;
use crate::storage::recipes::Recipe;
use crate::storage::settings::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Where a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTarget {
    /// Transient notification over the whole page.
    Global,
    /// Inline under the login form.
    Login,
}

/// A button that shows a spinner while its request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busy {
    Login,
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub saved_recipes: usize,
    pub generations: usize,
    pub last_generated: Option<DateTime<Utc>>,
}

/// Everything the controller needs from the UI.
pub trait Presenter {
    fn show_home(&self);

    fn show_logged_in(&self, username: &str);

    fn show_tab(&self, tab: Tab);

    fn set_busy(&self, what: Busy, busy: bool);

    fn set_loading(&self, loading: bool);

    fn notify(&self, notice: Notice, target: NoticeTarget);

    /// Display freshly generated recipe markup.
    fn show_recipe(&self, markup: &str);

    fn render_recipes(&self, recipes: &[Recipe]);

    fn show_recipe_detail(&self, recipe: &Recipe);

    fn render_statistics(&self, stats: Statistics);

    fn render_settings(&self, language: Option<&str>, theme: Theme);

    fn apply_theme(&self, theme: Theme);

    fn set_connection(&self, status: ConnectionStatus);

    fn clear_forms(&self);

    /// Ask the user a yes/no question.
    fn confirm(&self, question: &str) -> bool;
}
