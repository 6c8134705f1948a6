//! Front-end controller: turns UI events into store updates, backend calls
//! and presenter updates.
//!
//! All methods take `&self`. State lives in a `RefCell` that is only borrowed
//! between awaits, so overlapping events on the browser thread cannot panic.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use crate::api::{GenerateRequest, RecipeApi};
use crate::error::StorageError;
use crate::presenter::{Busy, ConnectionStatus, Notice, NoticeTarget, Presenter, Statistics};
use crate::state::{AppState, GeneratedRecipe, Tab};
use crate::storage::KeyValueStore;
use crate::storage::history::{HistoryEntry, HistoryLog};
use crate::storage::recipes::{RecipeCollection, RecipeId};
use crate::storage::session::SessionStore;
use crate::storage::settings::{SETTING_LANGUAGE, SETTING_THEME, SettingsStore, Theme};

#[derive(Clone)]
pub struct Controller<S, A, P> {
    state: Rc<RefCell<AppState>>,
    session: SessionStore<S>,
    recipes: RecipeCollection<S>,
    history: HistoryLog<S>,
    settings: SettingsStore<S>,
    api: A,
    presenter: P,
}

impl<S, A, P> Controller<S, A, P>
where
    S: KeyValueStore,
    A: RecipeApi,
    P: Presenter,
{
    pub fn new(store: S, api: A, presenter: P) -> Self {
        Self {
            state: Rc::new(RefCell::new(AppState::default())),
            session: SessionStore::new(store.clone()),
            recipes: RecipeCollection::new(store.clone()),
            history: HistoryLog::new(store.clone()),
            settings: SettingsStore::new(store),
            api,
            presenter,
        }
    }

    /// Snapshot of the current application state.
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn recipes(&self) -> &RecipeCollection<S> {
        &self.recipes
    }

    pub fn settings(&self) -> &SettingsStore<S> {
        &self.settings
    }

    /// Restore the saved session and theme, then probe the backend.
    pub async fn start(&self) {
        tracing::info!("initializing recipe app");
        self.presenter.apply_theme(self.settings.theme());

        match self.session.restore() {
            Some(session) => {
                self.state.borrow_mut().user = Some(session.username.clone());
                self.enter_logged_in(&session.username);
                self.presenter.notify(
                    Notice::success(format!("Welcome back, {}!", session.username)),
                    NoticeTarget::Global,
                );
            }
            None => self.presenter.show_home(),
        }

        self.check_connection().await;
    }

    pub async fn login(&self, username: &str, password: &str) {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            self.presenter.notify(
                Notice::error("Please enter both username and password"),
                NoticeTarget::Login,
            );
            return;
        }

        self.presenter.set_busy(Busy::Login, true);
        let result = self.api.login(username, password).await;
        self.presenter.set_busy(Busy::Login, false);

        match result {
            Ok(response) if response.success => {
                tracing::info!(username, "logged in");
                self.state.borrow_mut().user = Some(username.to_string());
                if let Err(e) = self.session.save(username) {
                    self.report_storage_error(e);
                }
                self.presenter.notify(
                    Notice::success(format!("Login successful! Welcome {}", username)),
                    NoticeTarget::Login,
                );
                self.enter_logged_in(username);
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Login failed".to_string());
                self.presenter
                    .notify(Notice::error(message), NoticeTarget::Login);
            }
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                self.presenter.notify(
                    Notice::error("Connection error. Please try again."),
                    NoticeTarget::Login,
                );
            }
        }
    }

    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::debug!(error = %e, "logout request failed");
        }

        {
            let mut state = self.state.borrow_mut();
            state.user = None;
            state.current_recipe = None;
        }
        self.session.clear();

        self.presenter.show_home();
        self.presenter.clear_forms();
        self.presenter.notify(
            Notice::success("You have been logged out"),
            NoticeTarget::Global,
        );
    }

    pub fn show_tab(&self, tab: Tab) {
        self.state.borrow_mut().current_tab = tab;
        self.presenter.show_tab(tab);

        match tab {
            Tab::Generate | Tab::Discover => {}
            Tab::MyRecipes => self.presenter.render_recipes(&self.recipes.list()),
            Tab::Statistics => self.presenter.render_statistics(self.statistics()),
            Tab::Settings => {
                let theme = self.settings.theme();
                self.presenter
                    .render_settings(self.settings.language().as_deref(), theme);
                self.presenter.apply_theme(theme);
            }
        }
        tracing::debug!(tab = tab.as_str(), "switched tab");
    }

    pub async fn generate(&self, mut form: GenerateRequest) {
        form.input = form.input.trim().to_string();
        if form.input.is_empty() {
            self.presenter.notify(
                Notice::error("Please describe what you want to cook"),
                NoticeTarget::Global,
            );
            return;
        }

        self.set_loading(true);
        self.presenter.set_busy(Busy::Generate, true);
        let result = self.api.generate_recipe(&form).await;
        self.presenter.set_busy(Busy::Generate, false);
        self.set_loading(false);

        match result {
            Ok(response) if response.success => {
                let markup = response.recipe.unwrap_or_default();
                self.state.borrow_mut().current_recipe = Some(GeneratedRecipe {
                    input: form.input.clone(),
                    markup: markup.clone(),
                });
                self.presenter.show_recipe(&markup);

                let entry = HistoryEntry {
                    input: form.input,
                    recipe: markup,
                    timestamp: Utc::now(),
                };
                if let Err(e) = self.history.append(entry) {
                    self.report_storage_error(e);
                }
            }
            Ok(_) => {
                self.presenter.notify(
                    Notice::error("Failed to generate recipe. Please try again."),
                    NoticeTarget::Global,
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "generate request failed");
                self.presenter.notify(
                    Notice::error("Connection error. Please check your internet connection."),
                    NoticeTarget::Global,
                );
            }
        }
    }

    pub fn save_current_recipe(&self) {
        let Some(current) = self.state.borrow().current_recipe.clone() else {
            self.presenter
                .notify(Notice::error("Generate a recipe first"), NoticeTarget::Global);
            return;
        };

        match self
            .recipes
            .create(&current.input, &current.markup, Utc::now())
        {
            Ok(recipe) => {
                tracing::debug!(id = %recipe.id, "recipe saved");
                self.presenter.notify(
                    Notice::success("Recipe saved successfully!"),
                    NoticeTarget::Global,
                );
            }
            Err(e) => self.report_storage_error(e),
        }
    }

    pub fn view_recipe(&self, id: &RecipeId) {
        match self.recipes.find(id) {
            Some(recipe) => self.presenter.show_recipe_detail(&recipe),
            None => self
                .presenter
                .notify(Notice::error("Recipe not found"), NoticeTarget::Global),
        }
    }

    pub fn delete_recipe(&self, id: &RecipeId) {
        if !self
            .presenter
            .confirm("Are you sure you want to delete this recipe?")
        {
            return;
        }

        if let Err(e) = self.recipes.remove(id) {
            self.report_storage_error(e);
            return;
        }
        self.presenter.render_recipes(&self.recipes.list());
        self.presenter.notify(
            Notice::success("Recipe deleted successfully"),
            NoticeTarget::Global,
        );
    }

    pub fn change_setting(&self, name: &str, value: &str) {
        if let Err(e) = self.settings.set(name, value) {
            self.report_storage_error(e);
            return;
        }

        let message = match name {
            SETTING_LANGUAGE => "Language setting saved".to_string(),
            SETTING_THEME => {
                self.presenter.apply_theme(Theme::from_setting(value));
                "Theme setting saved".to_string()
            }
            other => format!("Setting '{}' saved", other),
        };
        self.presenter
            .notify(Notice::success(message), NoticeTarget::Global);
    }

    pub async fn check_connection(&self) {
        let status = match self.api.test_connection().await {
            Ok(response) if response.status == "success" => ConnectionStatus::Connected,
            Ok(response) => {
                tracing::warn!(status = %response.status, "backend reported unexpected status");
                ConnectionStatus::Disconnected
            }
            Err(e) => {
                tracing::warn!(error = %e, "backend unreachable");
                ConnectionStatus::Disconnected
            }
        };
        self.presenter.set_connection(status);
    }

    pub fn statistics(&self) -> Statistics {
        let history = self.history.list();
        Statistics {
            saved_recipes: self.recipes.len(),
            generations: history.len(),
            last_generated: history.first().map(|e| e.timestamp),
        }
    }

    fn enter_logged_in(&self, username: &str) {
        self.presenter.show_logged_in(username);
        self.show_tab(Tab::Generate);
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().is_loading = loading;
        self.presenter.set_loading(loading);
    }

    fn report_storage_error(&self, error: StorageError) {
        tracing::warn!(error = %error, "local storage write failed");
        self.presenter.notify(
            Notice::error("Could not save to browser storage"),
            NoticeTarget::Global,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use async_trait::async_trait;

    use crate::api::{GenerateResponse, LoginResponse, TestResponse};
    use crate::error::ApiError;
    use crate::presenter::NoticeKind;
    use crate::storage::recipes::Recipe;
    use crate::storage::{MemoryStore, STORAGE_USER};

    #[derive(Clone)]
    struct FakeApi {
        login: Result<LoginResponse, ApiError>,
        generate: Result<GenerateResponse, ApiError>,
        test: Result<TestResponse, ApiError>,
        logout_calls: Rc<Cell<usize>>,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                login: Ok(LoginResponse {
                    success: true,
                    message: Some("Login successful".to_string()),
                }),
                generate: Ok(GenerateResponse {
                    success: true,
                    recipe: Some("<div class=\"recipe-card\">Soup</div>".to_string()),
                }),
                test: Ok(TestResponse {
                    status: "success".to_string(),
                    message: None,
                }),
                logout_calls: Rc::new(Cell::new(0)),
            }
        }
    }

    #[async_trait(?Send)]
    impl RecipeApi for FakeApi {
        async fn login(&self, _: &str, _: &str) -> Result<LoginResponse, ApiError> {
            self.login.clone()
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            Err(ApiError::Network("offline".to_string()))
        }

        async fn generate_recipe(&self, _: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
            self.generate.clone()
        }

        async fn test_connection(&self) -> Result<TestResponse, ApiError> {
            self.test.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Home,
        LoggedIn(String),
        Tab(Tab),
        Busy(Busy, bool),
        Loading(bool),
        Notice(Notice, NoticeTarget),
        Recipe(String),
        Recipes(Vec<RecipeId>),
        Detail(RecipeId),
        Stats(Statistics),
        Settings(Option<String>, Theme),
        Theme(Theme),
        Connection(ConnectionStatus),
        ClearForms,
        Confirm,
    }

    #[derive(Clone, Default)]
    struct RecordingPresenter {
        events: Rc<RefCell<Vec<Event>>>,
        refuse_confirm: Rc<Cell<bool>>,
    }

    impl RecordingPresenter {
        fn push(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn notices(&self) -> Vec<(Notice, NoticeTarget)> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Notice(n, t) => Some((n, t)),
                    _ => None,
                })
                .collect()
        }

        fn last_notice(&self) -> (Notice, NoticeTarget) {
            self.notices().pop().expect("no notice shown")
        }
    }

    impl Presenter for RecordingPresenter {
        fn show_home(&self) {
            self.push(Event::Home);
        }
        fn show_logged_in(&self, username: &str) {
            self.push(Event::LoggedIn(username.to_string()));
        }
        fn show_tab(&self, tab: Tab) {
            self.push(Event::Tab(tab));
        }
        fn set_busy(&self, what: Busy, busy: bool) {
            self.push(Event::Busy(what, busy));
        }
        fn set_loading(&self, loading: bool) {
            self.push(Event::Loading(loading));
        }
        fn notify(&self, notice: Notice, target: NoticeTarget) {
            self.push(Event::Notice(notice, target));
        }
        fn show_recipe(&self, markup: &str) {
            self.push(Event::Recipe(markup.to_string()));
        }
        fn render_recipes(&self, recipes: &[Recipe]) {
            self.push(Event::Recipes(recipes.iter().map(|r| r.id.clone()).collect()));
        }
        fn show_recipe_detail(&self, recipe: &Recipe) {
            self.push(Event::Detail(recipe.id.clone()));
        }
        fn render_statistics(&self, stats: Statistics) {
            self.push(Event::Stats(stats));
        }
        fn render_settings(&self, language: Option<&str>, theme: Theme) {
            self.push(Event::Settings(language.map(str::to_string), theme));
        }
        fn apply_theme(&self, theme: Theme) {
            self.push(Event::Theme(theme));
        }
        fn set_connection(&self, status: ConnectionStatus) {
            self.push(Event::Connection(status));
        }
        fn clear_forms(&self) {
            self.push(Event::ClearForms);
        }
        fn confirm(&self, _question: &str) -> bool {
            self.push(Event::Confirm);
            !self.refuse_confirm.get()
        }
    }

    type TestController = Controller<MemoryStore, FakeApi, RecordingPresenter>;

    /// Memory store whose writes can be switched to fail, like a full localStorage.
    #[derive(Clone, Default)]
    struct QuotaStore {
        inner: MemoryStore,
        full: Rc<Cell<bool>>,
    }

    impl KeyValueStore for QuotaStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.full.get() {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    message: "QuotaExceededError".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) {
            self.inner.delete(key);
        }
    }

    fn quota_controller() -> (
        Controller<QuotaStore, FakeApi, RecordingPresenter>,
        QuotaStore,
        RecordingPresenter,
    ) {
        let store = QuotaStore::default();
        let presenter = RecordingPresenter::default();
        let controller = Controller::new(store.clone(), FakeApi::default(), presenter.clone());
        (controller, store, presenter)
    }

    fn storage_failure() -> (Notice, NoticeTarget) {
        (
            Notice::error("Could not save to browser storage"),
            NoticeTarget::Global,
        )
    }

    fn controller_with(api: FakeApi) -> (TestController, MemoryStore, RecordingPresenter) {
        let store = MemoryStore::new();
        let presenter = RecordingPresenter::default();
        let controller = Controller::new(store.clone(), api, presenter.clone());
        (controller, store, presenter)
    }

    fn form(input: &str) -> GenerateRequest {
        GenerateRequest {
            input: input.to_string(),
            cuisine: "any".to_string(),
            difficulty: "easy".to_string(),
            prep_time: "30".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        controller.login("alice", "   ").await;

        let (notice, target) = presenter.last_notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Please enter both username and password");
        assert_eq!(target, NoticeTarget::Login);
        assert!(!controller.state().is_logged_in());
        assert!(store.is_empty());
        assert!(!presenter.events().contains(&Event::Busy(Busy::Login, true)));
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        controller.login(" alice ", "secret").await;

        assert_eq!(controller.state().user.as_deref(), Some("alice"));
        assert_eq!(
            store.get(STORAGE_USER).as_deref(),
            Some(r#"{"username":"alice"}"#)
        );

        let events = presenter.events();
        assert!(events.contains(&Event::Busy(Busy::Login, false)));
        assert!(events.contains(&Event::LoggedIn("alice".to_string())));
        assert_eq!(events.last(), Some(&Event::Tab(Tab::Generate)));
        assert!(presenter.notices().contains(&(
            Notice::success("Login successful! Welcome alice"),
            NoticeTarget::Login
        )));
    }

    #[tokio::test]
    async fn test_login_rejected_shows_backend_message() {
        let api = FakeApi {
            login: Ok(LoginResponse {
                success: false,
                message: Some("Invalid credentials".to_string()),
            }),
            ..FakeApi::default()
        };
        let (controller, store, presenter) = controller_with(api);
        controller.login("alice", "wrong").await;

        assert_eq!(
            presenter.last_notice(),
            (Notice::error("Invalid credentials"), NoticeTarget::Login)
        );
        assert!(!controller.state().is_logged_in());
        assert!(store.get(STORAGE_USER).is_none());
    }

    #[tokio::test]
    async fn test_login_network_error() {
        let api = FakeApi {
            login: Err(ApiError::Network("refused".to_string())),
            ..FakeApi::default()
        };
        let (controller, _, presenter) = controller_with(api);
        controller.login("alice", "secret").await;

        assert_eq!(
            presenter.last_notice().0.text,
            "Connection error. Please try again."
        );
        assert!(presenter.events().contains(&Event::Busy(Busy::Login, false)));
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_request_fails() {
        let api = FakeApi::default();
        let logout_calls = api.logout_calls.clone();
        let (controller, store, presenter) = controller_with(api);
        controller.login("alice", "secret").await;
        controller.logout().await;

        assert_eq!(logout_calls.get(), 1);
        assert!(!controller.state().is_logged_in());
        assert!(store.get(STORAGE_USER).is_none());

        let events = presenter.events();
        assert!(events.contains(&Event::Home));
        assert!(events.contains(&Event::ClearForms));
        assert_eq!(
            presenter.last_notice(),
            (Notice::success("You have been logged out"), NoticeTarget::Global)
        );
    }

    #[tokio::test]
    async fn test_start_restores_saved_session() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        SessionStore::new(store.clone()).save("bob").unwrap();
        controller.start().await;

        assert_eq!(controller.state().user.as_deref(), Some("bob"));
        let events = presenter.events();
        assert!(events.contains(&Event::LoggedIn("bob".to_string())));
        assert!(presenter
            .notices()
            .contains(&(Notice::success("Welcome back, bob!"), NoticeTarget::Global)));
        assert_eq!(
            events.last(),
            Some(&Event::Connection(ConnectionStatus::Connected))
        );
    }

    #[tokio::test]
    async fn test_start_with_corrupt_session_shows_home() {
        let api = FakeApi {
            test: Err(ApiError::Network("down".to_string())),
            ..FakeApi::default()
        };
        let (controller, store, presenter) = controller_with(api);
        store.set(STORAGE_USER, "garbage").unwrap();
        controller.start().await;

        assert!(!controller.state().is_logged_in());
        assert!(store.get(STORAGE_USER).is_none());
        let events = presenter.events();
        assert!(events.contains(&Event::Home));
        assert!(presenter.notices().is_empty());
        assert_eq!(
            events.last(),
            Some(&Event::Connection(ConnectionStatus::Disconnected))
        );
    }

    #[tokio::test]
    async fn test_start_applies_saved_theme() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        store.set("app_theme", "dark").unwrap();
        controller.start().await;
        assert_eq!(presenter.events()[0], Event::Theme(Theme::Dark));
    }

    #[tokio::test]
    async fn test_generate_requires_input() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        controller.generate(form("  ")).await;

        assert_eq!(
            presenter.last_notice(),
            (
                Notice::error("Please describe what you want to cook"),
                NoticeTarget::Global
            )
        );
        assert!(store.is_empty());
        assert!(!presenter.events().contains(&Event::Loading(true)));
    }

    #[tokio::test]
    async fn test_generate_records_history() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        controller.generate(form("tomato soup")).await;

        let state = controller.state();
        assert!(!state.is_loading);
        let current = state.current_recipe.unwrap();
        assert_eq!(current.input, "tomato soup");

        let history = HistoryLog::new(store).list();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].input, "tomato soup");
        assert_eq!(history[0].recipe, current.markup);

        let events = presenter.events();
        assert!(events.contains(&Event::Recipe(current.markup.clone())));
        assert!(events.contains(&Event::Loading(false)));
        assert!(presenter.notices().is_empty());
    }

    #[tokio::test]
    async fn test_generate_failure_leaves_history_untouched() {
        let api = FakeApi {
            generate: Ok(GenerateResponse {
                success: false,
                recipe: None,
            }),
            ..FakeApi::default()
        };
        let (controller, store, presenter) = controller_with(api);
        controller.generate(form("tomato soup")).await;

        assert!(HistoryLog::new(store).list().is_empty());
        assert!(controller.state().current_recipe.is_none());
        assert_eq!(
            presenter.last_notice().0.text,
            "Failed to generate recipe. Please try again."
        );
        assert!(presenter.events().contains(&Event::Busy(Busy::Generate, false)));
    }

    #[tokio::test]
    async fn test_generate_network_error() {
        let api = FakeApi {
            generate: Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
            ..FakeApi::default()
        };
        let (controller, _, presenter) = controller_with(api);
        controller.generate(form("tomato soup")).await;

        assert_eq!(
            presenter.last_notice().0.text,
            "Connection error. Please check your internet connection."
        );
        assert!(!controller.state().is_loading);
    }

    #[tokio::test]
    async fn test_save_view_and_delete_recipe() {
        let (controller, _, presenter) = controller_with(FakeApi::default());
        controller.generate(form("tomato soup")).await;
        controller.save_current_recipe();

        let saved = controller.recipes().list();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "tomato soup...");
        assert_eq!(
            presenter.last_notice().0.text,
            "Recipe saved successfully!"
        );

        let id = RecipeId::new(saved[0].id.to_string());
        controller.view_recipe(&id);
        assert_eq!(presenter.events().last(), Some(&Event::Detail(id.clone())));

        controller.delete_recipe(&id);
        assert!(controller.recipes().find(&id).is_none());
        assert!(presenter.events().contains(&Event::Recipes(vec![])));
        assert_eq!(
            presenter.last_notice().0.text,
            "Recipe deleted successfully"
        );
    }

    #[tokio::test]
    async fn test_delete_cancelled() {
        let (controller, _, presenter) = controller_with(FakeApi::default());
        controller.generate(form("stew")).await;
        controller.save_current_recipe();
        let id = controller.recipes().list()[0].id.clone();

        presenter.refuse_confirm.set(true);
        controller.delete_recipe(&id);
        assert!(controller.recipes().find(&id).is_some());
        assert_eq!(presenter.events().last(), Some(&Event::Confirm));
    }

    #[test]
    fn test_save_without_generation() {
        let (controller, _, presenter) = controller_with(FakeApi::default());
        controller.save_current_recipe();
        assert_eq!(
            presenter.last_notice(),
            (Notice::error("Generate a recipe first"), NoticeTarget::Global)
        );
        assert!(controller.recipes().is_empty());
    }

    #[test]
    fn test_view_missing_recipe() {
        let (controller, _, presenter) = controller_with(FakeApi::default());
        controller.view_recipe(&RecipeId::from(1));
        assert_eq!(presenter.last_notice().0.text, "Recipe not found");
    }

    #[test]
    fn test_theme_setting_applies_theme() {
        let (controller, store, presenter) = controller_with(FakeApi::default());
        controller.change_setting(SETTING_THEME, "dark");

        assert_eq!(store.get("app_theme").as_deref(), Some("dark"));
        let events = presenter.events();
        assert!(events.contains(&Event::Theme(Theme::Dark)));
        assert_eq!(presenter.last_notice().0.text, "Theme setting saved");
    }

    #[test]
    fn test_settings_tab_renders_saved_preferences() {
        let (controller, _, presenter) = controller_with(FakeApi::default());
        controller.change_setting(SETTING_LANGUAGE, "zh");
        controller.show_tab(Tab::Settings);

        assert_eq!(controller.state().current_tab, Tab::Settings);
        assert!(presenter
            .events()
            .contains(&Event::Settings(Some("zh".to_string()), Theme::Light)));
    }

    #[tokio::test]
    async fn test_statistics_tab_counts() {
        let (controller, _, presenter) = controller_with(FakeApi::default());
        controller.generate(form("soup")).await;
        controller.generate(form("salad")).await;
        controller.save_current_recipe();
        controller.show_tab(Tab::Statistics);

        let Some(Event::Stats(stats)) = presenter.events().pop() else {
            panic!("statistics not rendered");
        };
        assert_eq!(stats.saved_recipes, 1);
        assert_eq!(stats.generations, 2);
        assert!(stats.last_generated.is_some());
    }

    #[tokio::test]
    async fn test_unexpected_test_status_is_disconnected() {
        let api = FakeApi {
            test: Ok(TestResponse {
                status: "maintenance".to_string(),
                message: None,
            }),
            ..FakeApi::default()
        };
        let (controller, _, presenter) = controller_with(api);
        controller.check_connection().await;
        assert_eq!(
            presenter.events(),
            vec![Event::Connection(ConnectionStatus::Disconnected)]
        );
    }

    #[tokio::test]
    async fn test_save_recipe_with_full_storage() {
        let (controller, store, presenter) = quota_controller();
        controller.generate(form("soup")).await;
        store.full.set(true);
        controller.save_current_recipe();

        assert_eq!(presenter.last_notice(), storage_failure());
        assert!(controller.recipes().is_empty());
        assert!(controller.state().current_recipe.is_some());
    }

    #[tokio::test]
    async fn test_delete_recipe_with_full_storage() {
        let (controller, store, presenter) = quota_controller();
        controller.generate(form("soup")).await;
        controller.save_current_recipe();
        let id = controller.recipes().list()[0].id.clone();

        store.full.set(true);
        let before = presenter.events().len();
        controller.delete_recipe(&id);

        let after: Vec<_> = presenter.events().split_off(before);
        assert_eq!(
            after,
            vec![
                Event::Confirm,
                Event::Notice(storage_failure().0, storage_failure().1)
            ]
        );
        assert!(controller.recipes().find(&id).is_some());
    }

    #[test]
    fn test_change_setting_with_full_storage() {
        let (controller, store, presenter) = quota_controller();
        store.full.set(true);
        controller.change_setting(SETTING_THEME, "dark");

        assert_eq!(presenter.notices(), vec![storage_failure()]);
        assert!(!presenter.events().contains(&Event::Theme(Theme::Dark)));
        assert_eq!(controller.settings().theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_login_with_full_storage_still_logs_in() {
        let (controller, store, presenter) = quota_controller();
        store.full.set(true);
        controller.login("alice", "secret").await;

        assert_eq!(controller.state().user.as_deref(), Some("alice"));
        assert!(store.get(STORAGE_USER).is_none());
        let notices = presenter.notices();
        assert_eq!(notices[0], storage_failure());
        assert_eq!(
            notices[1],
            (
                Notice::success("Login successful! Welcome alice"),
                NoticeTarget::Login
            )
        );
        assert!(presenter.events().contains(&Event::LoggedIn("alice".to_string())));
    }

    #[tokio::test]
    async fn test_generate_with_full_storage_still_shows_recipe() {
        let (controller, store, presenter) = quota_controller();
        store.full.set(true);
        controller.generate(form("soup")).await;

        assert!(controller.state().current_recipe.is_some());
        assert_eq!(presenter.notices(), vec![storage_failure()]);
        assert!(!controller.state().is_loading);
    }
}
