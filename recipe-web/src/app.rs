use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{GenerateRequest, HttpRecipeApi};
use crate::components::discover::DiscoverPanel;
use crate::components::generate_panel::GeneratePanel;
use crate::components::home::HomePage;
use crate::components::login_form::LoginForm;
use crate::components::modal::RecipeModal;
use crate::components::nav::NavMenu;
use crate::components::recipe_list::RecipeList;
use crate::components::settings::SettingsPanel;
use crate::components::statistics::StatisticsPanel;
use crate::components::toast::{ToastContainer, ToastMessage, show_toast};
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::presenter::{
    Busy, ConnectionStatus, Notice, NoticeTarget, Presenter, Statistics,
};
use crate::state::Tab;
use crate::storage::BrowserStorage;
use crate::storage::recipes::{Recipe, RecipeId};
use crate::storage::settings::Theme;

type WebController = Controller<BrowserStorage, HttpRecipeApi, WebPresenter>;

/// [`Presenter`] backed by Leptos signals.
#[derive(Debug, Clone, Copy)]
pub struct WebPresenter {
    user: RwSignal<Option<String>>,
    tab: RwSignal<Tab>,
    login_busy: RwSignal<bool>,
    generate_busy: RwSignal<bool>,
    loading: RwSignal<bool>,
    login_message: RwSignal<Option<Notice>>,
    toasts: RwSignal<Vec<ToastMessage>>,
    recipe_markup: RwSignal<Option<String>>,
    recipes: RwSignal<Vec<Recipe>>,
    detail: RwSignal<Option<Recipe>>,
    stats: RwSignal<Statistics>,
    language: RwSignal<String>,
    theme: RwSignal<Theme>,
    connection: RwSignal<ConnectionStatus>,

    // Form fields
    username: RwSignal<String>,
    password: RwSignal<String>,
    input: RwSignal<String>,
    cuisine: RwSignal<String>,
    difficulty: RwSignal<String>,
    prep_time: RwSignal<String>,

    notice_duration_ms: u32,
}

impl WebPresenter {
    pub fn new(notice_duration_ms: u32) -> Self {
        Self {
            user: RwSignal::new(None),
            tab: RwSignal::new(Tab::default()),
            login_busy: RwSignal::new(false),
            generate_busy: RwSignal::new(false),
            loading: RwSignal::new(false),
            login_message: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            recipe_markup: RwSignal::new(None),
            recipes: RwSignal::new(Vec::new()),
            detail: RwSignal::new(None),
            stats: RwSignal::new(Statistics::default()),
            language: RwSignal::new("en".to_string()),
            theme: RwSignal::new(Theme::default()),
            connection: RwSignal::new(ConnectionStatus::default()),
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            input: RwSignal::new(String::new()),
            cuisine: RwSignal::new("any".to_string()),
            difficulty: RwSignal::new("easy".to_string()),
            prep_time: RwSignal::new("30".to_string()),
            notice_duration_ms,
        }
    }

    fn generate_form(&self) -> GenerateRequest {
        GenerateRequest {
            input: self.input.get_untracked(),
            cuisine: self.cuisine.get_untracked(),
            difficulty: self.difficulty.get_untracked(),
            prep_time: self.prep_time.get_untracked(),
        }
    }
}

impl Presenter for WebPresenter {
    fn show_home(&self) {
        self.user.set(None);
        self.tab.set(Tab::default());
    }

    fn show_logged_in(&self, username: &str) {
        self.user.set(Some(username.to_string()));
    }

    fn show_tab(&self, tab: Tab) {
        self.tab.set(tab);
    }

    fn set_busy(&self, what: Busy, busy: bool) {
        match what {
            Busy::Login => self.login_busy.set(busy),
            Busy::Generate => self.generate_busy.set(busy),
        }
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn notify(&self, notice: Notice, target: NoticeTarget) {
        match target {
            NoticeTarget::Login => self.login_message.set(Some(notice)),
            NoticeTarget::Global => show_toast(self.toasts, notice, self.notice_duration_ms),
        }
    }

    fn show_recipe(&self, markup: &str) {
        self.recipe_markup.set(Some(markup.to_string()));
    }

    fn render_recipes(&self, recipes: &[Recipe]) {
        self.recipes.set(recipes.to_vec());
    }

    fn show_recipe_detail(&self, recipe: &Recipe) {
        self.detail.set(Some(recipe.clone()));
    }

    fn render_statistics(&self, stats: Statistics) {
        self.stats.set(stats);
    }

    fn render_settings(&self, language: Option<&str>, theme: Theme) {
        if let Some(language) = language {
            self.language.set(language.to_string());
        }
        self.theme.set(theme);
    }

    fn apply_theme(&self, theme: Theme) {
        self.theme.set(theme);
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body
                .class_list()
                .toggle_with_force("dark-theme", theme == Theme::Dark);
        }
    }

    fn set_connection(&self, status: ConnectionStatus) {
        self.connection.set(status);
    }

    fn clear_forms(&self) {
        self.username.set(String::new());
        self.password.set(String::new());
        self.input.set(String::new());
        self.recipe_markup.set(None);
        self.login_message.set(None);
    }

    fn confirm(&self, question: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false)
    }
}

fn connection_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Checking => "Checking...",
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Disconnected => "Disconnected",
    }
}

fn connection_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Checking => "status-checking",
        ConnectionStatus::Connected => "status-connected",
        ConnectionStatus::Disconnected => "status-disconnected",
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    let presenter = WebPresenter::new(config.notice_duration_ms);
    let controller: WebController =
        Controller::new(BrowserStorage, HttpRecipeApi::new(config), presenter);
    if let Some(language) = controller.settings().language() {
        presenter.language.set(language);
    }
    let controller = StoredValue::new_local(controller);

    // Restore session and probe the backend on mount
    let c = controller.get_value();
    spawn_local(async move { c.start().await });

    // Callbacks
    let on_login = Callback::new(move |_: ()| {
        let c = controller.get_value();
        let username = presenter.username.get_untracked();
        let password = presenter.password.get_untracked();
        spawn_local(async move { c.login(&username, &password).await });
    });

    let on_logout = Callback::new(move |_: ()| {
        let c = controller.get_value();
        spawn_local(async move { c.logout().await });
    });

    let on_select_tab = Callback::new(move |tab: Tab| {
        controller.get_value().show_tab(tab);
    });

    let on_generate = Callback::new(move |_: ()| {
        let c = controller.get_value();
        let form = presenter.generate_form();
        spawn_local(async move { c.generate(form).await });
    });

    let on_save = Callback::new(move |_: ()| {
        controller.get_value().save_current_recipe();
    });

    let on_view = Callback::new(move |id: RecipeId| {
        controller.get_value().view_recipe(&id);
    });

    let on_delete = Callback::new(move |id: RecipeId| {
        controller.get_value().delete_recipe(&id);
    });

    let on_setting_change = Callback::new(move |(name, value): (String, String)| {
        controller.get_value().change_setting(&name, &value);
    });

    let logged_in = move || presenter.user.get().is_some();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1 class="app-title">"AI Recipe Generator"</h1>
                <span
                    id="connection-status"
                    class=move || connection_class(presenter.connection.get())
                >
                    {move || connection_label(presenter.connection.get())}
                </span>
                <Show when=logged_in>
                    <div id="user-info" class="user-info">
                        <span id="user-name">{move || presenter.user.get().unwrap_or_default()}</span>
                        <button class="btn-secondary" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </header>

            // Logged out: landing page and login form
            <Show when=move || !logged_in()>
                <main class="home-layout">
                    <HomePage />
                    <LoginForm
                        username=presenter.username
                        password=presenter.password
                        busy=presenter.login_busy.into()
                        message=presenter.login_message.into()
                        on_login=on_login
                    />
                </main>
            </Show>

            // Logged in: tab navigation and the active tab
            <Show when=logged_in>
                <NavMenu active=presenter.tab.into() on_select=on_select_tab />
                <main id="app-interface" class="main-content">
                    {move || match presenter.tab.get() {
                        Tab::Generate => view! {
                            <GeneratePanel
                                input=presenter.input
                                cuisine=presenter.cuisine
                                difficulty=presenter.difficulty
                                prep_time=presenter.prep_time
                                busy=presenter.generate_busy.into()
                                loading=presenter.loading.into()
                                recipe=presenter.recipe_markup.into()
                                on_generate=on_generate
                                on_save=on_save
                            />
                        }.into_any(),
                        Tab::MyRecipes => view! {
                            <RecipeList
                                recipes=presenter.recipes.into()
                                on_view=on_view
                                on_delete=on_delete
                            />
                        }.into_any(),
                        Tab::Discover => view! { <DiscoverPanel /> }.into_any(),
                        Tab::Statistics => view! {
                            <StatisticsPanel stats=presenter.stats.into() />
                        }.into_any(),
                        Tab::Settings => view! {
                            <SettingsPanel
                                language=presenter.language.into()
                                theme=presenter.theme.into()
                                on_change=on_setting_change
                            />
                        }.into_any(),
                    }}
                </main>
            </Show>

            <RecipeModal recipe=presenter.detail />

            <ToastContainer
                toasts=presenter.toasts.into()
                on_dismiss=Callback::new(move |id: usize| {
                    presenter.toasts.update(|t| t.retain(|m| m.id != id));
                })
            />
        </div>
    }
}
