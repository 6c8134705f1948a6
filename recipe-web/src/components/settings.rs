//! Language and theme preferences.

use leptos::prelude::*;

use crate::storage::settings::{SETTING_LANGUAGE, SETTING_THEME, Theme};

#[component]
pub fn SettingsPanel(
    language: Signal<String>,
    theme: Signal<Theme>,
    /// Called with `(setting name, new value)`.
    #[prop(into)]
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div id="settings-content" class="settings-grid">
            <div class="setting-item">
                <h3>"Language"</h3>
                <select
                    id="language-select"
                    prop:value=move || language.get()
                    on:change=move |ev| {
                        on_change.run((SETTING_LANGUAGE.to_string(), event_target_value(&ev)))
                    }
                >
                    <option value="en">"English"</option>
                    <option value="zh">"中文"</option>
                </select>
            </div>
            <div class="setting-item">
                <h3>"Theme"</h3>
                <select
                    id="theme-select"
                    prop:value=move || theme.get().as_str()
                    on:change=move |ev| {
                        on_change.run((SETTING_THEME.to_string(), event_target_value(&ev)))
                    }
                >
                    <option value="light">"Light"</option>
                    <option value="dark">"Dark"</option>
                </select>
            </div>
        </div>
    }
}
