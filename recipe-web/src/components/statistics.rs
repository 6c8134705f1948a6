use leptos::prelude::*;

use crate::presenter::Statistics;

#[component]
pub fn StatisticsPanel(stats: Signal<Statistics>) -> impl IntoView {
    let last_generated = move || {
        stats
            .get()
            .last_generated
            .map(|t| t.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_else(|| "Never".to_string())
    };

    view! {
        <div id="statistics-content" class="settings-grid">
            <div class="setting-item">
                <h3>"Saved Recipes"</h3>
                <p class="stat-value">{move || stats.get().saved_recipes}</p>
            </div>
            <div class="setting-item">
                <h3>"Recipes Generated"</h3>
                <p class="stat-value">{move || stats.get().generations}</p>
            </div>
            <div class="setting-item">
                <h3>"Last Generated"</h3>
                <p class="stat-value">{last_generated}</p>
            </div>
        </div>
    }
}
