use leptos::prelude::*;

#[component]
pub fn DiscoverPanel() -> impl IntoView {
    let cards = [
        ("Trending Recipes", "Coming soon..."),
        ("Community Favorites", "Coming soon..."),
        ("Chef Recommendations", "Coming soon..."),
    ];

    view! {
        <div id="discover-content" class="discover-grid">
            {cards.into_iter().map(|(title, body)| view! {
                <div class="feature-card">
                    <h3>{title}</h3>
                    <p>{body}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
