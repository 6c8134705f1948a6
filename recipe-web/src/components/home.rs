use leptos::prelude::*;

/// Landing content shown while logged out.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section id="home-page" class="home-page">
            <h2>"Cook something new tonight"</h2>
            <p>"Describe the ingredients you have or the dish you crave, and get a complete recipe in seconds."</p>
            <ul class="feature-list">
                <li>"Recipes tailored to cuisine, difficulty and time"</li>
                <li>"Save favourites to revisit later"</li>
                <li>"Works from any browser, no install needed"</li>
            </ul>
        </section>
    }
}
