//! Tab navigation for the logged-in view.

use leptos::prelude::*;

use crate::state::Tab;

#[component]
pub fn NavMenu(
    active: Signal<Tab>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav id="nav-menu" class="nav-menu">
            {Tab::ALL.into_iter().map(|tab| view! {
                <button
                    class="nav-link"
                    class:active=move || active.get() == tab
                    on:click=move |_| on_select.run(tab)
                >
                    {tab.label()}
                </button>
            }).collect_view()}
        </nav>
    }
}
