//! Full-screen viewer for a saved recipe.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::storage::recipes::Recipe;

/// Shows `recipe` while it is `Some`; closing clears it.
#[component]
pub fn RecipeModal(recipe: RwSignal<Option<Recipe>>) -> impl IntoView {
    let close = move || recipe.set(None);

    view! {
        {move || recipe.get().map(|r| {
            let saved_on = r.created_at.format("%b %d, %Y %H:%M").to_string();
            view! {
                <div
                    class="modal-overlay"
                    tabindex="-1"
                    on:click=move |_| close()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            close();
                        }
                    }
                >
                    <article class="modal-content" on:click=|e| e.stop_propagation()>
                        <header class="modal-header">
                            <h3 class="modal-title">{r.title}</h3>
                            <button class="btn-secondary" on:click=move |_| close()>"Close"</button>
                        </header>
                        <p><small>"Saved on " {saved_on}</small></p>
                        <div class="recipe-detail" inner_html=r.content></div>
                    </article>
                </div>
            }
        })}
    }
}
