//! Saved recipes list with view and delete actions.

use leptos::prelude::*;

use crate::storage::recipes::{Recipe, RecipeId};

#[component]
pub fn RecipeList(
    recipes: Signal<Vec<Recipe>>,
    #[prop(into)] on_view: Callback<RecipeId>,
    #[prop(into)] on_delete: Callback<RecipeId>,
) -> impl IntoView {
    view! {
        <div id="my-recipes-list" class="recipe-list">
            {move || {
                let list = recipes.get();
                if list.is_empty() {
                    view! {
                        <div class="no-content">
                            <p>"No recipes saved yet. Generate some recipes to get started!"</p>
                        </div>
                    }.into_any()
                } else {
                    list.into_iter().map(|recipe| {
                        view! {
                            <RecipeCard recipe=recipe on_view=on_view on_delete=on_delete />
                        }
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn RecipeCard(
    recipe: Recipe,
    #[prop(into)] on_view: Callback<RecipeId>,
    #[prop(into)] on_delete: Callback<RecipeId>,
) -> impl IntoView {
    let view_id = recipe.id.clone();
    let delete_id = recipe.id.clone();
    let saved_on = recipe.created_at.format("%b %d, %Y").to_string();

    view! {
        <div class="recipe-card">
            <h3>{recipe.title}</h3>
            <p><small>"Saved on " {saved_on}</small></p>
            <div class="recipe-actions">
                <button
                    class="btn-primary"
                    on:click=move |_| on_view.run(view_id.clone())
                >
                    "View"
                </button>
                <button
                    class="btn-secondary"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
