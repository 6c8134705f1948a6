//! Recipe request form and the generated result.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

const CUISINES: &[(&str, &str)] = &[
    ("any", "Any cuisine"),
    ("chinese", "Chinese"),
    ("italian", "Italian"),
    ("japanese", "Japanese"),
    ("mexican", "Mexican"),
    ("indian", "Indian"),
    ("french", "French"),
];

const DIFFICULTIES: &[(&str, &str)] = &[("easy", "Easy"), ("medium", "Medium"), ("hard", "Hard")];

const PREP_TIMES: &[(&str, &str)] = &[
    ("15", "15 minutes"),
    ("30", "30 minutes"),
    ("60", "1 hour"),
    ("120", "2 hours+"),
];

#[component]
fn OptionSelect(
    id: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {options.iter().map(|&(v, label)| view! {
                <option value=v>{label}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn GeneratePanel(
    input: RwSignal<String>,
    cuisine: RwSignal<String>,
    difficulty: RwSignal<String>,
    prep_time: RwSignal<String>,
    busy: Signal<bool>,
    loading: Signal<bool>,
    recipe: Signal<Option<String>>,
    #[prop(into)] on_generate: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div id="generate-tab" class="tab-pane active">
            <div class="recipe-form">
                <textarea
                    id="recipe-input"
                    placeholder="Describe what you want to cook, or list the ingredients you have..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keypress=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            on_generate.run(());
                        }
                    }
                ></textarea>
                <div class="form-row">
                    <OptionSelect id="cuisine-type" options=CUISINES value=cuisine />
                    <OptionSelect id="difficulty" options=DIFFICULTIES value=difficulty />
                    <OptionSelect id="prep-time" options=PREP_TIMES value=prep_time />
                </div>
                <button
                    id="generate-btn"
                    class="btn-primary"
                    disabled=move || busy.get()
                    on:click=move |_| on_generate.run(())
                >
                    {move || if busy.get() { "Generating..." } else { "Generate Recipe" }}
                </button>
            </div>

            <Show when=move || loading.get()>
                <div id="loading" class="loading">"Cooking up your recipe..."</div>
            </Show>

            {move || recipe.get().map(|markup| view! {
                <div id="recipe-result" class="recipe-result">
                    <div inner_html=markup></div>
                    <button class="btn-primary save-recipe" on:click=move |_| on_save.run(())>
                        "Save Recipe"
                    </button>
                </div>
            })}
        </div>
    }
}
