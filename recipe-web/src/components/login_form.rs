//! Username/password form with an inline status line.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::toast::{notice_class, notice_icon};
use crate::presenter::Notice;

#[component]
pub fn LoginForm(
    username: RwSignal<String>,
    password: RwSignal<String>,
    busy: Signal<bool>,
    message: Signal<Option<Notice>>,
    #[prop(into)] on_login: Callback<()>,
) -> impl IntoView {
    let submit_on_enter = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            on_login.run(());
        }
    };

    view! {
        <div id="login-form" class="login-form">
            <h3>"Login"</h3>
            <input
                id="username"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
                on:keypress=submit_on_enter
            />
            <input
                id="password"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
                on:keypress=submit_on_enter
            />
            <button
                class="btn-primary"
                disabled=move || busy.get()
                on:click=move |_| on_login.run(())
            >
                {move || if busy.get() { "Logging in..." } else { "Login" }}
            </button>
            {move || message.get().map(|notice| view! {
                <div id="login-message" class=notice_class(notice.kind)>
                    <i class=notice_icon(notice.kind)></i>
                    " "
                    {notice.text}
                </div>
            })}
        </div>
    }
}
