//! Global notices: fixed to the top-right corner, dismissed on click or
//! after a timeout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::presenter::{Notice, NoticeKind};

/// How long a notice stays up when the config does not say otherwise.
pub const DEFAULT_NOTICE_MS: u32 = 4000;

#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub id: usize,
    pub notice: Notice,
}

static NEXT_NOTICE_ID: AtomicUsize = AtomicUsize::new(0);

/// CSS class for a notice of the given kind.
pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "message success",
        NoticeKind::Error => "message error",
    }
}

/// Icon shown before the notice text.
pub fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "fas fa-check-circle",
        NoticeKind::Error => "fas fa-exclamation-circle",
    }
}

/// Push `notice` onto the stack and drop it again after `duration_ms`.
pub fn show_toast(toasts: RwSignal<Vec<ToastMessage>>, notice: Notice, duration_ms: u32) {
    let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);
    toasts.update(|t| t.push(ToastMessage { id, notice }));

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        toasts.update(|t| t.retain(|m| m.id != id));
    });
}

#[component]
pub fn ToastContainer(
    toasts: Signal<Vec<ToastMessage>>,
    #[prop(into)] on_dismiss: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="toast-container" role="status">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=notice_class(toast.notice.kind)
                            title="Click to dismiss"
                            on:click=move |_| on_dismiss.run(id)
                        >
                            <i class=notice_icon(toast.notice.kind)></i>
                            " "
                            {toast.notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
