//! Toast Notifications
//!
//! Transient messages for mutation results, auto-dismissed after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub variant: ToastVariant,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(title.into(), ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>) {
        self.push(title.into(), ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u32) {
        self.items.try_update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, title: String, variant: ToastVariant) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.items.update(|items| items.push(Toast { id, title, variant }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the toast stack in the bottom-right corner
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast-title">{toast.title}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
