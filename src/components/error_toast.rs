//! Error Toast Component
//!
//! Renders the shared error channel as dismissable toasts. Each toast
//! auto-dismisses after a few seconds; the optional diagnostic detail is
//! collapsed behind a toggle.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const AUTO_DISMISS_MS: u32 = 8_000;

#[component]
pub fn ErrorToasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="error-toasts">
            <For
                each=move || ctx.errors.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(AUTO_DISMISS_MS).await;
                        ctx.dismiss_error(id);
                    });

                    view! {
                        <div class="error-toast">
                            <div class="error-toast-header">
                                <span class="error-title">{notice.title.clone()}</span>
                                <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error(id)>
                                    "×"
                                </button>
                            </div>
                            <div class="error-message">{notice.message.clone()}</div>
                            {notice.detail.clone().map(|detail| {
                                let (show_detail, set_show_detail) = signal(false);
                                view! {
                                    <div class="error-detail-wrap">
                                        <button
                                            class="detail-toggle"
                                            on:click=move |_| set_show_detail.update(|v| *v = !*v)
                                        >
                                            {move || if show_detail.get() { "Hide details" } else { "Show details" }}
                                        </button>
                                        <Show when=move || show_detail.get()>
                                            <pre class="error-detail">{detail.clone()}</pre>
                                        </Show>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
