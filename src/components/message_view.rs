//! Message Viewer Component
//!
//! Renders message records as collapsible cards. Classification, preview,
//! and inspector text come from `crate::messages`; this component only
//! holds per-card expand state. Input is never mutated.

use leptos::prelude::*;

use crate::messages;
use crate::models::Message;

#[component]
pub fn MessageView(messages: ReadSignal<Vec<Message>>) -> impl IntoView {
    view! {
        <div class="message-view">
            <Show when=move || messages.get().is_empty()>
                <div class="message-empty">"No messages"</div>
            </Show>
            <For
                each={move || messages.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, message)| (*index, message.kind.clone(), message.timestamp.clone())
                children=move |(_, message)| {
                    view! { <MessageCard message=message /> }
                }
            />
        </div>
    }
}

/// One collapsible message card: collapsed preview by default, full
/// content plus the raw record when expanded.
#[component]
fn MessageCard(message: Message) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let category = messages::classify(&message);
    let card_title = messages::title(&message);
    let timestamp = messages::format_timestamp(&message);
    let collapsed_preview = messages::preview(&message);
    let full_content = messages::content_text(&message);
    let raw = messages::raw_record(&message);

    view! {
        <div class=category.css_class()>
            <div class="message-header" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                <span class="message-icon">{category.icon()}</span>
                <span class="message-title">{card_title}</span>
                <span class="message-timestamp">{timestamp}</span>
                <span class="expand-indicator">
                    {move || if expanded.get() { "▼" } else { "▶" }}
                </span>
            </div>
            <Show
                when=move || expanded.get()
                fallback=move || view! { <div class="message-preview">{collapsed_preview.clone()}</div> }
            >
                <div class="message-body">
                    {full_content.clone().map(|content| {
                        view! { <pre class="message-content">{content}</pre> }
                    })}
                    <details class="raw-inspector">
                        <summary>"Raw data"</summary>
                        <pre class="raw-record">{raw.clone()}</pre>
                    </details>
                </div>
            </Show>
        </div>
    }
}
