//! SessionDeck Frontend App
//!
//! Shell wiring the two presentational leaves together: the project tree
//! in the sidebar, the message viewer for the opened session in the main
//! column, the error toast layer on top.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ErrorToasts, MessageView, NewProjectForm, ProjectTree};
use crate::context::AppContext;
use crate::models::{Message, Session};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (errors, set_errors) = signal(Vec::new());
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (errors, set_errors));

    // Provide context to all children
    provide_context(ctx);

    let (active_session, set_active_session) = signal::<Option<Session>>(None);
    let (messages, set_messages) = signal(Vec::<Message>::new());

    let open_session = Callback::new(move |session: Session| {
        let session_id = session.id.clone();
        set_active_session.set(Some(session));
        spawn_local(async move {
            match commands::load_session_messages(&session_id).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} messages", loaded.len()).into(),
                    );
                    set_messages.set(loaded);
                }
                Err(e) => ctx.report_error("Failed to load session messages", &e, None),
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: projects and sessions
            <aside class="sidebar">
                <h1>"SessionDeck"</h1>
                <NewProjectForm />
                <ProjectTree on_open_session=open_session />
            </aside>

            // Center: messages of the opened session
            <main class="main-content">
                {move || match active_session.get() {
                    Some(session) => {
                        view! {
                            <header class="session-header">
                                <span class="session-name">{session.name.clone()}</span>
                                {session
                                    .is_favorite
                                    .then(|| view! { <span class="favorite-star">"★"</span> })}
                            </header>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <header class="session-header empty">"Select a session"</header> }
                            .into_any()
                    }
                }}
                <MessageView messages=messages />
            </main>

            <ErrorToasts />
        </div>
    }
}
