//! Project Tree Component
//!
//! Loads the project/session tree, renders it with expand/collapse state,
//! and wires up drag-and-drop reordering with pessimistic commit: the new
//! ranking is sent to the backend first and applied locally only on
//! acknowledgement.
//!
//! The tree never polls. It subscribes to session-created/updated/deleted
//! events on mount and applies each as a minimal patch, so collapse and
//! drag state survive backend changes; the subscriptions are torn down on
//! cleanup.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dnd::{DndSignals, DragSource, DropTarget};

use crate::commands::{self, ProjectOrder, SessionOrder};
use crate::components::{ConfirmDialog, NewSessionForm, ProjectRow, SessionRow};
use crate::context::AppContext;
use crate::events::{self, Subscription};
use crate::models::{Project, Session, SessionPatch};
use crate::store::{
    store_apply_session_created, store_apply_session_deleted, store_apply_session_updated,
    store_commit_project_order, store_commit_session_order, store_projects,
    store_projects_untracked, store_set_projects, TreeState, TreeStore,
};
use crate::storage;
use crate::tree;

#[component]
pub fn ProjectTree(#[prop(into)] on_open_session: Callback<Session>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let store = TreeStore::new(TreeState::default());
    let (expanded, set_expanded) = signal(HashSet::<u32>::new());
    let (pending_warning, set_pending_warning) = signal::<Option<Project>>(None);
    let (adding_session_for, set_adding_session_for) = signal::<Option<u32>>(None);

    let dnd = DndSignals::new();

    // Load the tree on mount and on every reload trigger
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::list_projects_with_sessions().await {
                Ok(projects) => {
                    web_sys::console::log_1(
                        &format!("[TREE] Loaded {} projects", projects.len()).into(),
                    );
                    store_set_projects(&store, projects);
                }
                Err(e) => ctx.report_error("Failed to load projects", &e, None),
            }
        });
    });

    // Subscribe to backend session events once per mount; unlisten on cleanup
    let subscriptions: StoredValue<Vec<Subscription>, LocalStorage> =
        StoredValue::new_local(Vec::new());
    {
        let subs = subscriptions;
        spawn_local(async move {
            let results = [
                events::subscribe::<Session, _>(events::SESSION_CREATED, move |session| {
                    match store_apply_session_created(&store, session) {
                        Some(project_id) => {
                            set_expanded.update(|e| {
                                e.insert(project_id);
                            });
                        }
                        None => {
                            web_sys::console::warn_1(
                                &"[SYNC] session-created without a known owning project, reloading"
                                    .into(),
                            );
                            ctx.reload();
                        }
                    }
                })
                .await,
                events::subscribe::<SessionPatch, _>(events::SESSION_UPDATED, move |patch| {
                    store_apply_session_updated(&store, &patch);
                })
                .await,
                events::subscribe::<SessionPatch, _>(events::SESSION_DELETED, move |patch| {
                    store_apply_session_deleted(&store, &patch.id);
                })
                .await,
            ];
            for result in results {
                match result {
                    Ok(sub) => subs.update_value(|v| v.push(sub)),
                    Err(e) => ctx.report_error("Failed to subscribe to session events", &e, None),
                }
            }
        });
    }
    on_cleanup(move || subscriptions.update_value(|v| v.clear()));

    // Drop handler: splice-and-reinsert, send the full ranking, commit
    // locally only on acknowledgement
    let handle_drop = Callback::new(move |(source, target): (DragSource, DropTarget)| {
        match (source, target) {
            (DragSource::Project { id: dragged }, DropTarget::Project { id: target_id }) => {
                let projects = store_projects_untracked(&store);
                let Some(reordered) = tree::reorder_projects_by_id(&projects, dragged, target_id)
                else {
                    return;
                };
                web_sys::console::log_1(
                    &format!("[DND] Drop project {} onto {}", dragged, target_id).into(),
                );
                let orders: Vec<ProjectOrder> = reordered
                    .iter()
                    .map(|p| ProjectOrder {
                        id: p.id,
                        display_order: p.display_order,
                    })
                    .collect();
                spawn_local(async move {
                    match commands::reorder_projects(&orders).await {
                        Ok(()) => store_commit_project_order(&store, &reordered),
                        Err(e) => ctx.report_error("Failed to reorder projects", &e, None),
                    }
                });
            }
            (
                DragSource::Session {
                    id: dragged,
                    project_id,
                },
                DropTarget::Session { id: target_id, .. },
            ) => {
                let projects = store_projects_untracked(&store);
                let Some(project) = projects.iter().find(|p| p.id == project_id) else {
                    return;
                };
                let Some(reordered) = tree::reorder_sessions_by_id(project, &dragged, &target_id)
                else {
                    return;
                };
                web_sys::console::log_1(
                    &format!(
                        "[DND] Drop session {} onto {} in project {}",
                        dragged, target_id, project_id
                    )
                    .into(),
                );
                let orders: Vec<SessionOrder> = reordered
                    .iter()
                    .map(|s| SessionOrder {
                        id: s.id.clone(),
                        display_order: s.display_order,
                    })
                    .collect();
                spawn_local(async move {
                    match commands::reorder_sessions(project_id, &orders).await {
                        Ok(()) => store_commit_session_order(&store, project_id, &reordered),
                        Err(e) => ctx.report_error("Failed to reorder sessions", &e, None),
                    }
                });
            }
            // The state machine never yields a mismatched pair
            _ => {}
        }
    });

    // Open a project's main-branch session, gated by the one-time warning
    let open_main = move |project: Project| {
        spawn_local(async move {
            match commands::get_or_create_main_session(project.id).await {
                Ok(session) => on_open_session.run(session),
                Err(e) => ctx.report_error(
                    "Failed to open main session",
                    &e,
                    Some(format!("project: {}", project.name)),
                ),
            }
        });
    };
    let request_open_main = Callback::new(move |project: Project| {
        if storage::main_branch_warning_shown(project.id) {
            open_main(project);
        } else {
            set_pending_warning.set(Some(project));
        }
    });
    let confirm_warning = Callback::new(move |()| {
        if let Some(project) = pending_warning.get_untracked() {
            storage::mark_main_branch_warning_shown(project.id);
            set_pending_warning.set(None);
            open_main(project);
        }
    });
    let cancel_warning = Callback::new(move |()| set_pending_warning.set(None));

    let project_list = move || tree::sorted_projects(&store_projects(&store));

    view! {
        <div class="project-tree">
            <For
                each=project_list
                key=|project| {
                    (
                        project.id,
                        project.name.clone(),
                        project.main_branch.clone(),
                        project.display_order,
                    )
                }
                children=move |project| {
                    let project_id = project.id;
                    let is_expanded = Signal::derive(move || expanded.get().contains(&project_id));
                    let on_toggle = Callback::new(move |()| {
                        set_expanded.update(|e| {
                            if !e.insert(project_id) {
                                e.remove(&project_id);
                            }
                        });
                    });
                    let on_add_session = Callback::new(move |()| {
                        set_expanded.update(|e| {
                            e.insert(project_id);
                        });
                        set_adding_session_for.set(Some(project_id));
                    });
                    let session_list = move || {
                        store_projects(&store)
                            .iter()
                            .find(|p| p.id == project_id)
                            .map(tree::sorted_sessions)
                            .unwrap_or_default()
                    };

                    view! {
                        <div class="project-block">
                            <ProjectRow
                                project=project.clone()
                                expanded=is_expanded
                                dnd=dnd
                                on_toggle=on_toggle
                                on_open=request_open_main
                                on_add_session=on_add_session
                                on_drop=handle_drop
                            />
                            <Show when=move || is_expanded.get()>
                                <div class="project-sessions">
                                    <For
                                        each=session_list
                                        key=|session| {
                                            (
                                                session.id.clone(),
                                                session.name.clone(),
                                                session.display_order,
                                                session.is_favorite,
                                                session.status.clone(),
                                            )
                                        }
                                        children=move |session| {
                                            view! {
                                                <SessionRow
                                                    session=session
                                                    project_id=project_id
                                                    dnd=dnd
                                                    on_open=on_open_session
                                                    on_drop=handle_drop
                                                />
                                            }
                                        }
                                    />
                                    <Show when=move || adding_session_for.get() == Some(project_id)>
                                        <NewSessionForm
                                            project_id=project_id
                                            on_done=Callback::new(move |()| {
                                                set_adding_session_for.set(None)
                                            })
                                        />
                                    </Show>
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
        {move || {
            pending_warning
                .get()
                .map(|project| {
                    view! {
                        <ConfirmDialog
                            title="Open main branch session?"
                            message=format!(
                                "This opens a session on {} directly in {}. Changes there are not isolated in a worktree. This warning is shown once per project.",
                                project.main_branch,
                                project.name,
                            )
                            confirm_label="Continue"
                            on_confirm=confirm_warning
                            on_cancel=cancel_warning
                        />
                    }
                })
        }}
    }
}
