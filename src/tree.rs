//! Tree Ordering & Patch Logic
//!
//! Pure helpers behind the project/session tree: display-order sorting,
//! splice-and-reinsert reordering, and the minimal patches applied for
//! backend session events. Kept free of DOM and signal types so the
//! ordering invariants are testable directly.

use crate::models::{Project, Session, SessionPatch};

/// Projects in display order.
pub fn sorted_projects(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by_key(|p| p.display_order);
    sorted
}

/// A project's sessions in display order.
pub fn sorted_sessions(project: &Project) -> Vec<Session> {
    let mut sorted = project.sessions.clone();
    sorted.sort_by_key(|s| s.display_order);
    sorted
}

/// Remove the item at `from` and reinsert it at `to`, with JS
/// `splice(from, 1)` / `splice(to, 0, item)` semantics: `to` indexes the
/// array after removal, clamped to its length. Not a swap.
pub fn splice_reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    if from >= result.len() {
        return result;
    }
    let moved = result.remove(from);
    let to = to.min(result.len());
    result.insert(to, moved);
    result
}

/// New project ordering after dropping `dragged_id` onto `target_id`:
/// the dragged project is spliced out and reinserted at the target's
/// position, then every project is re-ranked 0..N-1. Returns `None` when
/// either id is missing or both are the same project.
pub fn reorder_projects_by_id(
    projects: &[Project],
    dragged_id: u32,
    target_id: u32,
) -> Option<Vec<Project>> {
    if dragged_id == target_id {
        return None;
    }
    let sorted = sorted_projects(projects);
    let from = sorted.iter().position(|p| p.id == dragged_id)?;
    let to = sorted.iter().position(|p| p.id == target_id)?;
    let mut reordered = splice_reorder(&sorted, from, to);
    for (rank, project) in reordered.iter_mut().enumerate() {
        project.display_order = rank as i32;
    }
    Some(reordered)
}

/// New session ordering within `project` after dropping `dragged_id` onto
/// `target_id`. Same splice-and-reinsert plus dense 0..N-1 re-ranking.
pub fn reorder_sessions_by_id(
    project: &Project,
    dragged_id: &str,
    target_id: &str,
) -> Option<Vec<Session>> {
    if dragged_id == target_id {
        return None;
    }
    let sorted = sorted_sessions(project);
    let from = sorted.iter().position(|s| s.id == dragged_id)?;
    let to = sorted.iter().position(|s| s.id == target_id)?;
    let mut reordered = splice_reorder(&sorted, from, to);
    for (rank, session) in reordered.iter_mut().enumerate() {
        session.display_order = rank as i32;
    }
    Some(reordered)
}

/// Apply a `session-created` event. Appends to the owning project's list
/// (replacing any stale record with the same id) and returns the owning
/// project id so the caller can auto-expand it. Returns `None` when the
/// event has no owning project, or the project is not in the tree; the
/// caller falls back to a full reload.
pub fn apply_session_created(projects: &mut [Project], session: Session) -> Option<u32> {
    let project_id = session.project_id?;
    let project = projects.iter_mut().find(|p| p.id == project_id)?;
    project.sessions.retain(|s| s.id != session.id);
    project.sessions.push(session);
    Some(project_id)
}

/// Apply a `session-updated` event: locate the session by id across all
/// projects and shallow-merge the present fields. Returns whether a
/// session was found.
pub fn apply_session_updated(projects: &mut [Project], patch: &SessionPatch) -> bool {
    for project in projects.iter_mut() {
        if let Some(session) = project.sessions.iter_mut().find(|s| s.id == patch.id) {
            session.apply_patch(patch);
            return true;
        }
    }
    false
}

/// Apply a `session-deleted` event: remove the session with the matching
/// id from whichever project contains it. Returns whether one was removed.
pub fn apply_session_deleted(projects: &mut [Project], session_id: &str) -> bool {
    for project in projects.iter_mut() {
        let before = project.sessions.len();
        project.sessions.retain(|s| s.id != session_id);
        if project.sessions.len() != before {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, order: i32, sessions: Vec<Session>) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            path: format!("/work/project-{}", id),
            main_branch: "main".to_string(),
            display_order: order,
            sessions,
        }
    }

    fn session(id: &str, project_id: u32, order: i32) -> Session {
        Session {
            id: id.to_string(),
            project_id: Some(project_id),
            name: format!("Session {}", id),
            display_order: order,
            is_favorite: false,
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn splice_moves_forward_and_backward() {
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        // Moving down: removed first, so the item lands after the original target.
        assert_eq!(splice_reorder(&items, 1, 3), vec!['a', 'c', 'd', 'b', 'e']);
        // Moving up lands exactly at the target index.
        assert_eq!(splice_reorder(&items, 3, 1), vec!['a', 'd', 'b', 'c', 'e']);
        // Same index is a no-op.
        assert_eq!(splice_reorder(&items, 2, 2), items);
    }

    #[test]
    fn splice_clamps_out_of_range() {
        let items = vec![1, 2, 3];
        assert_eq!(splice_reorder(&items, 0, 10), vec![2, 3, 1]);
        assert_eq!(splice_reorder(&items, 10, 0), vec![1, 2, 3]);
    }

    #[test]
    fn project_reorder_reranks_densely() {
        let projects = vec![project(10, 0, vec![]), project(20, 1, vec![]), project(30, 2, vec![])];
        let reordered = reorder_projects_by_id(&projects, 30, 10).unwrap();
        assert_eq!(reordered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![30, 10, 20]);
        assert_eq!(
            reordered.iter().map(|p| p.display_order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn project_reorder_sorts_by_display_order_first() {
        // Stored out of display order on purpose.
        let projects = vec![project(20, 1, vec![]), project(10, 0, vec![]), project(30, 2, vec![])];
        let reordered = reorder_projects_by_id(&projects, 10, 30).unwrap();
        assert_eq!(reordered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![20, 30, 10]);
    }

    #[test]
    fn project_reorder_rejects_self_and_unknown() {
        let projects = vec![project(10, 0, vec![]), project(20, 1, vec![])];
        assert!(reorder_projects_by_id(&projects, 10, 10).is_none());
        assert!(reorder_projects_by_id(&projects, 10, 99).is_none());
        assert!(reorder_projects_by_id(&projects, 99, 10).is_none());
    }

    #[test]
    fn session_reorder_reranks_within_project() {
        let p = project(
            1,
            0,
            vec![session("a", 1, 0), session("b", 1, 1), session("c", 1, 2), session("d", 1, 3)],
        );
        let reordered = reorder_sessions_by_id(&p, "a", "c").unwrap();
        assert_eq!(
            reordered.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c", "a", "d"]
        );
        assert_eq!(
            reordered.iter().map(|s| s.display_order).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        // No two sessions commit with the same rank.
        let mut ranks: Vec<i32> = reordered.iter().map(|s| s.display_order).collect();
        ranks.dedup();
        assert_eq!(ranks.len(), reordered.len());
    }

    #[test]
    fn created_appends_and_reports_owner() {
        let mut projects = vec![project(1, 0, vec![session("a", 1, 0)]), project(2, 1, vec![])];
        let owner = apply_session_created(&mut projects, session("b", 1, 1));
        assert_eq!(owner, Some(1));
        assert_eq!(projects[0].sessions.len(), 2);
        assert_eq!(projects[0].sessions[1].id, "b");
    }

    #[test]
    fn created_without_owner_requests_reload() {
        let mut projects = vec![project(1, 0, vec![])];
        let mut orphan = session("x", 1, 0);
        orphan.project_id = None;
        assert_eq!(apply_session_created(&mut projects, orphan), None);
        assert!(projects[0].sessions.is_empty());

        // Unknown owning project also falls back to reload.
        assert_eq!(apply_session_created(&mut projects, session("y", 9, 0)), None);
    }

    #[test]
    fn created_replaces_stale_duplicate() {
        let mut projects = vec![project(1, 0, vec![session("a", 1, 0)])];
        let mut newer = session("a", 1, 0);
        newer.name = "renamed".to_string();
        apply_session_created(&mut projects, newer);
        assert_eq!(projects[0].sessions.len(), 1);
        assert_eq!(projects[0].sessions[0].name, "renamed");
    }

    #[test]
    fn updated_merges_only_present_fields() {
        let mut base = session("a", 1, 3);
        base.status = Some("running".to_string());
        let mut projects = vec![project(1, 0, vec![base])];

        let patch = SessionPatch {
            id: "a".to_string(),
            name: Some("renamed".to_string()),
            is_favorite: Some(true),
            ..Default::default()
        };
        assert!(apply_session_updated(&mut projects, &patch));

        let merged = &projects[0].sessions[0];
        assert_eq!(merged.name, "renamed");
        assert!(merged.is_favorite);
        // Fields absent from the patch survive.
        assert_eq!(merged.display_order, 3);
        assert_eq!(merged.status.as_deref(), Some("running"));
    }

    #[test]
    fn updated_unknown_session_is_dropped() {
        let mut projects = vec![project(1, 0, vec![session("a", 1, 0)])];
        let patch = SessionPatch {
            id: "ghost".to_string(),
            name: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!apply_session_updated(&mut projects, &patch));
        assert_eq!(projects[0].sessions[0].name, "Session a");
    }

    #[test]
    fn deleted_removes_from_owning_project() {
        let mut projects = vec![
            project(1, 0, vec![session("a", 1, 0)]),
            project(2, 1, vec![session("b", 2, 0)]),
        ];
        assert!(apply_session_deleted(&mut projects, "b"));
        assert!(projects[1].sessions.is_empty());
        assert_eq!(projects[0].sessions.len(), 1);
        assert!(!apply_session_deleted(&mut projects, "b"));
    }

    #[test]
    fn notification_sequence_matches_ground_truth() {
        let mut projects = vec![project(1, 0, vec![]), project(2, 1, vec![])];

        apply_session_created(&mut projects, session("a", 1, 0));
        apply_session_created(&mut projects, session("b", 1, 1));
        apply_session_created(&mut projects, session("c", 2, 0));
        apply_session_updated(
            &mut projects,
            &SessionPatch {
                id: "b".to_string(),
                name: Some("B".to_string()),
                ..Default::default()
            },
        );
        apply_session_deleted(&mut projects, "a");

        let visible: Vec<(String, String)> = sorted_sessions(&projects[0])
            .iter()
            .map(|s| (s.id.clone(), s.name.clone()))
            .collect();
        assert_eq!(visible, vec![("b".to_string(), "B".to_string())]);
        assert_eq!(projects[1].sessions.len(), 1);
    }
}
