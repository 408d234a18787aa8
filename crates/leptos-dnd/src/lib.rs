//! Leptos Tree Drag-and-Drop
//!
//! Drag state for reordering the project/session tree using native
//! HTML5 drag events. The transition logic lives in [`DndState`], a plain
//! struct with no DOM coupling; [`DndSignals`] wraps it in a Leptos signal
//! and the `make_on_*` constructors produce the event handlers rows attach.
//!
//! Nested elements inside a drop row fire their own dragenter/dragleave
//! pairs, which bubble to the row handler before the row's own leave fires.
//! A depth counter absorbs those pairs: enter increments, leave decrements,
//! and the hover highlight clears only when the counter returns to zero.

use leptos::prelude::*;
use web_sys::DragEvent;

/// The entity picked up at drag start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragSource {
    Project { id: u32 },
    Session { id: String, project_id: u32 },
}

/// A candidate drop target under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    Project { id: u32 },
    Session { id: String, project_id: u32 },
}

impl DragSource {
    /// A target is accepted only when it is the same kind as the source,
    /// is not the source itself, and (for sessions) shares the owning
    /// project. Everything else leaves the hover state untouched.
    pub fn accepts(&self, target: &DropTarget) -> bool {
        match (self, target) {
            (DragSource::Project { id: src }, DropTarget::Project { id: tgt }) => src != tgt,
            (
                DragSource::Session { id: src, project_id: src_project },
                DropTarget::Session { id: tgt, project_id: tgt_project },
            ) => src_project == tgt_project && src != tgt,
            _ => false,
        }
    }
}

/// Transient drag state: idle, dragging a project, or dragging a session.
///
/// `hover` tracks the most recently entered accepted target; `depth` counts
/// overlapping enter/leave pairs across nested drop regions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DndState {
    source: Option<DragSource>,
    hover: Option<DropTarget>,
    depth: u32,
}

impl DndState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&DragSource> {
        self.source.as_ref()
    }

    pub fn hover(&self) -> Option<&DropTarget> {
        self.hover.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// idle -> dragging-project / dragging-session
    pub fn start(&mut self, source: DragSource) {
        self.source = Some(source);
        self.hover = None;
        self.depth = 0;
    }

    /// Pointer entered a drop region. Accepted targets become the new hover
    /// and bump the depth counter; rejected targets change nothing.
    /// Returns whether the target was accepted.
    pub fn enter(&mut self, target: DropTarget) -> bool {
        let accepted = match &self.source {
            Some(source) => source.accepts(&target),
            None => false,
        };
        if accepted {
            self.depth += 1;
            self.hover = Some(target);
        }
        accepted
    }

    /// Pointer left a drop region. The counter clamps at zero so a stray
    /// leave from a rejected region cannot wrap around and clear a live
    /// highlight.
    pub fn leave(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            if self.depth == 0 {
                self.hover = None;
            }
        }
    }

    /// Consume the drop: yields the (source, target) pair when a drag is
    /// active over an accepted target, and resets to idle either way.
    pub fn take_drop(&mut self) -> Option<(DragSource, DropTarget)> {
        let pair = match (self.source.take(), self.hover.take()) {
            (Some(source), Some(target)) => Some((source, target)),
            _ => None,
        };
        self.end();
        pair
    }

    /// Any drag end (drop, cancel, abort) returns to idle.
    pub fn end(&mut self) {
        self.source = None;
        self.hover = None;
        self.depth = 0;
    }
}

/// Shared drag state as a Leptos signal, cheap to pass into every row.
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state: RwSignal<DndState>,
}

impl DndSignals {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DndState::new()),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.read().is_dragging()
    }

    /// Whether `source` is the entity currently being dragged (tracked).
    pub fn is_source(&self, source: &DragSource) -> bool {
        self.state.read().source() == Some(source)
    }

    /// Whether `target` is the current hover target (tracked).
    pub fn is_hover(&self, target: &DropTarget) -> bool {
        self.state.read().hover() == Some(target)
    }
}

impl Default for DndSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// dragstart handler for a draggable row.
pub fn make_on_dragstart(dnd: DndSignals, source: DragSource) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.stop_propagation();
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // WebKit refuses to start a drag without payload data
            let _ = dt.set_data("text/plain", "");
        }
        dnd.state.update(|s| s.start(source.clone()));
    }
}

/// dragenter handler for a drop region.
pub fn make_on_dragenter(dnd: DndSignals, target: DropTarget) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.state.update(|s| {
            s.enter(target.clone());
        });
    }
}

/// dragover handler; prevent_default marks the region as a valid drop site.
pub fn make_on_dragover(dnd: DndSignals) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if dnd.state.read_untracked().is_dragging() {
            ev.prevent_default();
        }
    }
}

/// dragleave handler for a drop region.
pub fn make_on_dragleave(dnd: DndSignals) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        dnd.state.update(|s| s.leave());
    }
}

/// drop handler; fires the callback with (source, target) when the drop
/// lands on an accepted target.
pub fn make_on_drop<F>(dnd: DndSignals, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(DragSource, DropTarget) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let mut pair = None;
        dnd.state.update(|s| pair = s.take_drop());
        if let Some((source, target)) = pair {
            on_drop(source, target);
        }
    }
}

/// dragend handler for the source row; always resets to idle.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        dnd.state.update(|s| s.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, project_id: u32) -> DragSource {
        DragSource::Session {
            id: id.to_string(),
            project_id,
        }
    }

    fn session_target(id: &str, project_id: u32) -> DropTarget {
        DropTarget::Session {
            id: id.to_string(),
            project_id,
        }
    }

    #[test]
    fn project_drag_hovers_other_projects() {
        let mut s = DndState::new();
        s.start(DragSource::Project { id: 1 });
        assert!(s.enter(DropTarget::Project { id: 2 }));
        assert_eq!(s.hover(), Some(&DropTarget::Project { id: 2 }));
    }

    #[test]
    fn self_target_is_rejected() {
        let mut s = DndState::new();
        s.start(DragSource::Project { id: 1 });
        assert!(!s.enter(DropTarget::Project { id: 1 }));
        assert_eq!(s.hover(), None);
    }

    #[test]
    fn cross_project_session_never_transitions() {
        let mut s = DndState::new();
        s.start(session("a", 1));
        s.enter(session_target("b", 1));
        let before = s.clone();

        // Session row owned by a different project: ignored entirely.
        assert!(!s.enter(session_target("c", 2)));
        assert_eq!(s, before);

        // Mismatched kind: also ignored.
        assert!(!s.enter(DropTarget::Project { id: 2 }));
        assert_eq!(s, before);
    }

    #[test]
    fn enter_without_active_drag_is_ignored() {
        let mut s = DndState::new();
        assert!(!s.enter(DropTarget::Project { id: 2 }));
        assert_eq!(s, DndState::new());
    }

    #[test]
    fn nested_enter_leave_clears_hover_exactly_once() {
        let mut s = DndState::new();
        s.start(DragSource::Project { id: 1 });

        // Row enter, then two nested children firing their own pairs.
        s.enter(DropTarget::Project { id: 2 });
        s.enter(DropTarget::Project { id: 2 });
        s.leave();
        s.enter(DropTarget::Project { id: 2 });
        s.leave();
        assert_eq!(s.hover(), Some(&DropTarget::Project { id: 2 }));

        // Only the final leave of the outermost region clears the hover.
        s.leave();
        assert_eq!(s.hover(), None);
        assert!(s.is_dragging());
    }

    #[test]
    fn counter_clamps_at_zero() {
        let mut s = DndState::new();
        s.start(DragSource::Project { id: 1 });
        s.leave();
        s.leave();
        assert_eq!(s, {
            let mut idle = DndState::new();
            idle.start(DragSource::Project { id: 1 });
            idle
        });

        // A clamped counter still supports a full hover cycle afterwards.
        s.enter(DropTarget::Project { id: 2 });
        assert_eq!(s.hover(), Some(&DropTarget::Project { id: 2 }));
        s.leave();
        assert_eq!(s.hover(), None);
    }

    #[test]
    fn hover_follows_latest_target_across_rows() {
        let mut s = DndState::new();
        s.start(session("a", 7));
        s.enter(session_target("b", 7));
        // Next row's enter can fire before the previous row's leave.
        s.enter(session_target("c", 7));
        s.leave();
        assert_eq!(s.hover(), Some(&session_target("c", 7)));
    }

    #[test]
    fn take_drop_yields_pair_and_resets() {
        let mut s = DndState::new();
        s.start(session("a", 7));
        s.enter(session_target("b", 7));
        let pair = s.take_drop();
        assert_eq!(pair, Some((session("a", 7), session_target("b", 7))));
        assert_eq!(s, DndState::new());
    }

    #[test]
    fn drop_without_hover_resets_to_idle() {
        let mut s = DndState::new();
        s.start(DragSource::Project { id: 1 });
        assert_eq!(s.take_drop(), None);
        assert!(!s.is_dragging());
    }

    #[test]
    fn end_always_resets() {
        let mut s = DndState::new();
        s.start(session("a", 1));
        s.enter(session_target("b", 1));
        s.end();
        assert_eq!(s, DndState::new());
    }
}
