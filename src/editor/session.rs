use crate::models::{ContextPoint, ViewportPoint};

/// A failure reported by the rendering host (usually a rejected DOM call).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HostError {
    pub message: String,
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The host capabilities the editor needs to place content at a point.
///
/// The browser implementation lives in `editor::dom`; tests use an in-memory host.
pub(crate) trait InsertionHost {
    /// A resolved insertion point (a collapsed range in the browser).
    type Target;
    /// A node that can be moved around the document.
    type Node: Clone;

    fn resolve_insertion_point(&self, point: ViewportPoint) -> Option<Self::Target>;

    /// Whether `target` lies inside the editable lesson body.
    fn within_editor(&self, target: &Self::Target) -> bool;

    /// Parse `html` in the context of `target` and splice it in.
    fn insert_fragment(&self, target: &Self::Target, html: &str) -> Result<(), HostError>;

    /// Move `node` (the same node, not a copy) to `target`.
    fn relocate(&self, target: &Self::Target, node: &Self::Node) -> Result<(), HostError>;

    fn mark_dragging(&self, node: &Self::Node, dragging: bool);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InsertOutcome {
    Inserted,
    /// Nothing was right-clicked yet.
    NoContextPoint,
    /// No caret inside the lesson body at the stored coordinates; nothing was inserted.
    Unresolved,
    Failed(HostError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DropOutcome {
    Moved,
    /// No drag session was active.
    NotDragging,
    /// No caret inside the lesson body under the drop point; the node stays where it was.
    Unresolved,
    Failed(HostError),
}

/// Per-page editor state: the last right-click position and the node being dragged.
///
/// Lives as long as the lesson page is mounted.
#[derive(Debug)]
pub(crate) struct EditorSession<N> {
    context_point: Option<ContextPoint>,
    dragged: Option<N>,
}

impl<N> Default for EditorSession<N> {
    fn default() -> Self {
        Self {
            context_point: None,
            dragged: None,
        }
    }
}

impl<N: Clone> EditorSession<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_context_point(&mut self, point: ContextPoint) {
        self.context_point = Some(point);
    }

    #[cfg(test)]
    pub fn context_point(&self) -> Option<ContextPoint> {
        self.context_point
    }

    pub fn insert_at_context<H>(&self, host: &H, html: &str) -> InsertOutcome
    where
        H: InsertionHost<Node = N>,
    {
        let Some(point) = self.context_point else {
            return InsertOutcome::NoContextPoint;
        };
        let Some(target) = resolve_in_editor(host, point.viewport()) else {
            return InsertOutcome::Unresolved;
        };
        match host.insert_fragment(&target, html) {
            Ok(()) => InsertOutcome::Inserted,
            Err(e) => InsertOutcome::Failed(e),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    #[cfg(test)]
    pub fn dragged(&self) -> Option<&N> {
        self.dragged.as_ref()
    }

    /// Start tracking `node` if it is an audio element. Returns whether a drag began.
    pub fn begin_drag<H>(&mut self, host: &H, node: N, is_audio: bool) -> bool
    where
        H: InsertionHost<Node = N>,
    {
        if !is_audio {
            return false;
        }
        // A stale session (drag ended outside the page) must not leave its marker behind.
        if let Some(prev) = self.dragged.take() {
            host.mark_dragging(&prev, false);
        }
        host.mark_dragging(&node, true);
        self.dragged = Some(node);
        true
    }

    pub fn finish_drop<H>(&mut self, host: &H, point: ViewportPoint) -> DropOutcome
    where
        H: InsertionHost<Node = N>,
    {
        let Some(node) = self.dragged.take() else {
            return DropOutcome::NotDragging;
        };
        host.mark_dragging(&node, false);

        let Some(target) = resolve_in_editor(host, point) else {
            return DropOutcome::Unresolved;
        };
        match host.relocate(&target, &node) {
            Ok(()) => DropOutcome::Moved,
            Err(e) => DropOutcome::Failed(e),
        }
    }

    /// The drag ended without a drop on the container.
    pub fn cancel_drag<H>(&mut self, host: &H)
    where
        H: InsertionHost<Node = N>,
    {
        if let Some(node) = self.dragged.take() {
            host.mark_dragging(&node, false);
        }
    }
}

// Carets over the side panel or other page chrome are not insertion points.
fn resolve_in_editor<H: InsertionHost>(host: &H, point: ViewportPoint) -> Option<H::Target> {
    host.resolve_insertion_point(point)
        .filter(|target| host.within_editor(target))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// One entry of the in-memory document.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum FakeNode {
        Text(String),
        Html(String),
        Audio(u32),
    }

    /// A flat document where a "caret" is an index between nodes.
    #[derive(Default)]
    pub(crate) struct FakeHost {
        pub doc: RefCell<Vec<FakeNode>>,
        pub carets: HashMap<(i32, i32), usize>,
        pub dragging: RefCell<HashSet<u32>>,
        pub resolve_calls: RefCell<Vec<ViewportPoint>>,
        /// Caret indices that belong to page chrome rather than the lesson body.
        pub outside: HashSet<usize>,
        pub fail_inserts: bool,
    }

    impl FakeHost {
        pub fn with_doc(doc: Vec<FakeNode>) -> Self {
            Self {
                doc: RefCell::new(doc),
                ..Default::default()
            }
        }

        pub fn caret(mut self, x: i32, y: i32, index: usize) -> Self {
            self.carets.insert((x, y), index);
            self
        }

        /// A caret at `(x, y)` that lands outside the lesson body.
        pub fn foreign_caret(mut self, x: i32, y: i32, index: usize) -> Self {
            self.outside.insert(index);
            self.caret(x, y, index)
        }

        pub fn snapshot(&self) -> Vec<FakeNode> {
            self.doc.borrow().clone()
        }
    }

    impl InsertionHost for FakeHost {
        type Target = usize;
        type Node = u32;

        fn resolve_insertion_point(&self, point: ViewportPoint) -> Option<usize> {
            self.resolve_calls.borrow_mut().push(point);
            self.carets.get(&(point.x, point.y)).copied()
        }

        fn within_editor(&self, target: &usize) -> bool {
            !self.outside.contains(target)
        }

        fn insert_fragment(&self, target: &usize, html: &str) -> Result<(), HostError> {
            if self.fail_inserts {
                return Err(HostError::new("SyntaxError"));
            }
            let mut doc = self.doc.borrow_mut();
            let at = (*target).min(doc.len());
            doc.insert(at, FakeNode::Html(html.to_string()));
            Ok(())
        }

        fn relocate(&self, target: &usize, node: &u32) -> Result<(), HostError> {
            let mut doc = self.doc.borrow_mut();
            let Some(from) = doc.iter().position(|n| *n == FakeNode::Audio(*node)) else {
                return Err(HostError::new("node not in document"));
            };
            let moved = doc.remove(from);
            // Removing before the target shifts it left by one.
            let at = if from < *target { *target - 1 } else { *target };
            let at = at.min(doc.len());
            doc.insert(at, moved);
            Ok(())
        }

        fn mark_dragging(&self, node: &u32, dragging: bool) {
            let mut set = self.dragging.borrow_mut();
            if dragging {
                set.insert(*node);
            } else {
                set.remove(node);
            }
        }
    }
}
