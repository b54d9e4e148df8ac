use std::any::Any;

use lattice_core::backend::Backend;
use lattice_core::coords::Vec2;

use crate::error::UiError;
use crate::node::Node;

// ── NodeId ────────────────────────────────────────────────────────────────

/// Stable handle to a node record in a [`NodeArena`].
///
/// Ids stay valid for the lifetime of the arena; removing a node leaves a
/// tombstone rather than shifting later records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

// ── NodeArena ─────────────────────────────────────────────────────────────

/// Flat storage for every node in a tree.
///
/// Containers hold child [`NodeId`]s instead of owning boxes directly:
/// "transferring ownership" of a child means installing its id into a slot,
/// and a node is reachable from at most one slot (tree, not graph — the
/// arena does not enforce this, the composition code must).
///
/// Typed access ([`widget`](Self::widget) / [`widget_mut`](Self::widget_mut))
/// replaces downcast-from-base-pointer: callers keep the ids they got at
/// construction time and read concrete widgets back through them between
/// frames.
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Option<Box<dyn Node>>>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `node` into the arena and return its id.
    pub fn insert<N: Node>(&mut self, node: N) -> NodeId {
        let id = NodeId(self.nodes.len());
        log::trace!("arena: insert `{}` as {:?}", node.name(), id);
        self.nodes.push(Some(Box::new(node)));
        id
    }

    /// Take a node out of the arena. Its id becomes a tombstone; other ids
    /// are unaffected.
    pub fn remove(&mut self, id: NodeId) -> Option<Box<dyn Node>> {
        self.nodes.get_mut(id.0)?.take()
    }

    pub fn get(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(id.0)?.as_deref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut dyn Node> {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => Some(node.as_mut()),
            _ => None,
        }
    }

    /// Concrete widget behind `id`, or `None` if the id is stale or names
    /// a different widget type.
    pub fn widget<T: Node>(&self, id: NodeId) -> Option<&T> {
        let node: &dyn Node = self.get(id)?;
        (node as &dyn Any).downcast_ref::<T>()
    }

    /// Mutable concrete widget behind `id`.
    pub fn widget_mut<T: Node>(&mut self, id: NodeId) -> Option<&mut T> {
        let node: &mut dyn Node = self.get_mut(id)?;
        (node as &mut dyn Any).downcast_mut::<T>()
    }

    /// Number of live (non-removed) nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the node behind `id`.
    ///
    /// The record is taken out of the arena for the duration of its render
    /// so the node can recurse into the same arena for its children; a
    /// second render of the same id while it is out reports `UnknownNode`.
    pub fn render(
        &mut self,
        backend: &mut dyn Backend,
        id: NodeId,
        origin: Vec2,
        available: Vec2,
    ) -> Result<(), UiError> {
        let slot = self.nodes.get_mut(id.0).ok_or(UiError::UnknownNode(id))?;
        let mut node = slot.take().ok_or(UiError::UnknownNode(id))?;
        let mut ctx = RenderCtx {
            arena: self,
            backend,
        };
        let result = node.render(&mut ctx, origin, available);
        self.nodes[id.0] = Some(node);
        result
    }
}

// ── RenderCtx ─────────────────────────────────────────────────────────────

/// Per-frame resources handed down the tree walk: the backend the node
/// draws into, and the arena it recurses into for its children.
pub struct RenderCtx<'a> {
    arena: &'a mut NodeArena,
    pub backend: &'a mut dyn Backend,
}

impl RenderCtx<'_> {
    /// Recurse into a child node with the origin/size of its slot.
    pub fn render_child(
        &mut self,
        id: NodeId,
        origin: Vec2,
        available: Vec2,
    ) -> Result<(), UiError> {
        self.arena.render(&mut *self.backend, id, origin, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    #[test]
    fn insert_then_typed_access() {
        let mut arena = NodeArena::new();
        let id = arena.insert(Label::new("greeting"));
        arena
            .widget_mut::<Label>(id)
            .expect("label")
            .set_text("hi");
        assert_eq!(arena.widget::<Label>(id).expect("label").text(), "hi");
    }

    #[test]
    fn typed_access_rejects_wrong_type() {
        let mut arena = NodeArena::new();
        let id = arena.insert(Label::new("l"));
        assert!(arena.widget::<crate::widgets::Button>(id).is_none());
    }

    #[test]
    fn removal_leaves_other_ids_stable() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Label::new("a"));
        let b = arena.insert(Label::new("b"));
        assert!(arena.remove(a).is_some());
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(b).expect("b").name(), "b");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn rendering_a_stale_id_fails() {
        let mut arena = NodeArena::new();
        let id = arena.insert(Label::new("l"));
        arena.remove(id);
        let mut backend = lattice_core::backend::RecordingBackend::new(Vec2::new(100.0, 100.0));
        let err = arena
            .render(&mut backend, id, Vec2::zero(), Vec2::new(100.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, UiError::UnknownNode(_)));
    }
}
