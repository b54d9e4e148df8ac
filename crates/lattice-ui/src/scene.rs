use lattice_core::backend::Backend;

use crate::error::UiError;
use crate::node::Node;
use crate::tree::{NodeArena, NodeId};

/// A widget tree plus its designated root.
///
/// The scene owns the [`NodeArena`] and drives one render walk per frame
/// from the root. Construction-time wiring goes through the arena
/// (insert widgets, hand their ids to containers); between frames, typed
/// access through [`widget_mut`](Self::widget_mut) is how application code
/// updates display state.
///
/// # Example
///
/// ```
/// use lattice_core::backend::RecordingBackend;
/// use lattice_core::coords::Vec2;
/// use lattice_ui::scene::Scene;
/// use lattice_ui::widgets::Label;
///
/// let mut scene = Scene::new();
/// let mut label = Label::new("greeting");
/// label.set_text("hello");
/// let root = scene.insert(label);
/// scene.set_root(root);
///
/// let mut backend = RecordingBackend::new(Vec2::new(320.0, 240.0));
/// backend.new_frame();
/// scene.render(&mut backend)?;
/// # Ok::<(), lattice_ui::error::UiError>(())
/// ```
#[derive(Default)]
pub struct Scene {
    arena: NodeArena,
    root: Option<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N: Node>(&mut self, node: N) -> NodeId {
        self.arena.insert(node)
    }

    /// Remove a node. Clearing the root leaves the scene unrenderable until
    /// a new root is set.
    pub fn remove(&mut self, id: NodeId) -> Option<Box<dyn Node>> {
        if self.root == Some(id) {
            self.root = None;
        }
        self.arena.remove(id)
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn widget<T: Node>(&self, id: NodeId) -> Option<&T> {
        self.arena.widget(id)
    }

    pub fn widget_mut<T: Node>(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.widget_mut(id)
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    /// Render one frame from the root. The caller owns the frame boundary
    /// (backend `new_frame`/present); this walk only emits draw commands.
    pub fn render(&mut self, backend: &mut dyn Backend) -> Result<(), UiError> {
        let root = self.root.ok_or(UiError::MissingRoot)?;
        let origin = backend.cursor_position();
        let available = backend.available_content_size();
        self.arena.render(backend, root, origin, available)
    }
}
