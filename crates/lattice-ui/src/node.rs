use std::any::Any;

use lattice_core::backend::Backend;
use lattice_core::coords::{Rect, Vec2};

use crate::error::UiError;
use crate::layout::LayoutPolicy;
use crate::tree::RenderCtx;

// ── NodeBase ──────────────────────────────────────────────────────────────

/// State every node carries: identity, last-computed geometry, and the
/// sizing policy.
///
/// Widgets embed a `NodeBase` and delegate to it instead of inheriting —
/// the render capability ([`Node`]) and the sizing capability
/// ([`LayoutPolicy`]) stay orthogonal.
#[derive(Debug, Clone)]
pub struct NodeBase {
    name: String,
    geometry: Rect,
    layout: LayoutPolicy,
}

impl NodeBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: Rect::default(),
            layout: LayoutPolicy::default(),
        }
    }

    /// Stable identity, used as the backend push-id scoping key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometry computed by the most recent render; derived each frame.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    pub fn layout(&self) -> &LayoutPolicy {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutPolicy {
        &mut self.layout
    }

    /// Resolve this node's size for the frame and record its geometry.
    pub fn resolve(&mut self, origin: Vec2, available: Vec2) -> Vec2 {
        let size = self.layout.resolve(available);
        self.geometry = Rect::from_origin_size(origin, size);
        size
    }

    /// Forward a non-zero resolved width to the backend so it sizes the
    /// next drawn element. Leaves call this just before their draw call.
    pub fn forward_item_width(&self, backend: &mut dyn Backend, resolved: Vec2) {
        if resolved.x > 0.0 {
            backend.set_next_item_width(resolved.x);
        }
    }

    /// Stroke the border decoration over the recorded geometry.
    pub fn draw_border(&self, backend: &mut dyn Backend) {
        self.layout.draw_border(backend, self.geometry);
    }
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A renderable element in the UI tree.
///
/// `render` must be a pure function of `(origin, available)` plus the
/// node's own display state, and is called at most once per node per frame
/// by its owner. Containers recurse through
/// [`RenderCtx::render_child`]; leaves terminate the recursion with
/// backend draw calls.
pub trait Node: Any {
    fn base(&self) -> &NodeBase;
    fn base_mut(&mut self) -> &mut NodeBase;

    /// Emit this frame's draw commands for the node at `origin`, given the
    /// space the parent reports as `available`.
    fn render(
        &mut self,
        ctx: &mut RenderCtx<'_>,
        origin: Vec2,
        available: Vec2,
    ) -> Result<(), UiError>;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn geometry(&self) -> Rect {
        self.base().geometry()
    }

    fn layout(&self) -> &LayoutPolicy {
        self.base().layout()
    }

    fn layout_mut(&mut self) -> &mut LayoutPolicy {
        self.base_mut().layout_mut()
    }
}
