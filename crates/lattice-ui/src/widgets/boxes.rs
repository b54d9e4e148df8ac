use lattice_core::backend::RegionFlags;
use lattice_core::coords::Vec2;

use crate::error::UiError;
use crate::node::{Node, NodeBase};
use crate::tree::{NodeId, RenderCtx};

/// Arrangement axis of a [`Boxes`] container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Linear container: a fixed-capacity ordered sequence of child slots.
///
/// Capacity is set once with [`set_capacity`](Self::set_capacity) before
/// children are attached; every slot must be populated before the container
/// renders, and an empty slot fails the frame fast with
/// [`UiError::EmptySlot`]. Children render inside a clipped region whose
/// scroll axis is the cross axis of the orientation.
pub struct Boxes {
    base: NodeBase,
    orientation: Orientation,
    slots: Vec<Option<NodeId>>,
}

impl Boxes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::new(name),
            orientation: Orientation::Vertical,
            slots: Vec::new(),
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Grow the slot count to `capacity`. Shrinking an already-sized
    /// container is unsupported and ignored.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity <= self.slots.len() {
            if capacity < self.slots.len() {
                log::debug!(
                    "boxes `{}`: ignoring set_capacity({}) below current capacity {}",
                    self.base.name(),
                    capacity,
                    self.slots.len()
                );
            }
            return;
        }
        self.slots.resize(capacity, None);
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Install a child into `slot`, returning the displaced occupant so the
    /// caller can drop it from the arena.
    pub fn set_widget(&mut self, slot: usize, id: NodeId) -> Result<Option<NodeId>, UiError> {
        let capacity = self.slots.len();
        match self.slots.get_mut(slot) {
            Some(entry) => Ok(entry.replace(id)),
            None => Err(UiError::SlotOutOfRange {
                container: self.base.name().to_string(),
                slot,
                capacity,
            }),
        }
    }

    pub fn widget_at(&self, slot: usize) -> Option<NodeId> {
        self.slots.get(slot).copied().flatten()
    }

    fn main_axis(&self, v: Vec2) -> f32 {
        match self.orientation {
            Orientation::Vertical => v.y,
            Orientation::Horizontal => v.x,
        }
    }

    fn with_main_axis(&self, v: Vec2, main: f32) -> Vec2 {
        match self.orientation {
            Orientation::Vertical => Vec2::new(v.x, main),
            Orientation::Horizontal => Vec2::new(main, v.y),
        }
    }
}

impl Node for Boxes {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(
        &mut self,
        ctx: &mut RenderCtx<'_>,
        origin: Vec2,
        available: Vec2,
    ) -> Result<(), UiError> {
        // Guard before opening any backend scope: a hole in the slot table
        // is a tree-construction bug, not a frame condition.
        let mut children = Vec::with_capacity(self.slots.len());
        for (slot, entry) in self.slots.iter().copied().enumerate() {
            children.push(entry.ok_or_else(|| UiError::EmptySlot {
                container: self.base.name().to_string(),
                slot,
            })?);
        }

        let size = self.base.resolve(origin, available);
        let flags = RegionFlags {
            horizontal_scrollbar: self.orientation == Orientation::Horizontal,
        };

        ctx.backend.push_id(self.base.name());
        if let Err(err) = ctx.backend.begin_region("items", size, flags) {
            ctx.backend.pop_id();
            return Err(err.into());
        }

        let content_origin = ctx.backend.cursor_position();
        let content_avail = ctx.backend.available_content_size();

        let mut walk = Ok(());
        for id in children {
            let child_origin = ctx.backend.cursor_position();
            let consumed = self.main_axis(child_origin - content_origin);
            let remaining = (self.main_axis(content_avail) - consumed).max(0.0);
            let child_avail = self.with_main_axis(content_avail, remaining);
            walk = ctx.render_child(id, child_origin, child_avail);
            if walk.is_err() {
                break;
            }
        }

        // The region and id scopes must close even when a child walk fails.
        ctx.backend.end_region();
        ctx.backend.pop_id();
        walk?;
        self.base.draw_border(ctx.backend);
        Ok(())
    }
}
