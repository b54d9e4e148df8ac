use lattice_core::coords::Vec2;

use crate::error::UiError;
use crate::node::{Node, NodeBase};
use crate::tree::RenderCtx;

/// A fraction-filled, non-interactive progress indicator.
pub struct ProgressBar {
    base: NodeBase,
    progress: f32,
}

impl ProgressBar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::new(name),
            progress: 0.0,
        }
    }

    /// Set the displayed fraction. Values outside `[0, 1]` are clamped.
    pub fn set_progress(&mut self, progress: f32) {
        let clamped = progress.clamp(0.0, 1.0);
        if clamped != progress {
            log::debug!(
                "progress `{}`: clamping {} into [0, 1]",
                self.base.name(),
                progress
            );
        }
        self.progress = clamped;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

impl Node for ProgressBar {
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
        let resolved = self.base.resolve(origin, available);

        ctx.backend.push_id(self.base.name());
        self.base.forward_item_width(ctx.backend, resolved);
        ctx.backend.progress_bar(self.progress);
        self.base.set_geometry(ctx.backend.last_item_rect());
        ctx.backend.pop_id();

        self.base.draw_border(ctx.backend);
        Ok(())
    }
}
