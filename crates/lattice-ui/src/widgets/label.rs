use lattice_core::coords::{Rect, Vec2};

use crate::error::UiError;
use crate::node::{Node, NodeBase};
use crate::tree::RenderCtx;

/// Static text, optionally word-wrapped. No interaction.
///
/// The label's natural extent comes from measuring its text; a border
/// (when `border_width > 0` on the layout policy) is drawn from that
/// measured extent and never feeds back into it.
pub struct Label {
    base: NodeBase,
    text: String,
    wrap: bool,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::new(name),
            text: String::new(),
            wrap: false,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word-wrap the text to the region width instead of one run.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }
}

impl Node for Label {
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

        // Natural extent is the measured text, independent of decoration.
        let extent = ctx.backend.measure_text(&self.text);
        self.base.set_geometry(Rect::from_origin_size(origin, extent));
        self.base.draw_border(ctx.backend);

        self.base.forward_item_width(ctx.backend, resolved);
        if self.wrap {
            ctx.backend.text_wrapped(&self.text);
        } else {
            ctx.backend.text(&self.text);
        }

        ctx.backend.pop_id();
        Ok(())
    }
}
