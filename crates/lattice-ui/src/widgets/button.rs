use lattice_core::coords::Vec2;

use crate::error::UiError;
use crate::node::{Node, NodeBase};
use crate::tree::RenderCtx;

/// A clickable control with a text caption.
///
/// The backend detects the click edge during this widget's own draw call;
/// a registered callback runs synchronously, inline in the render walk,
/// exactly once per detected click. Callbacks must not touch the tree —
/// publish results through a [`Mailbox`](crate::mailbox::Mailbox) and apply
/// them at the next frame boundary.
pub struct Button {
    base: NodeBase,
    text: String,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::new(name),
            text: String::new(),
            on_click: None,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Callback invoked when the button is clicked.
    pub fn set_callback(&mut self, f: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(f));
    }
}

impl Node for Button {
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
        let clicked = ctx.backend.button(&self.text);
        // Adopt the extent the backend actually gave the control, so the
        // border decorates the drawn rectangle rather than the resolved one.
        self.base.set_geometry(ctx.backend.last_item_rect());
        ctx.backend.pop_id();

        if clicked {
            if let Some(callback) = self.on_click.as_mut() {
                callback();
            }
        }

        self.base.draw_border(ctx.backend);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeArena;
    use lattice_core::backend::{Backend, DrawCmd, RecordingBackend, WindowFlags};
    use std::cell::Cell;
    use std::rc::Rc;

    fn render_once(arena: &mut NodeArena, id: crate::tree::NodeId, backend: &mut RecordingBackend) {
        backend.new_frame();
        backend
            .begin_window("w", WindowFlags::default())
            .expect("window");
        let origin = backend.cursor_position();
        let available = backend.available_content_size();
        arena
            .render(backend, id, origin, available)
            .expect("render");
        backend.end_window();
    }

    #[test]
    fn callback_fires_exactly_once_per_click() {
        let hits = Rc::new(Cell::new(0u32));
        let mut button = Button::new("b");
        button.set_text("Click Me");
        let counter = Rc::clone(&hits);
        button.set_callback(move || counter.set(counter.get() + 1));

        let mut arena = NodeArena::new();
        let id = arena.insert(button);
        let mut backend = RecordingBackend::new(Vec2::new(400.0, 300.0));

        backend.queue_click("Click Me");
        render_once(&mut arena, id, &mut backend);
        assert_eq!(hits.get(), 1);

        // No click queued: the callback stays silent.
        render_once(&mut arena, id, &mut backend);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn border_encloses_the_drawn_control() {
        let mut button = Button::new("b");
        button.set_text("Framed");
        button.layout_mut().set_border_width(1.0);
        let mut arena = NodeArena::new();
        let id = arena.insert(button);
        let mut backend = RecordingBackend::new(Vec2::new(400.0, 300.0));
        render_once(&mut arena, id, &mut backend);

        let (pos, size) = backend
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCmd::Button { pos, size, .. } => Some((*pos, *size)),
                _ => None,
            })
            .expect("button");
        let (min, max) = backend
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCmd::Rect { min, max, .. } => Some((*min, *max)),
                _ => None,
            })
            .expect("border rect");
        assert_eq!(min, pos);
        assert_eq!(max, pos + size);
    }

    #[test]
    fn click_without_callback_is_a_no_op() {
        let mut button = Button::new("b");
        button.set_text("Quiet");
        let mut arena = NodeArena::new();
        let id = arena.insert(button);
        let mut backend = RecordingBackend::new(Vec2::new(400.0, 300.0));
        backend.queue_click("Quiet");
        render_once(&mut arena, id, &mut backend);
    }
}
