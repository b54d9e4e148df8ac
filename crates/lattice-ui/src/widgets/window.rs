use std::cell::RefCell;
use std::rc::Rc;

use lattice_core::backend::{WindowFlags, WindowSurface};
use lattice_core::coords::{Rect, Vec2};

use crate::error::UiError;
use crate::node::{Node, NodeBase};
use crate::tree::{NodeId, RenderCtx};

// ── WindowWidget ──────────────────────────────────────────────────────────

/// A titled backend window hosting exactly one child.
///
/// Windows open non-resizable. Once the widget has a geometry (set by its
/// owner, or adopted from the surface by [`ApplicationWindow`]) that size is
/// forced onto the backend window each frame; with no geometry established
/// the backend picks its own default. The child is mandatory at render
/// time; a window without one is a construction bug and fails the frame
/// with [`UiError::EmptySlot`].
pub struct WindowWidget {
    base: NodeBase,
    title: String,
    flags: WindowFlags,
    child: Option<NodeId>,
}

impl WindowWidget {
    pub fn new(name: impl Into<String>) -> Self {
        let base = NodeBase::new(name);
        let title = base.name().to_string();
        Self {
            base,
            title,
            flags: WindowFlags { no_resize: true },
            child: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_flags(&mut self, flags: WindowFlags) {
        self.flags = flags;
    }

    /// Install the single child, returning the displaced occupant.
    pub fn set_child(&mut self, id: NodeId) -> Option<NodeId> {
        self.child.replace(id)
    }

    pub fn child(&self) -> Option<NodeId> {
        self.child
    }
}

impl Node for WindowWidget {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(
        &mut self,
        ctx: &mut RenderCtx<'_>,
        _origin: Vec2,
        _available: Vec2,
    ) -> Result<(), UiError> {
        let child = self.child.ok_or_else(|| UiError::EmptySlot {
            container: self.base.name().to_string(),
            slot: 0,
        })?;

        let geometry = self.base.geometry();
        if !geometry.is_empty() {
            ctx.backend.set_next_window_size(geometry.size);
        }
        ctx.backend.begin_window(&self.title, self.flags)?;

        let origin = ctx.backend.cursor_position();
        let available = ctx.backend.available_content_size();
        let result = ctx.render_child(child, origin, available);

        // The window scope must close even when the child walk fails.
        ctx.backend.end_window();
        result
    }
}

// ── ApplicationWindow ─────────────────────────────────────────────────────

/// The root window, bound to the host's OS window surface.
///
/// Every frame the widget reads the live framebuffer size and adopts it as
/// its geometry before delegating to the inner [`WindowWidget`], so the UI
/// tracks OS resizes with no event plumbing. Title changes go both to the
/// backend window and, synchronously, to the surface.
pub struct ApplicationWindow {
    window: WindowWidget,
    surface: Rc<RefCell<dyn WindowSurface>>,
}

impl ApplicationWindow {
    pub fn new(name: impl Into<String>, surface: Rc<RefCell<dyn WindowSurface>>) -> Self {
        Self {
            window: WindowWidget::new(name),
            surface,
        }
    }

    /// Retitle both the backend window and the OS surface.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.surface.borrow_mut().set_title(&title);
        self.window.set_title(title);
    }

    pub fn title(&self) -> &str {
        self.window.title()
    }

    pub fn set_child(&mut self, id: NodeId) -> Option<NodeId> {
        self.window.set_child(id)
    }

    pub fn child(&self) -> Option<NodeId> {
        self.window.child()
    }
}

impl Node for ApplicationWindow {
    fn base(&self) -> &NodeBase {
        self.window.base()
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        self.window.base_mut()
    }

    fn render(
        &mut self,
        ctx: &mut RenderCtx<'_>,
        origin: Vec2,
        available: Vec2,
    ) -> Result<(), UiError> {
        let size = self.surface.borrow().framebuffer_size();
        self.window
            .base_mut()
            .set_geometry(Rect::from_origin_size(Vec2::zero(), size));
        self.window.render(ctx, origin, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeArena;
    use crate::widgets::Label;
    use lattice_core::backend::{
        Backend, BackendError, DrawCmd, HeadlessSurface, RecordingBackend,
    };

    fn app_with_label(
        surface: &Rc<RefCell<HeadlessSurface>>,
    ) -> (NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let mut label = Label::new("l");
        label.set_text("hi");
        let child = arena.insert(label);
        let surface: Rc<RefCell<dyn WindowSurface>> = surface.clone();
        let mut app = ApplicationWindow::new("main", surface);
        app.set_child(child);
        let id = arena.insert(app);
        (arena, id)
    }

    fn render(
        arena: &mut NodeArena,
        id: NodeId,
        backend: &mut RecordingBackend,
    ) -> Result<(), UiError> {
        backend.new_frame();
        let available = backend.available_content_size();
        arena.render(backend, id, Vec2::zero(), available)
    }

    #[test]
    fn geometry_tracks_the_surface_framebuffer() {
        let surface = Rc::new(RefCell::new(HeadlessSurface::new(Vec2::new(640.0, 480.0))));
        let (mut arena, id) = app_with_label(&surface);
        let mut backend = RecordingBackend::new(Vec2::new(640.0, 480.0));

        render(&mut arena, id, &mut backend).expect("frame");
        assert_eq!(
            arena.get(id).expect("app").geometry().size,
            Vec2::new(640.0, 480.0)
        );

        surface.borrow_mut().set_size(Vec2::new(1280.0, 720.0));
        render(&mut arena, id, &mut backend).expect("frame");
        assert_eq!(
            arena.get(id).expect("app").geometry().size,
            Vec2::new(1280.0, 720.0)
        );
        let window_size = backend.commands().iter().find_map(|c| match c {
            DrawCmd::BeginWindow { size, .. } => Some(*size),
            _ => None,
        });
        assert_eq!(window_size, Some(Vec2::new(1280.0, 720.0)));
    }

    #[test]
    fn a_plain_window_opens_non_resizable_at_the_backend_default_size() {
        let mut arena = NodeArena::new();
        let mut label = Label::new("l");
        label.set_text("hi");
        let child = arena.insert(label);
        let mut window = WindowWidget::new("w");
        window.set_child(child);
        let id = arena.insert(window);

        let mut backend = RecordingBackend::new(Vec2::new(320.0, 200.0));
        render(&mut arena, id, &mut backend).expect("frame");

        let (size, flags) = backend
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCmd::BeginWindow { size, flags, .. } => Some((*size, *flags)),
                _ => None,
            })
            .expect("window");
        // No geometry was ever established, so the backend's viewport wins
        // and the child is not starved of space.
        assert_eq!(size, Vec2::new(320.0, 200.0));
        assert!(flags.no_resize);
    }

    #[test]
    fn set_title_reaches_the_surface_synchronously() {
        let surface = Rc::new(RefCell::new(HeadlessSurface::new(Vec2::new(100.0, 100.0))));
        let shared: Rc<RefCell<dyn WindowSurface>> = surface.clone();
        let mut app = ApplicationWindow::new("main", shared);
        app.set_title("Hello World");
        assert_eq!(surface.borrow().title(), "Hello World");
        assert_eq!(app.title(), "Hello World");
    }

    #[test]
    fn missing_child_fails_before_the_window_opens() {
        let surface = Rc::new(RefCell::new(HeadlessSurface::new(Vec2::new(100.0, 100.0))));
        let mut arena = NodeArena::new();
        let app = ApplicationWindow::new("main", surface);
        let id = arena.insert(app);
        let mut backend = RecordingBackend::new(Vec2::new(100.0, 100.0));

        let err = render(&mut arena, id, &mut backend).unwrap_err();
        assert!(matches!(err, UiError::EmptySlot { slot: 0, .. }));
        assert!(!backend
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCmd::BeginWindow { .. })));
    }

    #[test]
    fn a_lost_window_surfaces_as_a_backend_error() {
        let surface = Rc::new(RefCell::new(HeadlessSurface::new(Vec2::new(100.0, 100.0))));
        let (mut arena, id) = app_with_label(&surface);
        let mut backend = RecordingBackend::new(Vec2::new(100.0, 100.0));
        backend.fail_windows(true);

        let err = render(&mut arena, id, &mut backend).unwrap_err();
        assert!(matches!(
            err,
            UiError::Backend(BackendError::WindowUnavailable(_))
        ));
    }
}
