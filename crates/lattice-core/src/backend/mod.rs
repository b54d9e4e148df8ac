//! Boundary traits between the widget tree and the host renderer.
//!
//! The widget core never talks to a device directly: every frame it issues
//! draw commands and layout queries through [`Backend`], and the root window
//! node mirrors title/size through [`WindowSurface`]. Hosts implement both
//! over their real draw list and OS window; [`RecordingBackend`] and
//! [`HeadlessSurface`] are the headless implementations used by tests.

mod record;
mod surface;

pub use record::{DrawCmd, RecordingBackend};
pub use surface::{HeadlessSurface, WindowSurface};

use thiserror::Error;

use crate::coords::{Color, Rect, Vec2};

/// A backend primitive was unavailable for this frame.
///
/// These are host failures, not tree-construction bugs: the renderer
/// surfaces them to the frame loop, which decides whether to skip the frame
/// or shut down.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A draw or layout primitive was used with no window scope open.
    #[error("no active window surface: {0}")]
    NoSurface(&'static str),
    /// The top-level window scope could not be opened.
    #[error("window `{0}` could not be opened")]
    WindowUnavailable(String),
}

/// Scroll/clip behavior of a child region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionFlags {
    /// Enable a horizontal scrollbar (content may overflow on x).
    pub horizontal_scrollbar: bool,
}

/// Behavior of a top-level window scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowFlags {
    /// The user may not resize the window interactively.
    pub no_resize: bool,
}

/// Per-frame draw and layout primitives the widget tree requires from the
/// host.
///
/// The model is immediate-mode: the host keeps a cursor inside the current
/// window/region scope, items are emitted at the cursor and advance it, and
/// scopes (`begin_window`/`begin_region`) nest. Scope-opening calls are
/// fallible; everything else is infallible bookkeeping or recording.
pub trait Backend {
    // ── id scoping ────────────────────────────────────────────────────────

    /// Push a name onto the id scope stack (stable per-node keying).
    fn push_id(&mut self, id: &str);
    /// Pop the most recent id scope.
    fn pop_id(&mut self);

    // ── window scope ──────────────────────────────────────────────────────

    /// Force the size of the next window opened by [`begin_window`].
    ///
    /// [`begin_window`]: Backend::begin_window
    fn set_next_window_size(&mut self, size: Vec2);
    /// Open a top-level drawing surface. Must be balanced by
    /// [`end_window`](Backend::end_window).
    fn begin_window(&mut self, title: &str, flags: WindowFlags) -> Result<(), BackendError>;
    /// Close the current window scope.
    fn end_window(&mut self);

    // ── child regions ─────────────────────────────────────────────────────

    /// Open a clipped, scrollable child region at the current cursor.
    ///
    /// A zero component in `size` means "use the remaining extent on that
    /// axis". Must be balanced by [`end_region`](Backend::end_region).
    fn begin_region(
        &mut self,
        id: &str,
        size: Vec2,
        flags: RegionFlags,
    ) -> Result<(), BackendError>;
    /// Close the current region; the parent cursor advances past it.
    fn end_region(&mut self);

    // ── layout queries ────────────────────────────────────────────────────

    /// Space left in the current scope, from the cursor to its bounds.
    fn available_content_size(&self) -> Vec2;
    /// Position where the next item will be placed.
    fn cursor_position(&self) -> Vec2;
    /// Override the width of the next emitted item.
    fn set_next_item_width(&mut self, width: f32);

    // ── items ─────────────────────────────────────────────────────────────

    /// Natural extent of `text` without emitting it.
    fn measure_text(&self, text: &str) -> Vec2;
    /// Emit a single-run text item.
    fn text(&mut self, text: &str);
    /// Emit text word-wrapped to the remaining region width.
    fn text_wrapped(&mut self, text: &str);
    /// Emit a clickable button; returns `true` on the click edge for this
    /// frame (exactly one frame per physical click).
    fn button(&mut self, label: &str) -> bool;
    /// Emit a fraction-filled progress bar, `fraction` in `[0, 1]`.
    fn progress_bar(&mut self, fraction: f32);
    /// Rectangle occupied by the most recently emitted item (zero before
    /// any item this frame). Widgets use it to record the extent the host
    /// actually gave them.
    fn last_item_rect(&self) -> Rect;

    // ── decoration ────────────────────────────────────────────────────────

    /// Stroke a rectangle outline from `min` to `max`. Does not move the
    /// cursor.
    fn draw_rect(&mut self, min: Vec2, max: Vec2, color: Color, thickness: f32);
}
