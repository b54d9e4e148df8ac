use crate::coords::{Color, Rect, Vec2};

use super::{Backend, BackendError, RegionFlags, WindowFlags};

/// Monospace glyph cell used for headless text metrics.
const GLYPH: Vec2 = Vec2::new(8.0, 16.0);
/// Padding added around a button caption.
const FRAME_PADDING: Vec2 = Vec2::new(8.0, 4.0);
/// Vertical gap inserted after each emitted item.
const ITEM_SPACING: f32 = 4.0;

/// One recorded draw command.
///
/// The stream is renderer-agnostic, in emission order; scope commands
/// (`BeginWindow`/`BeginRegion` and their ends) bracket their contents the
/// same way a real draw list would scissor them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        color: Color,
    },
    BeginWindow {
        title: String,
        size: Vec2,
        flags: WindowFlags,
    },
    EndWindow,
    BeginRegion {
        id: String,
        origin: Vec2,
        size: Vec2,
        flags: RegionFlags,
    },
    EndRegion,
    Text {
        pos: Vec2,
        size: Vec2,
        text: String,
        wrapped: bool,
    },
    Button {
        pos: Vec2,
        size: Vec2,
        label: String,
        clicked: bool,
    },
    Progress {
        pos: Vec2,
        size: Vec2,
        fraction: f32,
    },
    Rect {
        min: Vec2,
        max: Vec2,
        color: Color,
        thickness: f32,
    },
}

impl DrawCmd {
    /// Item origin, for commands that occupy layout space.
    pub fn pos(&self) -> Option<Vec2> {
        match self {
            DrawCmd::Text { pos, .. }
            | DrawCmd::Button { pos, .. }
            | DrawCmd::Progress { pos, .. } => Some(*pos),
            DrawCmd::BeginRegion { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    /// Item extent, for commands that occupy layout space.
    pub fn size(&self) -> Option<Vec2> {
        match self {
            DrawCmd::Text { size, .. }
            | DrawCmd::Button { size, .. }
            | DrawCmd::Progress { size, .. }
            | DrawCmd::BeginRegion { size, .. } => Some(*size),
            _ => None,
        }
    }
}

/// Cursor state for one open window or region scope.
#[derive(Debug, Clone, Copy)]
struct Scope {
    origin: Vec2,
    size: Vec2,
    cursor: Vec2,
}

/// Headless [`Backend`] that records the draw stream instead of rasterizing.
///
/// Layout follows the immediate-mode model: items are placed at the scope
/// cursor and stack vertically; regions open at the cursor and advance the
/// parent past themselves when closed. Text metrics use a fixed monospace
/// cell so measurements are deterministic.
///
/// Clicks are scripted: [`queue_click`](Self::queue_click) arms a click for
/// a button label, and the next `button` call with that label reports the
/// click edge exactly once.
#[derive(Debug)]
pub struct RecordingBackend {
    viewport: Vec2,
    clear_color: Color,
    commands: Vec<DrawCmd>,
    id_stack: Vec<String>,
    scopes: Vec<Scope>,
    next_item_width: Option<f32>,
    next_window_size: Option<Vec2>,
    last_item: Rect,
    pending_clicks: Vec<String>,
    fail_windows: bool,
}

impl RecordingBackend {
    pub fn new(viewport: Vec2) -> Self {
        Self::with_clear_color(viewport, Color::rgb(0.45, 0.55, 0.60))
    }

    /// Explicit clear color at construction; there is no process-wide
    /// default to mutate.
    pub fn with_clear_color(viewport: Vec2, clear_color: Color) -> Self {
        Self {
            viewport,
            clear_color,
            commands: Vec::new(),
            id_stack: Vec::new(),
            scopes: Vec::new(),
            next_item_width: None,
            next_window_size: None,
            last_item: Rect::default(),
            pending_clicks: Vec::new(),
            fail_windows: false,
        }
    }

    /// Reset per-frame state and record the clear. Call once per frame
    /// before rendering the tree.
    pub fn new_frame(&mut self) {
        self.commands.clear();
        self.id_stack.clear();
        self.scopes.clear();
        self.next_item_width = None;
        self.next_window_size = None;
        self.last_item = Rect::default();
        self.commands.push(DrawCmd::Clear {
            color: self.clear_color,
        });
    }

    /// Commands recorded since the last [`new_frame`](Self::new_frame).
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Arm a click for the next `button` call carrying `label`.
    pub fn queue_click(&mut self, label: impl Into<String>) {
        self.pending_clicks.push(label.into());
    }

    /// Make subsequent `begin_window` calls fail, simulating a lost surface.
    pub fn fail_windows(&mut self, fail: bool) {
        self.fail_windows = fail;
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Current depth of the push-id stack. A balanced render walk leaves
    /// this where it found it, failed frames included.
    pub fn id_depth(&self) -> usize {
        self.id_stack.len()
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn scope(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Place an item of `natural` size at the cursor, honoring a pending
    /// width override, and advance the cursor past it.
    fn place_item(&mut self, natural: Vec2) -> (Vec2, Vec2) {
        let width = self.next_item_width.take().unwrap_or(natural.x);
        let size = Vec2::new(width, natural.y);
        let pos = match self.scopes.last_mut() {
            Some(scope) => {
                let pos = scope.cursor;
                scope.cursor.y += size.y + ITEM_SPACING;
                pos
            }
            None => Vec2::zero(),
        };
        self.last_item = Rect::from_origin_size(pos, size);
        (pos, size)
    }

    fn remaining(&self) -> Vec2 {
        match self.scope() {
            Some(s) => (s.size - (s.cursor - s.origin)).max(Vec2::zero()),
            None => self.viewport,
        }
    }
}

impl Backend for RecordingBackend {
    fn push_id(&mut self, id: &str) {
        self.id_stack.push(id.to_string());
    }

    fn pop_id(&mut self) {
        debug_assert!(!self.id_stack.is_empty(), "pop_id without matching push_id");
        self.id_stack.pop();
    }

    fn set_next_window_size(&mut self, size: Vec2) {
        self.next_window_size = Some(size);
    }

    fn begin_window(&mut self, title: &str, flags: WindowFlags) -> Result<(), BackendError> {
        if self.fail_windows {
            return Err(BackendError::WindowUnavailable(title.to_string()));
        }
        let size = self.next_window_size.take().unwrap_or(self.viewport);
        self.scopes.push(Scope {
            origin: Vec2::zero(),
            size,
            cursor: Vec2::zero(),
        });
        self.commands.push(DrawCmd::BeginWindow {
            title: title.to_string(),
            size,
            flags,
        });
        Ok(())
    }

    fn end_window(&mut self) {
        debug_assert!(!self.scopes.is_empty(), "end_window without begin_window");
        self.scopes.pop();
        self.commands.push(DrawCmd::EndWindow);
    }

    fn begin_region(
        &mut self,
        id: &str,
        size: Vec2,
        flags: RegionFlags,
    ) -> Result<(), BackendError> {
        let Some(parent) = self.scope().copied() else {
            return Err(BackendError::NoSurface("begin_region outside a window"));
        };
        let remaining = self.remaining();
        // Zero means "take the remaining extent on that axis".
        let size = Vec2::new(
            if size.x > 0.0 { size.x } else { remaining.x },
            if size.y > 0.0 { size.y } else { remaining.y },
        );
        let origin = parent.cursor;
        self.scopes.push(Scope {
            origin,
            size,
            cursor: origin,
        });
        self.commands.push(DrawCmd::BeginRegion {
            id: id.to_string(),
            origin,
            size,
            flags,
        });
        Ok(())
    }

    fn end_region(&mut self) {
        debug_assert!(self.scopes.len() > 1, "end_region without begin_region");
        let region = self.scopes.pop();
        if let (Some(region), Some(parent)) = (region, self.scopes.last_mut()) {
            parent.cursor.y += region.size.y + ITEM_SPACING;
        }
        self.commands.push(DrawCmd::EndRegion);
    }

    fn available_content_size(&self) -> Vec2 {
        self.remaining()
    }

    fn cursor_position(&self) -> Vec2 {
        self.scope().map_or(Vec2::zero(), |s| s.cursor)
    }

    fn set_next_item_width(&mut self, width: f32) {
        self.next_item_width = Some(width);
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        let mut lines = 0u32;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        Vec2::new(widest as f32 * GLYPH.x, lines.max(1) as f32 * GLYPH.y)
    }

    fn text(&mut self, text: &str) {
        let natural = self.measure_text(text);
        let (pos, size) = self.place_item(natural);
        self.commands.push(DrawCmd::Text {
            pos,
            size,
            text: text.to_string(),
            wrapped: false,
        });
    }

    fn text_wrapped(&mut self, text: &str) {
        let wrap_width = self
            .next_item_width
            .unwrap_or_else(|| self.remaining().x)
            .max(GLYPH.x);
        let per_line = (wrap_width / GLYPH.x).floor().max(1.0) as usize;
        let chars = text.chars().count().max(1);
        let lines = chars.div_ceil(per_line);
        let natural = Vec2::new(
            (chars.min(per_line)) as f32 * GLYPH.x,
            lines as f32 * GLYPH.y,
        );
        let (pos, size) = self.place_item(natural);
        self.commands.push(DrawCmd::Text {
            pos,
            size,
            text: text.to_string(),
            wrapped: true,
        });
    }

    fn button(&mut self, label: &str) -> bool {
        let natural = self.measure_text(label) + FRAME_PADDING + FRAME_PADDING;
        let (pos, size) = self.place_item(natural);
        let clicked = match self.pending_clicks.iter().position(|l| l == label) {
            Some(i) => {
                self.pending_clicks.remove(i);
                true
            }
            None => false,
        };
        self.commands.push(DrawCmd::Button {
            pos,
            size,
            label: label.to_string(),
            clicked,
        });
        clicked
    }

    fn progress_bar(&mut self, fraction: f32) {
        let natural = Vec2::new(self.remaining().x, GLYPH.y + FRAME_PADDING.y);
        let (pos, size) = self.place_item(natural);
        self.commands.push(DrawCmd::Progress {
            pos,
            size,
            fraction,
        });
    }

    fn last_item_rect(&self) -> Rect {
        self.last_item
    }

    fn draw_rect(&mut self, min: Vec2, max: Vec2, color: Color, thickness: f32) {
        self.commands.push(DrawCmd::Rect {
            min,
            max,
            color,
            thickness,
        });
    }
}
