use lattice_core::backend::Backend;
use lattice_core::coords::{Color, Rect, Vec2};

// ── Alignment ─────────────────────────────────────────────────────────────

/// Per-axis placement of a node inside the space its parent hands it.
///
/// Stored on every [`LayoutPolicy`] but not yet consulted during position
/// resolution: a node's position is always the parent's cursor verbatim.
/// The fields exist so designer intent survives until placement grows
/// alignment support; consumers must not assume they have any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    End,
    Center,
}

// ── SizePolicy ────────────────────────────────────────────────────────────

/// Rule for resolving a node's extent on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Use the size hint component for this axis.
    Fixed,
    /// Use whatever the parent reports as available.
    Expanding,
    /// Defer to content: the resolved extent stays at zero and the node's
    /// own draw determines its natural size.
    #[default]
    Auto,
}

// ── LayoutPolicy ──────────────────────────────────────────────────────────

/// Sizing and decoration state mixed into every non-trivial node.
///
/// Invariant: `minimum ≤ maximum` componentwise at all times. Every mutator
/// that sets one bound clamps the other to preserve this — raising the
/// minimum above the current maximum raises the maximum to match, and
/// symmetrically for the maximum.
#[derive(Debug, Clone)]
pub struct LayoutPolicy {
    horizontal_alignment: Alignment,
    vertical_alignment: Alignment,
    horizontal_policy: SizePolicy,
    vertical_policy: SizePolicy,
    size_hint: Vec2,
    minimum: Vec2,
    maximum: Vec2,
    color: Color,
    border_width: f32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            horizontal_alignment: Alignment::Start,
            vertical_alignment: Alignment::Start,
            horizontal_policy: SizePolicy::Auto,
            vertical_policy: SizePolicy::Auto,
            size_hint: Vec2::zero(),
            minimum: Vec2::zero(),
            maximum: Vec2::splat(f32::INFINITY),
            color: Color::WHITE,
            border_width: 0.0,
        }
    }
}

impl LayoutPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn horizontal_alignment(&self) -> Alignment {
        self.horizontal_alignment
    }

    pub fn vertical_alignment(&self) -> Alignment {
        self.vertical_alignment
    }

    pub fn horizontal_policy(&self) -> SizePolicy {
        self.horizontal_policy
    }

    pub fn vertical_policy(&self) -> SizePolicy {
        self.vertical_policy
    }

    pub fn size_hint(&self) -> Vec2 {
        self.size_hint
    }

    pub fn minimum_size(&self) -> Vec2 {
        self.minimum
    }

    pub fn maximum_size(&self) -> Vec2 {
        self.maximum
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    // ── mutators ──────────────────────────────────────────────────────────

    pub fn set_horizontal_alignment(&mut self, alignment: Alignment) {
        self.horizontal_alignment = alignment;
    }

    pub fn set_vertical_alignment(&mut self, alignment: Alignment) {
        self.vertical_alignment = alignment;
    }

    pub fn set_horizontal_policy(&mut self, policy: SizePolicy) {
        self.horizontal_policy = policy;
    }

    pub fn set_vertical_policy(&mut self, policy: SizePolicy) {
        self.vertical_policy = policy;
    }

    pub fn set_size_hint(&mut self, hint: Vec2) {
        self.size_hint = hint;
    }

    /// Set the minimum size, raising the maximum where needed so the
    /// `minimum ≤ maximum` invariant holds.
    pub fn set_minimum_size(&mut self, minimum: Vec2) {
        self.minimum = minimum;
        self.maximum = self.maximum.max(minimum);
    }

    /// Set the maximum size, lowering the minimum where needed so the
    /// `minimum ≤ maximum` invariant holds.
    pub fn set_maximum_size(&mut self, maximum: Vec2) {
        self.maximum = maximum;
        self.minimum = self.minimum.min(maximum);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width;
    }

    // ── size negotiation ──────────────────────────────────────────────────

    /// Resolve a concrete size from the policy and the space the parent
    /// reports as available.
    ///
    /// Per axis: Fixed → size hint, Expanding → available, Auto → zero
    /// (content decides at draw time). The result is clamped into
    /// `[minimum, maximum]`, so the minimum acts as the floor even for
    /// Auto axes.
    pub fn resolve(&self, available: Vec2) -> Vec2 {
        fn axis(policy: SizePolicy, hint: f32, available: f32) -> f32 {
            match policy {
                SizePolicy::Fixed => hint,
                SizePolicy::Expanding => available,
                SizePolicy::Auto => 0.0,
            }
        }

        let raw = Vec2::new(
            axis(self.horizontal_policy, self.size_hint.x, available.x),
            axis(self.vertical_policy, self.size_hint.y, available.y),
        );
        raw.clamp(self.minimum, self.maximum)
    }

    /// Stroke the border decoration over `rect` when a border is set.
    /// Called after the node's content has been drawn.
    pub fn draw_border(&self, backend: &mut dyn Backend, rect: Rect) {
        if self.border_width > 0.0 {
            backend.draw_rect(rect.min(), rect.max(), self.color, self.border_width);
        }
    }
}
