use crate::coords::Vec2;

/// The host's OS-level window, as seen by the root widget.
///
/// The root window node reads the live framebuffer size every frame and
/// pushes title changes through synchronously.
pub trait WindowSurface {
    /// Set the OS window title. Takes effect immediately.
    fn set_title(&mut self, title: &str);
    /// Current framebuffer size in logical pixels.
    fn framebuffer_size(&self) -> Vec2;
}

/// In-memory [`WindowSurface`] for tests and headless demos.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    title: String,
    size: Vec2,
}

impl HeadlessSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            title: String::new(),
            size,
        }
    }

    /// Last title pushed through [`WindowSurface::set_title`].
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Simulate an OS resize; the next frame's root geometry follows it.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

impl WindowSurface for HeadlessSurface {
    fn set_title(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
    }

    fn framebuffer_size(&self) -> Vec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_round_trips() {
        let mut s = HeadlessSurface::new(Vec2::new(640.0, 480.0));
        s.set_title("hello");
        assert_eq!(s.title(), "hello");
    }

    #[test]
    fn resize_is_visible_immediately() {
        let mut s = HeadlessSurface::new(Vec2::new(640.0, 480.0));
        s.set_size(Vec2::new(1280.0, 720.0));
        assert_eq!(s.framebuffer_size(), Vec2::new(1280.0, 720.0));
    }
}
