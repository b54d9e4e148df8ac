//! Retained widget composition over an immediate-mode drawing backend.
//!
//! Applications build a tree of [`Node`](node::Node)s once — windows,
//! linear boxes, grids, and leaf controls — then render it every frame
//! through a [`Backend`](lattice_core::backend::Backend). The tree holds
//! identity, layout policy, and display state between frames; the backend
//! re-derives pixels from scratch each frame.
//!
//! Nodes live in a [`NodeArena`](tree::NodeArena) and refer to each other
//! by [`NodeId`](tree::NodeId); a [`Scene`](scene::Scene) bundles the arena
//! with a root and drives the per-frame walk. Cross-thread updates arrive
//! through a [`Mailbox`](mailbox::Mailbox) and are applied at frame
//! boundaries via typed arena access.

pub mod error;
pub mod layout;
pub mod mailbox;
pub mod node;
pub mod scene;
pub mod tree;
pub mod widgets;

pub mod prelude {
    //! One-stop imports for building and rendering a widget tree.
    pub use crate::error::UiError;
    pub use crate::layout::{Alignment, LayoutPolicy, SizePolicy};
    pub use crate::mailbox::{Mailbox, MailboxSender};
    pub use crate::node::{Node, NodeBase};
    pub use crate::scene::Scene;
    pub use crate::tree::{NodeArena, NodeId, RenderCtx};
    pub use crate::widgets::{
        ApplicationWindow, Boxes, Button, Grid, Label, Orientation, ProgressBar, WindowWidget,
    };

    pub use lattice_core::backend::{
        Backend, BackendError, HeadlessSurface, RecordingBackend, RegionFlags, WindowFlags,
        WindowSurface,
    };
    pub use lattice_core::coords::{Color, Rect, Vec2};
}
