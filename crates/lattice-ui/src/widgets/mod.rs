//! The built-in widget set: leaves (Label, Button, ProgressBar),
//! containers (Boxes, Grid), and the window roots.

pub mod boxes;
pub mod button;
pub mod grid;
pub mod label;
pub mod progress;
pub mod window;

pub use boxes::{Boxes, Orientation};
pub use button::Button;
pub use grid::Grid;
pub use label::Label;
pub use progress::ProgressBar;
pub use window::{ApplicationWindow, WindowWidget};
