//! Lattice core — engine-side boundary for the `lattice-ui` widget tree.
//!
//! This crate owns everything the widget core needs from a host but does not
//! implement itself: coordinate and color primitives, the [`Backend`] draw /
//! layout-query trait, the [`WindowSurface`] trait the root window node
//! synchronizes with, and logger bootstrap.
//!
//! A real host wires `Backend` to its draw-list and `WindowSurface` to its
//! OS window. For tests and headless demos this crate ships
//! [`RecordingBackend`] and [`HeadlessSurface`], which record the draw
//! stream instead of rasterizing it.
//!
//! [`Backend`]: backend::Backend
//! [`WindowSurface`]: backend::WindowSurface
//! [`RecordingBackend`]: backend::RecordingBackend
//! [`HeadlessSurface`]: backend::HeadlessSurface

pub mod backend;
pub mod coords;
pub mod logging;
