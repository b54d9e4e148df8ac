//! Logger bootstrap for hosts and demos.
//!
//! Library code logs through the `log` facade only; this module is the one
//! place a binary wires the facade to `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
