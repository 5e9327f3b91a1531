//! # Design Principles in Rust
//!
//! This crate pairs a compliant and a non-compliant version of three
//! object-oriented design principles:
//!
//! ## Dependency Inversion (`dip`)
//! - `correct`: the computer depends on part traits, parts are injected
//! - `error`: the computer is wired to concrete part brands
//!
//! ## Liskov Substitution (`lsp`)
//! - `correct`: rectangle and square implement a shared quadrilateral trait
//! - `error`: the square "inherits" the rectangle and overrides its setters,
//!   so resizing it never terminates
//!
//! ## Open/Closed (`ocp`)
//! - the input method host delegates `display` to a swappable skin
//!
//! Run a demonstration with: `cargo run --bin <dip_correct|dip_error|lsp_correct|lsp_error|open_close>`

pub mod config;
pub mod console;
pub mod dip;
pub mod error;
pub mod logging;
pub mod lsp;
pub mod ocp;

pub use config::DemoConfig;
pub use console::{Console, RecordingConsole, StdoutConsole};
pub use error::PrincipleError;
