//! # AI Studio Core
//!
//! Request-side logic of AI Studio Proxy that does not touch the browser
//! session.
//!
//! ```text
//! aistudio-core/src/
//! ├── thinking/   # reasoning_effort -> ThinkingDirective, plus log formatting
//! ├── config.rs   # ThinkingSettings from defaults, JSON file, environment
//! ├── logger.rs   # tracing subscriber setup
//! └── error.rs    # AppError
//! ```
//!
//! Normalization is pure: it never fails and never reads global state. The
//! defaults it falls back to are loaded once by [`config::load_defaults`] and
//! threaded through explicitly.

#![cfg_attr(test, allow(clippy::panic, clippy::print_stdout))]

pub mod config;
pub mod error;
pub mod logger;
pub mod thinking;

pub use error::{AppError, AppResult};
pub use thinking::{format_directive, normalize, resolve_budget, Classification};
