//! # AI Studio Types
//!
//! Wire types, settings, and error definitions shared by the AI Studio Proxy
//! crates.
//!
//! - **`thinking`** - Raw `reasoning_effort` values, the canonical
//!   [`ThinkingDirective`], presets, and process-wide defaults
//! - **`config`** - Serializable thinking-budget settings and their validation
//! - **`error`** - Typed configuration errors
//!
//! ## Architecture Role
//!
//! ```text
//!        aistudio-types (this crate)
//!                │
//!                ▼
//!          aistudio-core
//!                │
//!                ▼
//!          aistudio-cli
//! ```
//!
//! Everything here is plain data: no I/O, no global state. Values are cheap to
//! clone and safe to share across threads.

pub mod config;
pub mod error;
pub mod thinking;

pub use config::ThinkingSettings;
pub use error::{ConfigError, Result};
pub use thinking::{
    ProcessDefaults, ReasoningEffort, ThinkingDirective, ThinkingMode, ThinkingPreset,
    DEFAULT_THINKING_BUDGET,
};
