//! # Core Application Module
//!
//! The types every embedder touches:
//!
//! - [`AppCore`]: single owner of the session's view state
//! - [`AppConfig`]: startup configuration
//! - [`Intent`]: user actions dispatched into the core
//! - [`DispatchOutcome`]: what a dispatch did (applied / ignored / rejected)

mod app;
mod intent;
mod outcome;

pub use app::{AppConfig, AppCore};
pub use intent::{Destination, Intent};
pub use outcome::{DispatchOutcome, IgnoreReason, RejectReason};
