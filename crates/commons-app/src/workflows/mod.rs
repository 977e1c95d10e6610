//! # Workflows — Portable Coordinator Functions
//!
//! Thin, frontend-agnostic entry points over the shared core. Frontends
//! call these instead of constructing intents by hand; every function takes
//! `&Arc<RwLock<AppCore>>`, dispatches, and returns domain data — never UI
//! types.
//!
//! The separation mirrors the rest of the crate: workflows say *what to
//! do*, screens decide *how to display it*.

pub mod navigation;
pub mod posting;
pub mod session;
