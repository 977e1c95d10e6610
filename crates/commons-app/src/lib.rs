//! # Commons App
//!
//! Portable headless application core for the Commons campus super-app.
//!
//! Six independently authored sub-applications (community, matching,
//! messages, profile, marketplace cart, counselling) are composed into one
//! navigable session. This crate owns everything with an invariant:
//!
//! - [`core::AppCore`] — single owner of all session state; mutation goes
//!   through [`core::Intent`] dispatch.
//! - [`views`] — the view-state tree frontends render from: auth stage,
//!   mounted sub-app, community secondary view, the board store, notices.
//! - [`interceptor`] — declarative classification of raw activation events
//!   into navigation commands, evaluated in the capture phase.
//! - [`shell`] — the sub-application host: mounts exactly one sub-app and
//!   hands every one of them the same [`ui::Navigator`].
//! - [`workflows`] — coordinator functions frontends call directly.
//!
//! Rendering, networking, and persistence are deliberately absent; the core
//! is synchronous and single-threaded by contract, with all transitions
//! applied inside the caller's dispatch.

pub mod core;
pub mod interceptor;
pub mod shell;
pub mod timers;
pub mod ui;
pub mod views;
pub mod workflows;

pub use crate::core::{AppConfig, AppCore, Destination, DispatchOutcome, Intent};
pub use crate::ui::{Navigator, UiAppCore};
pub use crate::views::{RenderTarget, ViewState};
