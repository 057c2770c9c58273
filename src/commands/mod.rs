//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `pages.rs` — page list/create/show/save.
//! - `feedback.rs` — feedback submit/history, suggest dry run, rule listing.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod feedback;
pub mod pages;

pub use feedback::handle_feedback_commands;
pub use pages::handle_page_commands;
