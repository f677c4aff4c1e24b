//! Lotto Engine library.
//!
//! Server-side code for the lottery demo.
//!
//! ## Structure
//!
//! - `use_cases/` - The lottery draw, built on injected ports
//! - `infrastructure/` - Port traits, their system adapters, and configuration
//! - `api/` - HTTP entry points and HTML views
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
