//! API layer - HTTP entry points and the HTML they render.

pub mod http;
pub mod views;
