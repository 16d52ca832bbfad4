// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus UI (web by default, desktop with the `desktop` feature)
pub mod app;
