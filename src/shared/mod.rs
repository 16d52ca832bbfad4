pub mod constants;
pub mod errors;
pub mod logging;

// Dioxus-facing pieces (hooks need a component scope)
pub mod hooks;
pub mod services;
