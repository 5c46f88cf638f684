//! Single-page personal portfolio built with Leptos.
//!
//! Browser-independent state machines live in [`core`]; [`components`]
//! wires them to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
