//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the route guard while reading shared
//! auth state from the Leptos context provider at the application root.

pub mod footer;
pub mod header;
pub mod protected;
pub mod spinner;
