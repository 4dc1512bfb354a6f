//! Networking modules for the backend HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls with session cookies attached, and `types`
//! defines the JSON bodies those endpoints exchange.

pub mod api;
pub mod types;
