//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`) so individual components can
//! depend on small focused models. Each model is a plain struct wrapped in
//! an `RwSignal` where it is constructed.

pub mod auth;
pub mod chat;
