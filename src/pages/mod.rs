//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: form state, request dispatch,
//! and error display. Session gating is not page logic; the route table
//! wraps gated pages in the `Protected` component.

pub mod chat;
pub mod create_image;
pub mod create_logo;
pub mod create_video;
pub mod home;
pub mod posts;
pub mod pricing;
pub mod sign_in;
pub mod sign_up;
