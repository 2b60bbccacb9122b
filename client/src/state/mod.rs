//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `toast`, the two form flows)
//! so individual components can depend on small focused models. Everything
//! except `auth` is plain Rust with no reactive types and is tested natively.

pub mod auth;
pub mod flow;
pub mod session;
pub mod sign_in;
pub mod sign_up;
pub mod toast;
pub mod ui;
