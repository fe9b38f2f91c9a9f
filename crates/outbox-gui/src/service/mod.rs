//! Effects delegated to the host platform.
//!
//! Everything here is fire-and-forget: a request goes out, at most one
//! result comes back as a message, and a result that arrives after the
//! initiating screen was left is dropped by `App::update`.

pub mod draft;
pub mod picker;
pub mod send;
