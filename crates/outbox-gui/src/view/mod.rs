//! Screen views.
//!
//! Pure functions from state to elements. All interaction flows back
//! through [`crate::message::Message`].

pub mod compose;
pub mod home;

pub use compose::view_compose;
pub use home::view_home;
