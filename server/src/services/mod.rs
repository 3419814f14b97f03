//! Services used by the HTTP routes.
//!
//! Business logic lives here so route handlers stay focused on protocol
//! translation and error mapping.

pub mod bundle;
