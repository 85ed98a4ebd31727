//! HTTP handlers for contact intake.

pub mod submit;

pub use submit::submit_contact_handler;
