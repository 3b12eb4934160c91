//! `intake-form` library crate.
//!
//! The form adapter around the submission pipeline: widget state, user
//! feedback and the terminal session. The binary entrypoint lives in
//! `main.rs`.

pub mod config;
pub mod feedback;
pub mod form;
pub mod session;
pub mod startup;
