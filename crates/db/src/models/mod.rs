//! Row structs read back from the database.
//!
//! Inserts take [`intake_core::customer::CustomerRecord`] directly, so there
//! is no separate create DTO.

pub mod customer;
