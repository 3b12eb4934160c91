//! Domain logic for customer intake: field types, format checks, the
//! persistence contract and the submission pipeline. No database access.

pub mod customer;
pub mod error;
pub mod store;
pub mod submission;
pub mod types;
pub mod validation;
