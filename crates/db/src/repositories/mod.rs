//! Query functions, one zero-sized repo per table.
//!
//! Repos borrow a connection; acquiring and releasing it is up to the caller.

pub mod customer_repo;

pub use customer_repo::CustomerRepo;
