//! Student roster — an in-memory, singly-linked collection of student records
//! with JSON persistence.
//!
//! The binary entry point is src/main.rs.

pub mod config;
pub mod error;
pub mod logger;
pub mod roster;

pub use error::AppError;
pub use roster::{Roster, Student};
