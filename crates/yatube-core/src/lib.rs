//! # Yatube Core
//!
//! The domain layer of the Yatube blogging backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod forms;
pub mod ports;

pub use error::DomainError;
