//! # Storage Module
//!
//! Persistence for the debt manager: storage traits that keep the domain
//! layer backend-agnostic, plus the JSON-slot implementation used in
//! production.

pub mod json;
pub mod traits;

pub use traits::*;
