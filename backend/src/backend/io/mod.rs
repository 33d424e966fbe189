//! # IO Layer
//!
//! External interfaces for the backend. Currently REST only; the browser
//! frontend is the sole consumer.

pub mod rest;
