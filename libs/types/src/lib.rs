//! Types library for the trading app
//!
//! Record types held by the in-memory store, the constraints they must
//! satisfy at the request boundary, and the seed data loaded at startup.
//!
//! # Modules
//! - `user`: User and Degree records
//! - `trade`: Trade records and their field constraints
//! - `validate`: Boundary validation trait
//! - `seed`: Records present at process start
//! - `errors`: Error taxonomy

pub mod errors;
pub mod seed;
pub mod trade;
pub mod user;
pub mod validate;
