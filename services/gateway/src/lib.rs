//! Trading App gateway
//!
//! HTTP front for an in-memory store of users and trades.
//!
//! | Method | Path | Input | Output |
//! |---|---|---|---|
//! | GET | `/users/{user_id}` | path `user_id` | users with that id |
//! | POST | `/users/{user_id}` | path `user_id`, query `new_name` | `{"status": 200, "user": ...}` |
//! | GET | `/trades/` | query `limit` (5), `offset` (0) | page of trades |
//! | POST | `/trades/` | JSON array of trades | `{"status": 200, "data": [...]}` |
//!
//! Inputs that fail to decode or validate are answered with 422 and a
//! `{"detail": [...]}` body listing every offending field.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod store;

// Service version
pub const SERVICE_VERSION: &str = "0.1.0";
