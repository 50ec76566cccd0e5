//! HTTP API for the boundary-detection annotation platform.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! leaderboard cache) so integration tests and the binary entrypoint can
//! both access them.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
