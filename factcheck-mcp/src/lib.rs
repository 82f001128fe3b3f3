//! Capital-fact verification over a fixed MCP envelope.
//!
//! The library side is pure: claim extraction (ordered regex templates),
//! verification against the reference capital table, and envelope formatting.
//! The `factcheck-server` binary wraps this in an axum endpoint.

pub mod models;
pub mod pipeline;
pub mod server;
