//! Translator Daemon - HTTP API for the Error Translator
//!
//! Serves the translate, health and stats routes over axum.

pub mod routes;
pub mod server;
