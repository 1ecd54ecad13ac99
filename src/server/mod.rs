//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

// Submodules
pub mod middleware;
pub mod routes;

// Modular server components
pub mod builder;
pub mod server;
pub mod state;
mod utils;


pub use builder::{run_server, ServerBuilder};
pub use server::HttpServer;
pub use state::AppState;
