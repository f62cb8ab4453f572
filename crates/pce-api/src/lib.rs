//! Parser config editor API — library crate for the REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pce-e2e-tests`) can build the router around any `ParserEngine`.

pub mod config;
pub mod response;
pub mod routes;
pub mod state;
