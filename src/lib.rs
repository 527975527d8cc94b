//! stockroom - inventory tracking over a small REST API
//!
//! The server side maps five HTTP routes onto a single SQLite table. The
//! client side keeps a local copy of the list and reloads it after every
//! change.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod logging;
pub mod model;
pub mod store;
