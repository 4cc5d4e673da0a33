//! `medledger-gateway` — client connections to the MedLedger chaincodes.
//!
//! This crate is the client side of the system. A [`Gateway`] owns the
//! shared state store and the registered chaincodes and hands out
//! [`Connection`]s bound to one user and channel:
//!
//! - **query:** evaluate a function; its writes are discarded
//! - **invoke:** submit a function; its writes are committed atomically
//!   on success
//!
//! With the cache enabled, connections are wrapped in a
//! [`CachedConnection`] that serves repeated queries from memory until an
//! invoke on the same chaincode succeeds.

pub mod error;
pub mod config;
pub mod connection;
pub mod cache;
pub mod gateway;

pub use error::GatewayError;
pub use config::{CacheConfig, GatewayConfig};
pub use connection::Connection;
pub use cache::{CachedConnection, QueryCache};
pub use gateway::{Gateway, LocalConnection};
