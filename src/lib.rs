#![deny(missing_docs)]

//! A typed request builder and websocket client for the bzn key-value
//! protocol.
//!
//! The builder half produces serialized CRUD requests addressed to a
//! database scope (`db_uuid`); the client half drives a single blocking
//! websocket connection, including a sequenced ping exchange. Field names
//! like `bzn-api` and `request-id` are part of the wire contract and are
//! reproduced exactly.

mod builder;
mod client;
mod common;
mod error;

pub use builder::{build_create, build_delete, build_read, build_update};
pub use client::{PingClient, WsConnection};
pub use common::{Cmd, Payload, PingMessage, Request, CRUD_API, PING_API};
pub use error::{BznError, Result};
