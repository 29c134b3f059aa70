//! Domain entities and value objects shared by the proxy and the client.

pub mod comment;
pub mod listing;
pub mod types;
