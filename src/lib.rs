//! Core library exports for the movie browser.
//!
//! This crate exposes the catalog proxy (domain, repository, service and
//! route layers) and the client-side browsing state used by the UI.

pub mod client;
pub mod domain;
pub mod dto;
#[cfg(feature = "server")]
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
