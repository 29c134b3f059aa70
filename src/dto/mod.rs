pub mod error;
pub mod jikan;
