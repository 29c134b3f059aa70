pub mod errors;
pub mod movies;

pub use errors::{ServiceError, ServiceResult};
