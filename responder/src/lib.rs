pub mod config;
pub mod error;
pub mod extractor;
pub mod routes;
pub mod server;

pub use config::ResponderConfig;
pub use error::{AppError, ServerError, ServerResult};
pub use server::{start, ResponderHandle};
