pub mod filter;
pub mod request;
pub mod server;

pub use crate::domain::model::Venue;
pub use crate::domain::ports::{ConfigProvider, VenueLookup};
pub use crate::utils::error::{QueryError, Result};
