pub mod errors;
pub mod net;

pub use errors::{DecodeError, FetchError};
pub use net::{HttpGetClient, JsonDocument};
