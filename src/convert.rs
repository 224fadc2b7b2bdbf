pub mod dto;

/// Route of the relay endpoint, relative to its base URL.
pub const CONVERT_PATH: &str = "/convert-to-sql";

#[cfg(feature = "convert-in")]
pub mod back;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub mod form;

#[cfg(feature = "convert-front")]
pub mod front;
