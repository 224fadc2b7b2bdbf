pub mod config;
pub mod convert;
pub mod schema;
pub mod service;

#[cfg(feature = "infer")]
pub mod infer;

#[cfg(feature = "infer")]
pub mod prompts;
