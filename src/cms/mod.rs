//! Thin client for the content management system.
mod client;
mod error;
mod wire;

pub use client::CmsClient;
pub use error::CmsError;
