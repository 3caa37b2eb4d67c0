//! Network layer: a single-shot GET client and the JSON documents it decodes.
mod client;
pub mod json;

pub use client::HttpGetClient;
pub use json::JsonDocument;
