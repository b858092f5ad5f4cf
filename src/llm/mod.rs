pub mod client;
pub mod factory;
pub mod gemini;

pub use client::{GenerateResponse, ModelClient};
