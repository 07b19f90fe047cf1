//! HTTP client layer — `HitbtcHttp`, one method per endpoint.

pub mod client;

pub use client::HitbtcHttp;
