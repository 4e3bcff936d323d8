//! HTTP client layer: `DashboardHttp`, one GET method per endpoint.

pub mod client;

pub use client::DashboardHttp;
