//! Network defaults for the dashboard API.

/// Default REST API base URL (a locally running backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "COINBOARD_API_URL";

/// Path prefix every endpoint lives under.
pub const API_PREFIX: &str = "/api";
