//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob passed to Tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    /// Directory where uploaded photos are written and served from.
    pub upload_dir: String,
    /// Key material for the session and flash-message cookies.
    pub secret: String,
}
