//! Configuration for the SV table web service

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::link::LinkTemplate;

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 3000)
    pub port: u16,
    /// Directory call files are served from (default: current dir)
    pub data_root: PathBuf,
    /// Browser-link template embedded in responses
    pub link: LinkTemplate,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_root: PathBuf::from("."),
            link: LinkTemplate::default(),
        }
    }
}

impl ServiceConfig {
    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.data_root, PathBuf::from("."));
    }
}
