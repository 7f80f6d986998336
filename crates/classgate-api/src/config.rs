// Classgate
// Copyright (C) 2025 Classgate Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Configuration management for the API gateway

use std::env;

/// Configuration for the API gateway
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_address: String,

    /// Address of the gRPC teacher/session backend
    pub backend_address: String,

    /// Deadline applied to each outbound backend call, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8081".to_string(),
            backend_address: "http://127.0.0.1:50051".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("CLASSGATE_BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8081".to_string()),

            backend_address: env::var("CLASSGATE_BACKEND_ADDRESS").unwrap_or_else(|_| "http://127.0.0.1:50051".to_string()),

            request_timeout_secs: env::var("CLASSGATE_REQUEST_TIMEOUT_SECS").map(|v| v.parse().unwrap_or(30)).unwrap_or(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_deployment() {
        let config = Config::default();
        assert_eq!(config.bind_address, "0.0.0.0:8081");
        assert_eq!(config.backend_address, "http://127.0.0.1:50051");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
