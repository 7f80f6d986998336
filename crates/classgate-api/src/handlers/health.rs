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

//! Health check handler

use crate::error::ApiError;
use crate::handlers::json_response;
use crate::models::HealthResponse;
use chrono::Utc;
use http_body_util::Full;
use hyper::{Request, Response, body::Bytes};

/// Gateway liveness check; does not touch the backend
/// GET /health
pub async fn health_check(_req: Request<hyper::body::Incoming>) -> Result<Response<Full<Bytes>>, ApiError> {
    let health = HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    json_response(&health)
}
