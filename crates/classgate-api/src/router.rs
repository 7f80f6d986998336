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

//! HTTP routing for the gateway

use crate::backend::TeacherBackend;
use crate::error::ApiError;
use crate::handlers::{health, sessions, teachers};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::sync::Arc;
use tracing::info;

/// HTTP router for the gateway routes
pub struct Router {
    backend: Arc<dyn TeacherBackend>,
}

impl Router {
    /// Create a new router around a shared backend handle
    pub fn new(backend: Arc<dyn TeacherBackend>) -> Self {
        Self { backend }
    }

    /// Route a request to the appropriate handler
    pub async fn route(&self, req: Request<hyper::body::Incoming>) -> Result<Response<Full<Bytes>>, ApiError> {
        let path = req.uri().path().to_string();
        let method = req.method().clone();

        info!("Routing request: {} {}", method, path);

        match (&method, path.as_str()) {
            (&Method::GET, "/registerTeacher") => teachers::register_teacher(req, self.backend.clone()).await,
            (&Method::GET, "/addSession") => sessions::add_session(req, self.backend.clone()).await,
            (&Method::GET, "/getSession") => sessions::get_session(req, self.backend.clone()).await,
            (&Method::GET, "/health") => health::health_check(req).await,

            // The surface is GET-only
            (_, "/registerTeacher" | "/addSession" | "/getSession" | "/health") => Err(ApiError::MethodNotAllowed {
                message: format!("{} not supported on {}", method, path),
            }),

            _ => Err(ApiError::NotFound {
                message: format!("No route for {}", path),
            }),
        }
    }
}
