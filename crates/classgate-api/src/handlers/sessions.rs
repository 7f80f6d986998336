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

//! Session handlers

use crate::backend::TeacherBackend;
use crate::error::ApiError;
use crate::handlers::json_response;
use crate::query;
use http_body_util::Full;
use hyper::{Request, Response, body::Bytes};
use std::sync::Arc;
use tracing::info;

/// Create a session for a teacher and course
/// GET /addSession?teacherId=...&courseId=...&date=...
pub async fn add_session(req: Request<hyper::body::Incoming>, backend: Arc<dyn TeacherBackend>) -> Result<Response<Full<Bytes>>, ApiError> {
    let request = query::add_session(req.uri().query().unwrap_or(""))?;

    let response = backend.add_session(request).await?;

    info!("Added session: session_id={}", response.session_id);

    json_response(&response)
}

/// Fetch a session by id
/// GET /getSession?id=...
pub async fn get_session(req: Request<hyper::body::Incoming>, backend: Arc<dyn TeacherBackend>) -> Result<Response<Full<Bytes>>, ApiError> {
    let request = query::get_session(req.uri().query().unwrap_or(""))?;

    let response = backend.get_session(request).await?;

    json_response(&response)
}
