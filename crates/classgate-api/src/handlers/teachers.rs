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

//! Teacher handlers

use crate::backend::TeacherBackend;
use crate::error::ApiError;
use crate::handlers::json_response;
use crate::query;
use http_body_util::Full;
use hyper::{Request, Response, body::Bytes};
use std::sync::Arc;
use tracing::info;

/// Register a teacher by name
/// GET /registerTeacher?name=...
pub async fn register_teacher(req: Request<hyper::body::Incoming>, backend: Arc<dyn TeacherBackend>) -> Result<Response<Full<Bytes>>, ApiError> {
    let request = query::register_teacher(req.uri().query().unwrap_or(""))?;

    let response = backend.register_teacher(request).await?;

    info!("Registered teacher: id={}", response.id);

    json_response(&response)
}
