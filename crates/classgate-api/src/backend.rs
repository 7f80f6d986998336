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

//! Backend client for the teacher/session service via gRPC

use crate::error::{ApiError, ApiResult};
use crate::proto::teacher_service_client::TeacherServiceClient;
use crate::proto::{AddSessionRequest, AddSessionResponse, GetSessionRequest, GetSessionResponse, RegisterTeacherRequest, RegisterTeacherResponse};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tonic::Status;
use tonic::transport::Channel;
use tracing::{error, info};

/// The three unary calls the gateway makes against the backend.
///
/// Handlers hold this as a shared `Arc<dyn TeacherBackend>`, so the gRPC
/// channel can be swapped for an in-process double in tests.
#[async_trait]
pub trait TeacherBackend: Send + Sync {
    async fn register_teacher(&self, request: RegisterTeacherRequest) -> Result<RegisterTeacherResponse, Status>;

    async fn add_session(&self, request: AddSessionRequest) -> Result<AddSessionResponse, Status>;

    async fn get_session(&self, request: GetSessionRequest) -> Result<GetSessionResponse, Status>;
}

/// Production backend implementation over a single long-lived channel
#[derive(Clone, Debug)]
pub struct TeacherClient {
    client: TeacherServiceClient<Channel>,
    request_timeout: Duration,
}

impl TeacherClient {
    /// Dial the backend eagerly; a dial failure is surfaced to the caller
    /// so startup can fail fast.
    pub async fn new(endpoint: &str, request_timeout: Duration) -> ApiResult<Self> {
        info!("Connecting to teacher service at: {}", endpoint);

        let channel = Channel::from_shared(endpoint.to_string())
            .map_err(|e| ApiError::HttpError(format!("Invalid backend endpoint: {}", e)))?
            .connect()
            .await?;

        let client = TeacherServiceClient::new(channel);

        info!("Successfully connected to teacher service");

        Ok(Self { client, request_timeout })
    }

    /// Run one backend call under the configured deadline. Expiry is folded
    /// into the same error path as any other backend failure.
    async fn with_deadline<T, F>(&self, call: F) -> Result<T, Status>
    where
        F: Future<Output = Result<tonic::Response<T>, Status>>,
    {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result.map(tonic::Response::into_inner),
            Err(_) => Err(Status::deadline_exceeded("backend call timed out")),
        }
    }
}

#[cfg(test)]
impl TeacherClient {
    /// Build a client over an undialed channel, so the deadline path can be
    /// exercised without a live backend.
    fn with_lazy_channel(endpoint: &'static str, request_timeout: Duration) -> Self {
        let channel = Channel::from_static(endpoint).connect_lazy();
        Self {
            client: TeacherServiceClient::new(channel),
            request_timeout,
        }
    }
}

#[async_trait]
impl TeacherBackend for TeacherClient {
    async fn register_teacher(&self, request: RegisterTeacherRequest) -> Result<RegisterTeacherResponse, Status> {
        info!("Registering teacher: {}", request.name);

        let mut client = self.client.clone();
        self.with_deadline(client.register_teacher(request)).await.map_err(|e| {
            error!("gRPC register_teacher call failed: {}", e);
            e
        })
    }

    async fn add_session(&self, request: AddSessionRequest) -> Result<AddSessionResponse, Status> {
        info!("Adding session: teacher_id={} course_id={} date={}", request.teacher_id, request.course_id, request.date);

        let mut client = self.client.clone();
        self.with_deadline(client.add_session(request)).await.map_err(|e| {
            error!("gRPC add_session call failed: {}", e);
            e
        })
    }

    async fn get_session(&self, request: GetSessionRequest) -> Result<GetSessionResponse, Status> {
        info!("Getting session: {}", request.id);

        let mut client = self.client.clone();
        self.with_deadline(client.get_session(request)).await.map_err(|e| {
            error!("gRPC get_session call failed: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_endpoint_is_rejected() {
        let err = TeacherClient::new("not a valid uri", Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, ApiError::HttpError(_)), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_deadline_expiry_surfaces_as_backend_error() {
        let client = TeacherClient::with_lazy_channel("http://127.0.0.1:1", Duration::from_millis(10));

        // A call that never completes must be cut off by the deadline
        let stalled = std::future::pending::<Result<tonic::Response<()>, Status>>();
        let err = client.with_deadline(stalled).await.unwrap_err();

        assert_eq!(err.code(), tonic::Code::DeadlineExceeded);
        assert_eq!(ApiError::from(err).status_code(), hyper::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
