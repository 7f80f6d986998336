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

//! Wire types and client for the `teacher.TeacherService` backend.
//!
//! Hand-maintained mirror of `proto/teacher.proto`; keep the two in sync.
//! The client follows tonic codegen shape so it behaves exactly like a
//! generated stub, without a build-time protoc requirement. Response types
//! additionally derive serde with camelCase field names, which is the JSON
//! rendering the backend contract uses on the HTTP side.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeacherRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeacherResponse {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSessionRequest {
    #[prost(int32, tag = "1")]
    pub teacher_id: i32,
    #[prost(int32, tag = "2")]
    pub course_id: i32,
    #[prost(string, tag = "3")]
    pub date: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSessionResponse {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSessionRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSessionResponse {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(int32, tag = "2")]
    pub teacher_id: i32,
    #[prost(int32, tag = "3")]
    pub course_id: i32,
    #[prost(string, tag = "4")]
    pub date: ::prost::alloc::string::String,
}

/// Client for `teacher.TeacherService`, in generated-stub shape.
pub mod teacher_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct TeacherServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl TeacherServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> TeacherServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn register_teacher(
            &mut self,
            request: impl tonic::IntoRequest<super::RegisterTeacherRequest>,
        ) -> std::result::Result<tonic::Response<super::RegisterTeacherResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::new(tonic::Code::Unknown, format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/teacher.TeacherService/RegisterTeacher");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("teacher.TeacherService", "RegisterTeacher"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn add_session(
            &mut self,
            request: impl tonic::IntoRequest<super::AddSessionRequest>,
        ) -> std::result::Result<tonic::Response<super::AddSessionResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::new(tonic::Code::Unknown, format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/teacher.TeacherService/AddSession");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("teacher.TeacherService", "AddSession"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_session(
            &mut self,
            request: impl tonic::IntoRequest<super::GetSessionRequest>,
        ) -> std::result::Result<tonic::Response<super::GetSessionResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::new(tonic::Code::Unknown, format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/teacher.TeacherService/GetSession");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("teacher.TeacherService", "GetSession"));
            self.inner.unary(req, path, codec).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json_uses_camel_case() {
        let res = AddSessionResponse { session_id: 42 };
        assert_eq!(serde_json::to_string(&res).unwrap(), r#"{"sessionId":42}"#);

        let res = GetSessionResponse {
            id: 7,
            teacher_id: 1,
            course_id: 2,
            date: "2024-01-01".to_string(),
        };
        assert_eq!(serde_json::to_string(&res).unwrap(), r#"{"id":7,"teacherId":1,"courseId":2,"date":"2024-01-01"}"#);
    }

    #[test]
    fn test_register_response_round_trips() {
        let json = r#"{"id":1,"name":"Ada"}"#;
        let decoded: RegisterTeacherResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.id, 1);
        assert_eq!(decoded.name, "Ada");
        assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
    }
}
