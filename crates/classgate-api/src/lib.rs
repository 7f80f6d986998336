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

//! Classgate HTTP API Gateway
//!
//! This crate provides a thin HTTP gateway in front of the teacher/session
//! backend: each GET route decodes its query parameters, performs a single
//! unary gRPC call, and relays the typed response back as JSON.

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod proto;
pub mod query;
pub mod router;
pub mod server;
