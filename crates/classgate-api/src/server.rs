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

//! HTTP server implementation using Hyper

use crate::backend::{TeacherBackend, TeacherClient};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::router::Router;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tracing::{error, info};

/// API server using Hyper
pub struct ApiServer {
    local_addr: SocketAddr,
    listener: TcpListener,
    router: Arc<Router>,
}

impl ApiServer {
    /// Create a new API server, dialing the backend eagerly
    pub async fn new(config: Config) -> ApiResult<Self> {
        let request_timeout = Duration::from_secs(config.request_timeout_secs);
        let backend = TeacherClient::new(&config.backend_address, request_timeout).await?;

        Self::with_backend(config, Arc::new(backend)).await
    }

    /// Create a new API server around an already-constructed backend handle
    pub async fn with_backend(config: Config, backend: Arc<dyn TeacherBackend>) -> ApiResult<Self> {
        let bind_address: SocketAddr = config.bind_address.parse().map_err(|e| ApiError::BadRequest {
            message: format!("Invalid bind address: {}", e),
        })?;

        // Bind here so the resolved address (port 0 included) is known
        // before the accept loop starts.
        let listener = TcpListener::bind(bind_address).await?;
        let local_addr = listener.local_addr()?;

        let router = Arc::new(Router::new(backend));

        Ok(Self { local_addr, listener, router })
    }

    /// Get the bound address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve connections until ctrl-c
    pub async fn run(self) -> ApiResult<()> {
        info!("Classgate listening on http://{}", self.local_addr);

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Classgate shutting down");
                    break;
                }

                accept_res = self.listener.accept() => {
                    let (stream, remote_addr) = match accept_res {
                        Ok(conn) => conn,
                        Err(e) => {
                            error!("Failed to accept connection: {}", e);
                            continue;
                        }
                    };

                    let io = TokioIo::new(stream);
                    let router = self.router.clone();

                    // One task per connection; handlers are stateless
                    tokio::task::spawn(async move {
                        let service = ServiceBuilder::new().service(service_fn(move |req: Request<Incoming>| {
                            let router = router.clone();
                            async move {
                                match router.route(req).await {
                                    Ok(response) => Ok::<_, Infallible>(response),
                                    Err(e) => Ok(Response::from(e)),
                                }
                            }
                        }));

                        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                            error!("Error serving connection from {}: {}", remote_addr, err);
                        }
                    });
                }
            }
        }

        Ok(())
    }
}
