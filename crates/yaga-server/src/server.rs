//! HTTP server loop.
//!
//! `tiny_http` accepts connections on a blocking thread; every request is
//! handed to the tokio runtime as its own task, and the (blocking) write of
//! the response goes back through `spawn_blocking`.

use std::net::SocketAddr;
use std::sync::Arc;

use yaga_application::ExerciseSessionUseCase;
use yaga_core::config::ServerConfig;
use yaga_core::error::{Result, YagaError};

use crate::handler::RequestHandler;
use crate::static_files::StaticFiles;

pub struct ExerciseServer {
    http: Arc<tiny_http::Server>,
    handler: Arc<RequestHandler>,
}

/// Stops a running [`ExerciseServer`] from another task.
#[derive(Clone)]
pub struct ShutdownHandle {
    http: Arc<tiny_http::Server>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.http.unblock();
    }
}

impl ExerciseServer {
    /// Binds the listener. Use port 0 to let the OS pick one.
    pub fn bind(config: &ServerConfig, usecase: Arc<ExerciseSessionUseCase>) -> Result<Self> {
        let http = tiny_http::Server::http(config.bind_address.as_str()).map_err(|e| {
            YagaError::io(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;
        let handler = RequestHandler::new(usecase, StaticFiles::new(&config.static_dir));

        Ok(Self {
            http: Arc::new(http),
            handler: Arc::new(handler),
        })
    }

    /// The bound address, resolved if port 0 was requested.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            http: self.http.clone(),
        }
    }

    /// Serves requests until [`ShutdownHandle::shutdown`] is called.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn run(self) -> Result<()> {
        let runtime = tokio::runtime::Handle::current();
        let http = self.http.clone();
        let handler = self.handler.clone();

        tokio::task::spawn_blocking(move || {
            for request in http.incoming_requests() {
                let handler = handler.clone();
                runtime.spawn(async move {
                    let method = request.method().clone();
                    let url = request.url().to_string();
                    let response = handler.handle(&method, &url).await;
                    let status = response.status;

                    let written =
                        tokio::task::spawn_blocking(move || request.respond(response.into_http()))
                            .await;
                    match written {
                        Ok(Ok(())) => tracing::debug!("{} {} -> {}", method, url, status),
                        Ok(Err(e)) => {
                            tracing::warn!("Failed to write response for {} {}: {}", method, url, e)
                        }
                        Err(e) => tracing::warn!("Response task for {} {} died: {}", method, url, e),
                    }
                });
            }
            tracing::info!("HTTP listener stopped");
        })
        .await
        .map_err(|e| YagaError::internal(format!("HTTP listener thread failed: {}", e)))
    }
}
