//! Error types for clipper-server.

use thiserror::Error;

/// Error surface for gateway startup and runtime.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server I/O error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("tokio runtime error: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("render engine error: {0}")]
    Render(#[from] clipper_renderer::RenderError),
}
