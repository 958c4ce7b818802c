//! Panel hand-off to the rendering collaborator.
//!
//! Sinks are the only components that touch the filesystem; the rest of the
//! pipeline works on in-memory panels.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use snafu::{Backtrace, ResultExt, Snafu};

use crate::panel::SymbolPanel;

/// Errors that can occur while handing panels to a sink.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// The panel could not be converted into the destination format.
    #[snafu(display("Panel serialization error: {source}"))]
    Serialize {
        /// The underlying serializer error.
        source: serde_json::Error,
        /// Where the failure originated.
        backtrace: Backtrace,
    },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// Where the failure originated.
        backtrace: Backtrace,
    },
}

/// Destination for assembled panels.
#[async_trait]
pub trait PanelSink {
    /// The type of output returned after a successful write operation.
    ///
    /// This keeps the trait flexible. For example:
    /// - A directory sink returns `Vec<PathBuf>`, the paths of the files it
    ///   created.
    /// - An in-memory sink used in tests can return the payloads themselves.
    type Output;

    /// Hands a batch of panels to the rendering collaborator.
    async fn write(&self, panels: &[&SymbolPanel]) -> Result<Self::Output, SinkError>;
}

/// Sink that writes one pretty-printed JSON document per panel into a
/// target directory.
pub struct JsonDirSink {
    dir: PathBuf,
}

impl JsonDirSink {
    /// Creates a sink rooted at `dir`. The directory is created on write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

fn file_stem(symbol: &str) -> String {
    symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[async_trait]
impl PanelSink for JsonDirSink {
    type Output = Vec<PathBuf>;

    async fn write(&self, panels: &[&SymbolPanel]) -> Result<Self::Output, SinkError> {
        tokio::fs::create_dir_all(&self.dir).await.context(IoSnafu)?;

        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let mut paths = Vec::with_capacity(panels.len());

        for panel in panels {
            let payload = serde_json::to_vec_pretty(panel).context(SerializeSnafu)?;
            let path = self
                .dir
                .join(format!("{}_{}.json", file_stem(&panel.symbol), timestamp));
            tokio::fs::write(&path, payload).await.context(IoSnafu)?;
            paths.push(path);
        }

        Ok(paths)
    }
}
