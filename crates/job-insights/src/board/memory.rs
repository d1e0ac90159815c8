use std::io::Read;
use std::path::Path;

use super::client::{BoardError, BoardSource};
use super::model::BatchDocument;

/// Board source backed by an already-captured batch document, e.g. a JSON
/// export saved from the batch endpoint. `unavailable()` always fails.
#[derive(Debug, Clone, Default)]
pub struct StaticBoard {
    document: Option<BatchDocument>,
}

impl StaticBoard {
    pub fn new(document: BatchDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    pub fn unavailable() -> Self {
        Self { document: None }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader).map(Self::new)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file)).map_err(std::io::Error::from)
    }
}

impl BoardSource for StaticBoard {
    async fn fetch_batch(&self) -> Result<BatchDocument, BoardError> {
        self.document
            .clone()
            .ok_or(BoardError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}
