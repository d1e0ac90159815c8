use std::future::Future;

use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::model::BatchDocument;
use crate::config::TrelloConfig;

/// Anything able to produce the three-list batch document.
pub trait BoardSource: Send + Sync {
    fn fetch_batch(&self) -> impl Future<Output = Result<BatchDocument, BoardError>> + Send;
}

/// Why the upstream board could not be read. Callers collapse all of these
/// into a single "unavailable" response; the variants exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board url: {0}")]
    Url(String),
    #[error("board request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("board returned HTTP {0}")]
    Status(StatusCode),
    #[error("board response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// reqwest-backed client for the Trello batch endpoint.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: Client,
    config: TrelloConfig,
}

impl TrelloClient {
    pub fn new(config: TrelloConfig) -> Result<Self, BoardError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(BoardError::Transport)?;

        Ok(Self { client, config })
    }

    /// `/batch?urls=/lists/{a}/cards,/lists/{b}/cards,/lists/{c}/cards&key=..&token=..`
    pub fn batch_url(&self) -> Result<Url, BoardError> {
        let lists = &self.config.lists;
        let urls = format!(
            "/lists/{}/cards,/lists/{}/cards,/lists/{}/cards",
            lists.applied, lists.interviewing, lists.closed
        );

        let url = Url::parse_with_params(
            &format!("{}/batch", self.config.base_url),
            &[
                ("urls", urls.as_str()),
                ("key", self.config.api_key.as_str()),
                ("token", self.config.api_token.as_str()),
            ],
        )
        .map_err(|err| BoardError::Url(err.to_string()))?;

        Ok(url)
    }
}

impl BoardSource for TrelloClient {
    async fn fetch_batch(&self) -> Result<BatchDocument, BoardError> {
        let url = self.batch_url()?;
        debug!(endpoint = %format!("{}/batch", self.config.base_url), "requesting board batch");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| BoardError::Transport(err.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "board batch request rejected");
            return Err(BoardError::Status(status));
        }

        let document = response
            .json::<BatchDocument>()
            .await
            .map_err(|err| BoardError::Decode(err.without_url()))?;

        debug!(
            groups = document.groups.len(),
            cards = document.card_count(),
            "board batch decoded"
        );

        Ok(document)
    }
}
