//! Upstream job-search board: wire model and the sources able to produce it.

mod client;
mod memory;
mod model;

pub use client::{BoardError, BoardSource, TrelloClient};
pub use memory::StaticBoard;
pub use model::{company_key, BatchDocument, BatchGroup, Card, Label};
