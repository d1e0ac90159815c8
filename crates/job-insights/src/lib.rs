//! Job-search board insights: reads the three workflow lists of a Trello
//! board in one batch call and reshapes the cards into summary views.

pub mod board;
pub mod config;
pub mod error;
pub mod insights;
pub mod router;
pub mod service;
pub mod telemetry;

pub use router::insights_router;
pub use service::InsightsService;
