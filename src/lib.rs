//! # Mealdeck TUI
//!
//! A terminal recipe browser over the public TheMealDB API.
//!
//! ## Features
//! - Category chips fetched from `/categories.php`
//! - Recipe list per category from `/filter.php?c=`
//! - Case-insensitive category search (client-side, non-destructive)
//! - Stale-response protection: each fetch is id-tagged and only the
//!   newest issued request of a kind is applied
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::{Category, Meal, CategoryListPayload, MealListPayload};
pub use messages::{UiEvent, FetchCommand, FetchKind, FetchResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{MealDbClient, NetworkActor};
