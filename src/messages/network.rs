//! Network messages - communication between App and Network layers

use crate::models::{Category, Meal};

/// Which endpoint a fetch talks to. The app tracks one pending request id per
/// kind so that stale responses can be told apart from current ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Categories,
    Recipes,
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum FetchCommand {
    /// Fetch the full category list (`/categories.php`)
    Categories { id: u64 },
    /// Fetch the recipe summaries of one category (`/filter.php?c=`)
    Recipes { id: u64, category: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum FetchResponse {
    /// Category list arrived
    Categories { id: u64, categories: Vec<Category> },
    /// Recipe list for `category` arrived (`meals: null` already flattened
    /// to an empty list)
    Recipes {
        id: u64,
        category: String,
        meals: Vec<Meal>,
    },
    /// Network, HTTP or decode failure. All failure modes collapse into one
    /// logged reason; prior state stays untouched.
    Failed {
        id: u64,
        kind: FetchKind,
        reason: String,
    },
}

impl FetchResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            FetchResponse::Categories { id, .. } => *id,
            FetchResponse::Recipes { id, .. } => *id,
            FetchResponse::Failed { id, .. } => *id,
        }
    }

    /// Which fetch kind this response answers
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchResponse::Categories { .. } => FetchKind::Categories,
            FetchResponse::Recipes { .. } => FetchKind::Recipes,
            FetchResponse::Failed { kind, .. } => *kind,
        }
    }
}
