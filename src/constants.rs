//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the public TheMealDB JSON API
pub const MEALDB_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Path of the category list endpoint (no parameters)
pub const CATEGORIES_PATH: &str = "/categories.php";

/// Path of the recipes-by-category endpoint (`?c=<category>`)
pub const FILTER_PATH: &str = "/filter.php";

/// Category shown before the user picks anything
pub const DEFAULT_CATEGORY: &str = "Beef";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Mealdeck TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
