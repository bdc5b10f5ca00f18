use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A recipe category as returned by `/categories.php`.
///
/// Only `strCategory` is examined by the application (display name and filter
/// key). Every other provider field is carried through `extra` untouched so
/// renderers can show whatever the API decides to send.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive substring match against the category name
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// A recipe summary as returned by `/filter.php?c=<category>`.
///
/// Opaque to the application beyond the display name; extra fields pass
/// through unexamined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "idMeal", default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Meal {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Envelope of `/categories.php`
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryListPayload {
    pub categories: Vec<Category>,
}

/// Envelope of `/filter.php`. The provider sends `"meals": null` when a
/// category has no matches, so the list is optional on the wire.
#[derive(Clone, Debug, Deserialize)]
pub struct MealListPayload {
    pub meals: Option<Vec<Meal>>,
}

impl MealListPayload {
    /// Flatten the `null` no-matches case into an empty list
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}
