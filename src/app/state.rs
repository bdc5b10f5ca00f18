//! App state - pure data structure with no I/O logic

use crate::constants::DEFAULT_CATEGORY;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Category, Meal};

/// Main application state - pure data, no I/O
///
/// `all_categories` is the provider's last unfiltered response and is never
/// mutated by searching; the rendered list is always recomputed from it via
/// [`AppState::visible_categories`]. Fetches are tagged with ids from
/// `next_request_id` and only the most recently issued id per kind is
/// honored when responses arrive, so out-of-order responses cannot clobber a
/// newer selection.
pub struct AppState {
    // Provider data
    pub all_categories: Vec<Category>,
    pub meals: Vec<Meal>,

    // Selection
    pub active_category: String,
    pub selected_category: usize,
    pub selected_meal: usize,

    // Search box
    pub search_text: String,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,

    // In-flight fetches
    pub next_request_id: u64,
    pub pending_categories_id: Option<u64>,
    pub pending_recipes_id: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            all_categories: Vec::new(),
            meals: Vec::new(),
            active_category: String::from(DEFAULT_CATEGORY),
            selected_category: 0,
            selected_meal: 0,
            search_text: String::new(),
            cursor_position: 0,
            active_panel: Panel::Search,
            input_mode: InputMode::Normal,
            next_request_id: 1,
            pending_categories_id: None,
            pending_recipes_id: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The category list as the UI should show it: the unfiltered base list
    /// narrowed by case-insensitive containment of the search text.
    pub fn visible_categories(&self) -> Vec<Category> {
        if self.search_text.is_empty() {
            return self.all_categories.clone();
        }
        self.all_categories
            .iter()
            .filter(|c| c.matches(&self.search_text))
            .cloned()
            .collect()
    }

    /// Keep the chip selection inside the current visible view
    pub fn clamp_category_selection(&mut self) {
        let len = self.visible_categories().len();
        if len == 0 {
            self.selected_category = 0;
        } else if self.selected_category >= len {
            self.selected_category = len - 1;
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            categories: self.visible_categories(),
            active_category: self.active_category.clone(),
            selected_category: self.selected_category,
            meals: self.meals.clone(),
            selected_meal: self.selected_meal,
            search_text: self.search_text.clone(),
            cursor_position: self.cursor_position,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            categories_loading: self.pending_categories_id.is_some(),
            recipes_loading: self.pending_recipes_id.is_some(),
            show_help: self.show_help,
        }
    }
}
