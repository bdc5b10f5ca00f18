//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_CATEGORY;
use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{Category, Meal};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Category chips (already filtered by the current search text)
    pub categories: Vec<Category>,
    pub active_category: String,
    pub selected_category: usize,

    // Recipe list for the active category
    pub meals: Vec<Meal>,
    pub selected_meal: usize,

    // Search box
    pub search_text: String,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub categories_loading: bool,
    pub recipes_loading: bool,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            categories: Vec::new(),
            active_category: String::from(DEFAULT_CATEGORY),
            selected_category: 0,
            meals: Vec::new(),
            selected_meal: 0,
            search_text: String::new(),
            cursor_position: 0,
            active_panel: Panel::Search,
            input_mode: InputMode::Normal,
            categories_loading: false,
            recipes_loading: false,
            show_help: false,
        }
    }
}
