//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::DEFAULT_CATEGORY;
use crate::messages::ui_events::InputMode;
use crate::messages::{FetchCommand, FetchKind, FetchResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Search input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.search_text.len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            let new_pos = self.search_text[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.search_text.len() {
            let new_pos = self.search_text[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.search_text.len());
            self.cursor_position = new_pos;
        }
    }

    /// One character typed into the search box. The visible category view is
    /// recomputed on every keystroke; the base list is untouched.
    pub fn search_char(&mut self, c: char) {
        if self.cursor_position <= self.search_text.len() {
            self.search_text.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
            self.clamp_category_selection();
        }
    }

    /// Backspace in the search box. When the text transitions to empty this
    /// additionally refreshes the base list from the provider, so clearing
    /// the field always ends with the unfiltered server response.
    pub fn search_backspace(&mut self) -> Option<FetchCommand> {
        if self.cursor_position == 0 {
            return None;
        }
        let prev_pos = self.search_text[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.search_text.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.clamp_category_selection();

        if self.search_text.is_empty() {
            Some(self.fetch_categories())
        } else {
            None
        }
    }

    // ========================
    // Category chips
    // ========================

    pub fn next_category(&mut self) {
        let len = self.visible_categories().len();
        if len > 0 {
            self.selected_category = (self.selected_category + 1) % len;
        }
    }

    pub fn prev_category(&mut self) {
        let len = self.visible_categories().len();
        if len > 0 {
            self.selected_category = self
                .selected_category
                .checked_sub(1)
                .unwrap_or(len - 1);
        }
    }

    /// Select the highlighted chip: issue a recipe fetch for it, make it the
    /// active category and empty the recipe list until the fetch lands.
    pub fn select_category(&mut self) -> Option<FetchCommand> {
        let category = self
            .visible_categories()
            .get(self.selected_category)
            .map(|c| c.name.clone())?;

        let cmd = self.fetch_recipes(&category);
        self.active_category = category;
        self.meals.clear();
        self.selected_meal = 0;
        Some(cmd)
    }

    // ========================
    // Recipe list
    // ========================

    pub fn next_recipe(&mut self) {
        if !self.meals.is_empty() {
            self.selected_meal = (self.selected_meal + 1) % self.meals.len();
        }
    }

    pub fn prev_recipe(&mut self) {
        if !self.meals.is_empty() {
            self.selected_meal = self
                .selected_meal
                .checked_sub(1)
                .unwrap_or(self.meals.len() - 1);
        }
    }

    // ========================
    // Fetch issuing
    // ========================

    /// Issue a category list fetch. The new id supersedes any in-flight
    /// categories request; the older response will be dropped on arrival.
    pub fn fetch_categories(&mut self) -> FetchCommand {
        let id = self.next_id();
        self.pending_categories_id = Some(id);
        FetchCommand::Categories { id }
    }

    /// Issue a recipe fetch for `category`, superseding any in-flight one.
    pub fn fetch_recipes(&mut self, category: &str) -> FetchCommand {
        let id = self.next_id();
        self.pending_recipes_id = Some(id);
        FetchCommand::Recipes {
            id,
            category: category.to_string(),
        }
    }

    /// Startup: one categories fetch plus one recipes fetch for the default
    /// category, before any user input.
    pub fn mount(&mut self) -> [FetchCommand; 2] {
        [self.fetch_categories(), self.fetch_recipes(DEFAULT_CATEGORY)]
    }

    /// Re-issue both fetches for the current active category.
    pub fn refresh(&mut self) -> [FetchCommand; 2] {
        let active = self.active_category.clone();
        [self.fetch_categories(), self.fetch_recipes(&active)]
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response. Responses whose id is not the most recently
    /// issued one of their kind are stale and dropped whole; failures are
    /// logged and leave prior data untouched.
    pub fn handle_response(&mut self, response: FetchResponse) {
        let pending = match response.kind() {
            FetchKind::Categories => self.pending_categories_id,
            FetchKind::Recipes => self.pending_recipes_id,
        };
        if pending != Some(response.id()) {
            tracing::debug!(id = response.id(), kind = ?response.kind(), "Dropping stale response");
            return;
        }

        match response {
            FetchResponse::Categories { categories, .. } => {
                self.all_categories = categories;
                self.pending_categories_id = None;
                self.clamp_category_selection();
            }
            FetchResponse::Recipes { meals, category, .. } => {
                tracing::debug!(category = %category, count = meals.len(), "Recipes updated");
                self.meals = meals;
                self.selected_meal = 0;
                self.pending_recipes_id = None;
            }
            FetchResponse::Failed { kind, reason, .. } => {
                tracing::warn!(kind = ?kind, %reason, "Fetch failed; keeping previous data");
                match kind {
                    FetchKind::Categories => self.pending_categories_id = None,
                    FetchKind::Recipes => self.pending_recipes_id = None,
                }
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
