//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Search input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Category chips
    NextCategory,
    PrevCategory,
    SelectCategory,

    // Recipe list
    NextRecipe,
    PrevRecipe,

    // Re-issue both fetches
    Refresh,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Search,
    Categories,
    Recipes,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Search => Panel::Categories,
            Panel::Categories => Panel::Recipes,
            Panel::Recipes => Panel::Search,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Search => Panel::Recipes,
            Panel::Categories => Panel::Search,
            Panel::Recipes => Panel::Categories,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('/') => Some(UiEvent::StartEditing),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::Search => Some(UiEvent::StartEditing),
                Panel::Categories => Some(UiEvent::SelectCategory),
                Panel::Recipes => None,
            },
            KeyCode::Left if active_panel == Panel::Categories => Some(UiEvent::PrevCategory),
            KeyCode::Right if active_panel == Panel::Categories => Some(UiEvent::NextCategory),
            KeyCode::Up if active_panel == Panel::Recipes => Some(UiEvent::PrevRecipe),
            KeyCode::Down if active_panel == Panel::Recipes => Some(UiEvent::NextRecipe),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_typing_goes_to_search_in_editing_mode() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Search,
            InputMode::Editing,
            false,
        );
        assert_eq!(event, Some(UiEvent::CharInput('q')));
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Search,
            InputMode::Normal,
            false,
        );
        assert_eq!(event, Some(UiEvent::Quit));
    }

    #[test]
    fn test_enter_selects_category_on_categories_panel() {
        let event = key_to_ui_event(
            press(KeyCode::Enter),
            Panel::Categories,
            InputMode::Normal,
            false,
        );
        assert_eq!(event, Some(UiEvent::SelectCategory));
    }

    #[test]
    fn test_arrows_only_move_chips_when_focused() {
        let on_chips = key_to_ui_event(
            press(KeyCode::Right),
            Panel::Categories,
            InputMode::Normal,
            false,
        );
        assert_eq!(on_chips, Some(UiEvent::NextCategory));

        let off_chips = key_to_ui_event(
            press(KeyCode::Right),
            Panel::Recipes,
            InputMode::Normal,
            false,
        );
        assert_eq!(off_chips, None);
    }

    #[test]
    fn test_any_key_closes_help() {
        let event = key_to_ui_event(
            press(KeyCode::Char('x')),
            Panel::Recipes,
            InputMode::Normal,
            true,
        );
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_quits_even_while_editing() {
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let event = key_to_ui_event(key, Panel::Search, InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::Quit));
    }
}
