use ratatui::{prelude::*, widgets::*};

use crate::models::{Category, Meal};

/// Builds the horizontal category chip row. The active category is always
/// marked; the keyboard highlight only shows while the panel has focus.
pub fn category_chips<'a>(
    categories: &'a [Category],
    active_category: &str,
    selected: usize,
    is_focused: bool,
) -> Line<'a> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, category) in categories.iter().enumerate() {
        let is_active = category.name == active_category;
        let is_selected = is_focused && i == selected;

        let style = if is_active {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        let label = if is_selected {
            format!("[{}]", category.name)
        } else {
            format!(" {} ", category.name)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Builds the recipe list items for the active category
pub fn meal_items<'a>(meals: &'a [Meal], selected: usize, is_focused: bool) -> Vec<ListItem<'a>> {
    meals
        .iter()
        .enumerate()
        .map(|(i, meal)| {
            let style = if is_focused && i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let id = meal.id.as_deref().unwrap_or("-");
            ListItem::new(format!("{:>6}  {}", id, meal.name)).style(style)
        })
        .collect()
}

/// Terminal column of a byte cursor inside the search text. The cursor is
/// advanced in utf-8 byte offsets while editing; on screen one char is one
/// column, so the byte prefix has to be counted in chars.
pub fn cursor_column(text: &str, byte_pos: usize) -> usize {
    text[..byte_pos.min(text.len())].chars().count()
}

/// Border style shared by the focusable panels
pub fn panel_border(is_focused: bool, is_editing: bool) -> Style {
    if is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
