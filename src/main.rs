//! Mealdeck TUI - terminal recipe browser for TheMealDB
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async fetches against TheMealDB

mod models;
mod ui;
mod messages;
mod app;
mod network;
mod constants;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use messages::{FetchCommand, FetchResponse, RenderState, UiEvent};
use messages::ui_events::{key_to_ui_event, InputMode, Panel};
use app::AppActor;
use network::NetworkActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file - the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::never(".", "mealdeck.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<FetchCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<FetchResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor (issues the two startup fetches itself)
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Greeting header
            Constraint::Length(3),  // Search box
            Constraint::Length(3),  // Category chips
            Constraint::Min(5),     // Recipes
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_search(f, state, chunks[1]);
    draw_categories(f, state, chunks[2]);
    draw_recipes(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Make your own food,",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(vec![
            Span::styled("stay at ", Style::default().fg(Color::White).bold()),
            Span::styled("home", Style::default().fg(Color::Yellow).bold()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_search(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Search;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused, is_editing))
        .title(" Search any category (/ to type) ");

    let input = Paragraph::new(state.search_text.as_str()).block(block);
    f.render_widget(input, area);

    // Cursor
    if is_editing {
        let column = ui::cursor_column(&state.search_text, state.cursor_position);
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + column as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_categories(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Categories;

    let title = if state.categories_loading {
        " Categories [...] "
    } else {
        " Categories "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused, false))
        .title(title);

    if state.categories.is_empty() {
        let hint = if state.categories_loading {
            "Loading categories..."
        } else if state.search_text.is_empty() {
            "No categories yet."
        } else {
            "No categories match the search."
        };
        let empty = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let chips = ui::category_chips(
        &state.categories,
        &state.active_category,
        state.selected_category,
        is_focused,
    );
    f.render_widget(Paragraph::new(chips).block(block), area);
}

fn draw_recipes(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Recipes;

    let title = if state.recipes_loading {
        format!(" Recipes: {} [...] ", state.active_category)
    } else {
        format!(" Recipes: {} ({}) ", state.active_category, state.meals.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused, false))
        .title(title);

    if state.meals.is_empty() {
        let hint = if state.recipes_loading {
            "Loading recipes..."
        } else {
            "No recipes here yet."
        };
        let empty = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items = ui::meal_items(&state.meals, state.selected_meal, is_focused);
    let list = List::new(items).block(block);

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_meal));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop typing | arrows:move cursor "
    } else {
        " Tab:panel | /:search | Left/Right+Enter:pick category | r:reload | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 MEALDECK TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   Left / Right       Move between category chips
   Up / Down          Move through recipes

 SEARCH
   / or e             Start typing in the search box
   Esc / Enter        Stop typing
   (clearing the box reloads the full category list)

 CATEGORIES
   Enter              Show recipes for the highlighted category

 GENERAL
   r                  Reload categories and recipes
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
