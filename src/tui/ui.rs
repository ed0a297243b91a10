use crate::tui::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Items
            Constraint::Length(3), // Stats
        ])
        .split(frame.size());

    draw_input(frame, chunks[0], app);
    draw_todo_list(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input && !app.help_mode;

    let line = if focused {
        let (before_cursor, after_cursor) = app.input.split_at_cursor();
        Line::from(vec![
            Span::raw(before_cursor.to_string()),
            Span::styled("█", Style::default().fg(Color::White)),
            Span::raw(after_cursor.to_string()),
        ])
    } else if app.input.is_empty() {
        Line::from(Span::styled(
            "What needs to be done?",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input.buffer.clone())
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(app.title.as_str()),
    );

    frame.render_widget(input, area);
}

fn draw_todo_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .todo_list
        .iter()
        .map(|todo| {
            let checkbox = if todo.is_done() { "☑" } else { "☐" };
            let style = if todo.is_done() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(
                format!("{} {}", checkbox, todo.title()),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Items"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if app.focus == Focus::List && !app.todo_list.is_empty() {
        list_state.select(Some(app.navigation.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mark_all = if app.todo_list.all_are_done() { "☑" } else { "☐" };
    let hints = match app.focus {
        Focus::Input => "Enter: add | Tab: list | Esc: quit",
        Focus::List => "Space: toggle | a: mark all | c: clear completed | ?: help | q: quit",
    };

    let footer_text = format!(
        "{} left | {} Mark all as done | Completed: {} | {}",
        app.stats.text(),
        mark_all,
        app.completed_items(),
        hints
    );

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Todos - Keyboard Commands",
        "",
        "INPUT:",
        "  Enter             Add the typed todo",
        "  ←→ / Home/End     Move cursor",
        "  Ctrl+W            Delete previous word",
        "  Tab / ↓           Focus the list",
        "",
        "LIST:",
        "  ↑↓ / j/k          Navigate up/down",
        "  Space / Enter     Toggle todo completion",
        "  a                 Mark all as done / not done",
        "  c                 Clear completed todos",
        "  Tab / Esc / i     Back to input",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(70, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
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
