use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::settings::{API_KEY_ENV, FONT_WEIGHTS};
use crate::fonts::FontSource;
use crate::tui::app::App;
use crate::tui::controls::Control;

const GUTTER_WIDTH: u16 = 5;

pub fn draw<S: FontSource>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(chunks[1]);
    draw_controls(f, app, body[0]);
    draw_preview(f, app, body[1]);

    draw_help(f, app, chunks[2]);

    if app.picker.is_open {
        draw_font_picker(f, app);
    }
}

/// The options the editor currently runs with
pub fn header_text<S: FontSource>(app: &App<S>) -> String {
    let config = app.state.editor_config();
    format!(
        "font-family: {}  │  {}px / {}px  │  weight {}  │  {}",
        config.font_family,
        config.font_size_px,
        config.line_height_px,
        config.font_weight,
        config.active_language
    )
}

fn draw_header<S: FontSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(header_text(app))
        .block(Block::default().borders(Borders::ALL).title("typecase"))
        .style(Style::default().fg(Color::White));
    f.render_widget(header, area);
}

fn draw_controls<S: FontSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let lines: Vec<Line> = Control::ALL
        .iter()
        .filter(|control| **control != Control::Editor)
        .map(|control| control_line(app, *control))
        .collect();
    let controls = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(controls, chunks[0]);

    let links: Vec<Line> = app
        .state
        .loader
        .link_tags()
        .into_iter()
        .map(Line::from)
        .collect();
    let links = Paragraph::new(links)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Loaded stylesheets"),
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false });
    f.render_widget(links, chunks[1]);
}

fn control_line<S: FontSource>(app: &App<S>, control: Control) -> Line<'static> {
    let config = app.state.editor_config();
    let value = match control {
        Control::FontButton => app.state.selected_font().name.clone(),
        Control::FontSize => format!("{} px", app.font_size_field.text()),
        Control::LineHeight => app.line_height_field.text().to_string(),
        Control::FontWeight => FONT_WEIGHTS
            .get(app.weight_index)
            .copied()
            .unwrap_or_default()
            .to_string(),
        Control::Language => config.active_language.clone(),
        Control::VimToggle => {
            if app.state.is_modal_mode_enabled() {
                "on".to_string()
            } else {
                "off".to_string()
            }
        }
        Control::Editor => String::new(),
    };

    let focused = app.focus == control && !app.picker.is_open;
    let marker = if focused { "▶ " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{:<12}", control.label()), style),
        Span::styled(value, style),
    ])
}

fn draw_preview<S: FontSource>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let focused = app.focus == Control::Editor && !app.picker.is_open;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Preview ({})", app.state.editor.host().language()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let text_area = chunks[0];

    let editor = app.state.editor.host();
    let spacer = editor.spacer_rows();
    let rows_per_line = spacer + 1;
    let visible_lines = (text_area.height as usize / rows_per_line).max(1);

    let cursor = editor.cursor();
    if cursor.row < app.editor_scroll {
        app.editor_scroll = cursor.row;
    } else if cursor.row >= app.editor_scroll + visible_lines {
        app.editor_scroll = cursor.row + 1 - visible_lines;
    }

    let text_style = if editor.is_bold() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let gutter_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    for (index, text) in editor
        .lines()
        .iter()
        .enumerate()
        .skip(app.editor_scroll)
        .take(visible_lines)
    {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>4} ", index + 1), gutter_style),
            Span::styled(text.clone(), text_style),
        ]));
        for _ in 0..spacer {
            lines.push(Line::from(""));
        }
    }
    f.render_widget(Paragraph::new(lines), text_area);

    let status = Paragraph::new(app.state.status.text().to_string())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(status, chunks[1]);

    if focused {
        let row = ((cursor.row - app.editor_scroll) * rows_per_line) as u16;
        let col = (cursor.col as u16).saturating_add(GUTTER_WIDTH);
        let x = text_area.x.saturating_add(col).min(text_area.right().saturating_sub(1));
        f.set_cursor(x, text_area.y + row);
    }
}

fn draw_help<S: FontSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let text = if app.picker.is_open {
        "Type to search  ↑/↓ move  Enter select  Esc close"
    } else {
        match app.focus {
            Control::FontButton => "Tab/Shift+Tab focus  Enter open font picker  Ctrl+Q quit",
            Control::FontSize | Control::LineHeight => {
                "Tab/Shift+Tab focus  type a value or ↑/↓ to adjust  Ctrl+Q quit"
            }
            Control::FontWeight | Control::Language => {
                "Tab/Shift+Tab focus  ←/→ change  Ctrl+Q quit"
            }
            Control::VimToggle => "Tab/Shift+Tab focus  Space toggle vim mode  Ctrl+Q quit",
            Control::Editor => "Tab/Shift+Tab focus  edit the sample  Ctrl+Q quit",
        }
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Text shown under the list while the picker has nothing to list or is
/// waiting on the remote catalog
pub fn picker_hint<S: FontSource>(app: &App<S>) -> Option<String> {
    let fonts = &app.state.fonts;
    if fonts.is_pending() {
        return Some("Searching…".to_string());
    }
    if fonts.visible().is_empty() {
        if !app.has_api_key && !fonts.current_query().is_empty() {
            return Some(format!("No fonts found (set {API_KEY_ENV} to search Google Fonts)"));
        }
        return Some("No fonts found".to_string());
    }
    None
}

fn draw_font_picker<S: FontSource>(f: &mut Frame, app: &mut App<S>) {
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Select font")
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let search = Paragraph::new(app.picker.search_query.clone())
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, chunks[0]);
    let query_width = app.picker.search_query.chars().count() as u16;
    f.set_cursor(
        (chunks[0].x + 1 + query_width).min(chunks[0].right().saturating_sub(2)),
        chunks[0].y + 1,
    );

    let rows = app.state.fonts.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mark = if row.selected { "✓ " } else { "  " };
            let mut spans = vec![Span::raw(format!("{mark}{}", row.font.name))];
            if let Some(category) = &row.font.category {
                spans.push(Span::styled(
                    format!("  {category}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    app.picker.clamp(items.len());
    app.picker.update_scroll(chunks[1].height as usize);
    let mut list_state = ListState::default()
        .with_selected((!items.is_empty()).then_some(app.picker.highlighted))
        .with_offset(app.picker.scroll_offset);
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    if let Some(hint) = picker_hint(app) {
        let hint = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(hint, chunks[2]);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
