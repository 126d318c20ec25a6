//! Screen rendering for the calculator.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Field};
use crate::bmi::BmiResult;
use crate::theme::{
    category_bg, fade_toward, ACCENT, BG_ELEVATED, BG_PRIMARY, BORDER_SUBTLE, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Width of the centered content column.
const COLUMN_WIDTH: u16 = 48;

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Screen background follows the current category, base navy otherwise.
    let screen_bg = app
        .result
        .as_ref()
        .map(|r| category_bg(r.category))
        .unwrap_or(BG_PRIMARY);
    frame.render_widget(Block::default().style(Style::default().bg(screen_bg)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Calculator content
            Constraint::Length(1), // Bottom bar with keybinding hints
        ])
        .split(area);

    render_content(frame, app, main_layout[0]);

    let keybindings = Paragraph::new(" Enter: Calculate | Tab: Switch Field | q: Quit ")
        .style(Style::default().fg(BG_PRIMARY).bg(ACCENT));
    frame.render_widget(keybindings, main_layout[1]);

    if let Some(notice) = &app.notice {
        render_notice(frame, area, notice);
    }
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    // Center a fixed-width column.
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(COLUMN_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Height input
            Constraint::Length(3), // Weight input
            Constraint::Length(1),
            Constraint::Min(0), // Result card
        ])
        .split(column);

    let title = Paragraph::new("BMI Calculator")
        .style(
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let subtitle = Paragraph::new("Check Your Body Mass Index")
        .style(Style::default().fg(TEXT_SECONDARY))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[1]);

    render_input(
        frame,
        rows[3],
        Field::Height,
        &app.height_input,
        "Enter height",
        app.focus == Field::Height,
    );
    render_input(
        frame,
        rows[4],
        Field::Weight,
        &app.weight_input,
        "Enter weight",
        app.focus == Field::Weight,
    );

    if let Some(result) = &app.result {
        render_result_card(frame, rows[6], result, app.fade_alpha());
    }
}

/// Render one bordered input field, with a placeholder when empty and the
/// cursor placed after the text when focused.
fn render_input(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_color = if focused { ACCENT } else { BORDER_SUBTLE };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_ELEVATED));

    let (text, text_color) = if value.is_empty() {
        (placeholder, TEXT_MUTED)
    } else {
        (value, TEXT_PRIMARY)
    };

    let inner = block.inner(area);
    let input = Paragraph::new(text)
        .style(Style::default().fg(text_color))
        .block(block);
    frame.render_widget(input, area);

    if focused {
        let cursor_x = inner.x + (value.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

/// Render the result card: score, category, and the detail table. Text and
/// border colors are blended toward the card background by the fade alpha,
/// so a fresh result fades in and a finished fade shows full colors.
fn render_result_card(frame: &mut Frame, area: Rect, result: &BmiResult, alpha: f64) {
    let fade = |color: Color| fade_toward(color, BG_ELEVATED, alpha);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(BORDER_SUBTLE)))
        .style(Style::default().bg(BG_ELEVATED));
    let inner = card_block.inner(area);
    frame.render_widget(card_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // BMI value
            Constraint::Length(1), // "BMI Score" caption
            Constraint::Length(1),
            Constraint::Length(1), // Category line
            Constraint::Length(1),
            Constraint::Length(1), // Category table row
            Constraint::Length(1), // Ideal weight table row
            Constraint::Min(1),    // Recommendation table row (wraps)
        ])
        .split(inner);

    let score = Paragraph::new(format!("{}", result.bmi))
        .style(
            Style::default()
                .fg(fade(ACCENT))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(score, rows[0]);

    let caption = Paragraph::new("BMI Score")
        .style(Style::default().fg(fade(TEXT_MUTED)))
        .alignment(Alignment::Center);
    frame.render_widget(caption, rows[1]);

    let category = Paragraph::new(result.category.label())
        .style(
            Style::default()
                .fg(fade(ACCENT))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(category, rows[3]);

    render_table_row(frame, rows[5], "Category", result.category.label(), alpha);
    render_table_row(
        frame,
        rows[6],
        "Ideal Weight",
        &format!("{:.1} kg", result.ideal_weight_kg),
        alpha,
    );
    render_table_row(frame, rows[7], "Recommendation", &result.recommendation, alpha);
}

/// One label/value row of the detail table. The value wraps, which only
/// matters for the recommendation row since it gets the flexible height.
fn render_table_row(frame: &mut Frame, area: Rect, label: &str, value: &str, alpha: f64) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    let label_cell = Paragraph::new(label).style(
        Style::default()
            .fg(fade_toward(ACCENT, BG_ELEVATED, alpha))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(label_cell, cells[0]);

    let value_cell = Paragraph::new(value)
        .style(Style::default().fg(fade_toward(TEXT_PRIMARY, BG_ELEVATED, alpha)))
        .wrap(Wrap { trim: true });
    frame.render_widget(value_cell, cells[1]);
}

/// Render the blocking validation notice over the rest of the screen.
fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(44, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(BG_ELEVATED));

    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

/// A rect of at most `width` x `height`, centered within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
