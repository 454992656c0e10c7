use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wikitext_editor_engine::{ResolvedStyle, Rgb, StyledRun};

use crate::app::App;
use crate::text::line_col;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_style(resolved: &ResolvedStyle) -> Style {
    let mut style = Style::default().fg(color(resolved.foreground));
    if let Some(bg) = resolved.background {
        style = style.bg(color(bg));
    }
    for (on, modifier) in [
        (resolved.font.bold, Modifier::BOLD),
        (resolved.font.italic, Modifier::ITALIC),
        (resolved.strikethrough, Modifier::CROSSED_OUT),
        (resolved.underline, Modifier::UNDERLINED),
    ] {
        if on {
            style = style.add_modifier(modifier);
        }
    }
    style
}

/// Splits styled runs into terminal lines.
pub fn styled_lines(text: &str, runs: &[StyledRun]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for run in runs {
        let style = to_style(&run.style);
        let chunk = text.get(run.span.start..run.span.end).unwrap_or_default();
        for (i, part) in chunk.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let part = part.trim_end_matches('\r');
            if !part.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.spans.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let text = app.session.text();
    let (line, col) = line_col(&text, app.caret);
    let visible = chunks[0].height.saturating_sub(2).max(1) as usize;
    let scroll = line.saturating_sub(visible - 1);

    let title = if app.session.syntax_highlighting() {
        app.title.clone()
    } else {
        format!("{} (highlighting off)", app.title)
    };
    let editor = Paragraph::new(styled_lines(&text, &app.session.styled_runs()))
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll as u16, 0));
    f.render_widget(editor, chunks[0]);
    f.set_cursor_position((
        chunks[0].x + 1 + col as u16,
        chunks[0].y + 1 + (line - scroll) as u16,
    ));

    let flags: Vec<String> = app
        .selection_state()
        .active()
        .iter()
        .map(|k| format!("{k:?}"))
        .collect();
    let status = Line::from(vec![
        Span::styled(
            format!(" {}:{} ", line + 1, col + 1),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(format!(" {} ", flags.join(" "))),
        Span::styled(app.status.clone(), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);

    let help = Line::from(vec![
        Span::raw("Esc: Quit | "),
        Span::raw("Ctrl-S: Save draft | "),
        Span::raw("Ctrl-H: Highlighting | "),
        Span::raw("Ctrl-F: Find word | Ctrl-N/Ctrl-P: Next/Previous"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}
