//! Tuning tab - the active damage constants

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Source: ", Style::default().fg(Color::Gray)),
        Span::styled(app.tuning_source.clone(), Style::default().fg(Color::White)),
    ])];

    match serde_json::to_value(app.calculator.tuning()) {
        Ok(Value::Object(sections)) => {
            for (section, values) in sections {
                lines.push(Line::from(""));
                lines.push(section_header(&section));
                lines.extend(value_lines(&values));
            }
        }
        Ok(_) => {}
        Err(e) => lines.push(Line::from(Span::styled(e.to_string(), Style::default().fg(Color::Red)))),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Tuning "))
        .scroll((app.tuning_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn value_lines(values: &Value) -> Vec<Line<'static>> {
    let Value::Object(map) = values else {
        return vec![Line::from(values.to_string())];
    };

    map.iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("  {:28}", key), Style::default().fg(Color::Gray)),
                Span::styled(value.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect()
}
