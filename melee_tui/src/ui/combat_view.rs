//! Combat log view

use super::progress_bar;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Status bar
            Constraint::Min(0),    // Combat log
        ])
        .split(area);

    draw_status_bar(f, app, chunks[0]);
    draw_combat_log(f, app, chunks[1]);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let target = &app.scenario().target;
    let max = target.max_health as f64;
    let current = app.target_health as f64;
    let life_percent = if max > 0.0 { current / max * 100.0 } else { 0.0 };

    let life_color = if life_percent > 50.0 {
        Color::Green
    } else if life_percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let block = Block::default().borders(Borders::ALL).title(" Target ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let header = Line::from(vec![
        Span::styled(format!("{}: ", target.entity_type), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.1}/{:.1}", current, max),
            Style::default().fg(life_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({:.0}%)", life_percent), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);
    f.render_widget(progress_bar(current, max, rows[1].width, life_color), rows[1]);

    let footer = Line::from(vec![
        Span::styled("Hits: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", app.hit_count), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled("Sampling: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:?}", app.calculator.tuning().breakdown.sampling),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), rows[2]);
}

fn draw_combat_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .combat_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("━━━") {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if line.contains("CRIT!") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if line.contains("DEFEATED") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if line.contains("▶ Target takes") {
                Style::default().fg(Color::Red)
            } else if line.contains("🔥") {
                Style::default().fg(Color::Magenta)
            } else if line.contains('✦') {
                Style::default().fg(Color::LightCyan)
            } else if line.contains('│') {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Combat Log ({}) ", app.combat_log.len())),
    );

    f.render_widget(list, area);
}
