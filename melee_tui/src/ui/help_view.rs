//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-5", "Jump to tab (Calc/Combat/Sim/Tuning/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("←/h  →/l", "Previous/next scenario"),
        key_line("↑/k  ↓/j", "Scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Scenario"),
        key_line(", / .", "Rotate the attacker around the target"),
        key_line("c", "Toggle creative mode (records breakdowns)"),
        key_line("x", "Export the breakdown to breakdown.json"),
        Line::from(""),
        section_header("Combat"),
        key_line("a / Space / Enter", "Swing once through the hurt handler"),
        key_line("s", "Simulate many hits"),
        key_line("v", "Toggle independent/shared breakdown sampling"),
        key_line("r", "Reset scenarios and target health"),
        Line::from(""),
        section_header("Damage Pipeline"),
        Line::from(Span::styled(
            "  (base × speed + attribute + enchantment) × crit × position",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "  × environment × wear × condition + fire, × status",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "  → armor → variance → clamp to [0.45, max health]",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled("Armor:", Style::default().fg(Color::Yellow))),
        Line::from("  f = 2 + toughness / 4"),
        Line::from("  reduction = min(armor - damage / f, armor × 0.2) / 25"),
        Line::from("  Tough armor mitigates big hits more"),
        Line::from(""),
        Line::from(Span::styled("Position:", Style::default().fg(Color::Yellow))),
        Line::from("  < 45° from the target's facing: backstab ×1.25"),
        Line::from("  < 135°: side ×1.08, otherwise head-on ×0.95"),
        Line::from(""),
        Line::from(Span::styled(
            "Logs go to melee_tui.log (RUST_LOG overrides the filter)",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:22}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
