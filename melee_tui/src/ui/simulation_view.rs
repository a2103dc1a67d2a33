//! Simulation tab - distribution of many hits and weapon DPS

use super::{section_header, stat_line};
use crate::app::{App, SIMULATION_HITS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_results(f, app, chunks[0]);
    draw_dps(f, app, chunks[1]);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.simulation {
        None => vec![Line::from(Span::styled(
            format!("Press [s] to resolve {} hits of this scenario", SIMULATION_HITS),
            Style::default().fg(Color::DarkGray),
        ))],
        Some(sim) => {
            let health = app.scenario().target.max_health;
            vec![
                section_header("Damage"),
                stat_line("Hits", format!("{}", sim.hit_count)),
                stat_line("Average", format!("{:.2}", sim.avg_damage())),
                stat_line("Breakdown average", format!("{:.2}", sim.avg_breakdown_damage())),
                stat_line("Min / max", format!("{:.2} / {:.2}", sim.min_damage, sim.max_damage)),
                Line::from(""),
                section_header("Rates"),
                stat_line("Critical", format!("{:.1}%", sim.crit_rate())),
                stat_line("Clamped", format!("{:.1}%", sim.clamp_rate())),
                Line::from(""),
                section_header("Kill"),
                stat_line("Target health", format!("{:.1}", health)),
                stat_line(
                    "Hits to kill",
                    sim.hits_to_kill.map_or("never".to_string(), |n| n.to_string()),
                ),
            ]
        }
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Simulation "));
    f.render_widget(paragraph, area);
}

fn draw_dps(f: &mut Frame, app: &App, area: Rect) {
    let scenario = app.scenario();
    let ctx = scenario.context();
    let dps = app.calculator.calculate_dps(ctx.weapon, &scenario.attacker);

    let lines = vec![
        section_header("Weapon DPS"),
        stat_line("Weapon", ctx.weapon.map_or("bare hand".to_string(), |w| w.item_id.clone())),
        stat_line("Damage × speed", format!("{:.2}", dps)),
        Line::from(""),
        Line::from(Span::styled(
            "Target-independent; ignores every situational modifier.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" DPS "));
    f.render_widget(paragraph, area);
}
