//! Damage breakdown tab - every stage of the current scenario's hit

use super::{bonus_line, factor_line, section_header, stat_line};
use crate::app::App;
use melee_core::modifiers::{hit_angle, HitDirection};
use melee_core::{Actor, DamageBreakdown};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_scenario(f, app, chunks[0]);
    draw_stages(f, app, chunks[1]);
}

fn draw_scenario(f: &mut Frame, app: &App, area: Rect) {
    let scenario = app.scenario();
    let tuning = app.calculator.tuning();
    let angle = hit_angle(&scenario.attacker, &scenario.target);
    let direction = HitDirection::from_angle(angle, &tuning.position);

    let mut lines = vec![
        Line::from(Span::styled(
            scenario.description,
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        section_header("Attacker"),
    ];
    lines.extend(actor_lines(&scenario.attacker));
    lines.push(stat_line(
        "Weapon",
        match scenario.context().weapon {
            Some(w) => format!("{} ({:.1} dmg, {:+.1} speed)", w.item_id, w.attack_damage, w.attack_speed),
            None => "bare hand".to_string(),
        },
    ));
    if let Some(w) = scenario.context().weapon {
        for (enchantment, level) in w.enchantments.iter() {
            lines.push(stat_line("  Enchantment", format!("{:?} {}", enchantment, level)));
        }
        if let Some(fraction) = w.durability_fraction() {
            lines.push(stat_line("  Durability", format!("{:.0}%", fraction * 100.0)));
        }
    }
    lines.push(Line::from(""));

    lines.push(section_header("Target"));
    lines.extend(actor_lines(&scenario.target));
    lines.push(stat_line("Armor", format!("{:.0} (toughness {:.0})", scenario.target.armor, scenario.target.armor_toughness)));
    lines.push(Line::from(""));

    lines.push(section_header("Position"));
    lines.push(stat_line("Hit angle", format!("{:.0}° ({:?})", angle, direction)));
    lines.push(Line::from(""));

    let world = &scenario.world;
    lines.push(section_header("World"));
    lines.push(stat_line("Rain", format!("{}", world.exposed_to_rain())));
    lines.push(stat_line("Altitude", format!("{}", world.altitude)));
    lines.push(stat_line("Temperature", format!("{:.1}", world.biome_temperature)));
    lines.push(stat_line("Light", format!("{}", world.light_level)));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Scenario "))
        .wrap(Wrap { trim: false })
        .scroll((app.breakdown_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn actor_lines(actor: &Actor) -> Vec<Line<'static>> {
    let mut lines = vec![stat_line("Type", actor.entity_type.clone())];

    if let Some(state) = actor.player_state() {
        lines.push(stat_line(
            "Food / exhaustion",
            format!("{} / {:.1}{}", state.food_level, state.exhaustion, if state.creative { " (creative)" } else { "" }),
        ));
    }
    lines.push(stat_line("Attack damage", format!("{:.1}", actor.attack_damage)));
    lines.push(stat_line("Attack speed", format!("{:.1}", actor.attack_speed)));
    lines.push(stat_line("Max health", format!("{:.1}", actor.max_health)));

    if !actor.effects.is_empty() {
        let effects: Vec<String> = actor
            .effects
            .iter()
            .map(|e| format!("{} {}", e.kind.name(), e.amplifier + 1))
            .collect();
        lines.push(stat_line("Effects", effects.join(", ")));
    }

    if actor.movement.fall_distance > 0.0 && !actor.movement.on_ground {
        lines.push(stat_line("Falling", format!("{:.1} blocks", actor.movement.fall_distance)));
    }

    lines
}

fn draw_stages(f: &mut Frame, app: &App, area: Rect) {
    let b = app.last_recorded.as_ref().unwrap_or(&app.preview);
    let title = if app.last_recorded.is_some() {
        " Recorded Breakdown "
    } else {
        " Expected Hit (no variance) "
    };

    let lines = stage_lines(b, app.calculator.tuning().critical.multiplier);
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}

fn stage_lines(b: &DamageBreakdown, crit_multiplier: f32) -> Vec<Line<'static>> {
    let mut lines = vec![
        stat_line("Base damage", format!("{:.2}", b.base_damage)),
        factor_line("Attack speed", b.attack_speed_modifier),
        bonus_line("Attribute bonus", b.attribute_bonus),
        bonus_line("Enchantments", b.enchantment_bonus),
        factor_line("Critical", if b.is_critical { crit_multiplier } else { 1.0 }),
        factor_line("Position", b.positional_modifier),
        factor_line("Environment", b.environmental_modifier),
        factor_line("Weapon condition", b.weapon_condition_modifier),
        factor_line("Player condition", b.actor_condition_modifier),
        bonus_line("Elemental", b.elemental_damage),
        factor_line("Status effects", b.status_modifier),
        factor_line("Combined factors", b.total_multiplier()),
        Line::from(""),
        stat_line("Before armor", format!("{:.2}", b.pre_armor_damage)),
        stat_line("After armor", format!("{:.2} (-{:.2})", b.post_armor_damage, b.armor_mitigated())),
        factor_line("Variance", b.variance_multiplier),
        Line::from(""),
    ];

    let mut final_spans = vec![
        Span::styled(format!("{:20}", "Final damage"), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:.2}", b.final_damage),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];
    if b.was_clamped() {
        final_spans.push(Span::styled(" (clamped)", Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::from(final_spans));

    lines
}
