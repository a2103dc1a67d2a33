//! Application state

use crate::simulation::HitSimulation;
use glam::DVec3;
use melee_core::{
    on_living_hurt, Actor, BreakdownSampling, CreatureType, DamageBreakdown, DamageCalculator,
    DamageSourceMeta, EffectKind, Enchantment, FixedRoll, HitContext, HitEvent, HitOutcome,
    MovementState, SpecialEffect, Weapon, WorldContext,
};
use rand::SeedableRng;
use std::fs;
use tracing::{info, warn};

/// Number of swings per simulation run
pub const SIMULATION_HITS: u32 = 2000;

/// Degrees the attacker moves around the target per key press
const ROTATION_STEP: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Breakdown,
    Combat,
    Simulation,
    Tuning,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Breakdown, Tab::Combat, Tab::Simulation, Tab::Tuning, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Breakdown => "Calc",
            Tab::Combat => "Combat",
            Tab::Simulation => "Sim",
            Tab::Tuning => "Tuning",
            Tab::Help => "Help",
        }
    }
}

/// A preset attacker/target pairing
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub attacker: Actor,
    pub target: Actor,
    pub world: WorldContext,
}

impl Scenario {
    /// Context the calculator sees for this scenario
    pub fn context(&self) -> HitContext<'_> {
        HitContext::melee(&self.attacker, &self.target, &self.world)
    }

    /// Damage the host would deal without the calculator
    pub fn host_amount(&self) -> f32 {
        let weapon = self.context().weapon.map_or(0.0, |w| w.attack_damage);
        self.attacker.attack_damage + weapon
    }

    /// Move the attacker around the target, keeping its distance
    pub fn rotate_attacker(&mut self, degrees: f64) {
        let offset = self.attacker.position - self.target.position;
        let (sin, cos) = degrees.to_radians().sin_cos();
        let rotated = DVec3::new(offset.x * cos - offset.z * sin, offset.y, offset.x * sin + offset.z * cos);
        self.attacker.position = self.target.position + rotated;
    }

    pub fn presets() -> Vec<Scenario> {
        let origin = DVec3::new(0.0, 64.0, 0.0);
        // Target faces yaw 0, so +X is behind it and -X in front
        let front = DVec3::new(-2.0, 64.0, 0.0);
        let behind = DVec3::new(2.0, 64.0, 0.0);
        let flank = DVec3::new(0.0, 64.0, 2.0);

        let mut falling = Actor::player(behind, 180.0).with_weapon(
            Weapon::diamond_sword().with_enchantment(Enchantment::Sharpness, 3),
        );
        falling.movement = MovementState::falling(1.5);

        let mut hungry = Actor::player(front, 0.0).with_weapon(Weapon::iron_axe().with_durability(250, 235));
        if let Some(p) = hungry.player_state_mut() {
            p.food_level = 4;
            p.exhaustion = 3.5;
        }

        let mut skeleton = Actor::mob("minecraft:skeleton", CreatureType::Undead, front, 0.0, 20.0);
        skeleton.attack_damage = 3.0;
        skeleton.main_hand = Some(Weapon::wooden_sword());
        let mut knight = Actor::player(origin, 0.0).with_armor(20.0, 8.0);
        knight.max_health = 20.0;

        let mut inspector = Actor::player(flank, 0.0)
            .with_weapon(Weapon::diamond_sword().with_enchantment(Enchantment::FireAspect, 2))
            .with_effect(EffectKind::Strength, 1);
        if let Some(p) = inspector.player_state_mut() {
            p.creative = true;
        }

        vec![
            Scenario {
                name: "Bare-handed jab",
                description: "Empty hand, head-on, no armor or weather",
                attacker: Actor::player(front, 0.0),
                target: Actor::mob("minecraft:cow", CreatureType::Generic, origin, 0.0, 10.0),
                world: WorldContext::clear_day(),
            },
            Scenario {
                name: "Falling backstab",
                description: "Critical jump attack from behind with a sharpened sword",
                attacker: falling,
                target: Actor::mob("minecraft:zombie", CreatureType::Undead, origin, 0.0, 20.0),
                world: WorldContext::clear_day(),
            },
            Scenario {
                name: "Smite the husk",
                description: "Smite V against an undead target from the side",
                attacker: Actor::player(flank, 0.0)
                    .with_weapon(Weapon::diamond_sword().with_enchantment(Enchantment::Smite, 5)),
                target: Actor::mob("minecraft:husk", CreatureType::Undead, origin, 0.0, 20.0),
                world: WorldContext::clear_day(),
            },
            Scenario {
                name: "Bane on a spider",
                description: "Bane of Arthropods III, spider with light armor",
                attacker: Actor::player(front, 0.0)
                    .with_weapon(Weapon::iron_axe().with_enchantment(Enchantment::BaneOfArthropods, 3)),
                target: Actor::mob("minecraft:spider", CreatureType::Arthropod, origin, 0.0, 16.0).with_armor(4.0, 0.0),
                world: WorldContext::clear_day(),
            },
            Scenario {
                name: "Stormy night",
                description: "Starving, exhausted, nearly broken axe in rain and darkness",
                attacker: hungry,
                target: Actor::mob("minecraft:pillager", CreatureType::Generic, origin, 0.0, 24.0),
                world: WorldContext::clear_day().with_rain(true).with_light(2),
            },
            Scenario {
                name: "Fire vs blaze",
                description: "Fire Aspect against a fire-immune target",
                attacker: Actor::player(front, 0.0)
                    .with_weapon(Weapon::diamond_sword().with_enchantment(Enchantment::FireAspect, 2)),
                target: {
                    let mut blaze = Actor::mob("minecraft:blaze", CreatureType::Generic, origin, 0.0, 20.0);
                    blaze.fire_immune = true;
                    blaze
                },
                world: WorldContext::clear_day().at_altitude(70).with_temperature(2.0),
            },
            Scenario {
                name: "Skeleton ambush",
                description: "Mob attacker against diamond armor; rolls its own crits",
                attacker: skeleton,
                target: knight,
                world: WorldContext::clear_day().at_altitude(140),
            },
            Scenario {
                name: "Creative inspector",
                description: "Creative player; every hit records a breakdown",
                attacker: inspector,
                target: Actor::mob("minecraft:drowned", CreatureType::Undead, origin, 0.0, 20.0)
                    .with_effect(EffectKind::Resistance, 0),
                world: WorldContext::clear_day(),
            },
        ]
    }
}

pub struct App {
    pub current_tab: Tab,
    pub calculator: DamageCalculator,
    /// Where the tuning came from, for display
    pub tuning_source: String,
    pub scenarios: Vec<Scenario>,
    pub selected_scenario: usize,
    pub target_health: f32,
    pub hit_count: u32,
    /// Breakdown without variance or random crits
    pub preview: DamageBreakdown,
    /// Most recent breakdown recorded by a creative attacker
    pub last_recorded: Option<DamageBreakdown>,
    pub simulation: Option<HitSimulation>,
    pub combat_log: Vec<String>,
    pub status: Option<String>,
    pub rng: rand::rngs::StdRng,
    pub show_help: bool,
    previous_tab: Tab,
    pub log_scroll: usize,
    pub breakdown_scroll: usize,
    pub tuning_scroll: usize,
}

impl App {
    pub fn new(calculator: DamageCalculator, tuning_source: impl Into<String>) -> Self {
        let scenarios = Scenario::presets();
        let preview = calculator.damage_breakdown(&scenarios[0].context(), &mut FixedRoll(0.5));
        let target_health = scenarios[0].target.max_health;

        App {
            current_tab: Tab::Breakdown,
            calculator,
            tuning_source: tuning_source.into(),
            scenarios,
            selected_scenario: 0,
            target_health,
            hit_count: 0,
            preview,
            last_recorded: None,
            simulation: None,
            combat_log: Vec::new(),
            status: None,
            rng: rand::rngs::StdRng::from_entropy(),
            show_help: false,
            previous_tab: Tab::Breakdown,
            log_scroll: 0,
            breakdown_scroll: 0,
            tuning_scroll: 0,
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenarios[self.selected_scenario]
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = if idx == 0 { tabs[tabs.len() - 1] } else { tabs[idx - 1] };
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Breakdown => self.breakdown_scroll = self.breakdown_scroll.saturating_sub(1),
            Tab::Combat => self.log_scroll = self.log_scroll.saturating_sub(1),
            Tab::Tuning => self.tuning_scroll = self.tuning_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Breakdown => self.breakdown_scroll += 1,
            Tab::Combat => {
                if self.log_scroll < self.combat_log.len().saturating_sub(1) {
                    self.log_scroll += 1;
                }
            }
            Tab::Tuning => self.tuning_scroll += 1,
            _ => {}
        }
    }

    pub fn next_scenario(&mut self) {
        self.select_scenario((self.selected_scenario + 1) % self.scenarios.len());
    }

    pub fn prev_scenario(&mut self) {
        let count = self.scenarios.len();
        self.select_scenario((self.selected_scenario + count - 1) % count);
    }

    fn select_scenario(&mut self, index: usize) {
        self.selected_scenario = index;
        self.target_health = self.scenario().target.max_health;
        self.simulation = None;
        self.last_recorded = None;
        self.refresh_preview();
        self.status = Some(format!("Scenario: {}", self.scenario().name));
    }

    /// Move the attacker around the target
    pub fn rotate(&mut self, clockwise: bool) {
        let step = if clockwise { ROTATION_STEP } else { -ROTATION_STEP };
        self.scenarios[self.selected_scenario].rotate_attacker(step);
        self.simulation = None;
        self.refresh_preview();
    }

    pub fn refresh_preview(&mut self) {
        let scenario = &self.scenarios[self.selected_scenario];
        self.preview = self.calculator.damage_breakdown(&scenario.context(), &mut FixedRoll(0.5));
    }

    /// Swing once through the host adapter and log the outcome
    pub fn attack(&mut self) {
        if self.target_health <= 0.0 {
            self.combat_log.push("Target is already dead!".to_string());
            return;
        }

        let scenario = &self.scenarios[self.selected_scenario];
        let event = HitEvent {
            attacker: Some(scenario.attacker.clone()),
            target: scenario.target.clone(),
            amount: scenario.host_amount(),
            source: DamageSourceMeta::melee(&scenario.attacker),
            world: scenario.world.clone(),
        };

        let mut effects: Vec<SpecialEffect> = Vec::new();
        let outcome = on_living_hurt(&self.calculator, &event, &mut self.rng, &mut effects);
        self.hit_count += 1;

        self.combat_log.push(format!("━━━ Hit #{} · {} ━━━", self.hit_count, scenario.name));

        let hit = match outcome {
            HitOutcome::Untouched { amount, reason } => {
                self.combat_log.push(format!("  Untouched ({:?}), host applies {:.1}", reason, amount));
                return;
            }
            HitOutcome::Resolved(hit) => hit,
        };

        self.combat_log.push(format!("  Host amount: {:.1} → {:.2}", hit.original, hit.damage));

        if let Some(breakdown) = &hit.breakdown {
            if breakdown.is_critical {
                self.combat_log.push("  CRIT!".to_string());
            }
            for line in breakdown.to_string().lines() {
                self.combat_log.push(format!("  │ {}", line));
            }
        }

        for effect in &hit.effects {
            self.combat_log.push(format!("  ✦ {}", describe_effect(effect)));
        }

        self.target_health = (self.target_health - hit.damage).max(0.0);
        self.combat_log.push(format!(
            "  ▶ Target takes {:.2} ({:.1}/{:.1})",
            hit.damage,
            self.target_health,
            scenario.target.max_health
        ));

        if self.target_health <= 0.0 {
            self.combat_log.push(format!("  ✖ {} DEFEATED", scenario.target.entity_type));
        }

        if hit.breakdown.is_some() {
            self.last_recorded = hit.breakdown;
        }

        // Keep the newest entries in view
        let visible = 20;
        self.log_scroll = self.combat_log.len().saturating_sub(visible);
    }

    pub fn simulate(&mut self) {
        let scenario = &self.scenarios[self.selected_scenario];
        let result = HitSimulation::run(&self.calculator, &scenario.context(), SIMULATION_HITS, &mut self.rng);
        info!(
            scenario = scenario.name,
            hits = result.hit_count,
            avg = result.avg_damage(),
            "simulation finished"
        );
        self.simulation = Some(result);
        self.current_tab = Tab::Simulation;
    }

    /// Flip between independent and shared breakdown sampling
    pub fn toggle_sampling(&mut self) {
        let mut tuning = self.calculator.tuning().clone();
        tuning.breakdown.sampling = match tuning.breakdown.sampling {
            BreakdownSampling::Independent => BreakdownSampling::Shared,
            BreakdownSampling::Shared => BreakdownSampling::Independent,
        };
        self.status = Some(format!("Breakdown sampling: {:?}", tuning.breakdown.sampling));
        self.calculator = DamageCalculator::new(tuning);
    }

    /// Toggle creative mode on a player attacker
    pub fn toggle_creative(&mut self) {
        let attacker = &mut self.scenarios[self.selected_scenario].attacker;
        match attacker.player_state_mut() {
            Some(state) => {
                state.creative = !state.creative;
                let creative = state.creative;
                self.status = Some(format!("Creative mode: {}", if creative { "on" } else { "off" }));
            }
            None => self.status = Some("Only players have a game mode".to_string()),
        }
    }

    /// Write the current preview breakdown as JSON
    pub fn export_breakdown(&mut self, path: &str) {
        let breakdown = self.last_recorded.as_ref().unwrap_or(&self.preview);
        let result = serde_json::to_string_pretty(breakdown)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));

        self.status = Some(match result {
            Ok(()) => {
                info!(path, "exported breakdown");
                format!("Exported breakdown to {}", path)
            }
            Err(e) => {
                warn!(path, error = %e, "breakdown export failed");
                format!("Export failed: {}", e)
            }
        });
    }

    pub fn reset(&mut self) {
        self.scenarios = Scenario::presets();
        self.target_health = self.scenario().target.max_health;
        self.hit_count = 0;
        self.combat_log.clear();
        self.log_scroll = 0;
        self.last_recorded = None;
        self.simulation = None;
        self.refresh_preview();
        self.status = Some("Reset".to_string());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.previous_tab = self.current_tab;
            self.current_tab = Tab::Help;
        } else {
            self.current_tab = self.previous_tab;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DamageCalculator::default(), "built-in defaults")
    }
}

pub fn describe_effect(effect: &SpecialEffect) -> String {
    match effect {
        SpecialEffect::CritParticles { .. } => "Critical particles".to_string(),
        SpecialEffect::BackstabParticles { .. } => "Backstab particles".to_string(),
        SpecialEffect::HighDamageFlash { .. } => "High damage flash".to_string(),
        SpecialEffect::Ignite { seconds } => format!("🔥 Ignited for {}s", seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_preset_preview() {
        let app = App::default();
        assert_eq!(app.scenario().name, "Bare-handed jab");
        assert!((app.preview.final_damage - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_reaches_backstab() {
        let mut app = App::default();
        // 12 steps of 15 degrees puts the attacker behind the cow
        for _ in 0..12 {
            app.rotate(true);
        }
        assert!((app.preview.positional_modifier - 1.25).abs() < f32::EPSILON);

        let offset = app.scenario().attacker.position - app.scenario().target.position;
        assert!((offset.length() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_attack_logs_and_damages() {
        let mut app = App::default();
        app.attack();

        assert_eq!(app.hit_count, 1);
        assert!(app.target_health < 10.0);
        assert!(app.combat_log.iter().any(|l| l.contains("Target takes")));
    }

    #[test]
    fn test_creative_attack_records_breakdown() {
        let mut app = App::default();
        let creative = app.scenarios.iter().position(|s| s.attacker.is_creative()).unwrap();
        app.select_scenario(creative);
        app.attack();

        assert!(app.last_recorded.is_some());
        assert!(app.combat_log.iter().any(|l| l.contains("Damage Breakdown:")));
        assert!(app.combat_log.iter().any(|l| l.contains("Ignited for 8s")));
    }

    #[test]
    fn test_toggle_sampling() {
        let mut app = App::default();
        assert_eq!(app.calculator.tuning().breakdown.sampling, BreakdownSampling::Independent);
        app.toggle_sampling();
        assert_eq!(app.calculator.tuning().breakdown.sampling, BreakdownSampling::Shared);
    }

    #[test]
    fn test_creative_toggle_on_mob() {
        let mut app = App::default();
        let mob = app.scenarios.iter().position(|s| !s.attacker.is_player()).unwrap();
        app.select_scenario(mob);
        app.toggle_creative();
        assert_eq!(app.status.as_deref(), Some("Only players have a game mode"));
    }

    #[test]
    fn test_host_amount() {
        let presets = Scenario::presets();
        assert!((presets[0].host_amount() - 1.0).abs() < f32::EPSILON);
        // 1.0 attribute + 7.0 sword
        assert!((presets[1].host_amount() - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reset() {
        let mut app = App::default();
        app.next_scenario();
        app.attack();
        app.reset();

        assert_eq!(app.hit_count, 0);
        assert!(app.combat_log.is_empty());
        assert!((app.target_health - app.scenario().target.max_health).abs() < f32::EPSILON);
    }
}
