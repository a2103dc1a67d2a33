//! Integration test: Load tuning -> Build hurt event -> Resolve -> Apply damage
//!
//! Validates the full flow a host goes through when a melee hit lands.

use glam::DVec3;
use melee_core::{
    load_tuning, on_living_hurt, Actor, BreakdownSampling, CreatureType, DamageCalculator, DamageSourceMeta,
    Enchantment, HitEvent, HitOutcome, MovementState, SpecialEffect, Weapon, WorldContext,
};
use rand::SeedableRng;
use std::path::Path;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn calculator_from_file() -> DamageCalculator {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/tuning.toml");
    DamageCalculator::new(load_tuning(&path).expect("tuning.toml should load"))
}

fn hit(attacker: &Actor, target: &Actor, world: &WorldContext) -> HitEvent {
    HitEvent {
        attacker: Some(attacker.clone()),
        target: target.clone(),
        amount: attacker.attack_damage,
        source: DamageSourceMeta::melee(attacker),
        world: world.clone(),
    }
}

#[test]
fn test_full_fight_until_kill() {
    separator("SETUP");
    let calc = calculator_from_file();
    let mut rng = rand::rngs::StdRng::seed_from_u64(1234);

    let player = Actor::player(DVec3::new(2.0, 64.0, 0.0), 180.0).with_weapon(
        Weapon::diamond_sword()
            .with_enchantment(Enchantment::Sharpness, 2)
            .with_enchantment(Enchantment::FireAspect, 1),
    );
    let zombie = Actor::mob("minecraft:zombie", CreatureType::Undead, DVec3::new(0.0, 64.0, 0.0), 0.0, 20.0)
        .with_armor(2.0, 0.0);
    let world = WorldContext::clear_day();
    println!("  {} attacks {} from behind", player.entity_type, zombie.entity_type);

    separator("COMBAT");
    let mut health = zombie.max_health;
    let mut swings = 0;
    let mut effects: Vec<SpecialEffect> = Vec::new();

    while health > 0.0 && swings < 50 {
        let outcome = on_living_hurt(&calc, &hit(&player, &zombie, &world), &mut rng, &mut effects);
        let damage = outcome.damage();
        assert!(damage >= 0.45 && damage <= zombie.max_health);

        health -= damage;
        swings += 1;
        println!("  Swing {}: {:.2} damage, {:.2} health left", swings, damage, health);
    }

    separator("RESULT");
    println!("  Killed in {} swings, {} effects dispatched", swings, effects.len());
    assert!(health <= 0.0);
    // Backstab with sharpness and fire takes a handful of swings
    assert!(swings <= 4);
    assert!(effects.iter().any(|e| matches!(e, SpecialEffect::BackstabParticles { .. })));
    assert!(effects.contains(&SpecialEffect::Ignite { seconds: 4 }));
}

#[test]
fn test_environmental_pass_through() {
    let calc = calculator_from_file();
    let target = Actor::player(DVec3::ZERO, 0.0);
    let event = HitEvent {
        attacker: None,
        target,
        amount: 2.5,
        source: DamageSourceMeta {
            kind: "lava".to_string(),
            direct: false,
        },
        world: WorldContext::clear_day(),
    };

    let mut effects: Vec<SpecialEffect> = Vec::new();
    let outcome = on_living_hurt(&calc, &event, &mut rand::thread_rng(), &mut effects);

    assert!(matches!(outcome, HitOutcome::Untouched { .. }));
    assert!((outcome.damage() - 2.5).abs() < f32::EPSILON);
    assert!(effects.is_empty());
}

#[test]
fn test_creative_breakdown_export() {
    separator("CREATIVE BREAKDOWN");
    let mut tuning = calculator_from_file().tuning().clone();
    tuning.breakdown.sampling = BreakdownSampling::Shared;
    let calc = DamageCalculator::new(tuning);

    let mut player = Actor::player(DVec3::new(-2.0, 64.0, 0.0), 0.0).with_weapon(Weapon::iron_axe());
    player.movement = MovementState::falling(2.0);
    if let Some(state) = player.player_state_mut() {
        state.creative = true;
    }
    let cow = Actor::mob("minecraft:cow", CreatureType::Generic, DVec3::new(0.0, 64.0, 0.0), 0.0, 10.0);
    let world = WorldContext::clear_day();

    let mut rng = rand::rngs::StdRng::seed_from_u64(9);
    let outcome = on_living_hurt(&calc, &hit(&player, &cow, &world), &mut rng, &mut Vec::<SpecialEffect>::new());
    let resolved = outcome.resolved().expect("player hit should resolve");
    let breakdown = resolved.breakdown.as_ref().expect("creative hits record a breakdown");
    println!("{}", breakdown);

    assert!(breakdown.is_critical);
    assert!((breakdown.final_damage - resolved.damage).abs() < f32::EPSILON);

    let json = serde_json::to_string_pretty(breakdown).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["is_critical"], serde_json::Value::Bool(true));
}
