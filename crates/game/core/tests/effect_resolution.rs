use effect_core::{
    AbilityId, AbilitySystem, AuraAbility, BattleLog, CritShieldAbility, Entity, EntityId, Event,
    Expiry, GameMode, Outcome, Position, Roster, Shield, Tick,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn entity(id: u32, x: f64, y: f64) -> Entity {
    Entity::new(EntityId(id), 100.0, 50.0, Position::new(x, y)).unwrap()
}

fn crit(attacker: u32) -> Event {
    Event::Crit {
        attacker: EntityId(attacker),
    }
}

#[test]
fn crit_shield_without_cooldown_applies_every_time() {
    let mut system = AbilitySystem::new();
    system.register(CritShieldAbility::new(100.0, 0).unwrap()).unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&crit(1), EntityId(1), &mut roster, &mut log).unwrap();
    system.dispatch(&crit(1), EntityId(1), &mut roster, &mut log).unwrap();

    let stats = system.compute_stats(roster.get_mut(EntityId(1)).unwrap());
    assert!(approx_eq(stats.shield, 200.0));
    assert_eq!(log.with_outcome(Outcome::EffectApplied).count(), 2);
}

#[test]
fn crit_shield_cooldown_blocks_second_trigger_inside_window() {
    let mut system = AbilitySystem::new();
    system
        .register(CritShieldAbility::new(100.0, 10_000).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&crit(1), EntityId(1), &mut roster, &mut log).unwrap();
    system.advance(100);
    system.dispatch(&crit(1), EntityId(1), &mut roster, &mut log).unwrap();

    let stats = system.compute_stats(roster.get_mut(EntityId(1)).unwrap());
    assert!(approx_eq(stats.shield, 100.0));

    let entries = log.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].outcome, Outcome::EffectApplied);
    assert_eq!(entries[1].outcome, Outcome::BlockedByCooldown);
    assert_eq!(entries[1].relative_time, 100);

    system.advance_to(Tick(10_000)).unwrap();
    system.dispatch(&crit(1), EntityId(1), &mut roster, &mut log).unwrap();
    let stats = system.compute_stats(roster.get_mut(EntityId(1)).unwrap());
    assert!(approx_eq(stats.shield, 200.0));
}

#[test]
fn aura_reaches_allies_within_range_only() {
    let mut system = AbilitySystem::new();
    system
        .register(AuraAbility::new("AURA_ATK_UP", 0.10, 5.0, 5_000).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([
        entity(1, 0.0, 0.0),
        entity(2, 3.0, 0.0),
        entity(3, 6.0, 0.0),
        entity(4, 0.0, 5.0),
    ])
    .unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&Event::Tick, EntityId(1), &mut roster, &mut log).unwrap();

    let near = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    let far = system.compute_stats(roster.get_mut(EntityId(3)).unwrap());
    let boundary = system.compute_stats(roster.get_mut(EntityId(4)).unwrap());
    let source = system.compute_stats(roster.get_mut(EntityId(1)).unwrap());

    assert!(approx_eq(near.attack, 110.0));
    assert!(approx_eq(far.attack, 100.0));
    assert!(approx_eq(boundary.attack, 110.0));
    assert!(approx_eq(source.attack, 100.0));
    assert_eq!(log.for_entity(EntityId(3)).count(), 0);
}

#[test]
fn same_kind_buffs_resolve_to_the_strongest() {
    let mut system = AbilitySystem::new();
    system
        .register(AuraAbility::new("AURA_A", 0.10, 5.0, 5_000).unwrap())
        .unwrap();
    system
        .register(AuraAbility::new("AURA_B", 0.15, 5.0, 5_000).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0), entity(2, 2.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&Event::Tick, EntityId(1), &mut roster, &mut log).unwrap();

    let stats = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    assert!(approx_eq(stats.attack, 115.0));
    assert!(!approx_eq(stats.attack, 125.0));
}

#[test]
fn repeated_ticks_stack_buff_objects_but_not_their_effect() {
    let mut system = AbilitySystem::new();
    system
        .register(AuraAbility::new("AURA", 0.10, 5.0, 50).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0), entity(2, 1.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    for _ in 0..3 {
        system.dispatch(&Event::Tick, EntityId(1), &mut roster, &mut log).unwrap();
        system.advance(1);
    }

    let ally = roster.get_mut(EntityId(2)).unwrap();
    assert_eq!(ally.buffs().len(), 3);
    let stats = system.compute_stats(ally);
    assert!(approx_eq(stats.attack, 110.0));
}

#[test]
fn pvp_caps_aura_bonus() {
    let mut system = AbilitySystem::new();
    system.set_mode(GameMode::Pvp);
    system
        .register(AuraAbility::new("AURA_ATK_UP", 0.10, 5.0, 5_000).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0), entity(2, 3.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&Event::Tick, EntityId(1), &mut roster, &mut log).unwrap();

    let stats = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    assert!(approx_eq(stats.attack, 105.0));

    system.set_mode(GameMode::Pve);
    let stats = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    assert!(approx_eq(stats.attack, 110.0));
}

#[test]
fn buffs_expire_one_tick_after_their_expiry_instant() {
    let mut system = AbilitySystem::new();
    system
        .register(AuraAbility::new("AURA", 0.10, 5.0, 10).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0), entity(2, 1.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&Event::Tick, EntityId(1), &mut roster, &mut log).unwrap();

    system.advance_to(Tick(9)).unwrap();
    let before = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    assert!(approx_eq(before.attack, 110.0));

    system.advance_to(Tick(10)).unwrap();
    let at = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    assert!(approx_eq(at.attack, 110.0));
    assert_eq!(roster.get(EntityId(2)).unwrap().buffs().len(), 1);

    system.advance_to(Tick(11)).unwrap();
    let after = system.compute_stats(roster.get_mut(EntityId(2)).unwrap());
    assert!(approx_eq(after.attack, 100.0));
    assert!(roster.get(EntityId(2)).unwrap().buffs().is_empty());
}

#[test]
fn compute_stats_drops_expired_shields() {
    let mut system = AbilitySystem::new();
    let mut hero = entity(1, 0.0, 0.0);
    hero.add_shield(Shield::permanent(AbilityId::EXTERNAL, 100.0).unwrap());
    hero.add_shield(Shield::new(AbilityId::EXTERNAL, 30.0, Expiry::At(Tick(5))).unwrap());

    system.advance_to(Tick(5)).unwrap();
    let at = system.compute_stats(&mut hero);
    assert!(approx_eq(at.shield, 130.0));
    assert_eq!(hero.shields().len(), 2);

    system.advance_to(Tick(6)).unwrap();
    let after = system.compute_stats(&mut hero);
    assert!(approx_eq(after.shield, 100.0));
    assert_eq!(hero.shields().len(), 1);
    assert_eq!(hero.shields()[0].expires_at(), Expiry::Never);
}

#[test]
fn compute_stats_is_idempotent() {
    let mut system = AbilitySystem::new();
    system.register(CritShieldAbility::new(40.0, 0).unwrap()).unwrap();
    system
        .register(AuraAbility::new("AURA", 0.10, 5.0, 10).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0), entity(2, 1.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();

    system.dispatch(&crit(1), EntityId(1), &mut roster, &mut log).unwrap();
    system.dispatch(&Event::Tick, EntityId(1), &mut roster, &mut log).unwrap();

    for id in [EntityId(1), EntityId(2)] {
        let first = system.compute_stats(roster.get_mut(id).unwrap());
        let second = system.compute_stats(roster.get_mut(id).unwrap());
        assert_eq!(first, second);
    }
}

#[test]
fn damage_taken_is_inert() {
    let mut system = AbilitySystem::new();
    system.register(CritShieldAbility::new(100.0, 0).unwrap()).unwrap();
    system
        .register(AuraAbility::new("AURA", 0.10, 5.0, 10).unwrap())
        .unwrap();
    let mut roster = Roster::from_entities([entity(1, 0.0, 0.0), entity(2, 1.0, 0.0)]).unwrap();
    let mut log = BattleLog::new();
    let before = roster.clone();

    let event = Event::DamageTaken {
        defender: EntityId(1),
        damage: 25.0,
    };
    system.dispatch(&event, EntityId(1), &mut roster, &mut log).unwrap();

    assert!(log.is_empty());
    assert_eq!(roster, before);
}
