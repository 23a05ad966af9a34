//! Deserialized engine types go through the same validation as their
//! constructors.

use effect_core::{
    Ability, AbilitySystem, Buff, EngineConfig, Entity, EntityId, Expiry, Roster, Shield,
    StatModifier, Tick,
};

fn error_of<T: serde::de::DeserializeOwned + std::fmt::Debug>(source: &str) -> String {
    ron::from_str::<T>(source).unwrap_err().to_string()
}

#[test]
fn negative_shield_is_rejected() {
    let error = error_of::<Shield>("(source_ability: (0), magnitude: -50.0, expires_at: Never)");
    assert!(error.contains("shield magnitude must be finite and non-negative"), "{error}");
}

#[test]
fn invalid_abilities_are_rejected() {
    let error =
        error_of::<Ability>(r#"Aura((name: "AURA", atk_bonus: 0.1, range: 5.0, duration: 0))"#);
    assert!(error.contains("effect duration must be at least one tick"), "{error}");

    let error =
        error_of::<Ability>(r#"Aura((name: "", atk_bonus: 0.1, range: 5.0, duration: 10))"#);
    assert!(error.contains("ability name must not be empty"), "{error}");

    let error = error_of::<Ability>("CritShield((shield_value: -1.0, cooldown_duration: 0))");
    assert!(error.contains("shield value must be finite and non-negative"), "{error}");
}

#[test]
fn zero_stack_count_is_rejected() {
    let error =
        error_of::<Buff>(r#"(name: "AURA", modifiers: [], expires_at: Never, stack_count: 0)"#);
    assert!(error.contains("stack count must be at least 1"), "{error}");
}

#[test]
fn invalid_entities_and_rosters_are_rejected() {
    let error = error_of::<Entity>(
        "(id: (1), base_atk: -100.0, base_def: 50.0, position: (x: 0.0, y: 0.0))",
    );
    assert!(error.contains("invalid base attack"), "{error}");

    let error = error_of::<Roster>(
        "(entities: [
            (id: (1), base_atk: 1.0, base_def: 1.0, position: (x: 0.0, y: 0.0)),
            (id: (1), base_atk: 2.0, base_def: 2.0, position: (x: 1.0, y: 0.0)),
        ])",
    );
    assert!(error.contains("already present in the roster"), "{error}");

    let error = error_of::<StatModifier>(
        "(kind: AtkUp, magnitude: inf, expires_at: Never, source_ability: (0))",
    );
    assert!(error.contains("modifier magnitude must be finite"), "{error}");
}

#[test]
fn invalid_config_is_rejected() {
    let error = error_of::<EngineConfig>("(pvp_modifier_cap: -0.5)");
    assert!(error.contains("pvp_modifier_cap must be finite and non-negative"), "{error}");

    let config: EngineConfig = ron::from_str("()").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn valid_entity_deserializes_into_working_state() {
    let mut entity: Entity = ron::from_str(
        r#"(
            id: (1),
            base_atk: 100.0,
            base_def: 50.0,
            position: (x: 0.0, y: 0.0),
            shields: [(source_ability: (0), magnitude: 30.0, expires_at: At((5)))],
            buffs: [(
                name: "AURA",
                modifiers: [(kind: AtkUp, magnitude: 0.1, expires_at: Never, source_ability: (0))],
                expires_at: At((10)),
                stack_count: 2,
            )],
        )"#,
    )
    .unwrap();

    assert_eq!(entity.id(), EntityId(1));
    assert_eq!(entity.buffs()[0].stack_count(), 2);
    assert_eq!(entity.buffs()[0].modifiers()[0].expires_at(), Expiry::At(Tick(10)));

    let stats = AbilitySystem::new().compute_stats(&mut entity);
    assert!((stats.shield - 30.0).abs() < 1e-9);
    assert!((stats.attack - 110.0).abs() < 1e-9);
}
