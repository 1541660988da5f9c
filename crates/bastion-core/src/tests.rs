#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::commands::Command;
    use crate::config::GameConfig;
    use crate::enums::UnitType;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Group, GroupId, Squad, SquadId, Unit, UnitId};

    fn sample_unit(id: &str) -> Unit {
        Unit::new(UnitId::from(id), UnitType::Tank, 20.0, 50, 1_700_000_000)
    }

    #[test]
    fn test_unit_type_serde() {
        for v in UnitType::ALL {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
            let back: UnitType = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_unit_wire_field_names() {
        let mut unit = sample_unit("u1");
        unit.dispatch(15.0);
        let value = serde_json::to_value(&unit).unwrap();

        assert_eq!(value["id"], "u1");
        assert_eq!(value["type"], "tank");
        assert_eq!(value["ttl"], 20.0);
        assert_eq!(value["creationTime"], 1_700_000_000i64);
        assert_eq!(value["transitTtl"], 15.0);
        assert_eq!(value["maxTransitTtl"], 15.0);
        assert_eq!(value["hp"], 50);
        assert_eq!(value["maxHp"], 50);
    }

    #[test]
    fn test_new_unit_starts_at_full_health() {
        let unit = sample_unit("u1");
        assert_eq!(unit.hp, unit.max_hp);
        assert_eq!(unit.transit_ttl, 0.0);
        assert!(!unit.is_destroyed());
    }

    #[test]
    fn test_group_dispatch_sets_both_ttls() {
        let mut group = Group::new(GroupId::from("g1"), vec![sample_unit("a")]);
        group.dispatch(12.5);
        assert_eq!(group.transit_ttl, 12.5);
        assert_eq!(group.max_transit_ttl, 12.5);

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["units"].as_array().unwrap().len(), 1);
        assert_eq!(value["maxTransitTtl"], 12.5);
    }

    #[test]
    fn test_squad_composition_keys_are_type_names() {
        let squad = Squad::new(
            SquadId::from("s1"),
            BTreeMap::from([(UnitType::Soldier, 3), (UnitType::Helicopter, 1)]),
        );
        assert_eq!(squad.size(), 4);

        let json = serde_json::to_string(&squad).unwrap();
        assert_eq!(
            json,
            r#"{"id":"s1","composition":{"soldier":3,"helicopter":1}}"#
        );
        let back: Squad = serde_json::from_str(&json).unwrap();
        assert_eq!(back, squad);
    }

    #[test]
    fn test_command_wire_shape() {
        let json = r#"{"action":"deploy_squad","payload":{"squad_id":"s1"}}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::DeploySquad {
                squad_id: SquadId::from("s1")
            }
        );
        assert_eq!(cmd.action(), "deploy_squad");

        let cmd = Command::CreateSquad {
            unit_ids: vec![UnitId::from("a"), UnitId::from("b")],
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["action"], "create_squad");
        assert_eq!(value["payload"]["unit_ids"][1], "b");
    }

    #[test]
    fn test_event_tags() {
        let cases = vec![
            (GameEvent::Escape(UnitId::from("u1")), "ESCAPE:u1"),
            (GameEvent::BreachIndividual(UnitId::from("u2")), "BREACH_INDIVIDUAL:u2"),
            (GameEvent::BreachGroup(GroupId::from("g1")), "BREACH_GROUP:g1"),
            (GameEvent::LockOnIndividual(UnitId::from("u3")), "LOCK_ON_INDIVIDUAL:u3"),
            (GameEvent::LockOnGroup(GroupId::from("g2")), "LOCK_ON_GROUP:g2"),
            (GameEvent::DestroyIndividual(UnitId::from("u4")), "DESTROY_INDIVIDUAL:u4"),
            (GameEvent::DestroyGroup(GroupId::from("g3")), "DESTROY_GROUP:g3"),
        ];
        for (event, tag) in cases {
            assert_eq!(event.to_string(), tag);
        }
    }

    #[test]
    fn test_snapshot_field_names() {
        let snapshot = GameStateSnapshot::default();
        let value = serde_json::to_value(&snapshot).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "availableUnits",
            "individualsInTransit",
            "groupsInTransit",
            "score",
            "breachCount",
            "escapedCount",
            "lastEvents",
            "squads",
            "processingIndividualUnit",
            "processingGroup",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object.len(), 10);
        assert!(value["processingIndividualUnit"].is_null());
        assert!(value["processingGroup"].is_null());
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.tick_delta_secs(), 0.1);
        assert_eq!(config.hitpoints_for(UnitType::Tank), 50);
        assert_eq!(config.points_for(UnitType::Helicopter), 30);
    }

    #[test]
    fn test_config_round_trips_reference_shape() {
        let json = r#"{
            "rates": { "spawnRateMs": 2000, "individualWeaponRateMs": 250,
                       "groupWeaponRateMs": 750, "ttlCheckRateMs": 500 },
            "timing": { "battlefieldTtlSec": 30, "transitTtlSec": 10.5 },
            "scoring": { "points": { "soldier": 1, "tank": 2, "helicopter": 3 },
                         "penalties": { "escape": 4, "breach": 5 } },
            "units": { "hitpoints": { "soldier": 6, "tank": 7, "helicopter": 8 } },
            "weapons": { "processingPower": { "individual": 9, "group": 10 } }
        }"#;
        let config = GameConfig::from_json(json).unwrap();

        assert_eq!(config.rates.spawn_rate_ms, 2000);
        assert_eq!(config.timing.battlefield_ttl_sec, 30.0);
        assert_eq!(config.timing.transit_ttl_sec, 10.5);
        assert_eq!(config.points_for(UnitType::Tank), 2);
        assert_eq!(config.scoring.penalties.breach, 5);
        assert_eq!(config.hitpoints_for(UnitType::Helicopter), 8);
        assert_eq!(config.weapons.processing_power.group, 10);
        assert_eq!(config.tick_delta_secs(), 0.5);
        assert_eq!(config.ttl_check_period().as_millis(), 500);
    }

    #[test]
    fn test_missing_table_entries_fall_back() {
        let mut config = GameConfig::default();
        config.scoring.points.remove(&UnitType::Soldier);
        config.units.hitpoints.remove(&UnitType::Soldier);
        assert_eq!(config.points_for(UnitType::Soldier), 0);
        assert_eq!(config.hitpoints_for(UnitType::Soldier), 1);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let mut config = GameConfig::default();
        config.rates.group_weapon_rate_ms = 0;
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => {
                assert_eq!(field, "rates.groupWeaponRateMs")
            }
            other => panic!("expected invalid rate, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut config = GameConfig::default();
        config.timing.transit_ttl_sec = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "timing.transitTtlSec",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_hitpoints_rejected() {
        let mut config = GameConfig::default();
        config.units.hitpoints.insert(UnitType::Tank, 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "units.hitpoints",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_damage_rejected() {
        let mut config = GameConfig::default();
        config.weapons.processing_power.individual = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "weapons.processingPower.individual",
                ..
            })
        ));

        let json = serde_json::to_string(&GameConfig::default())
            .unwrap()
            .replace("\"group\":5", "\"group\":-2147483647");
        let err = GameConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "weapons.processingPower.group",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let err = GameConfig::from_json("{ \"rates\": 5 }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
