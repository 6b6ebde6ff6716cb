use super::*;
use crate::config::EngineConfig;
use crate::error::HexFieldError;

fn catalog_with_plain_and_river() -> FeatureCatalog {
    let mut catalog = FeatureCatalog::new();
    catalog.insert_terrain(
        "plain",
        FeatureAttrs {
            movement_cost: Some(1),
            ..Default::default()
        },
    );
    catalog.insert_terrain(
        "river",
        FeatureAttrs {
            movement_cost: Some(4),
            terrain_condition: Some("bridgeable".to_string()),
            ..Default::default()
        },
    );
    catalog.insert_structure(
        "bridge",
        FeatureAttrs {
            movement_cost: Some(0),
            structure_condition: Some("bridge".to_string()),
            ..Default::default()
        },
    );
    catalog
}

#[test]
fn terrain_attrs_missing_name_is_not_found() {
    let catalog = FeatureCatalog::new();
    assert!(matches!(
        catalog.terrain_attrs("swamp"),
        Err(HexFieldError::NotFound(_))
    ));
}

#[test]
fn hex_terrain_kinds_excludes_edge_objects() {
    let mut catalog = FeatureCatalog::new();
    catalog.insert_terrain("plain", FeatureAttrs::default());
    catalog.insert_terrain(
        "river",
        FeatureAttrs {
            edgeobject: true,
            ..Default::default()
        },
    );
    let kinds = catalog.hex_terrain_kinds();
    assert_eq!(kinds, vec!["plain"]);
}

#[test]
fn feature_construction_resolves_attrs_from_catalog() {
    let catalog = catalog_with_plain_and_river();
    let config = EngineConfig::default();
    let river = Feature::new_terrain(
        "f1".to_string(),
        "river".to_string(),
        "river".to_string(),
        &catalog,
        &config,
    )
    .unwrap();
    assert_eq!(river.movement_cost, 4);
    assert_eq!(river.terrain_condition.as_deref(), Some("bridgeable"));
    assert!(river.is_bridgeable());
}

#[test]
fn missing_movement_cost_defaults_to_large() {
    let mut catalog = FeatureCatalog::new();
    catalog.insert_terrain("mystery", FeatureAttrs::default());
    let config = EngineConfig::default();
    let feature = Feature::new_terrain(
        "f1".to_string(),
        "mystery".to_string(),
        "mystery".to_string(),
        &catalog,
        &config,
    )
    .unwrap();
    assert_eq!(feature.movement_cost, config.large_cost);
}

#[test]
fn bridge_structure_is_recognised() {
    let catalog = catalog_with_plain_and_river();
    let config = EngineConfig::default();
    let bridge = Feature::new_structure(
        "f2".to_string(),
        "bridge".to_string(),
        "bridge".to_string(),
        &catalog,
        &config,
    )
    .unwrap();
    assert!(bridge.is_bridge());
}
