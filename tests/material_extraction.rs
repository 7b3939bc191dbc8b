//! Integration tests for materials extraction.

mod common;

use common::{fixture, header_line, sodium_block, trailer_line};
use proptest::prelude::*;
use srcrec::material::NOTES_PLACEHOLDER;
use srcrec::{
    json, parse_material, ExtractConfig, ExtractError, MaterialReader, MaterialType, Phase,
};

#[test]
fn test_read_materials_fixture() {
    let mut reader = MaterialReader::new(ExtractConfig::default());
    let materials = reader
        .read_path(fixture("materials.txt"))
        .expect("Failed to read materials");

    let ids: Vec<&str> = materials.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "26", "92", "104", "185", "221", "104A", "103"]);
    assert_eq!(reader.records_read(), 8);
}

#[test]
fn test_hydrogen_is_diatomic_element() {
    let materials = MaterialReader::new(ExtractConfig::default())
        .read_path(fixture("materials.txt"))
        .unwrap();
    let hydrogen = &materials[0];

    assert_eq!(hydrogen.name, "Hydrogen");
    assert_eq!(hydrogen.chemical_symbol.as_deref(), Some("H"));
    assert_eq!(hydrogen.material_type, MaterialType::Element);
    assert_eq!(hydrogen.phase, Phase::DiatomicGas);
    assert_eq!(hydrogen.atomic_weight, Some(1.00794));
    assert_eq!(hydrogen.density, 8.3748e-5);
    assert_eq!(hydrogen.melting_point, Some(-259.14));
    assert_eq!(hydrogen.boiling_point, Some(-252.87));
    assert_eq!(hydrogen.notes.as_deref(), Some(NOTES_PLACEHOLDER));
}

#[test]
fn test_fixture_type_and_phase_decoding() {
    let materials = MaterialReader::new(ExtractConfig::default())
        .read_path(fixture("materials.txt"))
        .unwrap();
    let decoded: Vec<(MaterialType, Phase)> = materials
        .iter()
        .map(|m| (m.material_type, m.phase))
        .collect();

    assert_eq!(
        decoded,
        vec![
            (MaterialType::Element, Phase::DiatomicGas),
            (MaterialType::Element, Phase::Solid),
            (MaterialType::RadioactiveElement, Phase::Solid),
            (MaterialType::InorganicCompound, Phase::Liquid),
            (MaterialType::InorganicCompound, Phase::Solid),
            (MaterialType::Polymer, Phase::Solid),
            (MaterialType::Mixture, Phase::Gas),
            (MaterialType::Biological, Phase::Unspecified),
        ]
    );
}

#[test]
fn test_fixture_quirks() {
    let materials = MaterialReader::new(ExtractConfig::default())
        .read_path(fixture("materials.txt"))
        .unwrap();

    // truncated melting-point line
    assert_eq!(materials[2].melting_point, Some(1132.2));
    assert_eq!(materials[2].chemical_symbol.as_deref(), Some("U"));

    // compounds: negative weight, no symbol, notes over two lines
    let water = &materials[3];
    assert_eq!(water.name, "Water, Liquid");
    assert_eq!(water.atomic_weight, None);
    assert_eq!(water.chemical_symbol, None);
    assert_eq!(water.index_of_refraction, Some(1.333));
    assert_eq!(water.notes.as_deref(), Some(NOTES_PLACEHOLDER));

    assert_eq!(materials[4].name, "Lithium Fluoride (LiFequalsTLD-100)");
    assert_eq!(materials[5].name, "Polyethylene");
    assert_eq!(materials[6].name, "Air, Dry (near sea level)");
    assert_eq!(materials[6].melting_point, None);
    assert_eq!(materials[6].notes, None);
}

#[test]
fn test_unknown_type_code_aborts_run() {
    let mut reader = MaterialReader::new(ExtractConfig::default());
    let err = reader
        .read_path(fixture("materials_bad_type.txt"))
        .unwrap_err();

    match err {
        ExtractError::Source { source, .. } => {
            assert!(matches!(*source, ExtractError::InvalidFormat(_)));
            assert!(source.to_string().contains("'X'"));
        },
        other => panic!("unexpected error: {other}"),
    }
    // iron parsed, the bad block stopped the run before hydrogen
    assert_eq!(reader.records_read(), 1);
}

#[test]
fn test_element_solid_header() {
    let material = parse_material(&sodium_block()).unwrap();
    assert_eq!(material.material_type, MaterialType::Element);
    assert_eq!(material.phase, Phase::Solid);
    assert_eq!(material.chemical_symbol.as_deref(), Some("Na"));
    assert_eq!(material.name, "Sodium");
    assert_eq!(material.melting_point, Some(97.79));
}

#[test]
fn test_name_junk_tokens_stripped() {
    let mut block = sodium_block();
    block[1] = "NaCl  Sodium ### Chloride".to_string();
    block[0] = header_line("NaCl", "-1", "2.1650E+00", 'S', 1, 'I');
    let material = parse_material(&block).unwrap();
    assert_eq!(material.name, "Sodium");
    assert_eq!(material.chemical_symbol, None);
}

#[test]
fn test_negative_weight_absent_density_present() {
    let mut block = sodium_block();
    block[0] = header_line("11", "-22.9", "9.7100E-01", 'S', 1, 'E');
    let material = parse_material(&block).unwrap();
    assert_eq!(material.atomic_weight, None);
    assert_eq!(material.density, 0.971);

    let value = serde_json::to_value(&material).unwrap();
    assert!(value.get("atomic_weight").is_none());
    assert_eq!(value["density"], 0.971);
}

#[test]
fn test_zero_elements_moves_trailer_up() {
    let block = vec![
        header_line("500", "-1", "1.0000E+00", 'L', 0, 'O'),
        "OIL   Mineral Oil".to_string(),
        "  Z   Fraction by weight".to_string(),
        trailer_line("Boiling point (C):", "310.0"),
    ];
    let material = parse_material(&block).unwrap();
    assert_eq!(material.material_type, MaterialType::OrganicCompound);
    assert_eq!(material.boiling_point, Some(310.0));
}

#[test]
fn test_bad_element_count_is_fatal() {
    let mut block = sodium_block();
    let mut header: Vec<char> = block[0].chars().collect();
    header[67] = 'x';
    block[0] = header.into_iter().collect();
    assert!(matches!(
        parse_material(&block),
        Err(ExtractError::InvalidFormat(_))
    ));
}

#[test]
fn test_materials_json_roundtrip() {
    let materials = MaterialReader::new(ExtractConfig::default())
        .read_path(fixture("materials.txt"))
        .unwrap();
    let text = json::materials_to_json(&materials).unwrap();
    let restored = json::materials_from_json(&text).unwrap();
    assert_eq!(materials, restored);
    assert_eq!(json::materials_to_json(&restored).unwrap(), text);
}

#[test]
fn test_materials_json_layout() {
    let materials = MaterialReader::new(ExtractConfig::default())
        .read_str(&sodium_block().join("\n"))
        .unwrap();
    let text = json::materials_to_json(&materials).unwrap();
    let expected = r#"[
    {
        "_id": "11",
        "name": "Sodium",
        "type": "Element",
        "phase": "Solid",
        "chemical_symbol": "Na",
        "atomic_weight": 22.98977,
        "density": 0.971,
        "melting_point": 97.79,
        "boiling_point": 882.94
    }
]"#;
    assert_eq!(text, expected);
}

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn prop_parsed_weight_survives_json(weight in finite_f64()) {
        let weight = weight.abs();
        let mut block = sodium_block();
        block[0] = header_line("11", &format!("{weight:e}"), "9.7100E-01", 'S', 1, 'E');
        let material = parse_material(&block).unwrap();
        prop_assert_eq!(material.atomic_weight, Some(weight));

        let original = vec![material];
        let text = json::materials_to_json(&original).unwrap();
        prop_assert_eq!(json::materials_from_json(&text).unwrap(), original);
    }

    #[test]
    fn prop_any_finite_floats_survive_json(
        weight in finite_f64(),
        density in finite_f64(),
        melting in finite_f64(),
        index in finite_f64(),
    ) {
        let mut material = parse_material(&sodium_block()).unwrap();
        material.atomic_weight = Some(weight);
        material.density = density;
        material.melting_point = Some(melting);
        material.index_of_refraction = Some(index);

        let original = vec![material];
        let text = json::materials_to_json(&original).unwrap();
        prop_assert_eq!(json::materials_from_json(&text).unwrap(), original);
    }
}
