//! Integration tests for coopkit-core.
//!
//! Exercise the public API the way a front end does: build a configuration,
//! price it, draw it, and format the quote.

use coopkit_core::domain::{
    Color, ContactDetails, Levels, PartKind, QuoteRequest, RoofMaterial, RoofStyle, Shape,
};
use coopkit_core::prelude::*;

fn price(config: &Configuration) -> i64 {
    estimate_price(config).dollars() as i64
}

fn all_configurations() -> Vec<Configuration> {
    let mut out = Vec::new();
    for wood in Wood::ALL {
        for roof in RoofStyle::ALL {
            for material in RoofMaterial::ALL {
                for levels in Levels::ALL {
                    for timed in [false, true] {
                        for finish in HardwareFinish::ALL {
                            for feet in [0, 4, 8, 11, 16, 30] {
                                out.push(
                                    Configuration::builder()
                                        .wood(wood)
                                        .roof(roof)
                                        .roof_material(material)
                                        .levels(levels)
                                        .timed_door(timed)
                                        .hardware_finish(finish)
                                        .length_feet(feet)
                                        .build(),
                                );
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

// ── pricing ──────────────────────────────────────────────────────────────

#[test]
fn published_fixed_point() {
    let config = Configuration::builder()
        .wood(Wood::Cedar)
        .roof(RoofStyle::Gable)
        .hardware_finish(HardwareFinish::Black)
        .length_feet(8)
        .levels(Levels::One)
        .roof_material(RoofMaterial::Wood)
        .timed_door(false)
        .build();
    assert_eq!(price(&config), 5910);
    assert_eq!(estimate_price(&config).to_string(), "$5,910");
}

#[test]
fn each_option_moves_the_price_by_its_rate() {
    for base in all_configurations() {
        let feet = base.length_feet();
        let plus_foot = base.to_builder().length_feet(feet + 1).build();
        let rate = if base.wood() == Wood::Cedar { 280 } else { 220 };
        assert_eq!(price(&plus_foot) - price(&base), rate);

        let pine = base.to_builder().wood(Wood::Pine).build();
        let cedar = base.to_builder().wood(Wood::Cedar).build();
        assert_eq!(price(&cedar) - price(&pine), 60 * i64::from(feet));

        let off = base.to_builder().timed_door(false).build();
        let on = base.to_builder().timed_door(true).build();
        assert_eq!(price(&on) - price(&off), 180);

        let one = base.to_builder().levels(Levels::One).build();
        let two = base.to_builder().levels(Levels::Two).build();
        assert_eq!(price(&two) - price(&one), 350);

        let wood = base.to_builder().roof_material(RoofMaterial::Wood).build();
        let metal = base.to_builder().roof_material(RoofMaterial::Metal).build();
        assert_eq!(price(&metal) - price(&wood), 220);

        let galv = base.to_builder().hardware_finish(HardwareFinish::Galvanized).build();
        let black = base.to_builder().hardware_finish(HardwareFinish::Black).build();
        assert_eq!(price(&black) - price(&galv), 120);

        let lean = base.to_builder().roof(RoofStyle::LeanTo).build();
        let gable = base.to_builder().roof(RoofStyle::Gable).build();
        assert_eq!(price(&gable) - price(&lean), 170);
    }
}

#[test]
fn default_selection_prices_at_7320() {
    assert_eq!(price(&Configuration::default()), 7320);
}

// ── schematic ────────────────────────────────────────────────────────────

#[test]
fn schematic_clamps_length() {
    for config in all_configurations() {
        let clamped = config
            .to_builder()
            .length_feet(config.clamped_length_feet())
            .build();
        assert_eq!(generate_schematic(&config), generate_schematic(&clamped));
    }
}

#[test]
fn levels_decide_loft_and_ladder() {
    for config in all_configurations() {
        let scene = generate_schematic(&config);
        let two = config.levels() == Levels::Two;
        assert_eq!(scene.has(PartKind::Loft), two);
        assert_eq!(scene.has(PartKind::Ladder), two);
        assert_eq!(scene.has(PartKind::TimerController), config.timed_door());
    }
}

#[test]
fn parts_are_in_paint_order() {
    let config = Configuration::builder()
        .levels(Levels::Two)
        .timed_door(true)
        .build();
    let kinds: Vec<_> = generate_schematic(&config)
        .parts
        .iter()
        .map(|p| p.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            PartKind::GroundShadow,
            PartKind::Roof,
            PartKind::SideWall,
            PartKind::FrontWall,
            PartKind::Loft,
            PartKind::Ladder,
            PartKind::Door,
            PartKind::TimerController,
            PartKind::Window,
            PartKind::CleanOut,
            PartKind::Dimension,
        ]
    );
}

#[test]
fn scene_serializes_to_json() {
    let scene = generate_schematic(&Configuration::default());
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["parts"][0]["kind"], "ground-shadow");
    assert_eq!(json["mesh_stroke"], "#0a0a0a");
    assert!(
        scene
            .parts
            .iter()
            .flat_map(|p| &p.shapes)
            .any(|s| matches!(s, Shape::Text { .. }))
    );
}

// ── shading ──────────────────────────────────────────────────────────────

#[test]
fn shading_saturates_and_keeps_identity() {
    let colors = [
        Color::from_u32(0xB7773A),
        Color::from_u32(0xD6C5A8),
        Color::from_u32(0x000000),
        Color::from_u32(0xFFFFFF),
    ];
    for c in colors {
        assert_eq!(c.shade(0.0), c);
        assert_eq!(c.shade(1.0), Color::rgb(255, 255, 255));
        assert_eq!(c.shade(-1.0), Color::rgb(0, 0, 0));
    }
}

// ── quote ────────────────────────────────────────────────────────────────

#[test]
fn quote_lists_every_field_once() {
    let request = QuoteRequest::new(
        Configuration::builder().timed_door(true).build(),
        ContactDetails {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            city: "Salem".into(),
            notes: String::new(),
        },
    );
    let body = request.body();
    let labels = [
        "Wood:",
        "Roof:",
        "Roof Material:",
        "Levels:",
        "Timed Door: Yes",
        "Length: 11 ft",
        "Hardware:",
        "Name: Ada",
        "Email: ada@example.com",
        "Phone:",
        "City: Salem",
        "Notes:",
    ];
    let mut last = 0;
    for label in labels {
        let at = body.find(label).unwrap_or_else(|| panic!("{label} missing"));
        assert!(at >= last, "{label} out of order");
        last = at;
    }
    assert!(!body.ends_with('\n'));
    assert!(request.subject().ends_with(" · timed door"));
}
