//! Schematic generator: configuration + palette -> isometric [`Scene`].
//!
//! The drawing is a fixed oblique projection, not a 3-D model. Every face
//! that shows depth (roof planes, side wall) is offset by
//! `(DEPTH * ISO_X, DEPTH * ISO_Y)`. Lengths are clamped into the drawable
//! range before any geometry is computed.

use crate::domain::{
    color::Color,
    entities::{
        Configuration,
        scene::{
            Material, Paint, Part, PartKind, Point, Scene, Shape, Stroke, Style, TextAnchor,
            ViewBox,
        },
    },
    palette::{Palette, WoodPalette},
    value_objects::{RoofMaterial, RoofStyle},
};

/// Scene units per foot.
pub const UNIT: f64 = 18.0;
pub const COOP_HEIGHT: f64 = 6.0 * UNIT;
pub const DEPTH: f64 = 4.0 * UNIT;
pub const ISO_X: f64 = 0.9;
pub const ISO_Y: f64 = 0.5;

const EAVE: f64 = UNIT * 0.6;
const STROKE_WIDTH: f64 = 2.0;
const METAL_EDGE: Color = Color::from_u32(0x6B7280);
const DIMENSION_INK: Color = Color::from_u32(0x9CA3AF);
const LABEL_INK: Color = Color::from_u32(0xE5E7EB);
const CONTROLLER_BODY: Color = Color::from_u32(0x0B0B0C);
const CONTROLLER_EDGE: Color = Color::from_u32(0x666666);
const CONTROLLER_LED: Color = Color::from_u32(0xFBBF24);
const MONOSPACE: &str = "ui-monospace,Menlo,Consolas,monospace";

/// Roof height above the wall plate, by style.
pub const fn roof_height(style: RoofStyle) -> f64 {
    match style {
        RoofStyle::Gable => UNIT * 1.6,
        RoofStyle::LeanTo => UNIT,
    }
}

/// Shared dimensions of one drawing.
#[derive(Debug, Clone, Copy)]
struct Frame {
    length: f64,
    feet: u32,
    roof_h: f64,
    sox: f64,
    soy: f64,
}

impl Frame {
    fn new(config: &Configuration) -> Self {
        let feet = config.clamped_length_feet();
        Self {
            length: f64::from(feet) * UNIT,
            feet,
            roof_h: roof_height(config.roof()),
            sox: DEPTH * ISO_X,
            soy: DEPTH * ISO_Y,
        }
    }

    fn view_box(&self) -> ViewBox {
        ViewBox {
            x: -self.sox * 0.45 - EAVE,
            y: -(self.roof_h + self.soy + 30.0),
            width: self.length + self.sox * 1.35,
            height: COOP_HEIGHT + self.roof_h + self.soy + 70.0,
        }
    }
}

/// Build the schematic for `config`, using the palette derived from it.
pub fn generate(config: &Configuration) -> Scene {
    generate_with_palette(config, &Palette::new(config.wood(), config.hardware_finish()))
}

/// Build the schematic with an explicit palette.
pub fn generate_with_palette(config: &Configuration, palette: &Palette) -> Scene {
    let frame = Frame::new(config);
    let wood = &palette.wood;

    let mut parts = vec![
        ground_shadow(&frame),
        roof(&frame, config.roof(), config.roof_material(), wood),
        side_wall(&frame, wood),
        front_wall(&frame, wood),
    ];
    if config.levels().has_loft() {
        parts.push(loft(&frame, wood));
        parts.push(ladder(wood));
    }
    parts.push(door(wood, palette.mesh_stroke));
    if config.timed_door() {
        parts.push(timer_controller());
    }
    parts.push(window(&frame, wood, palette.mesh_stroke));
    parts.push(clean_out(&frame, wood));
    parts.push(dimension(&frame));

    Scene {
        view_box: frame.view_box(),
        mesh_stroke: palette.mesh_stroke,
        parts,
    }
}

// ── Parts ─────────────────────────────────────────────────────────────────────

fn ground_shadow(f: &Frame) -> Part {
    Part::new(
        PartKind::GroundShadow,
        vec![Shape::Ellipse {
            center: Point::new(f.length * 0.55, COOP_HEIGHT + f.soy + 26.0),
            rx: f.length * 0.45,
            ry: 24.0,
            style: Style::solid(Color::BLACK).with_opacity(0.35),
        }],
    )
}

fn roof(f: &Frame, style: RoofStyle, material: RoofMaterial, wood: &WoodPalette) -> Part {
    let (l, h, sox, soy) = (f.length, f.roof_h, f.sox, f.soy);
    let plane = |points: Vec<Point>, wood_shade: f64| {
        let (fill, edge) = match material {
            RoofMaterial::Metal => (Paint::Material(Material::Corrugated), METAL_EDGE),
            RoofMaterial::Wood => (Paint::Solid(wood.mid.shade(wood_shade)), wood.dark),
        };
        (points, Style::fill(fill).with_stroke(Stroke::new(edge, STROKE_WIDTH)))
    };

    let planes = match style {
        RoofStyle::Gable => {
            let ridge = plane(
                vec![
                    Point::new(-EAVE, -h),
                    Point::new(l + EAVE, -h),
                    Point::new(l + sox, soy - h * 0.5),
                    Point::new(sox, soy - h * 0.5),
                ],
                -0.16,
            );
            let (right, right_style) = plane(
                vec![
                    Point::new(l * 0.55, -h),
                    Point::new(l + sox * 0.55, soy - h),
                    Point::new(l + sox, soy),
                    Point::new(l, 0.0),
                ],
                -0.22,
            );
            let (left, left_style) = plane(
                vec![
                    Point::new(l * 0.45, -h),
                    Point::new(sox * 0.45, soy - h),
                    Point::new(sox, soy),
                    Point::new(0.0, 0.0),
                ],
                -0.20,
            );
            vec![
                ridge,
                (right, right_style.with_opacity(0.95)),
                (left, left_style.with_opacity(0.95)),
            ]
        }
        RoofStyle::LeanTo => vec![plane(
            vec![
                Point::new(-EAVE, -h),
                Point::new(l + sox * 0.95, soy - h * 0.15),
                Point::new(l + sox, soy),
                Point::new(0.0, 0.0),
            ],
            -0.18,
        )],
    };

    Part::new(
        PartKind::Roof,
        planes
            .into_iter()
            .map(|(points, style)| Shape::Polygon { points, style })
            .collect(),
    )
}

fn side_wall(f: &Frame, wood: &WoodPalette) -> Part {
    let (l, sox, soy) = (f.length, f.sox, f.soy);
    let mut shapes = vec![Shape::Polygon {
        points: vec![
            Point::new(l, 0.0),
            Point::new(l + sox, soy),
            Point::new(l + sox, COOP_HEIGHT + soy),
            Point::new(l, COOP_HEIGHT),
        ],
        style: Style::solid(wood.base.shade(-0.1))
            .with_stroke(Stroke::new(wood.dark.shade(-0.3), STROKE_WIDTH)),
    }];
    // plank seams
    shapes.extend((1..=6).map(|i| {
        let y = f64::from(i) * (COOP_HEIGHT / 7.0);
        Shape::Line {
            from: Point::new(l, y),
            to: Point::new(l + sox, y + soy),
            stroke: Stroke::new(wood.dark, 1.0).with_opacity(0.25),
        }
    }));
    Part::new(PartKind::SideWall, shapes)
}

fn front_wall(f: &Frame, wood: &WoodPalette) -> Part {
    let wall = |style| Shape::Rect {
        origin: Point::new(0.0, 0.0),
        width: f.length,
        height: COOP_HEIGHT,
        corner_radius: 0.0,
        style,
    };
    Part::new(
        PartKind::FrontWall,
        vec![
            wall(Style::solid(wood.base).with_stroke(Stroke::new(wood.dark, STROKE_WIDTH))),
            wall(Style::fill(Paint::Material(Material::WoodGrain)).with_opacity(0.45)),
        ],
    )
}

const LOFT_TOP: f64 = COOP_HEIGHT * 0.25;
const LADDER_LEFT: f64 = UNIT * 2.8;
const LADDER_RIGHT: f64 = UNIT * 3.2;
const LADDER_RUNGS: u32 = 7;

fn loft(f: &Frame, wood: &WoodPalette) -> Part {
    Part::new(
        PartKind::Loft,
        vec![Shape::Rect {
            origin: Point::new(UNIT * 0.8, LOFT_TOP),
            width: f.length * 0.65,
            height: UNIT * 0.9,
            corner_radius: 6.0,
            style: Style::solid(wood.base.shade(-0.05))
                .with_stroke(Stroke::new(wood.dark, STROKE_WIDTH))
                .with_opacity(0.95),
        }],
    )
}

fn ladder(wood: &WoodPalette) -> Part {
    let ink = Stroke::new(wood.dark, STROKE_WIDTH);
    let bottom = COOP_HEIGHT - UNIT * 0.2;
    let rail = |x| Shape::Line {
        from: Point::new(x, LOFT_TOP),
        to: Point::new(x, bottom),
        stroke: ink,
    };
    let mut shapes = vec![rail(LADDER_LEFT), rail(LADDER_RIGHT)];
    shapes.extend((0..LADDER_RUNGS).map(|i| {
        let y = LOFT_TOP + f64::from(i) * (UNIT * 0.6);
        Shape::Line {
            from: Point::new(LADDER_LEFT, y),
            to: Point::new(LADDER_RIGHT, y),
            stroke: ink,
        }
    }));
    Part::new(PartKind::Ladder, shapes)
}

fn door(wood: &WoodPalette, latch: Color) -> Part {
    let height = UNIT * 3.2;
    Part::new(
        PartKind::Door,
        vec![
            Shape::Rect {
                origin: Point::new(UNIT * 0.8, COOP_HEIGHT - height - UNIT * 0.5),
                width: UNIT * 2.8,
                height,
                corner_radius: 6.0,
                style: Style::solid(wood.base.shade(-0.06))
                    .with_stroke(Stroke::new(wood.dark, STROKE_WIDTH)),
            },
            Shape::Circle {
                center: Point::new(UNIT * 3.3, COOP_HEIGHT - UNIT * 1.8),
                r: 2.5,
                style: Style::solid(latch),
            },
        ],
    )
}

/// Automatic door controller box with its LED clock hand.
fn timer_controller() -> Part {
    Part::new(
        PartKind::TimerController,
        vec![
            Shape::Rect {
                origin: Point::new(0.0, 0.0),
                width: 20.0,
                height: 14.0,
                corner_radius: 3.0,
                style: Style::solid(CONTROLLER_BODY)
                    .with_stroke(Stroke::new(CONTROLLER_EDGE, 1.0)),
            },
            Shape::Polyline {
                points: vec![
                    Point::new(6.0, 4.0),
                    Point::new(6.0, 8.0),
                    Point::new(10.0, 8.0),
                ],
                stroke: Stroke::new(CONTROLLER_LED, 2.0),
            },
        ],
    )
    .translated(Point::new(UNIT * 0.9, COOP_HEIGHT - UNIT * 3.3))
    .with_opacity(0.9)
}

fn window(f: &Frame, wood: &WoodPalette, mesh: Color) -> Part {
    let pane = |style| Shape::Rect {
        origin: Point::new(f.length - UNIT * 3.6, UNIT * 1.1),
        width: UNIT * 2.6,
        height: UNIT * 1.8,
        corner_radius: 4.0,
        style,
    };
    Part::new(
        PartKind::Window,
        vec![
            pane(Style::fill(Paint::Material(Material::Mesh)).with_stroke(Stroke::new(mesh, STROKE_WIDTH))),
            pane(Style::stroke(Stroke::new(wood.dark, STROKE_WIDTH)).with_opacity(0.4)),
        ],
    )
}

fn clean_out(f: &Frame, wood: &WoodPalette) -> Part {
    let hinge_x = f.length - UNIT * 2.7;
    Part::new(
        PartKind::CleanOut,
        vec![
            Shape::Rect {
                origin: Point::new(f.length - UNIT * 3.8, UNIT * 3.4),
                width: UNIT * 3.2,
                height: UNIT * 1.6,
                corner_radius: 6.0,
                style: Style::solid(wood.base.shade(-0.08))
                    .with_stroke(Stroke::new(wood.dark, STROKE_WIDTH)),
            },
            Shape::Line {
                from: Point::new(hinge_x, UNIT * 3.4),
                to: Point::new(hinge_x, UNIT * 5.0),
                stroke: Stroke::new(wood.dark, 1.0).with_opacity(0.3),
            },
        ],
    )
}

fn dimension(f: &Frame) -> Part {
    let ink = Stroke::new(DIMENSION_INK, STROKE_WIDTH);
    let line = |x1, y1, x2, y2| Shape::Line {
        from: Point::new(x1, y1),
        to: Point::new(x2, y2),
        stroke: ink,
    };
    Part::new(
        PartKind::Dimension,
        vec![
            line(0.0, COOP_HEIGHT + 10.0, f.length, COOP_HEIGHT + 10.0),
            line(0.0, COOP_HEIGHT + 4.0, 0.0, COOP_HEIGHT + 16.0),
            line(f.length, COOP_HEIGHT + 4.0, f.length, COOP_HEIGHT + 16.0),
            Shape::Text {
                anchor_point: Point::new(f.length / 2.0, COOP_HEIGHT + 28.0),
                anchor: TextAnchor::Middle,
                content: format!("{}\u{2032}", f.feet),
                font_size: 14.0,
                font_family: MONOSPACE,
                fill: LABEL_INK,
            },
        ],
    )
}
