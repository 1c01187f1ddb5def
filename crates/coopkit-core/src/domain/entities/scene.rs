//! Scene graph produced by the schematic generator.
//!
//! The scene is a renderer-neutral description: named parts holding shapes
//! with coordinates and styles in a single coordinate system. Procedural
//! textures (wood grain, corrugated metal, wire mesh) are named
//! [`Material`]s; adapters decide how to draw them.

use std::fmt;

use serde::Serialize;

use crate::domain::color::Color;

/// A 2-D point in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible region of the scene (`min_x min_y width height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Procedural fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    /// Translucent fractal-noise grain laid over a wall.
    WoodGrain,
    /// Sheet metal: brushed gradient with corrugation lines.
    Corrugated,
    /// Hardware-cloth grid in the scene's mesh stroke color.
    Mesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Paint {
    None,
    Solid(Color),
    Material(Material),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub opacity: Option<f64>,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: None,
        }
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Option<Stroke>,
    pub opacity: Option<f64>,
}

impl Style {
    pub const fn fill(fill: Paint) -> Self {
        Self {
            fill,
            stroke: None,
            opacity: None,
        }
    }

    pub const fn solid(color: Color) -> Self {
        Self::fill(Paint::Solid(color))
    }

    pub const fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: Paint::None,
            stroke: Some(stroke),
            opacity: None,
        }
    }

    pub const fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Drawable primitives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum Shape {
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        style: Style,
    },
    Polygon {
        points: Vec<Point>,
        style: Style,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        r: f64,
        style: Style,
    },
    /// Open path through `points`.
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Text {
        anchor_point: Point,
        anchor: TextAnchor,
        content: String,
        font_size: f64,
        font_family: &'static str,
        fill: Color,
    },
}

/// What a part of the drawing represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    GroundShadow,
    Roof,
    SideWall,
    FrontWall,
    Loft,
    Ladder,
    Door,
    TimerController,
    Window,
    CleanOut,
    Dimension,
}

impl PartKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GroundShadow => "ground-shadow",
            Self::Roof => "roof",
            Self::SideWall => "side-wall",
            Self::FrontWall => "front-wall",
            Self::Loft => "loft",
            Self::Ladder => "ladder",
            Self::Door => "door",
            Self::TimerController => "timer-controller",
            Self::Window => "window",
            Self::CleanOut => "clean-out",
            Self::Dimension => "dimension",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of shapes, optionally translated and faded as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub kind: PartKind,
    pub translate: Option<Point>,
    pub opacity: Option<f64>,
    pub shapes: Vec<Shape>,
}

impl Part {
    pub fn new(kind: PartKind, shapes: Vec<Shape>) -> Self {
        Self {
            kind,
            translate: None,
            opacity: None,
            shapes,
        }
    }

    pub fn translated(mut self, by: Point) -> Self {
        self.translate = Some(by);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// A complete drawing, parts in paint order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub view_box: ViewBox,
    /// Stroke color of the [`Material::Mesh`] pattern.
    pub mesh_stroke: Color,
    pub parts: Vec<Part>,
}

impl Scene {
    pub fn part(&self, kind: PartKind) -> Option<&Part> {
        self.parts.iter().find(|p| p.kind == kind)
    }

    pub fn has(&self, kind: PartKind) -> bool {
        self.part(kind).is_some()
    }

    /// Every material referenced by any shape.
    pub fn materials(&self) -> Vec<Material> {
        let mut found = Vec::new();
        for shape in self.parts.iter().flat_map(|p| &p.shapes) {
            let fill = match shape {
                Shape::Ellipse { style, .. }
                | Shape::Polygon { style, .. }
                | Shape::Rect { style, .. }
                | Shape::Circle { style, .. } => style.fill,
                _ => continue,
            };
            if let Paint::Material(m) = fill {
                if !found.contains(&m) {
                    found.push(m);
                }
            }
        }
        found
    }
}
