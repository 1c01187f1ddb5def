//! SVG 1.1 markup renderer.
//!
//! Each [`Part`] becomes a `<g id="<kind>">`. Every material the scene uses
//! is defined once in `<defs>` and referenced by URL: wood grain as a
//! turbulence filter, mesh and corrugated metal as patterns.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use coopkit_core::{
    application::{ApplicationError, ports::SceneRenderer},
    domain::{Color, Material, Paint, Part, Point, Scene, Shape, Stroke, Style, TextAnchor},
    error::{CoopError, CoopResult},
};
use tracing::instrument;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const GRAIN_FILTER_ID: &str = "grain-wood";
const MESH_PATTERN_ID: &str = "mesh";
const METAL_GRADIENT_ID: &str = "metalGrad";
const CORRUGATION_PATTERN_ID: &str = "corr";

type XmlWriter = Writer<Vec<u8>>;

/// Renders a scene as a standalone SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SceneRenderer for SvgRenderer {
    #[instrument(skip_all, fields(parts = scene.parts.len()))]
    fn render(&self, scene: &Scene) -> CoopResult<String> {
        write_document(scene).map_err(|reason| {
            CoopError::from(ApplicationError::RenderingFailed { reason })
        })
    }

    fn media_type(&self) -> &'static str {
        "image/svg+xml"
    }

    fn extension(&self) -> &'static str {
        "svg"
    }
}

fn write_document(scene: &Scene) -> Result<String, String> {
    let mut xml = Writer::new_with_indent(Vec::with_capacity(8 * 1024), b' ', 2);
    write_svg(&mut xml, scene).map_err(|e| e.to_string())?;

    let mut out = String::from_utf8(xml.into_inner()).map_err(|e| e.to_string())?;
    out.push('\n');
    Ok(out)
}

fn write_svg(xml: &mut XmlWriter, scene: &Scene) -> io::Result<()> {
    let vb = scene.view_box;
    let view_box = [vb.x, vb.y, vb.width, vb.height].map(num).join(" ");

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("version", "1.1"));
    root.push_attribute(("viewBox", view_box.as_str()));
    xml.write_event(Event::Start(root))?;

    let materials = scene.materials();
    if !materials.is_empty() {
        write_defs(xml, &materials, scene.mesh_stroke)?;
    }
    for part in &scene.parts {
        write_part(xml, part)?;
    }

    xml.write_event(Event::End(BytesEnd::new("svg")))
}

fn write_defs(xml: &mut XmlWriter, materials: &[Material], mesh: Color) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("defs")))?;
    for material in materials {
        match material {
            Material::WoodGrain => write_grain_filter(xml)?,
            Material::Mesh => write_mesh_pattern(xml, mesh)?,
            Material::Corrugated => write_corrugation(xml)?,
        }
    }
    xml.write_event(Event::End(BytesEnd::new("defs")))
}

/// Noise clipped to the alpha of the shape it is applied to.
fn write_grain_filter(xml: &mut XmlWriter) -> io::Result<()> {
    let mut filter = BytesStart::new("filter");
    filter.push_attribute(("id", GRAIN_FILTER_ID));
    filter.push_attribute(("x", "0"));
    filter.push_attribute(("y", "0"));
    filter.push_attribute(("width", "100%"));
    filter.push_attribute(("height", "100%"));
    xml.write_event(Event::Start(filter))?;

    let mut turbulence = BytesStart::new("feTurbulence");
    turbulence.push_attribute(("type", "fractalNoise"));
    turbulence.push_attribute(("baseFrequency", "0.015"));
    turbulence.push_attribute(("numOctaves", "2"));
    turbulence.push_attribute(("seed", "2"));
    xml.write_event(Event::Empty(turbulence))?;

    let mut matrix = BytesStart::new("feColorMatrix");
    matrix.push_attribute(("type", "matrix"));
    matrix.push_attribute(("values", "1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 .18 0"));
    xml.write_event(Event::Empty(matrix))?;

    let mut clip = BytesStart::new("feComposite");
    clip.push_attribute(("in2", "SourceGraphic"));
    clip.push_attribute(("operator", "in"));
    xml.write_event(Event::Empty(clip))?;

    xml.write_event(Event::End(BytesEnd::new("filter")))
}

fn write_mesh_pattern(xml: &mut XmlWriter, mesh: Color) -> io::Result<()> {
    let mesh = mesh.to_hex();
    xml.write_event(Event::Start(pattern(MESH_PATTERN_ID, 8, 8)))?;
    for (d, opacity) in [("M0 0 L8 0 M0 0 L0 8", None), ("M8 0 L8 8 M0 8 L8 8", Some("0.35"))] {
        let mut path = BytesStart::new("path");
        path.push_attribute(("d", d));
        path.push_attribute(("stroke", mesh.as_str()));
        path.push_attribute(("stroke-width", "1"));
        if let Some(opacity) = opacity {
            path.push_attribute(("opacity", opacity));
        }
        xml.write_event(Event::Empty(path))?;
    }
    xml.write_event(Event::End(BytesEnd::new("pattern")))
}

/// Brushed gradient plus the corrugation pattern that fills with it.
fn write_corrugation(xml: &mut XmlWriter) -> io::Result<()> {
    let mut gradient = BytesStart::new("linearGradient");
    gradient.push_attribute(("id", METAL_GRADIENT_ID));
    for (k, v) in [("x1", "0"), ("y1", "0"), ("x2", "1"), ("y2", "0")] {
        gradient.push_attribute((k, v));
    }
    xml.write_event(Event::Start(gradient))?;
    for (offset, color) in [("0%", "#9aa4ae"), ("50%", "#cbd5e1"), ("100%", "#8b95a1")] {
        let mut stop = BytesStart::new("stop");
        stop.push_attribute(("offset", offset));
        stop.push_attribute(("stop-color", color));
        xml.write_event(Event::Empty(stop))?;
    }
    xml.write_event(Event::End(BytesEnd::new("linearGradient")))?;

    xml.write_event(Event::Start(pattern(CORRUGATION_PATTERN_ID, 10, 6)))?;
    let mut sheet = BytesStart::new("rect");
    sheet.push_attribute(("width", "10"));
    sheet.push_attribute(("height", "6"));
    sheet.push_attribute(("fill", format!("url(#{METAL_GRADIENT_ID})").as_str()));
    xml.write_event(Event::Empty(sheet))?;

    let mut ridge = BytesStart::new("line");
    for (k, v) in [
        ("x1", "0"),
        ("y1", "3"),
        ("x2", "10"),
        ("y2", "3"),
        ("stroke", "#6b7280"),
        ("stroke-width", "0.8"),
        ("opacity", "0.7"),
    ] {
        ridge.push_attribute((k, v));
    }
    xml.write_event(Event::Empty(ridge))?;
    xml.write_event(Event::End(BytesEnd::new("pattern")))
}

fn pattern(id: &str, width: u32, height: u32) -> BytesStart<'static> {
    let mut pattern = BytesStart::new("pattern");
    pattern.push_attribute(("id", id));
    pattern.push_attribute(("width", width.to_string().as_str()));
    pattern.push_attribute(("height", height.to_string().as_str()));
    pattern.push_attribute(("patternUnits", "userSpaceOnUse"));
    pattern
}

fn write_part(xml: &mut XmlWriter, part: &Part) -> io::Result<()> {
    let mut group = BytesStart::new("g");
    group.push_attribute(("id", part.kind.as_str()));
    if let Some(Point { x, y }) = part.translate {
        let translate = format!("translate({} {})", num(x), num(y));
        group.push_attribute(("transform", translate.as_str()));
    }
    if let Some(opacity) = part.opacity {
        group.push_attribute(("opacity", num(opacity).as_str()));
    }
    xml.write_event(Event::Start(group))?;

    for shape in &part.shapes {
        write_shape(xml, shape)?;
    }

    xml.write_event(Event::End(BytesEnd::new("g")))
}

fn write_shape(xml: &mut XmlWriter, shape: &Shape) -> io::Result<()> {
    let element = match shape {
        Shape::Ellipse {
            center,
            rx,
            ry,
            style,
        } => {
            let mut el = BytesStart::new("ellipse");
            push_nums(&mut el, &[("cx", center.x), ("cy", center.y), ("rx", *rx), ("ry", *ry)]);
            push_style(&mut el, style);
            el
        }
        Shape::Polygon { points, style } => {
            let mut el = BytesStart::new("polygon");
            el.push_attribute(("points", point_list(points).as_str()));
            push_style(&mut el, style);
            el
        }
        Shape::Rect {
            origin,
            width,
            height,
            corner_radius,
            style,
        } => {
            let mut el = BytesStart::new("rect");
            push_nums(
                &mut el,
                &[("x", origin.x), ("y", origin.y), ("width", *width), ("height", *height)],
            );
            if *corner_radius > 0.0 {
                push_nums(&mut el, &[("rx", *corner_radius)]);
            }
            push_style(&mut el, style);
            el
        }
        Shape::Line { from, to, stroke } => {
            let mut el = BytesStart::new("line");
            push_nums(&mut el, &[("x1", from.x), ("y1", from.y), ("x2", to.x), ("y2", to.y)]);
            push_stroke(&mut el, stroke, "opacity");
            el
        }
        Shape::Circle { center, r, style } => {
            let mut el = BytesStart::new("circle");
            push_nums(&mut el, &[("cx", center.x), ("cy", center.y), ("r", *r)]);
            push_style(&mut el, style);
            el
        }
        Shape::Polyline { points, stroke } => {
            let mut el = BytesStart::new("polyline");
            el.push_attribute(("points", point_list(points).as_str()));
            el.push_attribute(("fill", "none"));
            push_stroke(&mut el, stroke, "opacity");
            el
        }
        Shape::Text {
            anchor_point,
            anchor,
            content,
            font_size,
            font_family,
            fill,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let mut el = BytesStart::new("text");
            push_nums(&mut el, &[("x", anchor_point.x), ("y", anchor_point.y)]);
            el.push_attribute(("text-anchor", anchor));
            push_nums(&mut el, &[("font-size", *font_size)]);
            el.push_attribute(("font-family", *font_family));
            el.push_attribute(("fill", fill.to_hex().as_str()));

            xml.write_event(Event::Start(el))?;
            xml.write_event(Event::Text(BytesText::new(content)))?;
            return xml.write_event(Event::End(BytesEnd::new("text")));
        }
    };
    xml.write_event(Event::Empty(element))
}

fn push_nums(el: &mut BytesStart<'_>, attrs: &[(&str, f64)]) {
    for (key, value) in attrs {
        el.push_attribute((*key, num(*value).as_str()));
    }
}

fn push_style(el: &mut BytesStart<'_>, style: &Style) {
    match style.fill {
        Paint::None => el.push_attribute(("fill", "none")),
        Paint::Solid(color) => el.push_attribute(("fill", color.to_hex().as_str())),
        Paint::Material(Material::WoodGrain) => {
            el.push_attribute(("fill", "#ffffff"));
            el.push_attribute(("filter", format!("url(#{GRAIN_FILTER_ID})").as_str()));
        }
        Paint::Material(Material::Mesh) => {
            el.push_attribute(("fill", format!("url(#{MESH_PATTERN_ID})").as_str()))
        }
        Paint::Material(Material::Corrugated) => {
            el.push_attribute(("fill", format!("url(#{CORRUGATION_PATTERN_ID})").as_str()))
        }
    }
    if let Some(stroke) = &style.stroke {
        push_stroke(el, stroke, "stroke-opacity");
    }
    if let Some(opacity) = style.opacity {
        push_nums(el, &[("opacity", opacity)]);
    }
}

/// `opacity_attr` is `opacity` for bare strokes and `stroke-opacity` when the
/// stroke belongs to a filled shape.
fn push_stroke(el: &mut BytesStart<'_>, stroke: &Stroke, opacity_attr: &str) {
    el.push_attribute(("stroke", stroke.color.to_hex().as_str()));
    push_nums(el, &[("stroke-width", stroke.width)]);
    if let Some(opacity) = stroke.opacity {
        push_nums(el, &[(opacity_attr, opacity)]);
    }
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Up to three decimals, no trailing zeros, no negative zero.
pub(crate) fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".into();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use coopkit_core::domain::{
        Configuration, HardwareFinish, Levels, PartKind, RoofMaterial, ViewBox, generate_schematic,
    };

    use super::*;

    fn render(config: &Configuration) -> String {
        SvgRenderer::new()
            .render(&generate_schematic(config))
            .unwrap()
    }

    fn label_scene(content: &str, font_family: &'static str) -> Scene {
        Scene {
            view_box: ViewBox {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            mesh_stroke: Color::BLACK,
            parts: vec![Part::new(
                PartKind::Dimension,
                vec![Shape::Text {
                    anchor_point: Point::new(1.0, 2.0),
                    anchor: TextAnchor::Start,
                    content: content.into(),
                    font_size: 12.0,
                    font_family,
                    fill: Color::BLACK,
                }],
            )],
        }
    }

    /// The `<filter id="grain-wood">` element through its closing tag.
    fn grain_filter(svg: &str) -> &str {
        let start = svg.find(r#"<filter id="grain-wood""#).unwrap();
        let len = svg[start..].find("</filter>").unwrap();
        &svg[start..start + len]
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(num(18.0), "18");
        assert_eq!(num(16.2), "16.2");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-28.8), "-28.8");
    }

    #[test]
    fn one_group_per_part() {
        let config = Configuration::builder()
            .levels(Levels::Two)
            .timed_door(true)
            .build();
        let scene = generate_schematic(&config);
        let svg = SvgRenderer::new().render(&scene).unwrap();

        assert_eq!(svg.matches("<g id=").count(), scene.parts.len());
        for part in &scene.parts {
            assert!(svg.contains(&format!(r#"<g id="{}""#, part.kind)));
        }
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn single_level_has_no_loft_group() {
        let svg = render(&Configuration::builder().levels(Levels::One).build());
        assert!(!svg.contains(r#"<g id="loft""#));
        assert!(!svg.contains(r#"<g id="ladder""#));
    }

    #[test]
    fn timer_group_is_translated() {
        let svg = render(&Configuration::builder().timed_door(true).build());
        assert!(svg.contains(
            r#"<g id="timer-controller" transform="translate(16.2 48.6)" opacity="0.9">"#
        ));
    }

    #[test]
    fn mesh_pattern_uses_hardware_stroke() {
        let svg = render(
            &Configuration::builder()
                .hardware_finish(HardwareFinish::Galvanized)
                .build(),
        );
        assert!(svg.contains(r##"<path d="M0 0 L8 0 M0 0 L0 8" stroke="#9ca3af""##));
        assert!(svg.contains(r#"fill="url(#mesh)""#));
    }

    #[test]
    fn corrugation_is_defined_only_for_metal_roofs() {
        let metal = render(
            &Configuration::builder()
                .roof_material(RoofMaterial::Metal)
                .build(),
        );
        let wood = render(
            &Configuration::builder()
                .roof_material(RoofMaterial::Wood)
                .build(),
        );
        assert!(metal.contains(r#"fill="url(#corr)""#));
        assert!(metal.contains(r#"<pattern id="corr""#));
        assert!(metal.contains(r#"<linearGradient id="metalGrad""#));

        assert!(!wood.contains("url(#corr)"));
        assert!(!wood.contains(r#"<pattern id="corr""#));
        assert!(!wood.contains("metalGrad"));
    }

    #[test]
    fn grain_filter_is_clipped_to_its_shape() {
        let svg = render(&Configuration::default());
        assert!(svg.contains(r#"filter="url(#grain-wood)""#));

        let filter = grain_filter(&svg);
        assert!(filter.contains(r#"x="0" y="0" width="100%" height="100%""#));
        assert!(!filter.contains("-20%"));

        let noise = filter.find("<feTurbulence").unwrap();
        let clip = filter
            .find(r#"<feComposite in2="SourceGraphic" operator="in"/>"#)
            .unwrap();
        assert!(clip > noise);
    }

    #[test]
    fn scene_without_materials_has_no_defs() {
        let svg = SvgRenderer::new()
            .render(&label_scene("8\u{2032}", "Inter"))
            .unwrap();
        assert!(!svg.contains("<defs>"));
        assert!(svg.contains(r#"viewBox="0 0 10 10""#));
    }

    #[test]
    fn dimension_label_is_text_content() {
        let svg = render(&Configuration::builder().length_feet(8).build());
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains(">8\u{2032}</text>"));
    }

    #[test]
    fn markup_in_text_and_attributes_is_escaped() {
        let svg = SvgRenderer::new()
            .render(&label_scene("<b>&</b>", "\"Inter\" & co"))
            .unwrap();
        assert!(svg.contains(">&lt;b&gt;&amp;&lt;/b&gt;</text>"));
        assert!(svg.contains(r#"font-family="&quot;Inter&quot; &amp; co""#));
    }
}
