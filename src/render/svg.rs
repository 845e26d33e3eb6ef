//! Standalone SVG output for the model diagram and the hero scene.

use std::fmt::Write as _;

use crate::geometry::diagram::{
    DiagramLayout, DiagramNode, EdgePath, EdgeStyle, FACTOR_RADIUS, ITEM_HALF, SURFACE_HEIGHT,
    SURFACE_WIDTH,
};
use crate::model::ModelVariant;
use crate::render::projection::{flatten_frame, Camera, Flat, Lighting};
use crate::render::scene_graph::SceneGraph;
use crate::render::theme;

const DIAGRAM_STYLES: &str = r#"
.cfa-diagram text {
  font-family: "Inter", "Helvetica Neue", Arial, sans-serif;
  text-anchor: middle;
  dominant-baseline: central;
}
.cfa-item rect { fill: #FFFFFF; stroke: #0D232C; stroke-width: 1.5px; }
.cfa-item text { font-size: 9px; fill: #0D232C; }
.cfa-latent circle { fill: rgba(241, 140, 34, 0.2); stroke: #F18C22; stroke-width: 2px; }
.cfa-latent text { font-size: 10px; font-weight: 600; fill: #0D232C; }
.cfa-general circle { fill: #0D232C; stroke: #0D232C; stroke-width: 2px; }
.cfa-general text { font-size: 11px; font-weight: 700; fill: #FFFFFF; }
path.cfa-loading { fill: none; stroke: #0D232C; stroke-width: 1.5px; stroke-opacity: 0.6; }
path.cfa-correlation { fill: none; stroke: #87CBCC; stroke-width: 2px; stroke-dasharray: 4,4; }
path.cfa-higher-order { fill: none; stroke: #0D232C; stroke-width: 2px; }
path.cfa-general-loading { fill: none; stroke: #0D232C; stroke-width: 1px; stroke-opacity: 0.3; }
.cfa-overlay { animation: cfa-fade 0.5s ease-out both; }
.cfa-second-order { animation-name: cfa-drop; }
@keyframes cfa-fade { from { opacity: 0; } to { opacity: 1; } }
@keyframes cfa-drop {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;

/// Escape text content for XML
pub fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape attribute values for XML (inside double-quoted attributes)
pub fn escape_xml_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shortest decimal form with at most two fractional digits: `80`, `1.5`.
pub fn fmt_num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn edge_class(style: EdgeStyle) -> &'static str {
    match style {
        EdgeStyle::Loading => "cfa-loading",
        EdgeStyle::Correlation => "cfa-correlation",
        EdgeStyle::HigherOrder => "cfa-higher-order",
        EdgeStyle::GeneralLoading => "cfa-general-loading",
    }
}

fn path_data(path: &EdgePath) -> String {
    match path {
        EdgePath::Line { from, to } => format!(
            "M {} {} L {} {}",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y)
        ),
        EdgePath::Quadratic { from, control, to } => format!(
            "M {} {} Q {} {} {} {}",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(control.x),
            fmt_num(control.y),
            fmt_num(to.x),
            fmt_num(to.y)
        ),
    }
}

fn render_edge(out: &mut String, path: &EdgePath, style: EdgeStyle) {
    if !path.is_finite() {
        log::warn!("skipping non-finite {:?} edge", style);
        return;
    }
    let _ = writeln!(out, r#"<path class="{}" d="{}"/>"#, edge_class(style), path_data(path));
}

fn render_circle_node(out: &mut String, node: &DiagramNode, class: &str) {
    if !node.center.is_finite() {
        log::warn!("skipping non-finite node {}", node.id);
        return;
    }
    let (x, y) = (fmt_num(node.center.x), fmt_num(node.center.y));
    let _ = writeln!(
        out,
        r#"<g class="{}" data-id="{}"><circle cx="{}" cy="{}" r="{}"/>"#,
        class,
        escape_xml_attr(&node.id),
        x,
        y,
        fmt_num(FACTOR_RADIUS)
    );
    if let Some(ref label) = node.label {
        let _ = writeln!(out, r#"<text x="{}" y="{}">{}</text>"#, x, y, escape_xml_text(label));
    }
    out.push_str("</g>\n");
}

fn render_item(out: &mut String, node: &DiagramNode) {
    if !node.center.is_finite() {
        log::warn!("skipping non-finite item {}", node.id);
        return;
    }
    let side = fmt_num(ITEM_HALF * 2.0);
    let _ = writeln!(
        out,
        r#"<g class="cfa-item" data-id="{id}"><rect x="{}" y="{}" width="{side}" height="{side}" rx="2"/><text x="{}" y="{}">{id}</text></g>"#,
        fmt_num(node.center.x - ITEM_HALF),
        fmt_num(node.center.y - ITEM_HALF),
        fmt_num(node.center.x),
        fmt_num(node.center.y),
        id = escape_xml_text(&node.id),
        side = side,
    );
}

/// Body of the diagram (styles, base layer, one overlay), no outer `<svg>`.
fn render_diagram_body(out: &mut String, layout: &DiagramLayout, variant: ModelVariant) {
    out.push_str("<style>");
    out.push_str(DIAGRAM_STYLES);
    out.push_str("</style>\n");

    // Edges go under nodes so lines end cleanly at shape borders.
    out.push_str("<g class=\"cfa-base\">\n");
    for edge in &layout.loadings {
        render_edge(out, &edge.path, edge.style);
    }
    for item in &layout.items {
        render_item(out, item);
    }
    for factor in &layout.factors {
        render_circle_node(out, factor, "cfa-latent");
    }
    out.push_str("</g>\n");

    let overlay = layout.overlay(variant);
    let _ = writeln!(out, r#"<g class="cfa-overlay cfa-{}">"#, variant.slug());
    for edge in &overlay.edges {
        render_edge(out, &edge.path, edge.style);
    }
    if let Some(ref general) = overlay.general {
        render_circle_node(out, general, "cfa-general");
    }
    out.push_str("</g>\n");
}

/// Standalone SVG document of the diagram with `variant`'s overlay.
pub fn render_diagram_svg(layout: &DiagramLayout, variant: ModelVariant) -> String {
    let mut out = String::with_capacity(4096);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="cfa-diagram" viewBox="0 0 {} {}" width="{}" height="{}" role="img" aria-label="{}">"#,
        fmt_num(SURFACE_WIDTH),
        fmt_num(SURFACE_HEIGHT),
        fmt_num(SURFACE_WIDTH),
        fmt_num(SURFACE_HEIGHT),
        escape_xml_attr(variant.title()),
    );
    render_diagram_body(&mut out, layout, variant);
    out.push_str("</svg>\n");
    out
}

fn rgba_attr(c: theme::Rgba) -> (String, String) {
    (theme::hex(c), fmt_num(c[3]))
}

/// One frame of the hero scene, flattened to 2-D, over the backdrop gradient.
pub fn render_scene_svg(graph: &SceneGraph, width: f32, height: f32) -> String {
    let flat = flatten_frame(
        &graph.world_primitives(),
        &Camera::default(),
        &Lighting::default(),
        width,
        height,
    );

    let mut out = String::with_capacity(8192);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="cfa-hero" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = fmt_num(width),
        h = fmt_num(height),
    );
    let _ = writeln!(
        out,
        r#"<defs><linearGradient id="cfa-backdrop" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
        theme::hex(theme::CREAM),
        theme::hex(theme::mix(theme::CREAM, theme::GREEN, 0.35)),
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="url(#cfa-backdrop)"/>"#);

    for shape in &flat {
        match &shape.shape {
            Flat::Disc { center, radius, fill, highlight } => {
                let (color, alpha) = rgba_attr(*fill);
                let _ = writeln!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
                    fmt_num(center[0]),
                    fmt_num(center[1]),
                    fmt_num(*radius),
                    color,
                    alpha
                );
                if let Some((spot, r)) = highlight {
                    let _ = writeln!(
                        out,
                        r##"<circle cx="{}" cy="{}" r="{}" fill="#FFFFFF" fill-opacity="0.35"/>"##,
                        fmt_num(spot[0]),
                        fmt_num(spot[1]),
                        fmt_num(*r)
                    );
                }
            }
            Flat::Polygon { points, fill } => {
                let (color, alpha) = rgba_attr(*fill);
                let pts: Vec<String> = points
                    .iter()
                    .map(|p| format!("{},{}", fmt_num(p[0]), fmt_num(p[1])))
                    .collect();
                let _ = writeln!(
                    out,
                    r#"<polygon points="{}" fill="{}" fill-opacity="{}"/>"#,
                    pts.join(" "),
                    color,
                    alpha
                );
            }
            Flat::Segment { from, to, width, color } => {
                let (stroke, alpha) = rgba_attr(*color);
                let _ = writeln!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                    fmt_num(from[0]),
                    fmt_num(from[1]),
                    fmt_num(to[0]),
                    fmt_num(to[1]),
                    stroke,
                    alpha,
                    fmt_num(*width)
                );
            }
            Flat::Text { pos, text, size, color } => {
                let _ = writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" font-family="sans-serif" font-weight="600">{}</text>"#,
                    fmt_num(pos[0]),
                    fmt_num(pos[1]),
                    fmt_num(*size),
                    theme::hex(*color),
                    escape_xml_text(text)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::diagram::{DiagramEdge, Point};
    use crate::geometry::scene::SceneLayout;

    fn overlay_groups(svg: &str) -> usize {
        svg.matches("class=\"cfa-overlay ").count()
    }

    #[test]
    fn one_overlay_per_variant() {
        let layout = DiagramLayout::standard();
        for v in ModelVariant::ALL {
            let svg = render_diagram_svg(&layout, v);
            assert_eq!(overlay_groups(&svg), 1, "{v}");
            assert!(svg.contains(&format!("cfa-overlay cfa-{}", v.slug())));
            for other in ModelVariant::ALL.iter().filter(|o| **o != v) {
                assert!(!svg.contains(&format!("cfa-overlay cfa-{}\"", other.slug())));
            }
        }
    }

    #[test]
    fn general_node_only_when_expected() {
        let layout = DiagramLayout::standard();
        let corr = render_diagram_svg(&layout, ModelVariant::CorrelatedFactors);
        assert!(!corr.contains("cfa-general\""));
        assert_eq!(corr.matches("class=\"cfa-correlation\"").count(), 4);

        let second = render_diagram_svg(&layout, ModelVariant::SecondOrder);
        assert_eq!(second.matches("<g class=\"cfa-general\"").count(), 1);
        assert!(second.contains(">QOL</text>"));

        let bi = render_diagram_svg(&layout, ModelVariant::Bifactor);
        assert!(bi.contains(">Gen</text>"));
        assert_eq!(bi.matches("class=\"cfa-general-loading\"").count(), 8);
    }

    #[test]
    fn base_layer_coordinates() {
        let svg = render_diagram_svg(&DiagramLayout::standard(), ModelVariant::CorrelatedFactors);
        assert!(svg.contains(r#"<path class="cfa-loading" d="M 100 172 L 80 235"/>"#));
        assert!(svg.contains(r#"<path class="cfa-correlation" d="M 100 128 Q 250 70 400 128"/>"#));
        assert!(svg.contains(r#"<rect x="65" y="235" width="30" height="30" rx="2"/>"#));
    }

    #[test]
    fn non_finite_geometry_is_dropped() {
        let mut layout = DiagramLayout::standard();
        layout.loadings.push(DiagramEdge {
            path: EdgePath::Line { from: Point::new(f32::NAN, 0.0), to: Point::new(1.0, 1.0) },
            style: EdgeStyle::Loading,
        });
        layout.factors[0].center = Point::new(f32::INFINITY, 150.0);
        let svg = render_diagram_svg(&layout, ModelVariant::CorrelatedFactors);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        assert_eq!(svg.matches("<g class=\"cfa-latent\"").count(), 3);
    }

    #[test]
    fn labels_are_escaped() {
        let layout = DiagramLayout::build(&["A&B", "<C>"], 1);
        let svg = render_diagram_svg(&layout, ModelVariant::CorrelatedFactors);
        assert!(svg.contains(">A&amp;B</text>"));
        assert!(svg.contains(">&lt;C&gt;</text>"));
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(80.0), "80");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(2.346), "2.35");
    }

    #[test]
    fn hero_frame_has_backdrop_and_labels() {
        let mut g = SceneGraph::from_layout(&SceneLayout::standard());
        g.tick(0.0);
        let svg = render_scene_svg(&g, 960.0, 540.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("url(#cfa-backdrop)"));
        for label in ["Physical", "Psych", "Social", "Env"] {
            assert!(svg.contains(&format!(">{}</text>", label)), "{label}");
        }
    }
}
