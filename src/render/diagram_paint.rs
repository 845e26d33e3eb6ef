//! egui Painter rendering of the model comparison diagram.
//!
//! The base layer (items, factors, loadings) is always drawn. Only the active
//! variant's overlay is painted on top; switching drops the old overlay at
//! once and fades the new one in.

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use crate::geometry::diagram::{
    DiagramLayout, DiagramNode, EdgePath, EdgeStyle, Point, VariantOverlay, FACTOR_RADIUS,
    ITEM_HALF, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use crate::model::ModelVariant;
use crate::render::theme;

const ENTRANCE_SECS: f32 = 0.5;
const SECOND_ORDER_SLIDE: f32 = 20.0;
const CURVE_SEGMENTS: usize = 24;

/// Colours for the diagram painter.
struct DiagramTheme {
    surface: Color32,
    item_fill: Color32,
    ink: Color32,
    latent_fill: Color32,
    latent_stroke: Color32,
    correlation: Color32,
    general_text: Color32,
}

impl DiagramTheme {
    fn brand() -> Self {
        Self {
            surface: theme::to_color32(theme::WHITE),
            item_fill: theme::to_color32(theme::WHITE),
            ink: theme::to_color32(theme::BLUE),
            latent_fill: theme::to_color32(theme::with_opacity(theme::ORANGE, 0.2)),
            latent_stroke: theme::to_color32(theme::ORANGE),
            correlation: theme::to_color32(theme::GREEN),
            general_text: theme::to_color32(theme::WHITE),
        }
    }

    fn edge_stroke(&self, style: EdgeStyle, scale: f32, opacity: f32) -> Stroke {
        let (width, color) = match style {
            EdgeStyle::Loading => (1.5, self.ink.gamma_multiply(0.6)),
            EdgeStyle::Correlation => (2.0, self.correlation),
            EdgeStyle::HigherOrder => (2.0, self.ink),
            EdgeStyle::GeneralLoading => (1.0, self.ink.gamma_multiply(0.3)),
        };
        Stroke::new(width * scale, color.gamma_multiply(opacity))
    }
}

/// Active variant plus the memoized layout.
#[derive(Debug, Default)]
pub struct DiagramState {
    active: ModelVariant,
    layout: Option<DiagramLayout>,
}

impl DiagramState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ModelVariant {
        self.active
    }

    /// Make `variant` the displayed one. Returns `true` if it changed.
    pub fn select(&mut self, variant: ModelVariant) -> bool {
        if self.active == variant {
            return false;
        }
        log::debug!("diagram variant {} -> {}", self.active, variant);
        self.active = variant;
        true
    }

    pub fn layout(&mut self) -> &DiagramLayout {
        self.layout.get_or_insert_with(DiagramLayout::standard)
    }

    /// Overlay for the active variant.
    pub fn overlay(&mut self) -> VariantOverlay {
        let active = self.active;
        self.layout().overlay(active)
    }
}

/// Maps surface coordinates into a screen rect.
#[derive(Clone, Copy)]
struct Surface {
    origin: Pos2,
    scale: f32,
    y_shift: f32,
}

impl Surface {
    fn pos(&self, p: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + p.x * self.scale,
            self.origin.y + (p.y + self.y_shift) * self.scale,
        )
    }

    fn shifted(self, y_shift: f32) -> Self {
        Self { y_shift, ..self }
    }
}

/// Paint the diagram at the available width, keeping the 500×350 aspect.
pub fn paint_diagram(ui: &mut egui::Ui, ctx: &egui::Context, state: &mut DiagramState) {
    let width = ui.available_width().min(SURFACE_WIDTH * 1.4);
    let scale = width / SURFACE_WIDTH;
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, SURFACE_HEIGHT * scale), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let theme = DiagramTheme::brand();

    painter.rect_filled(rect, Rounding::same(12.0), theme.surface);

    let active = state.active();
    let mut entrance = 1.0;
    for v in ModelVariant::ALL {
        let t = ctx.animate_bool_with_time(
            egui::Id::new(("cfa_overlay", v.slug())),
            v == active,
            ENTRANCE_SECS,
        );
        if v == active {
            entrance = t;
        }
    }

    let surface = Surface { origin: rect.min, scale, y_shift: 0.0 };
    let overlay = state.overlay();
    let layout = state.layout();

    for edge in &layout.loadings {
        paint_edge(&painter, surface, &edge.path, theme.edge_stroke(edge.style, scale, 1.0));
    }
    for item in &layout.items {
        paint_item(&painter, surface, item, &theme);
    }
    for factor in &layout.factors {
        paint_latent(&painter, surface, factor, &theme, 1.0);
    }

    let overlay_surface = match active {
        ModelVariant::SecondOrder => surface.shifted(-(1.0 - entrance) * SECOND_ORDER_SLIDE),
        _ => surface,
    };
    for edge in &overlay.edges {
        paint_edge(
            &painter,
            overlay_surface,
            &edge.path,
            theme.edge_stroke(edge.style, scale, entrance),
        );
    }
    if let Some(ref general) = overlay.general {
        paint_general(&painter, overlay_surface, general, &theme, entrance);
    }

    if entrance < 1.0 {
        ctx.request_repaint();
    }
}

/// Row of variant buttons. Returns the clicked variant, if any.
pub fn variant_selector(ui: &mut egui::Ui, active: ModelVariant) -> Option<ModelVariant> {
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for v in ModelVariant::ALL {
            let label = egui::RichText::new(format!("{} {}", v.glyph(), v.title())).size(15.0);
            if ui.selectable_label(v == active, label).clicked() {
                picked = Some(v);
            }
        }
    });
    picked
}

fn paint_edge(painter: &egui::Painter, surface: Surface, path: &EdgePath, stroke: Stroke) {
    if !path.is_finite() {
        log::warn!("skipping non-finite edge");
        return;
    }
    let s = surface.scale;
    match *path {
        EdgePath::Line { from, to } => {
            painter.line_segment([surface.pos(from), surface.pos(to)], stroke);
        }
        EdgePath::Quadratic { .. } => {
            let points: Vec<Pos2> =
                path.sample(CURVE_SEGMENTS).into_iter().map(|p| surface.pos(p)).collect();
            // Only correlations are curved, and those are always dashed.
            painter.extend(Shape::dashed_line(&points, stroke, 4.0 * s, 4.0 * s));
        }
    }
}

fn paint_item(painter: &egui::Painter, surface: Surface, node: &DiagramNode, theme: &DiagramTheme) {
    if !node.center.is_finite() {
        log::warn!("skipping non-finite item {}", node.id);
        return;
    }
    let s = surface.scale;
    let c = surface.pos(node.center);
    let rect = Rect::from_center_size(c, Vec2::splat(ITEM_HALF * 2.0 * s));
    painter.rect(rect, Rounding::same(2.0 * s), theme.item_fill, Stroke::new(1.5 * s, theme.ink));
    painter.text(c, Align2::CENTER_CENTER, &node.id, FontId::proportional(9.0 * s), theme.ink);
}

fn paint_latent(
    painter: &egui::Painter,
    surface: Surface,
    node: &DiagramNode,
    theme: &DiagramTheme,
    opacity: f32,
) {
    if !node.center.is_finite() {
        log::warn!("skipping non-finite factor {}", node.id);
        return;
    }
    let s = surface.scale;
    let c = surface.pos(node.center);
    painter.circle(
        c,
        FACTOR_RADIUS * s,
        theme.latent_fill.gamma_multiply(opacity),
        Stroke::new(2.0 * s, theme.latent_stroke.gamma_multiply(opacity)),
    );
    if let Some(ref label) = node.label {
        painter.text(
            c,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(10.0 * s),
            theme.ink.gamma_multiply(opacity),
        );
    }
}

fn paint_general(
    painter: &egui::Painter,
    surface: Surface,
    node: &DiagramNode,
    theme: &DiagramTheme,
    opacity: f32,
) {
    if !node.center.is_finite() {
        log::warn!("skipping non-finite general node {}", node.id);
        return;
    }
    let s = surface.scale;
    let c = surface.pos(node.center);
    let fill = theme.ink.gamma_multiply(opacity);
    painter.circle(c, FACTOR_RADIUS * s, fill, Stroke::new(2.0 * s, fill));
    if let Some(ref label) = node.label {
        painter.text(
            c,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0 * s),
            theme.general_text.gamma_multiply(opacity),
        );
    }
}
