//! egui rendering of the animated hero scene.

use egui::{Align2, Color32, FontId, Mesh, Pos2, Rect, Shape, Stroke, Vec2};

use crate::geometry::scene::SceneLayout;
use crate::render::projection::{flatten_frame, Camera, Flat, FlatShape, Lighting};
use crate::render::scene_graph::SceneGraph;
use crate::render::theme;

/// Owns the hero scene graph; builds it on first paint.
#[derive(Debug, Default)]
pub struct ScenePainter {
    graph: Option<SceneGraph>,
    camera: Camera,
    lighting: Lighting,
    /// Paused scenes keep their last pose
    pub paused: bool,
    last_t: f32,
}

impl ScenePainter {
    pub fn new() -> Self {
        Self::default()
    }

    fn graph(&mut self) -> &mut SceneGraph {
        self.graph.get_or_insert_with(|| {
            let g = SceneGraph::from_layout(&SceneLayout::standard());
            log::debug!("hero scene built: {} nodes", g.nodes.len());
            g
        })
    }

    /// Advance to `t` and flatten the frame for a `size` viewport.
    pub fn frame(&mut self, t: f32, size: Vec2) -> Vec<FlatShape> {
        if !self.paused {
            self.last_t = t;
        }
        let t = self.last_t;
        let (camera, lighting) = (self.camera, self.lighting);
        let graph = self.graph();
        graph.tick(t);
        flatten_frame(&graph.world_primitives(), &camera, &lighting, size.x, size.y)
    }

    /// Paint the scene filling `height` pixels of the available width.
    pub fn paint(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, height: f32) {
        let (rect, _response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), height),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        painter.add(Shape::mesh(backdrop(rect)));

        let t = ctx.input(|i| i.time) as f32;
        let shapes = self.frame(t, rect.size());
        let at = |p: [f32; 2]| Pos2::new(rect.min.x + p[0], rect.min.y + p[1]);

        for s in &shapes {
            match &s.shape {
                Flat::Disc { center, radius, fill, highlight } => {
                    painter.circle_filled(at(*center), *radius, theme::to_color32(*fill));
                    if let Some((spot, r)) = highlight {
                        painter.circle_filled(at(*spot), *r, Color32::from_white_alpha(90));
                    }
                }
                Flat::Polygon { points, fill } => {
                    painter.add(Shape::convex_polygon(
                        points.iter().map(|p| at(*p)).collect(),
                        theme::to_color32(*fill),
                        Stroke::NONE,
                    ));
                }
                Flat::Segment { from, to, width, color } => {
                    painter.line_segment(
                        [at(*from), at(*to)],
                        Stroke::new(*width, theme::to_color32(*color)),
                    );
                }
                Flat::Text { pos, text, size, color } => {
                    painter.text(
                        at(*pos),
                        Align2::CENTER_CENTER,
                        text,
                        FontId::proportional(size.max(8.0)),
                        theme::to_color32(*color),
                    );
                }
            }
        }

        if !self.paused {
            ctx.request_repaint();
        }
    }
}

/// Vertical gradient from cream to a pale teal.
fn backdrop(rect: Rect) -> Mesh {
    let top = theme::to_color32(theme::CREAM);
    let bottom = theme::to_color32(theme::mix(theme::CREAM, theme::GREEN, 0.35));
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_is_built_lazily() {
        let mut p = ScenePainter::new();
        assert!(p.graph.is_none());
        let shapes = p.frame(0.0, Vec2::new(800.0, 450.0));
        assert!(p.graph.is_some());
        assert!(!shapes.is_empty());
    }

    #[test]
    fn pause_freezes_the_pose() {
        let mut p = ScenePainter::new();
        let a = p.frame(1.0, Vec2::new(800.0, 450.0));
        p.paused = true;
        let b = p.frame(5.0, Vec2::new(800.0, 450.0));
        assert_eq!(a, b);
    }

    #[test]
    fn backdrop_is_two_triangles() {
        let mesh = backdrop(Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 50.0)));
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
