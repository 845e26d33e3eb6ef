/// Hero scene graph and its idle animation.
///
/// The scene is one root group holding factor spheres, their labels, item
/// boxes and connection cylinders. Every frame `tick` recomputes transforms
/// from the elapsed time and writes them into the nodes:
///   - Breathing: each factor sphere scales by 1 + sin(2t + x)·0.05, where x is
///     its horizontal position, so neighbours pulse out of phase
///   - Spin: the root group turns about Y at 0.1 rad/s
///   - Float: a slow bob and tilt layered over the spin
///
/// `world_primitives` flattens the graph into world-space shapes for the
/// painter and the SVG writer.
use glam::{EulerRot, Quat, Vec3};

use crate::geometry::connection::connection_transform;
use crate::geometry::scene::{LinkKind, SceneLayout};
use crate::geometry::{NodeKind, Transform};
use crate::render::theme::{self, Rgba};

pub const FACTOR_RADIUS: f32 = 0.4;
pub const ITEM_SIZE: f32 = 0.3;
pub const LINK_RADIUS: f32 = 0.015;
pub const LINK_OPACITY: f32 = 0.4;
pub const LABEL_OFFSET: f32 = 0.6;
pub const LABEL_SIZE: f32 = 0.2;

pub const BREATH_RATE: f32 = 2.0;
pub const BREATH_DEPTH: f32 = 0.05;
pub const SPIN_RATE: f32 = 0.1;

/// Shape carried by a scene node, in the node's local frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere { radius: f32, color: Rgba, emissive: f32 },
    /// Axis-aligned cube of edge `size` centred on the origin
    Cube { size: f32, color: Rgba },
    /// Cylinder along +Y centred on the origin
    Cylinder { radius: f32, length: f32, color: Rgba, opacity: f32 },
    Label { text: String, size: f32, color: Rgba },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeAnim {
    Static,
    /// Breathing scale, phase-shifted by the node's horizontal position
    Breathing { phase: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub shape: Shape,
    pub local: Transform,
    pub anim: NodeAnim,
}

/// Gentle floating motion wrapped around the whole model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.2,
            float_intensity: 0.5,
        }
    }
}

impl FloatMotion {
    /// Tilt and vertical offset at time `t`.
    pub fn sample(&self, t: f32) -> (Quat, f32) {
        let phase = t / 4.0 * self.speed;
        let ri = self.rotation_intensity;
        let tilt = Quat::from_euler(
            EulerRot::XYZ,
            phase.cos() / 8.0 * ri,
            phase.sin() / 8.0 * ri,
            phase.sin() / 20.0 * ri,
        );
        let lift = phase.sin() / 10.0 * self.float_intensity;
        (tilt, lift)
    }
}

/// World-space primitive after applying the full transform chain.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldPrimitive {
    Sphere { center: Vec3, radius: f32, color: Rgba, emissive: f32 },
    /// Centre plus the three half-edge vectors
    Cube { center: Vec3, half_axes: [Vec3; 3], color: Rgba },
    Cylinder { start: Vec3, end: Vec3, radius: f32, color: Rgba, opacity: f32 },
    Label { position: Vec3, text: String, size: f32, color: Rgba },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    pub root: Transform,
    pub nodes: Vec<SceneNode>,
    pub float: FloatMotion,
    /// Links dropped while building because their endpoints were degenerate
    pub skipped_links: usize,
}

impl SceneGraph {
    pub fn from_layout(layout: &SceneLayout) -> Self {
        let mut nodes = Vec::with_capacity(layout.factors.len() * 2 + layout.items.len() + layout.links.len());

        for f in &layout.factors {
            let pos = Vec3::from_array(f.position);
            nodes.push(SceneNode {
                id: f.id.clone(),
                shape: Shape::Sphere {
                    radius: FACTOR_RADIUS,
                    color: node_color(f.kind),
                    emissive: 0.2,
                },
                local: Transform::from_translation(pos),
                anim: NodeAnim::Breathing { phase: f.position[0] },
            });
            if let Some(ref label) = f.label {
                nodes.push(SceneNode {
                    id: format!("{}_label", f.id),
                    shape: Shape::Label {
                        text: label.clone(),
                        size: LABEL_SIZE,
                        color: theme::BLUE,
                    },
                    local: Transform::from_translation(pos + Vec3::new(0.0, LABEL_OFFSET, 0.0)),
                    anim: NodeAnim::Static,
                });
            }
        }

        for it in &layout.items {
            nodes.push(SceneNode {
                id: it.id.clone(),
                shape: Shape::Cube { size: ITEM_SIZE, color: node_color(it.kind) },
                local: Transform::from_translation(Vec3::from_array(it.position)),
                anim: NodeAnim::Static,
            });
        }

        let mut skipped_links = 0;
        for (idx, link) in layout.links.iter().enumerate() {
            let Some(c) = connection_transform(link.start, link.end) else {
                log::warn!("skipping degenerate link {} ({:?} -> {:?})", idx, link.start, link.end);
                skipped_links += 1;
                continue;
            };
            let color = match link.kind {
                LinkKind::Correlation => theme::GREEN,
                LinkKind::Loading => theme::BLUE,
            };
            nodes.push(SceneNode {
                id: format!("link_{}", idx),
                shape: Shape::Cylinder {
                    radius: LINK_RADIUS,
                    length: c.length,
                    color,
                    opacity: LINK_OPACITY,
                },
                local: Transform {
                    translation: c.position,
                    rotation: c.rotation,
                    scale: Vec3::ONE,
                },
                anim: NodeAnim::Static,
            });
        }

        Self {
            root: Transform::IDENTITY,
            nodes,
            float: FloatMotion::default(),
            skipped_links,
        }
    }

    /// Apply the animation state for elapsed time `t` (seconds).
    pub fn tick(&mut self, t: f32) {
        let (tilt, lift) = self.float.sample(t);
        self.root.rotation = tilt * Quat::from_rotation_y(spin_angle(t));
        self.root.translation = Vec3::new(0.0, lift, 0.0);

        for node in &mut self.nodes {
            if let NodeAnim::Breathing { phase } = node.anim {
                node.local.scale = Vec3::splat(breathing_scale(t, phase));
            }
        }
    }

    pub fn world_primitives(&self) -> Vec<WorldPrimitive> {
        let root = self.root.to_matrix();
        self.nodes
            .iter()
            .map(|node| {
                let m = root * node.local.to_matrix();
                match node.shape {
                    Shape::Sphere { radius, color, emissive } => WorldPrimitive::Sphere {
                        center: m.transform_point3(Vec3::ZERO),
                        radius: radius * m.transform_vector3(Vec3::X).length(),
                        color,
                        emissive,
                    },
                    Shape::Cube { size, color } => {
                        let h = size * 0.5;
                        WorldPrimitive::Cube {
                            center: m.transform_point3(Vec3::ZERO),
                            half_axes: [
                                m.transform_vector3(Vec3::X * h),
                                m.transform_vector3(Vec3::Y * h),
                                m.transform_vector3(Vec3::Z * h),
                            ],
                            color,
                        }
                    }
                    Shape::Cylinder { radius, length, color, opacity } => {
                        let half = Vec3::new(0.0, length * 0.5, 0.0);
                        WorldPrimitive::Cylinder {
                            start: m.transform_point3(-half),
                            end: m.transform_point3(half),
                            radius,
                            color,
                            opacity,
                        }
                    }
                    Shape::Label { ref text, size, color } => WorldPrimitive::Label {
                        position: m.transform_point3(Vec3::ZERO),
                        text: text.clone(),
                        size,
                        color,
                    },
                }
            })
            .collect()
    }
}

pub fn breathing_scale(t: f32, phase: f32) -> f32 {
    1.0 + (t * BREATH_RATE + phase).sin() * BREATH_DEPTH
}

pub fn spin_angle(t: f32) -> f32 {
    t * SPIN_RATE
}

fn node_color(kind: NodeKind) -> Rgba {
    match kind {
        NodeKind::Latent => theme::ORANGE,
        NodeKind::Item | NodeKind::General => theme::BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::scene::{SceneLink, SceneNodeSpec};

    fn standard() -> SceneGraph {
        SceneGraph::from_layout(&SceneLayout::standard())
    }

    #[test]
    fn node_counts() {
        let g = standard();
        let spheres = g.nodes.iter().filter(|n| matches!(n.shape, Shape::Sphere { .. })).count();
        let cubes = g.nodes.iter().filter(|n| matches!(n.shape, Shape::Cube { .. })).count();
        let links = g.nodes.iter().filter(|n| matches!(n.shape, Shape::Cylinder { .. })).count();
        let labels = g.nodes.iter().filter(|n| matches!(n.shape, Shape::Label { .. })).count();
        assert_eq!((spheres, labels, cubes, links), (4, 4, 12, 16));
        assert_eq!(g.skipped_links, 0);
    }

    #[test]
    fn breathing_is_out_of_phase() {
        let mut g = standard();
        g.tick(1.25);
        let scales: Vec<f32> = g
            .nodes
            .iter()
            .filter(|n| matches!(n.shape, Shape::Sphere { .. }))
            .map(|n| n.local.scale.x)
            .collect();
        assert_eq!(scales.len(), 4);
        assert!((scales[0] - breathing_scale(1.25, -1.5)).abs() < 1e-6);
        assert!((scales[0] - scales[1]).abs() > 1e-3);
        assert!(scales.iter().all(|s| (0.95..=1.05).contains(s)));
    }

    #[test]
    fn only_spheres_breathe() {
        let mut g = standard();
        g.tick(3.0);
        for n in g.nodes.iter().filter(|n| !matches!(n.shape, Shape::Sphere { .. })) {
            assert_eq!(n.local.scale, Vec3::ONE, "{} should not scale", n.id);
        }
    }

    #[test]
    fn root_spins_about_y() {
        let mut g = standard();
        let t = 7.5;
        g.tick(t);
        let (tilt, lift) = g.float.sample(t);
        let expected = tilt * Quat::from_rotation_y(0.75);
        assert!(g.root.rotation.abs_diff_eq(expected, 1e-6));
        assert!((g.root.translation.y - lift).abs() < 1e-6);
    }

    #[test]
    fn tick_is_deterministic() {
        let mut a = standard();
        let mut b = standard();
        a.tick(2.0);
        b.tick(2.0);
        assert_eq!(a.world_primitives(), b.world_primitives());
    }

    #[test]
    fn degenerate_links_are_skipped() {
        let layout = SceneLayout {
            factors: vec![SceneNodeSpec {
                id: "F1".into(),
                kind: NodeKind::Latent,
                position: [0.0, 1.5, 0.0],
                label: None,
            }],
            items: Vec::new(),
            links: vec![
                SceneLink { start: [0.0, 1.5, 0.0], end: [0.0, 1.5, 0.0], kind: LinkKind::Loading },
                SceneLink { start: [f32::NAN, 0.0, 0.0], end: [1.0, 0.0, 0.0], kind: LinkKind::Loading },
                SceneLink { start: [0.0, 1.5, 0.0], end: [0.0, -0.5, 0.0], kind: LinkKind::Loading },
            ],
        };
        let g = SceneGraph::from_layout(&layout);
        assert_eq!(g.skipped_links, 2);
        let cylinders = g.nodes.iter().filter(|n| matches!(n.shape, Shape::Cylinder { .. })).count();
        assert_eq!(cylinders, 1);
    }

    #[test]
    fn cylinders_keep_their_endpoints_at_rest() {
        let g = standard();
        let first = g
            .world_primitives()
            .into_iter()
            .find_map(|p| match p {
                WorldPrimitive::Cylinder { start, end, .. } => Some((start, end)),
                _ => None,
            })
            .unwrap();
        assert!((first.0 - Vec3::new(-1.5, 1.5, 0.0)).length() < 1e-4);
        assert!((first.1 - Vec3::new(-1.9, -0.5, 0.0)).length() < 1e-4);
    }
}
