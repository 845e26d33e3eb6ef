//! Perspective camera, lighting and flattening of a 3-D frame into
//! depth-sorted 2-D shapes.
//!
//! Both the egui painter and the SVG writer consume the `FlatShape` list, so
//! the hero looks the same on screen and in the static export.

use glam::{Mat4, Vec3};

use crate::render::scene_graph::WorldPrimitive;
use crate::render::theme::{self, Rgba};

/// Perspective camera looking at a target.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 6.0),
            target: Vec3::ZERO,
            fov_y_deg: 45.0,
            near: 0.1,
        }
    }
}

/// Screen-space projection of a world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction
    pub depth: f32,
    /// Pixels per world unit at this depth
    pub scale: f32,
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Focal length in pixels for a viewport `height` pixels tall.
    pub fn focal(&self, height: f32) -> f32 {
        (height * 0.5) / (self.fov_y_deg.to_radians() * 0.5).tan()
    }

    /// Project `p` into a `width`×`height` viewport with the origin top-left.
    /// Points behind the near plane project to `None`.
    pub fn project(&self, p: Vec3, width: f32, height: f32) -> Option<Projected> {
        let pc = self.view().transform_point3(p);
        let depth = -pc.z;
        if depth < self.near || !depth.is_finite() {
            return None;
        }
        let scale = self.focal(height) / depth;
        Some(Projected {
            x: width * 0.5 + pc.x * scale,
            y: height * 0.5 - pc.y * scale,
            depth,
            scale,
        })
    }
}

/// Ambient term plus a single white point light.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub ambient: f32,
    pub point_position: Vec3,
    pub point_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.7,
            point_position: Vec3::new(10.0, 10.0, 10.0),
            point_intensity: 1.0,
        }
    }
}

const AMBIENT_WEIGHT: f32 = 0.6;
const DIFFUSE_WEIGHT: f32 = 0.5;

impl Lighting {
    /// Brightness multiplier for a surface at `point` facing `normal`.
    pub fn brightness(&self, point: Vec3, normal: Vec3) -> f32 {
        let to_light = (self.point_position - point).normalize_or_zero();
        let lambert = normal.normalize_or_zero().dot(to_light).max(0.0);
        AMBIENT_WEIGHT * self.ambient + DIFFUSE_WEIGHT * self.point_intensity * lambert
    }
}

/// A 2-D drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Flat {
    Disc {
        center: [f32; 2],
        radius: f32,
        fill: Rgba,
        /// Specular spot: centre and radius
        highlight: Option<([f32; 2], f32)>,
    },
    Polygon { points: Vec<[f32; 2]>, fill: Rgba },
    Segment { from: [f32; 2], to: [f32; 2], width: f32, color: Rgba },
    Text { pos: [f32; 2], text: String, size: f32, color: Rgba },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlatShape {
    pub depth: f32,
    pub shape: Flat,
}

/// Faces of a cube as (normal axis index, sign).
const CUBE_FACES: [(usize, f32); 6] = [(0, 1.0), (0, -1.0), (1, 1.0), (1, -1.0), (2, 1.0), (2, -1.0)];

/// Project, shade and depth-sort a frame. Far shapes come first.
pub fn flatten_frame(
    prims: &[WorldPrimitive],
    camera: &Camera,
    lighting: &Lighting,
    width: f32,
    height: f32,
) -> Vec<FlatShape> {
    let mut out = Vec::with_capacity(prims.len() * 2);

    for prim in prims {
        match prim {
            WorldPrimitive::Sphere { center, radius, color, emissive } => {
                let Some(p) = camera.project(*center, width, height) else { continue };
                let facing = camera.position - *center;
                let k = lighting.brightness(*center, facing) + emissive;
                let light_dir = (lighting.point_position - *center).normalize_or_zero();
                let r = radius * p.scale;
                let spot = [p.x + light_dir.x * r * 0.35, p.y - light_dir.y * r * 0.35];
                out.push(FlatShape {
                    depth: p.depth,
                    shape: Flat::Disc {
                        center: [p.x, p.y],
                        radius: r,
                        fill: theme::shade(*color, k),
                        highlight: Some((spot, r * 0.3)),
                    },
                });
            }
            WorldPrimitive::Cube { center, half_axes, color } => {
                for (axis, sign) in CUBE_FACES {
                    let normal = half_axes[axis] * sign;
                    let face_center = *center + normal;
                    if normal.dot(camera.position - face_center) <= 0.0 {
                        continue;
                    }
                    let (u, v) = (half_axes[(axis + 1) % 3], half_axes[(axis + 2) % 3]);
                    let corners = [
                        face_center + u + v,
                        face_center - u + v,
                        face_center - u - v,
                        face_center + u - v,
                    ];
                    let projected: Option<Vec<Projected>> =
                        corners.iter().map(|c| camera.project(*c, width, height)).collect();
                    let Some(projected) = projected else { continue };
                    let depth = projected.iter().map(|p| p.depth).sum::<f32>() / 4.0;
                    out.push(FlatShape {
                        depth,
                        shape: Flat::Polygon {
                            points: projected.iter().map(|p| [p.x, p.y]).collect(),
                            fill: theme::shade(*color, lighting.brightness(face_center, normal) + 0.35),
                        },
                    });
                }
            }
            WorldPrimitive::Cylinder { start, end, radius, color, opacity } => {
                let (Some(a), Some(b)) = (
                    camera.project(*start, width, height),
                    camera.project(*end, width, height),
                ) else {
                    continue;
                };
                let scale = (a.scale + b.scale) * 0.5;
                out.push(FlatShape {
                    depth: (a.depth + b.depth) * 0.5,
                    shape: Flat::Segment {
                        from: [a.x, a.y],
                        to: [b.x, b.y],
                        width: (2.0 * radius * scale).max(1.0),
                        color: theme::with_opacity(*color, *opacity),
                    },
                });
            }
            WorldPrimitive::Label { position, text, size, color } => {
                let Some(p) = camera.project(*position, width, height) else { continue };
                out.push(FlatShape {
                    // Labels stay readable on top of their own sphere.
                    depth: p.depth - 0.5,
                    shape: Flat::Text {
                        pos: [p.x, p.y],
                        text: text.clone(),
                        size: size * p.scale,
                        color: *color,
                    },
                });
            }
        }
    }

    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::scene::SceneLayout;
    use crate::render::scene_graph::SceneGraph;

    #[test]
    fn origin_projects_to_center() {
        let cam = Camera::default();
        let p = cam.project(Vec3::ZERO, 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.depth - 6.0).abs() < 1e-5);
    }

    #[test]
    fn up_is_up_on_screen() {
        let cam = Camera::default();
        let p = cam.project(Vec3::new(1.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(p.x > 400.0);
        assert!(p.y < 300.0);
    }

    #[test]
    fn behind_camera_is_culled() {
        let cam = Camera::default();
        assert!(cam.project(Vec3::new(0.0, 0.0, 7.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn facing_light_is_brighter() {
        let l = Lighting::default();
        let lit = l.brightness(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let dark = l.brightness(Vec3::ZERO, Vec3::new(-1.0, -1.0, -1.0));
        assert!(lit > dark);
        assert!((dark - 0.42).abs() < 1e-5);
    }

    #[test]
    fn frame_is_sorted_far_to_near() {
        let mut g = SceneGraph::from_layout(&SceneLayout::standard());
        g.tick(4.0);
        let flat = flatten_frame(&g.world_primitives(), &Camera::default(), &Lighting::default(), 1280.0, 720.0);
        assert!(!flat.is_empty());
        assert!(flat.windows(2).all(|w| w[0].depth >= w[1].depth));
        let discs = flat.iter().filter(|s| matches!(s.shape, Flat::Disc { .. })).count();
        let texts = flat.iter().filter(|s| matches!(s.shape, Flat::Text { .. })).count();
        assert_eq!(discs, 4);
        assert_eq!(texts, 4);
    }

    #[test]
    fn cube_shows_at_most_three_faces() {
        let prims = [WorldPrimitive::Cube {
            center: Vec3::new(0.5, 0.5, 0.0),
            half_axes: [Vec3::X * 0.15, Vec3::Y * 0.15, Vec3::Z * 0.15],
            color: theme::BLUE,
        }];
        let flat = flatten_frame(&prims, &Camera::default(), &Lighting::default(), 800.0, 600.0);
        assert!((1..=3).contains(&flat.len()));
    }
}
