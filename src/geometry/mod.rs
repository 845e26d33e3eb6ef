//! Geometry / layout generation.
//!
//! Pure, deterministic functions that turn the fixed factor labels and an
//! items-per-factor count into node positions and edge endpoints:
//!
//! - `diagram`   : 2-D coordinates for the model comparison diagram
//! - `scene`     : 3-D coordinates for the hero factor model
//! - `connection`: midpoint / length / orientation of a 3-D segment
//!
//! Nothing here performs I/O or can fail. Callers build a layout once and
//! keep it for as long as the owning view lives.

pub mod connection;
pub mod diagram;
pub mod scene;

use glam::{Mat4, Quat, Vec3};

/// Node category shared by the 2-D and 3-D layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Latent (first-order) factor
    Latent,
    /// Observed indicator
    Item,
    /// Second-order or general factor
    General,
}

/// Translation / rotation / scale of a scene-graph node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Offset of slot `index` in a row of `count` slots spaced `spacing` apart,
/// centred on zero.
pub(crate) fn centered_offset(index: usize, count: usize, spacing: f32) -> f32 {
    let mid = (count.saturating_sub(1)) as f32 * 0.5;
    (index as f32 - mid) * spacing
}

pub(crate) fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_offsets_are_symmetric() {
        assert_eq!(centered_offset(0, 2, 40.0), -20.0);
        assert_eq!(centered_offset(1, 2, 40.0), 20.0);
        assert_eq!(centered_offset(1, 3, 0.4), 0.0);
        assert_eq!(centered_offset(0, 1, 10.0), 0.0);
    }

    #[test]
    fn identity_transform_matrix() {
        assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
        let t = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = t.to_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }
}
