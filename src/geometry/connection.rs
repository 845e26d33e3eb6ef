//! Placement of a connection cylinder between two 3-D points.
//!
//! The cylinder primitive is modelled "pointing up" (+Y) and centred on its
//! origin, so a segment is described by its midpoint, its length and the
//! rotation that carries +Y onto the segment direction.

use glam::{Quat, Vec3};

use super::all_finite;

/// Segments shorter than this are not drawn.
pub const MIN_SEGMENT_LENGTH: f32 = 0.001;

/// Above this |dir·up| the direction counts as (anti-)parallel to up.
pub const PARALLEL_EPSILON: f32 = 0.99999;

/// Placement of a single connection segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionTransform {
    /// Midpoint of the segment
    pub position: Vec3,
    /// Rotation mapping +Y onto the segment direction
    pub rotation: Quat,
    /// Distance between the endpoints
    pub length: f32,
}

impl ConnectionTransform {
    /// Endpoints reconstructed from the placement (start, end).
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let half = self.rotation * Vec3::new(0.0, self.length * 0.5, 0.0);
        (self.position - half, self.position + half)
    }
}

/// Compute the placement of a segment from `start` to `end`.
///
/// Returns `None` for degenerate input: non-finite coordinates or endpoints
/// closer than [`MIN_SEGMENT_LENGTH`]. Callers skip the segment in that case.
pub fn connection_transform(start: [f32; 3], end: [f32; 3]) -> Option<ConnectionTransform> {
    if !all_finite(&start) || !all_finite(&end) {
        return None;
    }

    let a = Vec3::from_array(start);
    let b = Vec3::from_array(end);
    let length = a.distance(b);
    if length < MIN_SEGMENT_LENGTH {
        return None;
    }

    let position = a.lerp(b, 0.5);
    let dir = (b - a) / length;

    Some(ConnectionTransform {
        position,
        rotation: align_up_to(dir),
        length,
    })
}

/// Shortest rotation taking +Y onto the unit vector `dir`.
///
/// Near-parallel and near-anti-parallel directions are special-cased: the
/// cross product with up vanishes there and gives no usable axis.
pub fn align_up_to(dir: Vec3) -> Quat {
    if dir.dot(Vec3::Y).abs() > PARALLEL_EPSILON {
        if dir.y > 0.0 {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(Vec3::X, std::f32::consts::PI)
        }
    } else {
        Quat::from_rotation_arc(Vec3::Y, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn identical_points_draw_nothing() {
        assert!(connection_transform([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]).is_none());
        assert!(connection_transform([0.0; 3], [0.0005, 0.0, 0.0]).is_none());
    }

    #[test]
    fn non_finite_input_draws_nothing() {
        assert!(connection_transform([f32::NAN, 0.0, 0.0], [1.0, 0.0, 0.0]).is_none());
        assert!(connection_transform([0.0; 3], [0.0, f32::INFINITY, 0.0]).is_none());
    }

    #[test]
    fn upward_segment_is_identity() {
        let c = connection_transform([0.0, 0.0, 0.0], [0.0, 2.0, 0.0]).unwrap();
        assert_eq!(c.rotation, Quat::IDENTITY);
        assert!((c.length - 2.0).abs() < 1e-6);
        assert!(approx(c.position, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn downward_segment_flips_about_x() {
        let c = connection_transform([0.0, 2.0, 0.0], [0.0, 0.0, 0.0]).unwrap();
        let expected = Quat::from_axis_angle(Vec3::X, std::f32::consts::PI);
        assert!(c.rotation.abs_diff_eq(expected, 1e-6));
        assert!(approx(c.rotation * Vec3::Y, Vec3::NEG_Y));
    }

    #[test]
    fn general_direction_maps_up_onto_segment() {
        let start = [-1.5, 1.5, 0.0];
        let end = [-1.9, -0.5, 0.0];
        let c = connection_transform(start, end).unwrap();
        let dir = (Vec3::from_array(end) - Vec3::from_array(start)).normalize();
        assert!(approx(c.rotation * Vec3::Y, dir));
        assert!(c.rotation.is_normalized());
    }

    #[test]
    fn endpoints_round_trip() {
        let c = connection_transform([-0.5, 1.5, 0.0], [0.5, 1.5, 0.0]).unwrap();
        let (a, b) = c.endpoints();
        assert!(approx(a, Vec3::new(-0.5, 1.5, 0.0)));
        assert!(approx(b, Vec3::new(0.5, 1.5, 0.0)));
    }
}
