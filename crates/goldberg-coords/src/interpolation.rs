//! Barycentric interpolation across an icosahedron face, and its inverse.

use glam::DVec3;

/// How integer barycentric weights are turned into a point on a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Weighted sum of the face corners. Points lie on the flat face.
    Planar,
    /// Nested slerps along the face edges. Points lie on the unit sphere and
    /// tile spacing is close to uniform.
    #[default]
    Spherical,
}

/// Spherical linear interpolation between two unit vectors.
#[must_use]
pub fn slerp(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    let angle = a.dot(b).clamp(-1.0, 1.0).acos();
    if angle < 1e-12 {
        return a;
    }
    (((1.0 - t) * angle).sin() * a + (t * angle).sin() * b) / angle.sin()
}

impl Interpolation {
    /// Point for weights `weights / g` over the three face corners.
    ///
    /// [`Planar`](Self::Planar) results are not normalized.
    #[must_use]
    pub fn interpolate(self, corners: [DVec3; 3], weights: [u32; 3], g: u32) -> DVec3 {
        let g = f64::from(g);
        match self {
            Interpolation::Planar => {
                corners[0] * (f64::from(weights[0]) / g)
                    + corners[1] * (f64::from(weights[1]) / g)
                    + corners[2] * (f64::from(weights[2]) / g)
            }
            Interpolation::Spherical => {
                let towards_edge = weights[0] + weights[1];
                if towards_edge == 0 {
                    return corners[2];
                }
                let t = f64::from(towards_edge) / g;
                let e0 = slerp(corners[2], corners[0], t);
                let e1 = slerp(corners[2], corners[1], t);
                slerp(e0, e1, f64::from(weights[1]) / f64::from(towards_edge))
            }
        }
    }

    /// Approximate inverse of [`interpolate`](Self::interpolate): fractional
    /// weights summing to 1 for a direction inside the face.
    ///
    /// Each weight is the distance to the opposite edge plane relative to the
    /// corner's distance; the spherical variant measures it as an angle.
    #[must_use]
    pub fn barycentric(self, corners: [DVec3; 3], dir: DVec3) -> [f64; 3] {
        let dir = dir.normalize();
        let mut weights = [0.0; 3];
        for (i, w) in weights.iter_mut().enumerate() {
            let plane = corners[(i + 1) % 3].cross(corners[(i + 2) % 3]).normalize();
            let (d, c) = (dir.dot(plane), corners[i].dot(plane));
            *w = match self {
                Interpolation::Planar => d / c,
                Interpolation::Spherical => d.clamp(-1.0, 1.0).asin() / c.asin(),
            };
        }
        let sum: f64 = weights.iter().sum();
        weights.map(|w| w / sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosahedron::{face_poles, icosahedron_vertices};

    fn corners(triangle: u8) -> [DVec3; 3] {
        face_poles(triangle).map(|p| icosahedron_vertices()[p])
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let a = DVec3::X;
        let b = DVec3::Y;
        assert!(slerp(a, b, 0.0).distance(a) < 1e-12);
        assert!(slerp(a, b, 1.0).distance(b) < 1e-12);
        let mid = slerp(a, b, 0.5);
        assert!((mid.length() - 1.0).abs() < 1e-12);
        assert!((mid.angle_between(a) - mid.angle_between(b)).abs() < 1e-12);
    }

    #[test]
    fn test_slerp_identical_vectors() {
        let a = DVec3::new(0.0, 0.6, 0.8);
        assert_eq!(slerp(a, a, 0.3), a);
    }

    #[test]
    fn test_corner_weights_hit_corners() {
        let c = corners(7);
        for mode in [Interpolation::Planar, Interpolation::Spherical] {
            for (i, w) in [[4, 0, 0], [0, 4, 0], [0, 0, 4]].into_iter().enumerate() {
                let p = mode.interpolate(c, w, 4);
                assert!(p.distance(c[i]) < 1e-12, "{mode:?} corner {i} is off: {p}");
            }
        }
    }

    #[test]
    fn test_spherical_points_on_unit_sphere() {
        let c = corners(12);
        for b0 in 0..=5 {
            for b1 in 0..=5 - b0 {
                let p = Interpolation::Spherical.interpolate(c, [b0, b1, 5 - b0 - b1], 5);
                assert!((p.length() - 1.0).abs() < 1e-12, "length {}", p.length());
            }
        }
    }

    #[test]
    fn test_barycentric_inverts_planar() {
        let c = corners(3);
        let p = Interpolation::Planar.interpolate(c, [1, 2, 3], 6);
        let w = Interpolation::Planar.barycentric(c, p);
        let expected = [1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0];
        for i in 0..3 {
            assert!((w[i] - expected[i]).abs() < 1e-9, "weight {i}: {} vs {}", w[i], expected[i]);
        }
    }

    #[test]
    fn test_barycentric_spherical_is_close() {
        let c = corners(16);
        let p = Interpolation::Spherical.interpolate(c, [2, 3, 5], 10);
        let w = Interpolation::Spherical.barycentric(c, p);
        let expected = [0.2, 0.3, 0.5];
        for i in 0..3 {
            assert!((w[i] - expected[i]).abs() < 0.05, "weight {i}: {} vs {}", w[i], expected[i]);
        }
    }
}
