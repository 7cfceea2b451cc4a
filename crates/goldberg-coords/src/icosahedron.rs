//! The base icosahedron: twelve unit directions and twenty faces.
//!
//! Vertex 0 is the south pole, 1..=5 the southern ring, 6..=10 the northern
//! ring and 11 the north pole. Faces are numbered `5 * band + stripe` with
//! bands counted from the south cap.

use std::f64::consts::PI;
use std::sync::LazyLock;

use glam::DVec3;

/// Number of icosahedron faces.
pub const FACE_COUNT: u8 = 20;

/// Icosahedron vertex sitting on the south pole.
pub const SOUTH_POLE_VERTEX: usize = 0;

/// Icosahedron vertex sitting on the north pole.
pub const NORTH_POLE_VERTEX: usize = 11;

static VERTICES: LazyLock<[DVec3; 12]> = LazyLock::new(|| {
    let ring_y = -1.0 / 5.0_f64.sqrt();
    let ring_radius = 2.0 / 5.0_f64.sqrt();
    let mut vertices = [DVec3::ZERO; 12];
    vertices[SOUTH_POLE_VERTEX] = DVec3::NEG_Y;
    vertices[NORTH_POLE_VERTEX] = DVec3::Y;
    for i in 0..5 {
        let angle = (1.1 + 0.4 * i as f64) * PI;
        let v = DVec3::new(angle.sin() * ring_radius, ring_y, angle.cos() * ring_radius);
        vertices[1 + i] = v;
        // Northern ring is the point reflection of the southern one.
        vertices[6 + (i + 3) % 5] = -v;
    }
    vertices
});

/// The twelve icosahedron vertices on the unit sphere.
#[must_use]
pub fn icosahedron_vertices() -> &'static [DVec3; 12] {
    &VERTICES
}

/// Vertex indices of a face, ordered to match [`TriangleCoord`](crate::TriangleCoord)
/// barycentric weights.
#[must_use]
pub fn face_poles(triangle: u8) -> [usize; 3] {
    let band = triangle / 5;
    let lat = (triangle % 5) as usize;
    let next = (lat + 1) % 5;
    match band {
        0 => [1 + next, 1 + lat, 0],
        1 => [1 + lat, 1 + next, 6 + next],
        2 => [6 + next, 6 + lat, 1 + lat],
        _ => [6 + lat, 6 + next, 11],
    }
}

/// Unit direction through the centroid of a face.
#[must_use]
pub fn face_center(triangle: u8) -> DVec3 {
    let poles = face_poles(triangle);
    (VERTICES[poles[0]] + VERTICES[poles[1]] + VERTICES[poles[2]]).normalize()
}

/// Face whose centroid is closest to `dir`. The direction need not be unit length.
#[must_use]
pub fn direction_to_face(dir: DVec3) -> u8 {
    let mut best = 0;
    let mut best_dot = f64::NEG_INFINITY;
    for triangle in 0..FACE_COUNT {
        let dot = face_center(triangle).dot(dir);
        if dot > best_dot {
            best_dot = dot;
            best = triangle;
        }
    }
    best
}
