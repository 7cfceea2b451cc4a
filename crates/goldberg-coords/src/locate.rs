//! Direction-to-tile lookup.

use glam::DVec3;

use crate::icosahedron::{direction_to_face, face_poles, icosahedron_vertices};
use crate::{CoordError, GpIndex, Interpolation, SpiralIndex, TriangleCoord};

/// Find the tile whose center direction is closest to `dir`.
///
/// Estimates barycentric weights on the nearest icosahedron face, rounds them
/// to a tile and then walks to the best neighbour until no neighbour is closer.
/// `dir` need not be unit length.
pub fn locate(
    gp: GpIndex,
    dir: DVec3,
    interpolation: Interpolation,
) -> Result<SpiralIndex, CoordError> {
    let length = dir.length();
    if !length.is_finite() || length < 1e-300 {
        return Err(CoordError::DegenerateDirection);
    }
    let dir = dir / length;

    let triangle = direction_to_face(dir);
    let corners = face_poles(triangle).map(|p| icosahedron_vertices()[p]);
    let weights = interpolation.barycentric(corners, dir);
    let estimate = TriangleCoord::new(gp, round_weights(weights, gp.get()), triangle)?;

    let mut current = estimate.to_equator(gp);
    let mut current_dot = tile_direction(gp, current.to_spiral(gp), interpolation).dot(dir);
    loop {
        let mut improved = false;
        for neighbour in current.neighbors(gp) {
            let d = tile_direction(gp, neighbour.to_spiral(gp), interpolation).dot(dir);
            if d > current_dot + 1e-12 {
                current = neighbour;
                current_dot = d;
                improved = true;
            }
        }
        if !improved {
            return Ok(current.to_spiral(gp));
        }
    }
}

fn tile_direction(gp: GpIndex, tile: SpiralIndex, interpolation: Interpolation) -> DVec3 {
    tile.direction(gp, interpolation).normalize()
}

/// Scale fractional weights (summing to 1) to integers summing to `g`.
///
/// The component with the largest rounding error absorbs the difference.
fn round_weights(weights: [f64; 3], g: u32) -> [u32; 3] {
    let g = i64::from(g);
    let scaled = weights.map(|w| w * g as f64);
    let mut rounded = scaled.map(|w| w.round() as i64);
    let mut worst = 0;
    for i in 1..3 {
        if (rounded[i] as f64 - scaled[i]).abs() > (rounded[worst] as f64 - scaled[worst]).abs() {
            worst = i;
        }
    }
    rounded[worst] = g - (rounded.iter().sum::<i64>() - rounded[worst]);
    for r in &mut rounded {
        *r = (*r).max(0);
    }
    while rounded.iter().sum::<i64>() > g {
        let i = argmax(&rounded);
        rounded[i] -= 1;
    }
    while rounded.iter().sum::<i64>() < g {
        let i = argmin(&rounded);
        rounded[i] += 1;
    }
    rounded.map(|r| r as u32)
}

fn argmax(values: &[i64; 3]) -> usize {
    (0..3).fold(0, |best, i| if values[i] > values[best] { i } else { best })
}

fn argmin(values: &[i64; 3]) -> usize {
    (0..3).fold(0, |best, i| if values[i] < values[best] { i } else { best })
}
