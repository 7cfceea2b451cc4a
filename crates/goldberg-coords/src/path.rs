//! Greedy geodesic path tracing between two tiles.

use glam::DVec3;
use tracing::debug;

use crate::{CoordError, GpIndex, HexDirection, Interpolation, SpiralIndex};

fn center(gp: GpIndex, tile: SpiralIndex, interpolation: Interpolation) -> DVec3 {
    tile.direction(gp, interpolation).normalize()
}

/// Trace a path of adjacent tiles from `from` to `to`, both included.
///
/// At each step the tracer keeps the neighbours that are strictly closer to
/// the target and picks the one nearest to the great circle through both
/// endpoints. The result is short but not guaranteed to be the shortest.
///
/// Fails with [`CoordError::PathNotFound`] when no neighbour makes progress
/// or the walk exceeds the tile count.
pub fn shortest_path(
    gp: GpIndex,
    from: SpiralIndex,
    to: SpiralIndex,
    interpolation: Interpolation,
) -> Result<Vec<SpiralIndex>, CoordError> {
    let target = center(gp, to, interpolation);
    let plane_normal = center(gp, from, interpolation).cross(target);
    let max_steps = gp.field_count();

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        if path.len() as u32 > max_steps {
            return Err(CoordError::PathNotFound {
                from: from.get(),
                to: to.get(),
                steps: max_steps,
            });
        }
        let threshold = center(gp, current, interpolation).dot(target);
        let eq = current.to_equator(gp);
        let mut best: Option<(SpiralIndex, f64)> = None;
        for dir in HexDirection::ALL {
            let candidate = eq.navigate(gp, dir).tile.to_spiral(gp);
            let c = center(gp, candidate, interpolation);
            if c.dot(target) <= threshold {
                continue;
            }
            let off_course = c.dot(plane_normal).abs();
            if best.is_none_or(|(_, d)| off_course < d) {
                best = Some((candidate, off_course));
            }
        }
        let Some((next, _)) = best else {
            return Err(CoordError::PathNotFound {
                from: from.get(),
                to: to.get(),
                steps: path.len() as u32 - 1,
            });
        };
        path.push(next);
        current = next;
    }

    debug!(
        "Traced path {} -> {} over {} tiles",
        from,
        to,
        path.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn gp(g: u32) -> GpIndex {
        GpIndex::new(g).unwrap()
    }

    fn assert_connected(gp: GpIndex, path: &[SpiralIndex]) {
        for pair in path.windows(2) {
            let neighbours = pair[0].to_equator(gp).neighbors(gp);
            assert!(
                neighbours.contains(&pair[1].to_equator(gp)),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_path_to_self() {
        let gp = gp(3);
        let tile = SpiralIndex::new(gp, 17).unwrap();
        let path = shortest_path(gp, tile, tile, Interpolation::Spherical).unwrap();
        assert_eq!(path, vec![tile]);
    }

    #[test]
    fn test_path_to_neighbour() {
        let gp = gp(4);
        let tile = SpiralIndex::new(gp, 60).unwrap();
        for n in tile.to_equator(gp).neighbors(gp) {
            let path = shortest_path(gp, tile, n.to_spiral(gp), Interpolation::Spherical).unwrap();
            assert_eq!(path.len(), 2, "neighbour {n} reached in {} steps", path.len() - 1);
        }
    }

    #[test]
    fn test_all_pairs_terminate_small() {
        for g in [1, 2] {
            let gp = gp(g);
            for mode in [Interpolation::Planar, Interpolation::Spherical] {
                for a in SpiralIndex::all(gp) {
                    for b in SpiralIndex::all(gp) {
                        let path = shortest_path(gp, a, b, mode)
                            .unwrap_or_else(|e| panic!("g={g} {mode:?}: {e}"));
                        assert_eq!(path.first(), Some(&a));
                        assert_eq!(path.last(), Some(&b));
                        assert_connected(gp, &path);
                    }
                }
            }
        }
    }

    #[test]
    fn test_random_pairs_terminate() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for g in [3, 5, 8] {
            let gp = gp(g);
            for _ in 0..300 {
                let a = SpiralIndex::new(gp, rng.random_range(0..gp.field_count())).unwrap();
                let b = SpiralIndex::new(gp, rng.random_range(0..gp.field_count())).unwrap();
                let path = shortest_path(gp, a, b, Interpolation::Spherical).unwrap();
                assert_eq!(path.last(), Some(&b));
                assert_connected(gp, &path);
            }
        }
    }

    #[test]
    fn test_pole_to_pole_length() {
        let gp = gp(4);
        let path = shortest_path(
            gp,
            SpiralIndex::SOUTH_POLE,
            SpiralIndex::north_pole(gp),
            Interpolation::Spherical,
        )
        .unwrap();
        // Crossing all rings takes at least one step per ring.
        assert!(path.len() as u32 > gp.max_longitude());
        assert!(path.len() as u32 <= 2 * gp.max_longitude() + 1);
    }
}
