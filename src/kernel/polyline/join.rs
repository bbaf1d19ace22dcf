use crate::error::Result;
use crate::geometry::PolylineCurve;
use crate::math::Point3;

/// Chains polylines whose ends meet within `tolerance`.
///
/// Chains grow greedily from the first unused piece, attaching any piece at
/// either end and reversing it when needed. A chain whose ends meet is
/// snapped shut, so the result is exactly closed.
pub(super) fn join_polylines(
    pieces: &[PolylineCurve],
    tolerance: f64,
) -> Result<Vec<PolylineCurve>> {
    let mut pool: Vec<Option<&PolylineCurve>> = pieces.iter().map(Some).collect();
    let mut joined = Vec::new();

    loop {
        let Some(seed) = pool.iter_mut().find_map(Option::take) else {
            break;
        };
        let mut chain: Vec<Point3> = seed.points().to_vec();
        while !meets(&chain, tolerance) && attach_next(&mut pool, &mut chain, tolerance) {}
        if meets(&chain, tolerance) {
            let first = chain[0];
            if let Some(last) = chain.last_mut() {
                *last = first;
            }
        }
        joined.push(PolylineCurve::new(chain)?);
    }
    Ok(joined)
}

fn meets(chain: &[Point3], tolerance: f64) -> bool {
    chain.len() >= 4 && (chain[0] - chain[chain.len() - 1]).norm() <= tolerance
}

/// Attaches one unused piece to either end of `chain`.
fn attach_next(
    pool: &mut [Option<&PolylineCurve>],
    chain: &mut Vec<Point3>,
    tolerance: f64,
) -> bool {
    let head = chain[0];
    let tail = chain[chain.len() - 1];
    let near = |a: &Point3, b: &Point3| (a - b).norm() <= tolerance;

    for slot in pool.iter_mut() {
        let Some(piece) = *slot else {
            continue;
        };
        let points = piece.points();
        let (start, end) = (piece.start(), piece.end());
        if near(start, &tail) {
            chain.extend_from_slice(&points[1..]);
        } else if near(end, &tail) {
            chain.extend(points.iter().rev().skip(1));
        } else if near(end, &head) {
            let mut grown = points[..points.len() - 1].to_vec();
            grown.append(chain);
            *chain = grown;
        } else if near(start, &head) {
            let mut grown: Vec<Point3> = points[1..].iter().rev().copied().collect();
            grown.append(chain);
            *chain = grown;
        } else {
            continue;
        }
        *slot = None;
        return true;
    }
    false
}
