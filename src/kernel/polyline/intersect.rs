use crate::geometry::{Curve, Plane, PolylineCurve};
use crate::kernel::IntersectionEvent;
use crate::math::intersect_3d::{
    classify_point_plane, segment_crossing_fraction, signed_distance_to_plane,
};

/// Finds where `plane` crosses `curve`, ordered by parameter.
///
/// Only sign changes count: a curve that touches the plane at a vertex or
/// runs along it for a while without passing to the other side produces no
/// event. When the crossing happens through a run of on-plane vertices the
/// event sits on whichever end of the run is nearer the crossing it pairs
/// with, so the chord between them stays off the run.
#[allow(clippy::cast_precision_loss)]
pub(super) fn intersect_polyline_plane(
    curve: &PolylineCurve,
    plane: &Plane,
    tolerance: f64,
) -> Vec<IntersectionEvent> {
    let curve = curve.snap_closed(tolerance);
    let closed = curve.is_closed();
    let corners = curve.vertex_loop();
    let n = corners.len();
    let signs: Vec<i8> = corners
        .iter()
        .map(|p| classify_point_plane(p, plane, tolerance).sign())
        .collect();

    let Some(first) = signs.iter().position(|s| *s != 0) else {
        return Vec::new();
    };
    let at_vertex = |k: usize| IntersectionEvent {
        point: corners[k],
        parameter: k as f64,
    };

    // A closed loop is walked once around starting from a vertex off the
    // plane, so the seam needs no special case.
    let steps = if closed { n } else { n - 1 - first };
    let mut crossings = Vec::new();
    let mut side = signs[first];
    let mut zero_run: Option<usize> = None;
    for step in 1..=steps {
        let j = (first + step) % n;
        let sign = signs[j];
        if sign == 0 {
            zero_run.get_or_insert(j);
            continue;
        }
        if sign != side {
            let i = (j + n - 1) % n;
            let crossing = match zero_run {
                Some(z) => Crossing {
                    entry: at_vertex(z),
                    exit: at_vertex(i),
                },
                None => {
                    let a = &corners[i];
                    let b = &corners[j];
                    let dist_a = signed_distance_to_plane(a, plane);
                    let dist_b = signed_distance_to_plane(b, plane);
                    let f = segment_crossing_fraction(dist_a, dist_b).unwrap_or(0.5);
                    Crossing::at(IntersectionEvent {
                        point: a + (b - a) * f,
                        parameter: i as f64 + f,
                    })
                }
            };
            crossings.push(crossing);
            side = sign;
        }
        zero_run = None;
    }

    crossings.sort_by(|a, b| a.entry.parameter.total_cmp(&b.entry.parameter));
    let mut events = Vec::with_capacity(crossings.len());
    for pair in crossings.chunks(2) {
        match pair {
            [a, b] => {
                let (ea, eb) = nearest_ends(a, b);
                events.extend([ea, eb]);
            }
            [a] => events.push(a.entry),
            _ => {}
        }
    }
    events.sort_by(|a, b| a.parameter.total_cmp(&b.parameter));
    events
}

/// A crossing spread over the on-plane vertices it passes through. Plain
/// edge crossings have `entry == exit`.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    entry: IntersectionEvent,
    exit: IntersectionEvent,
}

impl Crossing {
    fn at(event: IntersectionEvent) -> Self {
        Self {
            entry: event,
            exit: event,
        }
    }

    fn ends(&self) -> [IntersectionEvent; 2] {
        [self.entry, self.exit]
    }
}

/// The pair of crossing ends closest to each other, preferring entries.
fn nearest_ends(a: &Crossing, b: &Crossing) -> (IntersectionEvent, IntersectionEvent) {
    let mut best = (a.entry, b.entry);
    let mut best_dist = (b.entry.point - a.entry.point).norm();
    for ea in a.ends() {
        for eb in b.ends() {
            let dist = (eb.point - ea.point).norm();
            if dist < best_dist {
                best = (ea, eb);
                best_dist = dist;
            }
        }
    }
    best
}
