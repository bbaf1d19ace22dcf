use crate::error::{Result, TessellationError};
use crate::geometry::{Curve, PolylineCurve};
use crate::math::polygon_3d::distance_to_segment;

use super::TessellationParams;

/// Flattens a parametric curve into a polyline.
///
/// Starts from `min_segments` uniform parameter intervals and halves every
/// interval whose midpoint strays further than `tolerance` from its chord,
/// until all chords fit or `max_segments` is reached. Closed curves yield
/// closed polylines.
pub struct TessellateCurve<'a, C: Curve + ?Sized> {
    curve: &'a C,
    params: TessellationParams,
}

impl<'a, C: Curve + ?Sized> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: TessellationParams) -> Self {
        Self { curve, params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the curve cannot be
    /// evaluated.
    pub fn execute(&self) -> Result<PolylineCurve> {
        let TessellationParams {
            tolerance,
            min_segments,
            max_segments,
        } = self.params;
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {tolerance}"
            ))
            .into());
        }
        if min_segments == 0 || max_segments < min_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment bounds {min_segments}..={max_segments} are empty"
            ))
            .into());
        }

        let domain = self.curve.domain();
        #[allow(clippy::cast_precision_loss)]
        let step = domain.length() / min_segments as f64;
        #[allow(clippy::cast_precision_loss)]
        let mut params: Vec<f64> = (0..=min_segments)
            .map(|i| domain.t_min + step * i as f64)
            .collect();
        if let Some(last) = params.last_mut() {
            *last = domain.t_max;
        }

        let mut segments = min_segments;
        loop {
            let mut refined = Vec::with_capacity(params.len() * 2);
            refined.push(params[0]);
            let mut changed = false;
            for window in params.windows(2) {
                let (a, b) = (window[0], window[1]);
                let mid = 0.5 * (a + b);
                if segments < max_segments && self.deviation(a, mid, b)? > tolerance {
                    refined.push(mid);
                    segments += 1;
                    changed = true;
                }
                refined.push(b);
            }
            params = refined;
            if !changed {
                break;
            }
        }

        let points = params
            .iter()
            .map(|&t| self.curve.evaluate(t))
            .collect::<Result<Vec<_>>>()?;
        if self.curve.is_closed() {
            PolylineCurve::closed(points)
        } else {
            PolylineCurve::new(points)
        }
    }

    fn deviation(&self, a: f64, mid: f64, b: f64) -> Result<f64> {
        let pa = self.curve.evaluate(a)?;
        let pm = self.curve.evaluate(mid)?;
        let pb = self.curve.evaluate(b)?;
        Ok(distance_to_segment(&pm, &pa, &pb))
    }
}
