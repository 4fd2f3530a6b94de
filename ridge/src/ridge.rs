use crate::error::{Result, RidgeError};
use crate::geometry::{Point, RidgeSequence};
use crate::source::UniformSource;

// Peaks are drawn from this fraction of the canvas height, measured up from
// the baseline, so they never touch the top edge or the baseline itself.
pub const BAND_LOW: f64 = 0.3;
pub const BAND_HIGH: f64 = 0.7;

/// Jagged silhouette generator.
///
/// The width is split into `num_segments` equal buckets and each bucket gets
/// one interior point. Buckets are disjoint and x is drawn inside its own
/// bucket, so interior x increases without any resampling. The sequence is
/// closed with baseline anchors at `(0, height)` and `(width, height)`.
#[derive(Debug, Clone)]
pub struct RidgeGenerator {
    num_segments: usize,
    width: f64,
    height: f64,
    band: (f64, f64),
}

impl RidgeGenerator {
    pub fn new(num_segments: usize, width: f64, height: f64) -> Result<Self> {
        if num_segments < 1 {
            return Err(RidgeError::invalid_argument(
                "num_segments must be at least 1",
            ));
        }
        // `!(v > 0.0)` also catches NaN
        if !(width > 0.0) || !width.is_finite() {
            return Err(RidgeError::invalid_argument(format!(
                "width must be positive and finite, got {width}"
            )));
        }
        if !(height > 0.0) || !height.is_finite() {
            return Err(RidgeError::invalid_argument(format!(
                "height must be positive and finite, got {height}"
            )));
        }

        Ok(Self {
            num_segments,
            width,
            height,
            band: (BAND_LOW, BAND_HIGH),
        })
    }

    /// Override the vertical band, as fractions of the height above the baseline.
    pub fn with_band(mut self, low: f64, high: f64) -> Result<Self> {
        if !(0.0 < low && low < high && high < 1.0) {
            return Err(RidgeError::invalid_argument(format!(
                "band must satisfy 0 < low < high < 1, got ({low}, {high})"
            )));
        }
        self.band = (low, high);
        Ok(self)
    }

    pub fn num_segments(&self) -> usize {
        self.num_segments
    }

    pub fn bucket_size(&self) -> f64 {
        self.width / self.num_segments as f64
    }

    // Left edge of bucket `i`; the last edge is exactly the width
    #[inline]
    fn bucket_edge(&self, i: usize) -> f64 {
        if i == self.num_segments {
            self.width
        } else {
            self.width * i as f64 / self.num_segments as f64
        }
    }

    // One height inside the band; y grows downward so it is measured from the baseline
    #[inline]
    fn sample_y(&self, source: &mut impl UniformSource) -> f64 {
        let (low, high) = self.band;
        let r = low + (high - low) * source.next_unit();
        self.height - r * self.height
    }

    /// Produce `num_segments + 2` points: anchor, one point per bucket, anchor.
    ///
    /// Each bucket draws x first, then y.
    pub fn generate(&self, source: &mut impl UniformSource) -> RidgeSequence {
        let mut points = Vec::with_capacity(self.num_segments + 2);

        points.push(Point::new(0.0, self.height));
        let mut lo = 0.0;
        for i in 0..self.num_segments {
            let hi = self.bucket_edge(i + 1);
            // Rounding can land a draw near 1 on `hi`, so keep x strictly inside its bucket
            let x = (lo + (hi - lo) * source.next_unit()).min(below(hi)).max(lo);
            let y = self.sample_y(source);
            points.push(Point::new(x, y));
            lo = hi;
        }
        points.push(Point::new(self.width, self.height));

        RidgeSequence::from_generated(points)
    }
}

// Largest f64 below a positive finite value
#[inline]
fn below(v: f64) -> f64 {
    f64::from_bits(v.to_bits() - 1)
}

/// Validate the inputs and generate one ridge.
pub fn generate(
    num_segments: usize,
    width: f64,
    height: f64,
    source: &mut impl UniformSource,
) -> Result<RidgeSequence> {
    Ok(RidgeGenerator::new(num_segments, width, height)?.generate(source))
}
