//! Linear proportional scaling of values onto a pixel width.

/// Maps a value onto `[0, available_width]` against a reference maximum.
///
/// A reference maximum that is zero, negative or not finite makes the scale
/// degenerate: every value maps to a zero width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalScale {
    reference_max: f64,
    available_width: f64,
}

impl ProportionalScale {
    pub fn new(reference_max: f64, available_width: f64) -> Self {
        Self {
            reference_max,
            available_width,
        }
    }

    pub fn reference_max(&self) -> f64 {
        self.reference_max
    }

    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.reference_max.is_finite() && self.reference_max > 0.0)
    }

    pub fn map(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let res = value / self.reference_max * self.available_width;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }
}

/// Widths of `values` scaled against `reference_max` onto `available_width`.
pub fn scale_widths(values: &[f64], reference_max: f64, available_width: f64) -> Vec<f64> {
    let scale = ProportionalScale::new(reference_max, available_width);
    values.iter().map(|&v| scale.map(v)).collect()
}

/// Running x positions of consecutive widths, starting at 0.
pub fn stack_offsets(widths: &[f64]) -> Vec<f64> {
    let mut cursor = 0.0;
    widths
        .iter()
        .map(|w| {
            let x = cursor;
            cursor += w;
            x
        })
        .collect()
}
