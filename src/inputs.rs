//! Calculator inputs and the input-surface semantics around them

use serde::{Deserialize, Serialize};

/// The four user-editable parameters driving a projection
///
/// The projection engine treats these as already-validated numbers; the
/// clamping and coercion helpers below are the input surface's job, not the
/// engine's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Visitors per month (free entry, non-negative, unbounded above)
    pub monthly_traffic: i64,

    /// Percent of traffic converting to paying customers (slider, 0-10)
    pub conversion_rate: f64,

    /// Price per customer per month in whole currency units (free entry)
    pub average_price: i64,

    /// Percent of existing customers lost each month (slider, 0-20)
    pub monthly_churn: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            monthly_traffic: 1000,
            conversion_rate: 2.0,
            average_price: 49,
            monthly_churn: 5.0,
        }
    }
}

/// Domain of a slider-bound input: closed range plus a step increment
///
/// Models what the slider control enforces. Values produced through
/// `clamp` are always representable positions of the control, so
/// slider-bound fields can never carry an out-of-domain value into the
/// engine.
#[derive(Debug, Clone, Copy)]
pub struct SliderDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Conversion rate slider: 0% to 10% in 0.1% steps
pub const CONVERSION_RATE_DOMAIN: SliderDomain = SliderDomain {
    min: 0.0,
    max: 10.0,
    step: 0.1,
};

/// Monthly churn slider: 0% to 20% in 0.5% steps
pub const MONTHLY_CHURN_DOMAIN: SliderDomain = SliderDomain {
    min: 0.0,
    max: 20.0,
    step: 0.5,
};

impl SliderDomain {
    /// Clamp a value into the domain and snap it to the nearest step
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Whether a value is an exact representable position of the control
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max && (self.clamp(value) - value).abs() < 1e-9
    }
}

/// Parse a free-entry field, coercing anything unparseable to zero
///
/// Mirrors the input handler contract: an edit is never rejected, a bad
/// value silently becomes 0 and the projection recomputes from that.
/// Parsing reads an optional sign plus leading digits and ignores the
/// rest, so "12.5" is 12 and "120 visitors" is 120, while fully
/// non-numeric text is 0.
pub fn parse_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|v| sign * v).unwrap_or(0)
}
