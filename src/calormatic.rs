//! Vaillant calorMATIC 630 reference calibration.
//!
//! The calorMATIC 630 is a weather-compensated heating controller whose user
//! manual publishes its heating curves only as a chart (curves 0.2–4.0 over
//! outdoor temperatures +20…−20 °C, flow 20–90 °C). Vaillant does not publish
//! the underlying formula, so the anchors below were digitised from the chart
//! by visual inspection of its gridlines, each gain read against the 20 °C
//! room baseline as `(flow − room) / (room − outdoor)`.
//!
//! This module ships as a concrete reference so you can see exactly what a
//! production calibration looks like. A more precise digitisation — or a
//! different controller's chart — is a drop-in replacement: build your own
//! [`CalibrationTable`] and hand it to [`HeatingCurve::new`]; nothing else
//! changes.
//!
//! # See also
//!
//! - `demos/chart.rs` — renders the family of curves as a text table
//! - [`CalibrationTable::from_anchors`] — validated construction for custom
//!   anchor lists

use crate::calibration::{Anchor, CalibrationTable};
use crate::curve::{CircuitDemand, HeatingCurve};

/// Lowest curve number printed on the calorMATIC 630 chart.
pub const STEEPNESS_MIN: f32 = 0.2;

/// Highest curve number printed on the calorMATIC 630 chart.
pub const STEEPNESS_MAX: f32 = 4.0;

/// Anchor list digitised from the published chart.
///
/// Flow readings are at 0 °C outdoor with a 20 °C room setpoint unless noted.
pub const CALORMATIC_630_ANCHORS: [Anchor; 12] = [
    Anchor::new(0.2, 0.40), // ~28 °C flow
    Anchor::new(0.4, 0.70), // estimated from grid spacing between 0.2 and 0.6
    Anchor::new(0.6, 1.00), // ~40 °C
    Anchor::new(0.8, 1.40), // estimated from chart progression near 0.8
    Anchor::new(1.0, 1.75), // ~55 °C
    Anchor::new(1.2, 1.90), // ~58–59 °C, thin spacing region
    Anchor::new(1.5, 2.00), // ~60 °C
    Anchor::new(2.0, 2.25), // ~65 °C
    Anchor::new(2.5, 2.50), // ~70 °C
    Anchor::new(3.0, 2.75), // ~75 °C
    Anchor::new(3.5, 3.40), // smooth transition toward the steepest curve
    // The manual gives a reliable point for 4.0 at +5 °C outdoor instead:
    // flow ≈ 82 °C, so gain = (82 − 20) / (20 − 5). Slightly conservative
    // at 0 °C, where the ceiling clamp takes over anyway.
    Anchor::new(4.0, 4.133),
];

impl CalibrationTable {
    /// The calorMATIC 630 factory calibration.
    pub const CALORMATIC_630: CalibrationTable =
        CalibrationTable::from_const(CALORMATIC_630_ANCHORS);
}

impl Default for CalibrationTable {
    /// The [`CALORMATIC_630`](CalibrationTable::CALORMATIC_630) calibration.
    fn default() -> Self {
        Self::CALORMATIC_630
    }
}

impl Default for HeatingCurve {
    /// An evaluator over the calorMATIC 630 factory calibration.
    fn default() -> Self {
        Self::new(CalibrationTable::CALORMATIC_630)
    }
}

// ─── Chart display window ───────────────────────────────────────────────────

/// Warm end of the chart's outdoor axis, in °C (the axis runs warm → cold).
pub const CHART_OUTDOOR_WARM: f32 = 20.0;

/// Cold end of the chart's outdoor axis, in °C.
pub const CHART_OUTDOOR_COLD: f32 = -20.0;

/// Bottom of the chart's flow-temperature axis, in °C.
pub const CHART_FLOW_MIN: f32 = 20.0;

/// Top of the chart's flow-temperature axis, in °C.
pub const CHART_FLOW_MAX: f32 = 90.0;

/// Room setpoints of the dashed guide-line group on the chart, in °C.
pub const SETPOINT_GUIDES: [f32; 3] = [18.0, 20.0, 22.0];

/// Steepness the guide lines are drawn at.
const GUIDE_STEEPNESS: f32 = 1.0;

/// Flow temperatures for one room-setpoint guide line.
///
/// Guide lines visualise the parallel shift a room setpoint produces: the
/// same curve (steepness 1.0) swept over `outdoor`, clamped to the chart's
/// display window rather than to any circuit's bounds.
pub fn setpoint_guide<'a>(
    curve: &'a HeatingCurve,
    room_setpoint: f32,
    outdoor: &'a [f32],
) -> impl Iterator<Item = f32> + 'a {
    let demand = CircuitDemand {
        room_setpoint,
        outdoor: 0.0,
        steepness: GUIDE_STEEPNESS,
        flow_min: CHART_FLOW_MIN,
        flow_max: CHART_FLOW_MAX,
    };
    curve.flow_profile(demand, outdoor)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
