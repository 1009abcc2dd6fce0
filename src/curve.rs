//! Curve evaluator — gain interpolation and the clamped flow-temperature formula.
//!
//! [`HeatingCurve`] is stateless: it owns an immutable [`CalibrationTable`]
//! and exposes two primitives plus a handful of read-only sweep helpers built
//! on them.
//!
//! - [`gain`](HeatingCurve::gain) — piecewise-linear interpolation of the
//!   anchor table, clamped to the calibrated span.
//! - [`flow_temperature`](HeatingCurve::flow_temperature) — the full model,
//!   `clamp(flow_min, flow_max, room + gain × (room − outdoor))`.
//!
//! Both are total over finite inputs: out-of-range steepness is handled by
//! clamping policy, not by failure, and no input panics.
//!
//! # Non-finite inputs
//!
//! A NaN steepness yields a NaN gain. NaN or infinite temperatures propagate
//! through the arithmetic by ordinary IEEE-754 rules, which means the final
//! clamp can collapse a NaN intermediate to one of the configured bounds.
//! Callers that need a hard boundary should validate before calling in.

use core::cmp::Ordering;

use crate::calibration::CalibrationTable;

/// One evaluation request: the caller-owned circuit configuration.
///
/// The model enforces nothing about `flow_min ≤ flow_max` — that ordering is
/// the caller's responsibility. See
/// [`flow_temperature`](HeatingCurve::flow_temperature) for the behaviour
/// when the bounds are inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircuitDemand {
    /// Desired room temperature in °C.
    pub room_setpoint: f32,
    /// Measured outdoor temperature in °C.
    pub outdoor: f32,
    /// Selected curve steepness (chart number, e.g. 0.2–4.0).
    pub steepness: f32,
    /// Minimum flow temperature the circuit accepts, in °C.
    pub flow_min: f32,
    /// Maximum flow temperature the circuit accepts, in °C.
    pub flow_max: f32,
}

impl Default for CircuitDemand {
    /// A typical radiator circuit: 20 °C room, 0 °C outdoor, curve 1.0,
    /// flow bounded to 25–90 °C.
    fn default() -> Self {
        Self {
            room_setpoint: 20.0,
            outdoor: 0.0,
            steepness: 1.0,
            flow_min: 25.0,
            flow_max: 90.0,
        }
    }
}

/// Stateless heating-curve evaluator over an injected calibration table.
///
/// Construction is the only configuration point; evaluation never mutates,
/// so a single instance can serve any number of threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatingCurve {
    table: CalibrationTable,
}

impl HeatingCurve {
    /// Build an evaluator over `table`.
    pub const fn new(table: CalibrationTable) -> Self {
        Self { table }
    }

    /// The calibration table this evaluator interpolates.
    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// Interpolated gain for a steepness value.
    ///
    /// The query is clamped into the table's steepness span, then linearly
    /// interpolated between the two bracketing anchors. A query that lands
    /// exactly on an anchor returns that anchor's gain bit-exactly. NaN
    /// returns NaN.
    pub fn gain(&self, steepness: f32) -> f32 {
        if steepness.is_nan() {
            return f32::NAN;
        }
        let anchors = self.table.anchors();
        let (lo, hi) = self.table.steepness_range();
        let s = steepness.clamp(lo, hi);

        let probe = anchors
            .binary_search_by(|a| a.steepness.partial_cmp(&s).unwrap_or(Ordering::Equal));
        match probe {
            Ok(i) => anchors[i].gain,
            // After clamping, an inexact match always falls strictly inside
            // the span, so 0 < i < len. The arms below keep the boundary
            // cases total anyway.
            Err(0) => anchors[0].gain,
            Err(i) if i >= anchors.len() => anchors[anchors.len() - 1].gain,
            Err(i) => {
                let a0 = anchors[i - 1];
                let a1 = anchors[i];
                let span = a1.steepness - a0.steepness;
                if span <= 0.0 {
                    // Zero-width bracket: ruled out by table validation,
                    // tolerated instead of dividing by it.
                    return a0.gain;
                }
                a0.gain + (a1.gain - a0.gain) * (s - a0.steepness) / span
            }
        }
    }

    /// Flow temperature for a circuit demand.
    ///
    /// `raw = room + gain(steepness) × (room − outdoor)`, clamped into
    /// `[flow_min, flow_max]`. The clamp applies the lower bound last, so if
    /// the caller hands in inverted bounds (`flow_min > flow_max`) the result
    /// is `flow_min` — the safety floor wins over the ceiling.
    pub fn flow_temperature(&self, demand: &CircuitDemand) -> f32 {
        let difference = demand.room_setpoint - demand.outdoor;
        let raw = demand.room_setpoint + self.gain(demand.steepness) * difference;
        raw.min(demand.flow_max).max(demand.flow_min)
    }

    // ── Sweep helpers (visualization data) ─────────────────────────────────

    /// Flow temperatures across a sweep of outdoor temperatures.
    ///
    /// Holds everything in `demand` fixed except `outdoor`, which is replaced
    /// by each sample in turn. This is the plottable curve for one steepness.
    pub fn flow_profile<'a>(
        &'a self,
        demand: CircuitDemand,
        outdoor: &'a [f32],
    ) -> impl Iterator<Item = f32> + 'a {
        outdoor.iter().map(move |&outdoor| {
            self.flow_temperature(&CircuitDemand { outdoor, ..demand })
        })
    }

    /// Flow temperatures across a sweep of steepness values.
    ///
    /// Holds everything in `demand` fixed except `steepness`. One sample per
    /// curve in the chart's family-of-curves view, all evaluated at the same
    /// outdoor temperature.
    pub fn curve_family<'a>(
        &'a self,
        demand: CircuitDemand,
        steepness: &'a [f32],
    ) -> impl Iterator<Item = f32> + 'a {
        steepness.iter().map(move |&steepness| {
            self.flow_temperature(&CircuitDemand { steepness, ..demand })
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
