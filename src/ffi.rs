//! Python FFI bindings via PyO3.
//!
//! Exposes the heating-curve evaluator to Python for host-side tooling —
//! plotting scripts, calibration work, schedule simulators.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from heatcurve_core import HeatingCurve
//!
//! curve = HeatingCurve()                      # calorMATIC 630 calibration
//! print(curve.gain(1.0))                      # → 1.75
//! print(curve.flow_temperature(20.0, 0.0, 1.0))  # → 55.0
//!
//! # One plottable curve across an outdoor sweep:
//! outdoor = [t * 0.5 for t in range(40, -41, -1)]
//! flow = curve.flow_profile(20.0, 1.0, 25.0, 90.0, outdoor)
//!
//! # A custom digitisation:
//! curve = HeatingCurve.from_anchors([(0.5, 0.8), (2.0, 2.4)])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::calibration::{Anchor, CalibrationTable};
use crate::calormatic::{STEEPNESS_MAX, STEEPNESS_MIN};
use crate::curve::{CircuitDemand, HeatingCurve as RustHeatingCurve};

/// Heating-curve evaluator over an immutable calibration table.
///
/// The default constructor uses the built-in calorMATIC 630 calibration;
/// `from_anchors` accepts a custom `(steepness, gain)` list, validated the
/// same way the Rust API validates it.
#[pyclass(name = "HeatingCurve")]
pub struct PyHeatingCurve {
    inner: RustHeatingCurve,
}

#[pymethods]
impl PyHeatingCurve {
    /// Create an evaluator over the calorMATIC 630 factory calibration.
    #[new]
    pub fn new() -> Self {
        Self {
            inner: RustHeatingCurve::default(),
        }
    }

    /// Create an evaluator over a custom anchor list.
    ///
    /// Args:
    ///     anchors: list of (steepness, gain) pairs, strictly increasing in
    ///         steepness, all finite, gains positive
    ///
    /// Raises:
    ///     ValueError: if the anchor list fails validation
    #[staticmethod]
    pub fn from_anchors(anchors: Vec<(f32, f32)>) -> PyResult<Self> {
        let anchors: Vec<Anchor> = anchors
            .into_iter()
            .map(|(steepness, gain)| Anchor::new(steepness, gain))
            .collect();
        let table = CalibrationTable::from_anchors(&anchors)
            .map_err(|err| PyValueError::new_err(format!("{err}")))?;
        Ok(Self {
            inner: RustHeatingCurve::new(table),
        })
    }

    /// Interpolated gain for a steepness value.
    ///
    /// Out-of-range values are clamped to the calibrated span, never
    /// extrapolated.
    pub fn gain(&self, steepness: f32) -> f32 {
        self.inner.gain(steepness)
    }

    /// Flow temperature for one set of circuit inputs.
    ///
    /// Args:
    ///     room_setpoint: desired room temperature, °C
    ///     outdoor:       measured outdoor temperature, °C
    ///     steepness:     selected curve number
    ///     flow_min:      circuit minimum flow temperature, °C (default 25)
    ///     flow_max:      circuit maximum flow temperature, °C (default 90)
    #[pyo3(signature = (room_setpoint, outdoor, steepness, flow_min=25.0, flow_max=90.0))]
    pub fn flow_temperature(
        &self,
        room_setpoint: f32,
        outdoor: f32,
        steepness: f32,
        flow_min: f32,
        flow_max: f32,
    ) -> f32 {
        self.inner.flow_temperature(&CircuitDemand {
            room_setpoint,
            outdoor,
            steepness,
            flow_min,
            flow_max,
        })
    }

    /// Flow temperatures across an outdoor-temperature sweep — one plottable
    /// curve for a fixed steepness.
    pub fn flow_profile(
        &self,
        room_setpoint: f32,
        steepness: f32,
        flow_min: f32,
        flow_max: f32,
        outdoor: Vec<f32>,
    ) -> Vec<f32> {
        let demand = CircuitDemand {
            room_setpoint,
            outdoor: 0.0,
            steepness,
            flow_min,
            flow_max,
        };
        self.inner.flow_profile(demand, &outdoor).collect()
    }

    /// Flow temperatures across a steepness sweep at one outdoor temperature
    /// — the family-of-curves view.
    pub fn curve_family(
        &self,
        room_setpoint: f32,
        outdoor: f32,
        flow_min: f32,
        flow_max: f32,
        steepness: Vec<f32>,
    ) -> Vec<f32> {
        let demand = CircuitDemand {
            room_setpoint,
            outdoor,
            steepness: 0.0,
            flow_min,
            flow_max,
        };
        self.inner.curve_family(demand, &steepness).collect()
    }

    /// The calibrated steepness span as (min, max).
    pub fn steepness_range(&self) -> (f32, f32) {
        self.inner.table().steepness_range()
    }

    /// The calibration anchors as a list of (steepness, gain) pairs.
    pub fn anchors(&self) -> Vec<(f32, f32)> {
        self.inner
            .table()
            .anchors()
            .iter()
            .map(|a| (a.steepness, a.gain))
            .collect()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        let (lo, hi) = self.inner.table().steepness_range();
        format!(
            "HeatingCurve({} anchors, steepness {lo:.1}–{hi:.1})",
            self.inner.table().anchor_count()
        )
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// heatcurve-core — heating curve model Python bindings.
///
/// Computes weather-compensated flow temperatures from a chart-calibrated
/// anchor table.
#[pymodule]
pub fn heatcurve_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHeatingCurve>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("STEEPNESS_MIN", STEEPNESS_MIN)?;
    m.add("STEEPNESS_MAX", STEEPNESS_MAX)?;
    Ok(())
}
