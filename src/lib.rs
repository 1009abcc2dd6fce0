//! # heatcurve-core
//!
//! Weather-compensated heating curve model: turn a room setpoint, an outdoor
//! temperature and a chart steepness number into the flow temperature a
//! heating circuit should target.
//!
//! ---
//!
//! ## The model
//!
//! Heating-control manufacturers publish their curves as a chart, not a
//! formula. This crate approximates such a chart as a continuous function
//! built from a small table of calibration anchors:
//!
//! ```text
//! flow = clamp(flow_min, flow_max, room + gain(steepness) × (room − outdoor))
//! ```
//!
//! `gain(steepness)` linearly interpolates the anchor table. Steepness values
//! outside the calibrated span are pinned to the nearest boundary anchor —
//! never extrapolated. The parallel shift produced by a different room
//! setpoint (the 18/20/22 °C line groups on the chart) falls out of the
//! formula naturally.
//!
//! The anchor table is injected into the evaluator at construction, so a more
//! precise digitisation of a chart — or a different device's chart entirely —
//! is a drop-in data replacement with no code change.
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`calibration`] | [`Anchor`], [`CalibrationTable`] | Ordered anchor storage, validated once at construction |
//! | [`curve`] | [`HeatingCurve`], [`CircuitDemand`] | Gain interpolation and the clamped flow-temperature formula |
//! | [`calormatic`] | `CALORMATIC_630_ANCHORS` | Reference calibration for the Vaillant calorMATIC 630 chart |
//! | [`profile`] | `CalibrationProfile` | Portable calibration exchange format (requires `serde` feature) |
//!
//! All operations are pure, synchronous and allocation-free; the evaluator can
//! be shared across threads without coordination.
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required. Enable the
//! `std` feature for `std::error::Error` integration. Enable the `serde`
//! feature for the [`profile`] exchange format (uses `alloc`). The
//! `python-ffi` feature builds PyO3 bindings for host-side tooling.
//!
//! [`Anchor`]: calibration::Anchor
//! [`CalibrationTable`]: calibration::CalibrationTable
//! [`HeatingCurve`]: curve::HeatingCurve
//! [`CircuitDemand`]: curve::CircuitDemand

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod calibration;
pub mod calormatic;
pub mod curve;
#[cfg(feature = "serde")]
pub mod profile;

#[cfg(feature = "python-ffi")]
pub mod ffi;
