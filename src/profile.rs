//! Portable calibration profile — store and exchange chart digitisations.
//!
//! A [`CalibrationProfile`] is the serialisable face of a
//! [`CalibrationTable`]: a versioned record of which device the anchors were
//! digitised for and the anchors themselves. Profiles are how a more precise
//! chart digitisation travels between installations without a code change —
//! serialise one where the chart was measured, deserialise and
//! [`to_table`](CalibrationProfile::to_table) it where it is needed.
//!
//! Deserialised profiles are untrusted input: `to_table` re-runs the full
//! anchor validation, so a hand-edited or corrupted profile is rejected with
//! the same [`CalibrationError`] a bad runtime slice would produce.
//!
//! # no_std
//!
//! This module requires the `serde` feature and uses `alloc` — it is
//! compatible with no_std + alloc environments.
//!
//! # Example
//!
//! ```rust,ignore
//! use heatcurve_core::calibration::CalibrationTable;
//! use heatcurve_core::profile::CalibrationProfile;
//!
//! let profile = CalibrationProfile::from_table(
//!     &CalibrationTable::CALORMATIC_630,
//!     "calorMATIC 630",
//! );
//! let json = serde_json::to_string(&profile).unwrap();
//! let restored: CalibrationProfile = serde_json::from_str(&json).unwrap();
//! let table = restored.to_table().unwrap();
//! ```

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::calibration::{Anchor, CalibrationError, CalibrationTable};

/// Current profile format version.
pub const PROFILE_VERSION: u16 = 1;

/// A serialisable calibration record for one device chart.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CalibrationProfile {
    /// Format version — always [`PROFILE_VERSION`] for newly created profiles.
    pub version: u16,
    /// Human-readable label of the device or chart the anchors describe.
    pub device: String,
    /// Anchor list in chart order.
    pub anchors: Vec<Anchor>,
}

/// Why a deserialised profile could not be turned into a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// The profile was written by an unknown format version.
    UnsupportedVersion(u16),
    /// The anchor list failed table validation.
    Calibration(CalibrationError),
}

impl core::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported profile version {version}, expected {PROFILE_VERSION}")
            }
            Self::Calibration(err) => write!(f, "invalid profile anchors: {err}"),
        }
    }
}

impl From<CalibrationError> for ProfileError {
    fn from(err: CalibrationError) -> Self {
        Self::Calibration(err)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for ProfileError {}

impl CalibrationProfile {
    /// Capture a live table as a profile labelled with `device`.
    pub fn from_table(table: &CalibrationTable, device: &str) -> Self {
        Self {
            version: PROFILE_VERSION,
            device: String::from(device),
            anchors: table.anchors().to_vec(),
        }
    }

    /// Rebuild a validated table from this profile.
    ///
    /// Checks the format version, then runs the anchors through
    /// [`CalibrationTable::from_anchors`] — a profile is untrusted input and
    /// gets no shortcut past validation.
    pub fn to_table(&self) -> Result<CalibrationTable, ProfileError> {
        if self.version != PROFILE_VERSION {
            return Err(ProfileError::UnsupportedVersion(self.version));
        }
        Ok(CalibrationTable::from_anchors(&self.anchors)?)
    }

    /// Number of anchors in this profile.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}
