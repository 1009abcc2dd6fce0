//! Calibration profile round-trip integration tests.
//!
//! Verifies that a table can be captured as a CalibrationProfile, serialised
//! to JSON, deserialised back, and rebuilt into an identical table — and that
//! tampered profiles are rejected by re-validation.

#[cfg(feature = "serde")]
mod tests {
    use heatcurve_core::calibration::{Anchor, CalibrationError, CalibrationTable};
    use heatcurve_core::profile::{CalibrationProfile, ProfileError, PROFILE_VERSION};

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn factory_profile() -> CalibrationProfile {
        CalibrationProfile::from_table(&CalibrationTable::CALORMATIC_630, "calorMATIC 630")
    }

    fn custom_profile() -> CalibrationProfile {
        let table = CalibrationTable::from_anchors(&[
            Anchor::new(0.5, 0.8),
            Anchor::new(1.5, 1.9),
            Anchor::new(3.0, 3.1),
        ])
        .unwrap();
        CalibrationProfile::from_table(&table, "bench digitisation")
    }

    // ── Round trip ───────────────────────────────────────────────────────────

    #[test]
    fn test_profile_captures_every_anchor() {
        let profile = factory_profile();
        assert_eq!(
            profile.anchor_count(),
            CalibrationTable::CALORMATIC_630.anchor_count()
        );
        assert_eq!(profile.version, PROFILE_VERSION);
        assert_eq!(profile.device, "calorMATIC 630");
    }

    #[test]
    fn test_json_round_trip_preserves_values_exactly() {
        let profile = factory_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: CalibrationProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, profile);

        let table = restored.to_table().unwrap();
        assert_eq!(table, CalibrationTable::CALORMATIC_630);
    }

    #[test]
    fn test_custom_profile_round_trips_through_table() {
        let profile = custom_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: CalibrationProfile = serde_json::from_str(&json).unwrap();

        let table = restored.to_table().unwrap();
        assert_eq!(table.anchor_count(), 3);
        assert_eq!(table.steepness_range(), (0.5, 3.0));
    }

    // ── Untrusted input ──────────────────────────────────────────────────────

    #[test]
    fn test_tampered_anchor_order_is_rejected() {
        let mut profile = custom_profile();
        profile.anchors.swap(0, 2);
        assert_eq!(
            profile.to_table(),
            Err(ProfileError::Calibration(CalibrationError::OutOfOrder {
                index: 1
            }))
        );
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let mut profile = custom_profile();
        profile.version = PROFILE_VERSION + 1;
        assert_eq!(
            profile.to_table(),
            Err(ProfileError::UnsupportedVersion(PROFILE_VERSION + 1))
        );
    }

    #[test]
    fn test_hand_written_json_builds_a_table() {
        // The format a field technician would actually write.
        let json = r#"{
            "version": 1,
            "device": "floor circuit, measured 2024-11",
            "anchors": [
                { "steepness": 0.2, "gain": 0.35 },
                { "steepness": 1.0, "gain": 1.6 },
                { "steepness": 4.0, "gain": 4.0 }
            ]
        }"#;
        let profile: CalibrationProfile = serde_json::from_str(json).unwrap();
        let table = profile.to_table().unwrap();
        assert_eq!(table.anchor_count(), 3);
        assert!((table.anchors()[1].gain - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_empty_anchor_list_is_rejected() {
        let profile = CalibrationProfile {
            version: PROFILE_VERSION,
            device: "empty".into(),
            anchors: Vec::new(),
        };
        assert_eq!(
            profile.to_table(),
            Err(ProfileError::Calibration(CalibrationError::Empty))
        );
    }
}
