/// Cloaking percentage (0..=99) for a ship's total cloak units.
///
/// Piecewise curve; each segment consumes the units past the previous
/// breakpoint:
///
/// | units past breakpoint | percent |
/// |---|---|
/// | 0..=100 | u / 2 |
/// | next 200 | 50 + u / 8 |
/// | next 312 (exclusive) | 75 + u / 24 |
/// | next 512 | 88 + u / 64 |
/// | below 768 | 96 |
/// | below 1000 | 97 |
/// | beyond | 99 |
///
/// Negative input follows the first segment.
pub fn cloak_percent_for_cloak_units(cloak_units: i32) -> f64 {
    let mut units = f64::from(cloak_units);
    if units <= 100.0 {
        return units / 2.0;
    }
    units -= 100.0;
    if units <= 200.0 {
        return 50.0 + units / 8.0;
    }
    units -= 200.0;
    if units < 312.0 {
        return 75.0 + units / 24.0;
    }
    units -= 312.0;
    if units <= 512.0 {
        88.0 + units / 64.0
    } else if units < 768.0 {
        96.0
    } else if units < 1000.0 {
        97.0
    } else {
        99.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(cloak_percent_for_cloak_units(0), 0.0);
        assert_eq!(cloak_percent_for_cloak_units(70), 35.0);
        assert_eq!(cloak_percent_for_cloak_units(100), 50.0);
        assert_eq!(cloak_percent_for_cloak_units(300), 75.0);
        assert_eq!(cloak_percent_for_cloak_units(612), 88.0);
        assert_eq!(cloak_percent_for_cloak_units(1124), 96.0);
        assert_eq!(cloak_percent_for_cloak_units(1379), 96.0);
        assert_eq!(cloak_percent_for_cloak_units(1380), 97.0);
        assert_eq!(cloak_percent_for_cloak_units(1611), 97.0);
        assert_eq!(cloak_percent_for_cloak_units(1612), 99.0);
        assert_eq!(cloak_percent_for_cloak_units(i32::MAX), 99.0);
    }

    #[test]
    fn test_segment_slopes() {
        // 540 units (Ultra-Stealth Cloak): third segment
        let expected = 75.0 + 240.0 / 24.0;
        assert_eq!(cloak_percent_for_cloak_units(540), expected);
        assert_eq!(cloak_percent_for_cloak_units(140), 50.0 + 40.0 / 8.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_cloak_non_decreasing(u in 0..5000i32) {
            prop_assert!(cloak_percent_for_cloak_units(u + 1) >= cloak_percent_for_cloak_units(u));
        }

        #[test]
        fn prop_cloak_bounded(u in 0..=i32::MAX) {
            let percent = cloak_percent_for_cloak_units(u);
            prop_assert!((0.0..=99.0).contains(&percent));
        }
    }
}
