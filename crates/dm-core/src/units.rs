//! Display-unit scaling between GWh and TWh.
//!
//! Demand values are stored in GWh throughout. Charts pick a display unit
//! from the largest value they show and apply the same factor to every
//! series so the lines stay comparable.

use std::fmt;

/// Axis unit for displayed demand values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    GigawattHours,
    TerawattHours,
}

impl EnergyUnit {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyUnit::GigawattHours => "GWh",
            EnergyUnit::TerawattHours => "TWh",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Charts whose largest value exceeds this switch to TWh.
pub const TWH_SWITCH_THRESHOLD_GWH: f64 = 1000.0;

/// GWh per TWh.
pub const GWH_PER_TWH: f64 = 1000.0;

/// The scale applied uniformly to every series in one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub unit: EnergyUnit,
    pub divisor: f64,
}

impl DisplayScale {
    /// Pick the display unit from the largest value on the chart.
    /// All-zero (and empty) charts stay in GWh.
    pub fn for_max_gwh(max_gwh: f64) -> Self {
        if max_gwh > TWH_SWITCH_THRESHOLD_GWH {
            Self {
                unit: EnergyUnit::TerawattHours,
                divisor: GWH_PER_TWH,
            }
        } else {
            Self {
                unit: EnergyUnit::GigawattHours,
                divisor: 1.0,
            }
        }
    }

    pub fn apply(&self, value_gwh: f64) -> f64 {
        value_gwh / self.divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_values_stay_in_gwh() {
        let scale = DisplayScale::for_max_gwh(500.0);
        assert_eq!(scale.unit, EnergyUnit::GigawattHours);
        assert_eq!(scale.apply(500.0), 500.0);
    }

    #[test]
    fn large_values_convert_to_twh() {
        let scale = DisplayScale::for_max_gwh(1500.0);
        assert_eq!(scale.unit, EnergyUnit::TerawattHours);
        assert_eq!(scale.apply(1500.0), 1.5);
    }

    #[test]
    fn threshold_is_exclusive() {
        // "exceeds 1000 GWh": exactly 1000 stays in GWh
        let scale = DisplayScale::for_max_gwh(TWH_SWITCH_THRESHOLD_GWH);
        assert_eq!(scale.unit, EnergyUnit::GigawattHours);
    }

    #[test]
    fn all_zero_defaults_to_gwh() {
        let scale = DisplayScale::for_max_gwh(0.0);
        assert_eq!(scale.unit, EnergyUnit::GigawattHours);
        assert_eq!(scale.apply(0.0), 0.0);
    }

    proptest! {
        #[test]
        fn divisor_is_one_or_a_thousand(max in 0.0f64..1.0e9) {
            let scale = DisplayScale::for_max_gwh(max);
            prop_assert!(scale.divisor == 1.0 || scale.divisor == GWH_PER_TWH);
        }

        #[test]
        fn scaling_preserves_ordering(max in 0.0f64..1.0e9, a in 0.0f64..1.0e9, b in 0.0f64..1.0e9) {
            let scale = DisplayScale::for_max_gwh(max);
            prop_assert_eq!(a <= b, scale.apply(a) <= scale.apply(b));
        }
    }
}
