//! The five Shared Socioeconomic Pathway (SSP) scenarios.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the five SSP narratives the projections were produced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scenario {
    #[cfg_attr(feature = "serde", serde(rename = "SSP1", alias = "ssp1"))]
    Ssp1,
    #[cfg_attr(feature = "serde", serde(rename = "SSP2", alias = "ssp2"))]
    Ssp2,
    #[cfg_attr(feature = "serde", serde(rename = "SSP3", alias = "ssp3"))]
    Ssp3,
    #[cfg_attr(feature = "serde", serde(rename = "SSP4", alias = "ssp4"))]
    Ssp4,
    #[cfg_attr(feature = "serde", serde(rename = "SSP5", alias = "ssp5"))]
    Ssp5,
}

impl Scenario {
    /// All scenarios in display order.
    pub const ALL: [Scenario; 5] = [
        Scenario::Ssp1,
        Scenario::Ssp2,
        Scenario::Ssp3,
        Scenario::Ssp4,
        Scenario::Ssp5,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Ssp1 => "SSP1",
            Scenario::Ssp2 => "SSP2",
            Scenario::Ssp3 => "SSP3",
            Scenario::Ssp4 => "SSP4",
            Scenario::Ssp5 => "SSP5",
        }
    }

    /// One-line narrative shown in the help panel.
    pub fn narrative(&self) -> &'static str {
        match self {
            Scenario::Ssp1 => "Sustainability – Taking the Green Road",
            Scenario::Ssp2 => "Middle of the Road",
            Scenario::Ssp3 => "Regional Rivalry – A Rocky Road",
            Scenario::Ssp4 => "Inequality – A Road Divided",
            Scenario::Ssp5 => "Fossil-fueled Development – Taking the Highway",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SSP1" => Ok(Scenario::Ssp1),
            "SSP2" => Ok(Scenario::Ssp2),
            "SSP3" => Ok(Scenario::Ssp3),
            "SSP4" => Ok(Scenario::Ssp4),
            "SSP5" => Ok(Scenario::Ssp5),
            _ => Err(CoreError::UnknownScenario {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips_through_from_str() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.label().parse::<Scenario>().unwrap(), scenario);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("ssp3".parse::<Scenario>().unwrap(), Scenario::Ssp3);
        assert_eq!(" SSP5 ".parse::<Scenario>().unwrap(), Scenario::Ssp5);
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        assert!("SSP6".parse::<Scenario>().is_err());
        assert!("".parse::<Scenario>().is_err());
    }
}
