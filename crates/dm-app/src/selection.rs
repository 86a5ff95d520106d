//! Transient UI selection state.
//!
//! Selection lives for the duration of a session, is reset on relaunch and
//! is never persisted. Transitions are pure so a map click can be tested
//! without an event loop: `(clicked key) -> SelectionState -> SelectionState`.

use dm_core::{ProvinceKey, Scenario};

/// The province a user clicked on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedProvince {
    pub key: ProvinceKey,
    /// Display name from the boundary file.
    pub name: String,
}

/// Current selection: a scenario and, optionally, a province. No province
/// means the national aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub scenario: Scenario,
    pub province: Option<SelectedProvince>,
}

impl SelectionState {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            province: None,
        }
    }

    /// Map click: select a province, keep the scenario.
    pub fn with_province(self, key: ProvinceKey, name: impl Into<String>) -> Self {
        Self {
            scenario: self.scenario,
            province: Some(SelectedProvince {
                key,
                name: name.into(),
            }),
        }
    }

    /// Back to the national aggregate.
    pub fn clear_province(self) -> Self {
        Self {
            scenario: self.scenario,
            province: None,
        }
    }

    /// Radio choice: switch scenario, keep the province.
    pub fn with_scenario(self, scenario: Scenario) -> Self {
        Self { scenario, ..self }
    }

    pub fn is_national(&self) -> bool {
        self.province.is_none()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Scenario::Ssp1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_national() {
        let state = SelectionState::new(Scenario::Ssp2);
        assert!(state.is_national());
        assert_eq!(state.scenario, Scenario::Ssp2);
    }

    #[test]
    fn click_then_scenario_switch_keeps_the_province() {
        let state = SelectionState::default()
            .with_province(ProvinceKey::new("Ankara"), "Ankara")
            .with_scenario(Scenario::Ssp4);
        assert_eq!(state.scenario, Scenario::Ssp4);
        assert_eq!(state.province.as_ref().unwrap().name, "Ankara");
    }

    #[test]
    fn transitions_are_idempotent() {
        let once = SelectionState::default().with_province(ProvinceKey::new("İzmir"), "İzmir");
        let twice = once
            .clone()
            .with_province(ProvinceKey::new("İzmir"), "İzmir");
        assert_eq!(once, twice);
    }

    #[test]
    fn clear_returns_to_national() {
        let state = SelectionState::default()
            .with_province(ProvinceKey::new("Konya"), "Konya")
            .clear_province();
        assert!(state.is_national());
    }
}
