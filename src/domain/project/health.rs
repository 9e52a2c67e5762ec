//! Project health traffic light.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light health signal, settable independently of lifecycle state.
///
/// Health changes are journaled on the project so the trail survives the
/// next status report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthSignal {
    #[default]
    Green,
    Yellow,
    Red,
}

impl HealthSignal {
    /// Returns the wire label for this signal.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthSignal::Green => "green",
            HealthSignal::Yellow => "yellow",
            HealthSignal::Red => "red",
        }
    }
}

impl fmt::Display for HealthSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
