use std::fmt;

use serde::{Deserialize, Serialize};

/// A single inflammation measurement taken on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub day: u32,
    pub value: f64,
}

impl Observation {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}: {}", self.day, self.value)
    }
}
