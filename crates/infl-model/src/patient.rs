use std::fmt;

use serde::{Deserialize, Serialize};

use crate::observation::Observation;
use crate::person::Person;

/// A patient and the observations recorded for them, in entry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    name: String,
    #[serde(default)]
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observations: Vec::new(),
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The most recently entered observation, which is not necessarily the
    /// one with the highest day.
    pub fn last_observation(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Record a measurement and return it.
    ///
    /// Without an explicit `day` the observation lands on the day after the
    /// last entered one, or day 0 for a patient with no history. Explicit
    /// days are taken as given: repeats and gaps are allowed.
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> Observation {
        let day = day.unwrap_or_else(|| self.next_day());
        let observation = Observation::new(day, value);
        self.observations.push(observation);
        observation
    }

    fn next_day(&self) -> u32 {
        self.last_observation()
            .map_or(0, |last| last.day.saturating_add(1))
    }
}

impl Person for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_day_zero() {
        let mut patient = Patient::new("Alice");
        let observation = patient.add_observation(5.0, None);
        assert_eq!(observation, Observation::new(0, 5.0));
    }

    #[test]
    fn implicit_day_follows_last_entry() {
        let mut patient = Patient::new("Alice");
        patient.add_observation(5.0, None);
        assert_eq!(patient.add_observation(7.0, None).day, 1);
        assert_eq!(patient.add_observation(9.0, Some(20)).day, 20);
        assert_eq!(patient.add_observation(3.0, None).day, 21);
        let days: Vec<u32> = patient.observations().iter().map(|o| o.day).collect();
        assert_eq!(days, vec![0, 1, 20, 21]);
    }

    #[test]
    fn implicit_day_uses_entry_order_not_max_day() {
        let mut patient = Patient::new("Bob");
        patient.add_observation(1.0, Some(10));
        patient.add_observation(2.0, Some(3));
        assert_eq!(patient.add_observation(4.0, None).day, 4);
    }

    #[test]
    fn duplicate_days_are_kept() {
        let mut patient = Patient::new("Carol");
        patient.add_observation(1.0, Some(2));
        patient.add_observation(2.0, Some(2));
        assert_eq!(patient.observations().len(), 2);
    }

    #[test]
    fn describe_renders_name() {
        let patient = Patient::new("Alice");
        assert_eq!(patient.describe(), "Alice");
        assert_eq!(patient.to_string(), "Alice");
    }
}
