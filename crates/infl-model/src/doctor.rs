use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::patient::Patient;
use crate::person::Person;

/// Shared handle to a patient. A doctor never owns the patients it lists;
/// the same patient may appear under several doctors.
pub type SharedPatient = Rc<RefCell<Patient>>;

/// A doctor and the patients assigned to them, unique by patient name.
#[derive(Debug, Clone)]
pub struct Doctor {
    name: String,
    patients: Vec<SharedPatient>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patients: Vec::new(),
        }
    }

    pub fn patients(&self) -> &[SharedPatient] {
        &self.patients
    }

    pub fn has_patient(&self, name: &str) -> bool {
        self.patients
            .iter()
            .any(|patient| patient.borrow().name() == name)
    }

    /// Assign a patient to this doctor.
    ///
    /// Patients are matched by name: if one with the same name is already
    /// assigned, the call is a no-op that keeps the existing handle and
    /// returns `false`.
    pub fn add_patient(&mut self, patient: SharedPatient) -> bool {
        let duplicate = {
            let incoming = patient.borrow();
            self.has_patient(incoming.name())
        };
        if duplicate {
            return false;
        }
        self.patients.push(patient);
        true
    }
}

impl Person for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
