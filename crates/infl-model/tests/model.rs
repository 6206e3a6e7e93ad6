//! Tests for infl-model types.

use std::cell::RefCell;
use std::rc::Rc;

use infl_model::{Doctor, Observation, Patient, Person, Table};

fn shared(name: &str) -> Rc<RefCell<Patient>> {
    Rc::new(RefCell::new(Patient::new(name)))
}

#[test]
fn create_patient() {
    let patient = Patient::new("Alice");
    assert_eq!(patient.name(), "Alice");
    assert!(patient.observations().is_empty());
}

#[test]
fn doctor_name() {
    let doctor = Doctor::new("Hugh Montgomery");
    assert_eq!(doctor.name(), "Hugh Montgomery");
    assert_eq!(doctor.describe(), "Hugh Montgomery");
}

#[test]
fn doctor_has_patients() {
    let mut doctor = Doctor::new("H Mont");
    assert!(doctor.add_patient(shared("Alice")));
    assert_eq!(doctor.patients().len(), 1);
    assert!(doctor.has_patient("Alice"));
    assert!(!doctor.has_patient("Bob"));
}

#[test]
fn doctor_skips_duplicate_patient() {
    let mut doctor = Doctor::new("H Mont");
    let patient = shared("Alice");
    doctor.add_patient(Rc::clone(&patient));
    assert!(!doctor.add_patient(Rc::clone(&patient)));
    assert_eq!(doctor.patients().len(), 1);
}

#[test]
fn doctor_keeps_first_patient_with_same_name() {
    let mut doctor = Doctor::new("H Mont");
    let first = shared("Alice");
    let second = shared("Alice");
    doctor.add_patient(Rc::clone(&first));
    doctor.add_patient(Rc::clone(&second));

    assert_eq!(doctor.patients().len(), 1);
    assert!(Rc::ptr_eq(&doctor.patients()[0], &first));
    assert!(!Rc::ptr_eq(&doctor.patients()[0], &second));
}

#[test]
fn doctor_preserves_insertion_order() {
    let mut doctor = Doctor::new("H Mont");
    for name in ["Carol", "Alice", "Bob"] {
        doctor.add_patient(shared(name));
    }
    let names: Vec<String> = doctor
        .patients()
        .iter()
        .map(|patient| patient.borrow().name().to_string())
        .collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
}

#[test]
fn patient_shared_between_doctors_sees_new_observations() {
    let patient = shared("Alice");
    let mut first = Doctor::new("A");
    let mut second = Doctor::new("B");
    first.add_patient(Rc::clone(&patient));
    second.add_patient(Rc::clone(&patient));

    patient.borrow_mut().add_observation(3.0, None);

    assert_eq!(first.patients()[0].borrow().observations().len(), 1);
    assert_eq!(second.patients()[0].borrow().observations().len(), 1);
}

#[test]
fn observation_display() {
    assert_eq!(Observation::new(3, 1.5).to_string(), "day 3: 1.5");
}

#[test]
fn patient_serializes() {
    let mut patient = Patient::new("Alice");
    patient.add_observation(2.0, None);
    patient.add_observation(4.5, Some(7));

    let json = serde_json::to_string(&patient).expect("serialize patient");
    let round: Patient = serde_json::from_str(&json).expect("deserialize patient");
    assert_eq!(round, patient);
}

#[test]
fn patient_without_observations_deserializes() {
    let patient: Patient = serde_json::from_str(r#"{"name":"Bob"}"#).expect("deserialize");
    assert_eq!(patient.name(), "Bob");
    assert!(patient.observations().is_empty());
}

#[test]
fn table_deserialization_enforces_shape() {
    let table: Table = serde_json::from_str("[[1.0,null],[3.0,4.0]]").expect("deserialize");
    assert_eq!(table.shape(), (2, 2));
    assert_eq!(table.get(0, 1), None);

    let ragged = serde_json::from_str::<Table>("[[1.0,2.0],[3.0]]");
    assert!(ragged.is_err());
}

#[test]
fn table_serializes_as_nested_rows() {
    let table = Table::from_values([[1.0, 2.0]]).expect("table");
    let json = serde_json::to_string(&table).expect("serialize");
    assert_eq!(json, "[[1.0,2.0]]");
}
