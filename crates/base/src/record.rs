use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// Triage level. `Red` is the most urgent and sorts first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Triage {
    Red,
    Yellow,
    Green,
}

impl Display for Triage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Triage::Red => write!(f, "RED"),
            Triage::Yellow => write!(f, "YELLOW"),
            Triage::Green => write!(f, "GREEN"),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    F,
    M,
    X,
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::F => write!(f, "F"),
            Gender::M => write!(f, "M"),
            Gender::X => write!(f, "X"),
        }
    }
}

/// A patient waiting for admission.
///
/// Records are ordered by triage level, then by age (older first), then by
/// order of arrival (earlier first). `case_id` and `gender` take no part in
/// the ordering, so two records comparing `Equal` may still be different
/// patients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdmissionRecord {
    pub case_id: String,
    pub age: u32,
    pub gender: Gender,
    pub triage: Triage,
    pub arrival: u64,
}

impl AdmissionRecord {
    pub fn new(age: u32, gender: Gender, triage: Triage, arrival: u64) -> Self {
        Self {
            case_id: format!("{age}{gender}{arrival}"),
            age,
            gender,
            triage,
            arrival,
        }
    }
}

impl PartialEq for AdmissionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AdmissionRecord {}

impl PartialOrd for AdmissionRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AdmissionRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triage
            .cmp(&other.triage)
            .then_with(|| other.age.cmp(&self.age))
            .then_with(|| self.arrival.cmp(&other.arrival))
    }
}

impl Display for AdmissionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (age {}, {}, arrival #{})",
            self.case_id, self.triage, self.age, self.gender, self.arrival
        )
    }
}
