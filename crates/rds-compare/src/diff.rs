//! Parameter set diffing.
//!
//! Compares two `ParameterSet`s name-by-name and classifies every parameter
//! as matching, non-matching, or exclusive to one side.

use crate::params::{Parameter, ParameterGroup, ParameterSet};
use serde::{Deserialize, Serialize};

/// A parameter present in both groups with different values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMismatch {
    pub name: String,
    /// Value in the first group.
    pub first: Option<String>,
    /// Value in the second group.
    pub second: Option<String>,
}

impl core::fmt::Display for ValueMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: first={:?}, second={:?}",
            self.name, self.first, self.second
        )
    }
}

/// Four-way classification of two parameter sets.
///
/// Every parameter name of either set appears in exactly one of the four
/// lists. Each list keeps the order of the set it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first: ParameterGroup,
    pub second: ParameterGroup,
    pub matching: Vec<Parameter>,
    pub non_matching: Vec<ValueMismatch>,
    pub exclusive_to_first: Vec<Parameter>,
    pub exclusive_to_second: Vec<Parameter>,
}

impl ComparisonReport {
    /// Create a report with no entries.
    pub fn new(first: ParameterGroup, second: ParameterGroup) -> Self {
        Self {
            first,
            second,
            matching: Vec::new(),
            non_matching: Vec::new(),
            exclusive_to_first: Vec::new(),
            exclusive_to_second: Vec::new(),
        }
    }

    /// Number of distinct parameter names across both groups.
    pub fn total(&self) -> usize {
        self.matching.len()
            + self.non_matching.len()
            + self.exclusive_to_first.len()
            + self.exclusive_to_second.len()
    }

    /// True when both groups hold the same names with the same values.
    pub fn is_identical(&self) -> bool {
        self.non_matching.is_empty()
            && self.exclusive_to_first.is_empty()
            && self.exclusive_to_second.is_empty()
    }
}

/// Compare two parameter sets.
///
/// Values are compared exactly: an unset value differs from an empty
/// string.
pub fn compare(first: &ParameterSet, second: &ParameterSet) -> ComparisonReport {
    let mut report = ComparisonReport::new(first.group().clone(), second.group().clone());

    for param in first {
        match second.get(&param.name) {
            Some(other) if other == param.value.as_deref() => {
                report.matching.push(param.clone());
            }
            Some(other) => report.non_matching.push(ValueMismatch {
                name: param.name.clone(),
                first: param.value.clone(),
                second: other.map(str::to_owned),
            }),
            None => report.exclusive_to_first.push(param.clone()),
        }
    }

    // Names already seen in the first pass are skipped.
    for param in second {
        if !first.contains(&param.name) {
            report.exclusive_to_second.push(param.clone());
        }
    }

    tracing::debug!(
        first = %report.first,
        second = %report.second,
        matching = report.matching.len(),
        non_matching = report.non_matching.len(),
        exclusive_to_first = report.exclusive_to_first.len(),
        exclusive_to_second = report.exclusive_to_second.len(),
        "compared parameter sets"
    );

    report
}
