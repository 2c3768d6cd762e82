//! Parameter groups and the parameter sets fetched from them.
//!
//! A `ParameterSet` keeps parameters in the order the upstream API returned
//! them, so every report lists entries in that same order.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Family of an RDS parameter group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum GroupKind {
    /// Instance-level group (`DescribeDBParameterGroups`).
    #[strum(to_string = "db-parameter-group", serialize = "instance")]
    #[serde(rename = "db-parameter-group", alias = "instance")]
    Instance,
    /// Cluster-level group (`DescribeDBClusterParameterGroups`).
    #[strum(to_string = "db-cluster-parameter-group", serialize = "cluster")]
    #[serde(rename = "db-cluster-parameter-group", alias = "cluster")]
    Cluster,
}

impl GroupKind {
    /// The AWS resource label, e.g. `db-parameter-group`.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// A named parameter group of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub name: String,
    pub kind: GroupKind,
}

impl ParameterGroup {
    pub fn new(name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn instance(name: impl Into<String>) -> Self {
        Self::new(name, GroupKind::Instance)
    }

    pub fn cluster(name: impl Into<String>) -> Self {
        Self::new(name, GroupKind::Cluster)
    }
}

impl core::fmt::Display for ParameterGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// One named parameter. `value` is `None` when the group leaves it unset,
/// which is distinct from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(str::to_owned),
        }
    }
}

/// The parameters of one group, in upstream order, with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    group: ParameterGroup,
    entries: Vec<Parameter>,
    index: HashMap<String, usize>,
}

impl ParameterSet {
    /// Create an empty set owned by `group`.
    pub fn new(group: ParameterGroup) -> Self {
        Self {
            group,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a set from parameters in iteration order.
    pub fn from_parameters<I>(group: ParameterGroup, parameters: I) -> Self
    where
        I: IntoIterator<Item = Parameter>,
    {
        let mut set = Self::new(group);
        for p in parameters {
            set.insert(p.name, p.value);
        }
        set
    }

    /// Insert a parameter.
    ///
    /// A repeated name replaces the stored value but keeps the position of
    /// the first occurrence.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        if let Some(&i) = self.index.get(name.as_str()) {
            self.entries[i].value = value;
            return;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(Parameter { name, value });
    }

    /// Look up a parameter.
    ///
    /// Returns `None` if the name is not in the set, `Some(None)` if it is
    /// present without a value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Parameter> {
        self.entries.iter()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.entries
    }

    pub fn group(&self) -> &ParameterGroup {
        &self.group
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = core::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
