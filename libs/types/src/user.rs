//! User records and their degrees

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// User identifier. Not unique: nothing prevents two users sharing an id.
pub type UserId = i64;

/// Experience level attached to a [`Degree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeType {
    Newbie,
    Expert,
}

impl DegreeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeType::Newbie => "newbie",
            DegreeType::Expert => "expert",
        }
    }
}

impl fmt::Display for DegreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub type_degree: DegreeType,
}

impl Degree {
    pub fn new(id: i64, created_at: DateTime<Utc>, type_degree: DegreeType) -> Self {
        Self {
            id,
            created_at,
            type_degree,
        }
    }
}

/// A user as held by the record store
///
/// `degree` defaults to an empty list when absent or `null` on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub role: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub degree: Vec<Degree>,
}

impl User {
    pub fn new(id: UserId, role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
            name: name.into(),
            degree: Vec::new(),
        }
    }

    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.degree.push(degree);
        self
    }

    /// Replace the display name; id, role and degrees are left untouched.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Degree>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Degree>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
