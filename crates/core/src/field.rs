//! Form field identifiers

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One slot in the registration record populated by voice input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Full name of the candidate
    CandidateName,
    /// Years of professional experience (numeric text)
    YearsOfExperience,
    /// Current job title
    CurrentDesignation,
    /// Postal address
    Address,
    /// Email address
    Email,
}

impl Field {
    /// All fields, in record order
    pub const ALL: [Field; 5] = [
        Field::CandidateName,
        Field::YearsOfExperience,
        Field::CurrentDesignation,
        Field::Address,
        Field::Email,
    ];

    /// Canonical snake_case name as used by the API layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CandidateName => "candidate_name",
            Field::YearsOfExperience => "years_of_experience",
            Field::CurrentDesignation => "current_designation",
            Field::Address => "address",
            Field::Email => "email",
        }
    }

    /// Parse a field name as received from the API layer
    ///
    /// Accepts the canonical snake_case names plus common short forms.
    pub fn from_name(name: &str) -> Option<Field> {
        match name.trim().to_lowercase().as_str() {
            "candidate_name" | "name" | "candidate" => Some(Field::CandidateName),
            "years_of_experience" | "experience" | "yoe" | "years" => {
                Some(Field::YearsOfExperience)
            }
            "current_designation" | "designation" | "role" | "title" => {
                Some(Field::CurrentDesignation)
            }
            "address" => Some(Field::Address),
            "email" | "mail" | "mail_id" => Some(Field::Email),
            _ => None,
        }
    }

    /// Whether the extracted value is numeric text meant for integer coercion
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::YearsOfExperience)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s).ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}
