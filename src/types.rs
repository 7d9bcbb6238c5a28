//! Core types for the triagem service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the seven specialization categories a petition can be routed to.
///
/// Each specialty is bound bidirectionally to a class index 0..=6; the
/// classifier works in index space and the mapping back to codes goes
/// through this enum, so an index the classifier emits always resolves
/// to exactly one specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Specialty {
    Pas = 0,
    Pda = 1,
    Ppe = 2,
    Pse = 3,
    Ptr = 4,
    Puma = 5,
    Pta = 6,
}

/// Error returned when a category code is not one of the seven known codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown specialty code '{0}' (expected one of PAS, PDA, PPE, PSE, PTR, PUMA, PTA)")]
pub struct UnknownSpecialty(pub String);

impl Specialty {
    /// All specialties in class-index order.
    pub const ALL: [Specialty; 7] = [
        Specialty::Pas,
        Specialty::Pda,
        Specialty::Ppe,
        Specialty::Pse,
        Specialty::Ptr,
        Specialty::Puma,
        Specialty::Pta,
    ];

    /// The filename/wire code for this specialty.
    pub fn code(&self) -> &'static str {
        match self {
            Specialty::Pas => "PAS",
            Specialty::Pda => "PDA",
            Specialty::Ppe => "PPE",
            Specialty::Pse => "PSE",
            Specialty::Ptr => "PTR",
            Specialty::Puma => "PUMA",
            Specialty::Pta => "PTA",
        }
    }

    /// The class index used by the classifier.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve a class index back to a specialty.
    pub fn from_index(index: usize) -> Option<Specialty> {
        Specialty::ALL.get(index).copied()
    }
}

impl FromStr for Specialty {
    type Err = UnknownSpecialty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .iter()
            .find(|sp| sp.code() == s)
            .copied()
            .ok_or_else(|| UnknownSpecialty(s.to_string()))
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_index_bijection() {
        for (ix, specialty) in Specialty::ALL.iter().enumerate() {
            assert_eq!(specialty.index(), ix);
            assert_eq!(Specialty::from_index(ix), Some(*specialty));
            assert_eq!(specialty.code().parse::<Specialty>(), Ok(*specialty));
        }
        assert_eq!(Specialty::from_index(7), None);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = "XYZ".parse::<Specialty>().unwrap_err();
        assert_eq!(err, UnknownSpecialty("XYZ".to_string()));
        // Codes are case-sensitive, matching the filename convention
        assert!("pas".parse::<Specialty>().is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Specialty::Puma).unwrap();
        assert_eq!(json, "\"PUMA\"");
    }
}
