use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Declaration order is the tie-break priority of the fallback classifier.
str_enum!(HeadacheCategory {
    Migraine => "migraine",
    Tension => "tension",
    Cluster => "cluster",
    Sinus => "sinus",
    Emergency => "emergency",
});

impl HeadacheCategory {
    /// Categories the fallback classifier may pick as a "winner",
    /// in priority order. Emergency is handled by its own short-circuit.
    pub const RANKED: [HeadacheCategory; 4] = [
        HeadacheCategory::Migraine,
        HeadacheCategory::Tension,
        HeadacheCategory::Cluster,
        HeadacheCategory::Sinus,
    ];

    /// Tie-break rank: lower wins when scores are equal.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Migraine => 0,
            Self::Tension => 1,
            Self::Cluster => 2,
            Self::Sinus => 3,
            Self::Emergency => 4,
        }
    }
}

str_enum!(PassageTopic {
    Tension => "tension",
    Migraine => "migraine",
    Cluster => "cluster",
    Sinus => "sinus",
    MedicationOveruse => "medication_overuse",
    EmergencySigns => "emergency_signs",
    Prevention => "prevention",
    Children => "children",
    Pregnancy => "pregnancy",
    MentalHealth => "mental_health",
});

str_enum!(RetrievalMode {
    Embedding => "embedding",
    Keywords => "keywords",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            HeadacheCategory::Migraine,
            HeadacheCategory::Tension,
            HeadacheCategory::Cluster,
            HeadacheCategory::Sinus,
            HeadacheCategory::Emergency,
        ] {
            assert_eq!(HeadacheCategory::from_str(cat.as_str()).unwrap(), cat);
        }
    }

    #[test]
    fn unknown_category_is_invalid_enum() {
        let err = HeadacheCategory::from_str("hangover").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEnum { .. }));
    }

    #[test]
    fn rank_follows_declared_priority() {
        let ranks: Vec<u8> = HeadacheCategory::RANKED.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn retrieval_mode_parses_config_values() {
        assert_eq!(RetrievalMode::from_str("keywords").unwrap(), RetrievalMode::Keywords);
        assert!(RetrievalMode::from_str("random").is_err());
    }
}
