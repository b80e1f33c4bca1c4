//! Lab test type discriminator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Kind of laboratory test a report belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    /// Vineyard soil analysis
    Soil,
    /// Grape leaf petiole (tissue) analysis
    Petiole,
}

impl TestType {
    /// All supported test types.
    pub const ALL: [TestType; 2] = [TestType::Soil, TestType::Petiole];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Soil => "soil",
            TestType::Petiole => "petiole",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soil" => Ok(TestType::Soil),
            "petiole" => Ok(TestType::Petiole),
            _ => Err(CoreError::UnknownTestType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_type() {
        assert_eq!("soil".parse::<TestType>().unwrap(), TestType::Soil);
        assert_eq!(" Petiole ".parse::<TestType>().unwrap(), TestType::Petiole);
        assert!(matches!(
            "leaf".parse::<TestType>(),
            Err(CoreError::UnknownTestType(s)) if s == "leaf"
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TestType::Petiole).unwrap(), "\"petiole\"");
        let parsed: TestType = serde_json::from_str("\"soil\"").unwrap();
        assert_eq!(parsed, TestType::Soil);
    }
}
