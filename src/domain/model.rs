use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

/// Two-valued rating shared by data privacy, scalability and lock-in tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl FromStr for Budget {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Budget::Low),
            "medium" => Ok(Budget::Medium),
            "high" => Ok(Budget::High),
            _ => Err(()),
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Level::Low),
            "high" => Ok(Level::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints {
    pub budget: Budget,
    pub data_privacy: Level,
    pub scalability: Level,
    pub vendor_lockin_tolerance: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKey {
    Budget,
    DataPrivacy,
    Scalability,
    VendorLockinTolerance,
}

impl ConstraintKey {
    pub const ALL: [ConstraintKey; 4] = [
        ConstraintKey::Budget,
        ConstraintKey::DataPrivacy,
        ConstraintKey::Scalability,
        ConstraintKey::VendorLockinTolerance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintKey::Budget => "budget",
            ConstraintKey::DataPrivacy => "data_privacy",
            ConstraintKey::Scalability => "scalability",
            ConstraintKey::VendorLockinTolerance => "vendor_lockin_tolerance",
        }
    }

    pub fn prompt_label(self) -> &'static str {
        match self {
            ConstraintKey::Budget => "Budget (low/medium/high): ",
            ConstraintKey::DataPrivacy => "Data Privacy requirement (low/high): ",
            ConstraintKey::Scalability => "Scalability needs (low/high): ",
            ConstraintKey::VendorLockinTolerance => "Vendor lock-in tolerance (low/high): ",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// Unvalidated constraint answers keyed by raw name, possibly partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConstraints {
    values: HashMap<String, String>,
}

impl RawConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: ConstraintKey, value: impl Into<String>) {
        self.values.insert(key.as_str().to_string(), value.into());
    }

    pub fn get(&self, key: ConstraintKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    pub fn contains(&self, key: ConstraintKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    pub fn missing(&self) -> Vec<ConstraintKey> {
        ConstraintKey::ALL
            .into_iter()
            .filter(|key| !self.contains(*key))
            .collect()
    }

    /// Layers `other` on top of `self`; keys present in `other` win.
    pub fn merge(mut self, other: RawConstraints) -> Self {
        self.values.extend(other.values);
        self
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }
}

impl From<HashMap<String, String>> for RawConstraints {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    Flag(bool),
    Rating(Level),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub features: &'static [(&'static str, FeatureValue)],
}

impl ServiceProfile {
    pub fn feature(&self, name: &str) -> Option<FeatureValue> {
        self.features
            .iter()
            .find(|(feature, _)| *feature == name)
            .map(|(_, value)| *value)
    }
}

pub const AWS_BEDROCK: ServiceProfile = ServiceProfile {
    key: "aws_bedrock",
    name: "AWS Bedrock",
    features: &[
        ("data_privacy", FeatureValue::Rating(Level::High)),
        ("aws_integration", FeatureValue::Flag(true)),
        ("model_variety", FeatureValue::Flag(true)),
        ("pay_per_use", FeatureValue::Flag(true)),
        ("enterprise_ready", FeatureValue::Flag(true)),
    ],
};

pub const OPENAI_API: ServiceProfile = ServiceProfile {
    key: "openai_api",
    name: "OpenAI API",
    features: &[
        ("cutting_edge_models", FeatureValue::Flag(true)),
        ("easy_setup", FeatureValue::Flag(true)),
        ("large_community", FeatureValue::Flag(true)),
        ("rapid_updates", FeatureValue::Flag(true)),
        ("simple_pricing", FeatureValue::Flag(true)),
    ],
};

/// The two compared offerings: a managed-model platform and a hosted API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCatalog {
    pub managed: ServiceProfile,
    pub hosted: ServiceProfile,
}

impl ServiceCatalog {
    pub fn standard() -> Self {
        Self {
            managed: AWS_BEDROCK,
            hosted: OPENAI_API,
        }
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAssessment {
    pub key: String,
    pub name: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub managed: ServiceAssessment,
    pub hosted: ServiceAssessment,
    pub verdict: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub constraints: Constraints,
    pub result: ComparisonResult,
    pub preamble: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let constraints = Constraints::default();
        assert_eq!(constraints.budget, Budget::Medium);
        assert_eq!(constraints.data_privacy, Level::Low);
        assert_eq!(constraints.scalability, Level::Low);
        assert_eq!(constraints.vendor_lockin_tolerance, Level::Low);
    }

    #[test]
    fn test_parsing_is_exact() {
        assert_eq!("medium".parse::<Budget>(), Ok(Budget::Medium));
        assert!("Medium".parse::<Budget>().is_err());
        assert!("medium".parse::<Level>().is_err());
        assert_eq!("high".parse::<Level>(), Ok(Level::High));
    }

    #[test]
    fn test_raw_constraints_merge_later_layer_wins() {
        let mut base = RawConstraints::new();
        base.set(ConstraintKey::Budget, "low");
        base.set(ConstraintKey::Scalability, "high");

        let mut overlay = RawConstraints::new();
        overlay.set(ConstraintKey::Budget, "high");

        let merged = base.merge(overlay);
        assert_eq!(merged.get(ConstraintKey::Budget), Some("high"));
        assert_eq!(merged.get(ConstraintKey::Scalability), Some("high"));
        assert_eq!(
            merged.missing(),
            vec![ConstraintKey::DataPrivacy, ConstraintKey::VendorLockinTolerance]
        );
    }

    #[test]
    fn test_profile_features() {
        assert_eq!(
            AWS_BEDROCK.feature("data_privacy"),
            Some(FeatureValue::Rating(Level::High))
        );
        assert_eq!(OPENAI_API.feature("easy_setup"), Some(FeatureValue::Flag(true)));
        assert_eq!(OPENAI_API.feature("aws_integration"), None);
    }
}
