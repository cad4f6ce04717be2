use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a neighborhood by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborhoodId(pub u64);

/// Named sub-area of the city used to group venues for browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: NeighborhoodId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub city_id: u32,
}

/// The only two venue fields the resolver consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueAddressInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl VenueAddressInput {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// How much a caller should trust a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which stage of the cascade produced a resolution.
///
/// `SecondaryKeyword` is labelled `llm` on the wire. No model is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMethod {
    Zip,
    Street,
    Landmark,
    #[serde(rename = "llm")]
    SecondaryKeyword,
    Geocoding,
    Default,
}

impl ResolutionMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ResolutionMethod::Zip => "zip",
            ResolutionMethod::Street => "street",
            ResolutionMethod::Landmark => "landmark",
            ResolutionMethod::SecondaryKeyword => "llm",
            ResolutionMethod::Geocoding => "geocoding",
            ResolutionMethod::Default => "default",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single resolution. The neighborhood is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub neighborhood: String,
    pub confidence: Confidence,
    pub method: ResolutionMethod,
}

/// Lowercase, hyphen-joined ASCII alphanumeric form of a name.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("North Beach"), "north-beach");
        assert_eq!(slugify("Fisherman's Wharf"), "fisherman-s-wharf");
        assert_eq!(slugify("Haight-Ashbury"), "haight-ashbury");
        assert_eq!(slugify("  SoMa "), "soma");
    }

    #[test]
    fn result_serializes_with_wire_labels() {
        let result = ResolutionResult {
            neighborhood: "The Mission".to_string(),
            confidence: Confidence::Medium,
            method: ResolutionMethod::SecondaryKeyword,
        };
        let payload = serde_json::to_value(&result).expect("serializes");
        assert_eq!(payload["confidence"], "medium");
        assert_eq!(payload["method"], "llm");
        assert_eq!(ResolutionMethod::SecondaryKeyword.label(), "llm");
    }

    #[test]
    fn confidence_orders_low_to_high() {
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }
}
