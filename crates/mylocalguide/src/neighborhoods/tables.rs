use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::data;
use super::domain::slugify;
use super::normalizer::normalize_for_match;
use super::rules::street_key;

/// Reference entry for a neighborhood the resolver may answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodProfile {
    pub name: String,
    pub description: String,
}

impl NeighborhoodProfile {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Zip code with its ordered candidate neighborhoods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRule {
    pub zip_code: String,
    pub candidates: Vec<String>,
}

/// Inclusive block-number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetRange {
    pub min: u32,
    pub max: u32,
}

impl StreetRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.min <= number && number <= self.max
    }

    fn overlaps(&self, other: &StreetRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Street name plus the block ranges that fall inside one neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetRule {
    pub street_name: String,
    pub ranges: Vec<StreetRange>,
    pub neighborhood: String,
}

/// Case-insensitive keyword pointing at a neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkRule {
    pub keyword: String,
    pub neighborhood: String,
}

/// Static lookup data driving every rule evaluator.
///
/// Rule order is significant: landmark and secondary keyword lists are
/// evaluated first-registered-wins, and zip candidates fall back to the first
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub neighborhoods: Vec<NeighborhoodProfile>,
    pub zip_rules: Vec<ZipRule>,
    pub street_rules: Vec<StreetRule>,
    pub landmarks: Vec<LandmarkRule>,
    pub secondary_keywords: Vec<LandmarkRule>,
}

impl ReferenceTables {
    /// San Francisco neighborhoods, zips, streets, and landmarks.
    pub fn san_francisco() -> Self {
        let neighborhoods = data::NEIGHBORHOODS
            .iter()
            .map(|(name, description)| NeighborhoodProfile {
                name: (*name).to_string(),
                description: (*description).to_string(),
            })
            .collect();

        let zip_rules = data::ZIP_RULES
            .iter()
            .map(|(zip_code, candidates)| ZipRule {
                zip_code: (*zip_code).to_string(),
                candidates: candidates.iter().map(|name| (*name).to_string()).collect(),
            })
            .collect();

        let street_rules = data::STREET_RULES
            .iter()
            .map(|(street_name, ranges, neighborhood)| StreetRule {
                street_name: (*street_name).to_string(),
                ranges: ranges.to_vec(),
                neighborhood: (*neighborhood).to_string(),
            })
            .collect();

        Self {
            neighborhoods,
            zip_rules,
            street_rules,
            landmarks: keyword_rules(data::LANDMARKS),
            secondary_keywords: keyword_rules(data::SECONDARY_KEYWORDS),
        }
    }

    /// Returns the canonical spelling of a known neighborhood name.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        let wanted = normalize_for_match(name);
        self.neighborhoods
            .iter()
            .find(|profile| normalize_for_match(&profile.name) == wanted)
            .map(|profile| profile.name.as_str())
    }

    pub fn profile(&self, name: &str) -> Option<&NeighborhoodProfile> {
        let canonical = self.canonical_name(name)?;
        self.neighborhoods
            .iter()
            .find(|profile| profile.name == canonical)
    }

    /// Checks the structural invariants every resolver relies on.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut known = HashSet::new();
        for profile in &self.neighborhoods {
            if !known.insert(normalize_for_match(&profile.name)) {
                return Err(TableError::DuplicateNeighborhood(profile.name.clone()));
            }
        }

        let require_known = |rule: &str, neighborhood: &str| {
            if known.contains(&normalize_for_match(neighborhood)) {
                Ok(())
            } else {
                Err(TableError::UnknownNeighborhood {
                    rule: rule.to_string(),
                    neighborhood: neighborhood.to_string(),
                })
            }
        };

        for rule in &self.zip_rules {
            let zip = rule.zip_code.as_str();
            if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TableError::InvalidZipCode(rule.zip_code.clone()));
            }
            if rule.candidates.is_empty() {
                return Err(TableError::EmptyZipCandidates(rule.zip_code.clone()));
            }
            for candidate in &rule.candidates {
                require_known(&format!("zip {zip}"), candidate)?;
            }
        }

        let mut ranges_by_street: HashMap<String, Vec<(StreetRange, &str)>> = HashMap::new();
        for rule in &self.street_rules {
            require_known(&format!("street {}", rule.street_name), &rule.neighborhood)?;
            let seen = ranges_by_street
                .entry(street_key(&rule.street_name))
                .or_default();

            for range in &rule.ranges {
                if range.min > range.max {
                    return Err(TableError::InvertedStreetRange {
                        street: rule.street_name.clone(),
                        min: range.min,
                        max: range.max,
                    });
                }
                if let Some((_, existing)) = seen.iter().find(|(other, _)| other.overlaps(range)) {
                    return Err(TableError::OverlappingStreetRanges {
                        street: rule.street_name.clone(),
                        first: (*existing).to_string(),
                        second: rule.neighborhood.clone(),
                    });
                }
                seen.push((*range, rule.neighborhood.as_str()));
            }
        }

        for (list, rules) in [
            ("landmark", &self.landmarks),
            ("secondary keyword", &self.secondary_keywords),
        ] {
            for rule in rules {
                if rule.keyword.trim().is_empty() {
                    return Err(TableError::EmptyKeyword {
                        neighborhood: rule.neighborhood.clone(),
                    });
                }
                require_known(&format!("{list} {}", rule.keyword), &rule.neighborhood)?;
            }
        }

        Ok(())
    }
}

fn keyword_rules(source: &[(&str, &str)]) -> Vec<LandmarkRule> {
    source
        .iter()
        .map(|(keyword, neighborhood)| LandmarkRule {
            keyword: (*keyword).to_string(),
            neighborhood: (*neighborhood).to_string(),
        })
        .collect()
}

/// Reference table defects detected before a resolver is built.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("neighborhood '{0}' is listed more than once")]
    DuplicateNeighborhood(String),
    #[error("{rule} references unknown neighborhood '{neighborhood}'")]
    UnknownNeighborhood { rule: String, neighborhood: String },
    #[error("zip code '{0}' must be five digits")]
    InvalidZipCode(String),
    #[error("zip code '{0}' has no candidate neighborhoods")]
    EmptyZipCandidates(String),
    #[error("street '{street}' has inverted range {min}-{max}")]
    InvertedStreetRange { street: String, min: u32, max: u32 },
    #[error("street '{street}' has overlapping ranges for '{first}' and '{second}'")]
    OverlappingStreetRanges {
        street: String,
        first: String,
        second: String,
    },
    #[error("keyword for '{neighborhood}' is empty")]
    EmptyKeyword { neighborhood: String },
    #[error("could not build matcher for {rule}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}
