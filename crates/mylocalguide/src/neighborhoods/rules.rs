use regex::Regex;
use std::collections::HashMap;

use super::domain::Confidence;
use super::normalizer::normalize_for_match;
use super::tables::{LandmarkRule, ReferenceTables, StreetRange, TableError};

/// Neighborhood guess produced by a single evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleHit {
    pub neighborhood: String,
    pub confidence: Confidence,
}

impl RuleHit {
    fn new(neighborhood: &str, confidence: Confidence) -> Self {
        Self {
            neighborhood: neighborhood.to_string(),
            confidence,
        }
    }
}

struct StreetMatcher {
    pattern: Regex,
    ranges: Vec<StreetRange>,
    neighborhood: String,
}

struct KeywordMatcher {
    keyword: String,
    neighborhood: String,
}

/// Evaluators compiled once from validated reference tables.
pub(crate) struct CompiledRules {
    zip_pattern: Regex,
    zips: HashMap<String, Vec<String>>,
    streets: Vec<StreetMatcher>,
    landmarks: Vec<KeywordMatcher>,
    secondary: Vec<KeywordMatcher>,
}

impl CompiledRules {
    pub(crate) fn compile(tables: &ReferenceTables) -> Result<Self, TableError> {
        let zip_pattern = Regex::new(r"\b\d{5}\b").map_err(|source| {
            TableError::InvalidPattern {
                rule: "zip code".to_string(),
                source,
            }
        })?;

        let zips = tables
            .zip_rules
            .iter()
            .map(|rule| {
                let candidates = rule
                    .candidates
                    .iter()
                    .map(|candidate| canonical(tables, candidate))
                    .collect();
                (rule.zip_code.clone(), candidates)
            })
            .collect();

        let streets = tables
            .street_rules
            .iter()
            .map(|rule| {
                let pattern = Regex::new(&street_pattern(&rule.street_name)).map_err(|source| {
                    TableError::InvalidPattern {
                        rule: format!("street {}", rule.street_name),
                        source,
                    }
                })?;
                Ok(StreetMatcher {
                    pattern,
                    ranges: rule.ranges.clone(),
                    neighborhood: canonical(tables, &rule.neighborhood),
                })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        Ok(Self {
            zip_pattern,
            zips,
            streets,
            landmarks: keyword_matchers(tables, &tables.landmarks),
            secondary: keyword_matchers(tables, &tables.secondary_keywords),
        })
    }

    /// First mapped five-digit token decides. Ambiguous zips are narrowed by
    /// landmarks among their candidates, else the first candidate.
    pub(crate) fn match_zip(&self, name: &str, address: &str) -> Option<RuleHit> {
        let candidates = self
            .zip_pattern
            .find_iter(address)
            .find_map(|token| self.zips.get(token.as_str()))?;

        match candidates.as_slice() {
            [] => None,
            [only] => Some(RuleHit::new(only, Confidence::High)),
            [first, ..] => {
                let name = normalize_for_match(name);
                let address = normalize_for_match(address);
                let narrowed = self
                    .landmarks
                    .iter()
                    .filter(|landmark| candidates.contains(&landmark.neighborhood))
                    .find(|landmark| landmark.matches(&name, &address))
                    .map(|landmark| landmark.neighborhood.as_str());
                Some(RuleHit::new(
                    narrowed.unwrap_or(first.as_str()),
                    Confidence::Medium,
                ))
            }
        }
    }

    pub(crate) fn match_street(&self, address: &str) -> Option<RuleHit> {
        self.streets.iter().find_map(|street| {
            let number = street
                .pattern
                .captures_iter(address)
                .filter_map(|captures| captures.get(1)?.as_str().parse::<u32>().ok())
                .find(|number| street.ranges.iter().any(|range| range.contains(*number)))?;
            tracing::trace!(number, neighborhood = %street.neighborhood, "street range hit");
            Some(RuleHit::new(&street.neighborhood, Confidence::High))
        })
    }

    pub(crate) fn match_landmark(&self, name: &str, address: &str) -> Option<RuleHit> {
        first_keyword_hit(&self.landmarks, name, address)
    }

    pub(crate) fn match_secondary(&self, name: &str, address: &str) -> Option<RuleHit> {
        first_keyword_hit(&self.secondary, name, address)
    }
}

impl KeywordMatcher {
    /// Expects both inputs already normalized.
    fn matches(&self, name: &str, address: &str) -> bool {
        address.contains(&self.keyword) || name.contains(&self.keyword)
    }
}

fn first_keyword_hit(matchers: &[KeywordMatcher], name: &str, address: &str) -> Option<RuleHit> {
    let address = normalize_for_match(address);
    let name = normalize_for_match(name);
    matchers
        .iter()
        .find(|matcher| matcher.matches(&name, &address))
        .map(|matcher| RuleHit::new(&matcher.neighborhood, Confidence::Medium))
}

fn keyword_matchers(tables: &ReferenceTables, rules: &[LandmarkRule]) -> Vec<KeywordMatcher> {
    rules
        .iter()
        .map(|rule| KeywordMatcher {
            keyword: normalize_for_match(&rule.keyword),
            neighborhood: canonical(tables, &rule.neighborhood),
        })
        .collect()
}

/// Table spelling of a neighborhood name. Validated tables always know it.
fn canonical(tables: &ReferenceTables, neighborhood: &str) -> String {
    tables
        .canonical_name(neighborhood)
        .unwrap_or(neighborhood)
        .to_string()
}

/// Splits a street name into its base words and, when the last word is a
/// known suffix, that suffix's spelling family.
fn split_street(street_name: &str) -> (Vec<&str>, Option<&'static str>) {
    let words: Vec<&str> = street_name.split_whitespace().collect();
    if let Some((last, rest)) = words.split_last() {
        if !rest.is_empty() {
            if let Some(variants) = suffix_variants(last) {
                return (rest.to_vec(), Some(variants));
            }
        }
    }
    (words, None)
}

/// Identity of a street as the matcher sees it, so `California St` and
/// `california street` share one key.
pub(crate) fn street_key(street_name: &str) -> String {
    let (base, suffix) = split_street(street_name);
    let mut key = base
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(variants) = suffix {
        key.push(' ');
        key.push_str(variants);
    }
    key
}

/// Builds `<number> <street words> <suffix>` with whitespace and suffix
/// spelling tolerance, capturing the number.
fn street_pattern(street_name: &str) -> String {
    let (base, suffix) = split_street(street_name);

    let mut pattern = String::from(r"(?i)\b(\d{1,5})\s+");
    pattern.push_str(
        &base
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join(r"\s+"),
    );
    if let Some(variants) = suffix {
        pattern.push_str(r"\s+(?:");
        pattern.push_str(variants);
        pattern.push(')');
    }
    pattern.push_str(r"\b");
    pattern
}

fn suffix_variants(suffix: &str) -> Option<&'static str> {
    let variants = match suffix.trim_end_matches('.').to_ascii_lowercase().as_str() {
        "st" | "street" => "street|st",
        "ave" | "avenue" => "avenue|ave",
        "blvd" | "boulevard" => "boulevard|blvd",
        "rd" | "road" => "road|rd",
        "dr" | "drive" => "drive|dr",
        "way" => "way",
        "pl" | "place" => "place|pl",
        _ => return None,
    };
    Some(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhoods::tables::ZipRule;

    fn rules() -> CompiledRules {
        CompiledRules::compile(&ReferenceTables::san_francisco()).expect("rules compile")
    }

    #[test]
    fn street_pattern_tolerates_spacing_and_suffix_spelling() {
        let rules = rules();
        for address in [
            "700 California St, San Francisco",
            "700   california   street",
            "700 CALIFORNIA ST.",
        ] {
            let hit = rules.match_street(address).expect("street matches");
            assert_eq!(hit.neighborhood, "Nob Hill", "address {address}");
            assert_eq!(hit.confidence, Confidence::High);
        }
    }

    #[test]
    fn street_pattern_keeps_suffixes_distinct() {
        let rules = rules();
        let hit = rules.match_street("1600 Geary Blvd").expect("boulevard matches");
        assert_eq!(hit.neighborhood, "Japantown");
        assert!(rules.match_street("1600 Geary St").is_none());
    }

    #[test]
    fn street_number_must_precede_street_name() {
        let rules = rules();
        assert!(rules.match_street("California St near Polk").is_none());
        assert!(rules.match_street("3599 23rd St").is_none());
    }

    #[test]
    fn zip_skips_unmapped_tokens() {
        let rules = rules();
        let hit = rules
            .match_zip("Cafe", "12345 Somewhere Rd, San Francisco, CA 94123")
            .expect("second token maps");
        assert_eq!(hit.neighborhood, "Marina District");
        assert!(rules.match_zip("Cafe", "1 Main St, Oakland, CA 94607").is_none());
        assert!(rules.match_zip("Cafe", "Suite 941100").is_none());
    }

    #[test]
    fn ambiguous_zip_ignores_landmarks_outside_candidates() {
        let rules = rules();
        let hit = rules
            .match_zip("Coit Tower Deli", "10 Unnamed Alley, San Francisco, CA 94117")
            .expect("zip maps");
        assert_eq!(hit.neighborhood, "Haight-Ashbury");
        assert_eq!(hit.confidence, Confidence::Medium);
    }

    #[test]
    fn landmark_checks_name_as_well_as_address() {
        let rules = rules();
        let hit = rules
            .match_landmark("Ghirardelli Chocolate", "900 North Point")
            .expect("name matches");
        assert_eq!(hit.neighborhood, "Fisherman's Wharf");
    }

    #[test]
    fn rule_neighborhoods_use_the_table_spelling() {
        let mut tables = ReferenceTables::san_francisco();
        tables.zip_rules.push(ZipRule {
            zip_code: "94199".to_string(),
            candidates: vec!["North Beach".to_string(), "Chinatown".to_string()],
        });
        tables.landmarks.push(LandmarkRule {
            keyword: "PORTSMOUTH SQUARE".to_string(),
            neighborhood: "chinatown".to_string(),
        });
        tables.validate().expect("tables validate");
        let rules = CompiledRules::compile(&tables).expect("rules compile");

        let tiebreak = rules
            .match_zip("Cafe", "Portsmouth Square, San Francisco, CA 94199")
            .expect("zip maps");
        assert_eq!(tiebreak.neighborhood, "Chinatown");
        assert_eq!(tiebreak.confidence, Confidence::Medium);

        let landmark = rules
            .match_landmark("Cafe", "Portsmouth Square")
            .expect("landmark matches");
        assert_eq!(landmark.neighborhood, "Chinatown");
    }

    #[test]
    fn street_key_folds_suffix_spellings() {
        assert_eq!(street_key("California St"), street_key("california  STREET"));
        assert_eq!(street_key("California St"), street_key("CALIFORNIA ST."));
        assert_ne!(street_key("Geary St"), street_key("Geary Blvd"));
        assert_eq!(street_key("Broadway"), "broadway");
    }
}
