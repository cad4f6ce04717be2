use regex::{Regex, RegexBuilder};

use super::domain::VenueCandidate;

pub const FALLBACK_CATEGORY: &str = "Local Business";

const STANDARD_RULES: &[(&str, &str)] = &[
    (r"\b(coffee|cafe|espresso|tea ?house|boba)\b", "Cafes & Coffee"),
    (r"\b(bakery|bakeries|patisserie|donuts?|bagels?)\b", "Bakeries"),
    (
        r"\b(bars?|pubs?|brewer(y|ies)|cocktails?|wine ?bars?|lounge|night ?clubs?|dive ?bars?)\b",
        "Bars & Nightlife",
    ),
    (
        r"\b(restaurants?|food|pizza|sushi|ramen|taqueria|mexican|italian|chinese|thai|burgers?|dim ?sum|brunch|diner|bistro|seafood)\b",
        "Restaurants",
    ),
    (r"\b(gyms?|fitness|yoga|pilates|climbing|crossfit)\b", "Fitness"),
    (r"\b(salons?|spas?|barbers?|nails?|massage|skin ?care)\b", "Beauty & Spas"),
    (r"\b(hotels?|inn|hostels?|motel|bed and breakfast)\b", "Hotels"),
    (
        r"\b(museums?|galler(y|ies)|theat(er|re)s?|cinema|music ?venues?|arts?)\b",
        "Arts & Entertainment",
    ),
    (r"\b(dentists?|doctors?|clinic|pharmacy|urgent ?care|medical)\b", "Health & Medical"),
    (
        r"\b(shopping|boutiques?|books(tores?)?|clothing|vintage|grocer(y|ies)|markets?|florists?)\b",
        "Shopping",
    ),
    (
        r"\b(laundry|dry ?clean(ing|ers)?|plumb(er|ing)|locksmiths?|auto ?repair|movers)\b",
        "Services",
    ),
];

struct CategoryRule {
    pattern: Regex,
    category: String,
}

/// Ordered pattern table shared by every ingestion entry point.
///
/// Rules run over the candidate's tags first and its name second; the first
/// rule to match either wins.
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
}

impl CategoryClassifier {
    pub fn standard() -> Result<Self, regex::Error> {
        Self::from_rules(STANDARD_RULES.iter().copied())
    }

    /// Patterns are compiled case-insensitively.
    pub fn from_rules<'a, I>(rules: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = rules
            .into_iter()
            .map(|(pattern, category)| {
                Ok(CategoryRule {
                    pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
                    category: category.to_string(),
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    pub fn categorize(&self, candidate: &VenueCandidate) -> &str {
        let tags = candidate.tags.join(" | ");
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(&tags))
            .or_else(|| {
                self.rules
                    .iter()
                    .find(|rule| rule.pattern.is_match(&candidate.name))
            })
            .map(|rule| rule.category.as_str())
            .unwrap_or(FALLBACK_CATEGORY)
    }
}
