use std::sync::Arc;

use tracing::debug;

use super::config::ResolverConfig;
use super::domain::{Confidence, ResolutionMethod, ResolutionResult, VenueAddressInput};
use super::geocoding::GeocodingGateway;
use super::rules::{CompiledRules, RuleHit};
use super::tables::{ReferenceTables, TableError};

/// Stateless cascade mapping a venue's name and address to a neighborhood.
///
/// Stages run in a fixed order and the first hit wins: zip, street range,
/// landmark, secondary keyword, optional geocoding, then the configured
/// default. Resolution never fails.
pub struct NeighborhoodResolver {
    tables: Arc<ReferenceTables>,
    rules: CompiledRules,
    config: ResolverConfig,
    geocoder: Option<Arc<dyn GeocodingGateway>>,
}

impl NeighborhoodResolver {
    pub fn try_new(tables: ReferenceTables, config: ResolverConfig) -> Result<Self, TableError> {
        tables.validate()?;

        let default_neighborhood = tables
            .canonical_name(&config.default_neighborhood)
            .ok_or_else(|| TableError::UnknownNeighborhood {
                rule: "default neighborhood".to_string(),
                neighborhood: config.default_neighborhood.clone(),
            })?
            .to_string();
        let rules = CompiledRules::compile(&tables)?;

        Ok(Self {
            tables: Arc::new(tables),
            rules,
            config: ResolverConfig {
                default_neighborhood,
                ..config
            },
            geocoder: None,
        })
    }

    pub fn san_francisco(config: ResolverConfig) -> Result<Self, TableError> {
        Self::try_new(ReferenceTables::san_francisco(), config)
    }

    pub fn with_geocoder(mut self, geocoder: Arc<dyn GeocodingGateway>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn default_neighborhood(&self) -> &str {
        &self.config.default_neighborhood
    }

    pub fn resolve(&self, name: &str, address: &str) -> ResolutionResult {
        let result = self.evaluate(name, address);
        debug!(
            venue = name,
            neighborhood = %result.neighborhood,
            method = %result.method,
            confidence = %result.confidence,
            "resolved neighborhood"
        );
        result
    }

    pub fn resolve_input(&self, input: &VenueAddressInput) -> ResolutionResult {
        self.resolve(&input.name, &input.address)
    }

    /// Resolves each input in order; output positions match input positions.
    pub fn resolve_batch(&self, inputs: &[VenueAddressInput]) -> Vec<ResolutionResult> {
        inputs.iter().map(|input| self.resolve_input(input)).collect()
    }

    fn evaluate(&self, name: &str, address: &str) -> ResolutionResult {
        if address.trim().is_empty() {
            return self.fallback();
        }

        if let Some(hit) = self.rules.match_zip(name, address) {
            return found(hit, ResolutionMethod::Zip);
        }

        if let Some(hit) = self.rules.match_street(address) {
            return found(hit, ResolutionMethod::Street);
        }

        if let Some(hit) = self.rules.match_landmark(name, address) {
            return found(hit, ResolutionMethod::Landmark);
        }

        if let Some(hit) = self.rules.match_secondary(name, address) {
            return found(hit, ResolutionMethod::SecondaryKeyword);
        }

        if let Some(neighborhood) = self.geocode(name, address) {
            return ResolutionResult {
                neighborhood,
                confidence: Confidence::Medium,
                method: ResolutionMethod::Geocoding,
            };
        }

        self.fallback()
    }

    fn geocode(&self, name: &str, address: &str) -> Option<String> {
        let geocoder = self.geocoder.as_ref()?;
        let answer = geocoder.neighborhood_for(&VenueAddressInput::new(name, address))?;
        match self.tables.canonical_name(&answer) {
            Some(canonical) => Some(canonical.to_string()),
            None => {
                debug!(answer = %answer, "geocoder named an unknown neighborhood");
                None
            }
        }
    }

    fn fallback(&self) -> ResolutionResult {
        ResolutionResult {
            neighborhood: self.config.default_neighborhood.clone(),
            confidence: Confidence::Low,
            method: ResolutionMethod::Default,
        }
    }
}

fn found(hit: RuleHit, method: ResolutionMethod) -> ResolutionResult {
    ResolutionResult {
        neighborhood: hit.neighborhood,
        confidence: hit.confidence,
        method,
    }
}
