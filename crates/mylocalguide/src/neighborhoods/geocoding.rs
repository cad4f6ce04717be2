use super::domain::VenueAddressInput;

/// External lookup consulted only after every local rule has missed.
///
/// Implementations may call a geocoding service or a model; the resolver only
/// accepts answers naming a neighborhood from its reference tables.
pub trait GeocodingGateway: Send + Sync {
    fn neighborhood_for(&self, input: &VenueAddressInput) -> Option<String>;
}

/// Fixed answers keyed by address, for demos and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticGeocoder {
    entries: Vec<(String, String)>,
}

impl StaticGeocoder {
    pub fn with_entry(mut self, address: impl Into<String>, neighborhood: impl Into<String>) -> Self {
        self.entries.push((address.into(), neighborhood.into()));
        self
    }
}

impl GeocodingGateway for StaticGeocoder {
    fn neighborhood_for(&self, input: &VenueAddressInput) -> Option<String> {
        let address = input.address.trim();
        self.entries
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(address))
            .map(|(_, neighborhood)| neighborhood.clone())
    }
}
