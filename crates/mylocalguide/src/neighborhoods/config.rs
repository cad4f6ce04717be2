use serde::{Deserialize, Serialize};

/// Resolver settings supplied by the application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Catch-all neighborhood returned when every stage misses.
    pub default_neighborhood: String,
    pub city_id: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_neighborhood: "Union Square".to_string(),
            city_id: 1,
        }
    }
}
