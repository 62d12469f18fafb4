//! Catalog Configuration
//!
//! Upstream endpoint and image host.

const DEFAULT_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";
const DEFAULT_LIMIT: u32 = 1024;
const DEFAULT_ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// List endpoint, queried with `?limit=`
    pub endpoint: String,
    /// Maximum number of entries requested
    pub limit: u32,
    /// Image host prefix, without trailing slash
    pub artwork_base: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            artwork_base: DEFAULT_ARTWORK_BASE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Image URL for an identifier
    pub fn image_url(&self, identifier: u32) -> String {
        format!("{}/{}.png", self.artwork_base.trim_end_matches('/'), identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_url() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.image_url(25),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
        );
    }

    #[test]
    fn test_image_url_ignores_trailing_slash() {
        let config = CatalogConfig {
            artwork_base: "https://img.example/art/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.image_url(1), "https://img.example/art/1.png");
    }
}
