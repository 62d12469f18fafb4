//! Catalog API
//!
//! Fetches the upstream list once and turns it into catalog items.

use crate::config::CatalogConfig;
use crate::error::LoadError;
use crate::models::{CatalogItem, ListingEntry, ListingResponse};

/// Fetch the full catalog: `GET <endpoint>?limit=<limit>`
pub async fn fetch_catalog(config: &CatalogConfig) -> Result<Vec<CatalogItem>, LoadError> {
    log::info!("Fetching catalog from {} (limit={})", config.endpoint, config.limit);

    let response = reqwest::Client::new()
        .get(&config.endpoint)
        .query(&[("limit", config.limit)])
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    check_status(response.status().as_u16())?;

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))?;
    let items = parse_catalog(&body, config)?;

    log::info!("Loaded {} catalog items", items.len());
    Ok(items)
}

/// Anything outside 2xx is a failure
pub fn check_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status(status))
    }
}

/// Parse a list response body into catalog items
pub fn parse_catalog(body: &str, config: &CatalogConfig) -> Result<Vec<CatalogItem>, LoadError> {
    let listing: ListingResponse = serde_json::from_str(body)?;
    Ok(normalize(listing.results, config))
}

/// Identifiers come from list position (1-based); upstream ids are ignored.
pub fn normalize(entries: Vec<ListingEntry>, config: &CatalogConfig) -> Vec<CatalogItem> {
    entries
        .into_iter()
        .zip(1u32..)
        .map(|(entry, identifier)| CatalogItem {
            identifier,
            name: entry.name,
            image_url: config.image_url(identifier),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTERS: &str = r#"{"results":[
        {"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"},
        {"name":"ivysaur","url":"https://pokeapi.co/api/v2/pokemon/2/"},
        {"name":"venusaur","url":"https://pokeapi.co/api/v2/pokemon/3/"}
    ]}"#;

    #[test]
    fn test_parse_assigns_positional_identifiers() {
        let config = CatalogConfig::default();
        let items = parse_catalog(STARTERS, &config).expect("Failed to parse");

        assert_eq!(items.len(), 3);
        assert_eq!(items.iter().map(|i| i.identifier).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(items[0].name, "bulbasaur");
        assert_eq!(items[2].name, "venusaur");
        assert!(items[0].image_url.ends_with("/1.png"));
        assert!(items[1].image_url.ends_with("/2.png"));
        assert!(items[2].image_url.ends_with("/3.png"));
    }

    #[test]
    fn test_parse_empty_results() {
        let items = parse_catalog(r#"{"results":[]}"#, &CatalogConfig::default()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_missing_results_is_body_error() {
        let err = parse_catalog(r#"{"count":0}"#, &CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Body(ref msg) if msg.contains("results")));
    }

    #[test]
    fn test_missing_name_is_body_error() {
        let err = parse_catalog(r#"{"results":[{"url":"x"}]}"#, &CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Body(_)));
    }

    #[test]
    fn test_malformed_body_is_body_error() {
        let err = parse_catalog("<html>502 Bad Gateway</html>", &CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Body(_)));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(500), Err(LoadError::Status(500)));
        assert_eq!(check_status(404), Err(LoadError::Status(404)));
        assert_eq!(check_status(301), Err(LoadError::Status(301)));
    }

    #[test]
    fn test_normalize_uses_configured_host() {
        let config = CatalogConfig {
            artwork_base: "https://img.example".to_string(),
            ..Default::default()
        };
        let entries = vec![
            ListingEntry { name: "pidgey".to_string() },
            ListingEntry { name: "rattata".to_string() },
        ];
        let items = normalize(entries, &config);
        assert_eq!(items[1].identifier, 2);
        assert_eq!(items[1].image_url, "https://img.example/2.png");
    }
}
