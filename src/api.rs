use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::errors::BotError;
use crate::model::{Listing, SetNum};

/// Minimal Rebrickable client: one GET against the alternates endpoint with
/// the API key carried in the Authorization header.
#[derive(Debug, Clone)]
pub struct RebrickableClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RebrickableClient {
    pub fn new(base_url: String, api_key: String, timeout_ms: u64) -> Result<Self, BotError> {
        let timeout = Duration::from_millis(timeout_ms.max(1));
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub async fn fetch_alternates(
        &self,
        set_num: &SetNum,
        limit: usize,
    ) -> Result<Vec<Listing>, BotError> {
        let url = self.alternates_url(set_num, limit)?;
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("key {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Network(format!(
                "Rebrickable returned status {}",
                status.as_u16()
            )));
        }

        let page: AlternatesPage = response.json().await?;
        Ok(page.results.into_iter().map(Listing::from).collect())
    }

    fn alternates_url(&self, set_num: &SetNum, limit: usize) -> Result<Url, BotError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| BotError::Config(format!("invalid base URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| BotError::Config("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["lego", "sets", set_num.as_str(), "alternates", ""]);
        url.query_pairs_mut()
            .append_pair("page_size", &limit.to_string());
        Ok(url)
    }
}

/// One page of the alternates endpoint. An absent `results` key is an empty
/// list, not an error.
#[derive(Debug, Deserialize)]
struct AlternatesPage {
    #[serde(default)]
    results: Vec<RawListing>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    designer_name: Option<String>,
    #[serde(default)]
    num_parts: Option<u32>,
    #[serde(default)]
    moc_url: Option<String>,
    #[serde(default)]
    moc_has_building_instructions: Option<bool>,
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        Listing {
            name: raw.name.unwrap_or_else(|| "Unnamed".to_string()),
            designer: raw.designer_name.unwrap_or_else(|| "Unknown".to_string()),
            num_parts: raw.num_parts,
            url: raw.moc_url.filter(|url| !url.trim().is_empty()),
            has_instructions: raw.moc_has_building_instructions.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RebrickableClient {
        RebrickableClient::new(
            "https://rebrickable.com/api/v3".to_string(),
            "secret".to_string(),
            1_000,
        )
        .unwrap()
    }

    #[test]
    fn alternates_url_has_expected_shape() {
        let set_num = SetNum::parse("77244-1").unwrap();
        let url = client().alternates_url(&set_num, 12).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rebrickable.com/api/v3/lego/sets/77244-1/alternates/?page_size=12"
        );
    }

    #[test]
    fn decode_fills_defaults_for_absent_fields() {
        let page: AlternatesPage = serde_json::from_str(r#"{"results":[{}]}"#).unwrap();
        let listing = Listing::from(page.results.into_iter().next().unwrap());
        assert_eq!(listing.name, "Unnamed");
        assert_eq!(listing.designer, "Unknown");
        assert_eq!(listing.num_parts, None);
        assert_eq!(listing.url, None);
        assert!(!listing.has_instructions);
    }

    #[test]
    fn decode_reads_populated_fields() {
        let body = r#"{
            "count": 1,
            "results": [{
                "name": "Speeder",
                "designer_name": "brickfan",
                "num_parts": 321,
                "moc_url": "https://rebrickable.com/mocs/MOC-1/",
                "moc_has_building_instructions": true
            }]
        }"#;
        let page: AlternatesPage = serde_json::from_str(body).unwrap();
        let listing = Listing::from(page.results.into_iter().next().unwrap());
        assert_eq!(listing.name, "Speeder");
        assert_eq!(listing.designer, "brickfan");
        assert_eq!(listing.num_parts, Some(321));
        assert_eq!(
            listing.url.as_deref(),
            Some("https://rebrickable.com/mocs/MOC-1/")
        );
        assert!(listing.has_instructions);
    }

    #[test]
    fn absent_results_key_is_an_empty_list() {
        let page: AlternatesPage = serde_json::from_str(r#"{"count":0}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn empty_moc_url_reads_as_none() {
        let page: AlternatesPage =
            serde_json::from_str(r#"{"results":[{"moc_url":""}]}"#).unwrap();
        let listing = Listing::from(page.results.into_iter().next().unwrap());
        assert_eq!(listing.url, None);
    }
}
