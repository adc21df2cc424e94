use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use business::domain::supermarket::errors::SupermarketError;
use business::domain::supermarket::model::{Coordinates, Supermarket};
use business::domain::supermarket::services::SupermarketFinderService;

use crate::client::OverpassClient;

const UNKNOWN_NAME: &str = "Unknown";
const NO_ADDRESS: &str = "No address information available";

#[derive(Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Deserialize)]
struct OverpassElement {
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: HashMap<String, String>,
}

pub struct SupermarketFinderOverpass {
    client: OverpassClient,
}

impl SupermarketFinderOverpass {
    pub fn new(client: OverpassClient) -> Self {
        Self { client }
    }

    fn build_query(location: Coordinates, radius_meters: u32) -> String {
        format!(
            r#"[out:json];(node["shop"="supermarket"](around:{},{},{}););out body;"#,
            radius_meters, location.latitude, location.longitude
        )
    }

    fn format_address(tags: &HashMap<String, String>) -> String {
        if let Some(full) = tags.get("addr:full").filter(|a| !a.trim().is_empty()) {
            return full.clone();
        }

        let street = tags.get("addr:street").map(|s| s.trim()).unwrap_or("");
        let number = tags.get("addr:housenumber").map(|s| s.trim()).unwrap_or("");
        match (street.is_empty(), number.is_empty()) {
            (false, false) => format!("{} {}", street, number),
            (false, true) => street.to_string(),
            _ => NO_ADDRESS.to_string(),
        }
    }

    fn into_supermarkets(response: OverpassResponse) -> Vec<Supermarket> {
        response
            .elements
            .into_iter()
            .map(|element| Supermarket {
                name: element
                    .tags
                    .get("name")
                    .filter(|n| !n.trim().is_empty())
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                address: Self::format_address(&element.tags),
                latitude: element.lat,
                longitude: element.lon,
            })
            .collect()
    }
}

#[async_trait]
impl SupermarketFinderService for SupermarketFinderOverpass {
    async fn find_nearby(
        &self,
        location: Coordinates,
        radius_meters: u32,
    ) -> Result<Vec<Supermarket>, SupermarketError> {
        let query = Self::build_query(location, radius_meters);

        let response = self
            .client
            .client
            .post(self.client.interpreter_url())
            .body(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Overpass request failed");
                SupermarketError::UpstreamFailure
            })?;

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "Overpass returned an error status");
            return Err(SupermarketError::UpstreamFailure);
        }

        let data: OverpassResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Overpass response could not be decoded");
            SupermarketError::UpstreamFailure
        })?;

        Ok(Self::into_supermarkets(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<Supermarket> {
        let response: OverpassResponse = serde_json::from_str(raw).unwrap();
        SupermarketFinderOverpass::into_supermarkets(response)
    }

    #[test]
    fn should_build_around_query() {
        let location = Coordinates {
            latitude: 40.4168,
            longitude: -3.7038,
        };

        let query = SupermarketFinderOverpass::build_query(location, 500);

        assert_eq!(
            query,
            r#"[out:json];(node["shop"="supermarket"](around:500,40.4168,-3.7038););out body;"#
        );
    }

    #[test]
    fn should_map_named_element_with_full_address() {
        let supermarkets = parse(
            r#"{"elements":[{"type":"node","id":1,"lat":40.41,"lon":-3.70,
                "tags":{"name":"Mercado Central","addr:full":"Calle Mayor 1","shop":"supermarket"}}]}"#,
        );

        assert_eq!(supermarkets.len(), 1);
        assert_eq!(supermarkets[0].name, "Mercado Central");
        assert_eq!(supermarkets[0].address, "Calle Mayor 1");
        assert_eq!(supermarkets[0].latitude, 40.41);
        assert_eq!(supermarkets[0].longitude, -3.70);
    }

    #[test]
    fn should_compose_address_from_street_and_number() {
        let supermarkets = parse(
            r#"{"elements":[{"lat":1.0,"lon":2.0,
                "tags":{"name":"Corner Shop","addr:street":"High Street","addr:housenumber":"12"}}]}"#,
        );

        assert_eq!(supermarkets[0].address, "High Street 12");
    }

    #[test]
    fn should_fall_back_for_missing_name_and_address() {
        let supermarkets = parse(r#"{"elements":[{"lat":1.0,"lon":2.0,"tags":{}}]}"#);

        assert_eq!(supermarkets[0].name, "Unknown");
        assert_eq!(supermarkets[0].address, "No address information available");
    }

    #[test]
    fn should_tolerate_elements_without_tags() {
        let supermarkets = parse(r#"{"elements":[{"lat":1.0,"lon":2.0}]}"#);

        assert_eq!(supermarkets[0].name, "Unknown");
    }

    #[test]
    fn should_return_empty_list_when_no_elements() {
        assert!(parse(r#"{"elements":[]}"#).is_empty());
        assert!(parse(r#"{}"#).is_empty());
    }
}
