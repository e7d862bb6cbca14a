// SPDX-License-Identifier: MPL-2.0
//! Best-effort country lookup from the visitor's IP address.

use crate::config::LocalizationConfig;
use crate::error::NetworkError;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Something that can tell which country the visitor is in.
pub trait GeoLocator {
    /// Returns an ISO 3166-1 alpha-2 country code such as `BR`.
    fn country_code(&self) -> impl Future<Output = Result<String, NetworkError>> + Send;
}

/// Maps a country code to the language the site should use there.
///
/// Countries without an explicit entry get English.
#[must_use]
pub fn country_to_language(country_code: &str) -> &'static str {
    match country_code.trim().to_ascii_uppercase().as_str() {
        "US" | "GB" | "CA" | "AU" => "en",
        "BR" | "PT" => "pt",
        _ => "en",
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    country_code: Option<String>,
}

/// Queries an ipapi.co style JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: reqwest::Client,
    endpoint: String,
    enabled: bool,
}

impl IpApiLocator {
    pub fn new(config: &LocalizationConfig) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.geo_timeout_ms))
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.geo_endpoint.clone(),
            enabled: config.geo_lookup,
        })
    }
}

impl GeoLocator for IpApiLocator {
    async fn country_code(&self) -> Result<String, NetworkError> {
        if !self.enabled {
            return Err(NetworkError::Disabled);
        }

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NetworkError::Status(response.status().as_u16()));
        }

        let body: GeoResponse = response
            .json()
            .await
            .map_err(|e| NetworkError::MalformedResponse(e.to_string()))?;

        body.country_code
            .filter(|code| !code.trim().is_empty())
            .ok_or_else(|| NetworkError::MalformedResponse("missing country_code".to_string()))
    }
}

/// A locator that never answers, for offline use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeoLocator;

impl GeoLocator for NoGeoLocator {
    async fn country_code(&self) -> Result<String, NetworkError> {
        Err(NetworkError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_speaking_countries_map_to_en() {
        for code in ["US", "GB", "CA", "AU"] {
            assert_eq!(country_to_language(code), "en");
        }
    }

    #[test]
    fn portuguese_speaking_countries_map_to_pt() {
        assert_eq!(country_to_language("BR"), "pt");
        assert_eq!(country_to_language("PT"), "pt");
        assert_eq!(country_to_language(" br "), "pt");
    }

    #[test]
    fn other_countries_fall_back_to_english() {
        assert_eq!(country_to_language("FR"), "en");
        assert_eq!(country_to_language(""), "en");
    }

    /// Serves `body` with `status` on an ephemeral local port.
    async fn serve_once(status: u16, body: &'static str) -> String {
        use axum::{http::StatusCode, routing::get, Router};

        let app = Router::new().route(
            "/json/",
            get(move || async move {
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::OK),
                    [("content-type", "application/json")],
                    body,
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/json/")
    }

    fn locator_for(endpoint: String) -> IpApiLocator {
        let config = LocalizationConfig {
            geo_endpoint: endpoint,
            ..LocalizationConfig::default()
        };
        IpApiLocator::new(&config).expect("client builds")
    }

    #[tokio::test]
    async fn reads_country_code_from_json() {
        let endpoint = serve_once(200, r#"{"ip":"1.2.3.4","country_code":"BR"}"#).await;
        assert_eq!(locator_for(endpoint).country_code().await, Ok("BR".to_string()));
    }

    #[tokio::test]
    async fn missing_country_code_is_malformed() {
        let endpoint = serve_once(200, r#"{"ip":"1.2.3.4"}"#).await;
        assert!(matches!(
            locator_for(endpoint).country_code().await,
            Err(NetworkError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let endpoint = serve_once(200, "rate limited").await;
        assert!(matches!(
            locator_for(endpoint).country_code().await,
            Err(NetworkError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let endpoint = serve_once(429, "{}").await;
        assert_eq!(
            locator_for(endpoint).country_code().await,
            Err(NetworkError::Status(429))
        );
    }

    #[tokio::test]
    async fn disabled_locator_never_sends() {
        let config = LocalizationConfig {
            geo_lookup: false,
            ..LocalizationConfig::default()
        };
        let locator = IpApiLocator::new(&config).expect("client builds");
        assert_eq!(locator.country_code().await, Err(NetworkError::Disabled));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let config = LocalizationConfig {
            geo_endpoint: "http://127.0.0.1:9/json/".to_string(),
            geo_timeout_ms: 500,
            ..LocalizationConfig::default()
        };
        let locator = IpApiLocator::new(&config).expect("client builds");
        assert!(matches!(
            locator.country_code().await,
            Err(NetworkError::Request(_))
        ));
    }

    #[tokio::test]
    async fn no_geo_locator_is_disabled() {
        assert_eq!(NoGeoLocator.country_code().await, Err(NetworkError::Disabled));
    }
}
