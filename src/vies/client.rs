//! Async client for the EU VIES REST API.

use std::time::Duration;

use crate::core::CountryCode;

use super::config::ViesConfig;
use super::error::ViesError;
use super::retry::retry_send;
use super::types::{
    CheckVatRequest, ServiceStatus, StatusApiResponse, ViesApiResponse, ViesRequest, ViesResult,
};

/// Client for the VIES REST API.
///
/// Holds a pooled `reqwest::Client`; clone it or share it behind an `Arc`
/// rather than building one per request.
#[derive(Debug, Clone)]
pub struct ViesClient {
    http: reqwest::Client,
    config: ViesConfig,
}

impl ViesClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// `ViesError::Network` if the HTTP client cannot be constructed
    /// (e.g. no TLS backend available).
    pub fn new(config: ViesConfig) -> Result<Self, ViesError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ViesError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ViesConfig {
        &self.config
    }

    /// Check a VAT number against VIES.
    ///
    /// `vat_number` is the number part without the country prefix;
    /// separators are stripped before sending.
    ///
    /// # Errors
    ///
    /// `ViesError::UnsupportedCountry` for `GB` and `EU` (no request is sent),
    /// `ViesError::Network` on connection issues,
    /// `ViesError::ApiError` if VIES or the member state reports an error,
    /// `ViesError::ParseError` on unexpected response formats.
    pub async fn check_vat(
        &self,
        country: CountryCode,
        vat_number: &str,
    ) -> Result<ViesResult, ViesError> {
        self.check_vat_with(&CheckVatRequest::new(country, vat_number))
            .await
    }

    /// Check a VAT number with requester and trader details.
    ///
    /// With a requester, VIES issues a consultation number
    /// ([`ViesResult::identifier`]); with trader details, the member state
    /// reports a [`TraderMatch`](super::TraderMatch) per field.
    ///
    /// # Errors
    ///
    /// Same as [`check_vat`](Self::check_vat); the requester's country must
    /// be served by VIES too.
    pub async fn check_vat_with(&self, request: &CheckVatRequest) -> Result<ViesResult, ViesError> {
        ensure_member(request.country)?;
        if let Some((requester, _)) = &request.requester {
            ensure_member(*requester)?;
        }

        let body = ViesRequest::from(request);
        let url = format!("{}/check-vat-number", self.config.base_url);
        tracing::debug!(
            country = body.country_code,
            vat_number = %body.vat_number,
            "checking VAT number with VIES"
        );

        let resp = retry_send(self.config.max_retries, || {
            self.http.post(&url).json(&body).send()
        })
        .await
        .map_err(|e| ViesError::Network(e.to_string()))?;

        let text = read_success_body(resp).await?;
        let api_resp: ViesApiResponse = serde_json::from_str(&text)
            .map_err(|e: serde_json::Error| ViesError::ParseError(e.to_string()))?;
        let result = api_resp.into_result(&body)?;

        tracing::debug!(
            country = body.country_code,
            valid = result.valid,
            "VIES answered"
        );
        Ok(result)
    }

    /// Availability of VIES and of each member state's register.
    ///
    /// # Errors
    ///
    /// `ViesError::Network`, `ViesError::ApiError` or `ViesError::ParseError`
    /// as for [`check_vat`](Self::check_vat).
    pub async fn service_status(&self) -> Result<ServiceStatus, ViesError> {
        let url = format!("{}/check-status", self.config.base_url);
        let resp = retry_send(self.config.max_retries, || self.http.get(&url).send())
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let text = read_success_body(resp).await?;
        let status: StatusApiResponse = serde_json::from_str(&text)
            .map_err(|e: serde_json::Error| ViesError::ParseError(e.to_string()))?;
        Ok(status.into())
    }

    /// Heartbeat: `true` if VIES reports itself available.
    pub async fn is_service_available(&self) -> bool {
        match self.service_status().await {
            Ok(status) => status.available,
            Err(e) => {
                tracing::debug!("VIES status check failed: {e}");
                false
            }
        }
    }
}

fn ensure_member(country: CountryCode) -> Result<(), ViesError> {
    if country.is_vies_member() {
        Ok(())
    } else {
        Err(ViesError::UnsupportedCountry(country.as_str().into()))
    }
}

/// Read the body of a response, turning non-2xx statuses into `ApiError`.
///
/// VIES also answers 4xx/5xx with `errorWrappers`; their message is
/// preferred over the raw body.
async fn read_success_body(resp: reqwest::Response) -> Result<String, ViesError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ViesError::Network(e.to_string()))?;

    if status.is_success() {
        return Ok(body);
    }

    let api_error = serde_json::from_str::<ViesApiResponse>(&body)
        .ok()
        .and_then(|r| r.api_error());
    Err(api_error.unwrap_or_else(|| ViesError::ApiError(format!("HTTP {status}: {body}"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> ViesClient {
        // Nothing listens on port 1; any request would fail with Network.
        let config = ViesConfig::default()
            .with_base_url("http://127.0.0.1:1")
            .with_max_retries(0);
        ViesClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn non_member_fails_without_request() {
        let client = offline_client();
        let err = client.check_vat(CountryCode::Gb, "980780684").await.unwrap_err();
        assert_eq!(err, ViesError::UnsupportedCountry("GB".into()));

        let err = client.check_vat(CountryCode::Eu, "372009975").await.unwrap_err();
        assert_eq!(err, ViesError::UnsupportedCountry("EU".into()));
    }

    #[tokio::test]
    async fn non_member_requester_rejected() {
        let client = offline_client();
        let request =
            CheckVatRequest::new(CountryCode::De, "111111125").requester(CountryCode::Gb, "1");
        let err = client.check_vat_with(&request).await.unwrap_err();
        assert_eq!(err, ViesError::UnsupportedCountry("GB".into()));
    }

    #[tokio::test]
    async fn unreachable_service_is_network_error() {
        let client = offline_client();
        let err = client.check_vat(CountryCode::De, "111111125").await.unwrap_err();
        assert!(matches!(err, ViesError::Network(_)), "got {err:?}");
        assert!(!client.is_service_available().await);
    }
}
