//! Request and result types of the VIES client, and their wire shapes.

use serde::{Deserialize, Serialize};

use crate::core::{CountryCode, normalize};

use super::error::ViesError;

/// Result of a VIES VAT number check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesResult {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Country code as echoed by VIES.
    pub country_code: String,
    /// VAT number as echoed by VIES, without prefix.
    pub vat_number: String,
    /// Timestamp of the request, as reported by VIES.
    pub request_date: Option<String>,
    /// Consultation number. Only issued when a requester was given.
    pub identifier: Option<String>,
    /// Registered company name (if the member state discloses it).
    pub name: Option<String>,
    /// Registered address (if the member state discloses it).
    pub address: Option<String>,
    /// Outcome of matching the trader details sent with the request.
    pub trader_matches: TraderMatches,
}

/// How VIES judged one submitted trader detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TraderMatch {
    Valid,
    Invalid,
    NotProcessed,
}

impl TraderMatch {
    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "VALID" => Some(Self::Valid),
            "INVALID" => Some(Self::Invalid),
            "NOT_PROCESSED" => Some(Self::NotProcessed),
            _ => None,
        }
    }
}

/// Per-field trader matching results; `None` where nothing was sent or
/// the member state gave no answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderMatches {
    pub name: Option<TraderMatch>,
    pub company_type: Option<TraderMatch>,
    pub street: Option<TraderMatch>,
    pub postal_code: Option<TraderMatch>,
    pub city: Option<TraderMatch>,
}

/// Trader details to be matched against the member state's register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderDetails {
    pub name: Option<String>,
    pub company_type: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
}

/// A VAT number check with optional requester and trader matching.
///
/// ```
/// use euvat::CountryCode;
/// use euvat::vies::CheckVatRequest;
///
/// let request = CheckVatRequest::new(CountryCode::Nl, "010000446B01")
///     .requester(CountryCode::De, "111111125")
///     .trader_name("Acme B.V.")
///     .trader_city("Amsterdam");
/// assert_eq!(request.trader.city.as_deref(), Some("Amsterdam"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckVatRequest {
    pub country: CountryCode,
    pub vat_number: String,
    /// The VAT ID of whoever is asking; required for a consultation number.
    pub requester: Option<(CountryCode, String)>,
    pub trader: TraderDetails,
}

impl CheckVatRequest {
    pub fn new(country: CountryCode, vat_number: impl Into<String>) -> Self {
        Self {
            country,
            vat_number: vat_number.into(),
            requester: None,
            trader: TraderDetails::default(),
        }
    }

    pub fn requester(mut self, country: CountryCode, vat_number: impl Into<String>) -> Self {
        self.requester = Some((country, vat_number.into()));
        self
    }

    pub fn trader_name(mut self, name: impl Into<String>) -> Self {
        self.trader.name = Some(name.into());
        self
    }

    pub fn trader_company_type(mut self, company_type: impl Into<String>) -> Self {
        self.trader.company_type = Some(company_type.into());
        self
    }

    pub fn trader_street(mut self, street: impl Into<String>) -> Self {
        self.trader.street = Some(street.into());
        self
    }

    pub fn trader_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.trader.postal_code = Some(postal_code.into());
        self
    }

    pub fn trader_city(mut self, city: impl Into<String>) -> Self {
        self.trader.city = Some(city.into());
        self
    }
}

/// Availability of VIES and of each member state's backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Whether the central VIES service answers.
    pub available: bool,
    pub countries: Vec<MemberStateStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStateStatus {
    pub country: CountryCode,
    pub available: bool,
}

impl ServiceStatus {
    /// Whether VIES and the given member state's register both answer.
    pub fn is_member_state_available(&self, country: CountryCode) -> bool {
        self.available
            && self
                .countries
                .iter()
                .any(|s| s.country == country && s.available)
    }
}

// ── Wire format ─────────────────────────────────────────────────────────────

/// VIES API request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ViesRequest<'a> {
    pub(crate) country_code: &'static str,
    pub(crate) vat_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    requester_member_state_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requester_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trader_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trader_company_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trader_street: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trader_postal_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trader_city: Option<&'a str>,
}

impl<'a> From<&'a CheckVatRequest> for ViesRequest<'a> {
    fn from(request: &'a CheckVatRequest) -> Self {
        let trader = &request.trader;
        Self {
            country_code: request.country.as_str(),
            vat_number: normalize(&request.vat_number),
            requester_member_state_code: request.requester.as_ref().map(|(c, _)| c.as_str()),
            requester_number: request.requester.as_ref().map(|(_, n)| normalize(n)),
            trader_name: trader.name.as_deref(),
            trader_company_type: trader.company_type.as_deref(),
            trader_street: trader.street.as_deref(),
            trader_postal_code: trader.postal_code.as_deref(),
            trader_city: trader.city.as_deref(),
        }
    }
}

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ViesApiResponse {
    country_code: Option<String>,
    vat_number: Option<String>,
    valid: Option<bool>,
    request_date: Option<String>,
    request_identifier: Option<String>,
    name: Option<String>,
    address: Option<String>,
    trader_name_match: Option<String>,
    trader_company_type_match: Option<String>,
    trader_street_match: Option<String>,
    trader_postal_code_match: Option<String>,
    trader_city_match: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

impl ViesErrorWrapper {
    pub(crate) fn describe(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "unknown error".into())
    }
}

impl ViesApiResponse {
    /// The first API-level error, if VIES reported any.
    pub(crate) fn api_error(&self) -> Option<ViesError> {
        self.error_wrappers
            .as_ref()
            .and_then(|errors| errors.first())
            .map(|err| ViesError::ApiError(err.describe()))
    }

    pub(crate) fn into_result(self, request: &ViesRequest<'_>) -> Result<ViesResult, ViesError> {
        if let Some(err) = self.api_error() {
            return Err(err);
        }

        let matched = |value: Option<String>| value.as_deref().and_then(TraderMatch::from_wire);
        Ok(ViesResult {
            valid: self.valid.unwrap_or(false),
            country_code: self
                .country_code
                .unwrap_or_else(|| request.country_code.to_string()),
            vat_number: self
                .vat_number
                .unwrap_or_else(|| request.vat_number.clone()),
            request_date: self.request_date,
            identifier: disclosed(self.request_identifier),
            name: disclosed(self.name),
            address: disclosed(self.address),
            trader_matches: TraderMatches {
                name: matched(self.trader_name_match),
                company_type: matched(self.trader_company_type_match),
                street: matched(self.trader_street_match),
                postal_code: matched(self.trader_postal_code_match),
                city: matched(self.trader_city_match),
            },
        })
    }
}

/// VIES writes `---` for details a member state does not disclose.
fn disclosed(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "---" && !v.trim().is_empty())
}

/// `GET /check-status` response.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusApiResponse {
    vow: Option<VowStatus>,
    #[serde(default)]
    countries: Vec<CountryStatus>,
}

#[derive(Debug, Deserialize)]
struct VowStatus {
    available: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryStatus {
    country_code: String,
    availability: String,
}

impl From<StatusApiResponse> for ServiceStatus {
    fn from(resp: StatusApiResponse) -> Self {
        // Codes VIES knows but this crate does not are dropped.
        let countries = resp
            .countries
            .into_iter()
            .filter_map(|c| {
                let country = c.country_code.parse().ok()?;
                Some(MemberStateStatus {
                    country,
                    available: c.availability.eq_ignore_ascii_case("available"),
                })
            })
            .collect();
        ServiceStatus {
            available: resp.vow.is_some_and(|v| v.available),
            countries,
        }
    }
}
