//! Endpoint resolution: region or explicit URL to a base URL.
//!
//! # Design
//! A service endpoint is a URL template with `{region}` and
//! `{secondLevelDomain}` placeholders plus an API version suffix. The second
//! level domain comes from the realm the region belongs to. Resolution is a
//! pure function of its inputs, so the same region always yields the same
//! base URL for a given service.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub template: &'static str,
    pub api_version: &'static str,
}

/// Database Management, shared by the managed database, diagnosability and
/// SQL tuning clients.
pub const DATABASE_MANAGEMENT: ServiceEndpoint = ServiceEndpoint {
    template: "https://dbmgmt.{region}.oci.{secondLevelDomain}",
    api_version: "/20201101",
};

pub const SERVICE_MANAGER_PROXY: ServiceEndpoint = ServiceEndpoint {
    template: "https://service-manager-proxy.{region}.oci.{secondLevelDomain}",
    api_version: "/20210914",
};

/// (realm, second level domain)
const REALMS: &[(&str, &str)] = &[
    ("oc1", "oraclecloud.com"),
    ("oc2", "oraclegovcloud.com"),
    ("oc3", "oraclegovcloud.com"),
    ("oc4", "oraclegovcloud.uk"),
    ("oc8", "oraclecloud8.com"),
];

/// (short code, region identifier, realm)
const REGIONS: &[(&str, &str, &str)] = &[
    ("iad", "us-ashburn-1", "oc1"),
    ("phx", "us-phoenix-1", "oc1"),
    ("sjc", "us-sanjose-1", "oc1"),
    ("ord", "us-chicago-1", "oc1"),
    ("yyz", "ca-toronto-1", "oc1"),
    ("yul", "ca-montreal-1", "oc1"),
    ("gru", "sa-saopaulo-1", "oc1"),
    ("fra", "eu-frankfurt-1", "oc1"),
    ("ams", "eu-amsterdam-1", "oc1"),
    ("zrh", "eu-zurich-1", "oc1"),
    ("lhr", "uk-london-1", "oc1"),
    ("cwl", "uk-cardiff-1", "oc1"),
    ("bom", "ap-mumbai-1", "oc1"),
    ("hyd", "ap-hyderabad-1", "oc1"),
    ("nrt", "ap-tokyo-1", "oc1"),
    ("kix", "ap-osaka-1", "oc1"),
    ("icn", "ap-seoul-1", "oc1"),
    ("syd", "ap-sydney-1", "oc1"),
    ("mel", "ap-melbourne-1", "oc1"),
    ("sin", "ap-singapore-1", "oc1"),
    ("jed", "me-jeddah-1", "oc1"),
    ("dxb", "me-dubai-1", "oc1"),
    ("lfi", "us-langley-1", "oc2"),
    ("luf", "us-luke-1", "oc2"),
    ("ric", "us-gov-ashburn-1", "oc3"),
    ("pia", "us-gov-chicago-1", "oc3"),
    ("tus", "us-gov-phoenix-1", "oc3"),
    ("ltn", "uk-gov-london-1", "oc4"),
    ("brs", "uk-gov-cardiff-1", "oc4"),
    ("nja", "ap-chiyoda-1", "oc8"),
    ("ukb", "ap-ibaraki-1", "oc8"),
];

/// Normalize a region identifier or short code, e.g. `IAD` to `us-ashburn-1`.
/// Unknown identifiers are returned lowercased.
pub fn canonical_region(region: &str) -> String {
    let region = region.trim().to_ascii_lowercase();
    REGIONS
        .iter()
        .find(|(code, _, _)| *code == region)
        .map_or(region, |(_, id, _)| (*id).to_string())
}

/// Second level domain of the region's realm; unknown regions use oc1.
pub fn second_level_domain(region: &str) -> &'static str {
    let region = canonical_region(region);
    let realm = REGIONS
        .iter()
        .find(|(_, id, _)| *id == region)
        .map_or("oc1", |(_, _, realm)| *realm);
    REALMS
        .iter()
        .find(|(r, _)| *r == realm)
        .map_or("oraclecloud.com", |(_, domain)| *domain)
}

impl ServiceEndpoint {
    /// Base URL for `region`, including the API version suffix.
    pub fn for_region(&self, region: &str) -> String {
        let region_id = canonical_region(region);
        let host = self
            .template
            .replace("{region}", &region_id)
            .replace("{secondLevelDomain}", second_level_domain(&region_id));
        format!("{host}{}", self.api_version)
    }

    /// Base URL for an explicit endpoint, used verbatim apart from a
    /// trailing slash.
    pub fn for_explicit(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), self.api_version)
    }
}

/// Resolve the base URL. Region precedence: `explicit_region`, then
/// `signer_region`, then `config_region`.
pub fn resolve_base_url(
    service: &ServiceEndpoint,
    explicit_endpoint: Option<&str>,
    explicit_region: Option<&str>,
    signer_region: Option<&str>,
    config_region: Option<&str>,
) -> Result<String, ApiError> {
    if let Some(endpoint) = explicit_endpoint.filter(|e| !e.trim().is_empty()) {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ApiError::Configuration(format!(
                "endpoint `{endpoint}` must start with http:// or https://"
            )));
        }
        let base = service.for_explicit(endpoint);
        tracing::debug!(base_url = %base, "using explicit endpoint");
        return Ok(base);
    }

    let region = [explicit_region, signer_region, config_region]
        .into_iter()
        .flatten()
        .find(|r| !r.trim().is_empty())
        .ok_or_else(|| {
            ApiError::Configuration(
                "no endpoint or region configured (parameter, signer, or configuration)".to_string(),
            )
        })?;
    let base = service.for_region(region);
    tracing::debug!(region, base_url = %base, "resolved endpoint from region");
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_substitution() {
        assert_eq!(
            DATABASE_MANAGEMENT.for_region("us-ashburn-1"),
            "https://dbmgmt.us-ashburn-1.oci.oraclecloud.com/20201101"
        );
        assert_eq!(
            SERVICE_MANAGER_PROXY.for_region("uk-gov-london-1"),
            "https://service-manager-proxy.uk-gov-london-1.oci.oraclegovcloud.uk/20210914"
        );
    }

    #[test]
    fn short_codes_and_case_are_normalized() {
        assert_eq!(canonical_region("PHX"), "us-phoenix-1");
        assert_eq!(
            DATABASE_MANAGEMENT.for_region("phx"),
            DATABASE_MANAGEMENT.for_region("us-phoenix-1")
        );
    }

    #[test]
    fn unknown_region_falls_back_to_commercial_realm() {
        assert_eq!(second_level_domain("xx-newregion-1"), "oraclecloud.com");
        assert_eq!(
            DATABASE_MANAGEMENT.for_region("xx-newregion-1"),
            "https://dbmgmt.xx-newregion-1.oci.oraclecloud.com/20201101"
        );
    }

    #[test]
    fn explicit_endpoint_bypasses_region() {
        let base = resolve_base_url(
            &DATABASE_MANAGEMENT,
            Some("http://127.0.0.1:8080/"),
            Some("us-ashburn-1"),
            None,
            None,
        )
        .unwrap();
        assert_eq!(base, "http://127.0.0.1:8080/20201101");
    }

    #[test]
    fn region_precedence() {
        let base = resolve_base_url(
            &DATABASE_MANAGEMENT,
            None,
            None,
            Some("eu-frankfurt-1"),
            Some("us-ashburn-1"),
        )
        .unwrap();
        assert!(base.contains("eu-frankfurt-1"));

        let base = resolve_base_url(
            &DATABASE_MANAGEMENT,
            None,
            Some("ap-tokyo-1"),
            Some("eu-frankfurt-1"),
            Some("us-ashburn-1"),
        )
        .unwrap();
        assert!(base.contains("ap-tokyo-1"));
    }

    #[test]
    fn missing_region_is_configuration_error() {
        let err = resolve_base_url(&DATABASE_MANAGEMENT, None, None, None, Some("  ")).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn endpoint_without_scheme_is_rejected() {
        let err = resolve_base_url(&DATABASE_MANAGEMENT, Some("dbmgmt.example"), None, None, None)
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
