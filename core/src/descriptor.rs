//! Request descriptors: one HTTP call, assembled and validated, before it
//! is executed.
//!
//! # Design
//! `RequestDescriptorBuilder` records the first validation failure and
//! returns it from `build()`, so generated operations can chain every
//! parameter without a `?` per line. A descriptor that builds successfully
//! has every path placeholder substituted and every required value present;
//! it is never mutated after it is handed to the executor.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::enums::ApiEnum;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::idempotency::generate_retry_token;
use crate::wire;

pub const ACCEPT: &str = "accept";
pub const CONTENT_TYPE: &str = "content-type";
pub const OPC_REQUEST_ID: &str = "opc-request-id";
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
pub const IF_MATCH: &str = "if-match";
pub const APPLICATION_JSON: &str = "application/json";

/// How a list-valued query parameter is put on the wire. Fixed per
/// parameter by the endpoint contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFormat {
    /// `name=a,b,c`
    Csv,
    /// `name=a&name=b&name=c`
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    List(Vec<String>, CollectionFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Operation name used in logs and errors, e.g. `GetManagedDatabase`.
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path_template: &'static str,
    /// Template with every placeholder substituted and encoded.
    pub path: String,
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, QueryValue)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn builder(
        method: HttpMethod,
        path_template: &'static str,
        operation: &'static str,
    ) -> RequestDescriptorBuilder {
        RequestDescriptorBuilder {
            descriptor: RequestDescriptor {
                operation,
                method,
                path_template,
                path: String::new(),
                path_params: Vec::new(),
                query: Vec::new(),
                headers: vec![(ACCEPT.to_string(), APPLICATION_JSON.to_string())],
                body: None,
            },
            error: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        crate::http::find_header(&self.headers, name)
    }

    pub fn query_value(&self, name: &str) -> Option<&QueryValue> {
        self.query.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Encoded query string without the leading `?`. Empty when no query
    /// parameters were set.
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (name, value) in &self.query {
            let key = urlencoding::encode(name);
            match value {
                QueryValue::Single(v) => pairs.push(format!("{key}={}", urlencoding::encode(v))),
                QueryValue::List(values, CollectionFormat::Csv) => {
                    let joined = values.join(",");
                    pairs.push(format!("{key}={}", urlencoding::encode(&joined)));
                }
                QueryValue::List(values, CollectionFormat::Multi) => {
                    for v in values {
                        pairs.push(format!("{key}={}", urlencoding::encode(v)));
                    }
                }
            }
        }
        pairs.join("&")
    }

    /// Lower the descriptor into a plain-data request against `base_url`
    /// (endpoint plus API version, no trailing slash).
    pub fn to_http_request(&self, base_url: &str) -> HttpRequest {
        let query = self.query_string();
        let path = if query.is_empty() {
            format!("{base_url}{}", self.path)
        } else {
            format!("{base_url}{}?{query}", self.path)
        };
        HttpRequest {
            method: self.method,
            path,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

#[derive(Debug)]
pub struct RequestDescriptorBuilder {
    descriptor: RequestDescriptor,
    error: Option<ApiError>,
}

impl RequestDescriptorBuilder {
    fn fail(&mut self, err: ApiError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn require_non_blank(&mut self, name: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.fail(ApiError::invalid_argument(name, "must not be blank"));
            return false;
        }
        true
    }

    /// Substitute `{name}` in the path template. The value must be non-blank.
    pub fn path_param(mut self, name: &'static str, value: &str) -> Self {
        if self.require_non_blank(name, value) {
            self.descriptor.path_params.push((name, value.to_string()));
        }
        self
    }

    /// Required query parameter; must be non-blank.
    pub fn required_query(mut self, name: &'static str, value: &str) -> Self {
        if self.require_non_blank(name, value) {
            self.descriptor
                .query
                .push((name, QueryValue::Single(value.to_string())));
        }
        self
    }

    /// Optional query parameter, omitted when `None`.
    pub fn query<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.descriptor
                .query
                .push((name, QueryValue::Single(value.to_string())));
        }
        self
    }

    /// Optional enum-valued query parameter. `UnknownValue` is rejected.
    pub fn query_enum<E: ApiEnum>(mut self, name: &'static str, value: Option<E>) -> Self {
        if let Some(value) = value {
            if !value.is_known() {
                self.fail(ApiError::InvalidEnumValue {
                    parameter: name,
                    value: value.as_str().to_string(),
                    allowed: E::ALLOWED,
                });
                return self;
            }
            self.descriptor
                .query
                .push((name, QueryValue::Single(value.as_str().to_string())));
        }
        self
    }

    /// Optional timestamp query parameter, RFC 3339 with milliseconds.
    pub fn query_time(self, name: &'static str, value: Option<&DateTime<Utc>>) -> Self {
        let formatted = value.map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true));
        self.query(name, formatted)
    }

    /// List-valued query parameter. Empty lists are omitted.
    pub fn query_list<V: ToString>(
        mut self,
        name: &'static str,
        values: &[V],
        format: CollectionFormat,
    ) -> Self {
        if !values.is_empty() {
            let values = values.iter().map(ToString::to_string).collect();
            self.descriptor
                .query
                .push((name, QueryValue::List(values, format)));
        }
        self
    }

    /// List of enum values. Any `UnknownValue` is rejected.
    pub fn query_enum_list<E: ApiEnum>(
        mut self,
        name: &'static str,
        values: &[E],
        format: CollectionFormat,
    ) -> Self {
        if let Some(unknown) = values.iter().find(|v| !v.is_known()) {
            self.fail(ApiError::InvalidEnumValue {
                parameter: name,
                value: unknown.as_str().to_string(),
                allowed: E::ALLOWED,
            });
            return self;
        }
        let values: Vec<&'static str> = values.iter().map(ApiEnum::as_str).collect();
        self.query_list(name, &values, format)
    }

    /// Required list-valued query parameter; must contain at least one
    /// non-blank value.
    pub fn required_query_list<V: ToString>(
        mut self,
        name: &'static str,
        values: &[V],
        format: CollectionFormat,
    ) -> Self {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
            self.fail(ApiError::invalid_argument(
                name,
                "must contain at least one non-blank value",
            ));
            return self;
        }
        self.descriptor
            .query
            .push((name, QueryValue::List(values, format)));
        self
    }

    pub fn header(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.descriptor.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn opc_request_id(self, value: Option<&str>) -> Self {
        self.header(OPC_REQUEST_ID, value)
    }

    pub fn if_match(self, value: Option<&str>) -> Self {
        self.header(IF_MATCH, value)
    }

    /// `opc-retry-token`: the caller's token verbatim, or a fresh one.
    pub fn retry_token(mut self, supplied: Option<&str>) -> Self {
        let token = match supplied {
            Some(token) => {
                if !self.require_non_blank("opcRetryToken", token) {
                    return self;
                }
                token.to_string()
            }
            None => generate_retry_token(),
        };
        self.descriptor.headers.push((OPC_RETRY_TOKEN.to_string(), token));
        self
    }

    /// Serialize `body` as the JSON request payload.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Self {
        match wire::to_wire_body(body) {
            Ok(body) => {
                self.descriptor
                    .headers
                    .push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
                self.descriptor.body = Some(body);
            }
            Err(err) => self.fail(err),
        }
        self
    }

    pub fn build(mut self) -> Result<RequestDescriptor, ApiError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.descriptor.path = substitute_path(
            self.descriptor.path_template,
            &self.descriptor.path_params,
        )?;
        Ok(self.descriptor)
    }
}

/// Replace each `{name}` exactly once with the percent-encoded value.
fn substitute_path(template: &str, params: &[(&'static str, String)]) -> Result<String, ApiError> {
    let mut path = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        match path.matches(&placeholder).count() {
            1 => path = path.replacen(&placeholder, &urlencoding::encode(value), 1),
            0 => {
                return Err(ApiError::invalid_argument(
                    name,
                    format!("no placeholder in path template {template}"),
                ))
            }
            _ => {
                return Err(ApiError::invalid_argument(
                    name,
                    format!("placeholder appears more than once in {template}"),
                ))
            }
        }
    }
    if let Some(start) = path.find('{') {
        let end = path[start..].find('}').map_or(path.len(), |i| start + i + 1);
        return Err(ApiError::invalid_argument(
            "path",
            format!("unsubstituted placeholder {} in {template}", &path[start..end]),
        ));
    }
    Ok(path)
}
