//! Typed response envelope.

use crate::http::find_header;

pub const OPC_NEXT_PAGE: &str = "opc-next-page";
pub const OPC_WORK_REQUEST_ID: &str = "opc-work-request-id";
pub const ETAG: &str = "etag";

/// A successful response: status, headers, the decoded body, and the raw
/// body it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub data: T,
    pub raw_body: String,
}

impl<T> Response<T> {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn opc_request_id(&self) -> Option<&str> {
        self.header(crate::descriptor::OPC_REQUEST_ID)
    }

    /// Token for the next page of a list operation. `None` on the last page.
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header(OPC_NEXT_PAGE)
    }

    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG)
    }

    pub fn opc_work_request_id(&self) -> Option<&str> {
        self.header(OPC_WORK_REQUEST_ID)
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
            raw_body: self.raw_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> Response<u32> {
        Response {
            status: 200,
            headers: vec![
                ("Opc-Request-Id".to_string(), "req-1".to_string()),
                ("opc-next-page".to_string(), "page-2".to_string()),
                ("ETag".to_string(), "\"v3\"".to_string()),
            ],
            data: 7,
            raw_body: "7".to_string(),
        }
    }

    #[test]
    fn accessors_read_headers() {
        let r = response();
        assert_eq!(r.opc_request_id(), Some("req-1"));
        assert_eq!(r.opc_next_page(), Some("page-2"));
        assert_eq!(r.etag(), Some("\"v3\""));
        assert_eq!(r.opc_work_request_id(), None);
    }

    #[test]
    fn map_keeps_metadata() {
        let mapped = response().map(|n| n.to_string());
        assert_eq!(mapped.data, "7");
        assert_eq!(mapped.etag(), Some("\"v3\""));
        assert_eq!(mapped.into_data(), "7");
    }
}
