//! Request Types

use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Per-call overrides for `ApiClient::request`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Serialized JSON payload
    pub body: Option<String>,
    /// Merged over the default headers
    pub headers: Vec<(String, String)>,
    /// Skip the error notification (401 handling still applies)
    pub silent: bool,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self { method: Method::Post, ..Self::default() }
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }
}

/// Fully resolved outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Header lookup, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a header, case-insensitive on the name
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut request = HttpRequest {
            method: Method::Get,
            url: "http://x/api/wishes".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        };
        request.set_header("content-type", "text/plain");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("CONTENT-TYPE"), Some("text/plain"));
    }

    #[test]
    fn test_json_options_serialize_body() {
        #[derive(Serialize)]
        struct Body<'a> {
            username: &'a str,
        }
        let options = RequestOptions::post().json(&Body { username: "alice" }).unwrap();
        assert_eq!(options.method, Method::Post);
        assert_eq!(options.body.as_deref(), Some(r#"{"username":"alice"}"#));
        assert!(!options.silent);
    }
}
