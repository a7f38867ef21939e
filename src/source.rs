//! Colour data sources.
//!
//! A [`ColourSource`] performs one read-style retrieval of the full colour
//! collection. [`HttpSource`] talks to the colour endpoint: through the
//! browser's `fetch` on WASM, through a blocking `reqwest` client on native.

use std::future::Future;

use crate::error::RetrievalError;
use crate::model::{ColourCollection, ColoursResponse};

/// Something the loader can ask for the current colour collection.
///
/// Implementations are driven on a single thread, so the returned future does
/// not need to be `Send`.
pub trait ColourSource {
    /// Retrieve the full collection. Called at most once per activation.
    fn fetch_colours(&self) -> impl Future<Output = Result<ColourCollection, RetrievalError>>;
}

/// Extract the `colours` field from an endpoint response body.
pub fn parse_response(body: &str) -> Result<ColourCollection, RetrievalError> {
    let response: ColoursResponse = serde_json::from_str(body)?;
    Ok(response.colours)
}

/// HTTP-backed source reading from a fixed endpoint address.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ColourSource for HttpSource {
    async fn fetch_colours(&self) -> Result<ColourCollection, RetrievalError> {
        log::debug!("Requesting colours from {}", self.url);
        let body = fetch_body(&self.url).await?;
        parse_response(&body)
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_body(url: &str) -> Result<String, RetrievalError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| RetrievalError::transport(format!("Failed to build request: {:?}", e)))?;

    let window =
        web_sys::window().ok_or_else(|| RetrievalError::transport("No window object available"))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| RetrievalError::transport(format!("fetch failed: {:?}", e)))?;

    let response: Response = value
        .dyn_into()
        .map_err(|_| RetrievalError::transport("fetch did not resolve to a Response"))?;

    if !response.ok() {
        return Err(RetrievalError::Status(response.status()));
    }

    let text = response
        .text()
        .map_err(|e| RetrievalError::transport(format!("Failed to read body: {:?}", e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| RetrievalError::transport(format!("Failed to read body: {:?}", e)))?;

    text.as_string()
        .ok_or_else(|| RetrievalError::transport("Response body is not text"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_body(url: &str) -> Result<String, RetrievalError> {
    let response =
        reqwest::blocking::get(url).map_err(|e| RetrievalError::transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RetrievalError::Status(status.as_u16()));
    }

    response
        .text()
        .map_err(|e| RetrievalError::transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on a local port, returning its URL.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/api/get_colours", addr)
    }

    #[test]
    fn test_parse_two_colours() {
        let colours =
            parse_response(r##"{"colours":[{"css":"#ff0000"},{"css":"rgb(0,255,0)"}]}"##).unwrap();
        let css: Vec<&str> = colours.iter().map(|c| c.css.as_str()).collect();
        assert_eq!(css, vec!["#ff0000", "rgb(0,255,0)"]);
    }

    #[test]
    fn test_parse_empty_colours() {
        let colours = parse_response(r#"{"colours":[]}"#).unwrap();
        assert!(colours.is_empty());
    }

    #[test]
    fn test_parse_wrong_shape_is_malformed() {
        let err = parse_response(r#"{"colours": 5}"#).unwrap_err();
        assert!(err.is_malformed());

        let err = parse_response("not json").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_parse_ignores_odd_extra_fields() {
        let colours = parse_response(
            r##"{"colours":[{"css":"#fff","data":[1,2,3]},{"css":"#000","type":7},{"css":"red","type":{"x":1},"data":false}]}"##,
        )
        .unwrap();
        let css: Vec<&str> = colours.iter().map(|c| c.css.as_str()).collect();
        assert_eq!(css, vec!["#fff", "#000", "red"]);
    }

    #[test]
    fn test_http_source_reads_colours() {
        let url = serve_once(
            "200 OK",
            r##"{"colours":[{"type":"rgb","data":{"red":255,"green":0,"blue":0},"css":"#ff0000"},{"css":"rgb(0,255,0)"}]}"##,
        );
        let colours = pollster::block_on(HttpSource::new(url).fetch_colours()).unwrap();

        let css: Vec<&str> = colours.iter().map(|c| c.css.as_str()).collect();
        assert_eq!(css, vec!["#ff0000", "rgb(0,255,0)"]);
    }

    #[test]
    fn test_http_source_rejects_error_status() {
        let url = serve_once("500 Internal Server Error", "{}");
        let err = pollster::block_on(HttpSource::new(url).fetch_colours()).unwrap_err();
        assert!(matches!(err, RetrievalError::Status(500)));
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        // Grab a free port, then release it so nothing is listening there
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let source = HttpSource::new(format!("http://{}/api/get_colours", addr));
        let err = pollster::block_on(source.fetch_colours()).unwrap_err();
        assert!(matches!(err, RetrievalError::Transport(_)));
    }
}
