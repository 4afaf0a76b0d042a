use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum FetchError {
    NetworkError(Box<dyn Error + Send + Sync>),
    HttpStatus(StatusCode),
    ParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::NetworkError(e) => write!(f, "Network error: {}", e),
            FetchError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            FetchError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::NetworkError(Box::new(err))
    }
}

/// Status and body text of a completed exchange.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs the GET request. Everything that touches the network lives behind this.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = client_builder().build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

fn client_builder() -> ClientBuilder {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        debug!("{} responded with {}", url, status);

        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Runs the request and decodes a successful body, keeping the failure cause.
pub fn try_fetch<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<Value, FetchError> {
    let response = transport.get(url)?;

    if !response.status.is_success() {
        return Err(FetchError::HttpStatus(response.status));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| FetchError::ParseError(format!("Failed to parse JSON response: {}", e)))
}

/// Fetches `url` and decodes the body as JSON.
///
/// Every failure (transport fault, non-2xx status, bad JSON) prints a
/// diagnostic line and yields `None`. A JSON `null` body is `Some(Value::Null)`.
pub fn fetch_with<T: Transport + ?Sized>(transport: &T, url: &str) -> Option<Value> {
    match try_fetch(transport, url) {
        Ok(value) => Some(value),
        Err(e) => {
            report(&e);
            None
        }
    }
}

/// [`fetch_with`] over a freshly built [`HttpTransport`].
pub fn fetch(url: &str) -> Option<Value> {
    match HttpTransport::new() {
        Ok(transport) => fetch_with(&transport, url),
        Err(e) => {
            report(&e);
            None
        }
    }
}

fn report(err: &FetchError) {
    warn!("fetch failed: {:?}", err);
    println!("An error occurred: {}", err);
}
