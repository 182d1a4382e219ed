//! Iconfinder API client.

use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::{Certificate, Method, Url};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{ApiError, Result};
use super::models::{CategoryList, License, PageRequest, StyleList};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.iconfinder.com/v2";

/// Default site URL.
pub const DEFAULT_SITE_URL: &str = "https://www.iconfinder.com";

const USER_AGENT: &str = concat!("iconfinder-rs/", env!("CARGO_PKG_VERSION"));

/// How server certificates are verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Built-in root store.
    #[default]
    System,
    /// Built-in roots plus the certificates in a PEM bundle.
    CaBundle(PathBuf),
    /// No verification. Only for local testing.
    Disabled,
}

/// Settings for [`Client::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Must be given together with `client_secret`.
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_base_url: String,
    pub api_tls: TlsVerification,
    pub site_base_url: String,
    pub site_tls: TlsVerification,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_base_url: DEFAULT_API_URL.to_string(),
            api_tls: TlsVerification::System,
            site_base_url: DEFAULT_SITE_URL.to_string(),
            site_tls: TlsVerification::System,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
struct Credentials {
    client_id: String,
    client_secret: String,
}

/// Blocking Iconfinder API client.
///
/// Registered applications pass a client ID and secret, which are appended
/// to every API request to get the higher rate limit.
///
/// # Example
///
/// ```no_run
/// use iconfinder::api::{Client, ClientConfig};
///
/// let client = Client::new(ClientConfig::default()).unwrap();
/// let license = client.license(5).unwrap();
/// println!("{license}");
/// ```
#[derive(Debug)]
pub struct Client {
    credentials: Option<Credentials>,
    api_base_url: String,
    api_tls: TlsVerification,
    site_base_url: String,
    site_tls: TlsVerification,
    api_http: HttpClient,
    site_http: HttpClient,
}

impl Client {
    /// Build a client.
    ///
    /// Empty credential strings count as absent. Fails with
    /// [`ApiError::Configuration`] if only one of ID and secret is given or a
    /// CA bundle cannot be read.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client_id = config.client_id.filter(|s| !s.is_empty());
        let client_secret = config.client_secret.filter(|s| !s.is_empty());

        let credentials = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(Credentials {
                client_id,
                client_secret,
            }),
            (None, None) => None,
            _ => {
                return Err(ApiError::Configuration(
                    "client_id and client_secret must both be provided if one is provided"
                        .to_string(),
                ))
            }
        };

        Ok(Self {
            api_http: build_http(&config.api_tls, config.timeout)?,
            site_http: build_http(&config.site_tls, config.timeout)?,
            credentials,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_tls: config.api_tls,
            site_base_url: config.site_base_url.trim_end_matches('/').to_string(),
            site_tls: config.site_tls,
        })
    }

    pub fn client_id(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.client_id.as_str())
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.client_secret.as_str())
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn api_tls(&self) -> &TlsVerification {
        &self.api_tls
    }

    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }

    pub fn site_tls(&self) -> &TlsVerification {
        &self.site_tls
    }

    /// Fully qualified URL for an endpoint relative to the API base.
    pub fn api_url(&self, relative_url: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url,
            relative_url.trim_start_matches('/')
        )
    }

    /// Fully qualified URL for a path relative to the site base.
    pub fn site_url(&self, relative_url: &str) -> String {
        format!(
            "{}/{}",
            self.site_base_url,
            relative_url.trim_start_matches('/')
        )
    }

    /// Perform a request against the API.
    ///
    /// Credentials are appended as `client_id`/`client_secret` query
    /// parameters when configured. Redirects are returned as-is. Statuses of
    /// 400 and above become the matching [`ApiError`].
    pub fn api_request(
        &self,
        method: Method,
        relative_url: &str,
        params: &[(String, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let mut params = params.to_vec();
        if let Some(creds) = &self.credentials {
            params.push(("client_id".to_string(), creds.client_id.clone()));
            params.push(("client_secret".to_string(), creds.client_secret.clone()));
        }

        let url = build_url(&self.api_url(relative_url), &params)?;
        // Path only; the query may hold the client secret
        tracing::debug!("{} {}", method, url.path());

        let mut request = self.api_http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        check_status(request.send()?)
    }

    /// Perform a GET against the site. No credentials are attached.
    pub fn site_request(&self, method: Method, relative_url: &str) -> Result<Response> {
        let url = build_url(&self.site_url(relative_url), &[])?;
        check_status(self.site_http.request(method, url).send()?)
    }

    /// `GET /licenses/{id}`.
    pub fn license(&self, license_id: u64) -> Result<License> {
        self.get_json(&format!("licenses/{license_id}"), &[])
    }

    /// `GET /categories`.
    pub fn categories(&self, page: &PageRequest) -> Result<CategoryList> {
        self.get_json("categories", &page.to_params())
    }

    /// `GET /styles`.
    pub fn styles(&self, page: &PageRequest) -> Result<StyleList> {
        self.get_json("styles", &page.to_params())
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        relative_url: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let body = self
            .api_request(Method::GET, relative_url, params, None)?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn build_http(tls: &TlsVerification, timeout: Duration) -> Result<HttpClient> {
    let mut builder = HttpClient::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none());

    match tls {
        TlsVerification::System => {}
        TlsVerification::CaBundle(path) => {
            let pem = std::fs::read(path).map_err(|e| {
                ApiError::Configuration(format!("cannot read CA bundle {}: {e}", path.display()))
            })?;
            let cert = Certificate::from_pem(&pem).map_err(|e| {
                ApiError::Configuration(format!("invalid CA bundle {}: {e}", path.display()))
            })?;
            builder = builder.add_root_certificate(cert);
        }
        TlsVerification::Disabled => {
            builder = builder.danger_accept_invalid_certs(true);
        }
    }

    Ok(builder.build()?)
}

fn build_url(base: &str, params: &[(String, String)]) -> Result<Url> {
    let parsed = if params.is_empty() {
        Url::parse(base)
    } else {
        Url::parse_with_params(base, params)
    };
    parsed.map_err(|e| ApiError::Configuration(format!("invalid URL {base}: {e}")))
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(error_for_status(status, &body))
}

/// Map an error response to an [`ApiError`].
///
/// The body is parsed as `{"code": ..., "message": ...}` when possible; the
/// server's message replaces the default one.
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(|v| v.as_str())
            .map(String::from)
    };
    let code = field("code");
    let message = |default: &str| field("message").unwrap_or_else(|| default.to_string());

    match status {
        400 => match code.as_deref().and_then(|c| c.strip_prefix("invalid_")) {
            Some(parameter) => ApiError::InvalidParameter {
                message: message("invalid parameter"),
                parameter: parameter.to_string(),
            },
            None => ApiError::BadRequest {
                message: message("bad request"),
            },
        },
        401 => ApiError::BadCredentials {
            message: message("bad credentials"),
        },
        402 => ApiError::NotPurchased {
            message: message("the requested resource has not been purchased"),
        },
        403 if code.as_deref() == Some("insufficient_permissions") => {
            ApiError::InsufficientPermissions {
                message: message("insufficient permissions to access the requested resource"),
            }
        }
        403 => ApiError::PermissionDenied {
            message: message("permission to the requested resource was denied"),
        },
        404 => ApiError::NotFound {
            message: message("the requested resource was not found"),
        },
        429 => ApiError::RateLimitExceeded {
            message: message("request rate limit exceeded"),
        },
        500 => ApiError::InternalServer {
            message: message("internal server error"),
        },
        _ => ApiError::UnexpectedResponse { status },
    }
}
