//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod http;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

pub use http::{BoxError, BoxFuture, HttpResponse, HttpTransport, ReqwestTransport};

use crate::domain::{
    ApiErrorKind, Balance, BatchResponse, ErrorCode, MessageId, Password, SendMessage,
    SendMessages, SenderName, Token, Username, ValidationError,
};
use crate::transport::PlainResponse;

const DEFAULT_BASE_URL: &str = "https://userarea.sms-assistent.by/api/v1/";

const BALANCE_PATH: &str = "credits/plain";
const SEND_MESSAGE_PATH: &str = "send_sms/plain";
const SEND_MESSAGES_PATH: &str = "xml";

#[derive(Debug, Clone)]
/// Authentication credentials for sms-assistent.by API calls.
///
/// Use [`Auth::token`] with an API token from the user area, or [`Auth::password`]
/// to authenticate with the account password.
pub enum Auth {
    /// Username in the query, token in the `requestAuthToken` header.
    Token { username: Username, token: Token },
    /// Username and password in the query (or XML attributes for batches).
    Password {
        username: Username,
        password: Password,
    },
}

impl Auth {
    /// Create [`Auth::Token`] and validate that both parts are non-empty.
    pub fn token(
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Token {
            username: Username::new(username)?,
            token: Token::new(token)?,
        })
    }

    /// Create [`Auth::Password`] and validate that both parts are non-empty.
    pub fn password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Password {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        match self {
            Self::Token { username, .. } | Self::Password { username, .. } => username,
        }
    }

    fn password_value(&self) -> Option<&Password> {
        match self {
            Self::Token { .. } => None,
            Self::Password { password, .. } => Some(password),
        }
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((
            Username::FIELD.to_owned(),
            self.username().as_str().to_owned(),
        ));
        if let Some(password) = self.password_value() {
            params.push((Password::FIELD.to_owned(), password.as_str().to_owned()));
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        match self {
            Self::Token { token, .. } => {
                vec![(Token::HEADER.to_owned(), token.as_str().to_owned())]
            }
            Self::Password { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsAssistantClient`].
pub enum SmsAssistantError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// sms-assistent.by answered with a negative response code.
    #[error("API error {code}: {}", .kind.describe())]
    Api { code: ErrorCode, kind: ApiErrorKind },

    /// Response body is not the number the endpoint is documented to return.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL cannot be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SmsAssistantError {
    /// The mapped error kind, if this is an API error.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Builder for [`SmsAssistantClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, default sender
/// or the HTTP transport itself.
pub struct SmsAssistantClientBuilder {
    auth: Auth,
    sender: Option<SenderName>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl SmsAssistantClientBuilder {
    /// Create a builder with the default base URL and the `reqwest` transport.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            sender: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Default sender name used when a message does not override it.
    pub fn sender(mut self, sender: SenderName) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Override the API base URL. A trailing `/` is added when missing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom [`HttpTransport`] instead of the built-in `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`SmsAssistantClient`].
    pub fn build(self) -> Result<SmsAssistantClient, SmsAssistantError> {
        let base_url = parse_base_url(&self.base_url)?;

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SmsAssistantError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(SmsAssistantClient {
            auth: self.auth,
            sender: self.sender,
            base_url,
            http,
        })
    }
}

impl std::fmt::Debug for SmsAssistantClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsAssistantClientBuilder")
            .field("auth", &self.auth)
            .field("sender", &self.sender)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(raw)?;
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}

#[derive(Clone)]
/// High-level sms-assistent.by client.
///
/// Holds the credentials, an optional default sender name and the HTTP transport.
/// By default requests go to `https://userarea.sms-assistent.by/api/v1/`.
pub struct SmsAssistantClient {
    auth: Auth,
    sender: Option<SenderName>,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsAssistantClient {
    /// Create a client using the default base URL and the `reqwest` transport.
    ///
    /// For more customization, use [`SmsAssistantClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self::with_transport(auth, Arc::new(ReqwestTransport::default()))
    }

    /// Create a client that performs its HTTP calls through `transport`.
    pub fn with_transport(auth: Auth, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            auth,
            sender: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: transport,
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> SmsAssistantClientBuilder {
        SmsAssistantClientBuilder::new(auth)
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn sender(&self) -> Option<&SenderName> {
        self.sender.as_ref()
    }

    /// Replace the credentials.
    pub fn set_auth(&mut self, auth: Auth) -> &mut Self {
        self.auth = auth;
        self
    }

    /// Change the username, keeping the current token or password.
    pub fn set_username(&mut self, value: Username) -> &mut Self {
        match &mut self.auth {
            Auth::Token { username, .. } | Auth::Password { username, .. } => *username = value,
        }
        self
    }

    /// Switch to token authentication, keeping the current username.
    pub fn set_token(&mut self, token: Token) -> &mut Self {
        let username = self.auth.username().clone();
        self.auth = Auth::Token { username, token };
        self
    }

    /// Switch to password authentication, keeping the current username.
    pub fn set_password(&mut self, password: Password) -> &mut Self {
        let username = self.auth.username().clone();
        self.auth = Auth::Password { username, password };
        self
    }

    /// Change the default sender name.
    pub fn set_sender(&mut self, sender: SenderName) -> &mut Self {
        self.sender = Some(sender);
        self
    }

    /// Fetch the number of credits left on the account.
    ///
    /// Errors:
    /// - [`SmsAssistantError::Api`] when the gateway answers with a negative code,
    /// - [`SmsAssistantError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`SmsAssistantError::Parse`] when the body is not a number.
    pub async fn get_balance(&self) -> Result<Balance, SmsAssistantError> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_query_params(&mut params);

        let body = self.get_plain(BALANCE_PATH, params).await?;
        let parsed = crate::transport::decode_balance_response(&body)
            .map_err(|err| SmsAssistantError::Parse(Box::new(err)))?;

        into_result(parsed)
    }

    /// Send one message and return the id the gateway assigned to it.
    ///
    /// The message's own sender wins; otherwise the client's default sender is used.
    ///
    /// Errors:
    /// - [`SmsAssistantError::Api`] when the gateway answers with a negative code,
    /// - [`SmsAssistantError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`SmsAssistantError::Parse`] when the body is not an integer.
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<MessageId, SmsAssistantError> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_query_params(&mut params);
        params.extend(crate::transport::encode_send_message_query(
            &request,
            self.sender.as_ref(),
        ));

        let body = self.get_plain(SEND_MESSAGE_PATH, params).await?;
        let parsed = crate::transport::decode_message_id_response(&body)
            .map_err(|err| SmsAssistantError::Parse(Box::new(err)))?;

        into_result(parsed)
    }

    /// Send a batch of messages as one XML document.
    ///
    /// The gateway's reply is returned as-is; its body is not interpreted.
    ///
    /// Errors:
    /// - [`SmsAssistantError::Transport`] when the request cannot be performed,
    /// - [`SmsAssistantError::HttpStatus`] for non-2xx HTTP responses.
    pub async fn send_messages(
        &self,
        request: SendMessages,
    ) -> Result<BatchResponse, SmsAssistantError> {
        let xml = crate::transport::encode_send_messages_xml(
            self.auth.username(),
            self.auth.password_value(),
            &request,
            self.sender.as_ref(),
        );
        let url = self.endpoint(SEND_MESSAGES_PATH);
        tracing::debug!(
            endpoint = %url,
            messages = request.messages().len(),
            "posting message batch"
        );

        let response = self
            .http
            .post_xml(&url, xml, self.auth.headers())
            .await
            .map_err(SmsAssistantError::Transport)?;
        let response = ensure_success(response)?;

        Ok(BatchResponse {
            status: response.status,
            body: response.body,
        })
    }

    async fn get_plain(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, SmsAssistantError> {
        let url = self.endpoint(path);
        tracing::debug!(endpoint = %url, "sending request");

        let response = self
            .http
            .get(&url, params, self.auth.headers())
            .await
            .map_err(SmsAssistantError::Transport)?;

        Ok(ensure_success(response)?.body)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn ensure_success(response: HttpResponse) -> Result<HttpResponse, SmsAssistantError> {
    if (200..=299).contains(&response.status) {
        return Ok(response);
    }

    tracing::warn!(status = response.status, "unexpected HTTP status");
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    Err(SmsAssistantError::HttpStatus {
        status: response.status,
        body,
    })
}

fn into_result<T>(parsed: PlainResponse<T>) -> Result<T, SmsAssistantError> {
    match parsed {
        PlainResponse::Value(value) => Ok(value),
        PlainResponse::Error(code) => {
            let kind = code.kind();
            tracing::warn!(code = code.as_i32(), ?kind, "API returned an error code");
            Err(SmsAssistantError::Api { code, kind })
        }
    }
}
