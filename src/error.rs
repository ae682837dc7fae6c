use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch news document: {0}")]
    NewsFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("News document not found (404): {url}")]
    NewsNotFound { url: String },

    #[error("Server error ({status}): {message} (URL: {url})")]
    ServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Client error ({status}): {message} (URL: {url})")]
    ClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Document shape errors
    #[error("News document is malformed JSON: {message} (source: {origin})")]
    MalformedJson { message: String, origin: String },

    #[error("News document has an unexpected structure: {message} (source: {origin})")]
    UnexpectedStructure { message: String, origin: String },

    #[error("News document is empty: {origin}")]
    EmptyDocument { origin: String },

    #[error("No news source configured: {0}")]
    NoSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn news_not_found(url: impl Into<String>) -> Self {
        Self::NewsNotFound { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a client error (4xx status codes except 404)
    pub fn client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn malformed_json(message: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::MalformedJson {
            message: message.into(),
            origin: origin.into(),
        }
    }

    pub fn unexpected_structure(message: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::UnexpectedStructure {
            message: message.into(),
            origin: origin.into(),
        }
    }

    pub fn empty_document(origin: impl Into<String>) -> Self {
        Self::EmptyDocument {
            origin: origin.into(),
        }
    }

    pub fn no_source(msg: impl Into<String>) -> Self {
        Self::NoSource(msg.into())
    }

    /// True for failures of the transport rather than of the document itself
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            AppError::NewsFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ServerError { .. }
        )
    }

    /// True when the document was reachable but its content could not be used
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedJson { .. }
                | AppError::UnexpectedStructure { .. }
                | AppError::EmptyDocument { .. }
        )
    }
}
