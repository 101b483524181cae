use std::fmt;
use talkdata_types::ErrorInfo;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Backend answered with a non-2xx status
    Http { status: u16, message: Option<String> },
    /// Request never produced a response (connect, timeout, TLS)
    Transport(reqwest::Error),
    /// 2xx response whose body did not match the expected shape
    Decode(serde_json::Error),
    /// API base could not be turned into an absolute URL
    InvalidUrl(String),
}

impl Error {
    /// User-facing form: the backend's own message when it sent one.
    pub fn error_info(&self) -> ErrorInfo {
        match self {
            Error::Http { message, .. } => ErrorInfo::from_backend_message(message.as_deref()),
            _ => ErrorInfo::fallback(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http {
                status,
                message: Some(message),
            } => write!(f, "Backend error ({}): {}", status, message),
            Error::Http {
                status,
                message: None,
            } => write!(f, "Backend error ({})", status),
            Error::Transport(err) => write!(f, "Request failed: {}", err),
            Error::Decode(err) => write!(f, "Unexpected response body: {}", err),
            Error::InvalidUrl(msg) => write!(f, "Invalid API URL: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Http { .. } | Error::InvalidUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
