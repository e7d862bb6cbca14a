// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(NetworkError),
    Storage(String),
}

/// Failures of the outbound geo-location lookup.
///
/// None of these ever reach a visitor: language resolution treats every
/// variant as "no answer" and moves on to the next source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The lookup is switched off in the configuration.
    Disabled,

    /// The request could not be sent or timed out.
    Request(String),

    /// The endpoint answered with a non-success status code.
    Status(u16),

    /// The body was not the JSON shape we expect.
    MalformedResponse(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Disabled => write!(f, "Geo lookup disabled"),
            NetworkError::Request(msg) => write!(f, "Request failed: {}", msg),
            NetworkError::Status(code) => write!(f, "HTTP status: {}", code),
            NetworkError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Request(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
