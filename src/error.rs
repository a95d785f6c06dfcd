use std::fmt;
use std::io;


#[derive(Debug)]
pub enum PayloadError {
	Json(serde_json::Error),
	NoCountry,
}

impl fmt::Display for PayloadError {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Json(e) => fmt::Display::fmt(e, f),
			Self::NoCountry => f.write_str("area tree has no country entry"),
		}
	}
}


/// Every fault the pipeline can run into. None of them are retried; the
/// first one ends the run.
#[derive(Debug)]
pub enum Error {
	Network(reqwest::Error),
	MalformedPayload(PayloadError),
	Filesystem(io::Error),
}

impl fmt::Display for Error {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Network(e) => write!(f, "network error: {}", e),
			Self::MalformedPayload(e) => write!(f, "malformed payload: {}", e),
			Self::Filesystem(e) => write!(f, "filesystem error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Network(e) => Some(e),
			Self::MalformedPayload(PayloadError::Json(e)) => Some(e),
			Self::MalformedPayload(PayloadError::NoCountry) => None,
			Self::Filesystem(e) => Some(e),
		}
	}
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		Self::Network(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::MalformedPayload(PayloadError::Json(err))
	}
}

impl From<PayloadError> for Error {
	fn from(err: PayloadError) -> Self {
		Self::MalformedPayload(err)
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		Self::Filesystem(err)
	}
}

// csv only fails on the write side here, so its errors are filesystem errors
impl From<csv::Error> for Error {
	fn from(err: csv::Error) -> Self {
		Self::Filesystem(err.into())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
