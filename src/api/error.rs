//! Error type for backend API calls.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a backend API call.
///
/// Every variant is terminal: nothing in the client retries. The caller
/// decides whether the user gets to re-initiate the action.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    ///
    /// `detail` carries the server's `detail` field verbatim when the error
    /// body had one, or a generic label otherwise.
    #[error("HTTP {status}: {detail}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided detail, or a generic label.
        detail: String,
    },

    /// The request never produced a usable response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A local file could not be read for upload.
    #[error("failed to read {}: {source}", path.display())]
    File {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_surfaces_code_and_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: "bad column".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("bad column"));
    }

    #[test]
    fn file_error_names_the_path() {
        let err = ApiError::File {
            path: PathBuf::from("/tmp/leads.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("leads.csv"));
    }
}
