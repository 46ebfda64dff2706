use reqwest::StatusCode;

pub const FALLBACK_DESCRIPTION: &str = "Please try again later";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {}", .status.as_u16())]
    Rejected {
        status: StatusCode,
        error: Option<String>,
    },
}

impl ClientError {
    /// Text shown to the visitor: the relay's own message when it sent one,
    /// otherwise the status failure, otherwise a generic fallback.
    ///
    /// Transport errors never reach the visitor verbatim since they carry the
    /// relay URL; they are logged by the caller instead.
    pub fn description(&self) -> String {
        match self {
            Self::Rejected {
                error: Some(error), ..
            } if !error.is_empty() => error.to_owned(),
            Self::Rejected { .. } => self.to_string(),
            Self::Http(_) => FALLBACK_DESCRIPTION.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_prefers_server_error() {
        let err = ClientError::Rejected {
            status: StatusCode::BAD_REQUEST,
            error: Some("All fields are required.".to_owned()),
        };

        assert_eq!(err.description(), "All fields are required.");
    }

    #[test]
    fn test_description_without_server_error() {
        let err = ClientError::Rejected {
            status: StatusCode::BAD_GATEWAY,
            error: None,
        };

        assert_eq!(err.description(), "Request failed with status code 502");

        let err = ClientError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: Some(String::new()),
        };

        assert_eq!(err.description(), "Request failed with status code 500");
    }
}
