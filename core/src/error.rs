//! Error types for the posts client and the page model.
//!
//! # Design
//! Only `submit_item` checks the HTTP status, so `NetworkResponseNotOk` is the
//! single status-derived variant. Its message is fixed; the status code is
//! carried for callers that want it but is not part of `Display`.

/// Errors returned by the request/response operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete (DNS, connect, reset, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// `submit_item` received a non-2xx status.
    #[error("Network response was not ok")]
    NetworkResponseNotOk { status: u16 },

    /// The response body was not the JSON shape the operation expects.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no element matches selector '{0}'")]
    ElementNotFound(String),

    #[error("page image is already bound")]
    AlreadyBound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_message_is_fixed() {
        let err = ApiError::NetworkResponseNotOk { status: 503 };
        assert_eq!(err.to_string(), "Network response was not ok");
    }

    #[test]
    fn element_not_found_names_selector() {
        let err = PageError::ElementNotFound("#imagen".to_string());
        assert_eq!(err.to_string(), "no element matches selector '#imagen'");
    }
}
