use thiserror::Error;

/// Failures raised while binding the controller to a live document.
///
/// A missing element is not an error: lookups report it as absent and the
/// feature is skipped.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to attach `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("invalid runtime config: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    pub fn listener(event: &'static str, message: impl Into<String>) -> Self {
        Self::Listener {
            event,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_error_mentions_event_name() {
        let err = UiError::listener("click", "detached node");
        assert_eq!(
            err.to_string(),
            "failed to attach `click` listener: detached node"
        );
    }

    #[test]
    fn config_error_wraps_serde_error() {
        let raw = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: UiError = raw.into();
        assert!(err.to_string().starts_with("invalid runtime config"));
    }
}
