use derive_more::Display;

/// Everything that can go wrong between issuing an OHLC request and holding a
/// normalized price series. A fetch fails as one unit; there is no partial result.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP error: {} {}", status, text)]
    HttpStatus { status: u16, text: String },
    #[display(fmt = "Invalid JSON: {}", _0)]
    InvalidJson(String),
    /// Non-empty `error` array reported by the exchange.
    #[display(fmt = "Provider error: {}", _0)]
    Provider(String),
    #[display(fmt = "Response has no result object")]
    MissingResult,
    #[display(fmt = "Response has no candles for {}", _0)]
    MissingPair(String),
    #[display(fmt = "Malformed candle #{}: {}", index, reason)]
    MalformedCandle { index: usize, reason: String },
}

impl std::error::Error for FetchError {}

impl FetchError {
    pub fn provider(messages: &[String]) -> Self {
        FetchError::Provider(messages.join("; "))
    }

    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        FetchError::MalformedCandle { index, reason: reason.into() }
    }

    /// Short kind tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) | FetchError::HttpStatus { .. } => "transport",
            FetchError::InvalidJson(_)
            | FetchError::Provider(_)
            | FetchError::MissingResult
            | FetchError::MissingPair(_)
            | FetchError::MalformedCandle { .. } => "response-shape",
        }
    }
}

/// Simplified application error - fetch failures plus rendering trouble.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
}

impl std::error::Error for AppError {}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Fetch(err)
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type RenderingResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_messages_are_joined() {
        let err = FetchError::provider(&["EQuery:Unknown asset pair".into(), "EGeneral:Busy".into()]);
        assert_eq!(
            err.to_string(),
            "Provider error: EQuery:Unknown asset pair; EGeneral:Busy"
        );
        assert_eq!(err.kind(), "response-shape");
    }

    #[test]
    fn fetch_error_converts_into_app_error() {
        let app: AppError = FetchError::Network("offline".into()).into();
        assert_eq!(app.to_string(), "Network error: offline");
    }
}
