// Failure talking to the lodging API, as seen through the provider port.
#[derive(Debug)]
pub enum LodgingError {
    // Transport-level failure or an unreadable response body.
    Unreachable,
    // Upstream answered with a non-success status; carries its `message`
    // field when one could be parsed out of the error body.
    Rejected { message: Option<String> },
}

// Use-case level errors for the proxy endpoints.
#[derive(Debug)]
pub enum ProxyError {
    // Required query parameters are missing; no network call was made.
    MissingParameters(&'static str),
    // The credential exchange was rejected or unreachable.
    AuthFailed(Option<String>),
    // The downstream data call was rejected or unreachable.
    UpstreamFailed(Option<String>),
}
