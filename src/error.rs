use thiserror::Error;

/// Failure taxonomy for one lookup. Every variant is converted into a
/// user-visible message at the session loop; nothing propagates past a
/// single lookup and nothing is retried.
///
/// A missing competitor price is not an error: the competitor client
/// returns `None` and the rest of the flow continues.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("couldn't find an ASIN in that link; make sure it's a valid Amazon product URL")]
    InvalidUrl,

    #[error("no Keepa API key configured; set KEEPA_API_KEY before looking up prices")]
    MissingCredential,

    #[error("the price history contained no valid price points")]
    NoValidPriceData,

    #[error("error fetching data: {0}")]
    Upstream(String),
}
