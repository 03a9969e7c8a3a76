pub mod api;
pub mod error;
pub mod fetcher;

pub use api::{CardApi, CardDetail, CardImage, CardKey, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use fetcher::{DetailFetcher, FetchOutcome};
