pub mod fetcher;

pub use fetcher::{BracketSource, FetchError};
