pub mod forismatic;

use std::future::Future;
use std::pin::Pin;

use crate::error::QuoteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

pub type QuoteFuture<'a> = Pin<Box<dyn Future<Output = Result<Quote, QuoteError>> + Send + 'a>>;

/// Anything that can hand out a random quote.
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> QuoteFuture<'_>;
}
