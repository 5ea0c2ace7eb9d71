//! Quote-of-the-day collaborator contract.

use crate::model::preference::Quote;
use crate::remote::RemoteResult;

/// External random-quote API.
pub trait QuoteSource {
    fn fetch_random(&self) -> RemoteResult<Quote>;
}
