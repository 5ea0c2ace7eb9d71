//! Quote-of-the-day cache.
//!
//! # Invariants
//! - At most one successful fetch per calendar day; the fetched quote and
//!   its day are cached in `dailyQuote` / `dailyQuoteDate`.
//! - Never fails: a fetch failure serves the stale cached quote, or the
//!   built-in fallback when nothing was ever cached.

use crate::model::collection::{DAILY_QUOTE_DATE_SLOT, DAILY_QUOTE_SLOT};
use crate::model::preference::Quote;
use crate::remote::quote_source::QuoteSource;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::SlotRepository;
use chrono::NaiveDate;
use log::warn;

const QUOTE_DAY_FORMAT: &str = "%a %b %d %Y";

/// How the returned quote was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOrigin {
    /// Cached earlier today.
    Cached,
    /// Fetched now and cached for the rest of the day.
    Fetched,
    /// Fetch failed; cached quote from an earlier day.
    Stale,
    /// Fetch failed and nothing was cached.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuote {
    pub quote: Quote,
    pub origin: QuoteOrigin,
}

pub struct QuoteService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> QuoteService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Quote for the user's local calendar day.
    ///
    /// Fetches from `source` at most once per day while the fetch succeeds.
    pub fn quote_of_day(&self, source: &dyn QuoteSource) -> DailyQuote {
        let today = quote_day_key(self.store.local_today());
        let cached = self.store.read_json::<Quote>(DAILY_QUOTE_SLOT).into_present();
        let cached_day = self.store.read_text(DAILY_QUOTE_DATE_SLOT);

        if let Some(quote) = cached.as_ref() {
            if cached_day.as_deref() == Some(today.as_str()) {
                return DailyQuote {
                    quote: quote.clone(),
                    origin: QuoteOrigin::Cached,
                };
            }
        }

        match source.fetch_random() {
            Ok(quote) => {
                let cached_ok = self
                    .store
                    .write_json(DAILY_QUOTE_SLOT, &quote)
                    .and_then(|()| self.store.write_text(DAILY_QUOTE_DATE_SLOT, &today));
                if let Err(err) = cached_ok {
                    warn!("event=quote_cache module=quote status=error error={err}");
                }
                DailyQuote {
                    quote,
                    origin: QuoteOrigin::Fetched,
                }
            }
            Err(err) => {
                warn!("event=quote_fetch module=quote status=error error={err}");
                match cached {
                    Some(quote) => DailyQuote {
                        quote,
                        origin: QuoteOrigin::Stale,
                    },
                    None => DailyQuote {
                        quote: Quote::fallback(),
                        origin: QuoteOrigin::Fallback,
                    },
                }
            }
        }
    }
}

/// Day key stored in `dailyQuoteDate`, e.g. `Sat Mar 01 2025`.
pub fn quote_day_key(day: NaiveDate) -> String {
    day.format(QUOTE_DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::quote_day_key;
    use chrono::NaiveDate;

    #[test]
    fn day_key_uses_short_weekday_and_month() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(quote_day_key(day), "Sat Mar 01 2025");
    }
}
