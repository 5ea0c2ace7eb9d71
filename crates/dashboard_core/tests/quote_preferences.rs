use chrono::{FixedOffset, TimeZone, Utc};
use dashboard_core::{
    EntityStore, FixedClock, MemorySlotRepository, PreferenceService, Quote, QuoteOrigin,
    QuoteService, QuoteSource, RemoteError, RemoteResult, SlotRepository, Theme,
};
use std::cell::Cell;

#[test]
fn first_fetch_of_the_day_is_cached_with_day_key() {
    let slots = MemorySlotRepository::new();
    let source = CountingSource::ok("Stay hungry.", "Someone");
    let quotes = QuoteService::new(store_on(&slots, 1));

    let first = quotes.quote_of_day(&source);
    assert_eq!(first.origin, QuoteOrigin::Fetched);
    assert_eq!(first.quote, Quote::new("Stay hungry.", "Someone"));
    assert_eq!(
        slots.read_slot("dailyQuoteDate").unwrap().as_deref(),
        Some("Sat Mar 01 2025")
    );

    let second = quotes.quote_of_day(&source);
    assert_eq!(second.origin, QuoteOrigin::Cached);
    assert_eq!(second.quote, first.quote);
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn new_day_refetches() {
    let slots = MemorySlotRepository::new();
    let source = CountingSource::ok("Keep going.", "Someone");
    QuoteService::new(store_on(&slots, 1)).quote_of_day(&source);

    let next_day = QuoteService::new(store_on(&slots, 2)).quote_of_day(&source);

    assert_eq!(next_day.origin, QuoteOrigin::Fetched);
    assert_eq!(source.calls.get(), 2);
    assert_eq!(
        slots.read_slot("dailyQuoteDate").unwrap().as_deref(),
        Some("Sun Mar 02 2025")
    );
}

#[test]
fn fetch_failure_serves_stale_cache_without_touching_it() {
    let slots = MemorySlotRepository::new();
    QuoteService::new(store_on(&slots, 1))
        .quote_of_day(&CountingSource::ok("Yesterday's quote", "Someone"));

    let stale = QuoteService::new(store_on(&slots, 2)).quote_of_day(&CountingSource::failing());

    assert_eq!(stale.origin, QuoteOrigin::Stale);
    assert_eq!(stale.quote.content, "Yesterday's quote");
    assert_eq!(
        slots.read_slot("dailyQuoteDate").unwrap().as_deref(),
        Some("Sat Mar 01 2025")
    );
}

#[test]
fn fetch_failure_without_cache_serves_fallback() {
    let slots = MemorySlotRepository::new();

    let quote = QuoteService::new(store_on(&slots, 1)).quote_of_day(&CountingSource::failing());

    assert_eq!(quote.origin, QuoteOrigin::Fallback);
    assert_eq!(quote.quote, Quote::fallback());
    assert!(slots.is_empty());
}

#[test]
fn day_key_follows_local_calendar_day() {
    let slots = MemorySlotRepository::new();
    let clock = FixedClock::with_offset(
        Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap(),
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap(),
    );
    let quotes = QuoteService::new(EntityStore::with_clock(&slots, clock));

    quotes.quote_of_day(&CountingSource::ok("Local day.", "Someone"));

    assert_eq!(
        slots.read_slot("dailyQuoteDate").unwrap().as_deref(),
        Some("Sun Mar 02 2025")
    );
}

#[test]
fn theme_defaults_to_os_preference_until_set() {
    let slots = MemorySlotRepository::new();
    let prefs = PreferenceService::new(store_on(&slots, 1));

    assert_eq!(prefs.stored_theme(), None);
    assert_eq!(prefs.theme(Theme::Dark), Theme::Dark);

    prefs.set_theme(Theme::Light).unwrap();
    assert_eq!(prefs.theme(Theme::Dark), Theme::Light);
    assert_eq!(slots.read_slot("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn toggle_flips_effective_theme_and_persists() {
    let slots = MemorySlotRepository::new();
    let prefs = PreferenceService::new(store_on(&slots, 1));

    assert_eq!(prefs.toggle_theme(Theme::Light).unwrap(), Theme::Dark);
    assert_eq!(prefs.toggle_theme(Theme::Light).unwrap(), Theme::Light);
    assert_eq!(prefs.stored_theme(), Some(Theme::Light));
}

#[test]
fn unrecognized_theme_value_reads_as_unset() {
    let slots = MemorySlotRepository::new().with_slot("theme", "sepia");
    let prefs = PreferenceService::new(store_on(&slots, 1));

    assert_eq!(prefs.stored_theme(), None);
    assert_eq!(prefs.theme(Theme::Light), Theme::Light);
}

struct CountingSource {
    quote: Option<Quote>,
    calls: Cell<usize>,
}

impl CountingSource {
    fn ok(content: &str, author: &str) -> Self {
        Self {
            quote: Some(Quote::new(content, author)),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            quote: None,
            calls: Cell::new(0),
        }
    }
}

impl QuoteSource for CountingSource {
    fn fetch_random(&self) -> RemoteResult<Quote> {
        self.calls.set(self.calls.get() + 1);
        self.quote.clone().ok_or_else(|| RemoteError::Service {
            status: 503,
            message: "quote service unavailable".to_string(),
        })
    }
}

fn store_on(slots: &MemorySlotRepository, day: u32) -> EntityStore<&MemorySlotRepository> {
    EntityStore::with_clock(
        slots,
        FixedClock::utc(Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap()),
    )
}
