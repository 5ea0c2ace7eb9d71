use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use dashboard_core::{
    search_all, BookmarkDraft, BookmarkService, DashboardService, EntityStore, FixedClock,
    MemorySlotRepository, ReminderDraft, ReminderService, SlotRepository,
};
use serde_json::Value;

#[test]
fn scheme_less_bookmark_is_stored_with_https_and_found_by_host() {
    let slots = MemorySlotRepository::new();
    let bookmarks = BookmarkService::new(store(&slots));

    let added = bookmarks
        .add_bookmark(&BookmarkDraft::new("Go Docs", "golang.org"))
        .unwrap()
        .unwrap();
    assert_eq!(added.url, "https://golang.org");

    let store = store(&slots);
    assert_eq!(search_all(&store, "golang").bookmarks, vec![added]);
    assert!(search_all(&store, "python").bookmarks.is_empty());
}

#[test]
fn invalid_bookmarks_are_rejected_without_writing() {
    let slots = MemorySlotRepository::new();
    let bookmarks = BookmarkService::new(store(&slots));

    assert_eq!(
        bookmarks
            .add_bookmark(&BookmarkDraft::new("", "golang.org"))
            .unwrap(),
        None
    );
    assert_eq!(
        bookmarks
            .add_bookmark(&BookmarkDraft::new("Broken", "not a url"))
            .unwrap(),
        None
    );
    assert!(slots.is_empty());
}

#[test]
fn bookmark_tags_are_trimmed_and_deduplicated() {
    let slots = MemorySlotRepository::new();
    let bookmarks = BookmarkService::new(store(&slots));

    let added = bookmarks
        .add_bookmark(
            &BookmarkDraft::new("Rust Book", "https://doc.rust-lang.org/book")
                .with_tags([" rust ", "docs", "", "rust"]),
        )
        .unwrap()
        .unwrap();

    assert_eq!(added.tags, vec!["rust".to_string(), "docs".to_string()]);
    assert_eq!(added.url, "https://doc.rust-lang.org/book");
}

#[test]
fn bookmark_without_stored_tags_loads_with_empty_list() {
    let slots = MemorySlotRepository::new().with_slot(
        "bookmarks",
        r#"[{"id":"1","title":"t","url":"https://a.io","createdAt":"2025-03-01T09:00:00Z"}]"#,
    );
    let bookmarks = BookmarkService::new(store(&slots));

    let listed = bookmarks.list_bookmarks();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].tags.is_empty());
    assert!(bookmarks.delete_bookmark("1").unwrap());
    assert!(bookmarks.list_bookmarks().is_empty());
}

#[test]
fn reminders_stay_sorted_by_date_then_time() {
    let slots = MemorySlotRepository::new();
    let reminders = ReminderService::new(store(&slots));

    reminders
        .add_reminder(&ReminderDraft::new("A", "2025-03-01").at("09:00"))
        .unwrap()
        .unwrap();
    let b = reminders
        .add_reminder(&ReminderDraft::new("B", "2025-02-01"))
        .unwrap()
        .unwrap();
    assert_eq!(b.time, None);

    let titles: Vec<_> = reminders
        .list_reminders()
        .into_iter()
        .map(|reminder| reminder.title)
        .collect();
    assert_eq!(titles, vec!["B", "A"]);

    let raw = slots.read_slot("reminders").unwrap().unwrap();
    let stored: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["time"], "");
    assert_eq!(stored[1]["time"], "09:00");
    assert_eq!(stored[1]["date"], "2025-03-01");
}

#[test]
fn same_day_reminders_order_by_time_with_all_day_first() {
    let slots = MemorySlotRepository::new();
    let reminders = ReminderService::new(store(&slots));

    for (title, time) in [("late", "18:30"), ("all day", ""), ("early", "07:15")] {
        reminders
            .add_reminder(&ReminderDraft::new(title, "2025-03-05").at(time))
            .unwrap()
            .unwrap();
    }

    let titles: Vec<_> = reminders
        .list_reminders()
        .into_iter()
        .map(|reminder| reminder.title)
        .collect();
    assert_eq!(titles, vec!["all day", "early", "late"]);
}

#[test]
fn reminder_requires_title_and_valid_date() {
    let slots = MemorySlotRepository::new();
    let reminders = ReminderService::new(store(&slots));

    assert_eq!(
        reminders
            .add_reminder(&ReminderDraft::new("  ", "2025-03-01"))
            .unwrap(),
        None
    );
    assert_eq!(
        reminders
            .add_reminder(&ReminderDraft::new("call", ""))
            .unwrap(),
        None
    );
    assert!(slots.is_empty());
}

#[test]
fn upcoming_excludes_past_and_completed_reminders() {
    let slots = MemorySlotRepository::new();
    let reminders = ReminderService::new(store(&slots));
    reminders
        .add_reminder(&ReminderDraft::new("this morning", "2025-03-01").at("08:00"))
        .unwrap();
    let tonight = reminders
        .add_reminder(&ReminderDraft::new("tonight", "2025-03-01").at("20:00"))
        .unwrap()
        .unwrap();
    let done = reminders
        .add_reminder(&ReminderDraft::new("next week", "2025-03-08"))
        .unwrap()
        .unwrap();
    reminders.toggle_reminder(&done.id).unwrap().unwrap();

    let upcoming = reminders.upcoming();
    assert_eq!(upcoming, vec![tonight.clone()]);
    assert_eq!(
        upcoming[0].scheduled_at(),
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(20, 0, 0).unwrap())
    );

    assert!(reminders.delete_reminder(&tonight.id).unwrap());
    assert!(reminders.upcoming().is_empty());
}

#[test]
fn upcoming_compares_against_local_wall_clock() {
    let slots = MemorySlotRepository::new();
    // 2025-03-01 23:30 UTC is 2025-03-02 05:00 at UTC+05:30.
    let local_store = || {
        EntityStore::with_clock(
            &slots,
            FixedClock::with_offset(
                Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap(),
                FixedOffset::east_opt(5 * 3600 + 1800).unwrap(),
            ),
        )
    };
    let reminders = ReminderService::new(local_store());
    reminders
        .add_reminder(&ReminderDraft::new("already past locally", "2025-03-02").at("04:00"))
        .unwrap();
    let later = reminders
        .add_reminder(&ReminderDraft::new("later this morning", "2025-03-02").at("06:00"))
        .unwrap()
        .unwrap();

    assert_eq!(reminders.upcoming(), vec![later]);
    assert_eq!(
        DashboardService::new(local_store()).summary().upcoming_reminders,
        1
    );
}

fn store(slots: &MemorySlotRepository) -> EntityStore<&MemorySlotRepository> {
    EntityStore::with_clock(
        slots,
        FixedClock::utc(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()),
    )
}
