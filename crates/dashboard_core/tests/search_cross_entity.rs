use chrono::{TimeZone, Utc};
use dashboard_core::{
    search_all, BookmarkDraft, BookmarkService, EntityStore, FixedClock, JournalDraft,
    JournalService, MemorySlotRepository, NoteService, ReminderDraft, ReminderService,
    SearchCategory, SearchCorpus, TaskService,
};

#[test]
fn query_matches_each_kind_by_its_own_fields() {
    let slots = MemorySlotRepository::new();
    seed(&slots);

    let results = search_all(&store(&slots), "PLAN");

    assert_eq!(results.tasks.len(), 1);
    assert_eq!(results.tasks[0].title, "Plan sprint");
    assert_eq!(results.notes.len(), 1);
    assert_eq!(results.notes[0].title, "Retro");
    assert_eq!(results.journals.len(), 1);
    assert_eq!(results.bookmarks.len(), 1);
    assert_eq!(results.bookmarks[0].tags, vec!["planning".to_string()]);
    assert_eq!(results.reminders.len(), 1);
    assert_eq!(results.total(), 5);
    assert_eq!(results.count(SearchCategory::All), 5);
    assert_eq!(results.query, "PLAN");
}

#[test]
fn task_and_reminder_match_title_only() {
    let slots = MemorySlotRepository::new();
    seed(&slots);

    let results = search_all(&store(&slots), "standup notes");

    assert!(results.tasks.is_empty());
    assert!(results.reminders.is_empty());
    assert_eq!(results.notes.len(), 1);
}

#[test]
fn journal_entry_matches_on_title_alone() {
    let slots = MemorySlotRepository::new();
    seed(&slots);

    let results = search_all(&store(&slots), "saturday");

    assert_eq!(results.journals.len(), 1);
    assert_eq!(results.journals[0].title, "Quiet Saturday");
    assert!(!results.journals[0].content.to_lowercase().contains("saturday"));
    assert_eq!(results.total(), 1);
}

#[test]
fn blank_query_returns_nothing() {
    let slots = MemorySlotRepository::new();
    seed(&slots);
    let store = store(&slots);

    assert!(search_all(&store, "").is_empty());
    assert!(search_all(&store, "   ").is_empty());
}

#[test]
fn unmatched_query_has_zero_counts_everywhere() {
    let slots = MemorySlotRepository::new();
    seed(&slots);

    let results = search_all(&store(&slots), "zzz-nothing");
    for category in [
        SearchCategory::All,
        SearchCategory::Tasks,
        SearchCategory::Notes,
        SearchCategory::Bookmarks,
        SearchCategory::Reminders,
        SearchCategory::Journal,
    ] {
        assert_eq!(results.count(category), 0, "category {}", category.as_str());
    }
}

#[test]
fn preview_caps_each_kind_but_counts_stay_exhaustive() {
    let slots = MemorySlotRepository::new();
    let tasks = TaskService::new(store(&slots));
    for title in ["review one", "review two", "review three", "review four"] {
        tasks.add_task(title, None).unwrap();
    }

    let results = search_all(&store(&slots), "review");
    let preview = results.preview();

    assert_eq!(results.count(SearchCategory::Tasks), 4);
    assert_eq!(preview.tasks.len(), 3);
    let titles: Vec<_> = preview.tasks.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["review four", "review three", "review two"]);
}

#[test]
fn corpus_snapshot_serves_repeated_queries() {
    let slots = MemorySlotRepository::new();
    seed(&slots);
    let corpus = SearchCorpus::load(&store(&slots));

    assert_eq!(corpus.search("retro").notes.len(), 1);
    assert_eq!(corpus.search("docs").bookmarks.len(), 1);
    assert_eq!(corpus.search("dentist").reminders.len(), 1);
}

fn seed(slots: &MemorySlotRepository) {
    TaskService::new(store(slots))
        .add_task("Plan sprint", None)
        .unwrap();
    TaskService::new(store(slots))
        .add_task("Water the garden", None)
        .unwrap();
    NoteService::new(store(slots))
        .create_note("Retro", "standup notes: plan the demo")
        .unwrap();
    BookmarkService::new(store(slots))
        .add_bookmark(&BookmarkDraft::new("Team Docs", "docs.example.com").with_tags(["planning"]))
        .unwrap();
    ReminderService::new(store(slots))
        .add_reminder(&ReminderDraft::new("Planning review", "2025-03-03"))
        .unwrap();
    ReminderService::new(store(slots))
        .add_reminder(&ReminderDraft::new("Dentist", "2025-03-04").at("10:00"))
        .unwrap();
    JournalService::new(store(slots))
        .create_entry(&JournalDraft {
            title: Some("Quiet Saturday".to_string()),
            content: "Made a plan for the week".to_string(),
            ..JournalDraft::default()
        })
        .unwrap();
}

fn store(slots: &MemorySlotRepository) -> EntityStore<&MemorySlotRepository> {
    EntityStore::with_clock(
        slots,
        FixedClock::utc(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()),
    )
}
