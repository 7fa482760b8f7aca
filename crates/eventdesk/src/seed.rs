//! Demo data for a freshly authenticated session.
//!
//! Pure generation, no side effects: the caller feeds the result through
//! `EventStore::bulk_import`.

use chrono::{Duration, NaiveDate, NaiveTime};

use eventdesk_core::event::{Category, Event, EventDraft, Organizer};

/// Generates a small, non-overlapping set of demo events spread around a
/// center date, stamped with the given organizer.
pub fn generate_seed_events(organizer: &Organizer, center_date: NaiveDate) -> Vec<Event> {
    let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    let at = |offset: i64, t: NaiveTime| (center_date + Duration::days(offset)).and_time(t).and_utc();

    let drafts = vec![
        EventDraft::online(
            "Weekly standup",
            "https://meet.example.com/standup",
            at(0, time(9, 0)),
            at(0, time(9, 30)),
        )
        .with_description("Team sync on the week's work")
        .with_category(Category::Tech),
        EventDraft::in_person(
            "Quarterly planning",
            "Main office, room 4",
            at(0, time(14, 0)),
            at(0, time(16, 0)),
        )
        .with_description("Roadmap and budget review for next quarter")
        .with_category(Category::Business),
        EventDraft::online(
            "Design critique",
            "https://meet.example.com/critique",
            at(1, time(11, 0)),
            at(1, time(12, 0)),
        )
        .with_description("Walkthrough of the new onboarding mockups")
        .with_category(Category::Design),
        EventDraft::in_person(
            "Rust meetup",
            "Community hall",
            at(2, time(18, 30)),
            at(2, time(20, 30)),
        )
        .with_description("Monthly local meetup, talks and pizza")
        .with_category(Category::Tech),
        EventDraft::online(
            "Book club",
            "https://meet.example.com/books",
            at(3, time(17, 0)),
            at(3, time(18, 0)),
        )
        .with_description("This month: a field guide to procrastination")
        .with_category(Category::Other),
    ];

    drafts
        .into_iter()
        .map(|draft| draft.into_event(organizer.clone()))
        .collect()
}
