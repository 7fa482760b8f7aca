use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Args;
use uuid::Uuid;

use eventdesk_core::event::{Category, EventDraft, EventType};
use eventdesk_core::query::{
    query, serialize_query_state, Filters, Page, QueryState, SortDir, SortKey, SortSpec,
};
use eventdesk_core::schedule::{check_conflict, suggestion_message};

use crate::config::Config;
use crate::render::{event_details, event_table};
use crate::session::SessionStore;
use crate::store::EventStore;

/// Fields of a candidate event, shared by `add` and `edit`.
#[derive(Args, Debug)]
pub struct EventArgs {
    /// Event title
    #[arg(long)]
    pub title: String,

    /// Event description
    #[arg(long)]
    pub description: String,

    /// How the event is held: online or in-person
    #[arg(long = "type")]
    pub event_type: EventType,

    /// Venue; required for in-person events
    #[arg(long)]
    pub location: Option<String>,

    /// Meeting link; required for online events
    #[arg(long)]
    pub link: Option<String>,

    /// Start date/time, e.g. 2024-01-10T14:00
    #[arg(long, value_parser = parse_datetime)]
    pub start: DateTime<Utc>,

    /// End date/time
    #[arg(long, value_parser = parse_datetime)]
    pub end: DateTime<Utc>,

    /// Category: tech, business, design or other
    #[arg(long, default_value = "other")]
    pub category: Category,
}

impl EventArgs {
    fn into_draft(self) -> EventDraft {
        EventDraft {
            title: self.title,
            description: self.description,
            event_type: self.event_type,
            location: self.location,
            event_link: self.link,
            start: self.start,
            end: self.end,
            category: self.category,
        }
    }
}

/// Filter, sort, and page flags for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring to match in the title or description
    #[arg(long)]
    pub search: Option<String>,

    /// Only events of this type
    #[arg(long = "type")]
    pub event_type: Option<EventType>,

    /// Only events in this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Only events on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only events on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Sort column (title, startDateTime, ...)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort direction (asc or desc)
    #[arg(long)]
    pub dir: Option<SortDir>,

    /// Page number, 1-based
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// Creates a new event: validate, conflict-check, then append.
pub fn add(store: &mut EventStore, session: &SessionStore, args: EventArgs) -> Result<()> {
    let Some(identity) = session.current() else {
        bail!("not signed in; run `eventdesk login` first");
    };

    let draft = args.into_draft();
    draft
        .validate()
        .map_err(|e| anyhow!("{e} (field: {})", e.field()))?;

    let event = draft.into_event(identity.to_organizer());
    let check = check_conflict(&event, store.events(), None);
    if check.is_conflict() {
        bail!("{}", suggestion_message(check.suggestions()));
    }

    let id = event.id;
    store.create(event);
    println!("Created event {id}");
    Ok(())
}

/// Replaces an existing event wholesale, keeping its id and organizer
/// snapshot. The event's own prior version is excluded from the conflict
/// comparison.
pub fn edit(store: &mut EventStore, id: Uuid, args: EventArgs) -> Result<()> {
    let Some(existing) = store.get_by_id(id) else {
        bail!("event not found: {id}");
    };
    let organizer = existing.organizer.clone();

    let draft = args.into_draft();
    draft
        .validate()
        .map_err(|e| anyhow!("{e} (field: {})", e.field()))?;

    let event = draft.into_event_with_id(id, organizer);
    let check = check_conflict(&event, store.events(), Some(id));
    if check.is_conflict() {
        bail!("{}", suggestion_message(check.suggestions()));
    }

    store.update(event)?;
    println!("Updated event {id}");
    Ok(())
}

/// Deletes an event by id. An unknown id is an error, not a crash, and
/// leaves the persisted record untouched.
pub fn delete(store: &mut EventStore, id: Uuid) -> Result<()> {
    let removed = store.delete(id)?;
    println!("Deleted event '{}'", removed.title);
    Ok(())
}

/// Prints one event in full.
pub fn show(store: &EventStore, id: Uuid) -> Result<()> {
    let Some(event) = store.get_by_id(id) else {
        bail!("event not found: {id}");
    };
    print!("{}", event_details(event));
    Ok(())
}

/// Filters, sorts, and paginates the collection, printing the table plus a
/// shareable filter string.
pub fn list(store: &EventStore, config: &Config, args: ListArgs) -> Result<()> {
    let filters = Filters {
        search: args.search,
        event_type: args.event_type,
        category: args.category,
        date_from: args.from,
        date_to: args.to,
    };
    // A bare --sort defaults to descending, like a first header click.
    let sort = args.sort.map(|key| SortSpec {
        key,
        dir: args.dir.unwrap_or(SortDir::Desc),
    });

    let page = Page::new(args.page, config.page_size);
    let result = query(store.events(), &filters, sort, page);

    if result.rows.is_empty() {
        println!("No events match (total {}).", result.total);
    } else {
        print!("{}", event_table(&result.rows));
        println!(
            "Showing {} of {} event(s), page {}.",
            result.rows.len(),
            result.total,
            args.page
        );
    }

    let state = QueryState { filters, sort };
    let params = serialize_query_state(&state);
    if !params.is_empty() {
        let mirror: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("Filters: {}", mirror.join("&"));
    }

    Ok(())
}

/// Parses the CLI datetime formats: RFC 3339, or a local-naive
/// `YYYY-MM-DDTHH:MM[:SS]` taken as UTC.
fn parse_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!(
        "invalid date/time '{value}'; expected e.g. 2024-01-10T14:00"
    ))
}
