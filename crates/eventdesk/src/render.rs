//! Plain-text rendering of events for the terminal.

use chrono::{DateTime, Utc};

use eventdesk_core::event::Event;

/// Timestamp rendering used throughout the table: `DD/MM/YYYY hh:mm AM`.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %I:%M %p").to_string()
}

fn cell(value: &str, width: usize) -> String {
    let text = if value.is_empty() { "-" } else { value };
    if text.chars().count() > width {
        let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{truncated}\u{2026}")
    } else {
        format!("{text:<width$}")
    }
}

/// Renders events as a fixed-width table, one row per event.
pub fn event_table(events: &[Event]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}  {}  {}  {}\n",
        cell("Title", 24),
        cell("Category", 10),
        cell("Type", 10),
        cell("Start", 20),
        cell("End", 20),
        cell("Organizer", 16),
    ));

    for event in events {
        out.push_str(&format!(
            "{}  {}  {}  {}  {}  {}\n",
            cell(&event.title, 24),
            cell(&event.category.to_string(), 10),
            cell(&event.event_type.to_string(), 10),
            cell(&format_datetime(event.start), 20),
            cell(&format_datetime(event.end), 20),
            cell(&event.organizer.user_name, 16),
        ));
    }

    out
}

/// Renders one event in full.
pub fn event_details(event: &Event) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id:          {}\n", event.id));
    out.push_str(&format!("Title:       {}\n", event.title));
    out.push_str(&format!("Description: {}\n", event.description));
    out.push_str(&format!("Type:        {}\n", event.event_type));
    out.push_str(&format!(
        "Location:    {}\n",
        event.location.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Link:        {}\n",
        event.event_link.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("Start:       {}\n", format_datetime(event.start)));
    out.push_str(&format!("End:         {}\n", format_datetime(event.end)));
    out.push_str(&format!("Category:    {}\n", event.category));
    out.push_str(&format!(
        "Organizer:   {} <{}>\n",
        event.organizer.user_name, event.organizer.email
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    use eventdesk_core::event::{Category, EventType, Organizer};

    fn make_event() -> Event {
        Event {
            id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
            title: "Standup".to_string(),
            description: "Daily sync".to_string(),
            event_type: EventType::InPerson,
            location: Some("Room 4".to_string()),
            event_link: None,
            start: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0).unwrap(),
            category: Category::Tech,
            organizer: Organizer {
                user_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_format_datetime_uses_twelve_hour_clock() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 10, 14, 5, 0).unwrap();
        assert_eq!(format_datetime(dt), "10/01/2024 02:05 PM");
    }

    #[test]
    fn test_table_contains_header_and_rows() {
        let table = event_table(&[make_event()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Title"));
        assert!(lines[1].contains("Standup"));
        assert!(lines[1].contains("In Person"));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let mut event = make_event();
        event.title = "A very long event title that will not fit the column".to_string();

        let table = event_table(&[event]);
        assert!(table.lines().nth(1).unwrap().contains('\u{2026}'));
    }

    #[test]
    fn test_details_render_missing_fields_as_dash() {
        let mut event = make_event();
        event.location = None;

        let details = event_details(&event);
        assert!(details.contains("Location:    -"));
        assert!(details.contains("ada@example.com"));
    }
}
