//! Plain-text flight card renderer.
//!
//! Turns a `SessionSnapshot` into the text shown to people: a full card for
//! one flight and a one-line summary for listings. Pure functions of the
//! snapshot; nothing here touches the registry.

use crate::domain::foundation::SessionStatus;
use crate::domain::session::{metadata_keys as keys, RoleRoster, SessionSnapshot};

/// Placeholder for a role nobody holds.
pub const UNASSIGNED: &str = "unassigned";

/// Placeholder for a missing metadata field.
const MISSING: &str = "?";

/// Known metadata fields in card order, with their captions.
const ROUTE_FIELDS: [(&str, &str); 6] = [
    (keys::DEPARTURE, "From"),
    (keys::ARRIVAL, "To"),
    (keys::TRANSFER, "Transfer"),
    (keys::ALTERNATE, "Alternate"),
    (keys::TIME, "Time"),
    (keys::GATE, "Gate"),
];

/// Renders flight cards and summaries.
#[derive(Debug, Clone, Default)]
pub struct FlightCardRenderer;

impl FlightCardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Full card: title, route fields, then one line per role in catalog
    /// order.
    pub fn render(&self, snapshot: &SessionSnapshot) -> String {
        let mut card = format!("🛫 Flight {}\n", Self::flight_label(snapshot));

        for (key, caption) in ROUTE_FIELDS {
            if let Some(value) = snapshot.metadata.get(key) {
                card.push_str(&format!("{}: {}\n", caption, value));
            }
        }

        // Fields the card has no caption for, in the creator's order
        for (key, value) in snapshot.metadata.iter() {
            if key != keys::FLIGHT_NUMBER && !ROUTE_FIELDS.iter().any(|(k, _)| *k == key) {
                card.push_str(&format!("{}: {}\n", key, value));
            }
        }

        if snapshot.status == SessionStatus::Closed {
            card.push_str("🔒 Registration closed\n");
        }

        card.push('\n');
        for roster in &snapshot.roles {
            card.push_str(&Self::role_line(roster));
            card.push('\n');
        }

        card
    }

    /// `N.{number} | {from} → {to} (gate {gate})`
    pub fn summary_line(&self, snapshot: &SessionSnapshot) -> String {
        let field = |key| snapshot.metadata.get(key).unwrap_or(MISSING);
        format!(
            "N.{} | {} → {} (gate {})",
            Self::flight_label(snapshot),
            field(keys::DEPARTURE),
            field(keys::ARRIVAL),
            field(keys::GATE)
        )
    }

    /// Summaries of several flights, one per line.
    pub fn summary_list(&self, snapshots: &[SessionSnapshot]) -> String {
        snapshots
            .iter()
            .map(|s| self.summary_line(s))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn flight_label(snapshot: &SessionSnapshot) -> &str {
        snapshot
            .metadata
            .get(keys::FLIGHT_NUMBER)
            .unwrap_or_else(|| snapshot.id.as_str())
    }

    fn role_line(roster: &RoleRoster) -> String {
        let members = if roster.members.is_empty() {
            UNASSIGNED.to_string()
        } else {
            roster
                .members
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        match &roster.emoji {
            Some(emoji) => format!("{} {}: {}", emoji, roster.label, members),
            None => format!("{}: {}", roster.label, members),
        }
    }
}
