use airlabs_client::FlightRecord;
use chrono::{DateTime, Utc};
use std::fmt;
use teloxide::utils::html;

use crate::query::FlightQuery;

pub const ACCENT_BLUE: u32 = 0x3498DB;
pub const FOOTER: &str = "Data provided by AirLabs";

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
    pub inline: bool,
}

impl Field {
    fn inline(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            inline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightCard {
    pub title: String,
    pub color: u32,
    pub timestamp: DateTime<Utc>,
    pub fields: Vec<Field>,
    pub footer: &'static str,
}

impl FlightCard {
    pub fn new(record: &FlightRecord, query: &FlightQuery, timestamp: DateTime<Utc>) -> Self {
        let flight_iata = record.flight_iata().unwrap_or(query.as_str());

        let mut fields = vec![
            Field::inline("Airline", record.airline_name()),
            Field::inline("Status", title_case(record.status())),
            Field::inline("Aircraft", record.aircraft_icao()),
            Field::inline(
                "🛫 Departure",
                format!("{}\n{}", record.dep_iata(), record.dep_time()),
            ),
            Field::inline(
                "🛬 Arrival",
                format!("{}\n{}", record.arr_iata(), record.arr_time()),
            ),
        ];

        if let Some((lat, lng)) = record.position() {
            fields.push(Field::inline("📍 Position", format!("{}, {}", lat, lng)));
            fields.push(Field::inline(
                "⬆️ Altitude",
                format!("{} ft", record.altitude()),
            ));
            fields.push(Field::inline("💨 Speed", format!("{} km/h", record.speed())));
        }

        Self {
            title: format!("✈️ Flight {}", flight_iata),
            color: ACCENT_BLUE,
            timestamp,
            fields,
            footer: FOOTER,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    fn stamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// The single message sent back for a `/track` invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Flight(FlightCard),
    ApiError(u16),
    NotFound(String),
    Failure(String),
    Usage,
}

impl Reply {
    /// Renders for Telegram's HTML parse mode.
    pub fn to_html(&self) -> String {
        match self {
            Reply::Flight(card) => {
                let mut out = html::bold(&html::escape(&card.title));
                for field in &card.fields {
                    out.push_str("\n\n");
                    out.push_str(&html::bold(&html::escape(field.name)));
                    out.push('\n');
                    out.push_str(&html::escape(&field.value));
                }
                out.push_str("\n\n");
                out.push_str(&html::italic(&html::escape(&format!(
                    "{} • {}",
                    card.footer,
                    card.stamp()
                ))));
                out
            }
            Reply::NotFound(code) => {
                format!("❌ No flight found: {}", html::bold(&html::escape(code)))
            }
            other => html::escape(&other.to_string()),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Flight(card) => {
                write!(f, "{}", card.title)?;
                for field in &card.fields {
                    write!(f, "\n{}: {}", field.name, field.value.replace('\n', " "))?;
                }
                write!(f, "\n{} • {}", card.footer, card.stamp())
            }
            Reply::ApiError(status) => write!(f, "❌ API error: {}", status),
            Reply::NotFound(code) => write!(f, "❌ No flight found: {}", code),
            Reply::Failure(description) => write!(f, "❌ Error: {}", description),
            Reply::Usage => write!(f, "❌ Usage: /track <flight_iata>"),
        }
    }
}

/// Uppercases the first letter of every word and lowercases the rest, where
/// any non-alphabetic character separates words.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
