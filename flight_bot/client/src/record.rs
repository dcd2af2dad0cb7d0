use serde::Deserialize;
use serde_json::Number;

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_AIRPORT: &str = "???";
pub const NOT_AVAILABLE: &str = "N/A";

/// Flight as reported by the provider. Nothing is guaranteed to be present,
/// so every field is optional and the accessors fall back to placeholders.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FlightRecord {
    pub flight_iata: Option<String>,
    pub airline_name: Option<String>,
    pub status: Option<String>,
    pub aircraft_icao: Option<String>,
    pub dep_iata: Option<String>,
    pub dep_time: Option<String>,
    pub arr_iata: Option<String>,
    pub arr_time: Option<String>,
    pub lat: Option<Number>,
    pub lng: Option<Number>,
    pub alt: Option<Number>,
    pub speed: Option<Number>,
}

impl FlightRecord {
    pub fn flight_iata(&self) -> Option<&str> {
        self.flight_iata.as_deref()
    }

    pub fn airline_name(&self) -> &str {
        self.airline_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn aircraft_icao(&self) -> &str {
        self.aircraft_icao.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn dep_iata(&self) -> &str {
        self.dep_iata.as_deref().unwrap_or(UNKNOWN_AIRPORT)
    }

    pub fn dep_time(&self) -> &str {
        self.dep_time.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn arr_iata(&self) -> &str {
        self.arr_iata.as_deref().unwrap_or(UNKNOWN_AIRPORT)
    }

    pub fn arr_time(&self) -> &str {
        self.arr_time.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Live position, only when both coordinates were reported.
    pub fn position(&self) -> Option<(&Number, &Number)> {
        self.lat.as_ref().zip(self.lng.as_ref())
    }

    pub fn altitude(&self) -> String {
        number_or_placeholder(self.alt.as_ref())
    }

    pub fn speed(&self) -> String {
        number_or_placeholder(self.speed.as_ref())
    }
}

fn number_or_placeholder(value: Option<&Number>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), Number::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let record = FlightRecord::default();

        assert_eq!(record.flight_iata(), None);
        assert_eq!(record.airline_name(), "Unknown");
        assert_eq!(record.status(), "Unknown");
        assert_eq!(record.aircraft_icao(), "Unknown");
        assert_eq!(record.dep_iata(), "???");
        assert_eq!(record.arr_iata(), "???");
        assert_eq!(record.dep_time(), "N/A");
        assert_eq!(record.arr_time(), "N/A");
        assert_eq!(record.altitude(), "N/A");
        assert_eq!(record.speed(), "N/A");
        assert!(record.position().is_none());
    }

    #[test]
    fn numbers_keep_their_payload_form() {
        let record: FlightRecord = serde_json::from_value(serde_json::json!({
            "lat": 40.6413,
            "lng": -73.7781,
            "alt": 35000,
            "speed": 870
        }))
        .unwrap();

        let (lat, lng) = record.position().unwrap();
        assert_eq!(lat.to_string(), "40.6413");
        assert_eq!(lng.to_string(), "-73.7781");
        assert_eq!(record.altitude(), "35000");
        assert_eq!(record.speed(), "870");
    }

    #[test]
    fn position_needs_both_coordinates() {
        let record: FlightRecord =
            serde_json::from_value(serde_json::json!({ "lat": 51.47, "lng": null })).unwrap();

        assert!(record.position().is_none());
    }

    #[test]
    fn null_fields_count_as_missing() {
        let record: FlightRecord =
            serde_json::from_value(serde_json::json!({ "airline_name": null, "status": "landed" }))
                .unwrap();

        assert_eq!(record.airline_name(), "Unknown");
        assert_eq!(record.status(), "landed");
    }
}
