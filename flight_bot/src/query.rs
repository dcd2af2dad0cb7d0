use std::fmt;

/// Flight code as typed by the user, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery(String);

impl FlightQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim().to_uppercase();
        if code.is_empty() {
            None
        } else {
            Some(Self(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("aa100", "AA100")]
    #[case("Ua456", "UA456")]
    #[case("  dl7 ", "DL7")]
    #[case("BA2490", "BA2490")]
    fn input_is_uppercased(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(FlightQuery::parse(raw).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_input_is_rejected(#[case] raw: &str) {
        assert_eq!(FlightQuery::parse(raw), None);
    }
}
