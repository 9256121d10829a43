use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of week as exchanged with the backend (`MONDAY` … `SUNDAY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in display order, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Wire token used by the backend
    pub fn token(self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }

    /// Two-letter label shown on checkboxes and cards
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
            Weekday::Saturday => "Sa",
            Weekday::Sunday => "Su",
        }
    }

    pub fn from_token(token: &str) -> Option<Weekday> {
        Self::ALL.into_iter().find(|day| day.token() == token)
    }

    pub fn from_label(label: &str) -> Option<Weekday> {
        Self::ALL.into_iter().find(|day| day.label() == label)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Translate wire tokens into display labels. Tokens the map does not know
/// are passed through untouched so nothing silently disappears.
pub fn labels_for_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            Weekday::from_token(token)
                .map(|day| day.label().to_string())
                .unwrap_or_else(|| token.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_label_map_is_two_way() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_token(day.token()), Some(day));
            assert_eq!(Weekday::from_label(day.label()), Some(day));
        }
        assert_eq!(Weekday::from_token("monday"), None);
        assert_eq!(Weekday::from_label("Mon"), None);
    }

    #[test]
    fn test_serde_uses_uppercase_tokens() {
        let json = serde_json::to_string(&vec![Weekday::Monday, Weekday::Sunday]).unwrap();
        assert_eq!(json, r#"["MONDAY","SUNDAY"]"#);

        let parsed: Vec<Weekday> = serde_json::from_str(r#"["FRIDAY"]"#).unwrap();
        assert_eq!(parsed, vec![Weekday::Friday]);
    }

    #[test]
    fn test_labels_for_tokens_keeps_unknown_tokens() {
        let labels = labels_for_tokens(&["MONDAY", "HOLIDAY", "FRIDAY"]);
        assert_eq!(labels, vec!["Mo", "HOLIDAY", "Fr"]);
    }
}
