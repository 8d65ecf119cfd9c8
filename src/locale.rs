use chrono::Month;
use itertools::Itertools;
use num_traits::FromPrimitive;
use once_cell::sync::Lazy;

use crate::error::{Error, ErrorKind, Result};

const MONTHS_PER_YEAR: usize = 12;

pub static EN_US: Lazy<MonthNames> = Lazy::new(|| MonthNames {
    short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect(),
    long: months().map(|m| m.name().to_owned()).collect(),
});

/// January through December.
pub fn months() -> impl Iterator<Item = Month> {
    (1..=12).filter_map(Month::from_u32)
}

/// Month names a calendar renders in its navigation label.
///
/// Lookups are case-insensitive and accept either the short or the long form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames {
    short: Vec<String>,
    long: Vec<String>,
}

impl MonthNames {
    pub fn new(short: Vec<String>, long: Vec<String>) -> Result<Self> {
        for (which, names) in [("short", &short), ("long", &long)] {
            if names.len() != MONTHS_PER_YEAR {
                return Err(Error::new(
                    ErrorKind::ConfigParse,
                    &format!(
                        "expected 12 {} month names, got {}: [{}]",
                        which,
                        names.len(),
                        names.iter().join(", ")
                    ),
                ));
            }
        }

        Ok(MonthNames { short, long })
    }

    pub fn short(&self, month: Month) -> &str {
        &self.short[month.number_from_month() as usize - 1]
    }

    pub fn long(&self, month: Month) -> &str {
        &self.long[month.number_from_month() as usize - 1]
    }

    pub fn lookup(&self, token: &str) -> Option<Month> {
        let token = token.to_lowercase();
        let same = |name: &String| name.to_lowercase() == token;

        self.short
            .iter()
            .position(same)
            .or_else(|| self.long.iter().position(same))
            .and_then(|idx| Month::from_usize(idx + 1))
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        EN_US.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_us_lookup() {
        let names = MonthNames::default();
        assert_eq!(names.lookup("Jan"), Some(Month::January));
        assert_eq!(names.lookup("december"), Some(Month::December));
        assert_eq!(names.lookup("SEP"), Some(Month::September));
        assert_eq!(names.lookup("Sept"), None);
        assert_eq!(names.short(Month::May), "May");
        assert_eq!(names.long(Month::February), "February");
    }

    #[test]
    fn custom_names() {
        let short = ["jan", "fév", "mar", "avr", "mai", "juin", "juil", "août", "sep", "oct", "nov", "déc"];
        let long = [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ];
        let names = MonthNames::new(
            short.iter().map(|s| s.to_string()).collect(),
            long.iter().map(|s| s.to_string()).collect(),
        )
        .expect("twelve names each");

        assert_eq!(names.lookup("juil"), Some(Month::July));
        assert_eq!(names.lookup("DÉC"), Some(Month::December));
        assert_eq!(names.lookup("Août"), Some(Month::August));
        assert_eq!(names.lookup("Mai"), Some(Month::May));
        assert_eq!(names.short(Month::December), "déc");
    }

    #[test]
    fn rejects_wrong_count() {
        let err = MonthNames::new(vec!["Jan".to_owned()], EN_US.long.clone())
            .expect_err("one short name is not enough");
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }
}
