//! Text token embedding a schedule in a playlist description
//!
//! Format: `(msv1|<lengths>|<capacities>)` with both lists comma-separated
//! decimal integers, e.g. `(msv1|60,60|2,3)`. The token may appear anywhere
//! in the description; only the first occurrence counts.

use crate::schedule::Schedule;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Format tag of the current token version
pub const TOKEN_TAG: &str = "msv1";

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\(msv1\|((?:[0-9]+,?)*)\|((?:[0-9]+,?)*)\)").expect("token pattern is valid")
    })
}

fn parse_list(list: &str) -> Option<Vec<u32>> {
    list.split(',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

impl Schedule {
    /// Parse the first schedule token found in `text`
    ///
    /// Returns `None` when there is no token or the first token does not
    /// describe a valid schedule. Later tokens are never considered.
    pub fn parse(text: &str) -> Option<Schedule> {
        let captures = token_regex().captures(text)?;
        let lengths = parse_list(captures.get(1)?.as_str())?;
        let capacities = parse_list(captures.get(2)?.as_str())?;
        Schedule::new(lengths, capacities).ok()
    }

    /// Render the schedule as a token
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |values: Vec<u32>| {
            values
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(
            f,
            "({}|{}|{})",
            TOKEN_TAG,
            join(self.lengths()),
            join(self.capacities())
        )
    }
}

/// Remove the first schedule token from `text`, leaving the rest untouched
pub fn strip_token(text: &str) -> String {
    token_regex().replace(text, "").into_owned()
}

/// Whether `text` carries a parseable schedule
pub fn has_schedule(text: &str) -> bool {
    Schedule::parse(text).is_some()
}

/// Build the description to store for `schedule`
///
/// The old token is removed, the remaining text trimmed, and the new token
/// appended after a single space. A description with no other text becomes
/// just the token.
pub fn embed_in_description(description: &str, schedule: &Schedule) -> String {
    let stripped = strip_token(description);
    let rest = stripped.trim();
    if rest.is_empty() {
        schedule.to_token()
    } else {
        format!("{} {}", rest, schedule.to_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_inside_text() {
        let schedule = Schedule::parse("Morning mix (msv1|60,60|2,3) some notes").unwrap();
        assert_eq!(schedule.lengths(), vec![60, 60]);
        assert_eq!(schedule.capacities(), vec![2, 3]);
    }

    #[test]
    fn parses_empty_lists_as_default() {
        assert_eq!(
            Schedule::parse("(msv1||)"),
            Some(Schedule::default_schedule())
        );
    }

    #[test]
    fn tolerates_trailing_commas() {
        let schedule = Schedule::parse("(msv1|30,|1,)").unwrap();
        assert_eq!(schedule.lengths(), vec![30]);
        assert_eq!(schedule.capacities(), vec![1]);
    }

    #[test]
    fn missing_token_is_none() {
        assert_eq!(Schedule::parse("just a playlist"), None);
        assert_eq!(Schedule::parse("(msv2|60|1)"), None);
        assert_eq!(Schedule::parse(""), None);
    }

    #[test]
    fn invalid_first_token_is_none_even_if_later_is_valid() {
        assert_eq!(Schedule::parse("(msv1|60|1,2) (msv1|60|1)"), None);
    }

    #[test]
    fn only_first_token_is_used() {
        let schedule = Schedule::parse("(msv1|10|1) (msv1|20|2)").unwrap();
        assert_eq!(schedule.lengths(), vec![10]);
    }

    #[test]
    fn rejects_oversized_schedule() {
        assert_eq!(Schedule::parse("(msv1|1000,500|1,1)"), None);
    }

    #[test]
    fn rejects_numbers_out_of_range() {
        assert_eq!(Schedule::parse("(msv1|99999999999|1)"), None);
    }

    #[test]
    fn rejects_zero_length() {
        assert_eq!(Schedule::parse("(msv1|0,60|1,1)"), None);
    }

    #[test]
    fn parse_canonicalizes_full_day() {
        let schedule = Schedule::parse("(msv1|720,720|4,6)").unwrap();
        assert_eq!(schedule.to_token(), "(msv1|720|4)");
    }

    #[test]
    fn renders_token() {
        let schedule = Schedule::new(vec![60, 45], vec![2, 0]).unwrap();
        assert_eq!(schedule.to_token(), "(msv1|60,45|2,0)");
        assert_eq!(Schedule::default_schedule().to_token(), "(msv1||)");
    }

    #[test]
    fn strip_removes_only_first_token() {
        assert_eq!(
            strip_token("a (msv1|1|1) b (msv1|2|2) c"),
            "a  b (msv1|2|2) c"
        );
        assert_eq!(strip_token("no token here"), "no token here");
    }

    #[test]
    fn embed_replaces_existing_token() {
        let schedule = Schedule::new(vec![90], vec![3]).unwrap();
        assert_eq!(
            embed_in_description("  Party (msv1|60|1) night ", &schedule),
            "Party  night (msv1|90|3)"
        );
    }

    #[test]
    fn embed_into_empty_description() {
        let schedule = Schedule::default_schedule();
        assert_eq!(embed_in_description("", &schedule), "(msv1||)");
        assert_eq!(embed_in_description("(msv1|5|5)", &schedule), "(msv1||)");
    }

    #[test]
    fn has_schedule_checks_validity() {
        assert!(has_schedule("x (msv1|60|2)"));
        assert!(!has_schedule("x (msv1|60|2,3)"));
    }
}
