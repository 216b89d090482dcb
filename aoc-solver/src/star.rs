//! Star selector: which part(s) of a puzzle to run

use crate::error::StarParseError;
use std::fmt;
use std::str::FromStr;

/// Selects which star(s) of a puzzle are computed
///
/// Accepted textual forms are the integers `0`, `1`, `2` and the names
/// `all`, `one`, `two` in any case, optionally prefixed with `star.`.
///
/// # Example
///
/// ```
/// use aoc_solver::Star;
///
/// assert_eq!("2".parse::<Star>().unwrap(), Star::Two);
/// assert_eq!("Star.ONE".parse::<Star>().unwrap(), Star::One);
/// assert!("three".parse::<Star>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Star {
    /// Both stars
    #[default]
    All,
    /// First star only
    One,
    /// Second star only
    Two,
}

impl Star {
    /// Whether this selector includes the given part number
    pub fn includes(self, part: u8) -> bool {
        match self {
            Star::All => part == 1 || part == 2,
            Star::One => part == 1,
            Star::Two => part == 2,
        }
    }

    /// Part numbers selected, in ascending order
    pub fn parts(self) -> impl Iterator<Item = u8> {
        (1..=2).filter(move |&part| self.includes(part))
    }

    fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Star::All),
            1 => Some(Star::One),
            2 => Some(Star::Two),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let name = lower.strip_prefix("star.").unwrap_or(&lower);
        match name {
            "all" => Some(Star::All),
            "one" => Some(Star::One),
            "two" => Some(Star::Two),
            _ => None,
        }
    }
}

impl FromStr for Star {
    type Err = StarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selected = match s.parse::<u64>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Self::from_name(s),
        };
        selected.ok_or_else(|| StarParseError(s.to_string()))
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Star::All => "all",
            Star::One => "one",
            Star::Two => "two",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numeric_forms() {
        assert_eq!("0".parse::<Star>().unwrap(), Star::All);
        assert_eq!("1".parse::<Star>().unwrap(), Star::One);
        assert_eq!("2".parse::<Star>().unwrap(), Star::Two);
        assert!("3".parse::<Star>().is_err());
        assert!("-1".parse::<Star>().is_err());
    }

    #[test]
    fn test_named_forms() {
        for (text, expected) in [
            ("all", Star::All),
            ("ONE", Star::One),
            ("Two", Star::Two),
            ("star.all", Star::All),
            ("STAR.ONE", Star::One),
            ("Star.two", Star::Two),
        ] {
            assert_eq!(text.parse::<Star>().unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_rejected_forms() {
        for text in ["", "star.", "star.1", "three", "stars.one", " one", "one "] {
            let err = text.parse::<Star>().unwrap_err();
            assert_eq!(err.0, text);
        }
    }

    #[test]
    fn test_parts_selection() {
        assert_eq!(Star::All.parts().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(Star::One.parts().collect::<Vec<_>>(), vec![1]);
        assert_eq!(Star::Two.parts().collect::<Vec<_>>(), vec![2]);
        assert!(!Star::All.includes(3));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for star in [Star::All, Star::One, Star::Two] {
            assert_eq!(star.to_string().parse::<Star>().unwrap(), star);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Any casing of the accepted names parses, with or without the prefix
        #[test]
        fn prop_case_insensitive_names(
            name in prop::sample::select(vec!["all", "one", "two"]),
            prefixed in any::<bool>(),
            mask in prop::collection::vec(any::<bool>(), 9),
        ) {
            let plain = if prefixed { format!("star.{name}") } else { name.to_string() };
            let mixed: String = plain
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();

            let expected = match name {
                "all" => Star::All,
                "one" => Star::One,
                _ => Star::Two,
            };
            prop_assert_eq!(mixed.parse::<Star>().unwrap(), expected);
        }

        /// Integers other than 0, 1 and 2 are rejected
        #[test]
        fn prop_out_of_range_integers_rejected(n in 3u64..) {
            prop_assert!(n.to_string().parse::<Star>().is_err());
        }
    }
}
