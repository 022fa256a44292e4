// SPDX-License-Identifier: MPL-2.0
//! The set of display languages the front-end ships tables for.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// The tag used as table name and persisted preference value.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Matches a tag exactly, ignoring ASCII case. `"zh-CN"` is not `zh` here;
    /// region-bearing host tags go through the resolver instead.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// Matches a table name byte for byte, the way the catalog looks tables up.
    pub fn from_table_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.tag() == tag)
    }

    /// The other supported language, used by the header language toggle.
    pub fn alternate(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_lowercase_language_codes() {
        assert_eq!(Locale::En.tag(), "en");
        assert_eq!(Locale::Zh.tag(), "zh");
    }

    #[test]
    fn from_tag_ignores_case_and_surrounding_whitespace() {
        assert_eq!(Locale::from_tag("ZH"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag(" en "), Some(Locale::En));
    }

    #[test]
    fn from_tag_rejects_regional_and_unknown_tags() {
        assert_eq!(Locale::from_tag("zh-CN"), None);
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn parse_reports_unknown_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(tag) if tag == "fr"));
    }

    #[test]
    fn alternate_toggles_between_the_two_languages() {
        assert_eq!(Locale::En.alternate(), Locale::Zh);
        assert_eq!(Locale::Zh.alternate(), Locale::En);
        assert_eq!(Locale::En.alternate().alternate(), Locale::En);
    }

    #[test]
    fn table_tag_match_is_exact() {
        assert_eq!(Locale::from_table_tag("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_table_tag("ZH"), None);
        assert_eq!(Locale::from_table_tag(" en "), None);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
