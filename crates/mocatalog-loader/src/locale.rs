//! POSIX locale parsing and fallback enumeration

use std::fmt;
use std::str::FromStr;

/// A locale of the form `lang[_COUNTRY][.charset][@modifier]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PosixLocale {
    /// Two or three lowercase ASCII letters.
    pub lang: String,
    /// Two uppercase ASCII letters.
    pub country: Option<String>,
    /// Character set token, e.g. `UTF-8`.
    pub charset: Option<String>,
    /// Modifier token, e.g. `latin`.
    pub modifier: Option<String>,
}

/// Returned when a string does not follow the POSIX locale grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a POSIX locale specification")]
pub struct NotPosixLocale;

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Splits a non-empty token off the front of `rest`.
fn take_token(rest: &str) -> Option<(&str, &str)> {
    let end = rest.find(|c: char| !is_token_char(c)).unwrap_or(rest.len());
    (end > 0).then(|| rest.split_at(end))
}

impl PosixLocale {
    /// Parses `input`, returning `None` unless the whole string matches.
    pub fn parse(input: &str) -> Option<Self> {
        let lang_len = input
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(input.len());
        if !(2..=3).contains(&lang_len) {
            return None;
        }
        let (lang, mut rest) = input.split_at(lang_len);

        let mut country = None;
        if let Some(after) = rest.strip_prefix('_') {
            let code = after.get(..2)?;
            if !code.chars().all(|c| c.is_ascii_uppercase()) {
                return None;
            }
            country = Some(code.to_string());
            rest = &after[2..];
        }

        let mut charset = None;
        if let Some(after) = rest.strip_prefix('.') {
            let (token, tail) = take_token(after)?;
            charset = Some(token.to_string());
            rest = tail;
        }

        let mut modifier = None;
        if let Some(after) = rest.strip_prefix('@') {
            let (token, tail) = take_token(after)?;
            modifier = Some(token.to_string());
            rest = tail;
        }

        rest.is_empty().then(|| Self {
            lang: lang.to_string(),
            country,
            charset,
            modifier,
        })
    }

    /// Candidate locale names, most specific first, ending with the bare language.
    pub fn candidates(&self) -> Vec<String> {
        let lang = &self.lang;
        let mut names = Vec::with_capacity(6);

        if let Some(modifier) = &self.modifier {
            match (&self.country, &self.charset) {
                (Some(country), Some(charset)) => {
                    names.push(format!("{lang}_{country}.{charset}@{modifier}"));
                    names.push(format!("{lang}_{country}@{modifier}"));
                }
                (Some(country), None) => names.push(format!("{lang}_{country}@{modifier}")),
                (None, Some(charset)) => names.push(format!("{lang}.{charset}@{modifier}")),
                (None, None) => {}
            }
            names.push(format!("{lang}@{modifier}"));
        }

        match (&self.country, &self.charset) {
            (Some(country), Some(charset)) => {
                names.push(format!("{lang}_{country}.{charset}"));
                names.push(format!("{lang}_{country}"));
            }
            (Some(country), None) => names.push(format!("{lang}_{country}")),
            (None, Some(charset)) => names.push(format!("{lang}.{charset}")),
            (None, None) => {}
        }

        names.push(lang.clone());
        names
    }
}

impl FromStr for PosixLocale {
    type Err = NotPosixLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(NotPosixLocale)
    }
}

impl fmt::Display for PosixLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lang)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(charset) = &self.charset {
            write!(f, ".{charset}")?;
        }
        if let Some(modifier) = &self.modifier {
            write!(f, "@{modifier}")?;
        }
        Ok(())
    }
}

/// Lists every locale name worth trying for `locale`, most specific first.
///
/// For `sr_CS.UTF-8@latin` this is `sr_CS.UTF-8@latin`, `sr_CS@latin`,
/// `sr@latin`, `sr_CS.UTF-8`, `sr_CS`, `sr`. Strings outside the POSIX
/// grammar are returned as the only candidate and the empty string yields
/// no candidates.
pub fn list_locales(locale: &str) -> Vec<String> {
    if locale.is_empty() {
        return Vec::new();
    }

    let mut names = PosixLocale::parse(locale)
        .map(|parsed| parsed.candidates())
        .unwrap_or_default();

    if !names.iter().any(|name| name == locale) {
        names.push(locale.to_string());
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> PosixLocale {
        PosixLocale::parse(input).unwrap_or_else(|| panic!("{input} should parse"))
    }

    #[test]
    fn test_parse_all_parts() {
        let locale = parsed("sr_CS.UTF-8@latin");
        assert_eq!(locale.lang, "sr");
        assert_eq!(locale.country.as_deref(), Some("CS"));
        assert_eq!(locale.charset.as_deref(), Some("UTF-8"));
        assert_eq!(locale.modifier.as_deref(), Some("latin"));
    }

    #[test]
    fn test_parse_partial_forms() {
        assert_eq!(parsed("ast").lang, "ast");
        assert_eq!(parsed("de@euro").modifier.as_deref(), Some("euro"));
        assert_eq!(parsed("ja.eucJP").charset.as_deref(), Some("eucJP"));
        assert_eq!(parsed("pt_BR").country.as_deref(), Some("BR"));
        assert!(parsed("pt_BR").charset.is_none());
    }

    #[test]
    fn test_parse_rejects() {
        for input in [
            "", "e", "engl", "EN", "en_us", "en_USA", "en_U", "en.", "en@", "en_US.", "en-US",
            "en_US.UTF 8", "en@latin@x", "en_US@latin.UTF-8", "C", "POSIX",
        ] {
            assert!(PosixLocale::parse(input).is_none(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_charset_token_may_contain_underscore() {
        let locale = parsed("en_US.ISO_8859-1");
        assert_eq!(locale.charset.as_deref(), Some("ISO_8859-1"));
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["sr_CS.UTF-8@latin", "en", "de_DE", "ja.eucJP", "be@latin"] {
            assert_eq!(parsed(input).to_string(), input);
            assert_eq!(input.parse::<PosixLocale>().unwrap(), parsed(input));
        }
        assert_eq!("nope!".parse::<PosixLocale>(), Err(NotPosixLocale));
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NotPosixLocale);
        assert_eq!(err.to_string(), "not a POSIX locale specification");
    }

    #[test]
    fn test_trailing_newline_is_not_posix() {
        assert!(PosixLocale::parse("fr_FR\n").is_none());
        assert_eq!(list_locales("fr_FR\n"), vec!["fr_FR\n"]);
    }

    #[test]
    fn test_list_locales_full_trace() {
        assert_eq!(
            list_locales("sr_CS.UTF-8@latin"),
            vec![
                "sr_CS.UTF-8@latin",
                "sr_CS@latin",
                "sr@latin",
                "sr_CS.UTF-8",
                "sr_CS",
                "sr"
            ]
        );
    }

    #[test]
    fn test_list_locales_empty() {
        assert!(list_locales("").is_empty());
    }

    #[test]
    fn test_list_locales_non_posix() {
        assert_eq!(
            list_locales("not_a_locale_string!!"),
            vec!["not_a_locale_string!!"]
        );
        assert_eq!(list_locales("C"), vec!["C"]);
    }

    #[test]
    fn test_list_locales_language_only() {
        assert_eq!(list_locales("en"), vec!["en"]);
    }

    #[test]
    fn test_list_locales_without_country() {
        assert_eq!(
            list_locales("uz.UTF-8@cyrillic"),
            vec!["uz.UTF-8@cyrillic", "uz@cyrillic", "uz.UTF-8", "uz"]
        );
        assert_eq!(list_locales("ca@valencia"), vec!["ca@valencia", "ca"]);
    }

    #[test]
    fn test_list_locales_without_charset() {
        assert_eq!(
            list_locales("sr_RS@latin"),
            vec!["sr_RS@latin", "sr@latin", "sr_RS", "sr"]
        );
        assert_eq!(list_locales("fr_FR.UTF-8"), vec!["fr_FR.UTF-8", "fr_FR", "fr"]);
    }
}
