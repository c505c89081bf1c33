//! Locale-style string ordering for file paths
//!
//! Approximates the root-locale collation used by `localeCompare`:
//! punctuation sorts before digits, digits before letters, letters compare
//! case-insensitively first, and lowercase precedes uppercase on a tie.
//!
//! Accented Latin letters (Latin-1 Supplement and Latin Extended-A) sort
//! with their base letter, so `é` falls between `e` and `f`; on a tie the
//! unaccented form comes first. Ligatures are not expanded (`æ` is an `a`,
//! `ß` an `s`) and scripts outside Latin compare by code point.

use std::cmp::Ordering;

const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    Other,
}

fn primary_key(c: char) -> (Class, u32) {
    if c.is_whitespace() {
        (Class::Whitespace, c as u32)
    } else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        (Class::Punctuation, rank as u32)
    } else if c.is_ascii_punctuation() {
        (Class::Punctuation, PUNCTUATION_ORDER.len() as u32 + c as u32)
    } else if c.is_numeric() {
        (Class::Digit, c.to_digit(10).unwrap_or(c as u32))
    } else if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        let (base, _) = strip_diacritic(folded);
        (Class::Letter, base as u32)
    } else {
        (Class::Other, c as u32)
    }
}

/// Maps a lowercase Latin letter to its base letter, flagging whether an
/// accent was removed.
fn strip_diacritic(c: char) -> (char, bool) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ð' | 'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' | 'ĸ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' | 'ŋ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' | 'œ' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ß' | 'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return (c, false),
    };
    (base, true)
}

/// Unaccented sorts ahead of accented when base letters are equal.
fn accent_key(c: char) -> u8 {
    if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        u8::from(strip_diacritic(folded).1)
    } else {
        0
    }
}

/// Lowercase sorts ahead of uppercase when the letters are otherwise equal.
fn case_key(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = a.chars().map(accent_key).cmp(b.chars().map(accent_key));
    if secondary != Ordering::Equal {
        return secondary;
    }

    let tertiary = a.chars().map(case_key).cmp(b.chars().map(case_key));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        items.sort_by(|a, b| locale_compare(a, b));
        items
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(
            sorted(vec!["api/Zeta.js", "api/alpha.js", "api/Beta.js"]),
            vec!["api/alpha.js", "api/Beta.js", "api/Zeta.js"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(sorted(vec!["api/A.js", "api/a.js"]), vec!["api/a.js", "api/A.js"]);
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(
            sorted(vec!["api/b.js", "api/1.js", "api/_x.js", "api/-y.js"]),
            vec!["api/_x.js", "api/-y.js", "api/1.js", "api/b.js"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(
            sorted(vec!["api/users/index.js", "api/users.js"]),
            vec!["api/users.js", "api/users/index.js"]
        );
        assert_eq!(locale_compare("api", "api/x"), Ordering::Less);
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(locale_compare("api/éa.js", "api/eb.js"), Ordering::Less);
        assert_eq!(locale_compare("api/é.js", "api/f.js"), Ordering::Less);
        assert_eq!(
            sorted(vec!["api/zoo.js", "api/Über.js", "api/ufo.js", "api/açaí.js"]),
            vec!["api/açaí.js", "api/Über.js", "api/ufo.js", "api/zoo.js"]
        );
    }

    #[test]
    fn test_unaccented_before_accented_on_tie() {
        assert_eq!(sorted(vec!["api/é.js", "api/e.js"]), vec!["api/e.js", "api/é.js"]);
        assert_eq!(sorted(vec!["api/É.js", "api/e.js"]), vec!["api/e.js", "api/É.js"]);
    }

    #[test]
    fn test_equal() {
        assert_eq!(locale_compare("api/a.js", "api/a.js"), Ordering::Equal);
    }
}
