//! Name collation for passenger lists.
//!
//! Names compare first on a folded key, then by their exact characters so
//! the order is total. The key is the canonical decomposition (NFD) of the
//! name with combining marks dropped and case folded, so `Álvaro` sorts
//! beside `Alvaro` and before `Bruno` however the accent was encoded.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Base letters for Latin letters that carry a stroke or ligature rather
/// than a combining mark, so NFD leaves them whole.
fn fold_undecomposed(c: char, out: &mut String) -> bool {
    let base = match c {
        'ł' | 'Ł' => "l",
        'ø' | 'Ø' => "o",
        'đ' | 'Đ' => "d",
        'ħ' | 'Ħ' => "h",
        'ı' => "i",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'þ' | 'Þ' => "th",
        _ => return false,
    };
    out.push_str(base);
    true
}

/// The primary collation key of `name`.
#[must_use]
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.trim().nfd().filter(|c| !is_combining_mark(*c)) {
        if !fold_undecomposed(c, &mut key) {
            key.extend(c.to_lowercase());
        }
    }
    key
}

/// Compare two guest names.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_key_folds_accents_and_case() {
        assert_eq!(collation_key("Ângela Conceição"), "angela conceicao");
        assert_eq!(collation_key("ÉRICA"), "erica");
        assert_eq!(collation_key("Straße"), "strasse");
        assert_eq!(collation_key("Dvořák Őrs"), "dvorak ors");
    }

    #[test]
    fn test_decomposed_input_folds_like_precomposed() {
        let decomposed = "A\u{301}da\u{301}m";
        assert_eq!(collation_key(decomposed), "adam");
        assert_eq!(collation_key(decomposed), collation_key("Ádám"));
        assert_eq!(compare_names(decomposed, "Adriana"), Ordering::Less);
    }

    #[test]
    fn test_stroked_letters_sort_with_base_letter() {
        assert_eq!(collation_key("Łukasz"), "lukasz");
        assert_eq!(compare_names("Łukasz", "Maria"), Ordering::Less);
        assert_eq!(compare_names("Søren", "Sven"), Ordering::Less);
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        let mut names = vec!["Bruno Costa", "Ângela Dias", "ana Silva", "Carla Dias"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["ana Silva", "Ângela Dias", "Bruno Costa", "Carla Dias"]);
    }

    #[test]
    fn test_ties_broken_by_exact_text() {
        assert_eq!(compare_names("Jose", "José"), Ordering::Less);
        assert_eq!(compare_names("José", "José"), Ordering::Equal);
    }
}
