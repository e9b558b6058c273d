//! Class name to variable name resolution
//!
//! Seshat variable classes are named in plural capitalized compound form
//! (`ProfessionalSoldiers`); the variable each class carries uses the
//! singular snake_case form (`professional_soldier`).
//!
//! The singularization rules are a fixed, ordered heuristic:
//!
//! 1. `...ies` becomes `...y` (`BigPonies` -> `BigPony`)
//! 2. sibilant plurals `...sses`, `...xes`, `...zzes`, `...ches`, `...shes`
//!    lose their `es` (`ExampleClasses` -> `ExampleClass`)
//! 3. any other trailing `s` is dropped unless the word ends in `ss`
//!    (`Judges` -> `Judge`, `Horses` -> `Horse`)
//! 4. everything else is already singular
//!
//! English has plurals these rules get wrong (`Axes`, `Buses`). Extend the
//! table only together with a test case for the new form.

use regex::Regex;
use std::sync::LazyLock;

/// One segment of a capitalized compound word
static SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][^A-Z]*|^[^A-Z]+").unwrap());

/// Sibilant plural endings that take `es`
const SIBILANT_PLURALS: &[&str] = &["sses", "xes", "zzes", "ches", "shes"];

/// Resolve the variable name for a plural class name.
///
/// `Camels` -> `camel`, `ExampleClasses` -> `example_class`,
/// `BigPonies` -> `big_pony`, `AlreadySingular` -> `already_singular`.
///
/// An empty class name resolves to an empty variable name.
pub fn variable_name(class_name: &str) -> String {
    to_snake_case(&singularize(class_name))
}

/// Strip the plural suffix from a class name.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }

    if SIBILANT_PLURALS.iter().any(|suffix| word.ends_with(suffix)) {
        return word[..word.len() - 2].to_string();
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Convert a capitalized compound word to lower snake_case.
pub fn to_snake_case(word: &str) -> String {
    join_segments(word, "_")
}

/// Path segment the service uses for a class collection.
///
/// `ProfessionalSoldiers` -> `professional-soldiers`
pub fn endpoint_segment(class_name: &str) -> String {
    join_segments(class_name, "-")
}

fn join_segments(word: &str, separator: &str) -> String {
    SEGMENT_REGEX
        .find_iter(word)
        .map(|m| m.as_str().to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Camels", "camel")]
    #[test_case("ExampleClasses", "example_class")]
    #[test_case("BigPonies", "big_pony")]
    #[test_case("AlreadySingular", "already_singular")]
    #[test_case("Judges", "judge")]
    #[test_case("ProfessionalSoldiers", "professional_soldier")]
    #[test_case("PolitySuprapolities", "polity_suprapolity")]
    #[test_case("Ditches", "ditch")]
    #[test_case("Horses", "horse")]
    #[test_case("Glass", "glass")]
    fn test_variable_name(class_name: &str, expected: &str) {
        assert_eq!(variable_name(class_name), expected);
    }

    #[test]
    fn test_empty_class_name_passes_through() {
        assert_eq!(variable_name(""), "");
        assert_eq!(endpoint_segment(""), "");
    }

    #[test]
    fn test_singularize_precedence() {
        // `ies` wins over the plain `s` rule
        assert_eq!(singularize("Ponies"), "Pony");
        // `ses` that is not `sses` is a plain plural
        assert_eq!(singularize("Houses"), "House");
        assert_eq!(singularize("Brushes"), "Brush");
        assert_eq!(singularize("Boxes"), "Box");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("PolityUtmZone"), "polity_utm_zone");
        assert_eq!(to_snake_case("lowerStart"), "lower_start");
        assert_eq!(to_snake_case("GDP"), "g_d_p");
    }

    #[test]
    fn test_endpoint_segment() {
        assert_eq!(endpoint_segment("ProfessionalSoldiers"), "professional-soldiers");
        assert_eq!(endpoint_segment("Roads"), "roads");
    }
}
