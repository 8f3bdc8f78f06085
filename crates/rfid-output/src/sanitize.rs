//! Company name → filename stem.

use std::sync::LazyLock;

use regex::Regex;

static SPECIAL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[&/\\#,+()$~%'":*?<>{}]"#).expect("Invalid special character regex")
});

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("Invalid underscore regex"));

fn transliterate(ch: char) -> char {
    match ch {
        'å' | 'ä' => 'a',
        'ö' => 'o',
        'Å' | 'Ä' => 'A',
        'Ö' => 'O',
        'é' | 'è' => 'e',
        'ü' => 'u',
        other => other,
    }
}

/// Make a company name safe to use as a filename stem.
///
/// Swedish letters are transliterated, path and shell special characters and
/// whitespace runs become `_`, repeated `_` collapse, and leading/trailing
/// `_` are trimmed. May return an empty string.
pub fn sanitize_filename(name: &str) -> String {
    let transliterated: String = name.chars().map(transliterate).collect();
    let replaced = SPECIAL_CHARS.replace_all(&transliterated, "_");
    let replaced = WHITESPACE_RUNS.replace_all(&replaced, "_");
    let collapsed = UNDERSCORE_RUNS.replace_all(&replaced, "_");
    collapsed.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_swedish_letters() {
        assert_eq!(sanitize_filename("Åkeri Öst Väg"), "Akeri_Ost_Vag");
        assert_eq!(sanitize_filename("Café Müller"), "Cafe_Muller");
    }

    #[test]
    fn replaces_special_characters_and_collapses_underscores() {
        assert_eq!(sanitize_filename("A&B / C"), "A_B_C");
        assert_eq!(sanitize_filename("Bolag (Syd) AB"), "Bolag_Syd_AB");
        assert_eq!(sanitize_filename(r#"x:"y"*z?"#), "x_y_z");
        assert_eq!(sanitize_filename("__Acme__"), "Acme");
    }

    #[test]
    fn whitespace_runs_become_one_underscore() {
        assert_eq!(sanitize_filename("Acme \t  Nord"), "Acme_Nord");
    }

    #[test]
    fn only_special_characters_sanitize_to_empty() {
        assert_eq!(sanitize_filename("&&/"), "");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(sanitize_filename("Bolag-1.AB"), "Bolag-1.AB");
        assert_eq!(sanitize_filename("Øresund"), "Øresund");
    }
}
