//! Script-aware normalization for address strings.
//!
//! Registry addresses arrive in whatever script and punctuation style the
//! member state uses. Normalization maps the characters we know about to
//! ASCII approximations, drops joining punctuation, and collapses the rest
//! to single spaces so the tokenizer sees clean fragments.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// Per-script substitution tables. The German digraph expansions are listed
// first and are shadowed by the general Latin table for the characters both
// define, so `ü` maps to `u` rather than `ue`.
const GERMAN: &[(char, &str)] = &[
    ('Ä', "Ae"), ('Ö', "Oe"), ('Ü', "Ue"), ('ä', "ae"),
    ('ö', "oe"), ('ü', "ue"), ('ß', "ss"), ('ẞ', "SS"),
];

const LATIN: &[(char, &str)] = &[
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"),
    ('Ä', "A"), ('Å', "A"), ('Ă', "A"), ('Æ', "AE"),
    ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"),
    ('Ë', "E"), ('Ì', "I"), ('Í', "I"), ('Î', "I"),
    ('Ï', "I"), ('Ð', "D"), ('Ñ', "N"), ('Ò', "O"),
    ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"),
    ('Ő', "O"), ('Ø', "O"), ('Ș', "S"), ('Ț', "T"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"),
    ('Ű', "U"), ('Ý', "Y"), ('Þ', "TH"), ('ß', "ss"),
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"),
    ('ä', "a"), ('å', "a"), ('ă', "a"), ('æ', "ae"),
    ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"),
    ('ë', "e"), ('ì', "i"), ('í', "i"), ('î', "i"),
    ('ï', "i"), ('ð', "d"), ('ñ', "n"), ('ò', "o"),
    ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"),
    ('ő', "o"), ('ø', "o"), ('ș', "s"), ('ț', "t"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"),
    ('ű', "u"), ('ý', "y"), ('þ', "th"), ('ÿ', "y"),
];

const LATIN_SYMBOLS: &[(char, &str)] = &[('©', "(c)"), ('®', "(r)"), ('™', "TM")];

const GREEK: &[(char, &str)] = &[
    ('α', "a"), ('β', "b"), ('γ', "g"), ('δ', "d"), ('ε', "e"),
    ('ζ', "z"), ('η', "h"), ('θ', "8"), ('ι', "i"), ('κ', "k"),
    ('λ', "l"), ('μ', "m"), ('ν', "n"), ('ξ', "3"), ('ο', "o"),
    ('π', "p"), ('ρ', "r"), ('σ', "s"), ('τ', "t"), ('υ', "y"),
    ('φ', "f"), ('χ', "x"), ('ψ', "ps"), ('ω', "w"), ('ά', "a"),
    ('έ', "e"), ('ί', "i"), ('ό', "o"), ('ύ', "y"), ('ή', "h"),
    ('ώ', "w"), ('ς', "s"), ('ϊ', "i"), ('ΰ', "y"), ('ϋ', "y"),
    ('ΐ', "i"), ('Α', "A"), ('Β', "B"), ('Γ', "G"), ('Δ', "D"),
    ('Ε', "E"), ('Ζ', "Z"), ('Η', "H"), ('Θ', "8"), ('Ι', "I"),
    ('Κ', "K"), ('Λ', "L"), ('Μ', "M"), ('Ν', "N"), ('Ξ', "3"),
    ('Ο', "O"), ('Π', "P"), ('Ρ', "R"), ('Σ', "S"), ('Τ', "T"),
    ('Υ', "Y"), ('Φ', "F"), ('Χ', "X"), ('Ψ', "PS"),
    ('Ω', "W"), ('Ά', "A"), ('Έ', "E"), ('Ί', "I"), ('Ό', "O"),
    ('Ύ', "Y"), ('Ή', "H"), ('Ώ', "W"), ('Ϊ', "I"), ('Ϋ', "Y"),
];

const TURKISH: &[(char, &str)] = &[
    ('ş', "s"), ('Ş', "S"), ('ı', "i"), ('İ', "I"), ('ç', "c"),
    ('Ç', "C"), ('ü', "u"), ('Ü', "U"), ('ö', "o"), ('Ö', "O"),
    ('ğ', "g"), ('Ğ', "G"),
];

const RUSSIAN: &[(char, &str)] = &[
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"),
    ('е', "e"), ('ё', "yo"), ('ж', "zh"), ('з', "z"),
    ('и', "i"), ('й', "j"), ('к', "k"), ('л', "l"), ('м', "m"),
    ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"), ('с', "s"),
    ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "c"),
    ('ч', "ch"), ('ш', "sh"), ('щ', "sh"), ('ъ', ""),
    ('ы', "y"), ('ь', ""), ('э', "e"), ('ю', "yu"), ('я', "ya"),
    ('А', "A"), ('Б', "B"), ('В', "V"), ('Г', "G"), ('Д', "D"),
    ('Е', "E"), ('Ё', "Yo"), ('Ж', "Zh"), ('З', "Z"),
    ('И', "I"), ('Й', "J"), ('К', "K"), ('Л', "L"), ('М', "M"),
    ('Н', "N"), ('О', "O"), ('П', "P"), ('Р', "R"), ('С', "S"),
    ('Т', "T"), ('У', "U"), ('Ф', "F"), ('Х', "H"), ('Ц', "C"),
    ('Ч', "Ch"), ('Ш', "Sh"), ('Щ', "Sh"), ('Ъ', ""),
    ('Ы', "Y"), ('Ь', ""), ('Э', "E"), ('Ю', "Yu"), ('Я', "Ya"),
];

const UKRAINIAN: &[(char, &str)] = &[
    ('Є', "Ye"), ('І', "I"), ('Ї', "Yi"), ('Ґ', "G"),
    ('є', "ye"), ('і', "i"), ('ї', "yi"), ('ґ', "g"),
];

const CZECH: &[(char, &str)] = &[
    ('č', "c"), ('ď', "d"), ('ě', "e"), ('ň', "n"), ('ř', "r"),
    ('š', "s"), ('ť', "t"), ('ů', "u"), ('ž', "z"), ('Č', "C"),
    ('Ď', "D"), ('Ě', "E"), ('Ň', "N"), ('Ř', "R"), ('Š', "S"),
    ('Ť', "T"), ('Ů', "U"), ('Ž', "Z"),
];

const POLISH: &[(char, &str)] = &[
    ('ą', "a"), ('ć', "c"), ('ę', "e"), ('ł', "l"), ('ń', "n"),
    ('ó', "o"), ('ś', "s"), ('ź', "z"), ('ż', "z"), ('Ą', "A"),
    ('Ć', "C"), ('Ę', "e"), ('Ł', "L"), ('Ń', "N"), ('Ó', "O"),
    ('Ś', "S"), ('Ź', "Z"), ('Ż', "Z"),
];

const ROMANIAN: &[(char, &str)] = &[
    ('ă', "a"), ('â', "a"), ('î', "i"), ('ș', "s"), ('ț', "t"),
];

const LATVIAN: &[(char, &str)] = &[
    ('ā', "a"), ('č', "c"), ('ē', "e"), ('ģ', "g"), ('ī', "i"),
    ('ķ', "k"), ('ļ', "l"), ('ņ', "n"), ('š', "s"), ('ū', "u"),
    ('ž', "z"), ('Ā', "A"), ('Č', "C"), ('Ē', "E"), ('Ģ', "G"),
    ('Ī', "i"), ('Ķ', "k"), ('Ļ', "L"), ('Ņ', "N"), ('Š', "S"),
    ('Ū', "u"), ('Ž', "Z"),
];

const LITHUANIAN: &[(char, &str)] = &[
    ('ą', "a"), ('č', "c"), ('ę', "e"), ('ė', "e"), ('į', "i"),
    ('š', "s"), ('ų', "u"), ('ū', "u"), ('ž', "z"), ('Ą', "A"),
    ('Č', "C"), ('Ę', "E"), ('Ė', "E"), ('Į', "I"), ('Š', "S"),
    ('Ų', "U"), ('Ū', "U"), ('Ž', "Z"),
];

// Merge order is significant where tables overlap; later tables win.
const SCRIPT_TABLES: &[&[(char, &str)]] = &[
    GERMAN, LATIN, LATIN_SYMBOLS, GREEK, TURKISH, RUSSIAN, UKRAINIAN, CZECH, POLISH, ROMANIAN,
    LATVIAN, LITHUANIAN,
];

/// Flat codepoint-to-replacement map, built once on first use and read-only
/// afterwards. Shared freely across threads.
static CHARMAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for table in SCRIPT_TABLES {
        for &(ch, replacement) in *table {
            map.insert(ch, replacement);
        }
    }
    map
});

/// Replace every mapped code point with its ASCII approximation.
/// Unmapped characters pass through untouched.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match CHARMAP.get(&ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// Normalize an address string for tokenization.
///
/// Transliterates, strips `-`, `.` and `'` outright, collapses every
/// remaining run of non-alphanumeric characters to a single space, and
/// trims the ends. Never fails; empty input produces empty output.
pub fn normalize(text: &str) -> String {
    let transliterated = transliterate(text);
    let mut out = String::with_capacity(transliterated.len());
    let mut pending_space = false;
    for ch in transliterated.chars() {
        match ch {
            '-' | '.' | '\'' => {}
            c if c.is_ascii_alphanumeric() => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
            _ => pending_space = true,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_umlauts() {
        assert_eq!(normalize("Müller"), "Muller");
        assert_eq!(normalize("Straße"), "Strasse");
        assert_eq!(normalize("Mönchengladbach"), "Monchengladbach");
    }

    #[test]
    fn test_joining_punctuation_stripped_without_space() {
        assert_eq!(normalize("Main-Street."), "MainStreet");
        assert_eq!(normalize("l'Église"), "lEglise");
    }

    #[test]
    fn test_other_punctuation_becomes_single_space() {
        assert_eq!(normalize("Main,Street"), "Main Street");
        assert_eq!(normalize("Main ,;  Street"), "Main Street");
        assert_eq!(normalize("  12 / 14  High St  "), "12 14 High St");
    }

    #[test]
    fn test_greek() {
        assert_eq!(normalize("Αθήνα"), "A8hna");
    }

    #[test]
    fn test_cyrillic() {
        assert_eq!(normalize("Москва"), "Moskva");
        assert_eq!(normalize("Жуков"), "Zhukov");
    }

    #[test]
    fn test_turkish() {
        assert_eq!(normalize("İstanbul"), "Istanbul");
        assert_eq!(normalize("Bağcılar"), "Bagcilar");
    }

    #[test]
    fn test_polish() {
        assert_eq!(normalize("Łódź"), "Lodz");
    }

    #[test]
    fn test_expanding_replacements() {
        assert_eq!(transliterate("Þing"), "THing");
        assert_eq!(normalize("Acme™"), "AcmeTM");
        // The symbol expansion's parentheses are themselves collapsed.
        assert_eq!(normalize("Smith © Co"), "Smith c Co");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("-.'"), "");
        assert_eq!(normalize("  ,, !  "), "");
    }

    #[test]
    fn test_unmapped_characters_collapse_to_space() {
        assert_eq!(normalize("Platz№7"), "Platz 7");
    }
}
