//! English noun pluralization.
//!
//! Works on the last camel-case word of an identifier, so `bookOrder` becomes
//! `bookOrders` and `salesPerson` becomes `salesPeople`. Lookup order is
//! uncountables, then irregulars, then the first matching suffix rule.

use once_cell::sync::Lazy;
use regex::Regex;

const UNCOUNTABLE: &[&str] = &[
    "advice",
    "aircraft",
    "bison",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "furniture",
    "information",
    "knowledge",
    "luggage",
    "metadata",
    "money",
    "moose",
    "music",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("leaf", "leaves"),
    ("louse", "lice"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

// Ordered by priority, first match wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("(quiz)$", "${1}zes"),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(hive)$", "${1}s"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(ax|test)is$", "${1}es"),
    ("sis$", "ses"),
    ("([ti])um$", "${1}a"),
    ("(buffal|tomat|potat|her)o$", "${1}oes"),
    ("(bu)s$", "${1}ses"),
    ("(alias|status)$", "${1}es"),
    ("(octop|vir)us$", "${1}i"),
    ("s$", "ses"),
    ("(hu|ger|sha|talis|cai|ro)man$", "${1}mans"),
    ("(m)an$", "${1}en"),
    ("$", "s"),
];

static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SUFFIX_RULES
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(&format!("(?i){pattern}")).expect("pluralization rules are valid regexes");
            (regex, *replacement)
        })
        .collect()
});

/// Returns the English plural of `word`.
///
/// Blank input is returned unchanged.
pub fn pluralize(word: &str) -> String {
    if word.trim().is_empty() {
        return word.to_string();
    }

    let (head, tail) = word.split_at(last_word_start(word));
    let lower = tail.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    // Already an irregular plural.
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return format!("{head}{}", match_case(tail, plural));
    }

    RULES
        .iter()
        .find(|(regex, _)| regex.is_match(word))
        .map(|(regex, replacement)| regex.replace(word, *replacement).into_owned())
        .unwrap_or_else(|| word.to_string())
}

/// Byte offset where the last camel-case word of `word` starts.
fn last_word_start(word: &str) -> usize {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, c) = chars[i];
        if !c.is_uppercase() {
            continue;
        }
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, n)| n.is_lowercase());
        if !prev.is_uppercase() || next_is_lower {
            start = offset;
        }
    }

    start
}

/// Applies the capitalization of `template` to `replacement`.
fn match_case(template: &str, replacement: &str) -> String {
    let mut chars = template.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    let rest_upper = template.chars().count() > 1 && chars.all(|c| !c.is_lowercase());

    if first_upper && rest_upper {
        return replacement.to_uppercase();
    }
    if first_upper {
        let mut out = replacement.chars();
        return match out.next() {
            Some(first) => first.to_uppercase().chain(out).collect(),
            None => String::new(),
        };
    }
    replacement.to_string()
}
