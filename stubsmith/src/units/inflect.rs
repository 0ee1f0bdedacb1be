//! Just enough English inflection for accessor and class names.

use heck::ToUpperCamelCase;

const IRREGULAR: &[(&str, &str)] = &[("person", "people"), ("child", "children")];

/// Plural endings rewritten before the regular `s`/`es` rules apply.
const PLURAL_SUFFIXES: &[(&str, &str)] = &[("sis", "ses"), ("iz", "izzes")];

/// Singular endings, most specific first. The first match wins.
const SINGULAR_SUFFIXES: &[(&str, &str)] = &[
    ("buses", "bus"),
    ("statuses", "status"),
    ("aliases", "alias"),
    ("izzes", "iz"),
    ("zzes", "zz"),
    ("yses", "ysis"),
    ("shoes", "shoe"),
    ("oes", "o"),
    ("sses", "ss"),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
];

/// Converts `line_item` to `LineItem` and `admin/line_item` to
/// `Admin::LineItem`.
#[must_use]
pub fn camelize(word: &str) -> String {
    word.split('/')
        .map(|segment| segment.to_upper_camel_case())
        .collect::<Vec<_>>()
        .join("::")
}

/// Plural form of a lowercase word.
#[must_use]
pub fn pluralize(word: &str) -> String {
    if let Some((singular, plural)) = IRREGULAR
        .iter()
        .find(|(candidate, _)| word.ends_with(candidate))
    {
        let stem = word.strip_suffix(singular).unwrap_or(word);
        return format!("{stem}{plural}");
    }
    if let Some(rewritten) = rewrite_suffix(word, PLURAL_SUFFIXES) {
        return rewritten;
    }
    if let Some(stem) = word.strip_suffix('y').filter(|stem| ends_with_consonant(stem)) {
        return format!("{stem}ies");
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Singular form of a lowercase word.
#[must_use]
pub fn singularize(word: &str) -> String {
    if let Some((singular, plural)) = IRREGULAR
        .iter()
        .find(|(_, candidate)| word.ends_with(candidate))
    {
        let stem = word.strip_suffix(plural).unwrap_or(word);
        return format!("{stem}{singular}");
    }
    if let Some(rewritten) = rewrite_suffix(word, SINGULAR_SUFFIXES) {
        return rewritten;
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("sis") {
        return word.to_owned();
    }
    word.strip_suffix('s').unwrap_or(word).to_owned()
}

fn rewrite_suffix(word: &str, rules: &[(&str, &str)]) -> Option<String> {
    rules
        .iter()
        .find_map(|(from, to)| word.strip_suffix(*from).map(|stem| format!("{stem}{to}")))
}

fn ends_with_consonant(stem: &str) -> bool {
    stem.chars()
        .last()
        .is_some_and(|last| last.is_ascii_alphabetic() && !"aeiou".contains(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("line_item", "LineItem")]
    #[case("admin/line_item", "Admin::LineItem")]
    #[case("user", "User")]
    #[case("oauth2_token", "Oauth2Token")]
    fn camelizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camelize(input), expected);
    }

    #[rstest]
    #[case("status", "statuses")]
    #[case("category", "categories")]
    #[case("day", "days")]
    #[case("box", "boxes")]
    #[case("kind", "kinds")]
    #[case("salesperson", "salespeople")]
    #[case("bus", "buses")]
    #[case("quiz", "quizzes")]
    #[case("analysis", "analyses")]
    fn pluralizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(pluralize(input), expected);
    }

    #[rstest]
    #[case("line_items", "line_item")]
    #[case("categories", "category")]
    #[case("addresses", "address")]
    #[case("statuses", "status")]
    #[case("children", "child")]
    #[case("status", "status")]
    #[case("buses", "bus")]
    #[case("bus", "bus")]
    #[case("quizzes", "quiz")]
    #[case("buzzes", "buzz")]
    #[case("heroes", "hero")]
    #[case("shoes", "shoe")]
    #[case("analyses", "analysis")]
    #[case("analysis", "analysis")]
    #[case("cases", "case")]
    fn singularizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(singularize(input), expected);
    }
}
