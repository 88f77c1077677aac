use crate::domain::model::Pair;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

// `$$`, `$name` or `${name}`. A `$` followed by anything else is not matched.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\})",
    )
    .unwrap()
});

#[derive(Debug, Clone)]
pub struct MailTemplate {
    source: String,
}

impl MailTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fills known placeholders and leaves everything else as written, so a
    /// typo like `${frist_name}` shows up in the mail instead of failing.
    pub fn safe_substitute(&self, values: &HashMap<&str, String>) -> String {
        PLACEHOLDER
            .replace_all(&self.source, |caps: &Captures| {
                if caps.name("escaped").is_some() {
                    return "$".to_string();
                }

                let key = caps
                    .name("named")
                    .or_else(|| caps.name("braced"))
                    .map(|m| m.as_str())
                    .unwrap_or_default();

                match values.get(key) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

pub fn pair_substitutions(pair: &Pair, subject: &str) -> HashMap<&'static str, String> {
    HashMap::from([
        ("first_mail", pair.giver.mail.clone()),
        ("first_name", title_case(&pair.giver.name)),
        ("second_mail", pair.recipient.mail.clone()),
        ("second_name", title_case(&pair.recipient.name)),
        ("subject", subject.to_string()),
    ])
}

/// Title-cases every run of cased letters: its first letter gets the
/// titlecase form, the rest are lower-cased. Uncased characters (digits,
/// punctuation, CJK) end a run, so `"mary-jane o'neil"` becomes
/// `"Mary-Jane O'Neil"` and `"中a"` becomes `"中A"`.
///
/// Titlecase follows the Latin digraphs and multi-letter upper-case
/// expansions (`ß` -> `Ss`); Greek letters with iota subscript get their
/// plain upper-case expansion instead.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        if is_cased(c) {
            if in_word {
                titled.extend(c.to_lowercase());
            } else {
                push_titlecase(c, &mut titled);
            }
            in_word = true;
        } else {
            titled.push(c);
            in_word = false;
        }
    }

    titled
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || matches!(c, 'ǅ' | 'ǈ' | 'ǋ' | 'ǲ')
}

fn push_titlecase(c: char, out: &mut String) {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
        _ => {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
                out.extend(upper.flat_map(char::to_lowercase));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Participant;

    fn values() -> HashMap<&'static str, String> {
        HashMap::from([
            ("first_name", "Alice".to_string()),
            ("second_name", "Bob".to_string()),
        ])
    }

    #[test]
    fn test_braced_and_bare_placeholders() {
        let template = MailTemplate::new("Hi ${first_name}, you got $second_name!");
        assert_eq!(template.safe_substitute(&values()), "Hi Alice, you got Bob!");
    }

    #[test]
    fn test_unknown_placeholders_stay_literal() {
        let template = MailTemplate::new("Hi ${frist_name} and $budget, from ${first_name}");
        assert_eq!(
            template.safe_substitute(&values()),
            "Hi ${frist_name} and $budget, from Alice"
        );
    }

    #[test]
    fn test_dollar_escapes_and_stray_dollars() {
        let template = MailTemplate::new("Spend $$20 max, ${ broken } or $5 for ${first_name");
        assert_eq!(
            template.safe_substitute(&values()),
            "Spend $20 max, ${ broken } or $5 for ${first_name"
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let template = MailTemplate::new("${first_name} -> ${second_name} ${missing}");
        let first = template.safe_substitute(&values());
        let second = template.safe_substitute(&values());
        assert_eq!(first, second);
        assert_eq!(template.source(), "${first_name} -> ${second_name} ${missing}");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("BOB SMITH"), "Bob Smith");
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("élodie"), "Élodie");
        assert_eq!(title_case("3rd"), "3Rd");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_beyond_ascii() {
        assert_eq!(title_case("中a"), "中A");
        assert_eq!(title_case("ǆemal"), "ǅemal");
        assert_eq!(title_case("ǅEMAL ǇUBO"), "ǅemal ǈubo");
        assert_eq!(title_case("ß"), "Ss");
        assert_eq!(title_case("straße"), "Straße");
    }

    #[test]
    fn test_pair_substitutions() {
        let pair = Pair {
            giver: Participant::new("alice", "a@x.org"),
            recipient: Participant::new("bob", "b@x.org"),
        };

        let values = pair_substitutions(&pair, "Secret Santa 2026");
        assert_eq!(values["first_mail"], "a@x.org");
        assert_eq!(values["first_name"], "Alice");
        assert_eq!(values["second_mail"], "b@x.org");
        assert_eq!(values["second_name"], "Bob");
        assert_eq!(values["subject"], "Secret Santa 2026");
    }
}
