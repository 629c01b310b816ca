//! Ordered literal text substitution.
//!
//! A replacement set is an ordered list of `(search, replace)` pairs. Pairs
//! are applied one after another, each over the full output of the previous
//! one, with non-overlapping greedy left-to-right matching. Matching is
//! literal and case-sensitive and ignores word boundaries, so a search text
//! embedded in a longer unrelated word is replaced too.
//!
//! One refinement keeps sibling tokens apart: when the search text of a pair
//! is a strict prefix of another search text in the same set, occurrences
//! where that longer token matches are left for the pair that owns it.

/// A single literal substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement<'a> {
    pub search: &'a str,
    pub replace: &'a str,
}

impl<'a> Replacement<'a> {
    pub fn new(search: &'a str, replace: &'a str) -> Self {
        Self { search, replace }
    }
}

/// Applies `replacements` to `text` in order and returns the rewritten text.
///
/// Pairs with an empty search text are ignored.
pub fn replace_all(text: &str, replacements: &[Replacement<'_>]) -> String {
    let mut current = text.to_string();

    for (index, rule) in replacements.iter().enumerate() {
        if rule.search.is_empty() {
            continue;
        }

        let shadowing: Vec<&str> = replacements
            .iter()
            .enumerate()
            .filter(|(other, candidate)| {
                *other != index
                    && candidate.search.len() > rule.search.len()
                    && candidate.search.starts_with(rule.search)
            })
            .map(|(_, candidate)| candidate.search)
            .collect();

        current = replace_pair(&current, rule, &shadowing);
    }

    current
}

fn replace_pair(text: &str, rule: &Replacement<'_>, shadowing: &[&str]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut copied_up_to = 0;

    for (start, matched) in text.match_indices(rule.search) {
        let rest = &text[start..];
        if shadowing.iter().any(|longer| rest.starts_with(longer)) {
            continue;
        }
        output.push_str(&text[copied_up_to..start]);
        output.push_str(rule.replace);
        copied_up_to = start + matched.len();
    }

    output.push_str(&text[copied_up_to..]);
    output
}
