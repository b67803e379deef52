use std::sync::LazyLock;

use regex::Regex;

pub static STATE_GUARD_RE: LazyLock<Regex> = LazyLock::new(|| guard_regex("state"));
pub static REGION_GUARD_RE: LazyLock<Regex> = LazyLock::new(|| guard_regex("region"));
static OPTION_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"option value="([^"]+)""#).unwrap());

/// One `if (<var> === "<key>") { ... }` section of the form source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardBlock<'a> {
    pub key: &'a str,
    pub body: &'a str,
}

/// Build the matcher for blocks guarded on `var`.
///
/// The body ends at the first line whose only leading content is `}`, so a
/// block never swallows the next `else if` branch.
fn guard_regex(var: &str) -> Regex {
    let pattern = format!(
        r#"(?s)(?:if|else if)\s*\({} === "([^"]+)"\)\s*\{{(.*?)\n\s*\}}"#,
        regex::escape(var)
    );
    Regex::new(&pattern).unwrap()
}

/// All guard blocks matched by `guard`, in document order. Keys are trimmed.
pub fn guard_blocks<'a>(source: &'a str, guard: &Regex) -> Vec<GuardBlock<'a>> {
    guard
        .captures_iter(source)
        .filter_map(|caps| {
            Some(GuardBlock {
                key: caps.get(1)?.as_str().trim(),
                body: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Every `option value="..."` in a block body, in order, duplicates kept.
pub fn option_values(body: &str) -> Vec<&str> {
    OPTION_VALUE_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
