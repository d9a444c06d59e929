use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// After a word a marker takes the spaces/tabs before it along, so
// "X [doc1] and" reads "X and". At the start of a line it takes the spaces
// after it instead, leaving indentation alone.
static TRAILING_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S)[ \t]*\[doc\d+\]").expect("trailing citation pattern is valid")
});
static LEADING_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[doc\d+\][ \t]*").expect("leading citation pattern is valid")
});

/// Remove inline retrieval citations (`[doc1]`, `[doc42]`, ...) from model
/// output.
///
/// Removal is repeated until nothing matches, so input such as
/// `[doc[doc1]2]` cannot leave a fresh marker behind.
pub fn strip_citations(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = match TRAILING_CITATION.replace_all(&current, "$1") {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => match LEADING_CITATION.replace_all(&current, "") {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => break,
            },
        };
        current = next;
    }
    if current.len() != text.len() {
        log::trace!(
            "stripped {} bytes of citation markers",
            text.len() - current.len()
        );
    }
    current
}
