//! Type-signature simplification for editor display
//!
//! Rewrites a compiler-emitted signature into a short single-line form by
//! removing leading type-parameter lists, implicit argument clauses, and
//! dotted type qualifiers, in that order. Malformed input degrades to a
//! truncated or empty result rather than an error.

use regex::Regex;
use std::sync::LazyLock;

/// One-or-more word characters followed by a dot, e.g. the `scala.` in `scala.Option`
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\.").expect("qualifier pattern compiles"));

/// Iteration cap for the qualifier fixed-point loop
const MAX_QUALIFIER_PASSES: usize = 8;

/// Simplify a raw signature into a terse display form.
///
/// `"[T](x: T): T"` becomes `"(x: T): T"`, and
/// `"scala.collection.Seq[scala.Int]"` becomes `"Seq[Int]"`.
pub fn simplify(raw: &str) -> String {
    let text = flatten_whitespace(raw);
    let text = strip_type_parameters(&text);
    let text = strip_implicit_clause(&text);
    strip_qualifiers(&text)
}

/// Collapse line breaks and whitespace runs introduced by upstream word-wrapping
fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop a leading `[...]` type-parameter list, if any
fn strip_type_parameters(text: &str) -> String {
    if !text.starts_with('[') {
        return text.to_string();
    }
    let end = skip_balanced_to(text, b']', 1);
    text.get(end..).unwrap_or("").to_string()
}

/// Remove the first `(implicit ...)` clause, keeping the text around it
fn strip_implicit_clause(text: &str) -> String {
    let Some(start) = text.find("(implicit") else {
        return text.to_string();
    };
    let end = skip_balanced_to(text, b')', start + 1);
    let mut result = text[..start].to_string();
    result.push_str(text.get(end..).unwrap_or(""));
    result
}

/// Remove dotted qualifiers globally, repeating until a pass changes nothing
fn strip_qualifiers(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_QUALIFIER_PASSES {
        let next = QUALIFIER.replace_all(&current, "").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
    tracing::debug!(
        passes = MAX_QUALIFIER_PASSES,
        "qualifier stripping did not converge, returning best effort"
    );
    current
}

/// Scan forward from `start` for `target`, skipping nested bracket and paren
/// constructs. Bracket and paren depth are tracked independently and both
/// must be zero for `target` to match; the match is tested before the depth
/// update at each position. Returns the index one past the match, or
/// `text.len() + 1` when no balanced match exists before the end of the
/// string (callers must slice defensively).
fn skip_balanced_to(text: &str, target: u8, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut bracket_depth = 0i32;
    let mut paren_depth = 0i32;
    for (i, &c) in bytes.iter().enumerate().skip(start) {
        if bracket_depth == 0 && paren_depth == 0 && c == target {
            return i + 1;
        }
        match c {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth -= 1,
            b'(' => paren_depth += 1,
            b')' => paren_depth -= 1,
            _ => {}
        }
    }
    bytes.len() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_type_parameters() {
        assert_eq!(simplify("[T](x: T): T"), "(x: T): T");
    }

    #[test]
    fn test_keeps_text_without_type_parameters() {
        assert_eq!(simplify("(x: Int): Int"), "(x: Int): Int");
    }

    #[test]
    fn test_nested_type_parameter_list() {
        assert_eq!(simplify("[T <: Seq[Int]](x: T): T"), "(x: T): T");
    }

    #[test]
    fn test_strips_implicit_clause() {
        assert_eq!(
            simplify("def foo(x: Int)(implicit y: String): Unit"),
            "def foo(x: Int): Unit"
        );
    }

    #[test]
    fn test_implicit_clause_with_nested_parens() {
        assert_eq!(
            simplify("def foo(x: Int)(implicit ev: (Int, Int) => Int): Unit"),
            "def foo(x: Int): Unit"
        );
    }

    #[test]
    fn test_only_first_implicit_clause_is_removed() {
        assert_eq!(
            simplify("(implicit a: A)(implicit b: B): C"),
            "(implicit b: B): C"
        );
    }

    #[test]
    fn test_strips_qualifiers_including_inside_brackets() {
        assert_eq!(simplify("scala.collection.Seq[scala.Int]"), "Seq[Int]");
    }

    #[test]
    fn test_multi_segment_qualifiers_converge() {
        assert_eq!(simplify("a.b.c.Foo"), "Foo");
        assert_eq!(simplify("a.b.c.d.e.Foo[x.y.Bar]"), "Foo[Bar]");
    }

    #[test]
    fn test_flattens_wrapped_lines() {
        assert_eq!(
            simplify("def foo(\n    x: Int,\n    y: Int\n): Unit"),
            "def foo( x: Int, y: Int ): Unit"
        );
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "[T](x: T): T",
            "def foo(x: Int)(implicit y: String): Unit",
            "scala.collection.Seq[scala.Int]",
            "a.b.c.Foo",
            "",
            "plain text",
        ];
        for input in inputs {
            let once = simplify(input);
            assert_eq!(simplify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_unmatched_bracket_degrades_to_empty() {
        assert_eq!(simplify("[T"), "");
        assert_eq!(simplify("[T](x: T"), "(x: T");
    }

    #[test]
    fn test_unclosed_implicit_clause_truncates() {
        assert_eq!(simplify("def foo(implicit x: Int"), "def foo");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simplify(""), "");
    }

    #[test]
    fn test_skip_balanced_to_reports_one_past_match() {
        assert_eq!(skip_balanced_to("[T]", b']', 1), 3);
        assert_eq!(skip_balanced_to("[Seq[Int]]", b']', 1), 10);
        assert_eq!(skip_balanced_to("(a: (B, C))", b')', 1), 11);
    }

    #[test]
    fn test_skip_balanced_to_past_end_when_unmatched() {
        assert_eq!(skip_balanced_to("[T", b']', 1), 3);
        assert_eq!(skip_balanced_to("", b']', 0), 1);
    }
}
