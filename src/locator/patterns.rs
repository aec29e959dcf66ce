//! Per-language declaration pattern templates.
//!
//! Each language owns an ordered list of regex-shaped templates containing
//! exactly one [`PLACEHOLDER`] for the function name. Order encodes
//! precedence: more specific declaration shapes come first, and the locator
//! returns the first template in list order that matches.
//!
//! Every template anchors at a line start (multiline `^`) and captures the
//! leading indentation so the match offset is the start of the declaration
//! line. Rejecting mid-identifier matches (`myFunctionNameExtra` when
//! searching `FunctionName`) falls out of the surrounding declaration syntax.

/// Placeholder token substituted with the escaped function name.
pub const PLACEHOLDER: &str = "{FUNCTION_NAME}";

/// Python: optional `async`, `def`, the name, an optional PEP 695 type
/// parameter list (one nesting level of square brackets), opening paren.
pub const PYTHON: &[&str] = &[
    r"^([ \t]*)(?:async\s+)?def\s+{FUNCTION_NAME}\s*(?:\[(?:[^\[\]]|\[[^\[\]]*\])*\]\s*)?\(",
];

/// Java: repeatable annotations (optionally parameterized), repeatable
/// modifiers, an optional type-parameter list (one nesting level of angle
/// brackets), annotations again, then a non-greedy return-type segment.
///
/// Return types are structurally ambiguous with modifiers under a regex, so
/// the return-type segment is lazy to avoid over-consuming. Annotation and
/// modifier tokens separated by newlines stay contiguous because `\s` spans
/// line breaks.
pub const JAVA: &[&str] = &[
    r"^([ \t]*)(?:@[A-Za-z_][\w.]*?(?:\([^)]*\))?\s*)*(?:(?:public|protected|private|static|abstract|final|synchronized|native|strictfp)\s+)*(?:<(?:(?:[^<>]|<[^<>]*>)*?)>\s*)?(?:@[A-Za-z_][\w.]*?(?:\([^)]*\))?\s*)*(?:[A-Za-z_$][\w.$<>?,\s@\[\]]*?)\s+{FUNCTION_NAME}\s*\(",
];

/// JavaScript, in precedence order: function-keyword form, method-shorthand
/// form, arrow function assigned to a variable.
///
/// The method-shorthand shape has no mandatory keyword context, so a bare
/// call site at a line start can match it. That false positive is inherent
/// to lexical matching and is tolerated.
pub const JAVASCRIPT: &[&str] = &[
    r"^([ \t]*)(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*{FUNCTION_NAME}[ \t]*\(",
    r"^([ \t]*)(?:static\s+)?(?:(?:async|get|set)\s+)?\*?[ \t]*{FUNCTION_NAME}[ \t]*\(",
    r"^([ \t]*)(?:export\s+)?(?:(?:const|let|var)\s+)?{FUNCTION_NAME}\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
];

/// TypeScript: superset of the JavaScript shapes. The modifier set grows by
/// the TS-only keywords and the name may be followed by a generic parameter
/// list tolerating one nesting level and `=>` function-type tokens inside.
pub const TYPESCRIPT: &[&str] = &[
    r"^([ \t]*)(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*{FUNCTION_NAME}(?:<(?:[^<>]|=>|<[^<>]*(?:<[^<>]*>[^<>]*)*>)*>)?[ \t]*\(",
    r"^([ \t]*)(?:export\s+)?(?:(?:public|protected|private|static|abstract|override|readonly|declare|async|get|set)\s+)*{FUNCTION_NAME}(?:<(?:[^<>]|=>|<[^<>]*(?:<[^<>]*>[^<>]*)*>)*>)?[ \t]*\(",
    r"^([ \t]*)(?:export\s+)?(?:(?:const|let|var)\s+)?{FUNCTION_NAME}\s*=\s*(?:async\s+)?(?:<(?:[^<>]|<[^<>]*>)*>\s*)?\([^)]*\)\s*=>",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_template_lists() -> [(&'static str, &'static [&'static str]); 4] {
        [
            ("python", PYTHON),
            ("java", JAVA),
            ("javascript", JAVASCRIPT),
            ("typescript", TYPESCRIPT),
        ]
    }

    #[test]
    fn test_placeholder_appears_exactly_once_per_template() {
        for (lang, templates) in all_template_lists() {
            for template in templates {
                let count = template.matches(PLACEHOLDER).count();
                assert_eq!(count, 1, "{} template has {} placeholders: {}", lang, count, template);
            }
        }
    }

    #[test]
    fn test_every_template_compiles_with_plain_name() {
        for (lang, templates) in all_template_lists() {
            for template in templates {
                let pattern = template.replacen(PLACEHOLDER, "someFunction", 1);
                regex::RegexBuilder::new(&pattern)
                    .multi_line(true)
                    .build()
                    .unwrap_or_else(|e| panic!("{} template failed to compile: {}", lang, e));
            }
        }
    }

    #[test]
    fn test_every_template_compiles_with_escaped_metacharacter_name() {
        // $ and . are legal identifier characters in some of these languages.
        let escaped = regex::escape("jQuery$.extend");
        for (lang, templates) in all_template_lists() {
            for template in templates {
                let pattern = template.replacen(PLACEHOLDER, &escaped, 1);
                regex::RegexBuilder::new(&pattern)
                    .multi_line(true)
                    .build()
                    .unwrap_or_else(|e| panic!("{} template failed to compile: {}", lang, e));
            }
        }
    }

    #[test]
    fn test_substitution_leaves_surrounding_template_intact() {
        let template = PYTHON[0];
        let substituted = template.replacen(PLACEHOLDER, "foo", 1);
        let (prefix, suffix) = template
            .split_once(PLACEHOLDER)
            .expect("template carries the placeholder");
        assert!(substituted.starts_with(prefix));
        assert!(substituted.ends_with(suffix));
    }
}
