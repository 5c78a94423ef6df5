//! Rendering of argument lists into a displayable command line.

use std::path::MAIN_SEPARATOR;

/// Token quoting convention used when rendering a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotingStyle {
    /// Every token is wrapped in single quotes so a POSIX shell splits the
    /// rendered line back into the original tokens.
    Posix,
    /// Tokens are joined verbatim.
    None,
}

impl QuotingStyle {
    /// `None` on hosts whose path separator is a backslash, `Posix` elsewhere.
    pub fn for_host() -> Self {
        Self::for_separator(MAIN_SEPARATOR)
    }

    pub fn for_separator(separator: char) -> Self {
        if separator == '\\' {
            Self::None
        } else {
            Self::Posix
        }
    }
}

impl Default for QuotingStyle {
    fn default() -> Self {
        Self::for_host()
    }
}

pub fn quote_argument(arg: &str, style: QuotingStyle) -> String {
    match style {
        QuotingStyle::None => arg.to_string(),
        QuotingStyle::Posix if arg.is_empty() => "\"\"".to_string(),
        QuotingStyle::Posix => format!("'{}'", arg.replace('\'', "'\\''")),
    }
}

/// Join `args` into one line, quoting each token according to `style`.
pub fn render_command_line<I, S>(args: I, style: QuotingStyle) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote_argument(arg.as_ref(), style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `rendered` is `expected` as it would appear quoted under `style`.
///
/// With [`QuotingStyle::None`] the two must be equal. With
/// [`QuotingStyle::Posix`] `rendered` must be `expected` wrapped in one
/// matching pair of single or double quotes.
pub fn is_quoted(rendered: &str, expected: &str, style: QuotingStyle) -> bool {
    match style {
        QuotingStyle::None => rendered == expected,
        QuotingStyle::Posix => ['\'', '"'].into_iter().any(|quote| {
            rendered
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
                .is_some_and(|inner| inner == expected)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_selects_style() {
        assert_eq!(QuotingStyle::for_separator('\\'), QuotingStyle::None);
        assert_eq!(QuotingStyle::for_separator('/'), QuotingStyle::Posix);
    }

    #[test]
    fn posix_wraps_every_token() {
        assert_eq!(
            quote_argument("/usr/bin/grumphp", QuotingStyle::Posix),
            "'/usr/bin/grumphp'"
        );
        assert_eq!(quote_argument("it's", QuotingStyle::Posix), "'it'\\''s'");
        assert_eq!(quote_argument("", QuotingStyle::Posix), "\"\"");
    }

    #[test]
    fn none_style_leaves_tokens_alone() {
        let line = render_command_line(
            ["C:\\tools\\grumphp.bat", "run", "a b", "it's"],
            QuotingStyle::None,
        );
        assert_eq!(line, "C:\\tools\\grumphp.bat run a b it's");
    }

    #[test]
    fn renders_tokens_space_separated() {
        let line = render_command_line(["/usr/bin/php", "-l", "my file.php"], QuotingStyle::Posix);
        assert_eq!(line, "'/usr/bin/php' '-l' 'my file.php'");
    }

    #[test]
    fn is_quoted_accepts_either_quote_character() {
        let path = "/usr/bin/grumphp";
        assert!(is_quoted("'/usr/bin/grumphp'", path, QuotingStyle::Posix));
        assert!(is_quoted("\"/usr/bin/grumphp\"", path, QuotingStyle::Posix));
        assert!(!is_quoted("'/usr/bin/grumphp\"", path, QuotingStyle::Posix));
        assert!(!is_quoted("/usr/bin/grumphp", path, QuotingStyle::Posix));
        assert!(!is_quoted("'", "", QuotingStyle::Posix));
    }

    #[test]
    fn is_quoted_requires_exact_match_without_quoting() {
        assert!(is_quoted("C:\\grumphp", "C:\\grumphp", QuotingStyle::None));
        assert!(!is_quoted("'C:\\grumphp'", "C:\\grumphp", QuotingStyle::None));
    }
}
