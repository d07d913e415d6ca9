//! Context-specific escaping for interpolated text.
//!
//! Each output context a template can write into has one escaping function.
//! Templates select one with a `{{ name | filter }}` suffix; see
//! [`crate::template`].

use std::str::FromStr;

/// An escaping context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// HTML text content.
    Html,
    /// Double or single quoted HTML attribute value.
    Attr,
    /// Body of a PHP single-quoted string.
    PhpSingle,
    /// Body of a PHP double-quoted string.
    PhpDouble,
    /// Body of a JavaScript string literal inside a `<script>` element.
    Js,
    /// Text inside a CSS `/* ... */` comment, kept on one line.
    CssComment,
    /// XML text or attribute content.
    Xml,
    /// Content of an XML `<![CDATA[ ... ]]>` section.
    Cdata,
    /// Inline Markdown text, kept on one line.
    Markdown,
    /// Pre-rendered fragment inserted verbatim.
    Raw,
}

impl Escape {
    /// Apply this escaping to `s`.
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Html | Self::Attr => html(s),
            Self::PhpSingle => php_single(s),
            Self::PhpDouble => php_double(s),
            Self::Js => js_string(s),
            Self::CssComment => css_comment(s),
            Self::Xml => xml(s),
            Self::Cdata => cdata(s),
            Self::Markdown => markdown(s),
            Self::Raw => s.to_string(),
        }
    }
}

impl FromStr for Escape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "attr" => Ok(Self::Attr),
            "php_sq" => Ok(Self::PhpSingle),
            "php_dq" => Ok(Self::PhpDouble),
            "js" => Ok(Self::Js),
            "css_comment" => Ok(Self::CssComment),
            "xml" => Ok(Self::Xml),
            "cdata" => Ok(Self::Cdata),
            "md" => Ok(Self::Markdown),
            "raw" => Ok(Self::Raw),
            other => Err(other.to_string()),
        }
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape special XML characters.
#[must_use]
pub fn xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Make `s` safe to place inside a CDATA section.
#[must_use]
pub fn cdata(s: &str) -> String {
    s.replace("]]>", "]]]]><![CDATA[>")
}

/// Escape the body of a PHP single-quoted string.
#[must_use]
pub fn php_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape the body of a PHP double-quoted string.
#[must_use]
pub fn php_double(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Escape the body of a JavaScript string literal.
///
/// `<`, `>` and `&` are written as unicode escapes so the result cannot end
/// the surrounding `<script>` element.
#[must_use]
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '`' => out.push_str("\\`"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Flatten `s` to one line that cannot close a CSS comment.
#[must_use]
pub fn css_comment(s: &str) -> String {
    let single_line = s.split_whitespace().collect::<Vec<_>>().join(" ");
    single_line.replace("*/", "* /")
}

/// Flatten `s` to one line of literal Markdown text.
///
/// Punctuation that Markdown gives meaning to is backslash-escaped, which
/// also keeps `<` from opening raw HTML.
#[must_use]
pub fn markdown(s: &str) -> String {
    let single_line = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(single_line.len());
    for c in single_line.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' | '!'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Lowercase `s` and drop whitespace, as used for placeholder email domains.
#[must_use]
pub fn domain_label(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
        assert_eq!(html("plain"), "plain");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(xml("a & b"), "a &amp; b");
        assert_eq!(xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_cdata_cannot_terminate_section() {
        let escaped = cdata("a]]>b");
        assert!(!escaped.replace("]]]]><![CDATA[>", "").contains("]]>"));
    }

    #[test]
    fn test_php_single() {
        assert_eq!(php_single(r"O'Brien \ Co"), r"O\'Brien \\ Co");
    }

    #[test]
    fn test_php_double() {
        assert_eq!(php_double("cost $5 \"now\""), "cost \\$5 \\\"now\\\"");
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("</script><script>"), "\\u003C/script\\u003E\\u003Cscript\\u003E");
        assert_eq!(js_string("it's \"x\"\n"), "it\\'s \\\"x\\\"\\n");
    }

    #[test]
    fn test_css_comment() {
        assert_eq!(css_comment("Theme */ body{}\nnext"), "Theme * / body{} next");
    }

    #[test]
    fn test_markdown() {
        assert_eq!(markdown("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(markdown("<img src=x>\n# *hi*"), r"\<img src=x\> \# \*hi\*");
    }

    #[test]
    fn test_domain_label() {
        assert_eq!(domain_label("Acme  Labs Inc"), "acmelabsinc");
    }

    #[test]
    fn test_filter_names() {
        assert_eq!("php_sq".parse::<Escape>(), Ok(Escape::PhpSingle));
        assert_eq!("raw".parse::<Escape>(), Ok(Escape::Raw));
        assert_eq!("md".parse::<Escape>(), Ok(Escape::Markdown));
        assert!("shout".parse::<Escape>().is_err());
        assert_eq!(Escape::Raw.apply("<i>"), "<i>");
        assert_eq!(Escape::Attr.apply("\"x\""), "&quot;x&quot;");
    }
}
