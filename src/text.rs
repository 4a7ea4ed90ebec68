//! Text casing, templating, escaping, and wrapping helpers.

/// Words kept lowercase by [`title_case`] unless they lead the text.
static ALWAYS_LOWER: [&str; 12] = [
    "a", "at", "how", "have", "in", "not", "of", "on", "the", "to", "when", "who",
];

/// Words always rendered uppercase by [`title_case`].
static ALWAYS_UPPER: [&str; 3] = ["blm", "fs", "i"];

/// HTML element-content entities (the OWASP escape set).
static HTML_ENTITIES: [(char, &str); 6] = [
    ('&', "amp"),
    ('"', "quot"),
    ('\'', "#39"),
    ('<', "lt"),
    ('>', "gt"),
    ('/', "#x2F"),
];

/// Replace numerical, bracketed placeholders with the given insertions.
///
/// The same index may be substituted in more than one position. Placeholders
/// without a matching insertion are left verbatim.
///
/// # Examples
///
/// ```rust
/// use sundry::text::format;
///
/// assert_eq!(
///     format("I like {0}, {1} and {0}", &["chocolate", "peanut butter"]),
///     "I like chocolate, peanut butter and chocolate"
/// );
/// ```
#[must_use]
pub fn format(template: &str, insertions: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remainder = template;
    while let Some(open) = remainder.find('{') {
        let (head, tail) = remainder.split_at(open);
        out.push_str(head);
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let index = tail
            .get(1..close)
            .and_then(|digits| digits.parse::<usize>().ok());
        match index.and_then(|i| insertions.get(i)) {
            Some(insertion) => out.push_str(insertion),
            None => out.push_str(tail.get(..=close).unwrap_or_default()),
        }
        remainder = tail.get(close + 1..).unwrap_or_default();
    }
    out.push_str(remainder);
    out
}

/// Replace dollar-sign variables (`$1`, `$2`, …) with insertions, in order.
///
/// Each variable is substituted at its first occurrence only.
///
/// # Examples
///
/// ```rust
/// use sundry::text::printf;
///
/// assert_eq!(printf("$1 meet $2", &["hammer", "nail"]), "hammer meet nail");
/// ```
#[must_use]
pub fn printf(template: &str, insertions: &[&str]) -> String {
    insertions
        .iter()
        .enumerate()
        .fold(template.to_owned(), |out, (i, insertion)| {
            out.replacen(&std::format!("${}", i + 1), insertion, 1)
        })
}

/// Uppercase the first character and lowercase the rest.
///
/// # Examples
///
/// ```rust
/// use sundry::text::capitalize;
///
/// assert_eq!(capitalize("hello WORLD"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize individual words, keeping stop words lowercase.
///
/// Words in a short stop list stay lowercase unless they lead the text, and
/// a few abbreviations are always uppercased ("i" → "I"). Whitespace runs
/// collapse to single spaces.
///
/// # Examples
///
/// ```rust
/// use sundry::text::title_case;
///
/// assert_eq!(title_case("the life of brian"), "The Life of Brian");
/// assert_eq!(title_case("what i did"), "What I Did");
/// ```
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(position, word)| {
            let lower = word.to_lowercase();
            if ALWAYS_UPPER.contains(&lower.as_str()) {
                lower.to_uppercase()
            } else if position > 0 && ALWAYS_LOWER.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert text with spaces, underscores, or dashes to camelCase.
///
/// # Examples
///
/// ```rust
/// use sundry::text::camelize;
///
/// assert_eq!(camelize("some-thing HERE"), "someThingHere");
/// ```
#[must_use]
pub fn camelize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut upper_next = false;
    for c in text.to_lowercase().chars() {
        if c == ' ' || c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// ROT13 the ASCII letters of `text`; everything else passes through.
///
/// Empty input yields `None`.
///
/// # Examples
///
/// ```rust
/// use sundry::text::rot13;
///
/// assert_eq!(rot13("Hello"), Some("Uryyb".to_owned()));
/// assert_eq!(rot13(""), None);
/// ```
#[must_use]
pub fn rot13(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(
        text.chars()
            .map(|c| match c {
                'a'..='z' => rotate(c, b'a'),
                'A'..='Z' => rotate(c, b'A'),
                other => other,
            })
            .collect(),
    )
}

/// Rotate an ASCII letter thirteen places within its case band.
const fn rotate(c: char, start: u8) -> char {
    ((c as u8 - start + 13) % 26 + start) as char
}

/// Make a URL slug.
///
/// Camel boundaries are split with hyphens, the text is lowercased,
/// separator runs collapse to single hyphens, a hyphen-wrapped `&` becomes
/// "and", and anything outside `[a-z0-9-]` is dropped. Empty input yields
/// `None`.
///
/// # Examples
///
/// ```rust
/// use sundry::text::slug;
///
/// assert_eq!(slug("PhotoSet of  Things"), Some("photo-set-of-things".to_owned()));
/// assert_eq!(slug("this & that"), Some("this-and-that".to_owned()));
/// assert_eq!(slug(""), None);
/// ```
#[must_use]
pub fn slug(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let mut hyphenated = String::with_capacity(text.len() + 4);
    let mut previous_lower = false;
    for c in text.chars() {
        if c.is_ascii_uppercase() && previous_lower {
            hyphenated.push('-');
        }
        previous_lower = c.is_ascii_lowercase();
        hyphenated.extend(c.to_lowercase());
    }

    // collapse separator runs to single hyphens
    let mut collapsed = String::with_capacity(hyphenated.len());
    let mut last_hyphen = false;
    for c in hyphenated.replace('à', "a").chars() {
        if c.is_whitespace() || c == '_' || c == '/' || c == '-' {
            if !last_hyphen {
                collapsed.push('-');
            }
            last_hyphen = true;
        } else {
            collapsed.push(c);
            last_hyphen = false;
        }
    }

    let cleaned: String = collapsed
        .replace("-&-", "-and-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    // character removals can leave adjacent hyphens behind
    let mut slugged = String::with_capacity(cleaned.len());
    for c in cleaned.chars() {
        if c == '-' && slugged.ends_with('-') {
            continue;
        }
        slugged.push(c);
    }
    Some(slugged)
}

/// Insert line breaks to keep `text` within `line_length` columns.
///
/// Greedy word wrap; a word longer than the line length lands on its own
/// line. Degenerate arguments (empty text or break, a line length under two,
/// or text already short enough) return the text unchanged.
///
/// # Examples
///
/// ```rust
/// use sundry::text::wrap_text;
///
/// assert_eq!(wrap_text("one two three", 8, "\n"), "one two\nthree");
/// assert_eq!(wrap_text("short", 80, "\n"), "short");
/// ```
#[must_use]
pub fn wrap_text(text: &str, line_length: usize, line_break: &str) -> String {
    if text.is_empty() || line_length < 2 || line_break.is_empty() || text.len() <= line_length {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len() + line_break.len());
    let mut length = 0;
    for word in text.split_whitespace() {
        // count one for the space the split removed
        let width = word.len() + 1;
        if length + width > line_length {
            out.push_str(line_break);
            length = 0;
        } else if length > 0 {
            out.push(' ');
        }
        length += width;
        out.push_str(word);
    }
    out
}

/// Escape the HTML element-content entity set.
///
/// # Examples
///
/// ```rust
/// use sundry::text::html_escape;
///
/// assert_eq!(html_escape("a < b & c"), "a &lt; b &amp; c");
/// ```
#[must_use]
pub fn html_escape(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    for c in html.chars() {
        match HTML_ENTITIES.iter().find(|(raw, _)| *raw == c) {
            Some((_, code)) => {
                out.push('&');
                out.push_str(code);
                out.push(';');
            }
            None => out.push(c),
        }
    }
    out
}

/// Reverse [`html_escape`].
///
/// # Examples
///
/// ```rust
/// use sundry::text::html_unescape;
///
/// assert_eq!(html_unescape("a &lt; b &amp; c"), "a < b & c");
/// ```
#[must_use]
pub fn html_unescape(html: &str) -> String {
    let mut out = html.to_owned();
    for (raw, code) in HTML_ENTITIES {
        let mut buffer = [0; 4];
        out = out.replace(&std::format!("&{code};"), raw.encode_utf8(&mut buffer));
    }
    out
}
