//! Bang commands: query prefixes that redirect straight to another site.
//!
//! A query of the form `!trigger remainder` bypasses the backend entirely
//! and navigates to the trigger's site, substituting the percent-encoded
//! remainder into the site's search template. Resolution is pure and
//! synchronous over a static table; navigation itself is the caller's
//! side effect.

use std::borrow::Cow;

/// The substitution placeholder used in bang URL templates.
const PLACEHOLDER: &str = "{{{s}}}";

/// A single bang table entry.
///
/// Invariants: `trigger` is one or more ASCII letters; `template`, when
/// present, contains exactly one [`PLACEHOLDER`]. `None` marks a
/// domain-only bang that always navigates to the bare domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bang {
    /// The token after `!`, matched case-sensitively.
    pub trigger: &'static str,
    /// Domain used for bare navigation when no remainder is given.
    pub domain: &'static str,
    /// Search URL template with one placeholder, or `None` for
    /// domain-only bangs.
    pub template: Option<&'static str>,
}

/// The static bang table, loaded once for the process lifetime.
pub const BANG_TABLE: &[Bang] = &[
    Bang {
        trigger: "a",
        domain: "www.amazon.com",
        template: Some("https://www.amazon.com/s?k={{{s}}}"),
    },
    Bang {
        trigger: "ddg",
        domain: "duckduckgo.com",
        template: Some("https://duckduckgo.com/?q={{{s}}}"),
    },
    Bang {
        trigger: "g",
        domain: "www.google.com",
        template: Some("https://www.google.com/search?q={{{s}}}"),
    },
    Bang {
        trigger: "gh",
        domain: "github.com",
        template: Some("https://github.com/search?q={{{s}}}"),
    },
    Bang {
        trigger: "hn",
        domain: "news.ycombinator.com",
        template: None,
    },
    Bang {
        trigger: "imdb",
        domain: "www.imdb.com",
        template: Some("https://www.imdb.com/find/?q={{{s}}}"),
    },
    Bang {
        trigger: "maps",
        domain: "maps.google.com",
        template: Some("https://www.google.com/maps/search/{{{s}}}"),
    },
    Bang {
        trigger: "r",
        domain: "www.reddit.com",
        template: Some("https://www.reddit.com/search/?q={{{s}}}"),
    },
    Bang {
        trigger: "so",
        domain: "stackoverflow.com",
        template: Some("https://stackoverflow.com/search?q={{{s}}}"),
    },
    Bang {
        trigger: "w",
        domain: "en.wikipedia.org",
        template: Some("https://en.wikipedia.org/wiki/Special:Search?search={{{s}}}"),
    },
    Bang {
        trigger: "wa",
        domain: "www.wolframalpha.com",
        template: Some("https://www.wolframalpha.com/input?i={{{s}}}"),
    },
    Bang {
        trigger: "xkcd",
        domain: "xkcd.com",
        template: None,
    },
    Bang {
        trigger: "yt",
        domain: "www.youtube.com",
        template: Some("https://www.youtube.com/results?search_query={{{s}}}"),
    },
];

/// Outcome of bang resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BangOutcome {
    /// The query named a known bang; navigate to this absolute URL.
    Redirect(String),
    /// Not bang syntax, or an unknown trigger. The caller must treat the
    /// entire original string — `!` included — as a literal search query.
    NotABang,
}

/// Look up a trigger in the bang table, case-sensitively.
pub fn lookup(trigger: &str) -> Option<&'static Bang> {
    BANG_TABLE.iter().find(|bang| bang.trigger == trigger)
}

/// Resolve a raw query string against the bang table.
///
/// The accepted shape is `!<trigger>` optionally followed by one
/// whitespace character and a remainder, where `<trigger>` is one or
/// more ASCII letters. Anything else — no leading `!`, an empty or
/// non-alphabetic trigger, or a trigger missing from the table — yields
/// [`BangOutcome::NotABang`]; an unknown trigger is a deliberate
/// fallback to a literal search, not an error.
///
/// A known trigger with no remainder (or a domain-only entry) redirects
/// to `https://{domain}`. Otherwise the percent-encoded remainder is
/// substituted for the template's placeholder.
pub fn resolve(raw: &str) -> BangOutcome {
    let Some(rest) = raw.strip_prefix('!') else {
        return BangOutcome::NotABang;
    };

    let trigger_len = rest
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if trigger_len == 0 {
        return BangOutcome::NotABang;
    }

    let (trigger, tail) = rest.split_at(trigger_len);
    let remainder = match tail.chars().next() {
        None => "",
        Some(c) if c.is_whitespace() => &tail[c.len_utf8()..],
        // A non-whitespace character after the letters, e.g. `!g2`.
        Some(_) => return BangOutcome::NotABang,
    };

    let Some(bang) = lookup(trigger) else {
        tracing::trace!(trigger, "unknown bang trigger, falling back to literal query");
        return BangOutcome::NotABang;
    };

    match (bang.template, remainder.is_empty()) {
        (Some(template), false) => {
            let encoded: Cow<'_, str> = urlencoding::encode(remainder);
            BangOutcome::Redirect(template.replacen(PLACEHOLDER, &encoded, 1))
        }
        _ => BangOutcome::Redirect(format!("https://{}", bang.domain)),
    }
}
