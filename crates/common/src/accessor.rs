//! Accessor patterns
//!
//! An accessor pattern is a dot-separated list of segments matched against
//! an accessor path such as `foo.bar.baz[0]`. Each segment is one of:
//!
//! - a literal, compared exactly (`foo`), or a glob when it embeds `*`
//!   (`mutable_*`);
//! - `*`, consuming exactly one path segment;
//! - `**`, consuming any number of path segments.
//!
//! A `**` followed by more segments consumes at least one path segment, and
//! a trailing `**` also matches the path that ends right before it. When the
//! last segment is a glob literal, deeper accessors of the matched root are
//! covered too (`mutable_*` matches `mutable_xxx.foo`).

use regex::Regex;

use crate::options::PatternError;
use crate::text::glob_to_regex;

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Glob(Regex),
    AnyOne,
    AnyDepth,
}

impl Segment {
    fn parse(segment: &str) -> Result<Self, PatternError> {
        Ok(match segment {
            "*" => Segment::AnyOne,
            "**" => Segment::AnyDepth,
            s if s.contains('*') => Segment::Glob(glob_to_regex(s)?),
            s => Segment::Literal(s.to_string()),
        })
    }
}

/// A single compiled accessor pattern
#[derive(Debug, Clone)]
pub struct AccessorPattern {
    source: String,
    segments: Vec<Segment>,
}

impl AccessorPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let segments = pattern.split('.').map(Segment::parse).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { source: pattern.to_string(), segments })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match against a dotted accessor path
    pub fn matches(&self, text: &str) -> bool {
        let path: Vec<&str> = text.split('.').collect();
        match_segments(&self.segments, &path, false)
    }
}

fn match_segments(pattern: &[Segment], path: &[&str], allow_extra: bool) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty() || allow_extra;
    };

    match head {
        Segment::AnyDepth => {
            if path.is_empty() {
                return match_segments(rest, path, allow_extra);
            }
            if rest.is_empty() {
                return true;
            }
            (1..=path.len()).any(|consumed| match_segments(rest, &path[consumed..], true))
        }
        Segment::AnyOne => match path.split_first() {
            Some((_, tail)) => match_segments(rest, tail, allow_extra),
            None => false,
        },
        Segment::Literal(literal) => match path.split_first() {
            Some((first, tail)) => *first == literal.as_str() && match_segments(rest, tail, allow_extra),
            None => false,
        },
        Segment::Glob(glob) => match path.split_first() {
            Some((first, tail)) => {
                glob.is_match(first) && match_segments(rest, tail, allow_extra || rest.is_empty())
            }
            None => false,
        },
    }
}

/// An ordered set of accessor patterns; matches if any pattern matches
#[derive(Debug, Clone, Default)]
pub struct AccessorPatterns {
    patterns: Vec<AccessorPattern>,
}

impl AccessorPatterns {
    pub fn new(patterns: &[String]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|pattern| AccessorPattern::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccessorPattern> {
        self.patterns.iter()
    }
}
