//! Glob group recognition.
//!
//! A template is scanned for one group at a time. Brace lists win over any
//! bracket range in the string, and numeric ranges win over alpha ranges,
//! regardless of their positions relative to each other.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{GlobError, GlobResult};

/// `{a,b,c}`. Content must be non-empty and may not contain `}`.
const BRACE_LIST_PATTERN: &str = r"\{([^}]+)\}";

/// `[START-END]` or `[START-END:STEP]` with digit bounds.
const NUMERIC_RANGE_PATTERN: &str = r"\[([0-9]+)-([0-9]+)(?::([0-9]+))?\]";

/// `[START-END]` or `[START-END:STEP]` with letter bounds.
const ALPHA_RANGE_PATTERN: &str = r"\[([A-Za-z]+)-([A-Za-z]+)(?::([0-9]+))?\]";

/// Largest number of characters an alpha range may enumerate.
pub const ALPHABET_LEN: u32 = (b'Z' - b'A' + 1) as u32;

static BRACE_LIST_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMERIC_RANGE_REGEX: OnceLock<Regex> = OnceLock::new();
static ALPHA_RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn brace_list_regex() -> &'static Regex {
    BRACE_LIST_REGEX.get_or_init(|| Regex::new(BRACE_LIST_PATTERN).expect("invalid regex pattern"))
}

fn numeric_range_regex() -> &'static Regex {
    NUMERIC_RANGE_REGEX
        .get_or_init(|| Regex::new(NUMERIC_RANGE_PATTERN).expect("invalid regex pattern"))
}

fn alpha_range_regex() -> &'static Regex {
    ALPHA_RANGE_REGEX
        .get_or_init(|| Regex::new(ALPHA_RANGE_PATTERN).expect("invalid regex pattern"))
}

/// A recognised glob group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobGroup {
    /// Literal alternatives in written order. Empty alternatives are kept.
    BraceList(Vec<String>),
    /// Zero-padded decimal range.
    NumericRange(NumericRange),
    /// Single-character range.
    AlphaRange(AlphaRange),
}

impl GlobGroup {
    /// Returns the substitution values of this group, in enumeration order.
    pub fn values(&self) -> Values {
        let inner = match self {
            GlobGroup::BraceList(items) => ValuesInner::Items(items.clone().into_iter()),
            GlobGroup::NumericRange(range) => ValuesInner::Numeric {
                next: Some(range.start),
                range: *range,
            },
            GlobGroup::AlphaRange(range) => ValuesInner::Alpha {
                next: Some(u128::from(range.start)),
                range: *range,
            },
        };
        Values { inner }
    }
}

/// Bounds of a numeric range group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    /// First value.
    pub start: u128,
    /// Last value, inclusive.
    pub end: u128,
    /// Increment between values.
    pub step: u128,
    /// Minimum rendered width, taken from the START token.
    pub width: usize,
}

impl NumericRange {
    fn parse(
        start_token: &str,
        end_token: &str,
        step_token: Option<&str>,
        template: &str,
    ) -> GlobResult<Self> {
        let start = parse_number(start_token, template)?;
        let end = parse_number(end_token, template)?;
        if start > end {
            return Err(GlobError::bad_numeric(template));
        }
        let step = parse_step(step_token, template)?;

        Ok(Self {
            start,
            end,
            step,
            width: start_token.chars().count(),
        })
    }

    /// Formats `n` zero-padded to this range's width. Wider values are kept whole.
    pub fn format(&self, n: u128) -> String {
        format!("{:0width$}", n, width = self.width)
    }
}

/// Bounds of an alpha range group, as ASCII character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaRange {
    /// First character.
    pub start: u8,
    /// Last character, inclusive.
    pub end: u8,
    /// Increment between character codes.
    pub step: u128,
}

impl AlphaRange {
    fn new(start: u8, end: u8, step_token: Option<&str>, template: &str) -> GlobResult<Self> {
        if start > end || u32::from(end - start) + 1 > ALPHABET_LEN {
            return Err(GlobError::bad_alpha(template));
        }
        let step = parse_step(step_token, template)?;
        Ok(Self { start, end, step })
    }
}

/// A glob group together with the byte span it occupies in its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobMatch {
    /// Span of the whole group, delimiters included.
    pub span: Range<usize>,
    /// The recognised group.
    pub group: GlobGroup,
}

impl GlobMatch {
    /// Builds the string obtained by replacing this group with `value`.
    pub fn substitute(&self, template: &str, value: &str) -> String {
        let mut out = String::with_capacity(template.len() - self.span.len() + value.len());
        out.push_str(&template[..self.span.start]);
        out.push_str(value);
        out.push_str(&template[self.span.end..]);
        out
    }
}

/// Finds the glob group to expand next in `template`.
///
/// Returns `Ok(None)` when the template contains no recognised glob syntax.
/// Text that resembles a group but does not match one of the three forms is
/// left alone.
///
/// # Errors
/// Returns a [`GlobError`] when the selected group is a bracket range that
/// cannot be enumerated.
pub fn find_first_group(template: &str) -> GlobResult<Option<GlobMatch>> {
    if let Some(found) = brace_list(template) {
        return Ok(Some(found));
    }
    if let Some(found) = numeric_range(template) {
        return found.map(Some);
    }
    alpha_range(template).transpose()
}

fn brace_list(template: &str) -> Option<GlobMatch> {
    let caps = brace_list_regex().captures(template)?;
    let whole = caps.get(0)?;
    let items = caps.get(1)?.as_str().split(',').map(str::to_string).collect();

    Some(GlobMatch {
        span: whole.range(),
        group: GlobGroup::BraceList(items),
    })
}

fn numeric_range(template: &str) -> Option<GlobResult<GlobMatch>> {
    let caps = numeric_range_regex().captures(template)?;
    let whole = caps.get(0)?;
    let start = caps.get(1)?.as_str();
    let end = caps.get(2)?.as_str();
    let step = caps.get(3).map(|m| m.as_str());

    Some(
        NumericRange::parse(start, end, step, template).map(|range| GlobMatch {
            span: whole.range(),
            group: GlobGroup::NumericRange(range),
        }),
    )
}

fn alpha_range(template: &str) -> Option<GlobResult<GlobMatch>> {
    let caps = alpha_range_regex().captures(template)?;
    let whole = caps.get(0)?;
    // Only the first letter of each bound counts.
    let start = caps.get(1)?.as_str().bytes().next()?;
    let end = caps.get(2)?.as_str().bytes().next()?;
    let step = caps.get(3).map(|m| m.as_str());

    Some(
        AlphaRange::new(start, end, step, template).map(|range| GlobMatch {
            span: whole.range(),
            group: GlobGroup::AlphaRange(range),
        }),
    )
}

fn parse_number(token: &str, template: &str) -> GlobResult<u128> {
    token
        .parse()
        .map_err(|_| GlobError::out_of_range(token, template))
}

fn parse_step(token: Option<&str>, template: &str) -> GlobResult<u128> {
    // A step too wide to parse moves past any end bound, leaving only `start`.
    let step = match token {
        Some(token) => token.parse().unwrap_or(u128::MAX),
        None => 1,
    };
    if step == 0 {
        return Err(GlobError::zero_step(template));
    }
    Ok(step)
}

/// Substitution values of a single glob group.
#[derive(Debug, Clone)]
pub struct Values {
    inner: ValuesInner,
}

#[derive(Debug, Clone)]
enum ValuesInner {
    Items(std::vec::IntoIter<String>),
    Numeric { next: Option<u128>, range: NumericRange },
    Alpha { next: Option<u128>, range: AlphaRange },
}

impl Iterator for Values {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.inner {
            ValuesInner::Items(items) => items.next(),
            ValuesInner::Numeric { next, range } => {
                let n = next.take()?;
                *next = n.checked_add(range.step).filter(|v| *v <= range.end);
                Some(range.format(n))
            }
            ValuesInner::Alpha { next, range } => {
                let code = next.take()?;
                *next = code
                    .checked_add(range.step)
                    .filter(|v| *v <= u128::from(range.end));
                // Bounded by `range.end`, which is a u8.
                Some(char::from(code as u8).to_string())
            }
        }
    }
}
