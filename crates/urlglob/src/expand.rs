//! Lazy template expansion.

use crate::error::{GlobError, GlobResult};
use crate::pattern::{find_first_group, GlobMatch, Values};

/// Expands every glob group in `template`.
///
/// Results come out depth-first: the group selected first is the outer loop
/// and everything substituted into it is fully expanded before it advances.
/// A template without glob syntax yields itself once.
///
/// The returned iterator is lazy. It holds one frame per glob group being
/// enumerated, and dropping it early computes nothing further. A range error
/// is yielded as the final item; earlier alternatives may already have been
/// produced by then.
///
/// # Example
/// ```
/// use urlglob::expand;
///
/// let urls: Vec<String> = expand("https://example.com/{foo,bar}?page=[1-2]")
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(
///     urls,
///     vec![
///         "https://example.com/foo?page=1",
///         "https://example.com/foo?page=2",
///         "https://example.com/bar?page=1",
///         "https://example.com/bar?page=2",
///     ]
/// );
/// ```
pub fn expand(template: &str) -> Expansion {
    Expansion {
        pending: Some(template.to_string()),
        stack: Vec::new(),
    }
}

/// Expands `template` into a vector, stopping at the first error.
pub fn expand_to_vec(template: &str) -> GlobResult<Vec<String>> {
    expand(template).collect()
}

/// Iterator returned by [`expand`].
#[derive(Debug, Clone)]
pub struct Expansion {
    /// String waiting to be scanned for its next group.
    pending: Option<String>,
    stack: Vec<Frame>,
}

/// One glob group being enumerated.
#[derive(Debug, Clone)]
struct Frame {
    template: String,
    found: GlobMatch,
    values: Values,
}

impl Frame {
    fn new(template: String, found: GlobMatch) -> Self {
        let values = found.group.values();
        Self {
            template,
            found,
            values,
        }
    }

    fn next_candidate(&mut self) -> Option<String> {
        let value = self.values.next()?;
        Some(self.found.substitute(&self.template, &value))
    }
}

impl Expansion {
    /// Number of glob groups currently being enumerated.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn fail(&mut self, err: GlobError) -> Option<GlobResult<String>> {
        self.stack.clear();
        self.pending = None;
        Some(Err(err))
    }
}

impl Iterator for Expansion {
    type Item = GlobResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = match self.pending.take() {
                Some(candidate) => candidate,
                None => {
                    let frame = self.stack.last_mut()?;
                    match frame.next_candidate() {
                        Some(candidate) => candidate,
                        None => {
                            self.stack.pop();
                            continue;
                        }
                    }
                }
            };

            match find_first_group(&candidate) {
                Ok(Some(found)) => self.stack.push(Frame::new(candidate, found)),
                Ok(None) => return Some(Ok(candidate)),
                Err(err) => return self.fail(err),
            }
        }
    }
}

impl std::iter::FusedIterator for Expansion {}
