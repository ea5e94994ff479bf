//! Start-request expansion.
//!
//! Replaces each outgoing work item with one item per address its URL
//! template expands to. The transform is switched on or off when it is
//! constructed; when off, items pass through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GlobError, GlobResult};
use crate::expand::{expand, Expansion};

/// A work item addressed by a URL.
pub trait WorkItem: Sized {
    /// The address, possibly containing glob groups.
    fn url(&self) -> &str;

    /// Returns a copy of this item with its address replaced.
    fn replace_url(&self, url: String) -> Self;
}

impl WorkItem for String {
    fn url(&self) -> &str {
        self
    }

    fn replace_url(&self, url: String) -> Self {
        url
    }
}

/// An outbound request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Target address.
    pub url: String,
    /// HTTP method.
    #[serde(default = "default_method")]
    pub method: String,
    /// Request headers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Caller-defined metadata carried along unchanged.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, serde_json::Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Request {
    /// Creates a GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: default_method(),
            headers: BTreeMap::new(),
            body: None,
            meta: BTreeMap::new(),
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a metadata entry.
    pub fn meta(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

impl WorkItem for Request {
    fn url(&self) -> &str {
        &self.url
    }

    fn replace_url(&self, url: String) -> Self {
        Self {
            url,
            ..self.clone()
        }
    }
}

/// Expands the URLs of start requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandStartUrls {
    enabled: bool,
}

impl Default for ExpandStartUrls {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ExpandStartUrls {
    /// Creates the transform. With `enabled == false` items pass through.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns whether expansion is applied.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Lazily expands each item's URL into one item per address.
    ///
    /// Items keep their input order and each item's expansions keep
    /// [`expand`] order. The first range error is yielded once and ends the
    /// stream.
    pub fn process_start_requests<I, T>(&self, requests: I) -> StartRequests<I::IntoIter, T>
    where
        I: IntoIterator<Item = T>,
        T: WorkItem,
    {
        StartRequests {
            requests: requests.into_iter(),
            enabled: self.enabled,
            current: None,
            done: false,
        }
    }
}

/// Expands a list of start URL templates into concrete addresses.
///
/// ```
/// use urlglob::expand_start_urls;
///
/// let urls: Vec<String> = expand_start_urls(
///     vec!["https://[a-b].example.com".to_string()],
///     true,
/// )
/// .collect::<Result<_, _>>()
/// .unwrap();
///
/// assert_eq!(urls, vec!["https://a.example.com", "https://b.example.com"]);
/// ```
pub fn expand_start_urls<I>(urls: I, enabled: bool) -> StartRequests<I::IntoIter, String>
where
    I: IntoIterator<Item = String>,
{
    ExpandStartUrls::new(enabled).process_start_requests(urls)
}

/// Iterator returned by [`ExpandStartUrls::process_start_requests`].
#[derive(Debug)]
pub struct StartRequests<I, T> {
    requests: I,
    enabled: bool,
    current: Option<(T, Expansion)>,
    done: bool,
}

impl<I, T> Iterator for StartRequests<I, T>
where
    I: Iterator<Item = T>,
    T: WorkItem,
{
    type Item = Result<T, GlobError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.enabled {
            return self.requests.next().map(Ok);
        }

        loop {
            if let Some((original, expansion)) = &mut self.current {
                match expansion.next() {
                    Some(Ok(url)) => return Some(Ok(original.replace_url(url))),
                    Some(Err(err)) => {
                        self.done = true;
                        self.current = None;
                        return Some(Err(err));
                    }
                    None => self.current = None,
                }
            }

            let request = self.requests.next()?;
            let expansion = expand(request.url());
            self.current = Some((request, expansion));
        }
    }
}

/// Collects the expanded items, stopping at the first error.
pub fn expand_requests<I, T>(requests: I) -> GlobResult<Vec<T>>
where
    I: IntoIterator<Item = T>,
    T: WorkItem,
{
    ExpandStartUrls::default()
        .process_start_requests(requests)
        .collect()
}
