//! Blog and case-study content from the headless CMS.
//!
//! The client keeps a health flag. The first failed, undecodable or empty
//! answer marks it unhealthy; from then on it serves the bundled fallback
//! entries without touching the network.

mod fallback;

use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Deserialize;
use yew::prelude::*;

use crate::error::{require_context, ContentError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Blog,
    CaseStudy,
}

impl ContentKind {
    fn endpoint(self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::CaseStudy => "case-studies",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Cms,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub source: Source,
}

impl Listing {
    fn fallback(kind: ContentKind) -> Self {
        Listing {
            entries: newest_first(fallback::entries(kind)),
            source: Source::Fallback,
        }
    }
}

fn newest_first(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    entries
}

#[derive(Clone)]
pub struct ContentClient {
    base_url: Rc<str>,
    health: Rc<Cell<Health>>,
}

impl PartialEq for ContentClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.health, &other.health)
    }
}

impl ContentClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            health: Rc::new(Cell::new(Health::Healthy)),
        }
    }

    pub fn health(&self) -> Health {
        self.health.get()
    }

    pub async fn list(&self, kind: ContentKind) -> Listing {
        if self.health() == Health::Unhealthy {
            return Listing::fallback(kind);
        }
        let result = fetch_entries(&self.listing_url(kind)).await;
        self.settle_listing(kind, result)
    }

    pub async fn entry(&self, kind: ContentKind, slug: &str) -> Option<(Entry, Source)> {
        let result = if self.health() == Health::Healthy {
            Some(fetch_entries(&self.entry_url(kind, slug)).await)
        } else {
            None
        };
        self.settle_entry(kind, slug, result)
    }

    fn listing_url(&self, kind: ContentKind) -> String {
        format!("{}/api/{}", self.base_url, kind.endpoint())
    }

    fn entry_url(&self, kind: ContentKind, slug: &str) -> String {
        format!(
            "{}/api/{}?slug={}",
            self.base_url,
            kind.endpoint(),
            urlencoding::encode(slug)
        )
    }

    fn settle_listing(
        &self,
        kind: ContentKind,
        result: Result<Vec<Entry>, ContentError>,
    ) -> Listing {
        match result {
            Ok(entries) if !entries.is_empty() => Listing {
                entries: newest_first(entries),
                source: Source::Cms,
            },
            Ok(_) => {
                self.mark_unhealthy("empty listing");
                Listing::fallback(kind)
            }
            Err(err) => {
                self.mark_unhealthy(err);
                Listing::fallback(kind)
            }
        }
    }

    /// `result` is `None` when the CMS was skipped.
    fn settle_entry(
        &self,
        kind: ContentKind,
        slug: &str,
        result: Option<Result<Vec<Entry>, ContentError>>,
    ) -> Option<(Entry, Source)> {
        match result {
            Some(Ok(entries)) => {
                if let Some(entry) = entries.into_iter().find(|entry| entry.slug == slug) {
                    return Some((entry, Source::Cms));
                }
            }
            Some(Err(err)) => self.mark_unhealthy(err),
            None => {}
        }
        fallback::entries(kind)
            .into_iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| (entry, Source::Fallback))
    }

    fn mark_unhealthy(&self, reason: impl Display) {
        if self.health.replace(Health::Unhealthy) == Health::Healthy {
            log::warn!("CMS unavailable ({reason}), serving bundled content");
        }
    }
}

/// Lets only the most recent of several overlapping fetches land.
#[derive(Clone, Default)]
pub struct LatestRequest {
    current: Rc<Cell<u64>>,
}

pub struct RequestTicket {
    id: u64,
    current: Rc<Cell<u64>>,
}

impl LatestRequest {
    /// Starts a request, superseding every ticket handed out before.
    pub fn begin(&self) -> RequestTicket {
        let id = self.current.get().wrapping_add(1);
        self.current.set(id);
        RequestTicket {
            id,
            current: Rc::clone(&self.current),
        }
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.id
    }
}

async fn fetch_entries(url: &str) -> Result<Vec<Entry>, ContentError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ContentError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(ContentError::Status(response.status()));
    }
    response
        .json::<Envelope<Vec<Entry>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|err| ContentError::Decode(err.to_string()))
}

#[hook]
pub fn use_content_client() -> ContentClient {
    match require_context(
        use_context::<ContentClient>(),
        "use_content_client",
        "ContextProvider<ContentClient>",
    ) {
        Ok(client) => client,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_request_is_current() {
        let latest = LatestRequest::default();
        let first = latest.begin();
        assert!(first.is_current());

        let second = latest.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        latest.clone().begin();
        assert!(!second.is_current());
    }

    fn entry(slug: &str, date: &str) -> Entry {
        Entry {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            excerpt: String::new(),
            published_at: date.parse().unwrap(),
            body: String::new(),
            cover_image: None,
        }
    }

    #[test]
    fn decodes_cms_envelope() {
        let json = r#"{"data":[{"slug":"fcra-basics","title":"FCRA basics","excerpt":"What to know","publishedAt":"2025-03-02","coverImage":"/img/fcra.webp"}]}"#;
        let envelope: Envelope<Vec<Entry>> = serde_json::from_str(json).unwrap();
        let entry = &envelope.data[0];
        assert_eq!(entry.slug, "fcra-basics");
        assert_eq!(entry.published_at, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert_eq!(entry.cover_image.as_deref(), Some("/img/fcra.webp"));
        assert!(entry.body.is_empty());
    }

    #[test]
    fn healthy_listing_is_sorted_newest_first() {
        let client = ContentClient::new("https://cms.example.com/");
        let listing = client.settle_listing(
            ContentKind::Blog,
            Ok(vec![entry("old", "2024-01-01"), entry("new", "2025-06-01")]),
        );
        assert_eq!(listing.source, Source::Cms);
        assert_eq!(listing.entries[0].slug, "new");
        assert_eq!(client.health(), Health::Healthy);
    }

    #[test]
    fn errors_fall_back_and_mark_unhealthy() {
        let client = ContentClient::new("https://cms.example.com");
        let listing =
            client.settle_listing(ContentKind::CaseStudy, Err(ContentError::Status(502)));
        assert_eq!(listing.source, Source::Fallback);
        assert!(!listing.entries.is_empty());
        assert_eq!(client.health(), Health::Unhealthy);
    }

    #[test]
    fn empty_listing_falls_back() {
        let client = ContentClient::new("https://cms.example.com");
        let listing = client.settle_listing(ContentKind::Blog, Ok(Vec::new()));
        assert_eq!(listing, Listing::fallback(ContentKind::Blog));
        assert_eq!(client.health(), Health::Unhealthy);
    }

    #[test]
    fn health_is_shared_between_clones() {
        let client = ContentClient::new("https://cms.example.com");
        let other = client.clone();
        client.mark_unhealthy("test");
        assert_eq!(other.health(), Health::Unhealthy);
        assert!(client == other);
        assert!(client != ContentClient::new("https://cms.example.com"));
    }

    #[test]
    fn entry_prefers_cms_then_fallback() {
        let client = ContentClient::new("https://cms.example.com");
        let found = client.settle_entry(
            ContentKind::Blog,
            "fresh",
            Some(Ok(vec![entry("fresh", "2025-09-09")])),
        );
        assert_eq!(found.map(|(e, source)| (e.slug, source)), Some(("fresh".to_string(), Source::Cms)));

        let bundled = &fallback::entries(ContentKind::Blog)[0];
        let found = client.settle_entry(ContentKind::Blog, &bundled.slug, None);
        assert_eq!(found.map(|(_, source)| source), Some(Source::Fallback));
        assert!(client.settle_entry(ContentKind::Blog, "missing", None).is_none());
    }

    #[test]
    fn urls_are_built_from_the_trimmed_base() {
        let client = ContentClient::new("https://cms.example.com/");
        assert_eq!(
            client.listing_url(ContentKind::CaseStudy),
            "https://cms.example.com/api/case-studies"
        );
        assert_eq!(
            client.entry_url(ContentKind::Blog, "ai & hiring"),
            "https://cms.example.com/api/blog?slug=ai%20%26%20hiring"
        );
    }
}
