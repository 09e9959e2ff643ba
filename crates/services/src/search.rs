//! Web search collaborator.
//!
//! The quiz engine never depends on a concrete search backend; embedders
//! hand it a `SearchProvider`. The bundled provider scrapes the DuckDuckGo
//! HTML endpoint, which needs no API key.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use url::Url;

use crate::error::SearchError;

/// Reply used whenever a query produces nothing to show.
pub const NO_RESULTS: &str = "No results found or an error occurred.";

const ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; quizme-trainer)";
const DEFAULT_MAX_RESULTS: usize = 10;

/// Topic lookup for study material.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` and return display-ready result text.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` when the backend cannot be reached or its
    /// response cannot be processed.
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

/// Search backed by the DuckDuckGo HTML endpoint.
pub struct DuckDuckGoSearch {
    client: Client,
    max_results: usize,
}

impl DuckDuckGoSearch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Cap the number of results rendered per query.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for DuckDuckGoSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .post(ENDPOINT)
            .header("User-Agent", USER_AGENT)
            .form(&[("q", query), ("b", "")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let results = extract_results(&body, self.max_results)?;
        Ok(format_results(&results))
    }
}

struct SearchResult {
    title: String,
    url: String,
    snippet: String,
}

fn extract_results(body: &str, cap: usize) -> Result<Vec<SearchResult>, SearchError> {
    let link_re = Regex::new(r#"(?s)<a[^>]*class="result__a"[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)?;
    let snippet_re = Regex::new(r#"(?s)<a[^>]*class="result__snippet"[^>]*>(.*?)</a>"#)?;

    // (start, end, href, title) per result anchor, in document order
    let links: Vec<(usize, usize, &str, &str)> = link_re
        .captures_iter(body)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            Some((
                whole.start(),
                whole.end(),
                captures.get(1)?.as_str(),
                captures.get(2)?.as_str(),
            ))
        })
        .collect();
    let snippets: Vec<(usize, &str)> = snippet_re
        .captures_iter(body)
        .filter_map(|captures| Some((captures.get(0)?.start(), captures.get(1)?.as_str())))
        .collect();

    let mut results = Vec::new();
    for (i, link) in links.iter().enumerate() {
        if results.len() >= cap {
            break;
        }
        let (_, end, href, title) = *link;
        let Some(url) = clean_result_url(href) else {
            continue;
        };

        // the snippet belonging to this result sits between its anchor and
        // the next one
        let next_start = links.get(i + 1).map(|next| next.0);
        let snippet = snippets
            .iter()
            .find(|entry| entry.0 >= end && next_start.is_none_or(|ns| entry.0 < ns))
            .map_or("", |entry| entry.1);

        results.push(SearchResult {
            title: strip_html(title)?,
            url,
            snippet: strip_html(snippet)?,
        });
    }
    Ok(results)
}

/// Drop ad links, make protocol-relative links absolute, and unwrap the
/// `uddg` redirect DuckDuckGo puts around every organic result.
fn clean_result_url(href: &str) -> Option<String> {
    if href.contains("y.js") {
        return None;
    }
    let absolute = if let Some(rest) = href.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        href.to_string()
    };
    if let Ok(parsed) = Url::parse(&absolute) {
        if let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg") {
            return Some(target.into_owned());
        }
    }
    Some(absolute)
}

fn strip_html(fragment: &str) -> Result<String, SearchError> {
    let tag_re = Regex::new(r"<[^>]*>")?;
    let text = tag_re.replace_all(fragment, "");
    Ok(decode_entities(text.trim()))
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }
    let mut output = format!("Found {} search results:\n\n", results.len());
    for (i, result) in results.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}\n   URL: {}\n   Summary: {}\n\n",
            i + 1,
            result.title,
            result.url,
            result.snippet
        ));
    }
    output.trim_end().to_string()
}
