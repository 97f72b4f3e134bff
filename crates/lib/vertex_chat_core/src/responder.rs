//! Query responder — canned replies behind a simulated round trip.
//!
//! Every query is answered with one of four fixed templates. Classification
//! is first-match-wins on the trimmed, lower-cased query:
//!
//! 1. empty → [`Intent::Empty`]
//! 2. contains `docs` or `help` → [`Intent::Help`]
//! 3. contains `hello` or `hi` → [`Intent::Greeting`]
//! 4. anything else → [`Intent::Echo`], which quotes the original query back
//!
//! [`SimulatedBackend`] waits a fixed latency before answering so the chat UI
//! can exercise its pending state. A real backend can replace it through the
//! [`ChatBackend`] trait.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::markup::anchor;

pub const DOCS_URL: &str = "https://vuetifyjs.com";
pub const TEXT_FIELDS_URL: &str = "https://vuetifyjs.com/en/components/text-fields/";
pub const PROGRESS_LINEAR_URL: &str = "https://vuetifyjs.com/en/components/progress-linear/";
pub const WHY_VUETIFY_URL: &str = "https://vuetifyjs.com/en/introduction/why-vuetify/";
pub const SHEETS_URL: &str = "https://vuetifyjs.com/en/components/sheets/";

const HELP_KEYWORDS: [&str; 2] = ["docs", "help"];
const GREETING_KEYWORDS: [&str; 2] = ["hello", "hi"];

/// Which canned template a query resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Nothing but whitespace was submitted.
    Empty,
    /// The query asks for docs or help.
    Help,
    /// The query greets the assistant.
    Greeting,
    /// Fallback: the query is echoed back.
    Echo,
}

/// Classifies a query. Matching is substring containment on the trimmed,
/// lower-cased text, so `"this"` counts as a greeting.
pub fn classify(query: &str) -> Intent {
    let normalized = query.trim().to_lowercase();

    if normalized.is_empty() {
        Intent::Empty
    } else if HELP_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        Intent::Help
    } else if GREETING_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        Intent::Greeting
    } else {
        Intent::Echo
    }
}

/// Builds the reply for `query` without any delay.
pub fn reply_for(query: &str) -> String {
    match classify(query) {
        Intent::Empty => format!(
            "I didn't receive any text. Try typing something like {}.",
            anchor(DOCS_URL, "Vuetify Docs")
        ),
        Intent::Help => format!(
            "Here’s something useful: {} for text fields.\nAlso, see {}.",
            anchor(TEXT_FIELDS_URL, "This is hyperlink"),
            anchor(PROGRESS_LINEAR_URL, "progress examples")
        ),
        Intent::Greeting => format!(
            "Hello! Want a quick tour? {}",
            anchor(WHY_VUETIFY_URL, "Why Vuetify")
        ),
        Intent::Echo => format!(
            "You said: \"{query}\". Check {} for bubble styling.",
            anchor(SHEETS_URL, "sheets")
        ),
    }
}

/// A chat response together with the template it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    /// Response text with inline anchor markup.
    pub content: String,
}

impl Reply {
    /// Classifies `query` and builds the matching canned reply.
    pub fn canned(query: &str) -> Self {
        Self {
            intent: classify(query),
            content: reply_for(query),
        }
    }
}

/// Something that answers chat queries.
///
/// Implementations never fail: every query, including an empty one, gets a
/// textual response. The returned intent describes the returned content.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn respond(&self, query: &str) -> Reply;
}

/// Backend that answers from the canned templates after a fixed delay.
#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            latency: config.latency,
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

#[async_trait]
impl ChatBackend for SimulatedBackend {
    async fn respond(&self, query: &str) -> Reply {
        tokio::time::sleep(self.latency).await;
        let reply = Reply::canned(query);
        log::debug!("chat query classified as {:?}", reply.intent);
        reply
    }
}

/// Answers `query` with the default simulated backend.
pub async fn respond(query: &str) -> String {
    SimulatedBackend::default().respond(query).await.content
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;
    use crate::markup::extract_links;

    fn hrefs(text: &str) -> Vec<String> {
        extract_links(text).into_iter().map(|l| l.href).collect()
    }

    #[test]
    fn classify_follows_priority_order() {
        assert_eq!(classify(""), Intent::Empty);
        assert_eq!(classify("   \t\n"), Intent::Empty);
        assert_eq!(classify("Can you show me the docs?"), Intent::Help);
        assert_eq!(classify("HELP"), Intent::Help);
        assert_eq!(classify("hello docs"), Intent::Help);
        assert_eq!(classify("hi there"), Intent::Greeting);
        assert_eq!(classify("  Hello  "), Intent::Greeting);
        assert_eq!(classify("What's the weather?"), Intent::Echo);
    }

    #[test]
    fn classify_uses_substring_containment() {
        assert_eq!(classify("this"), Intent::Greeting);
        assert_eq!(classify("unhelpful"), Intent::Help);
    }

    #[test]
    fn empty_query_points_at_docs() {
        for query in ["", " ", "\n\t  "] {
            let reply = reply_for(query);
            assert!(reply.contains(r#"href="https://vuetifyjs.com""#));
            assert_eq!(hrefs(&reply), vec![DOCS_URL.to_string()]);
        }
    }

    #[test]
    fn help_query_has_two_links() {
        let reply = reply_for("Can you show me the docs?");
        assert_eq!(reply.matches("<a href=").count(), 2);
        assert_eq!(
            hrefs(&reply),
            vec![TEXT_FIELDS_URL.to_string(), PROGRESS_LINEAR_URL.to_string()]
        );
        assert!(reply.starts_with("Here’s something useful:"));
        assert!(reply.contains("for text fields.\nAlso, see"));
    }

    #[test]
    fn greeting_query_links_why_vuetify() {
        let reply = reply_for("hi there");
        assert_eq!(hrefs(&reply), vec![WHY_VUETIFY_URL.to_string()]);
        assert_eq!(
            reply,
            r#"Hello! Want a quick tour? <a href="https://vuetifyjs.com/en/introduction/why-vuetify/">Why Vuetify</a>"#
        );
    }

    #[test]
    fn echo_preserves_original_query() {
        let reply = reply_for("What's the weather?");
        assert!(reply.contains(r#"You said: "What's the weather?""#));
        assert_eq!(hrefs(&reply), vec![SHEETS_URL.to_string()]);

        let padded = "  Tell ME a Joke  ";
        assert!(reply_for(padded).contains(r#"You said: "  Tell ME a Joke  ""#));
    }

    #[tokio::test(start_paused = true)]
    async fn respond_waits_for_latency_on_every_branch() {
        let backend = SimulatedBackend::default();
        for query in ["", "docs", "hello", "What's the weather?"] {
            let started = Instant::now();
            let reply = backend.respond(query).await;
            assert!(started.elapsed() >= Duration::from_millis(1800));
            assert_eq!(reply.content, reply_for(query));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn respond_honours_configured_latency() {
        let backend = SimulatedBackend::new(&ChatConfig::with_latency(Duration::from_millis(50)));
        let started = Instant::now();
        backend.respond("hi").await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(1800));
    }

    #[tokio::test(start_paused = true)]
    async fn backend_reply_intent_matches_content() {
        let backend = SimulatedBackend::new(&ChatConfig::with_latency(Duration::ZERO));
        for (query, intent) in [
            ("", Intent::Empty),
            ("help me", Intent::Help),
            ("hi there", Intent::Greeting),
            ("What's the weather?", Intent::Echo),
        ] {
            let reply = backend.respond(query).await;
            assert_eq!(reply.intent, intent);
            assert_eq!(reply, Reply::canned(query));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn free_respond_uses_default_latency() {
        let started = Instant::now();
        let reply = respond("").await;
        assert!(started.elapsed() >= Duration::from_millis(1800));
        assert!(reply.starts_with("I didn't receive any text."));
    }
}
