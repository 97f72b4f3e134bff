//! Inline hyperlink markup carried by chat responses.
//!
//! Responses are plain text with embedded `<a href="...">...</a>` anchors. The
//! chat bubble renders them as links; [`extract_links`] recovers them for
//! hosts that present links some other way.

use serde::{Deserialize, Serialize};

const OPEN: &str = "<a href=\"";
const OPEN_END: &str = "\">";
const CLOSE: &str = "</a>";

/// A hyperlink target paired with its display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Renders `<a href="HREF">LABEL</a>`.
pub fn anchor(href: &str, label: &str) -> String {
    format!("{OPEN}{href}{OPEN_END}{label}{CLOSE}")
}

/// Returns the anchors embedded in `text`, in order of appearance.
///
/// Unterminated anchors are skipped.
pub fn extract_links(text: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        rest = &rest[start + OPEN.len()..];

        let Some(href_end) = rest.find(OPEN_END) else {
            break;
        };
        let href = &rest[..href_end];
        let after_href = &rest[href_end + OPEN_END.len()..];

        let Some(label_end) = after_href.find(CLOSE) else {
            break;
        };
        let label = &after_href[..label_end];

        // An opening tag inside the href means the previous tag never closed.
        if href.contains(OPEN) || label.contains(OPEN) {
            continue;
        }

        links.push(Link::new(href, label));
        rest = &after_href[label_end + CLOSE.len()..];
    }

    links
}
