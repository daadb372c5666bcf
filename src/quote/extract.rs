//! Price extraction from a quote page
//!
//! The quote page wraps the price like this:
//!
//! ```text
//! <span class="pr">
//!     <span id="ref_121280306767104_l">9.89</span>
//! </span>
//! ```
//!
//! The newline after the opening `span` is its own text node, so the price
//! text sits at first-child / next-sibling / first-child of the anchor.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::dom::{find_nodes, Document, NodePath, Step};
use crate::error::ExtractError;

pub const PRICE_ATTR_KEY: &str = "class";
pub const PRICE_ATTR_VALUE: &str = "pr";

/// Optional sign, then either plain digits or comma-separated thousands
/// groups, then an optional fraction
const PRICE_PATTERN: &str = r"^-?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?$";

/// Anchor to price text
pub const PRICE_PATH: NodePath =
    NodePath::from_static(&[Step::FirstChild, Step::NextSibling, Step::FirstChild]);

/// Locate and parse the price in a quote page
pub fn extract_price(document: &Document) -> Result<f64, ExtractError> {
    let anchors = find_nodes(document.root(), PRICE_ATTR_KEY, PRICE_ATTR_VALUE);
    debug!(
        anchors = anchors.len(),
        "Found {} price anchor(s)",
        anchors.len()
    );

    let anchor = anchors
        .first()
        .copied()
        .ok_or_else(|| ExtractError::MissingAnchor {
            key: PRICE_ATTR_KEY.to_string(),
            value: PRICE_ATTR_VALUE.to_string(),
        })?;

    let node = PRICE_PATH.resolve(anchor)?;
    let text = node.text().ok_or(ExtractError::NotText(node.kind()))?;
    parse_price(text)
}

/// Parse price text such as `9.89`, ` 1,234.50 ` or `$12`.
///
/// Surrounding whitespace and a leading `$` are accepted. `,` is only
/// accepted as a thousands separator between complete three-digit groups,
/// so a decimal comma like `9,89` is an error rather than 989.
pub fn parse_price(text: &str) -> Result<f64, ExtractError> {
    let invalid = || ExtractError::InvalidNumber(text.to_string());

    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

    let well_formed = price_pattern().is_some_and(|pattern| pattern.is_match(unsigned));
    if !well_formed {
        return Err(invalid());
    }

    unsigned
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(invalid)
}

fn price_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(PRICE_PATTERN).ok())
        .as_ref()
}
