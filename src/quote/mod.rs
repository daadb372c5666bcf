//! Quote page addressing and price extraction

pub mod extract;
pub mod url;

pub use extract::{extract_price, parse_price, PRICE_ATTR_KEY, PRICE_ATTR_VALUE, PRICE_PATH};
pub use url::{QuoteUrlTemplate, DEFAULT_URL_TEMPLATE};
