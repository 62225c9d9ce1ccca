//! LinkedIn profile retrieval for icebreaker.
//!
//! [`ProfileFetcher`] pulls raw profile JSON either from the Scrapin
//! enrichment API or from a fixed mock document, and [`ProfileRecord`] is the
//! cleaned, prompt-ready view of that JSON.

pub mod record;
pub mod scrapin;

pub use record::ProfileRecord;
pub use scrapin::{MOCK_PROFILE_URL, ProfileFetcher, SCRAPIN_API_BASE, ScrapinConfig};
