//! API endpoint modules.
//!
//! Each wrapper issues exactly one `get`/`post` call with fixed routing; the only
//! exception is [`BlacklistApi::lookup_bulk`], which aggregates several lookups.

mod affiliate;
mod blacklist;
mod landing_page;
mod pdns;
mod whois;
mod zlist;

pub use affiliate::AffiliateApi;
pub use blacklist::BlacklistApi;
pub use landing_page::{LandingPageApi, LandingPageSubmission};
pub use pdns::{PdnsApi, PdnsQuery};
pub use whois::{WhoisApi, WhoisQuery};
pub use zlist::ZlistApi;
