mod client;
mod filter;
mod query;
mod record_store_url;

pub(crate) use record_store_url::*;

pub use client::*;
pub use filter::*;
pub use query::*;
