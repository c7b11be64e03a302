//! TPDI Gateway
//!
//! The transaction gateway over the third-party data import API: quota
//! lookup, multi-vendor catalog search, thumbnails, and the order /
//! subscription lifecycle, each as a bounded asynchronous operation.

pub mod capabilities;
pub mod client;
mod request;

pub use capabilities::{parse_instance_id, CapabilitiesFetcher};
pub use client::{TpdiClient, DEFAULT_SEARCH_PAGE_SIZE, DEFAULT_TPDI_SERVICE_URL};
pub use request::DEFAULT_TIMEOUT;
