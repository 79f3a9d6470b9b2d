// Company-owned job postings, entered by hand or saved from scrape results.

pub mod handlers;
pub mod store;
