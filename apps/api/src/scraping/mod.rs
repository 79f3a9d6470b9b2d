// Job scraping. Two agents (scraper, parser) run one crew per request; real
// fetching is stubbed and the response is a canned posting list.

pub mod handlers;
pub mod prompts;
pub mod scraper;
