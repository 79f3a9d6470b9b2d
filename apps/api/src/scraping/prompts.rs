use crate::crew::Agent;

pub const LISTING_SCRAPER: Agent = Agent {
    role: "Job Listing Scraper",
    goal: "Extract job listings from websites accurately and efficiently",
    backstory: "You are an expert in web scraping and data extraction. You can navigate complex websites and extract structured information from job listings.",
};

pub const LISTING_PARSER: Agent = Agent {
    role: "Job Listing Parser",
    goal: "Parse and structure job listing data into a consistent format",
    backstory: "You are an expert in data processing and natural language understanding. You can extract key information from job descriptions and standardize it.",
};

/// Replace: {url}
pub const SCRAPE_URL_TEMPLATE: &str = "Scrape job listings from the URL: {url}";

pub const SCRAPE_URL_EXPECTED: &str = "Raw job listing data extracted from the website.";

/// Replace: {keyword}
pub const SCRAPE_KEYWORD_TEMPLATE: &str =
    "Scrape job listings related to '{keyword}' from multiple job boards";

pub const SCRAPE_KEYWORD_EXPECTED: &str =
    "Raw job listing data extracted from multiple websites.";

pub const PARSE_DESCRIPTION: &str = "Parse the raw job listing data into a structured format with title, company, description, and URL.";

/// Replace: {keyword}
pub const PARSE_KEYWORD_TEMPLATE: &str = "Parse the raw job listing data for '{keyword}' into a structured format with title, company, description, and URL.";

pub const PARSE_EXPECTED: &str = "Structured job listing data in a consistent format.";
