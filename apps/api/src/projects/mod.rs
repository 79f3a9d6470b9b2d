// Talent-owned repositories. The GitHub lookup is stubbed: new projects get a
// placeholder description and language list.

pub mod handlers;
pub mod store;

/// Placeholder metadata recorded until repositories are analyzed for real.
pub const STUB_DESCRIPTION: &str = "Repository description";
pub const STUB_LANGUAGES: [&str; 2] = ["JavaScript", "TypeScript"];

/// Derives a repository name from its URL: the last non-empty path segment.
pub fn repo_name_from_url(url: &str) -> Option<&str> {
    let name = url.trim().trim_end_matches('/').rsplit('/').next()?.trim();
    if name.is_empty() || name.ends_with(':') {
        None
    } else {
        Some(name)
    }
}
