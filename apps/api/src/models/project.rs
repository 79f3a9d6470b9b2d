use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::parse_string_list;

/// Raw `projects` row; `languages` is a JSON text column.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub languages: String,
    pub last_analyzed: DateTime<Utc>,
}

/// A talent user's repository.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub languages: Vec<String>,
    pub last_analyzed: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            url: row.url,
            description: row.description,
            languages: parse_string_list(&row.languages),
            last_analyzed: row.last_analyzed,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct OwnedProjectRow {
    #[sqlx(flatten)]
    pub project: ProjectRow,
    pub username: Option<String>,
}

/// A project joined with its owner's username, as read for job-to-project matching.
#[derive(Debug, Clone, Serialize)]
pub struct OwnedProject {
    #[serde(flatten)]
    pub project: Project,
    pub username: Option<String>,
}

impl From<OwnedProjectRow> for OwnedProject {
    fn from(row: OwnedProjectRow) -> Self {
        OwnedProject {
            project: row.project.into(),
            username: row.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_parses_languages() {
        let row = ProjectRow {
            id: 3,
            user_id: 1,
            name: "otic".to_string(),
            url: "https://github.com/acme/otic".to_string(),
            description: "Repository description".to_string(),
            languages: r#"["Rust","TypeScript"]"#.to_string(),
            last_analyzed: Utc::now(),
        };
        let project = Project::from(row);
        assert_eq!(project.languages, vec!["Rust", "TypeScript"]);
    }

    #[test]
    fn test_owned_project_serializes_flat() {
        let row = OwnedProjectRow {
            project: ProjectRow {
                id: 3,
                user_id: 1,
                name: "otic".to_string(),
                url: "https://github.com/acme/otic".to_string(),
                description: String::new(),
                languages: "garbage".to_string(),
                last_analyzed: Utc::now(),
            },
            username: Some("ada".to_string()),
        };
        let value = serde_json::to_value(OwnedProject::from(row)).unwrap();
        assert_eq!(value["name"], "otic");
        assert_eq!(value["username"], "ada");
        assert_eq!(value["languages"], serde_json::json!([]));
    }
}
