// Task templates for the matching crew. Placeholders are `{name}` style and
// filled with `crew::fill_template` before the task is built.

/// Replace: {name}, {url}, {languages}
pub const REPO_ANALYSIS_TEMPLATE: &str = "Analyze the GitHub repository {name} at {url} with languages {languages} and extract key technologies, skills, and complexity indicators.";

pub const REPO_ANALYSIS_EXPECTED: &str = "A detailed analysis of the repository including technologies, skills demonstrated, and project complexity.";

/// Replace: {title}, {company}, {requirements}
pub const JOB_ANALYSIS_TEMPLATE: &str = "Analyze the job '{title}' at {company} with requirements {requirements} and extract key requirements, skills, and qualifications.";

pub const JOB_ANALYSIS_EXPECTED: &str =
    "A detailed analysis of the job requirements and skills needed.";

/// Replace: {name}, {title}, {company}
pub const PROJECT_TO_JOB_SCORE_TEMPLATE: &str = "Determine the compatibility between the GitHub repository {name} and job '{title}' at {company}. Provide a matching score (0-100) and explain key factors.";

/// Replace: {title}, {company}, {name}
pub const JOB_TO_PROJECT_SCORE_TEMPLATE: &str = "Determine the compatibility between the job '{title}' at {company} and GitHub repository {name}. Provide a matching score (0-100) and explain key factors.";

pub const SCORE_EXPECTED: &str =
    "A matching score and detailed explanation of compatibility factors.";

/// Key factors attached to every project-to-jobs match.
pub const JOB_MATCH_FACTORS: [&str; 4] = [
    "Strong React.js experience matches repository's React usage",
    "TypeScript proficiency evident in project structure",
    "UI/UX focus aligns with job requirements",
    "Missing experience with GraphQL mentioned in job description",
];

/// Key factors attached to every job-to-projects match.
pub const PROJECT_MATCH_FACTORS: [&str; 4] = [
    "React.js expertise matches job requirements",
    "State management implementation aligns with position needs",
    "Responsive design demonstrates UI/UX skills mentioned in job",
    "Testing coverage shows quality focus required by position",
];
