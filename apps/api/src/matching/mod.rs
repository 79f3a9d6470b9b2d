// Project/job matching. Three agents (repository analyzer, job analyzer,
// compatibility scorer) run one crew per request; the response is a templated
// score list and does not read the crew's output.

pub mod agents;
pub mod handlers;
pub mod matcher;
pub mod prompts;
