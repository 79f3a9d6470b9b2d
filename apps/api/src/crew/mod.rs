//! Agent crews: role-specialized prompts run as a sequential task chain.
//!
//! An `Agent` is a persona (role, goal, backstory) that becomes the system
//! prompt. A `Task` is one instruction for one agent. `Crew::kickoff` runs the
//! tasks in list order through an `AgentRuntime`, handing each task the output
//! of the task before it.

pub mod runtime;

use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::LlmError;
use runtime::AgentRuntime;

#[derive(Debug, Error)]
pub enum CrewError {
    #[error("crew has no tasks to run")]
    NoTasks,

    #[error("task {index} is assigned to '{role}', which is not a crew member")]
    UnknownAgent { index: usize, role: &'static str },

    #[error("task {index} ({role}) failed: {source}")]
    Task {
        index: usize,
        role: &'static str,
        #[source]
        source: LlmError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl Agent {
    pub fn system_prompt(&self) -> String {
        format!(
            "You are the {}. {}\nYour goal: {}",
            self.role, self.backstory, self.goal
        )
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub description: String,
    pub expected_output: &'static str,
    pub agent: Agent,
}

impl Task {
    pub fn new(agent: Agent, description: String, expected_output: &'static str) -> Self {
        Self {
            description,
            expected_output,
            agent,
        }
    }

    /// Builds the user prompt, carrying the previous task's output as context.
    pub fn prompt(&self, context: Option<&str>) -> String {
        let mut prompt = format!(
            "{}\n\nExpected output: {}",
            self.description, self.expected_output
        );
        if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
            prompt.push_str("\n\nContext from the previous task:\n");
            prompt.push_str(context);
        }
        prompt
    }
}

/// Fills `{key}` placeholders in one pass over `template`. Substituted values
/// are never rescanned, so a value containing `{key}` text stays literal.
/// Unknown placeholders are left as written.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = vars.iter().find(|(key, _)| {
            tail.len() > key.len() + 1
                && tail[1..].starts_with(*key)
                && tail[1 + key.len()..].starts_with('}')
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Clone)]
pub struct TaskOutput {
    pub role: &'static str,
    pub raw: String,
}

#[derive(Debug, Clone, Default)]
pub struct CrewOutput {
    pub tasks: Vec<TaskOutput>,
}

impl CrewOutput {
    /// The final task's output.
    pub fn raw(&self) -> &str {
        self.tasks.last().map(|t| t.raw.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct Crew {
    pub agents: Vec<Agent>,
    pub tasks: Vec<Task>,
}

impl Crew {
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>) -> Self {
        Self { agents, tasks }
    }

    fn check(&self) -> Result<(), CrewError> {
        if self.tasks.is_empty() {
            return Err(CrewError::NoTasks);
        }
        for (index, task) in self.tasks.iter().enumerate() {
            if !self.agents.contains(&task.agent) {
                return Err(CrewError::UnknownAgent {
                    index,
                    role: task.agent.role,
                });
            }
        }
        Ok(())
    }

    /// Runs every task in order. The first failing task aborts the crew.
    pub async fn kickoff(&self, runtime: &dyn AgentRuntime) -> Result<CrewOutput, CrewError> {
        self.check()?;

        info!(
            "Crew kickoff: {} agents, {} tasks, runtime={}",
            self.agents.len(),
            self.tasks.len(),
            runtime.name()
        );

        let mut output = CrewOutput::default();
        for (index, task) in self.tasks.iter().enumerate() {
            let context = output.tasks.last().map(|t| t.raw.as_str());
            let prompt = task.prompt(context);
            let system = task.agent.system_prompt();

            debug!("Running task {index} with agent '{}'", task.agent.role);
            let raw = runtime
                .execute(&system, &prompt)
                .await
                .map_err(|source| CrewError::Task {
                    index,
                    role: task.agent.role,
                    source,
                })?;

            debug!("Task {index} ({}) returned {} bytes", task.agent.role, raw.len());
            output.tasks.push(TaskOutput {
                role: task.agent.role,
                raw,
            });
        }

        let roles: Vec<&str> = output.tasks.iter().map(|t| t.role).collect();
        info!("Crew finished {} tasks ({})", roles.len(), roles.join(" -> "));
        Ok(output)
    }
}
