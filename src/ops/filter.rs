use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Which tasks the list shows by completion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Completed,
            StatusFilter::Active => StatusFilter::All,
            StatusFilter::Completed => StatusFilter::Active,
        }
    }
}

/// Completion counters for the progress display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Progress {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// `completed / total`, or 0 for an empty list
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> u16 {
        (self.ratio() * 100.0).round() as u16
    }

    pub fn active(&self) -> usize {
        self.total - self.completed
    }

    /// How many tasks a status filter would pass (ignoring search)
    pub fn count_for(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total,
            StatusFilter::Active => self.active(),
            StatusFilter::Completed => self.completed,
        }
    }
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn matches_query(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    task.text.to_lowercase().contains(&query.to_lowercase())
}

/// Apply the status filter and then the text query, keeping store order.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: StatusFilter, query: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t))
        .filter(|t| matches_query(t, query))
        .collect()
}
