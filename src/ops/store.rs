//! In-memory task store.
//!
//! The store owns the task list and every piece of transient UI state
//! (search query, status filter, edit session, add-panel draft). All
//! mutations go through it; the rendering layer only reads back through
//! [`TaskStore::visible`] and [`TaskStore::progress`] after each change.

use crate::model::task::{Category, Priority, Task, TaskId};
use crate::ops::filter::{Progress, StatusFilter, visible_tasks};

/// Yes/no gate consulted before destructive operations.
pub trait Confirm {
    /// Return `true` to go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Question asked before deleting `task`
pub fn delete_prompt(task: &Task) -> String {
    format!("Delete \"{}\"?", task.text)
}

/// Question asked before clearing `count` completed tasks
pub fn clear_completed_prompt(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Remove {count} completed {noun}?")
}

/// A task whose text is being edited inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub buffer: String,
}

/// Input held by the add panel until `create` commits it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
}

impl Default for Draft {
    fn default() -> Self {
        Draft {
            text: String::new(),
            category: Category::Personal,
            priority: Priority::Medium,
        }
    }
}

/// Transient UI state owned by the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_query: String,
    pub filter: StatusFilter,
    /// At most one edit session exists at a time
    pub editing: Option<EditSession>,
    pub draft: Draft,
    pub add_panel_open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    /// Most recently created first
    tasks: Vec<Task>,
    next_id: u64,
    state: ViewState,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store whose add panel starts on the given category/priority.
    pub fn with_draft_defaults(category: Category, priority: Priority) -> Self {
        let mut store = Self::new();
        store.state.draft.category = category;
        store.state.draft.priority = priority;
        store
    }

    /// Seed a handful of example tasks, newest first.
    pub fn seed_sample_tasks(&mut self) {
        let samples = [
            ("Call mom about weekend plans", Category::Personal, Priority::Low, false),
            ("Morning run in the park", Category::Health, Priority::Low, true),
            ("Buy groceries for the week", Category::Shopping, Priority::Medium, false),
            ("Complete project presentation", Category::Work, Priority::High, false),
        ];
        let draft = self.state.draft.clone();
        let panel_open = self.state.add_panel_open;
        for (text, category, priority, completed) in samples {
            if let Some(id) = self.create(text, category, priority)
                && completed
            {
                self.toggle(id);
            }
        }
        self.state.draft = draft;
        self.state.add_panel_open = panel_open;
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn filter(&self) -> StatusFilter {
        self.state.filter
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.state.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.state.editing.as_ref().map(|s| s.task_id)
    }

    /// Current edit buffer, empty when nothing is being edited
    pub fn edit_buffer(&self) -> &str {
        self.state
            .editing
            .as_ref()
            .map_or("", |s| s.buffer.as_str())
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    pub fn is_add_panel_open(&self) -> bool {
        self.state.add_panel_open
    }

    /// Tasks passing the current filter and search query, in store order
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, self.state.filter, &self.state.search_query)
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create a task at the front of the list. Blank text is ignored.
    ///
    /// On success the draft text is cleared and the add panel closes.
    pub fn create(&mut self, text: &str, category: Category, priority: Priority) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring blank task");
            return None;
        }
        self.next_id += 1;
        let id = TaskId::new(self.next_id);
        self.tasks
            .insert(0, Task::new(id, text.to_string(), category, priority));
        self.state.draft.text.clear();
        self.state.add_panel_open = false;
        tracing::debug!(%id, ?category, ?priority, "task created");
        Some(id)
    }

    /// Create a task from the current draft.
    pub fn create_from_draft(&mut self) -> Option<TaskId> {
        let Draft {
            text,
            category,
            priority,
        } = self.state.draft.clone();
        self.create(&text, category, priority)
    }

    /// Flip completion. Returns false for an unknown id.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(%id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Remove a task once `confirm` accepts. Unknown ids do not prompt.
    pub fn delete(&mut self, id: TaskId, confirm: &mut impl Confirm) -> bool {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        if !confirm.confirm(&delete_prompt(&self.tasks[idx])) {
            tracing::debug!(%id, "delete declined");
            return false;
        }
        self.tasks.remove(idx);
        if self.editing_id() == Some(id) {
            self.state.editing = None;
        }
        tracing::debug!(%id, "task deleted");
        true
    }

    /// Remove every completed task after a single confirmation.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self, confirm: &mut impl Confirm) -> usize {
        let count = self.tasks.iter().filter(|t| t.completed).count();
        if count == 0 {
            return 0;
        }
        if !confirm.confirm(&clear_completed_prompt(count)) {
            return 0;
        }
        if let Some(id) = self.editing_id()
            && self.get(id).is_some_and(|t| t.completed)
        {
            self.state.editing = None;
        }
        self.tasks.retain(|t| !t.completed);
        tracing::debug!(count, "completed tasks cleared");
        count
    }

    /// Start editing a task, abandoning any edit already in progress.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.get(id) else {
            return false;
        };
        let buffer = task.text.clone();
        if let Some(prev) = self.state.editing.replace(EditSession {
            task_id: id,
            buffer,
        }) && prev.task_id != id
        {
            tracing::debug!(abandoned = %prev.task_id, "edit abandoned");
        }
        true
    }

    /// Replace the edit buffer. Ignored when no edit session is open.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Some(session) = &mut self.state.editing {
            session.buffer = text.into();
        }
    }

    /// Save the edit buffer if it is not blank, then end the session.
    /// Returns whether a task was changed.
    pub fn commit_edit(&mut self) -> bool {
        let Some(session) = self.state.editing.take() else {
            return false;
        };
        let text = session.buffer.trim();
        if text.is_empty() {
            tracing::debug!(id = %session.task_id, "blank edit discarded");
            return false;
        }
        match self.get_mut(session.task_id) {
            Some(task) => {
                task.text = text.to_string();
                tracing::debug!(id = %session.task_id, "task edited");
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.editing = None;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.state.filter = filter;
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.state.draft.text = text.into();
    }

    pub fn set_draft_category(&mut self, category: Category) {
        self.state.draft.category = category;
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.state.draft.priority = priority;
    }

    pub fn set_add_panel_open(&mut self, open: bool) {
        self.state.add_panel_open = open;
    }

    /// Show or hide the add panel. Opening it drops any unsaved edit.
    pub fn toggle_add_panel(&mut self) {
        self.state.add_panel_open = !self.state.add_panel_open;
        if self.state.add_panel_open && self.state.editing.take().is_some() {
            tracing::debug!("edit abandoned by add panel");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn accept(_: &str) -> bool {
        true
    }

    fn decline(_: &str) -> bool {
        false
    }

    fn store_with(texts: &[&str]) -> (TaskStore, Vec<TaskId>) {
        let mut store = TaskStore::new();
        let ids = texts
            .iter()
            .map(|t| store.create(t, Category::Personal, Priority::Low).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn create_prepends_with_defaults() {
        let (mut store, _) = store_with(&["Older"]);
        let id = store
            .create("Complete project presentation", Category::Work, Priority::High)
            .unwrap();

        let visible = store.visible();
        let first = visible[0];
        assert_eq!(first.id, id);
        assert_eq!(first.text, "Complete project presentation");
        assert_eq!(first.category, Category::Work);
        assert_eq!(first.priority, Priority::High);
        assert!(!first.completed);
    }

    #[test]
    fn create_trims_text() {
        let mut store = TaskStore::new();
        let id = store
            .create("  padded  ", Category::Personal, Priority::Low)
            .unwrap();
        assert_eq!(store.get(id).unwrap().text, "padded");
    }

    #[test]
    fn create_blank_is_noop() {
        let (mut store, _) = store_with(&["One"]);
        store.set_draft_text("   ");
        store.set_add_panel_open(true);

        assert_eq!(store.create("   ", Category::Work, Priority::High), None);
        assert_eq!(store.create("", Category::Work, Priority::High), None);
        assert_eq!(store.len(), 1);
        // Failed create leaves the panel alone
        assert!(store.is_add_panel_open());
    }

    #[test]
    fn create_clears_draft_text_and_closes_panel() {
        let mut store = TaskStore::new();
        store.set_add_panel_open(true);
        store.set_draft_text("Water plants");
        store.set_draft_category(Category::Health);
        store.set_draft_priority(Priority::High);

        let id = store.create_from_draft().unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.text, "Water plants");
        assert_eq!(task.category, Category::Health);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(store.draft().text, "");
        assert!(!store.is_add_panel_open());
        // Selections survive for the next task
        assert_eq!(store.draft().category, Category::Health);
    }

    #[test]
    fn ids_stay_unique_across_operations() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        store.delete(ids[1], &mut accept);
        store.toggle(ids[0]);
        store.create("d", Category::Work, Priority::Low);
        store.delete(ids[2], &mut accept);
        store.create("e", Category::Work, Priority::Low);

        let seen: HashSet<_> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(seen.len(), store.len());
        // Deleted ids are never reused
        assert!(!seen.contains(&ids[1]));
        assert!(!seen.contains(&ids[2]));
    }

    #[test]
    fn double_toggle_restores() {
        let (mut store, ids) = store_with(&["a"]);
        assert!(store.toggle(ids[0]));
        assert!(store.get(ids[0]).unwrap().completed);
        assert!(store.toggle(ids[0]));
        assert!(!store.get(ids[0]).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let (mut store, ids) = store_with(&["a"]);
        store.delete(ids[0], &mut accept);
        assert!(!store.toggle(ids[0]));
    }

    #[test]
    fn delete_declined_keeps_task() {
        let (mut store, ids) = store_with(&["a", "b"]);
        assert!(!store.delete(ids[0], &mut decline));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_accepted_removes_from_every_view() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.toggle(ids[0]);
        assert!(store.delete(ids[0], &mut accept));
        assert_eq!(store.len(), 1);
        for filter in StatusFilter::ALL {
            store.set_filter(filter);
            assert!(store.visible().iter().all(|t| t.id != ids[0]));
        }
    }

    #[test]
    fn delete_prompt_names_task_and_unknown_id_skips_prompt() {
        let (mut store, ids) = store_with(&["Buy milk"]);
        let mut prompts = Vec::new();
        let mut record = |p: &str| {
            prompts.push(p.to_string());
            false
        };
        store.delete(ids[0], &mut record);
        store.delete(TaskId::new(999), &mut record);
        assert_eq!(prompts, vec!["Delete \"Buy milk\"?".to_string()]);
    }

    #[test]
    fn delete_ends_edit_of_that_task() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.begin_edit(ids[0]);
        store.delete(ids[0], &mut accept);
        assert_eq!(store.editing_id(), None);

        store.begin_edit(ids[1]);
        store.create("c", Category::Work, Priority::Low);
        assert_eq!(store.editing_id(), Some(ids[1]));
    }

    #[test]
    fn begin_then_cancel_leaves_text() {
        let (mut store, ids) = store_with(&["Original"]);
        assert!(store.begin_edit(ids[0]));
        assert_eq!(store.edit_buffer(), "Original");
        store.set_edit_buffer("Changed");
        store.cancel_edit();

        assert_eq!(store.get(ids[0]).unwrap().text, "Original");
        assert_eq!(store.editing_id(), None);
        assert_eq!(store.edit_buffer(), "");
    }

    #[test]
    fn commit_whitespace_is_discarded() {
        let (mut store, ids) = store_with(&["Original"]);
        store.begin_edit(ids[0]);
        store.set_edit_buffer("  ");
        assert!(!store.commit_edit());

        assert_eq!(store.get(ids[0]).unwrap().text, "Original");
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn commit_saves_trimmed_text() {
        let (mut store, ids) = store_with(&["Original"]);
        store.begin_edit(ids[0]);
        store.set_edit_buffer(" Renamed ");
        assert!(store.commit_edit());
        assert_eq!(store.get(ids[0]).unwrap().text, "Renamed");
        assert_eq!(store.editing(), None);
    }

    #[test]
    fn commit_without_session_is_noop() {
        let (mut store, _) = store_with(&["a"]);
        assert!(!store.commit_edit());
    }

    #[test]
    fn begin_edit_abandons_previous_session() {
        let (mut store, ids) = store_with(&["first", "second"]);
        store.begin_edit(ids[0]);
        store.set_edit_buffer("unsaved");
        store.begin_edit(ids[1]);

        assert_eq!(store.editing_id(), Some(ids[1]));
        assert_eq!(store.edit_buffer(), "second");
        assert_eq!(store.get(ids[0]).unwrap().text, "first");
    }

    #[test]
    fn begin_edit_unknown_id_keeps_current_session() {
        let (mut store, ids) = store_with(&["a"]);
        store.begin_edit(ids[0]);
        assert!(!store.begin_edit(TaskId::new(42)));
        assert_eq!(store.editing_id(), Some(ids[0]));
    }

    #[test]
    fn set_edit_buffer_without_session_is_ignored() {
        let (mut store, _) = store_with(&["a"]);
        store.set_edit_buffer("ghost");
        assert_eq!(store.edit_buffer(), "");
    }

    #[test]
    fn opening_add_panel_abandons_edit() {
        let (mut store, ids) = store_with(&["a"]);
        store.begin_edit(ids[0]);
        store.toggle_add_panel();
        assert!(store.is_add_panel_open());
        assert_eq!(store.editing_id(), None);

        // Closing does not touch a fresh session
        store.begin_edit(ids[0]);
        store.toggle_add_panel();
        assert!(!store.is_add_panel_open());
        assert_eq!(store.editing_id(), Some(ids[0]));
    }

    #[test]
    fn clear_completed_needs_confirmation() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        store.toggle(ids[0]);
        store.toggle(ids[2]);

        assert_eq!(store.clear_completed(&mut decline), 0);
        assert_eq!(store.len(), 3);

        let mut prompt = String::new();
        let removed = store.clear_completed(&mut |p: &str| {
            prompt = p.to_string();
            true
        });
        assert_eq!(removed, 2);
        assert_eq!(prompt, "Remove 2 completed tasks?");
        assert_eq!(store.tasks().iter().map(|t| t.id).collect::<Vec<_>>(), vec![ids[1]]);
    }

    #[test]
    fn clear_completed_with_none_does_not_prompt() {
        let (mut store, _) = store_with(&["a"]);
        let mut asked = false;
        store.clear_completed(&mut |_: &str| {
            asked = true;
            true
        });
        assert!(!asked);
    }

    #[test]
    fn sample_tasks_keep_draft_and_order() {
        let mut store = TaskStore::with_draft_defaults(Category::Work, Priority::High);
        store.set_draft_text("half typed");
        store.seed_sample_tasks();

        assert_eq!(store.len(), 4);
        assert_eq!(store.tasks()[0].text, "Complete project presentation");
        assert_eq!(store.progress().completed, 1);
        assert_eq!(store.draft().text, "half typed");
        assert_eq!(store.draft().category, Category::Work);
    }

    #[test]
    fn visible_uses_filter_and_query() {
        let (mut store, ids) = store_with(&["Buy groceries for the week", "Walk dog"]);
        store.toggle(ids[1]);
        store.set_search_query("GROCERIES");
        assert_eq!(store.visible().len(), 1);

        store.set_search_query("");
        store.set_filter(StatusFilter::Active);
        assert_eq!(
            store.visible().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![ids[0]]
        );
    }
}
