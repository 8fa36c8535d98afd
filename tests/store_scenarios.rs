use std::collections::HashSet;

use pretty_assertions::assert_eq;

use jot::model::task::{Category, Priority};
use jot::ops::filter::StatusFilter;
use jot::ops::store::{Confirm, TaskStore};

/// Gate that records every prompt and answers with a fixed value.
struct Recorder {
    answer: bool,
    prompts: Vec<String>,
}

impl Recorder {
    fn answering(answer: bool) -> Self {
        Recorder {
            answer,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for Recorder {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

fn texts(store: &TaskStore) -> Vec<String> {
    store.visible().iter().map(|t| t.text.clone()).collect()
}

#[test]
fn add_panel_session() {
    let mut store = TaskStore::new();
    store.set_add_panel_open(true);
    store.set_draft_text("  Water plants  ");
    store.set_draft_category(Category::Health);
    store.set_draft_priority(Priority::High);

    let id = store.create_from_draft().expect("created");

    let task = store.get(id).unwrap();
    assert_eq!(task.text, "Water plants");
    assert_eq!(task.category, Category::Health);
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);
    assert_eq!(store.draft().text, "");
    assert!(!store.is_add_panel_open());
}

#[test]
fn groceries_search_under_active_filter() {
    let mut store = TaskStore::new();
    store.seed_sample_tasks();
    store.set_filter(StatusFilter::Active);
    store.set_search_query("GROCERIES");

    assert_eq!(texts(&store), vec!["Buy groceries for the week"]);

    store.set_search_query("");
    store.set_filter(StatusFilter::Completed);
    assert_eq!(texts(&store), vec!["Morning run in the park"]);
}

#[test]
fn progress_follows_toggles() {
    let mut store = TaskStore::new();
    let a = store.create("a", Category::Work, Priority::Low).unwrap();
    store.create("b", Category::Work, Priority::Low);
    store.create("c", Category::Work, Priority::Low);

    store.toggle(a);
    let progress = store.progress();
    assert_eq!((progress.completed, progress.total), (1, 3));
    assert!((progress.ratio() - 1.0 / 3.0).abs() < 1e-9);

    store.toggle(a);
    assert_eq!(store.progress().completed, 0);
}

#[test]
fn delete_asks_once_and_respects_answer() {
    let mut store = TaskStore::new();
    let id = store.create("Pay rent", Category::Personal, Priority::High).unwrap();

    let mut no = Recorder::answering(false);
    assert!(!store.delete(id, &mut no));
    assert_eq!(no.prompts, vec!["Delete \"Pay rent\"?".to_string()]);
    assert_eq!(store.len(), 1);

    let mut yes = Recorder::answering(true);
    assert!(store.delete(id, &mut yes));
    assert_eq!(yes.prompts.len(), 1);
    assert!(store.is_empty());

    // Already gone: no prompt
    let mut again = Recorder::answering(true);
    assert!(!store.delete(id, &mut again));
    assert!(again.prompts.is_empty());
}

#[test]
fn edit_round_trip() {
    let mut store = TaskStore::new();
    let id = store.create("Draft report", Category::Work, Priority::Medium).unwrap();

    assert!(store.begin_edit(id));
    store.set_edit_buffer("  Final report ");
    assert!(store.commit_edit());
    assert_eq!(store.get(id).unwrap().text, "Final report");
    assert_eq!(store.editing_id(), None);

    store.begin_edit(id);
    store.set_edit_buffer("   ");
    assert!(!store.commit_edit());
    assert_eq!(store.get(id).unwrap().text, "Final report");

    store.begin_edit(id);
    store.set_edit_buffer("discarded");
    store.cancel_edit();
    assert_eq!(store.get(id).unwrap().text, "Final report");
}

#[test]
fn ids_stay_unique_through_churn() {
    let mut store = TaskStore::new();
    let mut yes = |_: &str| true;
    let mut seen = HashSet::new();
    for round in 0..5 {
        let id = store
            .create(&format!("task {round}"), Category::Personal, Priority::Low)
            .unwrap();
        assert!(seen.insert(id));
        if round % 2 == 0 {
            store.delete(id, &mut yes);
        }
    }
    let ids: HashSet<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), store.len());
    assert_eq!(texts(&store), vec!["task 3", "task 1"]);
}

#[test]
fn clear_completed_keeps_open_tasks() {
    let mut store = TaskStore::new();
    store.seed_sample_tasks();
    let mut gate = Recorder::answering(true);
    assert_eq!(store.clear_completed(&mut gate), 1);
    assert_eq!(gate.prompts, vec!["Remove 1 completed task?".to_string()]);
    assert!(store.tasks().iter().all(|t| !t.completed));
    assert_eq!(store.len(), 3);
}
