//! Interactive shell over the task store
//!
//! A synchronous read-eval loop that owns the store for the process
//! lifetime. Every command maps onto one store operation; the store itself
//! never reports a miss, so user-facing feedback lives here.

use std::fs;

use colored::Colorize;
use eyre::{Context, Result, eyre};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;
use uuid::Uuid;

use crate::filter::Filter;
use crate::models::Task;
use crate::store::Store;

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Interactive session owning the store
pub struct ReplSession {
    store: Store,
}

impl ReplSession {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run the read-eval loop until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre!("Failed to initialize line editor: {}", e))?;

        loop {
            match rl.readline(&format!("{} ", ">".bright_green())) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    match self.execute(input) {
                        Ok(Outcome::Continue) => continue,
                        Ok(Outcome::Quit) => break,
                        Err(err) => println!("{} {err:#}", "Error:".red()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show a new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Execute a single command line against the store
    pub fn execute(&mut self, input: &str) -> Result<Outcome> {
        let (cmd, rest) = split_command(input);

        match cmd {
            "add" => self.cmd_add(rest)?,
            "list" | "ls" => self.cmd_list(),
            "done" => self.cmd_set_status(rest, true)?,
            "undo" => self.cmd_set_status(rest, false)?,
            "edit" => self.cmd_edit(rest)?,
            "rm" => self.cmd_delete(rest)?,
            "filter" => self.cmd_filter(rest),
            "load" => self.cmd_load(rest)?,
            "dump" => self.cmd_dump()?,
            "help" | "h" => print_help(),
            "quit" | "q" | "exit" => return Ok(Outcome::Quit),
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "help".yellow());
            }
        }

        Ok(Outcome::Continue)
    }

    fn cmd_add(&mut self, title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(eyre!("Usage: add <title>"));
        }

        let task = Task::new(Uuid::now_v7().to_string(), title);
        println!("{} {} ({})", "Added".green(), task.title, short_id(&task.id).dimmed());
        self.store.add_task(task);
        Ok(())
    }

    fn cmd_list(&self) {
        let visible = self.store.filtered_tasks();
        println!(
            "{} {} of {} ({})",
            "Tasks:".bright_cyan().bold(),
            visible.len(),
            self.store.len(),
            self.store.filter()
        );

        if visible.is_empty() {
            println!("  {}", "nothing to show".dimmed());
            return;
        }

        for task in visible {
            let mark = if task.completed { "x".green() } else { " ".normal() };
            println!("  [{}] {}  {}", mark, task.title, short_id(&task.id).dimmed());
        }
    }

    fn cmd_set_status(&mut self, input: &str, completed: bool) -> Result<()> {
        if input.is_empty() {
            let usage = if completed { "done" } else { "undo" };
            return Err(eyre!("Usage: {} <id>", usage));
        }

        let id = self.resolve_id(input);
        if self.store.tasks().iter().any(|t| t.id == id) {
            self.store.update_task_status(&id, completed);
            let verb = if completed { "Completed" } else { "Reopened" };
            println!("{} {}", verb.green(), short_id(&id).dimmed());
        } else {
            self.store.update_task_status(&id, completed);
            println!("{} no task matching '{}'", "?".yellow(), input);
        }
        Ok(())
    }

    fn cmd_edit(&mut self, rest: &str) -> Result<()> {
        let (input, title) = split_command(rest);
        if input.is_empty() || title.is_empty() {
            return Err(eyre!("Usage: edit <id> <title>"));
        }

        let id = self.resolve_id(input);
        if self.store.tasks().iter().any(|t| t.id == id) {
            self.store.update_task_title(&id, title.to_string());
            println!("{} {}", "Renamed".green(), short_id(&id).dimmed());
        } else {
            self.store.update_task_title(&id, title.to_string());
            println!("{} no task matching '{}'", "?".yellow(), input);
        }
        Ok(())
    }

    fn cmd_delete(&mut self, input: &str) -> Result<()> {
        if input.is_empty() {
            return Err(eyre!("Usage: rm <id>"));
        }

        let id = self.resolve_id(input);
        let before = self.store.len();
        self.store.delete_task(&id);
        let removed = before - self.store.len();

        if removed > 0 {
            println!("{} {} task(s)", "Removed".green(), removed);
        } else {
            println!("{} no task matching '{}'", "?".yellow(), input);
        }
        Ok(())
    }

    fn cmd_filter(&mut self, value: &str) {
        if value.is_empty() {
            println!("Current filter: {}", self.store.filter().bright_cyan());
            return;
        }

        // Canonicalize the three known names; anything else goes through
        // raw, which the view treats as "show everything".
        let value = match Filter::parse(value) {
            Some(f) => f.as_str().to_string(),
            None => {
                println!("{} unrecognized filter '{}', showing all tasks", "note:".dimmed(), value);
                value.to_string()
            }
        };

        self.store.set_filter(value);
        self.cmd_list();
    }

    fn cmd_load(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(eyre!("Usage: load <path>"));
        }

        let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let tasks: Vec<Task> =
            serde_json::from_str(&raw).with_context(|| format!("Failed to parse {} as a task list", path))?;

        info!(count = tasks.len(), path, "Loaded task list");
        println!("{} {} task(s) from {}", "Loaded".green(), tasks.len(), path);
        self.store.set_tasks(tasks);
        Ok(())
    }

    fn cmd_dump(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.store.tasks()).context("Failed to serialize task list")?;
        println!("{}", json);
        Ok(())
    }

    /// Resolve user input to a task id: exact match first, then a unique
    /// prefix. Falls back to the input itself so the store's silent
    /// no-op-on-miss semantics apply to whatever was typed.
    fn resolve_id(&self, input: &str) -> String {
        let tasks = self.store.tasks();
        if tasks.iter().any(|t| t.id == input) {
            return input.to_string();
        }

        let mut matches = tasks.iter().filter(|t| t.id.starts_with(input));
        match (matches.next(), matches.next()) {
            (Some(task), None) => task.id.clone(),
            _ => input.to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "TodoStore Interactive Shell".bright_cyan().bold());
        println!("Type {} for commands, {} to leave", "help".yellow(), "quit".yellow());
        println!();
    }
}

fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    }
}

/// First component of a v7 uuid is plenty for display
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn print_help() {
    println!();
    println!("{}", "Available Commands:".bright_cyan());
    println!("  {:22} Add a task", "add <title>".yellow());
    println!("  {:22} List tasks under the current filter", "list".yellow());
    println!("  {:22} Mark a task completed", "done <id>".yellow());
    println!("  {:22} Mark a task active again", "undo <id>".yellow());
    println!("  {:22} Rename a task", "edit <id> <title>".yellow());
    println!("  {:22} Delete a task", "rm <id>".yellow());
    println!("  {:22} Set the filter (All, Active, Completed)", "filter <value>".yellow());
    println!("  {:22} Replace the list from a JSON file", "load <path>".yellow());
    println!("  {:22} Print the list as JSON", "dump".yellow());
    println!("  {:22} Exit the shell", "quit".yellow());
    println!();
    println!("Ids may be abbreviated to any unique prefix.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn session_with(tasks: Vec<Task>) -> ReplSession {
        let mut store = Store::new();
        store.set_tasks(tasks);
        ReplSession::new(store)
    }

    fn task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_add_command_appends_open_task() {
        let mut session = session_with(vec![]);

        let outcome = session.execute("add Buy milk").unwrap();

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(session.store().len(), 1);
        let added = &session.store().tasks()[0];
        assert_eq!(added.title, "Buy milk");
        assert!(!added.completed);
        assert!(!added.id.is_empty());
    }

    #[test]
    fn test_add_without_title_is_an_error() {
        let mut session = session_with(vec![]);
        assert!(session.execute("add").is_err());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_done_and_undo_flip_completion() {
        let mut session = session_with(vec![task("abc-123", "A", false)]);

        session.execute("done abc-123").unwrap();
        assert!(session.store().tasks()[0].completed);

        session.execute("undo abc-123").unwrap();
        assert!(!session.store().tasks()[0].completed);
    }

    #[test]
    fn test_unique_prefix_resolves_to_full_id() {
        let mut session = session_with(vec![task("abc-123", "A", false), task("xyz-789", "B", false)]);

        session.execute("done abc").unwrap();

        assert!(session.store().tasks()[0].completed);
        assert!(!session.store().tasks()[1].completed);
    }

    #[test]
    fn test_ambiguous_prefix_leaves_state_unchanged() {
        let mut session = session_with(vec![task("abc-123", "A", false), task("abc-456", "B", false)]);

        session.execute("done abc").unwrap();

        assert!(session.store().tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_done_with_unknown_id_is_a_no_op() {
        let mut session = session_with(vec![task("abc-123", "A", false)]);

        session.execute("done nonsense").unwrap();

        assert!(!session.store().tasks()[0].completed);
    }

    #[test]
    fn test_edit_renames_task() {
        let mut session = session_with(vec![task("abc-123", "old title", false)]);

        session.execute("edit abc new title here").unwrap();

        assert_eq!(session.store().tasks()[0].title, "new title here");
    }

    #[test]
    fn test_rm_deletes_task() {
        let mut session = session_with(vec![task("abc-123", "A", false), task("xyz-789", "B", false)]);

        session.execute("rm xyz").unwrap();

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().tasks()[0].id, "abc-123");
    }

    #[test]
    fn test_filter_command_canonicalizes_known_names() {
        let mut session = session_with(vec![]);

        session.execute("filter active").unwrap();
        assert_eq!(session.store().filter(), "Active");

        session.execute("filter COMPLETED").unwrap();
        assert_eq!(session.store().filter(), "Completed");
    }

    #[test]
    fn test_filter_command_passes_unknown_values_through() {
        let mut session = session_with(vec![task("1", "A", false), task("2", "B", true)]);

        session.execute("filter Whatever").unwrap();

        assert_eq!(session.store().filter(), "Whatever");
        assert_eq!(session.store().filtered_tasks().len(), 2);
    }

    #[test]
    fn test_load_replaces_collection_from_file() {
        let mut session = session_with(vec![task("old", "stale", false)]);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "title": "A", "completed": false}}, {{"id": "2", "title": "B", "completed": true}}]"#
        )
        .unwrap();

        session.execute(&format!("load {}", file.path().display())).unwrap();

        assert_eq!(session.store().len(), 2);
        assert!(session.store().tasks().iter().all(|t| t.id != "old"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut session = session_with(vec![task("1", "A", false)]);

        assert!(session.execute("load /no/such/file.json").is_err());
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_quit_ends_the_loop() {
        let mut session = session_with(vec![]);
        assert_eq!(session.execute("quit").unwrap(), Outcome::Quit);
        assert_eq!(session.execute("q").unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_unknown_command_continues() {
        let mut session = session_with(vec![]);
        assert_eq!(session.execute("frobnicate").unwrap(), Outcome::Continue);
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("add Buy milk"), ("add", "Buy milk"));
        assert_eq!(split_command("list"), ("list", ""));
        assert_eq!(split_command("edit  abc  title"), ("edit", "abc  title"));
    }
}
