//! Demo 01: Basic Store Operations
//!
//! Walks through the full mutation surface of the in-memory store:
//! adding, updating, and deleting tasks.
//!
//! Run with: cargo run --example 01_basic_ops

use todostore::{Store, Task};

fn main() {
    println!("TodoStore Basic Operations");
    println!("==========================\n");

    let mut store = Store::new();
    println!("Fresh store: {} tasks, filter = {:?}\n", store.len(), store.filter());

    // Add a few tasks
    println!("1. Adding tasks...");
    store.add_task(Task::new("task-001", "Write documentation"));
    store.add_task(Task::new("task-002", "Fix critical bug"));
    store.add_task(Task::new("task-003", "Code review"));
    for task in store.tasks() {
        println!("   {} - {}", task.id, task.title);
    }
    println!();

    // Complete one
    println!("2. Completing task-002...");
    store.update_task_status("task-002", true);
    let completed = store.tasks().iter().filter(|t| t.completed).count();
    println!("   {} of {} tasks completed\n", completed, store.len());

    // Rename one
    println!("3. Renaming task-003...");
    store.update_task_title("task-003", "Review open pull requests".to_string());
    println!("   task-003 is now: {:?}\n", store.tasks()[2].title);

    // Updates against unknown ids do nothing
    println!("4. Updating a task that does not exist...");
    store.update_task_status("task-999", true);
    println!("   store unchanged: still {} tasks\n", store.len());

    // Delete one
    println!("5. Deleting task-001...");
    store.delete_task("task-001");
    for task in store.tasks() {
        println!("   {} - {}", task.id, task.title);
    }
    println!();

    // Wholesale replacement
    println!("6. Replacing the whole list...");
    store.set_tasks(vec![Task::new("fresh-001", "Start over")]);
    println!("   {} task(s) after replacement", store.len());

    println!("\nDemo complete!");
}
