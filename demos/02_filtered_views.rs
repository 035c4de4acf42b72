//! Demo 02: Filtered Views
//!
//! Shows how the display filter selects which tasks are visible, and how
//! unrecognized filter values fall back to showing everything.
//!
//! Run with: cargo run --example 02_filtered_views

use todostore::{Filter, Store, Task};

fn print_visible(store: &Store) {
    println!("   filter = {:?}", store.filter());
    for task in store.filtered_tasks() {
        let mark = if task.completed { 'x' } else { ' ' };
        println!("   [{}] {}", mark, task.title);
    }
    println!();
}

fn main() {
    let mut store = Store::new();

    println!("TodoStore Filtered Views");
    println!("========================\n");

    store.set_tasks(vec![
        Task {
            id: "task-001".to_string(),
            title: "Write documentation".to_string(),
            completed: false,
        },
        Task {
            id: "task-002".to_string(),
            title: "Fix critical bug".to_string(),
            completed: true,
        },
        Task {
            id: "task-003".to_string(),
            title: "Deploy to staging".to_string(),
            completed: false,
        },
    ]);

    println!("1. Default view shows everything:");
    print_visible(&store);

    println!("2. Active tasks only:");
    store.set_filter(Filter::Active.as_str());
    print_visible(&store);

    println!("3. Completed tasks only:");
    store.set_filter(Filter::Completed.as_str());
    print_visible(&store);

    println!("4. Unrecognized values fall back to the full list:");
    store.set_filter("Archived");
    print_visible(&store);

    println!("Demo complete!");
}
