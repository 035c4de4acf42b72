// Display filters and the filtered-view computation

use crate::models::Task;

/// The three recognized display filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    /// Canonical string form, as held by the store
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Parse a user-supplied name, case-insensitively.
    ///
    /// Returns `None` for anything outside the three recognized values;
    /// callers decide whether to reject such input or pass it through raw.
    pub fn parse(input: &str) -> Option<Filter> {
        match input.to_ascii_lowercase().as_str() {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Select the tasks visible under `filter`, preserving order.
///
/// Matching is exact: "Active" keeps open tasks, "Completed" keeps finished
/// ones, and every other value (including "All") yields the whole list.
pub fn visible<'a>(filter: &str, tasks: &'a [Task]) -> Vec<&'a Task> {
    match filter {
        "Active" => tasks.iter().filter(|t| !t.completed).collect(),
        "Completed" => tasks.iter().filter(|t| t.completed).collect(),
        _ => tasks.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: "1".to_string(),
                title: "A".to_string(),
                completed: false,
            },
            Task {
                id: "2".to_string(),
                title: "B".to_string(),
                completed: true,
            },
            Task {
                id: "3".to_string(),
                title: "C".to_string(),
                completed: false,
            },
        ]
    }

    #[test]
    fn test_filter_as_str() {
        assert_eq!(Filter::All.as_str(), "All");
        assert_eq!(Filter::Active.as_str(), "Active");
        assert_eq!(Filter::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::Active.to_string(), "Active");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Filter::parse("all"), Some(Filter::All));
        assert_eq!(Filter::parse("ACTIVE"), Some(Filter::Active));
        assert_eq!(Filter::parse("Completed"), Some(Filter::Completed));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Filter::parse("done"), None);
        assert_eq!(Filter::parse(""), None);
    }

    #[test]
    fn test_visible_active() {
        let tasks = sample_tasks();
        let result = visible("Active", &tasks);

        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_visible_completed() {
        let tasks = sample_tasks();
        let result = visible("Completed", &tasks);

        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_visible_all() {
        let tasks = sample_tasks();
        assert_eq!(visible("All", &tasks).len(), 3);
    }

    #[test]
    fn test_visible_matches_exactly() {
        // Lowercase "active" is not a recognized value and falls back to
        // the full list, same as any other unknown string.
        let tasks = sample_tasks();
        assert_eq!(visible("active", &tasks).len(), 3);
        assert_eq!(visible("Archived", &tasks).len(), 3);
        assert_eq!(visible("", &tasks).len(), 3);
    }
}
