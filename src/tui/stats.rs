use crate::todo::models::TodoList;

pub fn remaining_string(remaining: usize) -> String {
    if remaining == 1 {
        format!("{} item", remaining)
    } else {
        format!("{} items", remaining)
    }
}

/// Stats line bound to the list's remaining count.
#[derive(Debug)]
pub struct StatsView {
    revision: u64,
    remaining: usize,
    text: String,
}

impl StatsView {
    pub fn new(todo_list: &TodoList) -> Self {
        let remaining = todo_list.remaining();
        Self {
            revision: todo_list.revision(),
            remaining,
            text: remaining_string(remaining),
        }
    }

    /// Pulls the bound value and re-renders when it moved. Returns whether
    /// the text changed.
    pub fn sync(&mut self, todo_list: &TodoList) -> bool {
        if todo_list.revision() == self.revision {
            return false;
        }
        self.revision = todo_list.revision();

        let remaining = todo_list.remaining();
        if remaining == self.remaining {
            return false;
        }
        self.remaining = remaining;
        self.text = remaining_string(remaining);
        true
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
