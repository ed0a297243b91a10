use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    title: String,
    is_done: bool,
}

impl Todo {
    pub fn new(title: String) -> Self {
        Self {
            title,
            is_done: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }
}

/// Snapshot of the values derived from a [`TodoList`]'s contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregates {
    pub len: usize,
    pub remaining: usize,
    pub all_are_done: bool,
}

impl Aggregates {
    fn compute(items: &[Todo]) -> Self {
        let remaining = items.iter().filter(|todo| !todo.is_done).count();
        Self {
            len: items.len(),
            remaining,
            all_are_done: !items.is_empty() && remaining == 0,
        }
    }
}

pub type Observer = Box<dyn FnMut(&Aggregates)>;

/// Ordered, single-owner collection of todos.
///
/// Every mutating call recomputes the cached [`Aggregates`], bumps the
/// revision and notifies observers before it returns, so `remaining()` and
/// `all_are_done()` are never stale.
pub struct TodoList {
    items: Vec<Todo>,
    aggregates: Aggregates,
    revision: u64,
    observers: Vec<Observer>,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            aggregates: Aggregates::default(),
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Appends a new, not-done todo. Callers reject empty titles.
    pub fn create_todo(&mut self, title: impl Into<String>) {
        let todo = Todo::new(title.into());
        debug!(title = %todo.title, "creating todo");
        self.items.push(todo);
        self.changed();
    }

    pub fn remaining(&self) -> usize {
        self.aggregates.remaining
    }

    pub fn all_are_done(&self) -> bool {
        self.aggregates.all_are_done
    }

    /// Sets every entry's done flag to `value` and returns `value`.
    pub fn set_all_done(&mut self, value: bool) -> bool {
        let mut flipped = 0;
        for todo in &mut self.items {
            if todo.is_done != value {
                todo.is_done = value;
                flipped += 1;
            }
        }
        if flipped > 0 {
            debug!(value, flipped, "set all todos");
            self.changed();
        }
        value
    }

    /// Removes every done entry, keeping the others in order. Returns how
    /// many were removed.
    pub fn clear_completed_todos(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|todo| !todo.is_done);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(removed, "cleared completed todos");
            self.changed();
        }
        removed
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(todo) => {
                let value = !todo.is_done;
                self.set_done(index, value)
            }
            None => false,
        }
    }

    pub fn set_done(&mut self, index: usize, value: bool) -> bool {
        let Some(todo) = self.items.get_mut(index) else {
            return false;
        };
        if todo.is_done != value {
            todo.is_done = value;
            debug!(index, value, "todo done flag changed");
            self.changed();
        }
        true
    }

    /// Registers a callback that receives fresh aggregates after every
    /// effective mutation.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter()
    }

    pub fn completed_items(&self) -> usize {
        self.aggregates.len - self.aggregates.remaining
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(Todo::title).collect()
    }

    fn changed(&mut self) {
        self.aggregates = Aggregates::compute(&self.items);
        self.revision += 1;
        for observer in &mut self.observers {
            observer(&self.aggregates);
        }
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoList")
            .field("items", &self.items)
            .field("aggregates", &self.aggregates)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
