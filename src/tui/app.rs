use crate::todo::models::{Aggregates, TodoList};
use crate::tui::handlers::{HelpModeAction, InputModeAction, KeyHandler, ListModeAction};
use crate::tui::input::InputBinding;
use crate::tui::navigation::NavigationState;
use crate::tui::stats::StatsView;
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

pub struct App {
    pub title: String,
    pub todo_list: TodoList,
    pub input: InputBinding,
    pub stats: StatsView,
    pub navigation: NavigationState,
    pub focus: Focus,
    pub help_mode: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(title: String) -> Self {
        let mut todo_list = TodoList::new();
        todo_list.subscribe(Box::new(|aggregates: &Aggregates| {
            trace!(
                len = aggregates.len,
                remaining = aggregates.remaining,
                all_are_done = aggregates.all_are_done,
                "todo list changed"
            );
        }));
        let stats = StatsView::new(&todo_list);
        Self {
            title,
            todo_list,
            input: InputBinding::new(),
            stats,
            navigation: NavigationState::new(),
            focus: Focus::Input,
            help_mode: false,
            should_quit: false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else {
            match self.focus {
                Focus::Input => self.handle_input_mode_key(key_event),
                Focus::List => self.handle_list_mode_key(key_event),
            }
        }
        self.refresh_views();
        Ok(())
    }

    fn handle_input_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::Quit => self.should_quit = true,
            InputModeAction::Commit => self.commit_input(),
            InputModeAction::FocusList => self.focus_list(),
            InputModeAction::Backspace => self.input.backspace(),
            InputModeAction::Delete => self.input.delete(),
            InputModeAction::DeleteWordBackward => self.input.delete_word_backward(),
            InputModeAction::MoveCursorLeft => self.input.move_cursor_left(),
            InputModeAction::MoveCursorRight => self.input.move_cursor_right(),
            InputModeAction::MoveCursorHome => self.input.move_cursor_home(),
            InputModeAction::MoveCursorEnd => self.input.move_cursor_end(),
            InputModeAction::InsertChar(c) => self.input.insert_char(c),
            InputModeAction::None => {}
        }
    }

    fn handle_list_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_list_mode_key(key_event) {
            ListModeAction::Quit => self.should_quit = true,
            ListModeAction::FocusInput => self.focus = Focus::Input,
            ListModeAction::MoveSelectionUp => self.navigation.move_selection_up(),
            ListModeAction::MoveSelectionDown => {
                self.navigation.move_selection_down(self.todo_list.len())
            }
            ListModeAction::ToggleSelectedItem => self.toggle_selected_item(),
            ListModeAction::ToggleAllDone => self.toggle_all_done(),
            ListModeAction::ClearCompleted => self.clear_completed(),
            ListModeAction::ToggleHelpMode => self.help_mode = true,
            ListModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    fn commit_input(&mut self) {
        if self.input.commit(&mut self.todo_list) {
            debug!(total = self.todo_list.len(), "todo added from input");
        }
    }

    fn focus_list(&mut self) {
        if self.todo_list.is_empty() {
            return;
        }
        self.focus = Focus::List;
        self.navigation.clamp(self.todo_list.len());
    }

    fn toggle_selected_item(&mut self) {
        let index = self.navigation.selected_index;
        if self.todo_list.toggle(index) {
            if let Some(todo) = self.todo_list.get(index) {
                debug!(index, title = todo.title(), done = todo.is_done(), "toggled todo");
            }
        }
    }

    fn toggle_all_done(&mut self) {
        let value = !self.todo_list.all_are_done();
        self.todo_list.set_all_done(value);
    }

    fn clear_completed(&mut self) {
        let removed = self.todo_list.clear_completed_todos();
        if removed > 0 {
            info!(removed, left = ?self.todo_list.titles(), "cleared completed todos");
        }
        self.navigation.clamp(self.todo_list.len());
        if self.todo_list.is_empty() {
            self.focus = Focus::Input;
        }
    }

    fn refresh_views(&mut self) {
        if self.stats.sync(&self.todo_list) {
            debug!(remaining = self.stats.remaining(), "stats re-rendered");
        }
    }

    pub fn total_items(&self) -> usize {
        self.todo_list.len()
    }

    pub fn completed_items(&self) -> usize {
        self.todo_list.completed_items()
    }
}
