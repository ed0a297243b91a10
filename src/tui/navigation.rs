/// List cursor. Scrolling is left to ratatui's `ListState`, which keeps the
/// selected row in view when the list is rendered.
pub struct NavigationState {
    pub selected_index: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self, max_items: usize) {
        if self.selected_index < max_items.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keeps the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, max_items: usize) {
        if self.selected_index >= max_items {
            self.selected_index = max_items.saturating_sub(1);
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.move_selection_up();
        assert_eq!(nav.selected_index, 0);

        nav.move_selection_down(2);
        nav.move_selection_down(2);
        assert_eq!(nav.selected_index, 1);

        nav.move_selection_down(0);
        assert_eq!(nav.selected_index, 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut nav = NavigationState::new();
        for _ in 0..4 {
            nav.move_selection_down(5);
        }
        assert_eq!(nav.selected_index, 4);

        nav.clamp(2);
        assert_eq!(nav.selected_index, 1);

        nav.clamp(0);
        assert_eq!(nav.selected_index, 0);
    }
}
