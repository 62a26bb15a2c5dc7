use super::model::MenuItem;

/// Menu selection state.
#[derive(Debug, Default)]
pub(super) struct MenuState {
    selected: Option<MenuItem>,
}

impl MenuState {
    pub(super) fn selected(&self) -> Option<MenuItem> {
        self.selected
    }

    pub(super) fn select(&mut self, item: MenuItem) {
        self.selected = Some(item);
    }

    pub(super) fn reset(&mut self) {
        self.selected = None;
    }
}
