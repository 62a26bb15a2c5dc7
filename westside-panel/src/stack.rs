use crate::chrome::ChromeConfig;
use crate::screen::Screen;

/// One screen in a navigation stack together with its displayed label.
#[derive(Debug, Clone)]
pub struct StackEntry<S> {
    screen: S,
    label: String,
    chrome: Option<ChromeConfig>,
}

impl<S: Screen> StackEntry<S> {
    fn new(screen: S) -> Self {
        let label = screen.title().to_string();
        Self {
            screen,
            label,
            chrome: None,
        }
    }
}

impl<S> StackEntry<S> {
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Label the host displays for this entry (title or back label).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Chrome applied the last time this entry became visible.
    pub fn chrome(&self) -> Option<&ChromeConfig> {
        self.chrome.as_ref()
    }
}

/// Ordered navigation stack; never empty.
#[derive(Debug, Clone)]
pub struct NavigationStack<S> {
    entries: Vec<StackEntry<S>>,
}

impl<S: Screen> NavigationStack<S> {
    pub fn new(root: S) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    pub(crate) fn push(&mut self, screen: S) {
        self.entries.push(StackEntry::new(screen));
    }

    /// Replace the whole stack with a single root screen.
    pub(crate) fn replace(&mut self, screen: S) {
        self.entries.clear();
        self.entries.push(StackEntry::new(screen));
    }

    /// Remove the top entry unless it is the root.
    pub(crate) fn pop(&mut self) -> Option<S> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop().map(|entry| entry.screen)
    }
}

impl<S> NavigationStack<S> {
    /// Visible (top) entry.
    pub fn top(&self) -> &StackEntry<S> {
        // Every constructor and mutation keeps at least the root entry.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, root included.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[StackEntry<S>] {
        &self.entries
    }

    pub fn screens(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(StackEntry::screen)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(StackEntry::label)
    }

    /// Apply chrome to the top entry, also adopting its title as label.
    pub(crate) fn set_top_chrome(&mut self, chrome: ChromeConfig) {
        let index = self.entries.len() - 1;
        let entry = &mut self.entries[index];
        entry.label = chrome.title.clone();
        entry.chrome = Some(chrome);
    }

    /// Relabel every entry beneath the top one.
    pub(crate) fn relabel_beneath_top(&mut self, label: &str) {
        let top = self.entries.len() - 1;
        for entry in &mut self.entries[..top] {
            entry.label = label.to_string();
        }
    }
}
