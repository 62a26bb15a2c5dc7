/// A screen that can sit in a navigation stack.
pub trait Screen: Clone + std::fmt::Debug {
    /// Title the screen declares for itself.
    fn title(&self) -> &str;

    /// Whether the screen can be reached straight from the menu.
    ///
    /// Drill-in screens return `false`: once shown they drop the menu
    /// control and everything beneath them reads "Back".
    fn is_directly_navigable(&self) -> bool {
        true
    }
}
