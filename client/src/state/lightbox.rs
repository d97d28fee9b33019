//! Selected-item overlay over a static catalog.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// Which catalog entry, if any, is shown full-size.
#[derive(Debug)]
pub struct Lightbox<T: 'static> {
    items: &'static [T],
    selected: Option<usize>,
}

// Manual impls: derives would require `T: Clone`/`T: Copy`.
impl<T> Clone for Lightbox<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lightbox<T> {}

impl<T> Lightbox<T> {
    #[must_use]
    pub fn new(items: &'static [T]) -> Self {
        Self { items, selected: None }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&'static T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open entry `index`. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
