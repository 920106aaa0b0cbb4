use alloc::string::String;
use alloc::vec::Vec;

use crate::Delivery;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Success,
    BackPressed,
}

/// What the picker hands back to its host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerResults {
    pub urls: Vec<String>,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// The item was not added because `max` items are already selected.
    LimitReached,
    /// A plain click outside long-selection mode picks the item and finishes immediately.
    Completed(Delivery<PickerResults>),
}

/// Picked media URLs, in selection order, capped at `max`.
///
/// Long-selection (multi-pick) mode turns on when an item is added or when entered explicitly
/// with [`Selection::enter_long_selection`]. It turns off when a removal empties the selection,
/// and on finish or back press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    max: usize,
    urls: Vec<String>,
    long_selection: bool,
}

impl Selection {
    /// `max` below 1 is treated as 1.
    pub fn new(max: usize) -> Self {
        Self {
            max: max.max(1),
            urls: Vec::new(),
            long_selection: false,
        }
    }

    /// Seeds the selection; entries beyond `max` are dropped from the end, duplicates ignored.
    pub fn with_preselected<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in urls {
            let url = url.into();
            if self.urls.contains(&url) {
                continue;
            }
            if self.urls.len() >= self.max {
                adebug!(max = self.max, "preselected urls truncated");
                break;
            }
            self.urls.push(url);
        }
        self.long_selection = !self.urls.is_empty();
        self
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_long_selection(&self) -> bool {
        self.long_selection
    }

    /// Switches to multi-pick before anything is selected, so the next click toggles instead of
    /// completing.
    pub fn enter_long_selection(&mut self) {
        self.long_selection = true;
    }

    /// Adds `url` if absent (respecting `max`), removes it otherwise.
    pub fn toggle(&mut self, url: &str) -> SelectionChange {
        if let Some(pos) = self.urls.iter().position(|u| u == url) {
            self.urls.remove(pos);
            if self.urls.is_empty() {
                self.long_selection = false;
            }
            SelectionChange::Removed
        } else if self.urls.len() >= self.max {
            SelectionChange::LimitReached
        } else {
            self.urls.push(String::from(url));
            self.long_selection = true;
            SelectionChange::Added
        }
    }

    /// A tap on a grid item.
    ///
    /// In long-selection mode this toggles. Otherwise the item is picked and the selection is
    /// finished right away.
    pub fn click(&mut self, url: &str) -> SelectionChange {
        if self.long_selection {
            return self.toggle(url);
        }
        match self.toggle(url) {
            SelectionChange::Added => SelectionChange::Completed(self.finish()),
            other => other,
        }
    }

    /// A long-press on a grid item: enters long-selection mode with `url` selected, or toggles
    /// when already in it.
    pub fn long_press(&mut self, url: &str) -> SelectionChange {
        self.toggle(url)
    }

    /// Finishes with the current selection and clears it.
    pub fn finish(&mut self) -> Delivery<PickerResults> {
        let urls = core::mem::take(&mut self.urls);
        self.long_selection = false;
        adebug!(count = urls.len(), "selection finished");
        Delivery::new(PickerResults {
            urls,
            status: Status::Success,
        })
    }

    /// Discards the selection and reports a back press.
    pub fn back_pressed(&mut self) -> Delivery<PickerResults> {
        self.urls.clear();
        self.long_selection = false;
        Delivery::new(PickerResults {
            urls: Vec::new(),
            status: Status::BackPressed,
        })
    }
}
