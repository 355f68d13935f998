//! Navigation capability
//!
//! Views never reach for global routing state. Whatever needs to read the
//! location or move it is handed a `Navigator`.

use tracing::debug;

pub trait Navigator {
    fn current_path(&self) -> &str;

    /// Add a history entry
    fn push(&mut self, path: &str);

    /// Replace the current history entry. Redirecting to the path that is
    /// already current does nothing.
    fn redirect(&mut self, path: &str);
}

/// In-memory history stack with browser-like back/forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryHistory {
    fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
        debug!(path, "Navigated");
    }

    fn redirect(&mut self, path: &str) {
        if self.current_path() == path {
            return;
        }
        debug!(from = %self.entries[self.index], to = path, "Redirected");
        self.entries[self.index] = path.to_string();
    }
}
