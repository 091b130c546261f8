/// What a view asks the shell to do once its work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Back,
    To(String),
}

/// Browser-style navigation history.
#[derive(Debug, Clone, Default)]
pub struct Location {
    history: Vec<String>,
}

impl Location {
    pub fn new() -> Self { Self::default() }

    pub fn go(&mut self, url: impl Into<String>) {
        self.history.push(url.into());
    }

    /// Step back one entry. At the first entry there is nowhere to go and the
    /// location stays put; returns the url now current when it moved.
    pub fn back(&mut self) -> Option<&str> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        self.path()
    }

    pub fn path(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.history.len() }

    pub fn is_empty(&self) -> bool { self.history.is_empty() }
}
