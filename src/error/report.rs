//! Cause-chain traversal and "caused by" rendering.

use std::error::Error;
use std::fmt::Display;

/// Iterator over an error and its transitive sources, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Multi-line rendering of an error and its cause chain.
///
/// ```text
/// failed to parse set expression
/// caused by: unexpected token at column 4
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a (dyn Error + 'static),
}

impl<'a> Report<'a> {
    pub fn new(error: &'a (dyn Error + 'static)) -> Self {
        Self { error }
    }
}

pub(crate) const CAUSED_BY: &str = "caused by: ";

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut links = Chain::new(self.error);
        if let Some(head) = links.next() {
            write!(f, "{}", head)?;
        }
        for cause in links {
            write!(f, "\n{}{}", CAUSED_BY, cause)?;
        }
        Ok(())
    }
}
