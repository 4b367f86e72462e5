use crate::config::PageConfig;
use crate::core::Dom;

/// The document plus the configuration every feature reads.
#[derive(Debug)]
pub struct Page<D: Dom> {
    pub dom: D,
    pub config: PageConfig,
}

impl<D: Dom> Page<D> {
    pub fn new(dom: D, config: PageConfig) -> Self {
        Self { dom, config }
    }
}
