//! Page counts, the sliding window of page buttons, and page-size choices.

use crate::error::{Result, ViewerError};
use crate::github::DEFAULT_PER_PAGE;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Number of page buttons shown between the previous/next controls.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Choices offered by the page-size dropdown.
pub const PAGE_SIZE_CHOICES: [u32; 5] = [10, 20, 30, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(size: u32) -> Result<Self> {
        if PAGE_SIZE_CHOICES.contains(&size) {
            Ok(PageSize(size))
        } else {
            Err(ViewerError::ValidationError(format!(
                "Page size must be one of {:?}, got {}",
                PAGE_SIZE_CHOICES, size
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn choices() -> impl Iterator<Item = PageSize> {
        PAGE_SIZE_CHOICES.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PER_PAGE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        let size = s
            .trim()
            .parse::<u32>()
            .map_err(|e| ViewerError::ValidationError(format!("Invalid page size '{}': {}", s, e)))?;
        PageSize::new(size)
    }
}

/// `ceil(total_items / page_size)`; zero when there is nothing to page.
pub fn total_pages(total_items: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Contiguous run of page numbers to show around `current_page`.
///
/// Empty when `total_pages` is zero, otherwise `min(MAX_PAGE_BUTTONS, total_pages)` long.
pub fn page_window(total_pages: u32, current_page: u32) -> RangeInclusive<u32> {
    let half = MAX_PAGE_BUTTONS / 2;

    let mut start_page = current_page.saturating_sub(half).max(1);
    let end_page = total_pages.min(start_page + MAX_PAGE_BUTTONS - 1);

    if total_pages - end_page < half {
        start_page = (end_page + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
    }

    start_page..=end_page
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Page,
    Next,
}

/// One clickable entry of the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    /// Page requested when activated. Previous/next are not clamped here.
    pub target: u32,
    pub active: bool,
}

impl PageControl {
    pub fn label(&self) -> String {
        match self.kind {
            ControlKind::Previous => "<<".to_string(),
            ControlKind::Next => ">>".to_string(),
            ControlKind::Page => self.target.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationStrip {
    pub total_pages: u32,
    pub current_page: u32,
    pub controls: Vec<PageControl>,
}

impl PaginationStrip {
    pub fn build(total_items: u32, page_size: u32, current_page: u32) -> Self {
        let total_pages = total_pages(total_items, page_size);
        let control = |kind, target: u32| PageControl {
            kind,
            target,
            active: target == current_page,
        };

        let mut controls = Vec::with_capacity(MAX_PAGE_BUTTONS as usize + 2);
        controls.push(control(ControlKind::Previous, current_page.saturating_sub(1)));
        controls.extend(page_window(total_pages, current_page).map(|page| control(ControlKind::Page, page)));
        controls.push(control(ControlKind::Next, current_page + 1));

        PaginationStrip {
            total_pages,
            current_page,
            controls,
        }
    }

    /// The numbered controls, without previous/next.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.controls
            .iter()
            .filter(|c| c.kind == ControlKind::Page)
            .map(|c| c.target)
            .collect()
    }

    pub fn active_page(&self) -> Option<u32> {
        self.controls
            .iter()
            .find(|c| c.active && c.kind == ControlKind::Page)
            .map(|c| c.target)
    }
}
