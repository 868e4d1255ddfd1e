//! Onboarding carousel state.

use std::time::Duration;

use crate::view::PageView;

pub const ONBOARD_DOTS: &str = "onboard_dots";

/// Delay between automatic slide changes.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(4);

const ACTIVE_DOT: &str = "bg-[#196561]";
const INACTIVE_DOT: &str = "bg-gray-300";

/// Index-based carousel over `len` slides, starting at slide 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
}

impl Slideshow {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jumps to slide `i` (a dot click). Out-of-range indices are ignored.
    pub fn show(&mut self, i: usize) {
        if i < self.len {
            self.index = i;
        }
    }

    /// Moves to the next slide, wrapping after the last.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    #[must_use]
    pub fn is_active(&self, i: usize) -> bool {
        self.len > 0 && i == self.index
    }

    /// CSS opacity of slide `i`.
    #[must_use]
    pub fn opacity(&self, i: usize) -> &'static str {
        if self.is_active(i) {
            "1"
        } else {
            "0"
        }
    }

    /// Background class of dot `i`.
    #[must_use]
    pub fn dot_class(&self, i: usize) -> &'static str {
        if self.is_active(i) {
            ACTIVE_DOT
        } else {
            INACTIVE_DOT
        }
    }
}

impl Slideshow {
    /// Slide visibility and dot markup for the current index.
    #[must_use]
    pub fn render(&self) -> PageView {
        let mut view = PageView::new();
        for i in 0..self.len {
            view.set(&format!("onboardSlide_{i}"), format!("opacity: {}", self.opacity(i)));
        }
        let dots: String = (0..self.len)
            .map(|i| {
                format!(
                    r#"<button class="dot w-3 h-3 rounded-full {}" data-slide="{i}"></button>"#,
                    self.dot_class(i)
                )
            })
            .collect();
        view.set(ONBOARD_DOTS, dots);
        view
    }
}
