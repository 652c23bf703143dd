//! State of the manga chapter reader. Pages are laid out vertically in one scroll container, the
//! functions here compute what the reader ui shows for a scroll position and which keys control
//! it.

use std::time::Duration;

/// Scroll distance (above the top) after which the keyboard hints are shown.
pub const KEYBOARD_HINTS_THRESHOLD: f64 = 100.0;
/// How long the keyboard hints stay visible.
pub const KEYBOARD_HINTS_DURATION: Duration = Duration::from_secs(5);
/// Fraction of the window height a space press scrolls.
pub const SPACE_SCROLL_FACTOR: f64 = 0.8;

/// Scroll metrics of the reader container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReaderViewport {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

/// Position of a page inside the reader container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageBox {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderProgress {
    /// The page in the middle of the viewport, starting at 1.
    pub page: usize,
    /// Number of pages, at least 1.
    pub total: usize,
    /// How far the chapter is scrolled, `0.0..=100.0`.
    pub percent: f64,
    pub show_keyboard_hints: bool,
}

/// Calculate the reading progress for `viewport`. `pages` must be ordered from top to bottom.
pub fn reader_progress(viewport: ReaderViewport, pages: &[PageBox]) -> ReaderProgress {
    let total = pages.len().max(1);
    let center = viewport.scroll_top + viewport.client_height / 2.0;

    let mut page = 1;
    for (i, page_box) in pages.iter().enumerate() {
        if center >= page_box.top && center <= page_box.top + page_box.height {
            page = i + 1;
            break;
        }
        if center >= page_box.top {
            page = i + 1
        }
    }

    let scrollable = viewport.scroll_height - viewport.client_height;
    let percent = if scrollable > 0.0 {
        (viewport.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    ReaderProgress {
        page: page.clamp(1, total),
        total,
        percent,
        show_keyboard_hints: viewport.scroll_top > KEYBOARD_HINTS_THRESHOLD,
    }
}

/// A key press inside the reader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyInput {
    /// The key value as the browser reports it, e.g. `" "` or `"m"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    /// A text input or textarea has the focus.
    pub in_text_input: bool,
    pub window_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReaderCommand {
    /// Scroll the reader container down by the given pixels.
    ScrollBy(f64),
    ToggleSidebar,
}

impl ReaderCommand {
    /// The command bound to `input`, if any.
    pub fn from_key(input: &KeyInput) -> Option<ReaderCommand> {
        if input.key == " " {
            return (!input.in_text_input)
                .then(|| ReaderCommand::ScrollBy(input.window_height * SPACE_SCROLL_FACTOR));
        }
        if (input.ctrl || input.meta) && input.key == "m" {
            return Some(ReaderCommand::ToggleSidebar);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: usize) -> Vec<PageBox> {
        (0..n)
            .map(|i| PageBox {
                top: i as f64 * 1000.0,
                height: 1000.0,
            })
            .collect()
    }

    fn viewport(scroll_top: f64) -> ReaderViewport {
        ReaderViewport {
            scroll_top,
            client_height: 800.0,
            scroll_height: 5000.0,
        }
    }

    #[test]
    fn page_at_center() {
        let progress = reader_progress(viewport(0.0), &pages(5));
        assert_eq!(progress.page, 1);
        assert_eq!(progress.total, 5);
        assert_eq!(progress.percent, 0.0);
        assert!(!progress.show_keyboard_hints);

        let progress = reader_progress(viewport(2100.0), &pages(5));
        assert_eq!(progress.page, 3);
        assert_eq!(progress.percent, 2100.0 / 4200.0 * 100.0);
        assert!(progress.show_keyboard_hints)
    }

    #[test]
    fn gap_between_pages() {
        let pages = [
            PageBox {
                top: 0.0,
                height: 100.0,
            },
            PageBox {
                top: 2000.0,
                height: 100.0,
            },
        ];
        let progress = reader_progress(viewport(600.0), &pages);
        assert_eq!(progress.page, 1);
        let progress = reader_progress(viewport(3000.0), &pages);
        assert_eq!(progress.page, 2)
    }

    #[test]
    fn without_pages() {
        let progress = reader_progress(
            ReaderViewport {
                scroll_top: 0.0,
                client_height: 800.0,
                scroll_height: 800.0,
            },
            &[],
        );
        assert_eq!(progress.page, 1);
        assert_eq!(progress.total, 1);
        assert_eq!(progress.percent, 0.0)
    }

    #[test]
    fn key_commands() {
        let space = KeyInput {
            key: " ".into(),
            window_height: 1000.0,
            ..Default::default()
        };
        assert_eq!(
            ReaderCommand::from_key(&space),
            Some(ReaderCommand::ScrollBy(800.0))
        );
        assert_eq!(
            ReaderCommand::from_key(&KeyInput {
                in_text_input: true,
                ..space
            }),
            None
        );

        let toggle = KeyInput {
            key: "m".into(),
            meta: true,
            ..Default::default()
        };
        assert_eq!(
            ReaderCommand::from_key(&toggle),
            Some(ReaderCommand::ToggleSidebar)
        );
        assert_eq!(
            ReaderCommand::from_key(&KeyInput {
                key: "m".into(),
                ..Default::default()
            }),
            None
        )
    }
}
