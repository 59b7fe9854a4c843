//! UI state owned by the event loop
//!
//! All fields here are mutated only inside transition handling; dispatched
//! commands compute results and deliver them back as events, so no locking
//! is needed anywhere in the core.

use crate::model::{ContainerInspection, ContainerSummary, ResourceStats};

/// Which of the two views is active. Exactly one at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Detail,
}

/// Scrollable sub-region of the detail view.
///
/// `scroll` is clamped to `[0, max(0, content_height - height)]` on every
/// mutation; refreshing data must not reset it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
    pub scroll: usize,
    pub height: usize,
    pub content_height: usize,
}

impl Viewport {
    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    pub fn clamp(&mut self) {
        if self.scroll > self.max_scroll() {
            self.scroll = self.max_scroll();
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    /// Content height changes on every re-render; the offset survives but
    /// is pulled back into bounds.
    pub fn set_content_height(&mut self, content_height: usize) {
        self.content_height = content_height;
        self.clamp();
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
        self.content_height = 0;
    }

    /// Scroll position as a 0-100 percentage for the footer indicator.
    pub fn scroll_percent(&self) -> usize {
        let max = self.max_scroll();
        if max == 0 {
            100
        } else {
            self.scroll * 100 / max
        }
    }
}

/// Top of the minimal scroll window that keeps `cursor` visible within
/// `visible` rows.
pub fn scroll_window(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    if cursor >= visible {
        cursor - visible + 1
    } else {
        0
    }
}

/// The whole dashboard state.
#[derive(Debug, Default)]
pub struct App {
    pub view: ViewMode,
    pub containers: Vec<ContainerSummary>,
    pub cursor: usize,
    pub width: u16,
    pub height: u16,
    /// Last fetch error; suppresses normal rendering until the next
    /// successful fetch overwrites it.
    pub fault: Option<String>,
    pub inspection: Option<ContainerInspection>,
    pub stats: Option<ResourceStats>,
    pub viewport: Viewport,
    pub quit: bool,
}

impl App {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn selected(&self) -> Option<&ContainerSummary> {
        self.containers.get(self.cursor)
    }

    /// Keep the cursor inside `[0, len-1]` after any list mutation.
    pub fn clamp_cursor(&mut self) {
        if self.containers.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.containers.len() {
            self.cursor = self.containers.len() - 1;
        }
    }

    /// Tear down detail-view data on the way back to the list; it is
    /// refetched on the next entry, never cached across visits.
    pub fn leave_detail(&mut self) {
        self.view = ViewMode::List;
        self.inspection = None;
        self.stats = None;
        self.viewport.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContainerState;

    fn summary(id: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            name: id.to_string(),
            image: "busybox".to_string(),
            state: ContainerState::Running,
            status: "Up 2 minutes".to_string(),
            ports: vec![],
        }
    }

    #[test]
    fn test_cursor_clamps_after_shrink() {
        let mut app = App::new(80, 24);
        app.containers = vec![summary("a"), summary("b"), summary("c")];
        app.cursor = 2;

        app.containers = vec![summary("a")];
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_cursor_zero_when_empty() {
        let mut app = App::new(80, 24);
        app.cursor = 5;
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_viewport_clamp_bounds() {
        let mut vp = Viewport {
            scroll: 50,
            height: 10,
            content_height: 30,
        };
        vp.clamp();
        assert_eq!(vp.scroll, 20);

        vp.set_content_height(5);
        assert_eq!(vp.scroll, 0);
    }

    #[test]
    fn test_viewport_scroll_survives_refresh() {
        let mut vp = Viewport {
            scroll: 7,
            height: 10,
            content_height: 40,
        };
        // Refresh rebuilds content at the same height; offset stays put.
        vp.set_content_height(40);
        assert_eq!(vp.scroll, 7);
    }

    #[test]
    fn test_viewport_scroll_down_clamped() {
        let mut vp = Viewport {
            scroll: 0,
            height: 10,
            content_height: 12,
        };
        vp.scroll_down(100);
        assert_eq!(vp.scroll, 2);
        vp.scroll_up(100);
        assert_eq!(vp.scroll, 0);
    }

    #[test]
    fn test_scroll_window_follows_cursor() {
        // Cursor inside the window: no scroll.
        assert_eq!(scroll_window(3, 10), 0);
        // Cursor just past the window: scroll the minimum amount.
        assert_eq!(scroll_window(10, 10), 1);
        assert_eq!(scroll_window(14, 10), 5);
    }
}
