//! Screen regions and pointer hit testing.

/// Columns taken by the browser pane (including its `|` separator).
pub const SIDEBAR_WIDTH: u16 = 30;
/// Line-number gutter: five digits plus a space.
pub const GUTTER_WIDTH: u16 = 6;
/// Status bar plus message row.
pub const STATUS_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    /// Width of the browser pane; 0 when hidden.
    pub sidebar: u16,
    /// Rows available for document text (and the browser listing).
    pub text_rows: u16,
}

/// What a screen cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Browser listing row (0-based on screen, before list scrolling).
    Sidebar(u16),
    Gutter,
    /// Text area cell relative to the text origin.
    Text { x: u16, y: u16 },
    Bars,
}

impl Layout {
    pub fn compute(width: u16, height: u16, sidebar_visible: bool) -> Self {
        let sidebar = if sidebar_visible {
            SIDEBAR_WIDTH.min(width)
        } else {
            0
        };
        Self {
            width,
            height,
            sidebar,
            text_rows: height.saturating_sub(STATUS_HEIGHT),
        }
    }

    /// First screen column of the gutter.
    pub fn gutter_x(&self) -> u16 {
        self.sidebar
    }

    /// First screen column of document text.
    pub fn text_x(&self) -> u16 {
        self.sidebar.saturating_add(GUTTER_WIDTH).min(self.width)
    }

    pub fn text_width(&self) -> u16 {
        self.width.saturating_sub(self.text_x())
    }

    pub fn status_row(&self) -> u16 {
        self.text_rows
    }

    pub fn message_row(&self) -> u16 {
        self.text_rows.saturating_add(1)
    }

    pub fn hit(&self, x: u16, y: u16) -> HitTarget {
        if y >= self.text_rows {
            return HitTarget::Bars;
        }
        if x < self.sidebar {
            return HitTarget::Sidebar(y);
        }
        if x < self.text_x() {
            return HitTarget::Gutter;
        }
        HitTarget::Text {
            x: x - self.text_x(),
            y,
        }
    }
}
