use roster_core::{AppViewModel, ScrollSample};

/// Pixel geometry of the catalog list container, as a browser would report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    scroll_top: u32,
    client_height: u32,
    row_height: u32,
    loader_height: u32,
    content_height: u32,
}

impl Viewport {
    pub fn new(client_height: u32, row_height: u32, loader_height: u32) -> Self {
        Self {
            scroll_top: 0,
            client_height,
            row_height,
            loader_height,
            content_height: 0,
        }
    }

    /// Recompute content height from the rendered rows.
    pub fn update_content(&mut self, view: &AppViewModel) {
        let rows = u32::try_from(view.catalog.len()).unwrap_or(u32::MAX);
        let loader = if view.show_loader() {
            self.loader_height
        } else {
            0
        };
        self.content_height = rows.saturating_mul(self.row_height).saturating_add(loader);
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }

    pub fn scroll_height(&self) -> u32 {
        self.content_height.max(self.client_height)
    }

    pub fn scroll_by(&mut self, delta: u32) -> ScrollSample {
        self.scroll_top = self
            .scroll_top
            .saturating_add(delta)
            .min(self.max_scroll_top());
        self.sample()
    }

    pub fn scroll_up(&mut self, delta: u32) -> ScrollSample {
        self.scroll_top = self.scroll_top.saturating_sub(delta);
        self.sample()
    }

    pub fn scroll_to_bottom(&mut self) -> ScrollSample {
        self.scroll_top = self.max_scroll_top();
        self.sample()
    }

    pub fn sample(&self) -> ScrollSample {
        ScrollSample {
            scroll_top: self.scroll_top,
            client_height: self.client_height,
            scroll_height: self.scroll_height(),
            content_height: self.content_height,
        }
    }

    /// Index range of catalog rows at least partly visible.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        if self.row_height == 0 {
            return 0..0;
        }
        let first = self.scroll_top / self.row_height;
        let last = self
            .scroll_top
            .saturating_add(self.client_height)
            .div_ceil(self.row_height);
        first as usize..last as usize
    }

    fn max_scroll_top(&self) -> u32 {
        self.scroll_height() - self.client_height
    }
}
