//! Vertical scroll state for the virtualized body.
//!
//! The widget owns the state; callers queue requests which are consumed on
//! the next build cycle.

/// Actions that can be requested on scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Scroll by relative rows (positive = down).
    Delta(i16),
    /// Scroll to absolute offset.
    ToOffset(u16),
    /// Scroll to make the row at this index visible.
    IntoView(usize),
    PageUp,
    PageDown,
    Home,
    End,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Rows scrolled past the top of the body viewport.
    pub offset: u16,
    /// Body viewport height, fed back from the last render.
    pub viewport: u16,
    /// Total content height in rows.
    pub content_height: u16,
    request: Option<ScrollRequest>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport)
    }

    pub fn can_scroll(&self) -> bool {
        self.content_height > self.viewport
    }

    /// Scroll progress, 0.0 at the top and 1.0 at the bottom.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max == 0 {
            0.0
        } else {
            self.offset as f32 / max as f32
        }
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.request = Some(ScrollRequest::Delta(delta));
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.request = Some(ScrollRequest::ToOffset(offset));
    }

    pub fn scroll_into_view(&mut self, index: usize) {
        self.request = Some(ScrollRequest::IntoView(index));
    }

    pub fn page_up(&mut self) {
        self.request = Some(ScrollRequest::PageUp);
    }

    pub fn page_down(&mut self) {
        self.request = Some(ScrollRequest::PageDown);
    }

    pub fn home(&mut self) {
        self.request = Some(ScrollRequest::Home);
    }

    pub fn end(&mut self) {
        self.request = Some(ScrollRequest::End);
    }

    pub fn set_viewport(&mut self, height: u16) {
        self.viewport = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_content_height(&mut self, height: u16) {
        self.content_height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Apply a request to the offset. `IntoView` needs row positions, so it
    /// is returned for the widget to handle.
    pub fn apply_request(&mut self, request: ScrollRequest) -> Option<ScrollRequest> {
        let max = self.max_offset();
        match request {
            ScrollRequest::Delta(d) => {
                self.offset = (self.offset as i32 + d as i32).clamp(0, max as i32) as u16;
                None
            }
            ScrollRequest::ToOffset(o) => {
                self.offset = o.min(max);
                None
            }
            ScrollRequest::PageUp => {
                self.offset = self.offset.saturating_sub(self.viewport);
                None
            }
            ScrollRequest::PageDown => {
                self.offset = (self.offset + self.viewport).min(max);
                None
            }
            ScrollRequest::Home => {
                self.offset = 0;
                None
            }
            ScrollRequest::End => {
                self.offset = max;
                None
            }
            ScrollRequest::IntoView(_) => Some(request),
        }
    }

    /// Take and apply any pending request.
    pub fn process_request(&mut self) -> Option<ScrollRequest> {
        self.request.take().and_then(|r| self.apply_request(r))
    }
}
