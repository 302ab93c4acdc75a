//! Tooltip affordance for overflowing cells.
//!
//! The machine has exactly two states: `Idle -> (pointer-enter | focus) ->
//! Showing -> (pointer-leave | blur | Escape) -> Idle`. Nothing persists
//! across renders except the phase itself.

/// A cell address: absolute row index and column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    #[default]
    Idle,
    Showing,
}

/// Shown when a tooltip cell holds non-text content and no explicit
/// override was supplied.
pub const TOOLTIP_PLACEHOLDER: &str = "Set a tooltip override for non-text content";

#[derive(Debug, Clone, Default)]
pub struct TooltipState {
    phase: TooltipPhase,
    anchor: Option<CellRef>,
    content: String,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    pub fn is_showing(&self) -> bool {
        self.phase == TooltipPhase::Showing
    }

    pub fn anchor(&self) -> Option<CellRef> {
        self.anchor
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn pointer_enter(&mut self, anchor: CellRef, content: String) {
        self.phase = TooltipPhase::Showing;
        self.anchor = Some(anchor);
        self.content = content;
    }

    /// Keyboard focus shows the tooltip the same way pointer entry does.
    pub fn focus(&mut self, anchor: CellRef, content: String) {
        self.pointer_enter(anchor, content);
    }

    pub fn pointer_leave(&mut self) {
        self.dismiss();
    }

    pub fn blur(&mut self) {
        self.dismiss();
    }

    pub fn escape(&mut self) {
        self.dismiss();
    }

    fn dismiss(&mut self) {
        self.phase = TooltipPhase::Idle;
        self.anchor = None;
        self.content.clear();
    }
}
