// src/chat/widget.rs
// Widget shell visibility state

use serde::Serialize;

/// Open/minimize state of the floating widget. Closing hides the widget but
/// keeps the conversation; any in-flight request is simply abandoned.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WidgetState {
    pub is_open: bool,
    pub is_minimized: bool,
}

impl WidgetState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.is_minimized = !self.is_minimized;
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            is_open: false,
            is_minimized: false,
        }
    }
}
