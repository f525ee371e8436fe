//! Trend browser state: the last collected list and the row cursor.

use crate::models::Trend;

use super::action::ActionTracker;

#[derive(Debug, Clone)]
pub struct TrendBrowserState {
    trends: Vec<Trend>,
    /// Set after the first successful collection; drives the `Found: N` label
    collected: bool,
    cursor: usize,
    pub collect: ActionTracker,
}

impl Default for TrendBrowserState {
    fn default() -> Self {
        Self {
            trends: Vec::new(),
            collected: false,
            cursor: 0,
            collect: ActionTracker::new("Trend collection"),
        }
    }
}

impl TrendBrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    pub fn has_collected(&self) -> bool {
        self.collected
    }

    /// Replace the list wholesale after a successful collection.
    pub fn replace(&mut self, trends: Vec<Trend>) {
        self.trends = trends;
        self.collected = true;
        self.cursor = self.cursor.min(self.trends.len().saturating_sub(1));
    }

    /// Label for the collect control; `None` before the first collection.
    pub fn found_label(&self) -> Option<String> {
        self.collected.then(|| format!("Found: {}", self.trends.len()))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_trend(&self) -> Option<&Trend> {
        self.trends.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.trends.len() {
            self.cursor += 1;
        }
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.trends.len() {
            self.cursor = index;
        }
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.trends.iter().position(|t| t.id == id)
    }
}
