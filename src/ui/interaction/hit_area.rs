//! Hit area registry.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::Platform;
use crate::state::Feature;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Toggle selection of the trend with this id
    ToggleTrend(String),
    CollectTrends,
    ClearSelection,
    TogglePlatform(Platform),
    ToggleFeature(Feature),
    GenerateContent,
    PublishTelegram,
    RunAutomation,
    RefreshStats,
    DismissNotification,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Later registrations sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    /// Last known mouse position; survives `clear`
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. The pointer position is kept so the next
    /// render can restore the hover.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
        if let Some((x, y)) = self.pointer {
            if self.areas.last().is_some_and(|area| area.contains(x, y)) {
                self.hovered = Some(self.areas.len() - 1);
            }
        }
    }

    /// Returns the action for the topmost hit area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y)
            .and_then(|idx| self.areas.get(idx))
            .map(|area| area.action.clone())
    }

    /// Update the hover state. Returns true if it changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let hovered = self.find_index(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        self.hover_highlight()
            .filter(|(hovered, _)| *hovered == rect)
            .map(|(_, style)| style)
    }

    /// Rect and style to paint over the hovered area, if it has a style.
    pub fn hover_highlight(&self) -> Option<(Rect, Style)> {
        let area = self.areas.get(self.hovered?)?;
        area.hover_style.map(|style| (area.rect, style))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), ClickAction::CollectTrends, None);
        registry.register(Rect::new(2, 2, 3, 3), ClickAction::RefreshStats, None);

        assert_eq!(registry.hit_test(3, 3), Some(ClickAction::RefreshStats));
        assert_eq!(registry.hit_test(0, 0), Some(ClickAction::CollectTrends));
        assert_eq!(registry.hit_test(10, 10), None);
    }

    #[test]
    fn test_empty_rects_are_ignored() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 0, 1), ClickAction::CollectTrends, None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hover_tracking() {
        let mut registry = HitAreaRegistry::new();
        let rect = Rect::new(0, 0, 4, 1);
        let style = Style::default();
        registry.register(rect, ClickAction::GenerateContent, Some(style));

        assert!(registry.update_hover(1, 0));
        assert!(!registry.update_hover(2, 0));
        assert_eq!(registry.get_hover_style(rect), Some(style));
        assert!(registry.update_hover(9, 9));
        assert_eq!(registry.get_hover_style(rect), None);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hover_survives_rerender() {
        let mut registry = HitAreaRegistry::new();
        let rect = Rect::new(0, 0, 4, 1);
        let style = Style::default();
        registry.register(rect, ClickAction::GenerateContent, Some(style));
        registry.update_hover(1, 0);

        registry.clear();
        assert_eq!(registry.hover_highlight(), None);
        registry.register(rect, ClickAction::GenerateContent, Some(style));
        assert_eq!(registry.hover_highlight(), Some((rect, style)));
    }
}
