//! State accessor and utility methods for the App.

use super::App;

impl App {
    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only spinners animate, so only redraw while busy.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// True while any action is waiting on the backend.
    pub fn is_busy(&self) -> bool {
        self.trends.collect.is_pending()
            || self.composer.generate.is_pending()
            || self.composer.publish.is_pending()
            || self.automation.is_pending()
            || self.summary.refresh.is_pending()
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        if (width, height) != (self.terminal_width, self.terminal_height) {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    /// Wait for the next async message and apply it.
    ///
    /// Returns `false` once the channel is closed or the receiver has been
    /// taken by the event loop.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }
}
