// Key debouncing for the table screen
//
// Most terminals never report key releases, and a held key arrives as a
// stream of presses. Each key is classified by what it does to the table:
// - Once: toggles and actions (sort, activate, theme, copy, quit) fire once
//   per physical press; auto-repeat is swallowed until the key goes quiet
// - Throttled: navigation (paging, scrolling, page-size stepping) keeps
//   firing while held, at most once per interval
//
// Unclassified keys always fire. Characters typed into a filter or the
// page-jump input never reach this handler, so "55" is two fives.
//
// When the terminal supports keyboard enhancement, real Repeat and Release
// events arrive and are used directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A held Once key must go quiet this long before it fires again
const ONCE_GAP: Duration = Duration::from_millis(150);

/// Row scrolling and page-size stepping
const STEP_INTERVAL: Duration = Duration::from_millis(60);

/// Previous/next page
const PAGE_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Fire on the first press only
    Once,
    /// Fire repeatedly while held, no faster than `interval`
    Throttled { interval: Duration },
}

#[derive(Debug, Default)]
pub struct InputHandler {
    classes: HashMap<KeyCode, KeyClass>,
    /// Last event of any kind per key, for spotting auto-repeat
    last_seen: HashMap<KeyCode, Instant>,
    /// Last time a throttled key fired
    last_fired: HashMap<KeyCode, Instant>,
}

impl InputHandler {
    /// Handler with no classified keys; everything fires
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, keys: &[KeyCode], class: KeyClass) {
        for &key in keys {
            self.classes.insert(key, class);
        }
    }

    /// Whether a key event should trigger its action now
    pub fn accept(&mut self, key: &KeyEvent) -> bool {
        self.accept_at(key.code, key.kind, Instant::now())
    }

    pub fn accept_at(&mut self, code: KeyCode, kind: KeyEventKind, now: Instant) -> bool {
        if kind == KeyEventKind::Release {
            self.release(code);
            return false;
        }
        let Some(class) = self.classes.get(&code).copied() else {
            return true;
        };
        let previous = self.last_seen.insert(code, now);

        match class {
            KeyClass::Once => {
                kind == KeyEventKind::Press
                    && previous.map_or(true, |seen| now.duration_since(seen) >= ONCE_GAP)
            }
            KeyClass::Throttled { interval } => {
                let due = self
                    .last_fired
                    .get(&code)
                    .map_or(true, |&fired| now.duration_since(fired) >= interval);
                if due {
                    self.last_fired.insert(code, now);
                }
                due
            }
        }
    }

    /// Forget a key so its next press fires immediately
    pub fn release(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
        self.last_fired.remove(&code);
    }

    /// Key classes for the table screen
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Scroll rows, step the page-size select
        handler.classify(
            &[KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right],
            KeyClass::Throttled {
                interval: STEP_INTERVAL,
            },
        );

        handler.classify(
            &[KeyCode::PageUp, KeyCode::PageDown],
            KeyClass::Throttled {
                interval: PAGE_INTERVAL,
            },
        );

        handler.classify(
            &[
                // First/last page
                KeyCode::Home,
                KeyCode::End,
                // Activation and focus
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Char(' '),
                // Clear filters, theme, copy, quit
                KeyCode::Char('c'),
                KeyCode::Char('t'),
                KeyCode::Char('y'),
                KeyCode::Char('Y'),
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
            ],
            KeyClass::Once,
        );

        handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn held_once_key_fires_once() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        // Legacy terminals: auto-repeat looks like more presses
        assert!(handler.accept_at(KeyCode::Enter, KeyEventKind::Press, t0));
        assert!(!handler.accept_at(KeyCode::Enter, KeyEventKind::Press, ms(t0, 30)));
        assert!(!handler.accept_at(KeyCode::Enter, KeyEventKind::Press, ms(t0, 60)));
        assert!(!handler.accept_at(KeyCode::Enter, KeyEventKind::Press, ms(t0, 200)));

        // Quiet long enough: a new physical press
        assert!(handler.accept_at(KeyCode::Enter, KeyEventKind::Press, ms(t0, 400)));
    }

    #[test]
    fn repeat_events_never_fire_once_keys() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.accept_at(KeyCode::Char('t'), KeyEventKind::Press, t0));
        assert!(!handler.accept_at(KeyCode::Char('t'), KeyEventKind::Repeat, ms(t0, 500)));
    }

    #[test]
    fn release_rearms_immediately() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.accept_at(KeyCode::Tab, KeyEventKind::Press, t0));
        assert!(!handler.accept_at(KeyCode::Tab, KeyEventKind::Release, ms(t0, 10)));
        assert!(handler.accept_at(KeyCode::Tab, KeyEventKind::Press, ms(t0, 20)));
    }

    #[test]
    fn throttled_keys_repeat_at_their_interval() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.accept_at(KeyCode::Down, KeyEventKind::Press, t0));
        assert!(!handler.accept_at(KeyCode::Down, KeyEventKind::Press, ms(t0, 30)));
        assert!(handler.accept_at(KeyCode::Down, KeyEventKind::Repeat, ms(t0, 60)));

        assert!(handler.accept_at(KeyCode::PageDown, KeyEventKind::Press, t0));
        assert!(!handler.accept_at(KeyCode::PageDown, KeyEventKind::Press, ms(t0, 60)));
        assert!(handler.accept_at(KeyCode::PageDown, KeyEventKind::Press, ms(t0, 120)));
    }

    #[test]
    fn unclassified_keys_always_fire() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.accept_at(KeyCode::Char('x'), KeyEventKind::Press, t0));
        assert!(handler.accept_at(KeyCode::Char('x'), KeyEventKind::Press, t0));
        assert!(!handler.accept_at(KeyCode::Char('x'), KeyEventKind::Release, t0));
    }
}
