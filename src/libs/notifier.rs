//! Notification delivery for reminders.
//!
//! The scheduler talks to a [`Notifier`] trait so the delivery mechanism can
//! be swapped: the terminal notifier used by the `remind` command, the
//! recording mock used by tests, or a desktop-notification backend later.

use anyhow::Result;
use std::io::IsTerminal;
use std::sync::{Arc, Mutex};

/// Fixed summary line of every reminder notification.
pub const REMINDER_SUMMARY: &str = "⏰ Study Reminder";

pub trait Notifier: Send + Sync {
    /// Whether notifications can be delivered at all. Unavailable notifiers
    /// cause reminders to be silently skipped, both at schedule time and
    /// again at fire time.
    fn is_available(&self) -> bool;

    fn notify(&self, summary: &str, body: &str) -> Result<()>;
}

/// Prints reminders to the terminal, with a bell to draw attention.
///
/// Available only when stdout is attached to a terminal; a redirected or
/// detached stdout has nobody watching it.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn is_available(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    fn notify(&self, summary: &str, body: &str) -> Result<()> {
        println!("\x07{}: {}", summary, body);
        Ok(())
    }
}

/// Records notifications instead of delivering them.
#[derive(Clone, Default)]
pub struct MockNotifier {
    pub available: bool,
    notified: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockNotifier {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            notified: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn notified(&self) -> Vec<(String, String)> {
        self.notified.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn is_available(&self) -> bool {
        self.available
    }

    fn notify(&self, summary: &str, body: &str) -> Result<()> {
        self.notified.lock().unwrap().push((summary.to_string(), body.to_string()));
        Ok(())
    }
}
