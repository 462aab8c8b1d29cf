//! Interactive confirmation for destructive actions.
//!
//! Commands ask through the [`Confirmer`] trait instead of calling dialoguer
//! directly, so tests can answer prompts with a canned response the same way
//! [`MockNotifier`](crate::libs::notifier::MockNotifier) stands in for
//! notification delivery.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

pub trait Confirmer {
    /// Asks the user a yes/no question. Defaults to no.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal prompt backed by dialoguer.
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// Answers every prompt with a fixed response.
pub struct CannedConfirmer(pub bool);

impl Confirmer for CannedConfirmer {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}
