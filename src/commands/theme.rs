//! Toggle the display theme.
//!
//! Presentation only: the theme changes how tables are drawn, never what
//! they contain.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut config = Config::read()?;
    config.theme = config.theme.toggled();
    config.save()?;

    msg_success!(Message::ThemeChanged(config.theme.name().to_string()));
    Ok(())
}
