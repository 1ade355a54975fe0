//! Controller settings adjustable with `set <name> <value>`.

use rookery_core::SymbolSet;

use crate::error::CliError;

/// Display knobs for the text interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Glyphs used when printing the board.
    pub symbols: SymbolSet,
    /// Print the moves that answer a check.
    pub hints: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            symbols: SymbolSet::Unicode,
            hints: true,
        }
    }
}

impl ControllerConfig {
    /// Change one setting by name. Names and values are case-insensitive.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), CliError> {
        let invalid = || CliError::InvalidSettingValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name.to_ascii_lowercase().as_str() {
            "symbols" => {
                self.symbols = match value.to_ascii_lowercase().as_str() {
                    "unicode" => SymbolSet::Unicode,
                    "ascii" => SymbolSet::Ascii,
                    _ => return Err(invalid()),
                };
            }
            "hints" => {
                self.hints = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(CliError::UnknownSetting {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}
