//! Move script commands.

use std::str::FromStr;

use blockslide_core::Label;

/// One step of a move script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Command {
    /// `A:4` slides vehicle `A` so its first cell sits on slot 4.
    Slide { label: Label, lead_slot: u8 },
    /// `A~-120` drags vehicle `A` by -120 pixels along its line.
    Drag { label: Label, translation: f32 },
    /// `undo` reverts the last move.
    Undo,
    /// `reset` restores the initial layout.
    Reset,
}

/// Errors reported for malformed script commands.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CommandError {
    #[display("expected `undo`, `reset`, `<label>:<slot>` or `<label>~<pixels>`, got {input:?}")]
    Malformed { input: String },
    #[display("invalid vehicle label {input:?}")]
    InvalidLabel { input: String },
    #[display("invalid slot {input:?}")]
    InvalidSlot { input: String },
    #[display("invalid drag distance {input:?}")]
    InvalidDistance { input: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undo" => return Ok(Self::Undo),
            "reset" => return Ok(Self::Reset),
            _ => {}
        }

        let (label, sep, arg) = if let Some((label, slot)) = s.split_once(':') {
            (label, ':', slot)
        } else if let Some((label, pixels)) = s.split_once('~') {
            (label, '~', pixels)
        } else {
            return Err(CommandError::Malformed {
                input: s.to_owned(),
            });
        };

        let mut chars = label.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(c), None) => Label::new(c),
            _ => None,
        }
        .ok_or_else(|| CommandError::InvalidLabel {
            input: label.to_owned(),
        })?;

        if sep == ':' {
            let lead_slot = arg.parse().map_err(|_| CommandError::InvalidSlot {
                input: arg.to_owned(),
            })?;
            Ok(Self::Slide { label, lead_slot })
        } else {
            let translation = arg
                .parse::<f32>()
                .ok()
                .filter(|t| t.is_finite())
                .ok_or_else(|| CommandError::InvalidDistance {
                    input: arg.to_owned(),
                })?;
            Ok(Self::Drag { label, translation })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(c: char) -> Label {
        Label::new(c).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("undo".parse::<Command>(), Ok(Command::Undo));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!(
            "A:4".parse::<Command>(),
            Ok(Command::Slide {
                label: label('A'),
                lead_slot: 4
            })
        );
        assert_eq!(
            "L~-150".parse::<Command>(),
            Ok(Command::Drag {
                label: label('L'),
                translation: -150.0
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(CommandError::Malformed { .. })
        ));
        assert!(matches!(
            "AB:1".parse::<Command>(),
            Err(CommandError::InvalidLabel { .. })
        ));
        assert!(matches!(
            ":1".parse::<Command>(),
            Err(CommandError::InvalidLabel { .. })
        ));
        assert!(matches!(
            "A:-1".parse::<Command>(),
            Err(CommandError::InvalidSlot { .. })
        ));
        assert!(matches!(
            "A~inf".parse::<Command>(),
            Err(CommandError::InvalidDistance { .. })
        ));
    }
}
