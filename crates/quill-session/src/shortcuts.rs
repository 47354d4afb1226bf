//! Keyboard shortcut resolution

use quill_core::CommandKind;

/// What a key chord asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Command(CommandKind),
    Undo,
    Redo,
}

/// A parsed key chord such as `Ctrl+Shift+Z`
///
/// Modifier order and case do not matter; `Cmd` and `Meta` are read as `Ctrl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: String,
}

impl Chord {
    pub fn parse(text: &str) -> Option<Self> {
        let mut chord = Chord {
            ctrl: false,
            shift: false,
            alt: false,
            key: String::new(),
        };

        for part in text.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "meta" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                "" => return None,
                _ if chord.key.is_empty() => chord.key = part.to_ascii_uppercase(),
                _ => return None,
            }
        }

        if chord.key.is_empty() {
            None
        } else {
            Some(chord)
        }
    }
}

/// Resolve a key chord to an action
pub fn resolve(text: &str) -> Option<ShortcutAction> {
    let chord = Chord::parse(text)?;

    if chord.ctrl && !chord.alt && chord.key == "Z" {
        return Some(if chord.shift {
            ShortcutAction::Redo
        } else {
            ShortcutAction::Undo
        });
    }
    if chord.ctrl && !chord.alt && !chord.shift && chord.key == "Y" {
        return Some(ShortcutAction::Redo);
    }

    CommandKind::ALL
        .into_iter()
        .find(|kind| {
            kind.shortcut()
                .and_then(Chord::parse)
                .is_some_and(|bound| bound == chord)
        })
        .map(ShortcutAction::Command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chord() {
        let chord = Chord::parse("shift + ctrl + x").unwrap();
        assert!(chord.ctrl && chord.shift && !chord.alt);
        assert_eq!(chord.key, "X");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Chord::parse("Ctrl+"), None);
        assert_eq!(Chord::parse("Ctrl+A+B"), None);
        assert_eq!(Chord::parse("Shift"), None);
    }

    #[test]
    fn test_undo_redo() {
        assert_eq!(resolve("Ctrl+Z"), Some(ShortcutAction::Undo));
        assert_eq!(resolve("Cmd+Shift+Z"), Some(ShortcutAction::Redo));
        assert_eq!(resolve("Ctrl+Y"), Some(ShortcutAction::Redo));
    }

    #[test]
    fn test_command_shortcuts() {
        assert_eq!(resolve("Ctrl+B"), Some(ShortcutAction::Command(CommandKind::Bold)));
        assert_eq!(resolve("ctrl+i"), Some(ShortcutAction::Command(CommandKind::Italic)));
        assert_eq!(
            resolve("Ctrl+Shift+X"),
            Some(ShortcutAction::Command(CommandKind::Strikethrough))
        );
        assert_eq!(
            resolve("Ctrl+K"),
            Some(ShortcutAction::Command(CommandKind::InsertLink))
        );
    }

    #[test]
    fn test_unbound() {
        assert_eq!(resolve("Ctrl+Q"), None);
        assert_eq!(resolve("B"), None);
        assert_eq!(resolve("Ctrl+Alt+B"), None);
    }
}
