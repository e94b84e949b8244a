//! Hotkey configuration management.
//!
//! This module defines the dashboard's hotkey actions, the key combinations
//! bound to them and how both are stored in the configuration file.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    FocusNext,
    FocusPrev,
    ToggleWidget,
    ToggleLoading,
    ToggleLog,
    Quit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Return an unmodified key.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Maps hotkey actions to their key bindings.
///
pub type HotkeyMap = HashMap<HotkeyAction, Hotkey>;

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char,
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Returns the default hotkey mappings.
///
pub fn default_hotkeys() -> HotkeyMap {
    let mut hotkeys = HashMap::new();
    hotkeys.insert(HotkeyAction::FocusNext, Hotkey::plain(KeyCode::Char('j')));
    hotkeys.insert(HotkeyAction::FocusPrev, Hotkey::plain(KeyCode::Char('k')));
    hotkeys.insert(HotkeyAction::ToggleWidget, Hotkey::plain(KeyCode::Enter));
    hotkeys.insert(HotkeyAction::ToggleLoading, Hotkey::plain(KeyCode::Char('r')));
    hotkeys.insert(HotkeyAction::ToggleLog, Hotkey::plain(KeyCode::Char('g')));
    hotkeys.insert(HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q')));
    hotkeys
}

/// Returns the default mappings with the given overrides applied on top.
///
pub fn merge_hotkeys(overrides: &HotkeyMap) -> HotkeyMap {
    let mut hotkeys = default_hotkeys();
    hotkeys.extend(overrides.iter().map(|(action, hotkey)| (*action, hotkey.clone())));
    hotkeys
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action bound to a KeyEvent.
///
pub fn get_action_for_event(event: &KeyEvent, hotkeys: &HotkeyMap) -> Option<HotkeyAction> {
    hotkeys
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HotkeyMap,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        let Some(hotkey) = hotkeys.get(action) else {
            continue;
        };
        match paired_action.and_then(|paired| hotkeys.get(&paired)) {
            Some(paired_hotkey) => parts.push(format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            )),
            None => parts.push(format!(
                " {}: {}",
                format_hotkey_display(hotkey),
                description
            )),
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        assert!(matches_hotkey(
            &press(KeyCode::Char('j'), KeyModifiers::empty()),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &press(KeyCode::Char('k'), KeyModifiers::empty()),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &press(KeyCode::Char('j'), KeyModifiers::CONTROL),
            &hotkey
        ));
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let action = get_action_for_event(&press(KeyCode::Enter, KeyModifiers::empty()), &hotkeys);
        assert_eq!(action, Some(HotkeyAction::ToggleWidget));

        let action = get_action_for_event(&press(KeyCode::Char('x'), KeyModifiers::empty()), &hotkeys);
        assert_eq!(action, None);
    }

    #[test]
    fn test_default_hotkeys_cover_every_action() {
        let hotkeys = default_hotkeys();
        for action in [
            HotkeyAction::FocusNext,
            HotkeyAction::FocusPrev,
            HotkeyAction::ToggleWidget,
            HotkeyAction::ToggleLoading,
            HotkeyAction::ToggleLog,
            HotkeyAction::Quit,
        ] {
            assert!(hotkeys.contains_key(&action), "missing {:?}", action);
        }
    }

    #[test]
    fn test_merge_hotkeys_overrides_single_action() {
        let mut overrides = HashMap::new();
        overrides.insert(HotkeyAction::ToggleWidget, Hotkey::plain(KeyCode::Char(' ')));
        let hotkeys = merge_hotkeys(&overrides);
        assert_eq!(
            hotkeys.get(&HotkeyAction::ToggleWidget),
            Some(&Hotkey::plain(KeyCode::Char(' ')))
        );
        assert_eq!(
            hotkeys.get(&HotkeyAction::Quit),
            Some(&Hotkey::plain(KeyCode::Char('q')))
        );
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::plain(KeyCode::Char('j'));
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("j"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);

        let hotkey = Hotkey {
            code: KeyCode::Down,
            modifiers: KeyModifiers::CONTROL,
        };
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);
    }

    #[test]
    fn test_char_hotkey_requires_char_field() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Char(' '))), "Space");
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Enter)), "Enter");
        let hotkey = Hotkey {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        };
        assert_eq!(format_hotkey_display(&hotkey), "Ctrl+Shift+c");
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys,
            &[
                (HotkeyAction::FocusNext, "focus", Some(HotkeyAction::FocusPrev)),
                (HotkeyAction::Quit, "quit", None),
            ],
        );
        assert_eq!(text, " j/k: focus, q: quit");
    }
}
