use egui::{Key, KeyboardShortcut, Modifiers};

/// Every user-facing action. Menus and keyboard shortcuts both resolve to
/// one of these and go through [`crate::app::PixelPickerApp::perform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Open,
    Quit,
    ZoomIn,
    ZoomOut,
    PickPixel,
    ViewHelp,
    About,
}

/// Keyboard bindings, checked in order each frame.
const BINDINGS: &[(KeyboardShortcut, Action)] = &[
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::O), Action::Open),
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::Q), Action::Quit),
    (
        KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Plus),
        Action::ZoomIn,
    ),
    // Same physical key as Ctrl+Shift+Plus on layouts where '+' needs shift.
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::Equals), Action::ZoomIn),
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::Minus), Action::ZoomOut),
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::P), Action::PickPixel),
];

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open...",
            Self::Quit => "Quit",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::PickPixel => "Position & Color",
            Self::ViewHelp => "View Help",
            Self::About => "About",
        }
    }

    /// Primary shortcut shown next to the menu entry.
    pub fn shortcut(self) -> Option<KeyboardShortcut> {
        BINDINGS
            .iter()
            .find(|(_, action)| *action == self)
            .map(|(shortcut, _)| *shortcut)
    }
}

/// Consume at most one bound shortcut from this frame's input.
pub fn consume_shortcut(ctx: &egui::Context) -> Option<Action> {
    ctx.input_mut(|i| {
        BINDINGS
            .iter()
            .find(|(shortcut, _)| i.consume_shortcut(shortcut))
            .map(|(_, action)| *action)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_actions_have_bindings() {
        for action in [
            Action::Open,
            Action::Quit,
            Action::ZoomIn,
            Action::ZoomOut,
            Action::PickPixel,
        ] {
            assert!(action.shortcut().is_some(), "{action:?} has no shortcut");
        }
        assert!(Action::ViewHelp.shortcut().is_none());
        assert!(Action::About.shortcut().is_none());
    }

    #[test]
    fn test_zoom_in_primary_shortcut_is_shift_plus() {
        let shortcut = Action::ZoomIn.shortcut().unwrap();
        assert_eq!(shortcut.logical_key, Key::Plus);
        assert!(shortcut.modifiers.shift);
        assert!(shortcut.modifiers.command);
    }
}
