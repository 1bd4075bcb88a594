use std::time::Instant;

use crate::state::geometry::PixelPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub position: PixelPoint,
    pub button: PointerButton,
    pub at: Instant,
}

impl PointerInput {
    pub fn primary(position: PixelPoint, at: Instant) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            at,
        }
    }
}

/// Keys the page reacts to. Letters are stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Backspace,
    Delete,
    Enter,
    Escape,
    Other(String),
}

impl KeyCode {
    /// Parses a DOM-style key name such as `"ArrowLeft"`, `"Enter"` or `"K"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch.to_ascii_lowercase()),
                    _ => Self::Other(name.to_string()),
                }
            }
        }
    }

    /// Unit grid delta for movement keys (arrows and `h`/`j`/`k`/`l`).
    pub fn movement(&self) -> Option<(i64, i64)> {
        match self {
            Self::ArrowLeft | Self::Char('h') => Some((-1, 0)),
            Self::ArrowRight | Self::Char('l') => Some((1, 0)),
            Self::ArrowUp | Self::Char('k') => Some((0, -1)),
            Self::ArrowDown | Self::Char('j') => Some((0, 1)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyCode,
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
        }
    }

    pub fn named(name: &str) -> Self {
        Self::new(KeyCode::from_name(name))
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}
