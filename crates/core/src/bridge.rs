//! Boundary between the engine and whatever draws the cards.

use crate::{Card, CardId, CardKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TextField {
    Round,
    Map,
    Pick,
    Modifiers,
    Challenges,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Button {
    NormalRun,
    HardRun,
    Advance,
    NewRun,
}

/// What the host should call when an enabled button is pressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HostAction {
    StartNormalRun,
    StartHardRun,
    Continue,
    NextRound,
    NewRun,
}

impl HostAction {
    pub fn label(self) -> &'static str {
        match self {
            HostAction::StartNormalRun => "Normal run",
            HostAction::StartHardRun => "Hard run",
            HostAction::Continue => "Continue",
            HostAction::NextRound => "Next round",
            HostAction::NewRun => "New run",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardBack {
    Silver,
    Challenge,
    Golden,
}

impl From<CardKind> for CardBack {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Challenge => CardBack::Challenge,
            CardKind::Golden => CardBack::Golden,
            CardKind::Basic | CardKind::Stackable => CardBack::Silver,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Appearance {
    Face,
    Back(CardBack),
}

pub trait DisplayBridge {
    fn reveal_slot(&mut self, index: usize, card: &Card, appearance: Appearance);
    fn conceal_slot(&mut self, index: usize);
    fn set_text(&mut self, field: TextField, content: &str);
    fn set_color(&mut self, field: TextField, color: &str);
    fn set_button(&mut self, button: Button, enabled: bool, action: Option<HostAction>);
}

/// Discards every call. Handy for simulations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBridge;

impl DisplayBridge for NullBridge {
    fn reveal_slot(&mut self, _index: usize, _card: &Card, _appearance: Appearance) {}
    fn conceal_slot(&mut self, _index: usize) {}
    fn set_text(&mut self, _field: TextField, _content: &str) {}
    fn set_color(&mut self, _field: TextField, _color: &str) {}
    fn set_button(&mut self, _button: Button, _enabled: bool, _action: Option<HostAction>) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Reveal {
        index: usize,
        card: CardId,
        appearance: Appearance,
    },
    Conceal {
        index: usize,
    },
    Text {
        field: TextField,
        content: String,
    },
    Color {
        field: TextField,
        color: String,
    },
    Button {
        button: Button,
        enabled: bool,
        action: Option<HostAction>,
    },
}

/// Keeps every call in order, plus the latest value per text field and button.
#[derive(Debug, Default, Clone)]
pub struct RecordingBridge {
    pub calls: Vec<DisplayCall>,
}

impl RecordingBridge {
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Text { field: f, content } if *f == field => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn button(&self, button: Button) -> Option<(bool, Option<HostAction>)> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Button {
                button: b,
                enabled,
                action,
            } if *b == button => Some((*enabled, *action)),
            _ => None,
        })
    }

    /// Latest appearance of `index`, or `None` when it was last concealed.
    pub fn slot(&self, index: usize) -> Option<(CardId, Appearance)> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Reveal {
                index: i,
                card,
                appearance,
            } if *i == index => Some(Some((*card, *appearance))),
            DisplayCall::Conceal { index: i } if *i == index => Some(None),
            _ => None,
        })?
    }
}

impl DisplayBridge for RecordingBridge {
    fn reveal_slot(&mut self, index: usize, card: &Card, appearance: Appearance) {
        self.calls.push(DisplayCall::Reveal {
            index,
            card: card.id,
            appearance,
        });
    }

    fn conceal_slot(&mut self, index: usize) {
        self.calls.push(DisplayCall::Conceal { index });
    }

    fn set_text(&mut self, field: TextField, content: &str) {
        self.calls.push(DisplayCall::Text {
            field,
            content: content.to_string(),
        });
    }

    fn set_color(&mut self, field: TextField, color: &str) {
        self.calls.push(DisplayCall::Color {
            field,
            color: color.to_string(),
        });
    }

    fn set_button(&mut self, button: Button, enabled: bool, action: Option<HostAction>) {
        self.calls.push(DisplayCall::Button {
            button,
            enabled,
            action,
        });
    }
}
