//! Keyboard input translation.
//!
//! SDL events are reduced to [`SimpleKeyEvent`]s, which are then folded into a [`FrameInput`] snapshot: the set of
//! logical actions currently held plus the discrete commands raised this frame. The game core only ever sees the
//! snapshot and never touches key codes.

use std::collections::{HashMap, HashSet};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use smallvec::SmallVec;
use tracing::trace;

use crate::events::{GameCommand, HeldActions};

/// A keyboard or window event stripped down to what the bindings care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKeyEvent {
    KeyDown(Keycode),
    KeyUp(Keycode),
    Quit,
}

impl SimpleKeyEvent {
    /// Converts an SDL event, dropping key repeats and anything unrelated to input.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(SimpleKeyEvent::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => Some(SimpleKeyEvent::KeyDown(*key)),
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => Some(SimpleKeyEvent::KeyUp(*key)),
            _ => None,
        }
    }
}

/// The input state handed to the game for a single frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: HeldActions,
    /// Commands in the order their keys were pressed.
    pub commands: SmallVec<[GameCommand; 4]>,
}

impl FrameInput {
    pub fn held(held: HeldActions) -> Self {
        Self {
            held,
            commands: SmallVec::new(),
        }
    }

    pub fn command(command: GameCommand) -> Self {
        let mut commands = SmallVec::new();
        commands.push(command);
        Self {
            held: HeldActions::empty(),
            commands,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
    held_bindings: HashMap<Keycode, HeldActions>,
    pressed_keys: HashSet<Keycode>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Menu navigation
        key_bindings.insert(Keycode::Up, GameCommand::MenuUp);
        key_bindings.insert(Keycode::W, GameCommand::MenuUp);
        key_bindings.insert(Keycode::Down, GameCommand::MenuDown);
        key_bindings.insert(Keycode::S, GameCommand::MenuDown);
        key_bindings.insert(Keycode::Return, GameCommand::Confirm);
        key_bindings.insert(Keycode::KpEnter, GameCommand::Confirm);

        let mut held_bindings = HashMap::new();

        // Player movement
        held_bindings.insert(Keycode::Left, HeldActions::LEFT);
        held_bindings.insert(Keycode::A, HeldActions::LEFT);
        held_bindings.insert(Keycode::Right, HeldActions::RIGHT);
        held_bindings.insert(Keycode::D, HeldActions::RIGHT);
        held_bindings.insert(Keycode::Space, HeldActions::JUMP);
        held_bindings.insert(Keycode::Return, HeldActions::CONFIRM);
        held_bindings.insert(Keycode::KpEnter, HeldActions::CONFIRM);

        Self {
            key_bindings,
            held_bindings,
            pressed_keys: HashSet::new(),
        }
    }
}

impl Bindings {
    /// Returns the union of the actions bound to every key currently down.
    pub fn held(&self) -> HeldActions {
        self.pressed_keys
            .iter()
            .filter_map(|key| self.held_bindings.get(key))
            .fold(HeldActions::empty(), |acc, &actions| acc | actions)
    }

    /// Forgets every pressed key, e.g. when the window loses focus and key-up events will not arrive.
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }
}

/// Folds one frame's worth of events into the bindings and returns the resulting input snapshot.
pub fn process_simple_key_events(bindings: &mut Bindings, events: &[SimpleKeyEvent]) -> FrameInput {
    let mut commands = SmallVec::new();

    for event in events {
        match *event {
            SimpleKeyEvent::Quit => commands.push(GameCommand::Exit),
            SimpleKeyEvent::KeyDown(key) => {
                bindings.pressed_keys.insert(key);
                if let Some(&command) = bindings.key_bindings.get(&key) {
                    trace!(?key, ?command, "Key triggered command");
                    commands.push(command);
                }
            }
            SimpleKeyEvent::KeyUp(key) => {
                bindings.pressed_keys.remove(&key);
            }
        }
    }

    FrameInput {
        held: bindings.held(),
        commands,
    }
}
