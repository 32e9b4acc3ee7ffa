//! Controller input - three action buttons and four directions
//!
//! An `InputState` is one frame's worth of requested input for one side.
//! Input producers (agents, keyboards) write it and the simulation loop
//! reads it every frame. Any combination of flags is legal, including
//! opposing directions held together.

use serde::{Deserialize, Serialize};

/// One of the seven controller buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    C,
    Up,
    Right,
    Down,
    Left,
}

impl Button {
    /// All buttons in canonical order (actions first, then clockwise directions)
    pub const ALL: [Button; 7] = [
        Button::A,
        Button::B,
        Button::C,
        Button::Up,
        Button::Right,
        Button::Down,
        Button::Left,
    ];
}

/// Press/release state of the seven buttons for a single frame
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct InputState {
    /// "A" action button
    pub a: bool,
    /// "B" action button
    pub b: bool,
    /// "C" action button
    pub c: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl InputState {
    /// Input with every button released
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent copy of `other` as it is right now
    pub fn copy_of(other: &InputState) -> Self {
        *other
    }

    /// Release every button
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether `button` is held
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::C => self.c,
            Button::Up => self.up,
            Button::Right => self.right,
            Button::Down => self.down,
            Button::Left => self.left,
        }
    }

    /// Set the state of a single button
    pub fn set(&mut self, button: Button, pressed: bool) {
        let flag = match button {
            Button::A => &mut self.a,
            Button::B => &mut self.b,
            Button::C => &mut self.c,
            Button::Up => &mut self.up,
            Button::Right => &mut self.right,
            Button::Down => &mut self.down,
            Button::Left => &mut self.left,
        };
        *flag = pressed;
    }

    pub fn press(&mut self, button: Button) {
        self.set(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.set(button, false);
    }

    /// Held buttons in `Button::ALL` order
    pub fn pressed(&self) -> Vec<Button> {
        Button::ALL
            .into_iter()
            .filter(|&button| self.is_pressed(button))
            .collect()
    }

    /// True when no button is held
    pub fn is_neutral(&self) -> bool {
        Button::ALL.iter().all(|&button| !self.is_pressed(button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pressed() -> InputState {
        InputState {
            a: true,
            b: true,
            c: true,
            up: true,
            right: true,
            down: true,
            left: true,
        }
    }

    #[test]
    fn test_new_is_neutral() {
        let input = InputState::new();
        assert!(input.is_neutral());
        for button in Button::ALL {
            assert!(!input.is_pressed(button), "{:?} should be released", button);
        }
        assert!(InputState::default().is_neutral());
    }

    #[test]
    fn test_copy_of_matches_source() {
        let mut source = InputState::new();
        source.a = true;
        source.down = true;
        source.left = true;

        let copy = InputState::copy_of(&source);
        for button in Button::ALL {
            assert_eq!(copy.is_pressed(button), source.is_pressed(button));
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let mut source = InputState::new();
        source.b = true;

        let mut copy = InputState::copy_of(&source);
        copy.b = false;
        copy.up = true;
        assert!(source.b);
        assert!(!source.up);

        source.reset();
        assert!(copy.up);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = all_pressed();
        input.reset();
        assert!(input.is_neutral());
    }

    #[test]
    fn test_reset_idempotent() {
        let mut once = all_pressed();
        once.reset();
        let mut twice = all_pressed();
        twice.reset();
        twice.reset();
        assert_eq!(once.pressed(), twice.pressed());
        assert!(twice.is_neutral());
    }

    #[test]
    fn test_set_touches_only_one_button() {
        for button in Button::ALL {
            let mut input = InputState::new();
            input.press(button);
            assert_eq!(input.pressed(), vec![button]);
            input.release(button);
            assert!(input.is_neutral());
        }
    }

    #[test]
    fn test_opposing_directions_allowed() {
        let mut input = InputState::new();
        input.press(Button::Left);
        input.press(Button::Right);
        assert!(input.left && input.right);
        assert_eq!(input.pressed(), vec![Button::Right, Button::Left]);
    }
}
