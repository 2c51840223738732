//! Player input state

/// Movement keys held during the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1, 0 or 1 depending on which directions are held
    pub fn horizontal(&self) -> i32 {
        self.right as i32 - self.left as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_new() {
        let input = InputState::new();
        assert!(!input.left && !input.right && !input.jump);
        assert_eq!(input.horizontal(), 0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = InputState {
            left: true,
            right: true,
            jump: false,
        };
        assert_eq!(input.horizontal(), 0);
        let input = InputState {
            left: true,
            ..Default::default()
        };
        assert_eq!(input.horizontal(), -1);
    }
}
