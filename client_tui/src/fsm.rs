//! Game loop state machine
//!
//! The loop runs until the quit key is read or the process is asked to stop
//! by a signal. Both end in the same terminal state.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Quit,
    /// Termination signal (SIGTERM, SIGHUP, ...)
    Interrupt,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: LoopState,
    to_state: LoopState,
    action: LoopAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> LoopState {
        self.from_state
    }

    pub fn to_state(&self) -> LoopState {
        self.to_state
    }

    pub fn action(&self) -> LoopAction {
        self.action
    }
}

/// Loop finite state machine
#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
        }
    }

    /// Get current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Running, LoopAction::Quit | LoopAction::Interrupt) => {
                Some(LoopState::Terminated)
            }
            (LoopState::Terminated, _) => None,
        }
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}
