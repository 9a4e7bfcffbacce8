/// The three steps shared by every wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    /// Pick a template or a file
    #[default]
    Selection,
    /// Fill in details or trigger the operation
    Input,
    /// Preview or result summary
    Result,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Selection, WizardStep::Input, WizardStep::Result];

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Selection => Some(WizardStep::Input),
            WizardStep::Input => Some(WizardStep::Result),
            WizardStep::Result => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Selection => None,
            WizardStep::Input => Some(WizardStep::Selection),
            WizardStep::Result => Some(WizardStep::Input),
        }
    }
}

/// Preconditions a wizard's state exposes to its step controller.
pub trait StepGuard {
    /// A template was chosen or a file was selected.
    fn has_selection(&self) -> bool;
    /// The processing action reported completion.
    fn is_complete(&self) -> bool;
}

/// Holds which step is visible and gates forward navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepController {
    current: WizardStep,
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Whether `step` may be shown given the guard's state.
    ///
    /// Earlier steps are always enterable; later ones need every forward
    /// precondition up to them.
    pub fn can_enter(&self, step: WizardStep, guard: &impl StepGuard) -> bool {
        match step {
            WizardStep::Selection => true,
            WizardStep::Input => guard.has_selection(),
            WizardStep::Result => guard.has_selection() && guard.is_complete(),
        }
    }

    /// Move one step forward. Returns false (and stays put) when blocked.
    pub fn forward(&mut self, guard: &impl StepGuard) -> bool {
        match self.current.next() {
            Some(next) if self.can_enter(next, guard) => {
                self.current = next;
                true
            }
            _ => false,
        }
    }

    /// Move one step back. Never discards wizard data.
    pub fn back(&mut self) -> bool {
        match self.current.previous() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Jump straight to `step`, as a tab strip would.
    pub fn go_to(&mut self, step: WizardStep, guard: &impl StepGuard) -> bool {
        if step <= self.current || self.can_enter(step, guard) {
            self.current = step;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current = WizardStep::Selection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool, bool);

    impl StepGuard for Fixed {
        fn has_selection(&self) -> bool {
            self.0
        }
        fn is_complete(&self) -> bool {
            self.1
        }
    }

    #[test]
    fn test_back_from_first_step_is_noop() {
        let mut steps = StepController::new();
        assert!(!steps.back());
        assert_eq!(steps.current(), WizardStep::Selection);
    }

    #[test]
    fn test_go_to_earlier_step_ignores_guard() {
        let mut steps = StepController::new();
        assert!(steps.forward(&Fixed(true, true)));
        assert!(steps.forward(&Fixed(true, true)));
        assert!(steps.go_to(WizardStep::Selection, &Fixed(false, false)));
        assert_eq!(steps.current(), WizardStep::Selection);
    }

    #[test]
    fn test_forward_past_result_is_blocked() {
        let mut steps = StepController::new();
        let guard = Fixed(true, true);
        steps.go_to(WizardStep::Result, &guard);
        assert!(!steps.forward(&guard));
        assert_eq!(steps.current(), WizardStep::Result);
    }
}
