//! Prompter Port
//!
//! The yes/no confirmation gate in front of every destructive apply.
//! Implementations can be interactive (reading a line from the user) or
//! scripted (returning a fixed answer).

/// Trait for confirming a potentially destructive change.
///
/// Implementations can be:
/// - `LinePrompter`: Reads an answer from stdin
/// - `ScriptedPrompter`: Fixed answer, records every prompt
/// - `AssumeYes`: Always confirms (`--yes`)
pub trait Prompter {
    /// Ask a yes/no question. `false` covers "no", empty input and EOF.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Prompter that always confirms.
///
/// Use this when `--yes` flag is passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Prompter that always declines.
///
/// Use this when there is no terminal to ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Prompter for AssumeNo {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Whether a typed answer counts as "yes".
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_yes_always_confirms() {
        assert!(AssumeYes.confirm("Apply?"));
    }

    #[test]
    fn assume_no_always_declines() {
        assert!(!AssumeNo.confirm("Apply?"));
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", "yes", "YES", " yes \n", "\ty\r\n"] {
            assert!(is_affirmative(answer), "{answer:?} should be yes");
        }
    }

    #[test]
    fn everything_else_is_no() {
        for answer in ["", "\n", "n", "no", "yep", "sure", "y es"] {
            assert!(!is_affirmative(answer), "{answer:?} should be no");
        }
    }

    #[test]
    fn boxed_prompter_delegates() {
        let boxed: Box<dyn Prompter> = Box::new(AssumeYes);
        assert!(boxed.confirm("ok?"));
    }
}
