//! Confirmation port — a blocking yes/no question to the user.

/// Asks the user to confirm a destructive action.
pub trait Confirmation {
    /// Return `true` only when the user explicitly accepted `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmation for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
