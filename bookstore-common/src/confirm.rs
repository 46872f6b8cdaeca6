/// Yes/no question put to the user before a destructive action
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
