/// Anything with a display name: patients and doctors alike.
pub trait Person {
    fn name(&self) -> &str;

    /// Render the person for display.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}
