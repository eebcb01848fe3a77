/// Checks a configuration value before it is used or persisted.
///
/// Errors are human-readable and end up in the startup failure message.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
