// A misconfigured plugin: its designated export is not command-shaped, so
// classifying it fails.
pub const ENTRY_POINT: &str = "not a command";
