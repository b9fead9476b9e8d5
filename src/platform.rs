//! Resolution of raw platform error codes to human-readable messages.

/// Looks up the message for a platform error code.
///
/// Resolution happens at render time, behind this trait, so tests can
/// substitute a deterministic table for the operating environment's.
pub trait MessageLookup {
    fn message(&self, code: i32) -> String;
}

/// Resolves codes through the operating system's error tables.
pub struct SystemLookup;

impl MessageLookup for SystemLookup {
    fn message(&self, code: i32) -> String {
        let text = std::io::Error::from_raw_os_error(code).to_string();
        // io::Error appends " (os error N)"; the resolved message should
        // read as prose, so keep only the text before it.
        match text.rfind(" (os error ") {
            Some(end) => text[..end].to_string(),
            None => text,
        }
    }
}
