//! Clipboard with an in-process fallback
//!
//! The system clipboard is reached through `arboard` when the `runtime`
//! feature is on. The internal copy is always kept, so paste still works
//! when the system clipboard is missing (no display, headless tests).

/// Clipboard shared by copy and paste
#[derive(Debug, Default)]
pub struct Clipboard {
    internal: String,
    use_system: bool,
}

impl Clipboard {
    /// Clipboard that also writes to and reads from the system clipboard
    pub fn new() -> Self {
        Self {
            internal: String::new(),
            use_system: cfg!(feature = "runtime"),
        }
    }

    /// Clipboard that never touches the system clipboard
    pub fn internal_only() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, text: String) {
        if self.use_system {
            if let Err(e) = system::set_text(&text) {
                tracing::warn!("System clipboard unavailable, keeping copy in-process: {}", e);
            }
        }
        self.internal = text;
    }

    /// Text to paste: the system clipboard if it has text, else the internal copy
    pub fn paste(&self) -> Option<String> {
        if self.use_system {
            match system::get_text() {
                Ok(text) if !text.is_empty() => return Some(text),
                Ok(_) => {}
                Err(e) => tracing::warn!("Reading system clipboard failed: {}", e),
            }
        }
        (!self.internal.is_empty()).then(|| self.internal.clone())
    }

    pub fn get_internal(&self) -> &str {
        &self.internal
    }
}

#[cfg(feature = "runtime")]
mod system {
    // arboard::Clipboard is not kept around: it is not Send on every platform.
    pub fn set_text(text: &str) -> Result<(), arboard::Error> {
        arboard::Clipboard::new()?.set_text(text.to_string())
    }

    pub fn get_text() -> Result<String, arboard::Error> {
        arboard::Clipboard::new()?.get_text()
    }
}

#[cfg(not(feature = "runtime"))]
mod system {
    pub fn set_text(_text: &str) -> Result<(), &'static str> {
        Err("built without system clipboard support")
    }

    pub fn get_text() -> Result<String, &'static str> {
        Err("built without system clipboard support")
    }
}
