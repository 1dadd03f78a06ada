//! Interactive console port.

/// Line-oriented user interaction.
#[async_trait::async_trait]
pub trait Console: Send {
    /// Shows `prompt` and waits for one line, without its line terminator.
    ///
    /// `Ok(None)` means the input stream is closed.
    async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Writes one line of output.
    fn print(&mut self, message: &str);
}
