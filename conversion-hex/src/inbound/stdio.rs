//! Stdin/stdout console.

use std::io::{self, Write};

use async_trait::async_trait;
use conversion_types::Console;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Reads answers from stdin and writes prompts and messages to stdout.
pub struct StdioConsole {
    lines: Lines<BufReader<Stdin>>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdioConsole {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut stdout = io::stdout();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }
        self.lines.next_line().await
    }

    fn print(&mut self, message: &str) {
        println!("{message}");
    }
}
