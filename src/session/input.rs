use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::SessionError;

/// Whitespace-token reader over a line-buffered source.
///
/// Tokens may span lines. Whatever follows the last token on a line stays
/// pending for [`InputReader::rest_of_line`].
pub struct InputReader<R> {
    reader: R,
    pending: String,
}

impl<R: AsyncBufRead + Unpin> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: String::new(),
        }
    }

    async fn fill(&mut self) -> Result<(), SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(SessionError::EndOfInput);
        }
        self.pending = line;
        Ok(())
    }

    pub async fn next_token(&mut self) -> Result<String, SessionError> {
        loop {
            let trimmed = self.pending.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                self.pending = trimmed[end..].to_string();
                return Ok(token);
            }
            self.fill().await?;
        }
    }

    /// Text left on the current line, or the whole next line when nothing is left.
    pub async fn rest_of_line(&mut self) -> Result<String, SessionError> {
        let rest = std::mem::take(&mut self.pending);
        let rest = rest.trim();
        if !rest.is_empty() {
            return Ok(rest.to_string());
        }

        self.fill().await?;
        let line = std::mem::take(&mut self.pending);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
