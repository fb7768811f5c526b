use anyhow::Context;
use rsp_common::config::GameConfig;
use std::io;

// Collects one formatted event and hands it to the browser console on drop
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn line(&self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            gloo::console::log!(line);
        }
    }
}

// The browser has no clock the fmt layer can use, so timestamps are off
pub fn init(config: &GameConfig) -> anyhow::Result<()> {
    let level = config.max_level().context("Invalid log_level in config")?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleWriter::default)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_console_writer_line() {
        let mut writer = ConsoleWriter::default();
        assert_eq!(writer.line(), None);
        writer.write_all(b" INFO rsp_common: Player 1 ").unwrap();
        writer.write_all(b"chose rock\n").unwrap();
        assert_eq!(
            writer.line(),
            Some(" INFO rsp_common: Player 1 chose rock".to_string())
        );
        // Dropping would call into the browser console
        std::mem::forget(writer);
    }
}
