//! Blocking line reader.
//!
//! Terminal reads cannot be cancelled, so they run on a dedicated thread and
//! each line is forwarded over a channel. When the quiz ends the runner just
//! stops listening; the thread is never joined and dies with the process.

use std::io::{self, BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A line with its trailing newline removed.
    Line(String),
    /// The line could not be read (e.g. it was not valid UTF-8).
    Failed(String),
}

/// Receiving end of a line reader. Closes at end of input.
pub type LineReceiver = mpsc::UnboundedReceiver<LineRead>;

/// Read lines from `reader` on a background thread.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<LineReceiver>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("quizrun-input".into())
        .spawn(move || forward_lines(reader, tx))?;
    Ok(rx)
}

/// Read lines from standard input on a background thread.
pub fn stdin_lines() -> io::Result<LineReceiver> {
    spawn_line_reader(BufReader::new(io::stdin()))
}

fn forward_lines<R: BufRead>(mut reader: R, tx: mpsc::UnboundedSender<LineRead>) {
    let mut buf = String::new();
    loop {
        buf.clear();
        let (item, keep_reading) = match reader.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => (
                LineRead::Line(buf.trim_end_matches(['\r', '\n']).to_string()),
                true,
            ),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            // The offending bytes are consumed, so the next line is still readable.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                (LineRead::Failed(e.to_string()), true)
            }
            Err(e) => (LineRead::Failed(e.to_string()), false),
        };

        if tx.send(item).is_err() || !keep_reading {
            break;
        }
    }
    tracing::debug!("input reader finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    async fn collect(mut rx: LineReceiver) -> Vec<LineRead> {
        let mut lines = Vec::new();
        while let Some(line) = rx.recv().await {
            lines.push(line);
        }
        lines
    }

    #[tokio::test]
    async fn forwards_lines_without_newlines() {
        let rx = spawn_line_reader(Cursor::new("\n4\r\n  7 \n10")).unwrap();
        assert_eq!(
            collect(rx).await,
            vec![
                LineRead::Line(String::new()),
                LineRead::Line("4".into()),
                LineRead::Line("  7 ".into()),
                LineRead::Line("10".into()),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_failed_read() {
        let bytes: Vec<u8> = b"\xff\xfe\n4\n".to_vec();
        let lines = collect(spawn_line_reader(Cursor::new(bytes)).unwrap()).await;
        assert_eq!(lines.len(), 2);
        assert!(matches!(lines[0], LineRead::Failed(_)));
        assert_eq!(lines[1], LineRead::Line("4".into()));
    }

    #[tokio::test]
    async fn empty_input_closes_immediately() {
        let lines = collect(spawn_line_reader(Cursor::new("")).unwrap()).await;
        assert!(lines.is_empty());
    }
}
