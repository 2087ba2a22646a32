use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

use crate::presence::event::PresenceEvent;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("line {line}: malformed event: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("feed read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// A bad line can be skipped; a failed read ends the feed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FeedError::Parse { .. })
    }
}

/// Newline-delimited JSON presence events, one per line.
///
/// Blank lines are skipped. Each item is either an event or the reason a
/// line couldn't be read; iteration continues past parse errors.
pub struct EventFeed<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> EventFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// A feed over `path`, or over stdin when there is none.
pub fn open(path: Option<&Path>) -> crate::Result<EventFeed<Box<dyn BufRead + Send>>> {
    let reader: Box<dyn BufRead + Send> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    Ok(EventFeed::new(reader))
}

impl<R: BufRead> Iterator for EventFeed<R> {
    type Item = Result<PresenceEvent, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }

            return Some(serde_json::from_str(text).map_err(|source| FeedError::Parse {
                line: self.line,
                source,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::event::EventKind;
    use std::io::Cursor;

    #[test]
    fn reads_events_and_skips_blank_lines() {
        let input = concat!(
            r#"{"event":"appearance","deviceId":"a","receiverDirectory":"notman:cafe"}"#,
            "\n\n",
            r#"{"event":"keep-alive","deviceId":"a","receiverDirectory":"notman:cafe"}"#,
            "\n",
        );
        let kinds: Vec<EventKind> = EventFeed::new(Cursor::new(input))
            .map(|e| e.unwrap().kind)
            .collect();

        assert_eq!(kinds, [EventKind::Appearance, EventKind::KeepAlive]);
    }

    #[test]
    fn malformed_line_reports_position_and_continues() {
        let input = "{\"event\":\"appearance\"}\nnot json\n{\"event\":\"displacement\"}";
        let items: Vec<_> = EventFeed::new(Cursor::new(input)).collect();

        assert_eq!(items.len(), 3);
        match &items[1] {
            Err(err @ FeedError::Parse { line, .. }) => {
                assert_eq!(*line, 2);
                assert!(err.is_recoverable());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert_eq!(items[2].as_ref().unwrap().kind, EventKind::Displacement);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = open(Some(Path::new("/nonexistent/presence/feed.ndjson")));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
