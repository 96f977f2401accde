//! Line separator detection.

/// Separator used to split and rejoin pasted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    /// `CrLf` when `text` contains `\r\n` anywhere, `Lf` otherwise.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }

    /// Split `text` into lines.
    ///
    /// A trailing separator yields a trailing empty line, so joining the
    /// result gives back `text` unchanged.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.as_str()).collect()
    }

    /// Join lines with this separator.
    pub fn join<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(self.as_str());
            }
            out.push_str(line.as_ref());
        }
        out
    }
}
