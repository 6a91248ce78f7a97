//! Command vocabulary
//!
//! A closed set of literal command names mapped to handler variants.
//! Lookup walks [`VOCABULARY`] in order and the first exact match wins;
//! new commands are appended without reordering existing entries.

/// Built-in commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the greeting
    Hello,
    /// Terminate the program
    Exit,
    /// Print the contents of the configured file
    ReadFile,
    /// Store the configured payload in the configured file
    WriteFile,
}

/// Recognised command literals, in match order
pub const VOCABULARY: &[(&[u8], Command)] = &[
    (b"hello", Command::Hello),
    (b"exit", Command::Exit),
    (b"readfile", Command::ReadFile),
    (b"writefile", Command::WriteFile),
];

impl Command {
    /// Look up a completed line.
    ///
    /// Whole-line, case-sensitive comparison. No argument or whitespace
    /// handling.
    pub fn parse(line: &[u8]) -> Option<Self> {
        VOCABULARY
            .iter()
            .find(|(name, _)| *name == line)
            .map(|&(_, command)| command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Exit => "exit",
            Command::ReadFile => "readfile",
            Command::WriteFile => "writefile",
        }
    }
}
