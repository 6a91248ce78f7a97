//! Command Loop
//!
//! Interactive read-eval loop over the syscall wrappers.
//!
//! # States
//! ```text
//!        +--------+   char    +------------+  '\r'   +----------+
//!   +--> | Prompt | --------> | Accumulate | ------> | Dispatch | --+
//!   |    +--------+           +------------+         +----------+   |
//!   |         ^   too long         |                     | exit     |
//!   |         +--------------------+                     v          |
//!   |                                               terminate()     |
//!   +---------------------------------------------------------------+
//! ```
//!
//! The kernel does not echo, so every character read is echoed here.

mod command;
mod line;

use core::fmt::Write;

pub use command::{Command, VOCABULARY};
pub use line::{LineBuffer, LineError};

use crate::config::{ShellConfig, ShellOptions, FILE_BUFFER_CAPACITY, VERSION};
use crate::syscall::{Sys, SyscallError, Trap};

/// Line terminator (carriage return, not newline)
const LINE_TERMINATOR: u8 = b'\r';

const UNKNOWN_COMMAND: &str = "unknown command\n";

/// Interactive shell
pub struct Shell<T: Trap> {
    sys: Sys<T>,
    config: ShellConfig,
    line: LineBuffer,
}

impl<T: Trap> Shell<T> {
    pub const fn new(sys: Sys<T>, config: ShellConfig) -> Self {
        Self {
            sys,
            config,
            line: LineBuffer::new(),
        }
    }

    /// Run until `exit`.
    pub fn run(&mut self) -> ! {
        if self.config.options.contains(ShellOptions::BANNER) {
            let _ = writeln!(self.sys, "ushell v{}", VERSION);
        }

        loop {
            self.prompt();
            match self.read_line() {
                Ok(()) => self.dispatch(),
                Err(err) => {
                    let _ = writeln!(self.sys, "{}", err);
                }
            }
        }
    }

    pub fn prompt(&mut self) {
        self.emit(self.config.prompt);
    }

    /// Accumulate one line into the line buffer.
    ///
    /// # Errors
    /// [`LineError::TooLong`] once a character arrives with only the
    /// terminator slot left. Everything accumulated so far is discarded.
    pub fn read_line(&mut self) -> Result<(), LineError> {
        self.line.clear();

        loop {
            let ch = self.sys.read_char();
            if self.config.options.contains(ShellOptions::ECHO) {
                self.sys.write_char(ch);
            }

            if self.line.is_full() {
                self.line.clear();
                return Err(LineError::TooLong);
            }

            if ch == LINE_TERMINATOR {
                self.sys.write_char(b'\n');
                self.line.terminate();
                return Ok(());
            }

            self.line.push(ch)?;
        }
    }

    /// Execute the completed line.
    pub fn dispatch(&mut self) {
        let command = Command::parse(self.line.as_bytes());
        log::trace!(target: "shell", "dispatch {:?}", command);

        match command {
            Some(Command::Hello) => self.emit(self.config.greeting),
            Some(Command::Exit) => self.sys.terminate(),
            Some(Command::ReadFile) => self.read_file(),
            Some(Command::WriteFile) => self.write_file(),
            None => self.emit(UNKNOWN_COMMAND),
        }
    }

    /// The most recently accumulated line.
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    fn emit(&mut self, text: &str) {
        self.sys.write_bytes(text.as_bytes());
    }

    fn read_file(&mut self) {
        let mut buf = [0u8; FILE_BUFFER_CAPACITY];
        let usable = buf.len() - 1;

        match self.sys.read_file(self.config.file_name, &mut buf[..usable]) {
            Ok(len) => {
                log::debug!(
                    target: "shell",
                    "read {} bytes from {:?}",
                    len,
                    self.config.file_name
                );
                buf[len] = 0;
                let text = buf.split(|&b| b == 0).next().unwrap_or_default();
                self.sys.write_bytes(text);
                self.sys.write_char(b'\n');
            }
            Err(err) => self.report_failure(Command::ReadFile, err),
        }
    }

    fn write_file(&mut self) {
        match self
            .sys
            .write_file(self.config.file_name, self.config.write_payload)
        {
            Ok(status) => {
                log::debug!(
                    target: "shell",
                    "wrote {:?}, status {}",
                    self.config.file_name,
                    status
                );
            }
            Err(err) => self.report_failure(Command::WriteFile, err),
        }
    }

    fn report_failure(&mut self, command: Command, err: SyscallError) {
        log::debug!(
            target: "shell",
            "{} on {:?} failed: {}",
            command.name(),
            self.config.file_name,
            err
        );
        if self
            .config
            .options
            .contains(ShellOptions::REPORT_FILE_ERRORS)
        {
            let _ = writeln!(self.sys, "{} failed: {}", command.name(), err);
        }
    }
}
