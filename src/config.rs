//! Compile-time shell configuration
//!
//! All knobs are `const` so the user image carries no parsing code.

use core::ffi::CStr;

use bitflags::bitflags;
use log::LevelFilter;

/// Program version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capacity of the command line buffer, terminator slot included
pub const LINE_CAPACITY: usize = 128;

/// Capacity of the `readfile` buffer, terminator slot included
pub const FILE_BUFFER_CAPACITY: usize = 128;

bitflags! {
    /// Optional shell behaviours.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShellOptions: u32 {
        /// Echo every input character (the kernel does not)
        const ECHO = 1 << 0;
        /// Print the status of a failed file operation
        const REPORT_FILE_ERRORS = 1 << 1;
        /// Print a version banner before the first prompt
        const BANNER = 1 << 2;
    }
}

/// Shell configuration
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// Emitted before each line
    pub prompt: &'static str,
    /// Reply to `hello`
    pub greeting: &'static str,
    /// File used by `readfile` and `writefile`
    pub file_name: &'static CStr,
    /// Bytes stored by `writefile`, trailing NUL included
    pub write_payload: &'static [u8],
    pub options: ShellOptions,
    pub log_level: LevelFilter,
}

impl ShellConfig {
    pub const DEFAULT: Self = Self {
        prompt: "> ",
        greeting: "Hello world from shell!\n",
        file_name: c"hello.txt",
        write_payload: b"Hello from shell!\n\0",
        options: ShellOptions::ECHO.union(ShellOptions::REPORT_FILE_ERRORS),
        log_level: LevelFilter::Warn,
    };
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
