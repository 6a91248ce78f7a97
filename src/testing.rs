//! Host-side kernel double for unit tests.
//!
//! Models the syscall contract the shell relies on: characters go to a
//! captured output, input comes from a script, and files live in an
//! in-memory store addressed by NUL-terminated name.
//!
//! # Differences from the paired kernel
//! - `WriteFile` creates a missing file; the kernel only rewrites files
//!   already present in its archive and returns -2 otherwise
//! - `ReadFile` returns `min(file size, capacity)`; the kernel copies and
//!   returns the full requested length when it fits its data block

use std::collections::{BTreeMap, VecDeque};
use std::ffi::{c_char, CStr};
use std::panic;
use std::sync::Once;

use log::LevelFilter;

use crate::config::ShellConfig;
use crate::logger::{self, ConsoleLogger};
use crate::syscall::{SyscallRequest, SyscallResult, Sysno, Trap};

/// Result word for a lookup of a file that does not exist.
pub const MISSING_FILE: isize = -2;
/// Result word when the store cannot hold the data.
pub const STORAGE_FULL: isize = -1;
/// Per-file data capacity, as in the kernel's tar file entries.
pub const FILE_CAPACITY: usize = 1024;

/// Panic payload raised when the program calls exit.
#[derive(Debug)]
pub struct KernelExit;

/// Panic payload raised when the program asks for input the script lacks.
#[derive(Debug)]
pub struct InputExhausted;

#[derive(Debug, Default)]
pub struct MockKernel {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
    pub files: BTreeMap<Vec<u8>, Vec<u8>>,
    pub calls: Vec<SyscallRequest>,
    /// Overrides the result of the next file operation.
    pub forced_result: Option<isize>,
}

impl MockKernel {
    pub const fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            files: BTreeMap::new(),
            calls: Vec::new(),
            forced_result: None,
        }
    }

    pub fn with_input(input: &[u8]) -> Self {
        let mut kernel = Self::new();
        kernel.input.extend(input.iter().copied());
        kernel
    }

    pub fn add_file(&mut self, name: &str, data: &[u8]) {
        self.files.insert(name.as_bytes().to_vec(), data.to_vec());
    }

    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name.as_bytes()).map(Vec::as_slice)
    }

    pub fn output_str(&self) -> &str {
        std::str::from_utf8(&self.output).expect("output is ASCII")
    }

    /// # Safety
    /// `ptr` must point at a NUL-terminated string.
    unsafe fn name_at(ptr: usize) -> Vec<u8> {
        // SAFETY: Guaranteed by the caller.
        unsafe { CStr::from_ptr(ptr as *const c_char) }
            .to_bytes()
            .to_vec()
    }

    unsafe fn read_file(&mut self, [name, buf, capacity]: [usize; 3]) -> isize {
        // SAFETY: The wrapper passes a borrowed `&CStr`.
        let name = unsafe { Self::name_at(name) };
        let Some(data) = self.files.get(&name) else {
            return MISSING_FILE;
        };

        let len = data.len().min(capacity);
        // SAFETY: The wrapper passes a buffer of exactly `capacity` bytes.
        unsafe {
            core::ptr::copy_nonoverlapping(data.as_ptr(), buf as *mut u8, len);
        }
        len as isize
    }

    unsafe fn write_file(&mut self, [name, buf, len]: [usize; 3]) -> isize {
        if len > FILE_CAPACITY {
            return STORAGE_FULL;
        }

        // SAFETY: The wrapper passes a borrowed `&CStr` and a slice of `len` bytes.
        let (name, data) = unsafe {
            (
                Self::name_at(name),
                core::slice::from_raw_parts(buf as *const u8, len).to_vec(),
            )
        };
        self.files.insert(name, data);
        len as isize
    }
}

impl Trap for MockKernel {
    unsafe fn trap(&mut self, request: SyscallRequest) -> SyscallResult {
        self.calls.push(request);

        let raw = match request.sysno {
            Sysno::PutChar => {
                self.output.push(request.args[0] as u8);
                0
            }
            Sysno::GetChar => match self.input.pop_front() {
                Some(ch) => ch as isize,
                None => panic::panic_any(InputExhausted),
            },
            Sysno::Exit => panic::panic_any(KernelExit),
            Sysno::ReadFile | Sysno::WriteFile if self.forced_result.is_some() => {
                self.forced_result.take().unwrap_or_default()
            }
            // SAFETY: The caller upholds the pointer contract of `Trap::trap`.
            Sysno::ReadFile => unsafe { self.read_file(request.args) },
            Sysno::WriteFile => unsafe { self.write_file(request.args) },
        };

        SyscallResult::from_raw(raw)
    }
}

static CONSOLE_LOG: ConsoleLogger<MockKernel> = ConsoleLogger::new(MockKernel::new());
static CONSOLE_LOG_INIT: Once = Once::new();

/// Global console logger at the shipped default level.
///
/// Installed once per test process; records land in its own kernel double,
/// apart from the shell's console.
pub fn console_log() -> &'static ConsoleLogger<MockKernel> {
    CONSOLE_LOG_INIT.call_once(|| {
        logger::init(&CONSOLE_LOG, ShellConfig::DEFAULT.log_level)
            .expect("no other logger installed");
    });
    debug_assert_eq!(log::max_level(), LevelFilter::Warn);
    &CONSOLE_LOG
}
