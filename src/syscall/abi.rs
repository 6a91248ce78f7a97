//! System Call ABI
//!
//! Selector numbers, request and result types shared with the kernel.
//!
//! # Register Convention (RISC-V)
//! - `a0`, `a1`, `a2`: arguments 0..2
//! - `a3`: operation selector
//! - `a0`: signed result on return
//!
//! These values must match the kernel bit for bit.

use core::fmt;

/// System call selectors
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sysno {
    /// Output one character (a0 = character)
    PutChar = 1,
    /// Block until one character of input is available
    GetChar = 2,
    /// Terminate the calling program
    Exit = 3,
    /// Read a named file (a0 = name, a1 = buffer, a2 = capacity)
    ReadFile = 4,
    /// Write a named file (a0 = name, a1 = buffer, a2 = length)
    WriteFile = 5,
}

impl Sysno {
    /// Decode a raw selector as found in `a3`.
    pub const fn from_raw(raw: usize) -> Option<Self> {
        match raw {
            1 => Some(Sysno::PutChar),
            2 => Some(Sysno::GetChar),
            3 => Some(Sysno::Exit),
            4 => Some(Sysno::ReadFile),
            5 => Some(Sysno::WriteFile),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_raw(self) -> usize {
        self as usize
    }
}

/// One trip across the privilege boundary.
///
/// Built and consumed inside a single trampoline call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallRequest {
    pub sysno: Sysno,
    pub args: [usize; 3],
}

impl SyscallRequest {
    #[inline]
    pub const fn new(sysno: Sysno, arg0: usize, arg1: usize, arg2: usize) -> Self {
        Self {
            sysno,
            args: [arg0, arg1, arg2],
        }
    }
}

/// The single signed word the kernel leaves in `a0`.
///
/// Non-negative values are success payloads, negative values are failures.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallResult(isize);

impl SyscallResult {
    #[inline]
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> isize {
        self.0
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 >= 0
    }

    /// Split the result word into a payload or an error.
    pub const fn into_result(self) -> Result<usize, SyscallError> {
        if self.0 < 0 {
            Err(SyscallError::Failed(self.0))
        } else {
            Ok(self.0 as usize)
        }
    }
}

/// System call error
///
/// The kernel only reports a negative code; what it means depends on the
/// operation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallError {
    /// Kernel returned a negative result
    Failed(isize),
    /// Kernel claimed to place more bytes than the region it was given
    LengthOverrun { returned: usize, capacity: usize },
}

impl fmt::Display for SyscallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyscallError::Failed(code) => write!(f, "error {}", code),
            SyscallError::LengthOverrun { returned, capacity } => {
                write!(f, "length {} exceeds capacity {}", returned, capacity)
            }
        }
    }
}
