//! Typed System Call Wrappers
//!
//! Safe, named operations built on a [`Trap`]. None of these touch the
//! register convention; each one builds a request and interprets the result.
//!
//! # Buffer Discipline
//! - The caller owns every region passed by reference
//! - Reads hand the kernel `buf.len()` as the capacity
//! - Writes hand the kernel exactly `data.len()` bytes
//! - Ownership returns to the caller when the call returns

use core::ffi::CStr;
use core::fmt;

use super::abi::{SyscallError, SyscallRequest, SyscallResult, Sysno};
use super::trampoline::Trap;

/// Typed system call interface over a trampoline
#[derive(Debug)]
pub struct Sys<T> {
    trap: T,
}

impl<T> Sys<T> {
    pub const fn new(trap: T) -> Self {
        Self { trap }
    }

    pub fn trap(&self) -> &T {
        &self.trap
    }
}

impl<T: Trap> Sys<T> {
    /// Issue a raw system call.
    ///
    /// # Arguments
    /// * `sysno` - Operation selector (placed in a3)
    /// * `arg0`, `arg1`, `arg2` - Machine-word arguments (a0..a2)
    ///
    /// # Returns
    /// The signed word the kernel left in a0
    ///
    /// # Safety
    /// Any argument the selected operation treats as a pointer must be valid
    /// for that operation's access for the duration of the call.
    #[inline]
    pub unsafe fn raw_call(
        &mut self,
        sysno: Sysno,
        arg0: usize,
        arg1: usize,
        arg2: usize,
    ) -> SyscallResult {
        // SAFETY: Forwarded to the caller.
        unsafe { self.trap.trap(SyscallRequest::new(sysno, arg0, arg1, arg2)) }
    }

    /// Output one character. The result is not inspected.
    pub fn write_char(&mut self, ch: u8) {
        // SAFETY: PutChar takes no pointers.
        unsafe {
            self.raw_call(Sysno::PutChar, ch as usize, 0, 0);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_char(byte);
        }
    }

    /// Block until a character is available and return it.
    pub fn read_char(&mut self) -> u8 {
        // SAFETY: GetChar takes no pointers.
        let result = unsafe { self.raw_call(Sysno::GetChar, 0, 0, 0) };
        result.raw() as u8
    }

    /// Read the named file into `buf`.
    ///
    /// # Returns
    /// Number of bytes placed at the start of `buf`; no terminator is
    /// included. On failure `buf` is left to whatever the kernel did with it,
    /// which for a missing file is nothing.
    pub fn read_file(&mut self, name: &CStr, buf: &mut [u8]) -> Result<usize, SyscallError> {
        let capacity = buf.len();

        // SAFETY:
        // - `name` is NUL-terminated and borrowed for the whole call
        // - `buf` is exclusively borrowed and `capacity` is its exact length
        let result = unsafe {
            self.raw_call(
                Sysno::ReadFile,
                name.as_ptr() as usize,
                buf.as_mut_ptr() as usize,
                capacity,
            )
        };

        let len = result.into_result()?;
        if len > capacity {
            return Err(SyscallError::LengthOverrun {
                returned: len,
                capacity,
            });
        }
        Ok(len)
    }

    /// Write `data` as the full contents of the named file.
    ///
    /// # Returns
    /// The kernel's non-negative status (the byte count for this kernel)
    pub fn write_file(&mut self, name: &CStr, data: &[u8]) -> Result<usize, SyscallError> {
        // SAFETY:
        // - `name` is NUL-terminated and borrowed for the whole call
        // - The kernel reads exactly `data.len()` bytes from `data`
        let result = unsafe {
            self.raw_call(
                Sysno::WriteFile,
                name.as_ptr() as usize,
                data.as_ptr() as usize,
                data.len(),
            )
        };
        result.into_result()
    }

    /// Terminate the program. Never returns.
    ///
    /// If the kernel breaks its contract and resumes us, spin forever rather
    /// than fall back into the caller.
    pub fn terminate(&mut self) -> ! {
        // SAFETY: Exit takes no pointers.
        unsafe {
            self.raw_call(Sysno::Exit, 0, 0, 0);
        }

        log::warn!(target: "syscall", "kernel resumed a terminated program, halting");
        loop {
            core::hint::spin_loop();
        }
    }
}

impl<T: Trap> fmt::Write for Sys<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
