//! Syscall Trampoline
//!
//! The only place where user code crosses into the kernel.
//!
//! # Design
//! - [`Trap`] is the single unsafe seam: one request in, one result word out
//! - [`Ecall`] is the RISC-V implementation using the `ecall` instruction
//! - Everything above this module goes through the safe wrappers in `Sys`
//!
//! # Safety Considerations
//! - The kernel may write through any pointer passed as an argument
//! - The trap must act as a compiler barrier for memory accesses
//! - Exactly one thread of control exists, so the call blocks the program

use super::abi::{SyscallRequest, SyscallResult};

/// A synchronous privilege transition into the kernel.
pub trait Trap {
    /// Hand `request` to the kernel and block until it resumes us.
    ///
    /// # Safety
    /// Every pointer carried in `request.args` must be valid for the access
    /// the selected operation performs (reads of a NUL-terminated name,
    /// writes of at most the stated capacity, reads of exactly the stated
    /// length) for the duration of the call.
    unsafe fn trap(&mut self, request: SyscallRequest) -> SyscallResult;
}

impl<T: Trap + ?Sized> Trap for &mut T {
    #[inline]
    unsafe fn trap(&mut self, request: SyscallRequest) -> SyscallResult {
        // SAFETY: The caller upholds the contract of `Trap::trap`.
        unsafe { (**self).trap(request) }
    }
}

/// RISC-V `ecall` trampoline
///
/// Arguments travel in `a0`..`a2`, the selector in `a3`, and the result
/// comes back in `a0`.
///
/// SAFETY AUDIT: 2026-10-16
/// - Register assignment matches the kernel's trap frame decoding
/// - Only a0 is written back; a1-a3 are inputs only
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Ecall;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
impl Trap for Ecall {
    #[inline(always)]
    unsafe fn trap(&mut self, request: SyscallRequest) -> SyscallResult {
        let [arg0, arg1, arg2] = request.args;
        let mut a0 = arg0;

        // SAFETY:
        // - The kernel preserves every register except a0
        // - No `nomem` option: the kernel may touch memory we passed by
        //   reference, so the compiler must not reorder accesses across this
        // - Pointer validity is the caller's contract (see `Trap::trap`)
        unsafe {
            core::arch::asm!(
                "ecall",
                inlateout("a0") a0,
                in("a1") arg1,
                in("a2") arg2,
                in("a3") request.sysno.as_raw(),
                options(nostack),
            );
        }

        SyscallResult::from_raw(a0 as isize)
    }
}
