//! System Call Interface
//!
//! User-side half of the syscall boundary: a single trampoline into the
//! kernel and typed wrappers built on top of it.
//!
//! # Safety Model
//! - Exactly one unsafe primitive ([`Trap::trap`]) performs the transition
//! - Wrappers only pass regions they borrow for the whole call
//! - Failures are negative result words, never panics
//!
//! # Current Syscalls
//! - 1: putchar(ch)
//! - 2: getchar() -> ch
//! - 3: exit()
//! - 4: readfile(name, buf, capacity) -> len
//! - 5: writefile(name, buf, len) -> status

mod abi;
mod trampoline;
mod wrappers;

pub use abi::{SyscallError, SyscallRequest, SyscallResult, Sysno};
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use trampoline::Ecall;
pub use trampoline::Trap;
pub use wrappers::Sys;
