//! ushell - Minimal RISC-V User-Mode Shell
//!
//! The user-space half of a tiny syscall boundary: a trampoline into the
//! kernel and an interactive command loop built entirely on it.
//!
//! # Layers
//! - `syscall`: one `ecall` trampoline plus typed wrappers
//! - `shell`: line accumulation and fixed command dispatch
//! - `logger`: `log` backend over the putchar syscall
//! - `config`: compile-time knobs
//!
//! # Architecture
//! - Target: RISC-V (riscv32 / riscv64), U-mode
//! - Kernel ABI: arguments in a0-a2, selector in a3, result in a0
//! - Single thread of control, no heap

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod logger;
pub mod shell;
pub mod syscall;

#[cfg(test)]
mod testing;
