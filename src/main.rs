//! ushell user program entry
//!
//! # Startup
//! The kernel maps the image and jumps to `_start` in U-mode. `_start`
//! switches to the stack reserved by the linker script (`__stack_top`),
//! calls [`main`], and falls through to exit should `main` ever return.

#![no_std]
#![no_main]
#![deny(unsafe_op_in_unsafe_fn)]

use core::arch::global_asm;
use core::fmt::Write;
use core::panic::PanicInfo;

use ushell::config::ShellConfig;
use ushell::logger::{self, ConsoleLogger};
use ushell::shell::Shell;
use ushell::syscall::{Ecall, Sys};

global_asm!(
    ".section .text.start",
    ".global _start",
    "_start:",
    "    la sp, __stack_top",
    "    call main",
    "    call user_exit",
);

static LOGGER: ConsoleLogger<Ecall> = ConsoleLogger::new(Ecall);

/// Program entry called from `_start`
#[no_mangle]
pub extern "C" fn main() -> ! {
    let config = ShellConfig::DEFAULT;

    // Only fails if a logger is already set, which cannot happen this early
    let _ = logger::init(&LOGGER, config.log_level);
    log::debug!(target: "boot", "ushell v{} starting", ushell::config::VERSION);

    let mut shell = Shell::new(Sys::new(Ecall), config);
    shell.run()
}

/// Exit path for `_start` if `main` returns
#[no_mangle]
pub extern "C" fn user_exit() -> ! {
    Sys::new(Ecall).terminate()
}

/// Panic handler - report and terminate
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let mut console = Sys::new(Ecall);

    let _ = console.write_str("panic: ");
    if let Some(location) = info.location() {
        let _ = write!(console, "{}:{}: ", location.file(), location.line());
    }
    let _ = writeln!(console, "{}", info.message());

    console.terminate()
}
