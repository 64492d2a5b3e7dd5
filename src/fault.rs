/// Deliberate null-pointer fault.
///
/// The store goes through inline assembly where we can, so the optimizer has
/// no undefined behavior to reason about and cannot drop the write. The CPU
/// faults on address 0 and the kernel delivers `SIGSEGV`.
use std::process;

/// Store zero at address 0. Never returns.
#[cfg(target_arch = "x86_64")]
pub fn crash() -> ! {
    // SAFETY: not safe, on purpose. Page 0 is unmapped, so the store traps
    // and the process is killed before control comes back.
    unsafe {
        std::arch::asm!("mov dword ptr [{addr}], 0", addr = in(reg) 0usize, options(nostack));
    }
    process::abort()
}

/// Store zero at address 0. Never returns.
#[cfg(target_arch = "aarch64")]
pub fn crash() -> ! {
    // SAFETY: not safe, on purpose. Page 0 is unmapped, so the store traps
    // and the process is killed before control comes back.
    unsafe {
        std::arch::asm!("str wzr, [{addr}]", addr = in(reg) 0usize, options(nostack));
    }
    process::abort()
}

/// Store zero at address 0. Never returns.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn crash() -> ! {
    let p: *mut i32 = std::hint::black_box(std::ptr::null_mut());
    // SAFETY: not safe, on purpose. Debug builds may catch the null pointer
    // and abort first; either way the process dies abnormally.
    unsafe { std::ptr::write_volatile(p, 0) };
    process::abort()
}
