//! Cycle counter selected at build time.
//!
//! `now()` returns the number of cycles since power-on, read with the
//! cheapest mechanism the target offers: a timestamp register where user mode
//! can reach one, an OS primitive where it cannot.
//!
//! Not every CPU/platform/kernel combination increments the counter at a
//! constant rate or keeps it synchronized across logical CPUs. On out-of-order
//! CPUs the read is not serializing, so counts at single-cycle granularity may
//! be skewed by instruction reordering.
//!
//! | target | counter | units |
//! |---|---|---|
//! | Apple (any arch) | `MachAbsolute` | mach time units |
//! | x86, x86_64 | `Tsc` | TSC cycles |
//! | PowerPC | `TimeBase` | time-base ticks |
//! | SPARC64 | `Tick` | `%tick` cycles |
//! | AArch64 | `GenericTimer` | generic timer ticks |
//! | RISC-V | `RiscvTime` | `time` CSR ticks |
//! | ARMv6+ (unix) | `PerfMonitor`, else `TimeOfDay` | cycles, else microseconds |
//! | older ARM, MIPS (unix) | `TimeOfDay` | microseconds |
//!
//! Any other target fails to compile.

pub mod compose;

#[cfg(target_vendor = "apple")]
mod mach;
#[cfg(target_vendor = "apple")]
pub use mach::MachAbsolute;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod tsc;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use tsc::Tsc;

#[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
mod time_base;
#[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
pub use time_base::TimeBase;

#[cfg(target_arch = "sparc64")]
mod tick;
#[cfg(target_arch = "sparc64")]
pub use tick::Tick;

#[cfg(target_arch = "aarch64")]
mod generic_timer;
#[cfg(target_arch = "aarch64")]
pub use generic_timer::GenericTimer;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod riscv;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use riscv::RiscvTime;

#[cfg(all(target_arch = "arm", cycleclock_armv6, unix))]
mod perf_monitor;
#[cfg(all(target_arch = "arm", cycleclock_armv6, unix))]
pub use perf_monitor::PerfMonitor;

#[cfg(unix)]
mod time_of_day;
#[cfg(unix)]
pub use time_of_day::TimeOfDay;

/// A source of cycle counts.
///
/// Implementors are zero-sized markers; the read is an associated function so
/// a counter can be named as a type parameter without carrying a value.
pub trait CycleCounter {
    /// Short name of the mechanism, for reports.
    const NAME: &'static str;

    /// Cycles (or the mechanism's proxy unit) since a fixed epoch.
    fn now() -> u64;
}

#[cfg(target_vendor = "apple")]
pub type Native = MachAbsolute;

#[cfg(all(
    not(target_vendor = "apple"),
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type Native = Tsc;

#[cfg(all(
    not(target_vendor = "apple"),
    any(target_arch = "powerpc", target_arch = "powerpc64")
))]
pub type Native = TimeBase;

#[cfg(all(not(target_vendor = "apple"), target_arch = "sparc64"))]
pub type Native = Tick;

#[cfg(all(not(target_vendor = "apple"), target_arch = "aarch64"))]
pub type Native = GenericTimer;

#[cfg(all(
    not(target_vendor = "apple"),
    any(target_arch = "riscv32", target_arch = "riscv64")
))]
pub type Native = RiscvTime;

#[cfg(all(
    not(target_vendor = "apple"),
    target_arch = "arm",
    cycleclock_armv6,
    unix
))]
pub type Native = PerfMonitor;

// Pre-v6 ARM has no standard cycle counter and MIPS only allows the counter
// to privileged code, so both report microseconds.
#[cfg(all(
    not(target_vendor = "apple"),
    any(
        all(target_arch = "arm", not(cycleclock_armv6)),
        target_arch = "mips",
        target_arch = "mips64"
    ),
    unix
))]
pub type Native = TimeOfDay;

// Only ARM and MIPS degrade to the time-of-day clock. Everywhere else a new
// target needs its own fast reader rather than a silent low-resolution one.
#[cfg(not(any(
    target_vendor = "apple",
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "sparc64",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    all(
        any(target_arch = "arm", target_arch = "mips", target_arch = "mips64"),
        unix
    )
)))]
compile_error!("cycleclock: no cycle counter is defined for this OS and CPU");

/// Cycles since power-on, read with the target's [`Native`] counter.
///
/// Thread-safe and lock-free. Readings taken on different logical CPUs are
/// not guaranteed to be comparable.
#[inline(always)]
pub fn now() -> u64 {
    <Native as CycleCounter>::now()
}
