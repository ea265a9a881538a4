#![cfg_attr(
    any(
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "sparc64"
    ),
    feature(asm_experimental_arch)
)]

pub mod cycleclock;

pub use cycleclock::{CycleCounter, Native, now};

#[cfg(test)]
#[path = "../build/arm_version.rs"]
mod arm_version;
