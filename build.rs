use std::env;

#[path = "build/arm_version.rs"]
mod arm_version;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(cycleclock_armv6)");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/arm_version.rs");
    println!("cargo:rerun-if-env-changed=CYCLECLOCK_ARMV6");

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").expect("CARGO_CFG_TARGET_ARCH not set");
    if target_arch != "arm" {
        return;
    }

    // ARMv6 is the first version with a standard user-readable cycle counter.
    let target = env::var("TARGET").expect("TARGET not set");
    let override_value = env::var("CYCLECLOCK_ARMV6").ok();
    if arm_version::has_perf_monitor(&target, override_value.as_deref()) {
        println!("cargo:rustc-cfg=cycleclock_armv6");
    }
}
