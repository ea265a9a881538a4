/// Architecture version encoded in an ARM target triple.
///
/// `armv7-unknown-linux-gnueabihf` is 7, `thumbv7neon-...` is 7,
/// `armv5te-...` is 5. A bare `arm-` prefix carries no version.
pub fn arm_version(target: &str) -> Option<u32> {
    let arch = target.split('-').next()?;
    let rest = ["thumbv", "armebv", "armv"]
        .iter()
        .find_map(|prefix| arch.strip_prefix(prefix))?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Parse the `CYCLECLOCK_ARMV6` override.
pub fn parse_override(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Whether the ARMv6 performance monitor read should be compiled in.
pub fn has_perf_monitor(target: &str, override_value: Option<&str>) -> bool {
    override_value
        .and_then(parse_override)
        .unwrap_or_else(|| arm_version(target).is_some_and(|version| version >= 6))
}
