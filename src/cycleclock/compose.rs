//! Register arithmetic shared by the per-target readers.
//!
//! Everything here is plain integer math, compiled on every target, so the
//! rules can be checked on any host without the hardware they describe.

/// PMUSERENR bit 0: user mode may read the performance monitor counters.
pub const PMUSERENR_EN: u32 = 1;

/// PMCNTENSET bit 31: the cycle counter is enabled.
pub const PMCNTENSET_C: u32 = 0x8000_0000;

/// The ARM cycle counter is configured to tick once every 64 cycles.
pub const PMCCNTR_DIVIDER: u64 = 64;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Join two 32-bit halves of a counter register: `(high << 32) | low`.
#[inline(always)]
pub const fn combine_halves(low: u32, high: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Undo the 1-in-64 prescaler of the ARM cycle counter.
#[inline(always)]
pub const fn scale_pmccntr(pmccntr: u32) -> u64 {
    pmccntr as u64 * PMCCNTR_DIVIDER
}

/// Combine a time-base read taken as upper, lower, upper.
///
/// When the two upper reads disagree the lower word rolled over (or an
/// interrupt landed) between them, so the lower word is dropped and the sample
/// keeps only `tbu1`. The reading loses precision for that one sample but is
/// never torn. There is no retry.
#[inline(always)]
pub const fn merge_time_base(tbu0: u32, tbl: u32, tbu1: u32) -> u64 {
    let mask = 0u32.wrapping_sub((tbu0 == tbu1) as u32);
    combine_halves(tbl & mask, tbu1)
}

/// Microseconds since the time-of-day epoch, used as a stand-in cycle count.
#[inline(always)]
pub const fn micros_since_epoch(seconds: i64, micros: i64) -> u64 {
    (seconds as u64)
        .wrapping_mul(MICROS_PER_SECOND)
        .wrapping_add(micros as u64)
}

/// Two-step capability probe for the ARM user-mode cycle counter.
///
/// `read_pmcntenset` runs only if `pmuseren` grants user access, and
/// `read_pmccntr` only if the counter is enabled. Returns the scaled cycle
/// estimate, or `None` when the counter cannot be used.
#[inline(always)]
pub fn probe_perf_monitor(
    pmuseren: u32,
    read_pmcntenset: impl FnOnce() -> u32,
    read_pmccntr: impl FnOnce() -> u32,
) -> Option<u64> {
    if pmuseren & PMUSERENR_EN == 0 {
        return None;
    }
    if read_pmcntenset() & PMCNTENSET_C == 0 {
        return None;
    }
    Some(scale_pmccntr(read_pmccntr()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_combine_halves_carries_low_into_high() {
        assert_eq!(combine_halves(0xFFFF_FFFF, 0x0000_0001), 0x1_FFFF_FFFF);
        assert_eq!(combine_halves(0, 0), 0);
    }

    #[test]
    fn test_combine_halves_keeps_top_bit() {
        assert_eq!(combine_halves(0, 0x8000_0000), 1 << 63);
        assert_eq!(combine_halves(u32::MAX, u32::MAX), u64::MAX);
    }

    #[test]
    fn test_scale_pmccntr() {
        assert_eq!(scale_pmccntr(10), 640);
        assert_eq!(scale_pmccntr(0), 0);
        assert_eq!(scale_pmccntr(u32::MAX), u32::MAX as u64 * 64);
    }

    #[test]
    fn test_merge_time_base_drops_low_on_mismatch() {
        let value = merge_time_base(5, 0xDEAD_BEEF, 6);

        assert_eq!(value & 0xFFFF_FFFF, 0);
        assert_eq!(value >> 32, 6);
    }

    #[test]
    fn test_merge_time_base_matching_uppers() {
        assert_eq!(merge_time_base(7, 0x1234_5678, 7), 0x7_1234_5678);
    }

    #[test]
    fn test_micros_since_epoch() {
        assert_eq!(micros_since_epoch(0, 0), 0);
        assert_eq!(micros_since_epoch(1, 0), 1_000_000);
        assert_eq!(micros_since_epoch(1_700_000_000, 999_999), 1_700_000_000_999_999);
    }

    #[test]
    fn test_probe_without_user_access_reads_nothing() {
        let reads = Cell::new(0);
        let result = probe_perf_monitor(
            0,
            || {
                reads.set(reads.get() + 1);
                PMCNTENSET_C
            },
            || {
                reads.set(reads.get() + 1);
                10
            },
        );

        assert_eq!(result, None);
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn test_probe_counter_disabled() {
        let counter_read = Cell::new(false);
        let result = probe_perf_monitor(
            PMUSERENR_EN,
            || 0x7FFF_FFFF,
            || {
                counter_read.set(true);
                10
            },
        );

        assert_eq!(result, None);
        assert!(!counter_read.get());
    }

    #[test]
    fn test_probe_counting() {
        // Only bit 0 of PMUSERENR matters.
        let result = probe_perf_monitor(0b1101, || PMCNTENSET_C | 0b11, || 10);

        assert_eq!(result, Some(640));
    }

    proptest! {
        #[test]
        fn combine_halves_splits_back(low in any::<u32>(), high in any::<u32>()) {
            let value = combine_halves(low, high);
            prop_assert_eq!(value as u32, low);
            prop_assert_eq!((value >> 32) as u32, high);
        }

        #[test]
        fn merge_time_base_high_half_is_second_upper_read(
            tbu0 in any::<u32>(),
            tbl in any::<u32>(),
            tbu1 in any::<u32>(),
        ) {
            let merged = merge_time_base(tbu0, tbl, tbu1);
            prop_assert_eq!((merged >> 32) as u32, tbu1);
            if tbu0 == tbu1 {
                prop_assert_eq!(merged, combine_halves(tbl, tbu1));
            } else {
                prop_assert_eq!(merged as u32, 0);
            }
        }

        #[test]
        fn scale_pmccntr_is_monotonic(a in any::<u32>(), b in any::<u32>()) {
            prop_assert_eq!(a <= b, scale_pmccntr(a) <= scale_pmccntr(b));
        }

        #[test]
        fn micros_since_epoch_orders_like_timeval(
            seconds in 0i64..4_000_000_000,
            micros_a in 0i64..1_000_000,
            micros_b in 0i64..1_000_000,
        ) {
            let a = micros_since_epoch(seconds, micros_a);
            let b = micros_since_epoch(seconds + 1, micros_b);
            prop_assert!(a < b);
            prop_assert_eq!(b - micros_since_epoch(seconds + 1, 0), micros_b as u64);
        }
    }
}
