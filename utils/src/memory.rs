/// Hint the CPU to pull the cache line at `ptr` into L1.
///
/// Issued a little ahead of a table probe so the slot is warm by the time it is read.
///
/// # Safety
/// `ptr` must lie within a live allocation. The memory behind it is never read.
#[inline(always)]
pub unsafe fn prefetch(ptr: *const u8) {
    #[cfg(target_arch = "x86_64")]
    {
        std::arch::x86_64::_mm_prefetch::<{ std::arch::x86_64::_MM_HINT_T0 }>(ptr as *const i8);
    }

    #[cfg(target_arch = "aarch64")]
    {
        std::arch::asm!(
            "prfm pldl1keep, [{ptr}]",
            ptr = in(reg) ptr,
            options(nostack, preserves_flags, readonly)
        );
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    let _ = ptr;
}
