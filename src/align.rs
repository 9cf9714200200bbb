/// Rounds `value` up to the next multiple of `align`.
///
/// `align` must be a power of two. The addition can wrap for values close to
/// `usize::MAX`; use [`checked_align_up`] when that matters.
///
/// # Examples
///
/// ```rust
/// use rarena::align_up;
///
/// assert_eq!(align_up!(13usize, 8), 16);
/// assert_eq!(align_up!(16usize, 8), 16);
/// assert_eq!(align_up!(0usize, 4), 0);
/// ```
#[macro_export]
macro_rules! align_up {
  ($value:expr, $align:expr) => {
    ($value + $align - 1) & !($align - 1)
  };
}

/// Rounds `value` down to the previous multiple of `align`.
///
/// `align` must be a power of two.
///
/// # Examples
///
/// ```rust
/// use rarena::align_down;
///
/// assert_eq!(align_down!(13usize, 8), 8);
/// assert_eq!(align_down!(16usize, 8), 16);
/// ```
#[macro_export]
macro_rules! align_down {
  ($value:expr, $align:expr) => {
    $value & !($align - 1)
  };
}

/// Overflow-safe [`align_up!`]: `None` when rounding would pass `usize::MAX`.
#[inline]
pub fn checked_align_up(
  value: usize,
  align: usize,
) -> Option<usize> {
  debug_assert!(align.is_power_of_two());
  value.checked_add(align - 1).map(|v| align_down!(v, align))
}

/// Same as [`align_down!`]. Rounding down can never overflow.
#[inline]
pub fn align_down(
  value: usize,
  align: usize,
) -> usize {
  debug_assert!(align.is_power_of_two());
  align_down!(value, align)
}
