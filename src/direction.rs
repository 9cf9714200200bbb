use crate::align::{align_down, checked_align_up};

/// Where an allocation lands, as byte offsets from the start of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
  /// Offset of the first byte handed to the caller.
  pub offset: usize,
  /// Cursor offset after the allocation is committed.
  pub cursor: usize,
}

/// Growth policy of an [`Arena`](crate::Arena).
///
/// Cursors are byte offsets in `0..=capacity`. Alignment is computed on the
/// real address `base + offset`, so it holds whatever the pool's own alignment.
pub trait Direction {
  /// Short label used in diagnostics.
  const NAME: &'static str;

  /// Cursor offset of an empty pool.
  fn origin(capacity: usize) -> usize;

  /// Bytes committed so far, padding included.
  fn used(
    cursor: usize,
    capacity: usize,
  ) -> usize;

  /// Finds room for `bytes` bytes aligned to `align`, or `None` when the
  /// free space between the cursor and the far end cannot hold them.
  ///
  /// `align` must be a power of two and `cursor` must lie in `0..=capacity`.
  fn place(
    base: usize,
    capacity: usize,
    cursor: usize,
    align: usize,
    bytes: usize,
  ) -> Option<Placement>;
}

/// Forward growth: allocations start at the low end and move up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Up {}

/// Backward growth: allocations start at the high end and move down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Down {}

impl Direction for Up {
  const NAME: &'static str = "up";

  #[inline]
  fn origin(_capacity: usize) -> usize {
    0
  }

  #[inline]
  fn used(
    cursor: usize,
    _capacity: usize,
  ) -> usize {
    cursor
  }

  #[inline]
  fn place(
    base: usize,
    capacity: usize,
    cursor: usize,
    align: usize,
    bytes: usize,
  ) -> Option<Placement> {
    let raw = base.checked_add(cursor)?;
    let offset = checked_align_up(raw, align)? - base;

    // Compare against the free space rather than the end address so a huge
    // `bytes` cannot wrap around.
    if offset > capacity || bytes > capacity - offset {
      return None;
    }

    Some(Placement {
      offset,
      cursor: offset + bytes,
    })
  }
}

impl Direction for Down {
  const NAME: &'static str = "down";

  #[inline]
  fn origin(capacity: usize) -> usize {
    capacity
  }

  #[inline]
  fn used(
    cursor: usize,
    capacity: usize,
  ) -> usize {
    capacity - cursor
  }

  #[inline]
  fn place(
    base: usize,
    _capacity: usize,
    cursor: usize,
    align: usize,
    bytes: usize,
  ) -> Option<Placement> {
    if bytes > cursor {
      return None;
    }

    let candidate = base.checked_add(cursor - bytes)?;
    let aligned = align_down(candidate, align);

    if aligned < base {
      return None;
    }

    let offset = aligned - base;
    Some(Placement {
      offset,
      cursor: offset,
    })
  }
}
