use std::{alloc, alloc::Layout, ptr::NonNull};

use tracing::debug;

use crate::error::ArenaError;

/// Alignment of every pool's base address, the same guarantee `malloc` gives.
pub const POOL_ALIGN: usize = 16;

/// The arena's backing storage: one contiguous block of `capacity` bytes,
/// owned exclusively and freed at most once.
///
/// A released pool keeps its capacity so it can be reserved again.
pub struct Pool {
  base: Option<NonNull<u8>>,
  capacity: usize,
}

impl Pool {
  /// Reserves a fresh buffer of `capacity` bytes.
  pub fn reserve(capacity: usize) -> Result<Self, ArenaError> {
    let mut pool = Self {
      base: None,
      capacity,
    };
    pool.ensure()?;
    Ok(pool)
  }

  fn layout(&self) -> Result<Layout, ArenaError> {
    if self.capacity == 0 {
      return Err(ArenaError::ZeroCapacity);
    }
    Layout::from_size_align(self.capacity, POOL_ALIGN).map_err(|_| ArenaError::Reservation {
      capacity: self.capacity,
    })
  }

  /// Makes sure a buffer is held, reserving one if the pool was released.
  ///
  /// Returns `true` when a new buffer had to be reserved.
  pub fn ensure(&mut self) -> Result<bool, ArenaError> {
    if self.base.is_some() {
      return Ok(false);
    }

    let layout = self.layout()?;
    // SAFETY: `layout` has a non-zero size.
    let raw = unsafe { alloc::alloc(layout) };
    let base = NonNull::new(raw).ok_or(ArenaError::Reservation {
      capacity: self.capacity,
    })?;

    debug!(capacity = self.capacity, base = ?base, "reserved arena buffer");
    self.base = Some(base);
    Ok(true)
  }

  /// Frees the buffer if one is held. Calling it again is a no-op.
  ///
  /// Returns `true` when a buffer was actually freed.
  pub fn release(&mut self) -> bool {
    let Some(base) = self.base.take() else {
      return false;
    };

    // A held buffer was reserved with this exact layout, so it cannot fail here.
    if let Ok(layout) = self.layout() {
      // SAFETY: `base` came from `alloc::alloc(layout)` and is freed only once,
      // since `take()` cleared it above.
      unsafe { alloc::dealloc(base.as_ptr(), layout) };
    }

    debug!(capacity = self.capacity, base = ?base, "released arena buffer");
    true
  }

  #[inline]
  pub fn base(&self) -> Option<NonNull<u8>> {
    self.base
  }

  #[inline]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  #[inline]
  pub fn is_reserved(&self) -> bool {
    self.base.is_some()
  }
}

impl Drop for Pool {
  fn drop(&mut self) {
    self.release();
  }
}
