use std::{alloc::Layout, fmt, marker::PhantomData, ptr::NonNull};

use tracing::{debug, trace, warn};

use crate::{
  direction::{Direction, Down, Up},
  error::ArenaError,
  pool::Pool,
  probe::Probe,
};

/// Fixed-capacity bump arena growing in direction `D`.
///
/// Every allocation is carved out of one buffer reserved up front. There is
/// no way to free a single allocation: [`reset`](Arena::reset) reclaims the
/// whole buffer at once, and dropping the arena frees it.
///
/// Pointers returned by [`allocate`](Arena::allocate) stay valid until the
/// next `reset`, `release`, or drop. The arena does not track them; keeping
/// them past that point is the caller's mistake to avoid.
pub struct Arena<D: Direction> {
  pool: Pool,
  /// Offset of the boundary between committed and free space.
  cursor: usize,
  _direction: PhantomData<D>,
}

/// Arena placing allocations at increasing addresses.
pub type UpArena = Arena<Up>;

/// Arena placing allocations at decreasing addresses.
pub type DownArena = Arena<Down>;

impl<D: Direction> Arena<D> {
  /// Reserves an arena of `capacity` bytes.
  ///
  /// Fails with [`ArenaError::ZeroCapacity`] for a zero capacity and with
  /// [`ArenaError::Reservation`] when the platform cannot provide the buffer.
  pub fn new(capacity: usize) -> Result<Self, ArenaError> {
    let pool = Pool::reserve(capacity)?;

    Ok(Self {
      pool,
      cursor: D::origin(capacity),
      _direction: PhantomData,
    })
  }

  /// Same as [`new`](Arena::new) with the capacity fixed at compile time.
  ///
  /// ```rust
  /// use rarena::UpArena;
  ///
  /// let arena = UpArena::sized::<{ 20 * size_of::<i32>() }>().unwrap();
  /// assert_eq!(arena.capacity(), 80);
  /// ```
  pub fn sized<const N: usize>() -> Result<Self, ArenaError> {
    Self::new(N)
  }

  /// Allocates room for `n` contiguous values of `T`.
  ///
  /// Returns `None` when `n` is zero, when `T` is zero-sized, or when the
  /// remaining space cannot hold the request. The memory is uninitialized.
  ///
  /// ```rust
  /// use rarena::UpArena;
  ///
  /// let mut arena = UpArena::new(20 * size_of::<i32>()).unwrap();
  ///
  /// assert!(arena.allocate::<i32>(10).is_some());
  /// assert!(arena.allocate::<i32>(10).is_some());
  /// assert!(arena.allocate::<i32>(10).is_none());
  /// ```
  #[inline]
  pub fn allocate<T>(
    &mut self,
    n: usize,
  ) -> Option<NonNull<T>> {
    self
      .allocate_layout(Layout::new::<T>(), n)
      .map(NonNull::cast)
  }

  /// Untyped [`allocate`](Arena::allocate): room for `n` elements of `element`.
  ///
  /// Each element occupies `element.pad_to_align().size()` bytes and the
  /// returned address is aligned to `element.align()`.
  pub fn allocate_layout(
    &mut self,
    element: Layout,
    n: usize,
  ) -> Option<NonNull<u8>> {
    if n == 0 || element.size() == 0 {
      return None;
    }

    match self.pool.ensure() {
      Ok(true) => self.cursor = D::origin(self.capacity()),
      Ok(false) => {},
      Err(error) => {
        warn!(%error, direction = D::NAME, "could not re-reserve released arena");
        return None;
      },
    }

    let base = self.pool.base()?;
    let capacity = self.capacity();

    let Some(bytes) = element.pad_to_align().size().checked_mul(n) else {
      debug!(size = element.size(), n, "arena request overflows usize");
      return None;
    };

    let Some(placement) =
      D::place(base.as_ptr() as usize, capacity, self.cursor, element.align(), bytes)
    else {
      debug!(
        direction = D::NAME,
        bytes,
        align = element.align(),
        remaining = self.remaining(),
        "arena exhausted"
      );
      return None;
    };

    self.cursor = placement.cursor;
    trace!(
      direction = D::NAME,
      offset = placement.offset,
      bytes,
      cursor = self.cursor,
      "arena allocation"
    );

    // SAFETY: `place` guarantees `offset + bytes <= capacity`, so the
    // result stays inside the buffer.
    Some(unsafe { base.add(placement.offset) })
  }

  /// Moves `value` into the arena and returns a reference to it.
  ///
  /// `T`'s destructor will never run. Returns `None` when the arena is full
  /// or `T` is zero-sized.
  pub fn alloc_value<T>(
    &mut self,
    value: T,
  ) -> Option<&mut T> {
    let ptr = self.allocate::<T>(1)?;

    // SAFETY: `ptr` is aligned, in bounds, and not handed out to anyone else.
    unsafe {
      ptr.as_ptr().write(value);
      Some(&mut *ptr.as_ptr())
    }
  }

  /// Frees the buffer and reserves a fresh one of the same capacity.
  ///
  /// All pointers handed out before the call become dangling. If the new
  /// buffer cannot be reserved the arena is left released and will try
  /// again on the next allocation.
  pub fn reset(&mut self) -> Result<(), ArenaError> {
    self.release();
    self.pool.ensure()?;
    debug!(direction = D::NAME, capacity = self.capacity(), "arena reset");
    Ok(())
  }

  /// Frees the buffer without reserving a new one. Calling it twice is a no-op.
  ///
  /// The next allocation reserves a buffer again at the original capacity.
  pub fn release(&mut self) {
    self.pool.release();
    self.cursor = D::origin(self.capacity());
  }

  #[inline]
  pub fn capacity(&self) -> usize {
    self.pool.capacity()
  }

  #[inline]
  pub fn is_reserved(&self) -> bool {
    self.pool.is_reserved()
  }

  /// Bytes committed so far, alignment padding included.
  #[inline]
  pub fn used(&self) -> usize {
    if self.is_reserved() {
      D::used(self.cursor, self.capacity())
    } else {
      0
    }
  }

  /// Bytes between the cursor and the far end of the buffer.
  #[inline]
  pub fn remaining(&self) -> usize {
    self.capacity() - self.used()
  }

  /// Cursor as an offset from the start of the buffer, if one is held.
  #[inline]
  pub fn cursor(&self) -> Option<usize> {
    self.pool.base().map(|_| self.cursor)
  }

  /// Address of the cursor, if a buffer is held.
  pub fn cursor_addr(&self) -> Option<*const u8> {
    self
      .pool
      .base()
      .map(|base| base.as_ptr().wrapping_add(self.cursor) as *const u8)
  }

  /// Snapshot of the arena's state for diagnostics.
  pub fn probe(&self) -> Probe {
    Probe {
      direction: D::NAME,
      capacity: self.capacity(),
      used: self.used(),
      remaining: self.remaining(),
      base: self.pool.base().map(|base| base.as_ptr() as *const u8),
      cursor: self.cursor_addr(),
    }
  }
}

impl<D: Direction> fmt::Debug for Arena<D> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("Arena")
      .field("direction", &D::NAME)
      .field("capacity", &self.capacity())
      .field("used", &self.used())
      .field("reserved", &self.is_reserved())
      .finish()
  }
}
