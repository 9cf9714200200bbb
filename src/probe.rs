use std::{alloc::Layout, fmt};

/// Read-only snapshot of an arena, taken by [`Arena::probe`](crate::Arena::probe).
///
/// Addresses are `None` while the arena's buffer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
  pub direction: &'static str,
  pub capacity: usize,
  pub used: usize,
  pub remaining: usize,
  pub base: Option<*const u8>,
  pub cursor: Option<*const u8>,
}

impl fmt::Display for Probe {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match (self.base, self.cursor) {
      (Some(base), Some(cursor)) => write!(
        f,
        "[{}] base = {:?}, cursor = {:?}, used = {}/{} bytes, remaining = {}",
        self.direction, base, cursor, self.used, self.capacity, self.remaining
      ),
      _ => write!(
        f,
        "[{}] released, capacity = {} bytes",
        self.direction, self.capacity
      ),
    }
  }
}

/// Current program break, i.e. `sbrk(0)`.
pub fn program_break() -> *const u8 {
  // SAFETY: a zero increment only reads the break.
  unsafe { libc::sbrk(0) as *const u8 }
}

/// Prints one allocation's size and address next to the program break.
pub fn print_alloc(
  layout: Layout,
  addr: *const u8,
) {
  println!(
    "Allocated {} bytes (align {}), address = {:?}, addr % align = {}, program break = {:?}",
    layout.size(),
    layout.align(),
    addr,
    addr as usize % layout.align(),
    program_break()
  );
}

/// Prints an arena snapshot.
pub fn print_probe(probe: &Probe) {
  println!("{probe}");
}

#[cfg(test)]
mod tests {
  use crate::{DownArena, UpArena};

  #[test]
  fn test_probe_tracks_cursor() {
    let mut arena = UpArena::new(64).unwrap();

    let before = arena.probe();
    assert_eq!(before.direction, "up");
    assert_eq!(before.used, 0);
    assert_eq!(before.remaining, 64);
    assert_eq!(before.base, before.cursor);

    arena.allocate::<u32>(3).unwrap();

    let after = arena.probe();
    assert_eq!(after.used, 12);
    assert_eq!(after.remaining, 52);
    assert_eq!(after.cursor.unwrap() as usize - after.base.unwrap() as usize, 12);
  }

  #[test]
  fn test_probe_starts_at_high_end() {
    let mut arena = DownArena::new(64).unwrap();

    let probe = arena.probe();
    assert_eq!(probe.cursor.unwrap() as usize - probe.base.unwrap() as usize, 64);

    arena.allocate::<u16>(2).unwrap();
    assert_eq!(arena.probe().remaining, 60);
  }

  #[test]
  fn test_probe_has_no_side_effects() {
    let mut arena = DownArena::new(32).unwrap();
    arena.allocate::<u8>(5).unwrap();

    assert_eq!(arena.probe(), arena.probe());
    assert_eq!(arena.used(), 5);
  }

  #[test]
  fn test_display() {
    let mut arena = UpArena::new(16).unwrap();
    arena.allocate::<u8>(4).unwrap();

    let text = arena.probe().to_string();
    assert!(text.starts_with("[up] base = "));
    assert!(text.ends_with("used = 4/16 bytes, remaining = 12"));

    arena.release();
    assert_eq!(arena.probe().to_string(), "[up] released, capacity = 16 bytes");
  }
}
