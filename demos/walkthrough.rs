use std::{alloc::Layout, io::Read};

use rarena::{Arena, Direction, DownArena, UpArena, print_alloc, print_probe, program_break};

/// Waits until the user presses ENTER.
/// Useful when you want to inspect memory state with tools like `pmap` or
/// `gdb` between steps. Pass `--no-wait` to run straight through.
fn block_until_enter_pressed(wait: bool) {
  if !wait {
    return;
  }
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    program_break(),
  );
}

/// Allocates one `T`, prints where it landed and how the cursor moved.
fn allocate_and_show<T, D: Direction>(
  arena: &mut Arena<D>,
  n: usize,
  label: &str,
) -> Option<*mut T> {
  println!("\n{label}");
  let ptr = arena.allocate::<T>(n);

  match ptr {
    Some(ptr) => {
      let layout = Layout::array::<T>(n).unwrap_or(Layout::new::<T>());
      print_alloc(layout, ptr.as_ptr() as *const u8);
    },
    None => println!("No space left for {n} x {} bytes", size_of::<T>()),
  }
  print_probe(&arena.probe());

  ptr.map(|ptr| ptr.as_ptr())
}

fn walk<D: Direction>(
  mut arena: Arena<D>,
  wait: bool,
) {
  println!("\n==================== {} arena ====================", D::NAME);
  print_probe(&arena.probe());
  block_until_enter_pressed(wait);

  // --------------------------------------------------------------------
  // 1) A single u32 (4 bytes, 4-byte aligned).
  // --------------------------------------------------------------------
  if let Some(first) = allocate_and_show::<u32, D>(&mut arena, 1, "[1] Allocate u32") {
    unsafe {
      first.write(0xDEADBEEF);
      println!("[1] Value written = 0x{:X}", first.read());
    }
  }
  block_until_enter_pressed(wait);

  // --------------------------------------------------------------------
  // 2) 12 bytes, to leave the cursor at an odd spot.
  // --------------------------------------------------------------------
  if let Some(second) = allocate_and_show::<u8, D>(&mut arena, 12, "[2] Allocate [u8; 12]") {
    unsafe { std::ptr::write_bytes(second, 0xAB, 12) };
    println!("[2] Initialized with 0xAB");
  }
  block_until_enter_pressed(wait);

  // --------------------------------------------------------------------
  // 3) A u64: the cursor is padded to the next 8-byte boundary.
  // --------------------------------------------------------------------
  if let Some(third) =
    allocate_and_show::<u64, D>(&mut arena, 1, "[3] Allocate u64 (observe alignment)")
  {
    unsafe {
      third.write(0x1122334455667788);
      println!("[3] Value written = 0x{:X}", third.read());
    }
  }
  block_until_enter_pressed(wait);

  // --------------------------------------------------------------------
  // 4) More than what is left: the arena reports exhaustion.
  // --------------------------------------------------------------------
  allocate_and_show::<u16, D>(&mut arena, 1024, "[4] Allocate [u16; 1024] (too big)");
  block_until_enter_pressed(wait);

  // --------------------------------------------------------------------
  // 5) Reset: the whole buffer is reclaimed and every pointer above dangles.
  // --------------------------------------------------------------------
  println!("\n[5] Reset");
  if let Err(error) = arena.reset() {
    println!("[5] Reset failed: {error}");
    return;
  }
  print_probe(&arena.probe());
  allocate_and_show::<u16, D>(&mut arena, 16, "[5] Allocate [u16; 16] after reset");
  block_until_enter_pressed(wait);

  // --------------------------------------------------------------------
  // 6) Release, then allocate again: the buffer is reserved lazily.
  // --------------------------------------------------------------------
  println!("\n[6] Release");
  arena.release();
  print_probe(&arena.probe());
  allocate_and_show::<u32, D>(&mut arena, 4, "[6] Allocate [u32; 4] after release");
  block_until_enter_pressed(wait);
}

fn main() {
  let wait = !std::env::args().any(|arg| arg == "--no-wait");

  print_program_break("start");

  match UpArena::new(256) {
    Ok(arena) => walk(arena, wait),
    Err(error) => println!("Could not create up arena: {error}"),
  }

  match DownArena::new(256) {
    Ok(arena) => walk(arena, wait),
    Err(error) => println!("Could not create down arena: {error}"),
  }

  match UpArena::new(0) {
    Ok(_) => println!("\nUnexpectedly created a zero-sized arena"),
    Err(error) => println!("\nZero capacity is rejected: {error}"),
  }

  print_program_break("end");
  println!("\nEnd of example. Dropping the arenas freed their buffers.");
}
