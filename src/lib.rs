//! # rarena - Fixed-Capacity Bump Arenas
//!
//! This crate provides a **bump allocator** (also known as an arena allocator)
//! that carves aligned regions out of one buffer reserved up front.
//!
//! ## Overview
//!
//! An arena hands out memory by moving a single cursor and never frees
//! individual allocations. The whole buffer is reclaimed at once by a reset,
//! or freed when the arena is dropped.
//!
//! ```text
//!   Up Arena (forward):
//!
//!   ┌─────┬─────┬───┬─────┬──────────────────────────────────────────────┐
//!   │ A1  │ A2  │pad│ A3  │                Free Space                    │
//!   └─────┴─────┴───┴─────┴──────────────────────────────────────────────┘
//!   ▲                     ▲                                              ▲
//!   base               cursor ──▶                                base + capacity
//!
//!   Down Arena (backward):
//!
//!   ┌──────────────────────────────────────────────┬─────┬───┬─────┬─────┐
//!   │                Free Space                    │ A3  │pad│ A2  │ A1  │
//!   └──────────────────────────────────────────────┴─────┴───┴─────┴─────┘
//!   ▲                                              ▲                     ▲
//!   base                                   ◀── cursor            base + capacity
//!
//!   Allocation: O(1) - align the cursor and move it.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rarena
//!   ├── align      - Alignment macros (align_up!, align_down!)
//!   ├── direction  - Growth policies (Up, Down)
//!   ├── pool       - Owned backing buffer (internal)
//!   ├── arena      - Arena<D> implementation
//!   ├── probe      - Diagnostics (Probe, print_alloc)
//!   └── error      - ArenaError
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rarena::{DownArena, UpArena};
//!
//! let mut arena = UpArena::new(20 * size_of::<i32>()).unwrap();
//!
//! let ints = arena.allocate::<i32>(10).unwrap();
//! unsafe { ints.as_ptr().write(42) };
//!
//! // 10 more fit exactly; after that the arena is exhausted.
//! assert!(arena.allocate::<i32>(10).is_some());
//! assert!(arena.allocate::<i32>(10).is_none());
//!
//! // Reclaim everything at once.
//! arena.reset().unwrap();
//! assert!(arena.allocate::<i32>(10).is_some());
//!
//! // Same contract, growing from the high end.
//! let mut down = DownArena::new(64).unwrap();
//! let value = down.alloc_value(7u64).unwrap();
//! assert_eq!(*value, 7);
//! ```
//!
//! ## Alignment
//!
//! Alignment is computed on real addresses. An up arena rounds the cursor
//! up before placing the request:
//!
//! ```text
//!   aligned = (cursor + align - 1) & !(align - 1)
//! ```
//!
//! A down arena subtracts the request first and rounds down:
//!
//! ```text
//!   aligned = (cursor - bytes) & !(align - 1)
//! ```
//!
//! Bounds are checked against the free space left, never against a summed
//! address, so oversized requests cannot wrap around.
//!
//! ## Errors
//!
//! - [`ArenaError::ZeroCapacity`]: construction with a capacity of zero.
//! - [`ArenaError::Reservation`]: the buffer could not be reserved.
//! - Exhaustion is not an error: `allocate` returns `None`, as it does for a
//!   zero count.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: arenas are neither `Send` nor `Sync`
//! - **No individual frees**: only reset or drop reclaim memory
//! - **No growth**: the capacity is fixed at construction
//! - **No destructors**: values placed in the arena are never dropped
//!
//! ## Safety
//!
//! Allocations are returned as raw [`NonNull`](std::ptr::NonNull) pointers to
//! uninitialized memory. They dangle after `reset`, `release`, or drop;
//! dereferencing them past that point is undefined behavior.

pub mod align;
mod arena;
mod direction;
mod error;
mod pool;
mod probe;

pub use arena::{Arena, DownArena, UpArena};
pub use direction::{Direction, Down, Placement, Up};
pub use error::ArenaError;
pub use pool::POOL_ALIGN;
pub use probe::{Probe, print_alloc, print_probe, program_break};
