use thiserror::Error;

/// Failures raised while reserving an arena's buffer.
///
/// Running out of space is not an error: `allocate` returns `None` for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArenaError {
  /// The requested capacity was zero.
  #[error("invalid arena capacity: size must be greater than 0")]
  ZeroCapacity,

  /// The platform could not provide a buffer of the requested size.
  #[error("failed to reserve {capacity} bytes for the arena buffer")]
  Reservation { capacity: usize },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    assert_eq!(
      ArenaError::ZeroCapacity.to_string(),
      "invalid arena capacity: size must be greater than 0"
    );
    assert_eq!(
      ArenaError::Reservation { capacity: 64 }.to_string(),
      "failed to reserve 64 bytes for the arena buffer"
    );
  }
}
