//! Exit code constants for the aoc-scaffold CLI.
//!
//! - 0: Success
//! - 1: User error (bad day token, bad config, unknown generator)
//! - 2: Puzzle input fetch failure
//! - 3: File conflict (a destination file already exists)
//! - 4: Manifest failure (target missing or anchor not found)
//! - 5: Other filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid day token, unreadable config, or unknown generator.
pub const USER_ERROR: i32 = 1;

/// The puzzle input could not be downloaded.
pub const FETCH_FAILURE: i32 = 2;

/// A file the generator wanted to create already exists.
pub const FILE_CONFLICT: i32 = 3;

/// The manifest could not be updated.
pub const MANIFEST_FAILURE: i32 = 4;

/// Reading or writing the filesystem failed.
pub const IO_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            FETCH_FAILURE,
            FILE_CONFLICT,
            MANIFEST_FAILURE,
            IO_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
