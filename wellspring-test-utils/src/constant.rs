//! Shared constant values for test fixtures.

/// Display name used for the default test user.
pub static TEST_DISPLAY_NAME: &str = "Test User";

/// Lifestyle inputs used by the default wellness entry fixture:
/// (sleep_hours, stress_level, caffeine_intake, alcohol_intake).
pub static TEST_ENTRY_INPUTS: (f64, i16, i32, i32) = (8.0, 2, 100, 0);

/// Wellness score matching [`TEST_ENTRY_INPUTS`].
pub static TEST_ENTRY_SCORE: f64 = 96.67;
