pub const SUCCESS: i32 = 0;
/// Missing, unreadable or malformed input
pub const INPUT_ERROR: i32 = 1;
/// Failure while producing or writing output
pub const EXECUTION_ERROR: i32 = 2;
/// Batch finished with some files failing
pub const PARTIAL_FAILURE: i32 = 3;
