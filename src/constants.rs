// Board geometry: 9 cells in row-major order, top-left is 0.
pub const CELL_COUNT: usize = 9;

// The 8 winning lines (rows, columns, diagonals), scanned in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// Names used when a player leaves the entry field blank.
pub const DEFAULT_NAME_A: &str = "Alpha";
pub const DEFAULT_NAME_B: &str = "Beta";

// Longest name the entry fields accept (keeps the score panel readable).
pub const NAME_MAX_LEN: usize = 12;

// Event poll timeout for the main loop (in milliseconds).
pub const POLL_INTERVAL_MS: u64 = 100;
