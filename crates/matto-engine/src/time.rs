//! Time management — convert UCI `go` parameters to search limits.

use std::time::Duration;

use chess::Color;

/// Depth used when `go` carries no constraints at all.
const DEFAULT_DEPTH: u8 = 5;
/// Budget used when `go` carries no time information.
const DEFAULT_TIME: Duration = Duration::from_secs(5);
/// Depth cap for `go infinite`.
const INFINITE_DEPTH: u8 = 20;
/// Budget for `go infinite` — effectively unbounded.
const INFINITE_TIME: Duration = Duration::from_secs(3600);
/// Fraction of the remaining clock spent on one move.
const CLOCK_DIVISOR: u32 = 30;

/// Compute `(max_depth, time_limit)` from `go` parameters.
///
/// `depth` and `movetime` override the defaults, `infinite` maps to a deep
/// search under an hour-long budget, and a game clock (`wtime`/`btime`,
/// both required) overrides any budget with 1/30th of the mover's
/// remaining time.
pub fn limits_from_go(
    depth: Option<u8>,
    movetime: Option<Duration>,
    wtime: Option<Duration>,
    btime: Option<Duration>,
    infinite: bool,
    side: Color,
) -> (u8, Duration) {
    let (max_depth, mut time_limit) = if infinite {
        (INFINITE_DEPTH, INFINITE_TIME)
    } else {
        (
            depth.unwrap_or(DEFAULT_DEPTH),
            movetime.unwrap_or(DEFAULT_TIME),
        )
    };

    if let (Some(wtime), Some(btime)) = (wtime, btime) {
        let remaining = match side {
            Color::White => wtime,
            Color::Black => btime,
        };
        time_limit = remaining / CLOCK_DIVISOR;
    }

    (max_depth, time_limit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
