//! Wiring of the car. Everything here is fixed at compile time.
//!
//! | L298N | Pico  |
//! |-------|-------|
//! | ENA   | GPIO5 |
//! | ENB   | GPIO6 |
//! | IN1   | GPIO7 |
//! | IN2   | GPIO8 |
//! | IN3   | GPIO9 |
//! | IN4   | GPIO10 |
//!
//! Pair A is the left motor pair, pair B the right one. The right pair is
//! mounted mirrored, so its "forward" is IN4 high rather than IN3 high.

/// IN1 high, IN2 low drives the left pair forward.
pub const LEFT_PAIR_FORWARD: typebool::True = typebool::True;

/// IN3 high, IN4 low drives the right pair backward.
pub const RIGHT_PAIR_FORWARD: typebool::False = typebool::False;

/// Maximum level of `log` records sent over USB.
pub const USB_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
