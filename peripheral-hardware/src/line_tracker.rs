//! Three reflective sensors (left, center, right) that tell whether the car
//! is over a line. A sensor pulls its pin low when it sees the line.

use embedded_hal::digital::InputPin;

/// What a single sensor sees. `Dark` means it is on the line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineState {
    Light,
    Dark,
}

impl From<bool> for LineState {
    fn from(is_dark: bool) -> Self {
        match is_dark {
            true => LineState::Dark,
            false => LineState::Light,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineTrackerDirection {
    Left,
    Center,
    Right,
}

/// The three sensors read together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinePosition {
    pub left: LineState,
    pub mid: LineState,
    pub right: LineState,
}

/// Where the line is relative to the car.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineBiasDirection {
    /// Only the left sensor sees the line.
    VeryLeft,
    /// The center and left sensors see the line.
    SlightlyLeft,
    /// Only the center sensor sees the line.
    Center,
    /// The center and right sensors see the line.
    SlightlyRight,
    /// Only the right sensor sees the line.
    VeryRight,
    /// No line under the car.
    NotOnLine,
    /// All three sensors see the line at once.
    OnPerpendicularLine,
}

impl LineBiasDirection {
    /// Collapse to the nearest sensor: both left cases to `Left`, both right cases to `Right`,
    /// everything else to `Center`.
    pub fn to_line_tracker_direction(self) -> LineTrackerDirection {
        match self {
            LineBiasDirection::VeryLeft | LineBiasDirection::SlightlyLeft => LineTrackerDirection::Left,
            LineBiasDirection::VeryRight | LineBiasDirection::SlightlyRight => {
                LineTrackerDirection::Right
            }
            _ => LineTrackerDirection::Center,
        }
    }
}

impl LinePosition {
    pub fn new(left: LineState, mid: LineState, right: LineState) -> Self {
        Self { left, mid, right }
    }

    /// Bias when following a dark line on a light floor.
    pub fn get_bias_direction_dark(&self) -> LineBiasDirection {
        Self::bias(self.left, self.mid, self.right, LineState::Dark)
    }

    /// Bias when following a light line on a dark floor.
    pub fn get_bias_direction_light(&self) -> LineBiasDirection {
        Self::bias(self.left, self.mid, self.right, LineState::Light)
    }

    fn bias(left: LineState, mid: LineState, right: LineState, line: LineState) -> LineBiasDirection {
        match (left == line, mid == line, right == line) {
            (false, false, true) => LineBiasDirection::VeryRight,
            (false, true, true) => LineBiasDirection::SlightlyRight,
            (false, true, false) => LineBiasDirection::Center,
            (true, true, false) => LineBiasDirection::SlightlyLeft,
            (true, false, false) => LineBiasDirection::VeryLeft,
            (false, false, false) => LineBiasDirection::NotOnLine,
            (true, true, true) => LineBiasDirection::OnPerpendicularLine,
            // Straddling two parallel lines; treated as no line.
            (true, false, true) => LineBiasDirection::NotOnLine,
        }
    }
}

pub struct LineTracker<L, C, R> {
    pin_left: L,
    pin_center: C,
    pin_right: R,
}

impl<L, C, R, E> LineTracker<L, C, R>
where
    L: InputPin<Error = E>,
    C: InputPin<Error = E>,
    R: InputPin<Error = E>,
{
    pub fn new(pin_left: L, pin_center: C, pin_right: R) -> Self {
        Self {
            pin_left,
            pin_center,
            pin_right,
        }
    }

    pub fn measure_direction(&mut self, direction: LineTrackerDirection) -> Result<LineState, E> {
        let is_dark = match direction {
            LineTrackerDirection::Left => self.pin_left.is_low()?,
            LineTrackerDirection::Center => self.pin_center.is_low()?,
            LineTrackerDirection::Right => self.pin_right.is_low()?,
        };
        Ok(LineState::from(is_dark))
    }

    pub fn measure_full(&mut self) -> Result<LinePosition, E> {
        Ok(LinePosition {
            left: LineState::from(self.pin_left.is_low()?),
            mid: LineState::from(self.pin_center.is_low()?),
            right: LineState::from(self.pin_right.is_low()?),
        })
    }

    pub fn release(self) -> (L, C, R) {
        (self.pin_left, self.pin_center, self.pin_right)
    }
}
