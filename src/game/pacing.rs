use std::fmt;
use std::str::FromStr;

/// How the game loop paces moves on screen.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Pacing {
    /// No delay between moves, for large numbers of disks.
    Immediate,
    /// Fixed delay between moves.
    Delay,
    /// Wait for a keypress after every move.
    Manual,
    /// Float each disk up, across and down. Cute, but slow.
    Animated,
}

impl Pacing {
    pub const ALL: [Pacing; 4] = [
        Pacing::Immediate,
        Pacing::Delay,
        Pacing::Manual,
        Pacing::Animated,
    ];

    /// Maps the numeric speed selector. Anything outside 1-4 falls back to
    /// the animated display.
    pub fn from_speed(speed: i64) -> Self {
        match speed {
            1 => Pacing::Immediate,
            2 => Pacing::Delay,
            3 => Pacing::Manual,
            _ => Pacing::Animated,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Animated
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pacing_str = match self {
            Pacing::Immediate => "immediate",
            Pacing::Delay => "delay",
            Pacing::Manual => "manual",
            Pacing::Animated => "animated",
        };
        write!(f, "{}", pacing_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Pacing {
    type Err = ParseError;
    fn from_str(pacing: &str) -> Result<Self, Self::Err> {
        match pacing {
            "immediate" => Ok(Pacing::Immediate),
            "delay" => Ok(Pacing::Delay),
            "manual" => Ok(Pacing::Manual),
            "animated" => Ok(Pacing::Animated),
            _ => pacing
                .parse::<i64>()
                .map(Pacing::from_speed)
                .map_err(|_| {
                    "invalid speed; options are: 1 (immediate), 2 (delay), 3 (manual), 4 (animated)"
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_speeds() {
        assert_eq!(Pacing::from_str("1").unwrap(), Pacing::Immediate);
        assert_eq!(Pacing::from_str("2").unwrap(), Pacing::Delay);
        assert_eq!(Pacing::from_str("3").unwrap(), Pacing::Manual);
        assert_eq!(Pacing::from_str("4").unwrap(), Pacing::Animated);
    }

    #[test]
    fn test_out_of_range_speed_falls_back_to_animated() {
        assert_eq!(Pacing::from_str("0").unwrap(), Pacing::Animated);
        assert_eq!(Pacing::from_str("9").unwrap(), Pacing::Animated);
        assert_eq!(Pacing::from_str("-2").unwrap(), Pacing::Animated);
    }

    #[test]
    fn test_parse_names() {
        for pacing in Pacing::ALL {
            assert_eq!(Pacing::from_str(&pacing.to_string()).unwrap(), pacing);
        }
    }

    #[test]
    fn test_parse_garbage() {
        assert!(Pacing::from_str("fast").is_err());
    }

    #[test]
    fn test_default_is_animated() {
        assert_eq!(Pacing::default(), Pacing::Animated);
    }
}
