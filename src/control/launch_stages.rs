/// Pre-ignition countdown, one count per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchSequence {
    remaining: u32,
}

impl LaunchSequence {
    pub fn new(start: u32) -> Self {
        LaunchSequence { remaining: start }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Counts down once and reports whether the sequence has finished.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_to_one() {
        let mut sequence = LaunchSequence::new(3);
        assert_eq!(sequence.remaining(), 3);

        assert!(!sequence.tick());
        assert_eq!(sequence.remaining(), 2);
        assert!(!sequence.tick());
        assert_eq!(sequence.remaining(), 1);
        assert!(sequence.tick());
        assert!(sequence.is_complete());
    }

    #[test]
    fn test_zero_start_completes_on_first_tick() {
        let mut sequence = LaunchSequence::new(0);
        assert!(sequence.tick());
        assert!(sequence.tick());
        assert_eq!(sequence.remaining(), 0);
    }
}
