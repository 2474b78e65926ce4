//! Reaction-time round logic, free of timers and DOM so it can be driven by
//! the page and by tests alike.

pub const MIN_DELAY_MS: u32 = 1500;
pub const MAX_DELAY_MS: u32 = 4500;

/// Maps a uniform sample in `[0, 1]` onto the waiting delay.
pub fn random_delay_ms(sample: f64) -> u32 {
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0)
    } else {
        0.0
    };
    MIN_DELAY_MS + (sample * f64::from(MAX_DELAY_MS - MIN_DELAY_MS)).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactionPhase {
    Idle,
    Waiting { round: u64 },
    Ready { round: u64, shown_at: f64 },
    Finished { reaction_ms: u32 },
    TooSoon,
}

/// Delay the page must wait before calling [`ReactionGame::signal_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledSignal {
    pub round: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionGame {
    phase: ReactionPhase,
    round: u64,
    attempts: Vec<u32>,
}

impl Default for ReactionGame {
    fn default() -> Self {
        Self {
            phase: ReactionPhase::Idle,
            round: 0,
            attempts: Vec::new(),
        }
    }
}

impl ReactionGame {
    pub fn phase(&self) -> ReactionPhase {
        self.phase
    }

    pub fn attempts(&self) -> &[u32] {
        &self.attempts
    }

    /// Handles a press on the game button at `now_ms`.
    pub fn press(&mut self, now_ms: f64, sample: f64) -> Option<ScheduledSignal> {
        match self.phase {
            ReactionPhase::Idle | ReactionPhase::Finished { .. } | ReactionPhase::TooSoon => {
                self.round += 1;
                self.phase = ReactionPhase::Waiting { round: self.round };
                Some(ScheduledSignal {
                    round: self.round,
                    delay_ms: random_delay_ms(sample),
                })
            }
            ReactionPhase::Waiting { .. } => {
                self.phase = ReactionPhase::TooSoon;
                None
            }
            ReactionPhase::Ready { shown_at, .. } => {
                let reaction_ms = (now_ms - shown_at).max(0.0).round() as u32;
                self.attempts.push(reaction_ms);
                self.phase = ReactionPhase::Finished { reaction_ms };
                None
            }
        }
    }

    /// The waiting delay of `round` elapsed. Returns false for stale rounds.
    pub fn signal_ready(&mut self, round: u64, now_ms: f64) -> bool {
        match self.phase {
            ReactionPhase::Waiting { round: current } if current == round => {
                self.phase = ReactionPhase::Ready {
                    round,
                    shown_at: now_ms,
                };
                true
            }
            _ => false,
        }
    }

    pub fn last_ms(&self) -> Option<u32> {
        self.attempts.last().copied()
    }

    pub fn best_ms(&self) -> Option<u32> {
        self.attempts.iter().copied().min()
    }

    pub fn average_ms(&self) -> Option<u32> {
        if self.attempts.is_empty() {
            return None;
        }
        let total: u64 = self.attempts.iter().map(|&ms| u64::from(ms)).sum();
        Some((total as f64 / self.attempts.len() as f64).round() as u32)
    }

    /// Clears the history and abandons any round in flight.
    pub fn reset(&mut self) {
        self.attempts.clear();
        self.phase = ReactionPhase::Idle;
        self.round += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(game: &mut ReactionGame, at: f64) -> ScheduledSignal {
        game.press(at, 0.5).expect("round scheduled")
    }

    #[test]
    fn delay_stays_within_bounds() {
        assert_eq!(random_delay_ms(0.0), MIN_DELAY_MS);
        assert_eq!(random_delay_ms(1.0), MAX_DELAY_MS);
        assert_eq!(random_delay_ms(0.5), 3000);
        assert_eq!(random_delay_ms(-3.0), MIN_DELAY_MS);
        assert_eq!(random_delay_ms(7.0), MAX_DELAY_MS);
        assert_eq!(random_delay_ms(f64::NAN), MIN_DELAY_MS);
    }

    #[test]
    fn full_round_records_reaction_time() {
        let mut game = ReactionGame::default();
        let signal = start(&mut game, 0.0);
        assert_eq!(game.phase(), ReactionPhase::Waiting { round: signal.round });

        assert!(game.signal_ready(signal.round, 3000.0));
        assert!(game.press(3245.4, 0.1).is_none());

        assert_eq!(game.phase(), ReactionPhase::Finished { reaction_ms: 245 });
        assert_eq!(game.attempts(), &[245]);
    }

    #[test]
    fn early_press_is_a_false_start() {
        let mut game = ReactionGame::default();
        let signal = start(&mut game, 0.0);

        assert!(game.press(500.0, 0.1).is_none());
        assert_eq!(game.phase(), ReactionPhase::TooSoon);
        assert!(game.attempts().is_empty());

        // The abandoned delay must not turn the button green later.
        assert!(!game.signal_ready(signal.round, 3000.0));
        assert_eq!(game.phase(), ReactionPhase::TooSoon);
    }

    #[test]
    fn stale_signal_from_previous_round_is_ignored() {
        let mut game = ReactionGame::default();
        let first = start(&mut game, 0.0);
        game.press(10.0, 0.0);
        let second = start(&mut game, 20.0);
        assert_ne!(first.round, second.round);

        assert!(!game.signal_ready(first.round, 1600.0));
        assert_eq!(game.phase(), ReactionPhase::Waiting { round: second.round });
        assert!(game.signal_ready(second.round, 3000.0));
    }

    #[test]
    fn finished_or_false_start_press_starts_new_round() {
        let mut game = ReactionGame::default();
        let s = start(&mut game, 0.0);
        game.signal_ready(s.round, 100.0);
        game.press(300.0, 0.0);
        assert!(game.press(400.0, 0.0).is_some());

        game.press(500.0, 0.0);
        assert_eq!(game.phase(), ReactionPhase::TooSoon);
        assert!(game.press(600.0, 0.0).is_some());
    }

    #[test]
    fn statistics_and_reset() {
        let mut game = ReactionGame::default();
        assert_eq!(game.best_ms(), None);
        assert_eq!(game.average_ms(), None);

        for (start_at, reaction) in [(0.0, 300.0), (10_000.0, 200.0), (20_000.0, 251.0)] {
            let s = start(&mut game, start_at);
            game.signal_ready(s.round, start_at + 2000.0);
            game.press(start_at + 2000.0 + reaction, 0.0);
        }
        assert_eq!(game.last_ms(), Some(251));
        assert_eq!(game.best_ms(), Some(200));
        assert_eq!(game.average_ms(), Some(250));

        let pending = start(&mut game, 30_000.0);
        game.reset();
        assert!(game.attempts().is_empty());
        assert_eq!(game.phase(), ReactionPhase::Idle);
        assert!(!game.signal_ready(pending.round, 32_000.0));
    }
}
