// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::{Duration, Instant};

/// Fires once every `interval`, checked from the frame loop.
#[derive(Debug)]
pub struct PeriodicClock {
    last_tick: Instant,
    interval: Duration,
}

impl PeriodicClock {
    /// Creates a clock whose first period starts now.
    pub fn new(interval: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            interval,
        }
    }

    /// Should be called once per frame.
    /// Returns `true`, and starts a new period, if the interval has passed.
    pub fn tick(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.interval {
            log::trace!("PeriodicClock: period elapsed");
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PeriodicClock {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_fires_every_tick() {
        let mut clock = PeriodicClock::new(Duration::ZERO);
        assert!(clock.tick());
        assert!(clock.tick());
    }

    #[test]
    fn long_interval_does_not_fire_early() {
        let mut clock = PeriodicClock::default();
        assert_eq!(clock.interval(), Duration::from_secs(1));
        assert!(!clock.tick());
    }
}
