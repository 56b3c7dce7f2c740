//! Fake network scan: a progress value and a growing list of addresses.

use rand::Rng;

use crate::address::fake_address;

/// Progress added per tick while scanning.
pub const PROGRESS_STEP: f64 = 0.0025;

/// An address is discovered with probability `1 / DISCOVERY_ODDS` per tick.
pub const DISCOVERY_ODDS: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Scanning,
    Complete,
    Stopped,
}

/// What a single tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanTick {
    pub discovered: Option<String>,
    /// Progress reached 1 on this tick.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct ScanState {
    pub in_progress: bool,
    /// In `[0, 1]`.
    pub progress: f64,
    pub addresses: Vec<String>,
    progress_step: f64,
    discovery_odds: u32,
}

impl ScanState {
    pub fn new(progress_step: f64, discovery_odds: u32) -> Self {
        Self {
            in_progress: false,
            progress: 0.0,
            addresses: Vec::new(),
            progress_step,
            discovery_odds: discovery_odds.max(1),
        }
    }

    /// Start/Stop button.
    pub fn toggle(&mut self) {
        self.in_progress = !self.in_progress;
    }

    pub fn status(&self) -> ScanStatus {
        if self.in_progress && self.progress < 1.0 {
            ScanStatus::Scanning
        } else if self.progress >= 1.0 {
            ScanStatus::Complete
        } else {
            ScanStatus::Stopped
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ScanTick {
        let mut tick = ScanTick::default();
        if self.status() != ScanStatus::Scanning {
            return tick;
        }

        if rng.gen_range(0..self.discovery_odds) == 0 {
            let address = fake_address(rng);
            self.addresses.push(address.clone());
            tick.discovered = Some(address);
        }

        self.progress += self.progress_step;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            tick.completed = true;
            log::info!("scan complete: {} addresses", self.addresses.len());
        }
        tick
    }

    pub fn reset(&mut self) {
        self.in_progress = false;
        self.progress = 0.0;
        self.addresses.clear();
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new(PROGRESS_STEP, DISCOVERY_ODDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stopped_scan_does_not_grow() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut scan = ScanState::new(PROGRESS_STEP, 1);
        for _ in 0..100 {
            assert_eq!(scan.tick(&mut rng), ScanTick::default());
        }
        assert!(scan.addresses.is_empty());
        assert_eq!(scan.progress, 0.0);
        assert_eq!(scan.status(), ScanStatus::Stopped);
    }

    #[test]
    fn addresses_only_grow_while_scanning() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut scan = ScanState::new(0.001, 1);
        scan.toggle();

        let mut last = 0;
        for _ in 0..50 {
            scan.tick(&mut rng);
            assert!(scan.addresses.len() > last);
            last = scan.addresses.len();
        }

        scan.toggle();
        for _ in 0..50 {
            scan.tick(&mut rng);
        }
        assert_eq!(scan.addresses.len(), last);
    }

    #[test]
    fn tick_reports_the_address_it_appended() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut scan = ScanState::new(0.01, 1);
        scan.toggle();

        for _ in 0..20 {
            let tick = scan.tick(&mut rng);
            assert_eq!(tick.discovered.as_ref(), scan.addresses.last());
        }
        assert_eq!(scan.addresses.len(), 20);
    }

    #[test]
    fn completes_after_enough_ticks_and_clamps() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scan = ScanState::default();
        scan.toggle();

        let mut completed_at = None;
        for n in 1..=1_000 {
            if scan.tick(&mut rng).completed {
                completed_at = Some(n);
                break;
            }
        }
        // 0.0025 per tick reaches 1 after about 400 ticks.
        let n = completed_at.unwrap();
        assert!((399..=401).contains(&n), "completed at {n}");
        assert_eq!(scan.progress, 1.0);
        assert_eq!(scan.status(), ScanStatus::Complete);

        // Further ticks do nothing, even if the button is toggled.
        let len = scan.addresses.len();
        scan.toggle();
        scan.toggle();
        assert_eq!(scan.tick(&mut rng), ScanTick::default());
        assert_eq!(scan.addresses.len(), len);
    }

    #[test]
    fn discovery_rate_is_roughly_one_in_31() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut scan = ScanState::new(0.0, DISCOVERY_ODDS);
        scan.toggle();
        for _ in 0..31_000 {
            scan.tick(&mut rng);
        }
        let found = scan.addresses.len();
        assert!((800..=1_200).contains(&found), "found {found}");
    }

    #[test]
    fn reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut scan = ScanState::new(0.1, 1);
        scan.toggle();
        scan.tick(&mut rng);
        scan.reset();
        assert!(!scan.in_progress);
        assert_eq!(scan.progress, 0.0);
        assert!(scan.addresses.is_empty());
    }
}
