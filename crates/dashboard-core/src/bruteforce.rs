//! Brute-force simulation against the password typed into the dashboard.
//!
//! A session runs in two phases for each target:
//!
//! 1. **Dictionary**: compare the target against every line of the wordlist,
//!    a bounded batch per step.
//! 2. **Exhaustive**: once the wordlist runs out without a match, enumerate
//!    strings over [`CHARSET`] in odometer order, up to the target's length,
//!    a bounded batch per step.
//!
//! Changing the target restarts both phases and re-reads the wordlist from
//! disk on the next step. Stepping an already cracked session keeps the
//! exhaustive enumeration running; callers that only want the animation
//! until the crack stop stepping once [`BruteForceSession::is_cracked`].

use serde::Serialize;

use crate::store::WordlistFile;

/// Alphabet for the exhaustive phase, in enumeration order.
pub const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Wordlist entries compared per step.
pub const DICTIONARY_BATCH: usize = 1000;

/// Exhaustive candidates compared per step.
pub const EXHAUSTIVE_BATCH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No target yet, or the target changed and the wordlist is due for a reload.
    Idle,
    Dictionary,
    Exhaustive,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Dictionary => "dictionary",
            Phase::Exhaustive => "exhaustive",
        };
        f.write_str(name)
    }
}

/// Odometer over [`CHARSET`]: the last position cycles fastest, a full carry
/// grows the string by one, and growing past `max_len` wraps back to length 1.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    max_len: usize,
    current: String,
}

impl Odometer {
    /// Starts at the first character of the alphabet. `max_len` is at least 1.
    pub fn new(max_len: usize) -> Self {
        let mut odometer = Self {
            digits: vec![0],
            max_len: max_len.max(1),
            current: String::new(),
        };
        odometer.render();
        odometer
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn advance(&mut self) {
        let mut i = self.digits.len();
        loop {
            if i == 0 {
                let grown = self.digits.len() + 1;
                let len = if grown <= self.max_len { grown } else { 1 };
                self.digits.clear();
                self.digits.resize(len, 0);
                break;
            }
            i -= 1;
            if self.digits[i] + 1 < CHARSET.len() {
                self.digits[i] += 1;
                break;
            }
            self.digits[i] = 0;
        }
        self.render();
    }

    fn render(&mut self) {
        self.current.clear();
        self.current
            .extend(self.digits.iter().map(|&d| CHARSET[d] as char));
    }
}

impl Iterator for Odometer {
    type Item = String;

    /// Never ends; the sequence wraps after the longest length.
    fn next(&mut self) -> Option<String> {
        let candidate = self.current.clone();
        self.advance();
        Some(candidate)
    }
}

pub struct BruteForceSession {
    wordlist: WordlistFile,
    dictionary_batch: usize,
    exhaustive_batch: usize,

    target: String,
    guess: String,
    cracked: bool,
    cracked_in: Option<Phase>,
    phase: Phase,
    attempts: u64,

    words: Vec<String>,
    cursor: usize,
    odometer: Option<Odometer>,
}

impl BruteForceSession {
    pub fn new(wordlist: WordlistFile) -> Self {
        Self {
            wordlist,
            dictionary_batch: DICTIONARY_BATCH,
            exhaustive_batch: EXHAUSTIVE_BATCH,
            target: String::new(),
            guess: String::new(),
            cracked: false,
            cracked_in: None,
            phase: Phase::Idle,
            attempts: 0,
            words: Vec::new(),
            cursor: 0,
            odometer: None,
        }
    }

    /// Override the per-step batch sizes. Zero is treated as one.
    pub fn with_batches(mut self, dictionary: usize, exhaustive: usize) -> Self {
        self.dictionary_batch = dictionary.max(1);
        self.exhaustive_batch = exhaustive.max(1);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The candidate most recently compared or about to be compared.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn is_cracked(&self) -> bool {
        self.cracked
    }

    /// Phase in which the target was matched, if it was.
    pub fn cracked_in(&self) -> Option<Phase> {
        self.cracked_in
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Candidates compared since the last restart.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn wordlist(&self) -> &WordlistFile {
        &self.wordlist
    }

    /// Point the session at a different wordlist. Takes effect from a restart.
    pub fn set_wordlist(&mut self, wordlist: WordlistFile) {
        self.wordlist = wordlist;
        self.restart();
    }

    /// Restart only when `target` differs from the current one.
    /// Returns whether a restart happened.
    pub fn set_target(&mut self, target: &str) -> bool {
        if self.target == target {
            return false;
        }
        self.retarget(target);
        true
    }

    /// Replace the target and restart unconditionally.
    pub fn retarget(&mut self, target: &str) {
        self.target.clear();
        self.target.push_str(target);
        self.restart();
    }

    /// Forget all progress: empty guess, not cracked, wordlist reloaded on the next step.
    pub fn restart(&mut self) {
        self.guess.clear();
        self.cracked = false;
        self.cracked_in = None;
        self.phase = Phase::Idle;
        self.attempts = 0;
        self.words.clear();
        self.cursor = 0;
        self.odometer = None;
    }

    /// Clear the target as well as all progress.
    pub fn clear(&mut self) {
        self.retarget("");
    }

    /// Run one bounded batch of work. Does nothing without a target.
    pub fn step(&mut self) {
        if self.target.is_empty() {
            return;
        }

        if self.phase == Phase::Idle {
            self.load_words();
        }

        if self.phase == Phase::Dictionary {
            self.dictionary_step();
        }

        if self.phase == Phase::Exhaustive {
            self.exhaustive_step();
        }
    }

    fn load_words(&mut self) {
        self.words = match self.wordlist.read_words() {
            Ok(words) => words,
            Err(e) => {
                log::warn!("wordlist unavailable, skipping dictionary phase: {e}");
                Vec::new()
            }
        };
        self.cursor = 0;
        self.phase = Phase::Dictionary;
        log::debug!(
            "brute force restarted: {} wordlist entries",
            self.words.len()
        );
    }

    fn dictionary_step(&mut self) {
        let end = (self.cursor + self.dictionary_batch).min(self.words.len());
        for i in self.cursor..end {
            self.guess.clone_from(&self.words[i]);
            self.attempts += 1;
            if self.guess == self.target && !self.cracked {
                self.cracked = true;
                self.cracked_in = Some(Phase::Dictionary);
                log::info!("password found in wordlist after {} attempts", self.attempts);
            }
        }
        self.cursor = end;

        // Only an unmatched, exhausted wordlist leads to the exhaustive phase.
        if self.cursor >= self.words.len() && !self.cracked {
            self.begin_exhaustive();
        }
    }

    fn begin_exhaustive(&mut self) {
        let odometer = Odometer::new(self.target.chars().count());
        self.guess.clear();
        self.guess.push_str(odometer.current());
        self.odometer = Some(odometer);
        self.phase = Phase::Exhaustive;
    }

    fn exhaustive_step(&mut self) {
        let Some(mut odometer) = self.odometer.take() else {
            return;
        };

        for _ in 0..self.exhaustive_batch {
            self.attempts += 1;
            if odometer.current() == self.target && !self.cracked {
                self.cracked = true;
                self.cracked_in = Some(Phase::Exhaustive);
                log::info!(
                    "password found by exhaustive search after {} attempts",
                    self.attempts
                );
                if let Err(e) = self.wordlist.append(&self.target) {
                    log::warn!("could not record cracked password: {e}");
                }
            }
            odometer.advance();
        }

        self.guess.clear();
        self.guess.push_str(odometer.current());
        self.odometer = Some(odometer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn session_with_words(dir: &TempDir, contents: &str) -> BruteForceSession {
        let path = dir.path().join("details");
        fs::write(&path, contents).unwrap();
        BruteForceSession::new(WordlistFile::new(path))
    }

    fn step_until_cracked(session: &mut BruteForceSession, max_steps: usize) -> usize {
        for n in 1..=max_steps {
            session.step();
            if session.is_cracked() {
                return n;
            }
        }
        panic!("not cracked within {max_steps} steps");
    }

    #[test]
    fn charset_has_70_distinct_symbols() {
        let mut seen = std::collections::HashSet::new();
        assert!(CHARSET.iter().all(|b| seen.insert(*b)));
        assert_eq!(seen.len(), 70);
        assert_eq!(CHARSET.len(), 26 + 26 + 10 + "!@#$%^&*".len());
    }

    #[test]
    fn odometer_visits_lengths_in_order() {
        let n = CHARSET.len();
        let odometer = Odometer::new(2);
        let all: Vec<String> = odometer.take(n + n * n + 1).collect();

        for (i, s) in all[..n].iter().enumerate() {
            assert_eq!(s.as_bytes(), &[CHARSET[i]]);
        }
        assert_eq!(all[n], "AA");
        assert_eq!(all[n + 1], "AB");
        assert_eq!(all[n + n - 1], "A*");
        assert_eq!(all[n + n], "BA");
        assert_eq!(all[n + n * n - 1], "**");
        // Wraps back to a single character after the longest length.
        assert_eq!(all[n + n * n], "A");
    }

    #[test]
    fn odometer_is_strictly_increasing_within_a_cycle() {
        let rank = |s: &str| -> (usize, Vec<usize>) {
            let digits = s
                .bytes()
                .map(|b| CHARSET.iter().position(|&c| c == b).unwrap())
                .collect();
            (s.len(), digits)
        };

        let n = CHARSET.len();
        let all: Vec<String> = Odometer::new(2).take(n + n * n).collect();
        for pair in all.windows(2) {
            assert!(rank(&pair[0]) < rank(&pair[1]), "{} !< {}", pair[0], pair[1]);
        }
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn odometer_reaches_target() {
        let position = Odometer::new(3).position(|s| s == "a1").unwrap();
        let n = CHARSET.len();
        // All singles, then 'a' (26) * n + '1' (53) within length two.
        assert_eq!(position, n + 26 * n + 53);
    }

    #[test]
    fn dictionary_match_never_enters_exhaustive_phase() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "alice\nhunter2\nzebra\n");
        session.retarget("hunter2");

        session.step();

        assert!(session.is_cracked());
        assert_eq!(session.cracked_in(), Some(Phase::Dictionary));
        assert_eq!(session.phase(), Phase::Dictionary);
        assert_eq!(session.attempts(), 3);
    }

    #[test]
    fn empty_wordlist_reaches_target_by_enumeration() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "").with_batches(DICTIONARY_BATCH, 1);
        session.retarget("ab");

        session.step();
        assert_eq!(session.phase(), Phase::Exhaustive);
        assert!(!session.is_cracked());
        // "A" was compared, the next candidate is queued.
        assert_eq!(session.guess(), "B");

        let mut guesses = vec!["A".to_string()];
        while !session.is_cracked() {
            guesses.push(session.guess().to_string());
            session.step();
        }

        assert_eq!(session.cracked_in(), Some(Phase::Exhaustive));
        assert_eq!(guesses.last().unwrap(), "ab");
        let n = CHARSET.len();
        assert_eq!(guesses.len(), n + 26 * n + 27 + 1);
        assert_eq!(session.attempts() as usize, guesses.len());
        let expected: Vec<String> = Odometer::new(2).take(guesses.len()).collect();
        assert_eq!(guesses, expected);
    }

    #[test]
    fn exhaustive_crack_is_appended_to_wordlist() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "nope\n");
        session.retarget("Zz");

        step_until_cracked(&mut session, 100);

        let words = session.wordlist().read_words().unwrap();
        assert_eq!(words, vec!["nope", "Zz"]);

        // The learned entry is found by the dictionary on the next run.
        session.restart();
        session.step();
        assert_eq!(session.cracked_in(), Some(Phase::Dictionary));
    }

    #[test]
    fn large_wordlist_is_processed_in_batches() {
        let dir = TempDir::new().unwrap();
        let words: String = (0..2500).map(|i| format!("word{i}\n")).collect();
        let mut session = session_with_words(&dir, &words);
        session.retarget("word2400");

        session.step();
        assert_eq!(session.attempts(), 1000);
        assert_eq!(session.guess(), "word999");
        session.step();
        assert!(!session.is_cracked());
        session.step();
        assert!(session.is_cracked());
        assert_eq!(session.attempts(), 2500);
    }

    #[test]
    fn missing_wordlist_goes_straight_to_enumeration() {
        let dir = TempDir::new().unwrap();
        let mut session = BruteForceSession::new(WordlistFile::new(dir.path().join("missing")));
        session.retarget("c");

        session.step();

        assert!(session.is_cracked());
        assert_eq!(session.cracked_in(), Some(Phase::Exhaustive));
        // The crack creates the wordlist.
        assert_eq!(session.wordlist().read_words().unwrap(), vec!["c"]);
    }

    #[test]
    fn retarget_clears_progress_immediately() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "x\n");
        session.retarget("x");
        session.step();
        assert!(session.is_cracked());

        session.retarget("xy");
        assert!(!session.is_cracked());
        assert_eq!(session.guess(), "");
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn set_target_ignores_unchanged_target() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "x\n");
        assert!(session.set_target("x"));
        session.step();
        assert!(session.is_cracked());

        assert!(!session.set_target("x"));
        assert!(session.is_cracked());
    }

    #[test]
    fn wordlist_is_reread_on_restart() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "first\n");
        session.retarget("second");
        session.step();
        assert!(!session.is_cracked());

        fs::write(dir.path().join("details"), "second\n").unwrap();
        session.retarget("second");
        session.step();
        assert_eq!(session.cracked_in(), Some(Phase::Dictionary));
    }

    #[test]
    fn empty_target_does_nothing() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "\n");
        session.step();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.attempts(), 0);
        assert!(!session.is_cracked());
    }

    #[test]
    fn cracked_session_keeps_enumerating_when_stepped() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_words(&dir, "").with_batches(DICTIONARY_BATCH, 10);
        session.retarget("B");
        session.step();
        assert!(session.is_cracked());
        let before = session.attempts();

        session.step();
        assert_eq!(session.attempts(), before + 10);
        assert!(session.is_cracked());
        // Appended once only.
        assert_eq!(session.wordlist().read_words().unwrap(), vec!["B"]);
    }
}
