//! Application state: everything one frame of the dashboard reads or mutates.

use std::path::PathBuf;

use rand::Rng;

use crate::animation::{HeartField, Spinner};
use crate::bruteforce::BruteForceSession;
use crate::cipher::{DISPLAY_SHIFT, caesar_shift};
use crate::config::DashboardConfig;
use crate::credentials::{Credentials, Field, is_accepted_char};
use crate::scan::ScanState;
use crate::store::{AddressStore, CredentialStore, StoreError, WordlistFile};

/// Keyboard input as the dashboard understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Tab,
    Submit,
}

/// Messages shown once the password is cracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackDisplay {
    pub password: String,
    pub cipher: String,
}

pub struct Dashboard {
    pub credentials: Credentials,
    pub scan: ScanState,
    pub brute_force: BruteForceSession,
    pub hearts: HeartField,
    pub spinner: Spinner,
    credential_store: CredentialStore,
    address_store: AddressStore,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        let credential_store = CredentialStore::new(config.credentials_path());
        let brute_force = BruteForceSession::new(credential_store.wordlist())
            .with_batches(config.dictionary_batch, config.exhaustive_batch);

        Self {
            credentials: Credentials::default(),
            scan: ScanState::new(config.progress_step, config.discovery_odds),
            brute_force,
            hearts: HeartField::new(config.heart_count),
            spinner: Spinner::default(),
            credential_store,
            address_store: AddressStore::new(config.addresses_path()),
        }
    }

    /// Best-effort load of both stores. Missing or unreadable files leave the
    /// defaults in place and are only logged.
    pub fn load(&mut self) {
        match self.credential_store.load() {
            Ok(credentials) => self.credentials = credentials,
            Err(e) => log_load_failure("user data", &e),
        }
        match self.address_store.load() {
            Ok(addresses) => self.scan.addresses = addresses,
            Err(e) => log_load_failure("IP addresses", &e),
        }
    }

    /// Overwrite both stores with the current state. Failures are logged and ignored.
    pub fn save(&self) {
        if let Err(e) = self.credential_store.save(&self.credentials) {
            log::error!("Unable to save user data: {e}");
        }
        if let Err(e) = self.address_store.save(&self.scan.addresses) {
            log::error!("Unable to save IP addresses: {e}");
        }
    }

    pub fn credentials_path(&self) -> &std::path::Path {
        self.credential_store.path()
    }

    /// Run the brute force against another wordlist. Restarts the current target.
    pub fn use_wordlist(&mut self, path: PathBuf) {
        log::info!("brute force wordlist: {}", path.display());
        self.brute_force.set_wordlist(WordlistFile::new(path));
    }

    pub fn focus(&mut self, field: Field) {
        self.credentials.focus = field;
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        let creds = &mut self.credentials;
        match (event, creds.focus) {
            (InputEvent::Tab, focus) => creds.focus = focus.toggled(),
            (InputEvent::Backspace, Field::Username) => {
                creds.username.pop();
            }
            (InputEvent::Backspace, Field::Password) => {
                if creds.password.pop().is_some() {
                    self.brute_force.retarget(&creds.password);
                }
            }
            (InputEvent::Submit, Field::Password) => {
                if !creds.password.is_empty() {
                    self.brute_force.set_target(&creds.password);
                }
            }
            (InputEvent::Submit, Field::Username) => {}
            (InputEvent::Char(c), _) if !is_accepted_char(c) => {}
            (InputEvent::Char(c), Field::Username) => creds.username.push(c),
            (InputEvent::Char(c), Field::Password) => {
                creds.password.push(c);
                self.brute_force.retarget(&creds.password);
            }
        }
    }

    /// Start/Stop button.
    pub fn toggle_scan(&mut self) {
        self.scan.toggle();
        log::info!(
            "scan {}",
            if self.scan.in_progress { "started" } else { "stopped" }
        );
    }

    /// Advance one frame. `width`/`height` bound the heart animation.
    pub fn tick<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.spinner.advance();

        let scan = self.scan.tick(rng);
        if let Some(address) = &scan.discovered {
            log::debug!("discovered {address}");
        }
        if scan.completed {
            self.spinner.reset();
        }

        self.hearts.tick(width, height, rng);

        // The animation stops at the crack even though the session could go on.
        if !self.brute_force.is_cracked() {
            self.brute_force.step();
        }
    }

    /// Restart button: every field back to its default, in place.
    /// Decorations keep moving.
    pub fn reset(&mut self) {
        self.scan.reset();
        self.brute_force.clear();
        self.credentials = Credentials::default();
        log::info!("dashboard reset");
    }

    /// The cracked password and its rotation, once there is one.
    pub fn crack_display(&self) -> Option<CrackDisplay> {
        let target = self.brute_force.target();
        if !self.brute_force.is_cracked() || target.is_empty() {
            return None;
        }
        Some(CrackDisplay {
            password: target.to_string(),
            cipher: caesar_shift(target, DISPLAY_SHIFT),
        })
    }
}

fn log_load_failure(what: &str, err: &StoreError) {
    if err.is_not_found() {
        log::info!("No saved {what}: {err}");
    } else {
        log::warn!("Unable to load {what}: {err}");
    }
}
