//! [`SharedActionCipher`]: initialise-once holder for an [`ActionCipher`].

use once_cell::sync::OnceCell;

use super::ActionCipher;
use crate::settings::SettingsSource;

static SHARED: SharedActionCipher = SharedActionCipher::new();

/// Write-once cell for an [`ActionCipher`].
///
/// The first [`get_or_load`](Self::get_or_load) reads the settings; every
/// later call, from any thread, gets that same instance even if the settings
/// have changed since. Concurrent first calls block until the single
/// initialiser finishes. There is no way back to the uninitialised state.
#[derive(Debug)]
pub struct SharedActionCipher {
    cell: OnceCell<ActionCipher>,
}

impl SharedActionCipher {
    /// Create an uninitialised cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cipher, loading it from `settings` on first access.
    pub fn get_or_load<S: SettingsSource + ?Sized>(&self, settings: &S) -> &ActionCipher {
        self.cell.get_or_init(|| ActionCipher::from_settings(settings))
    }

    /// Return the cipher if it has been loaded.
    pub fn get(&self) -> Option<&ActionCipher> {
        self.cell.get()
    }

    /// Returns `true` once the cipher has been loaded.
    pub fn is_initialised(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for SharedActionCipher {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide action cipher, loaded from `settings` on first call.
///
/// Prefer building an [`ActionCipher`] at startup and passing it by
/// reference; this exists for call sites that have no such handle.
pub fn shared<S: SettingsSource + ?Sized>(settings: &S) -> &'static ActionCipher {
    SHARED.get_or_load(settings)
}
