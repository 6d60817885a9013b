use anyhow::Result;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::{debug, warn};

use crate::currency::Currency;

const PREFERENCE_KEY: &str = "currency";

/// Persistent store for the user's currency preference.
///
/// The preference is a convenience, not critical data: read and write
/// failures degrade to the ZAR default with a warning instead of surfacing.
pub struct PreferenceStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl PreferenceStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;
        let keyspace = fjall::Config::new(path).open()?;
        let partition =
            keyspace.open_partition("preferences", PartitionCreateOptions::default())?;
        Ok(Self {
            keyspace,
            partition,
        })
    }

    /// Returns the stored preference, or ZAR when nothing valid is stored.
    pub fn currency(&self) -> Currency {
        match self.partition.get(PREFERENCE_KEY) {
            Ok(Some(raw)) => match std::str::from_utf8(&raw).ok().and_then(Currency::from_code) {
                Some(currency) => currency,
                None => {
                    warn!("Stored currency preference is not a known code, using ZAR");
                    Currency::Zar
                }
            },
            Ok(None) => Currency::Zar,
            Err(e) => {
                warn!("Could not read currency preference: {e}");
                Currency::Zar
            }
        }
    }

    pub fn set_currency(&self, currency: Currency) {
        let res: Result<()> = (|| {
            self.partition.insert(PREFERENCE_KEY, currency.code())?;
            self.keyspace.persist(PersistMode::SyncAll)?;
            Ok(())
        })();
        match res {
            Ok(()) => debug!("Persisted currency preference: {}", currency.code()),
            Err(e) => warn!("Could not persist currency preference: {e}"),
        }
    }
}
