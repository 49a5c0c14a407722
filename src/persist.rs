//! Serialization of the workout list to and from a [`Store`].

use crate::dlog;
use crate::storage::Store;
use crate::types::Workout;
use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

#[derive(Debug, Default)]
pub struct Loaded {
    pub workouts: Vec<Workout>,
    /// Records dropped because they did not decode or broke an invariant.
    pub skipped: usize,
    /// The whole blob was unreadable and got moved to [`backup_key`].
    pub set_aside: bool,
}

pub fn backup_key(key: &str) -> String {
    format!("{key}.corrupt")
}

pub fn save<S: Store + ?Sized>(store: &mut S, key: &str, workouts: &[Workout]) -> Result<()> {
    let json = serde_json::to_string(workouts).context("Serializing workouts")?;
    store.set(key, &json)?;
    dlog!("saved key={key} workouts={}", workouts.len());
    Ok(())
}

/// Reads the list under `key`.
///
/// A missing key is an empty list. A blob that is not a JSON array is copied
/// to [`backup_key`] and removed so the next save starts clean. Individual
/// records that fail to decode or check are skipped; the blob they came from
/// is copied to [`backup_key`] before the next save can drop them.
pub fn load<S: Store + ?Sized>(store: &mut S, key: &str) -> Result<Loaded> {
    let Some(raw) = store.get(key)? else {
        dlog!("no saved workouts key={key}");
        return Ok(Loaded::default());
    };

    let records = match serde_json::from_str::<Vec<JsonValue>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            let backup = backup_key(key);
            tracing::warn!(
                key,
                backup = %backup,
                err = %e,
                "saved workouts are unreadable; setting them aside"
            );
            store.set(&backup, &raw)?;
            store.remove(key)?;
            return Ok(Loaded {
                set_aside: true,
                ..Loaded::default()
            });
        }
    };

    let mut out = Loaded::default();
    for (idx, record) in records.into_iter().enumerate() {
        let w = match serde_json::from_value::<Workout>(record) {
            Ok(w) => w,
            Err(e) => {
                tracing::warn!(idx, err = %e, "skipping undecodable workout record");
                out.skipped += 1;
                continue;
            }
        };
        if let Err(why) = w.check() {
            tracing::warn!(idx, id = %w.id(), why = %why, "skipping invalid workout record");
            out.skipped += 1;
            continue;
        }
        out.workouts.push(w);
    }

    if out.skipped > 0 {
        let backup = backup_key(key);
        store.set(&backup, &raw)?;
        tracing::warn!(
            key,
            backup = %backup,
            skipped = out.skipped,
            "kept a copy of skipped records"
        );
    }

    dlog!(
        "loaded key={key} workouts={} skipped={}",
        out.workouts.len(),
        out.skipped
    );
    Ok(out)
}
