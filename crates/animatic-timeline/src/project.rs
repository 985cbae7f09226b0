//! The project: shots in timeline order.

use animatic_core::{AnimaticError, Result, SHOT_ID_STEP};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::shot::{check_trim, Shot, ShotMetadata, DEFAULT_TRIM_OUT};

/// An ordered shot list. Vector order is timeline order; ids say nothing
/// about position once shots have been moved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Shots in timeline order
    #[serde(default, deserialize_with = "null_as_empty")]
    shots: Vec<Shot>,
    /// Highest id handed out this session, so removed ids are not reissued.
    #[serde(skip)]
    id_high_water: Option<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Shot>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Shot>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Project {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots in timeline order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// Whether the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Get the shot at a timeline position.
    pub fn shot(&self, index: usize) -> Option<&Shot> {
        self.shots.get(index)
    }

    /// Get the shot at a timeline position mutably. Edits land directly on
    /// the owned record.
    pub fn shot_mut(&mut self, index: usize) -> Option<&mut Shot> {
        self.shots.get_mut(index)
    }

    /// Find a shot by id. Returns (index, &Shot).
    pub fn find_by_id(&self, id: i64) -> Option<(usize, &Shot)> {
        self.shots.iter().enumerate().find(|(_, shot)| shot.id() == id)
    }

    /// The id the next added shot will receive: 10 for an empty project,
    /// otherwise 10 above the highest id seen. Fails when that would overflow,
    /// which only a loaded file with an id near `i64::MAX` can cause.
    pub fn next_id(&self) -> Result<i64> {
        let max_existing = self.shots.iter().map(Shot::id).max();
        match max_existing.max(self.id_high_water) {
            Some(max) => max.checked_add(SHOT_ID_STEP).ok_or_else(|| {
                AnimaticError::InvalidParameter(format!("No shot id left above {max}"))
            }),
            None => Ok(SHOT_ID_STEP),
        }
    }

    /// Append a shot with default trim (0s to 10s).
    pub fn add_shot(&mut self, media_reference: impl Into<String>) -> Result<&mut Shot> {
        self.add_shot_trimmed(media_reference, 0.0, DEFAULT_TRIM_OUT)
    }

    /// Append a shot with explicit trim points. Any reference is accepted;
    /// nothing checks that it exists. Trim points must be finite.
    pub fn add_shot_trimmed(
        &mut self,
        media_reference: impl Into<String>,
        trim_in: f64,
        trim_out: f64,
    ) -> Result<&mut Shot> {
        check_trim("trim_in", trim_in)?;
        check_trim("trim_out", trim_out)?;
        let id = self.next_id()?;
        self.id_high_water = Some(id);

        let shot = Shot::new(id, media_reference, trim_in, trim_out);
        debug!(id, name = %shot.name, media = %shot.media_reference, "Added shot");

        let index = self.shots.len();
        self.shots.push(shot);
        Ok(&mut self.shots[index])
    }

    /// Pop the shot at `from` and reinsert it at `to`. Both indices must be
    /// within the current timeline.
    pub fn move_shot(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        let shot = self.shots.remove(from);
        debug!(id = shot.id(), from, to, "Moved shot");
        self.shots.insert(to, shot);
        Ok(())
    }

    /// Point a shot at new media, keeping its id, name, comment and in point.
    ///
    /// With a known `media_length`, an out point past the end of the new media
    /// is pulled back to `max(trim_in, media_length)`. Without one, trim
    /// values are left alone.
    pub fn replace_media(
        &mut self,
        index: usize,
        media_reference: impl Into<String>,
        media_length: Option<f64>,
    ) -> Result<()> {
        self.check_index(index)?;
        let shot = &mut self.shots[index];
        shot.media_reference = media_reference.into();

        if let Some(length) = media_length {
            if length < 0.0 {
                warn!(length, id = shot.id(), "Negative media length hint");
            }
            if shot.trim_out > length {
                shot.trim_out = shot.trim_in.max(length);
            }
        }

        debug!(
            id = shot.id(),
            media = %shot.media_reference,
            trim_out = shot.trim_out,
            "Replaced media"
        );
        Ok(())
    }

    /// Edit name, trim points and comment of the shot at `index`.
    pub fn apply_metadata(&mut self, index: usize, edit: ShotMetadata) -> Result<()> {
        self.check_index(index)?;
        let shot = &mut self.shots[index];
        shot.apply_metadata(edit)?;
        debug!(id = shot.id(), name = %shot.name, "Applied metadata");
        Ok(())
    }

    /// Remove the shot at `index` and return it. Its id is not reissued while
    /// this project is in memory.
    pub fn remove_shot(&mut self, index: usize) -> Result<Shot> {
        self.check_index(index)?;
        let removed = self.shots.remove(index);
        self.id_high_water = self.id_high_water.max(Some(removed.id()));
        debug!(id = removed.id(), index, "Removed shot");
        Ok(removed)
    }

    /// Sum of all shot durations, seconds.
    pub fn total_duration(&self) -> f64 {
        self.shots.iter().map(Shot::duration).sum()
    }

    /// Timeline start of the shot at `index`: sum of the durations before it.
    pub fn start_time(&self, index: usize) -> Option<f64> {
        if index >= self.shots.len() {
            return None;
        }
        Some(self.shots[..index].iter().map(Shot::duration).sum())
    }

    /// Find which shot covers timeline time `time`. Returns
    /// (index, offset within the shot). Zero-length shots never match.
    pub fn shot_at_time(&self, time: f64) -> Option<(usize, f64)> {
        let mut pos = 0.0;
        for (i, shot) in self.shots.iter().enumerate() {
            let end = pos + shot.duration();
            if time >= pos && time < end {
                return Some((i, time - pos));
            }
            pos = end;
        }
        None
    }

    /// Check that every trim point can be written to JSON. Shots edited
    /// through [`shot_mut`](Self::shot_mut) are not checked until here.
    pub(crate) fn validate_trims(&self) -> Result<()> {
        self.shots.iter().try_for_each(Shot::check_trims)
    }

    /// Check that no two shots share an id.
    pub(crate) fn validate_ids(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::with_capacity(self.shots.len());
        for shot in &self.shots {
            if !seen.insert(shot.id()) {
                return Err(AnimaticError::Serialization(format!(
                    "Duplicate shot id {}",
                    shot.id()
                )));
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.shots.len() {
            Ok(())
        } else {
            Err(AnimaticError::out_of_range(index, self.shots.len()))
        }
    }
}
