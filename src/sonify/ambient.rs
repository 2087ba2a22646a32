/*
Ambient Floor Levels
====================

Each floor has a drone that never stops. Its loudness tracks that floor's
share of the building's occupancy:

    level(z) = base + (count[z] × multiplier) / (total + 1)

  base        quietest a drone gets (dB); an empty floor sits here
  multiplier  how far above `base` a floor holding everyone can climb

The `+1` keeps an empty building from dividing by zero, and also means no
floor ever quite reaches `base + multiplier`: with everyone on one floor its
share is total/(total+1). That under-weighting is part of how the display
sounds and is kept as is.

Because `total` is shared, one person arriving on the first floor makes every
other floor slightly quieter. Levels are therefore always recomputed and
applied for all four floors together.
*/

use serde::Deserialize;

use crate::presence::{location::Zone, occupancy::ZoneCounts};

/// Constants of the level formula, in dB.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AmbientParams {
    pub base_db: f32,
    pub multiplier_db: f32,
}

impl AmbientParams {
    pub const DEFAULT_BASE_DB: f32 = -18.0;
    pub const DEFAULT_MULTIPLIER_DB: f32 = 12.0;

    pub fn level(&self, count: usize, total: usize) -> f32 {
        self.base_db + (count as f32 * self.multiplier_db) / (total as f32 + 1.0)
    }
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            base_db: Self::DEFAULT_BASE_DB,
            multiplier_db: Self::DEFAULT_MULTIPLIER_DB,
        }
    }
}

/// Drone level for every zone, in dB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLevels([f32; Zone::COUNT]);

impl AmbientLevels {
    pub fn from_counts(counts: &ZoneCounts, params: &AmbientParams) -> Self {
        let total = counts.total();
        Self(Zone::ALL.map(|zone| params.level(counts.zone(zone), total)))
    }

    /// Every zone at `base`, as with an empty building.
    pub fn silent(params: &AmbientParams) -> Self {
        Self([params.base_db; Zone::COUNT])
    }

    pub fn get(&self, zone: Zone) -> f32 {
        self.0[zone.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Zone, f32)> + '_ {
        Zone::ALL.into_iter().zip(self.0.iter().copied())
    }

    pub fn as_array(&self) -> [f32; Zone::COUNT] {
        self.0
    }
}
