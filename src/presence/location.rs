/*
Directory Paths
===============

Every receiver reports into a hierarchical directory, written as
colon-separated segments:

    notman:second:west
    ──┬─── ──┬─── ─┬──
      │      │     └─ wing   (west, centre, east)
      │      └─────── floor  (cafe, first, second, third)
      └────────────── root namespace of the site

The cafe is a single open room and has no wings, so its directory stops at
the floor segment: `notman:cafe`.

Classification is total. A floor we don't know becomes "no zone" and the
event is not sonified; a wing we don't know falls back to the centre.
*/

use std::fmt;

/// One of the four monitored floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zone {
    Cafe,
    First,
    Second,
    Third,
}

impl Zone {
    pub const COUNT: usize = 4;
    pub const ALL: [Zone; Zone::COUNT] = [Zone::Cafe, Zone::First, Zone::Second, Zone::Third];

    /// Position in every per-zone table (0-3).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Directory segment naming this floor.
    pub const fn segment(self) -> &'static str {
        match self {
            Zone::Cafe => "cafe",
            Zone::First => "first",
            Zone::Second => "second",
            Zone::Third => "third",
        }
    }

    /// Floors split into west/centre/east wings. The cafe is not one of them.
    pub const fn has_wings(self) -> bool {
        !matches!(self, Zone::Cafe)
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "cafe" => Some(Zone::Cafe),
            "first" => Some(Zone::First),
            "second" => Some(Zone::Second),
            "third" => Some(Zone::Third),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Lateral subdivision of a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wing {
    West,
    Centre,
    East,
}

impl Wing {
    pub const COUNT: usize = 3;
    pub const ALL: [Wing; Wing::COUNT] = [Wing::West, Wing::Centre, Wing::East];

    /// 0 = west, 1 = centre, 2 = east.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn segment(self) -> &'static str {
        match self {
            Wing::West => "west",
            Wing::Centre => "centre",
            Wing::East => "east",
        }
    }

    /// Stereo position of the wing, -1.0 (hard left) to 1.0 (hard right).
    pub const fn pan(self) -> f32 {
        match self {
            Wing::West => -1.0,
            Wing::Centre => 0.0,
            Wing::East => 1.0,
        }
    }

    fn from_segment(segment: &str) -> Self {
        match segment {
            "west" => Wing::West,
            "east" => Wing::East,
            _ => Wing::Centre,
        }
    }
}

impl fmt::Display for Wing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Result of classifying a directory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// `None` when the floor segment is missing or unrecognized.
    pub zone: Option<Zone>,
    pub wing: Wing,
}

impl Location {
    /// Zone as a table index, with -1 standing in for an unrecognized floor.
    pub fn zone_index(&self) -> i32 {
        self.zone.map_or(-1, |zone| zone.index() as i32)
    }

    pub fn wing_index(&self) -> usize {
        self.wing.index()
    }
}

/// Map a directory path such as `notman:third:east` to its floor and wing.
///
/// Never fails: the root segment is ignored, an unknown floor gives
/// `zone: None`, and an unknown or missing wing gives [`Wing::Centre`].
pub fn classify(directory: &str) -> Location {
    let mut segments = directory.split(':').skip(1);
    let zone = segments.next().and_then(Zone::from_segment);
    let wing = segments.next().map_or(Wing::Centre, Wing::from_segment);

    Location { zone, wing }
}

/// Directory naming for one site: the root namespace and the fixed paths
/// the occupancy counts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: String,
}

impl SiteLayout {
    pub const DEFAULT_ROOT: &'static str = "notman";

    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `root:<floor>`; for the cafe this is where its devices live.
    pub fn zone_path(&self, zone: Zone) -> String {
        format!("{}:{}", self.root, zone.segment())
    }

    /// `root:<floor>:<wing>`.
    pub fn wing_path(&self, zone: Zone, wing: Wing) -> String {
        format!("{}:{}:{}", self.root, zone.segment(), wing.segment())
    }
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}
