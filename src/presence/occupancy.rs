use crate::presence::{
    location::{SiteLayout, Wing, Zone},
    snapshot::DirectorySnapshot,
};

/// Occupancy of every monitored zone, read from one directory snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneCounts {
    per_zone: [usize; Zone::COUNT],
    per_wing: [[usize; Wing::COUNT]; Zone::COUNT],
    total: usize,
}

impl ZoneCounts {
    /// Devices on a floor (all three wings, or the whole cafe).
    pub fn zone(&self, zone: Zone) -> usize {
        self.per_zone[zone.index()]
    }

    /// Devices in one wing. `None` for the cafe, which has no wings.
    pub fn wing(&self, zone: Zone, wing: Wing) -> Option<usize> {
        zone.has_wings()
            .then(|| self.per_wing[zone.index()][wing.index()])
    }

    pub fn per_zone(&self) -> [usize; Zone::COUNT] {
        self.per_zone
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Recount every zone from scratch.
///
/// Winged floors sum `root:<floor>:west|centre|east`; the cafe is read from
/// `root:cafe` itself. Nothing is carried over from a previous count: the
/// snapshot may have changed in ways no event told us about.
pub fn recompute_counts<S>(layout: &SiteLayout, snapshot: &S) -> ZoneCounts
where
    S: DirectorySnapshot + ?Sized,
{
    let mut counts = ZoneCounts::default();

    for zone in Zone::ALL {
        let z = zone.index();
        if zone.has_wings() {
            for wing in Wing::ALL {
                let n = snapshot.device_count(&layout.wing_path(zone, wing));
                counts.per_wing[z][wing.index()] = n;
                counts.per_zone[z] += n;
            }
        } else {
            counts.per_zone[z] = snapshot.device_count(&layout.zone_path(zone));
        }
    }

    counts.total = counts.per_zone.iter().sum();
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn snapshot(entries: &[(&str, usize)]) -> HashMap<String, HashSet<String>> {
        entries
            .iter()
            .map(|&(path, n)| {
                let devices = (0..n).map(|i| format!("{path}/{i}")).collect();
                (path.to_string(), devices)
            })
            .collect()
    }

    #[test]
    fn single_wing_occupied() {
        let layout = SiteLayout::new("root");
        let counts = recompute_counts(&layout, &snapshot(&[("root:second:west", 3)]));

        assert_eq!(counts.per_zone(), [0, 0, 3, 0]);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.wing(Zone::Second, Wing::West), Some(3));
        assert_eq!(counts.wing(Zone::Second, Wing::East), Some(0));
    }

    #[test]
    fn cafe_reads_its_own_directory() {
        let layout = SiteLayout::new("root");
        let snap = snapshot(&[
            ("root:cafe", 4),
            // Not a real cafe path; must not be counted.
            ("root:cafe:west", 9),
        ]);
        let counts = recompute_counts(&layout, &snap);

        assert_eq!(counts.zone(Zone::Cafe), 4);
        assert_eq!(counts.wing(Zone::Cafe, Wing::West), None);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn floor_directory_itself_is_not_a_wing() {
        let layout = SiteLayout::new("root");
        let snap = snapshot(&[("root:first", 5), ("root:first:centre", 1)]);
        let counts = recompute_counts(&layout, &snap);

        assert_eq!(counts.zone(Zone::First), 1);
    }

    #[test]
    fn other_roots_are_ignored() {
        let layout = SiteLayout::new("root");
        let counts = recompute_counts(&layout, &snapshot(&[("elsewhere:third:east", 2)]));
        assert_eq!(counts, ZoneCounts::default());
    }

    #[test]
    fn full_building() {
        let layout = SiteLayout::new("root");
        let snap = snapshot(&[
            ("root:cafe", 2),
            ("root:first:west", 1),
            ("root:first:centre", 1),
            ("root:first:east", 1),
            ("root:third:east", 5),
        ]);
        let counts = recompute_counts(&layout, &snap);

        assert_eq!(counts.per_zone(), [2, 3, 0, 5]);
        assert_eq!(counts.total(), 10);
        assert_eq!(recompute_counts(&layout, &snap), counts);
    }
}
