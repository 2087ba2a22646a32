use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Read-only view of "which devices are in which directory right now".
///
/// The snapshot belongs to the tracking client. Occupancy code only asks for
/// the number of devices registered at one exact path; descendants are not
/// included, and a path that isn't present simply holds no one.
pub trait DirectorySnapshot {
    fn device_count(&self, directory: &str) -> usize;
}

impl<T: DirectorySnapshot + ?Sized> DirectorySnapshot for &T {
    fn device_count(&self, directory: &str) -> usize {
        (**self).device_count(directory)
    }
}

impl<S: BuildHasher, D: BuildHasher> DirectorySnapshot for HashMap<String, HashSet<String, D>, S> {
    fn device_count(&self, directory: &str) -> usize {
        self.get(directory).map_or(0, HashSet::len)
    }
}

impl DirectorySnapshot for BTreeMap<String, BTreeSet<String>> {
    fn device_count(&self, directory: &str) -> usize {
        self.get(directory).map_or(0, BTreeSet::len)
    }
}

/// Bare counts, for callers that have already reduced the device sets.
impl DirectorySnapshot for HashMap<String, usize> {
    fn device_count(&self, directory: &str) -> usize {
        self.get(directory).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exact_path_only() {
        let mut dirs: HashMap<String, HashSet<String>> = HashMap::new();
        dirs.entry("root:first".into()).or_default().insert("a".into());
        dirs.entry("root:first:west".into())
            .or_default()
            .extend(["b".to_string(), "c".to_string()]);

        assert_eq!(dirs.device_count("root:first"), 1);
        assert_eq!(dirs.device_count("root:first:west"), 2);
        assert_eq!(dirs.device_count("root:first:east"), 0);
    }

    #[test]
    fn btree_and_count_maps() {
        let mut dirs = BTreeMap::new();
        dirs.insert("root:cafe".to_string(), BTreeSet::from(["x".to_string()]));
        assert_eq!(dirs.device_count("root:cafe"), 1);
        assert_eq!((&dirs).device_count("root:third"), 0);

        let counts = HashMap::from([("root:cafe".to_string(), 7usize)]);
        assert_eq!(counts.device_count("root:cafe"), 7);
    }
}
