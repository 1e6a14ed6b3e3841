//! Stage 2: Reference key aggregation.

use std::collections::BTreeSet;

use super::scanner::ExtractedKey;

/// Deduplicated set of keys referenced from source code.
///
/// Built once per run and never modified afterwards. Iteration is sorted so
/// missing keys are always reported in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceKeys(BTreeSet<String>);

impl ReferenceKeys {
    pub fn from_extracted(keys: &[ExtractedKey]) -> Self {
        keys.iter().map(|k| k.key.clone()).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Reference keys that do not appear in `present`, in sorted order.
    pub fn missing_from<'a, I>(&self, present: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: BTreeSet<&str> = present.into_iter().collect();
        self.iter().filter(|key| !present.contains(*key)).collect()
    }
}

impl FromIterator<String> for ReferenceKeys {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
