use std::collections::{btree_map::Entry, BTreeMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    parser::row::RowRecord,
    schema::{MccMnc, OperatorName},
};

/// Operator names keyed by MCC-MNC.  Kept sorted so that the written JSON is too.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorMap(BTreeMap<MccMnc, OperatorName>);

impl OperatorMap {
    /// The last write wins.  Overwriting with a different name is only mentioned at debug level,
    /// because the same code may legitimately show up on several pages.
    pub fn insert(&mut self, key: MccMnc, operator: OperatorName) {
        match self.0.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(operator);
            }
            Entry::Occupied(mut entry) => {
                if entry.get() != &operator {
                    debug!(
                        "Overwriting {}: {:?} -> {:?}",
                        entry.key(),
                        entry.get(),
                        operator
                    );
                }
                entry.insert(operator);
            }
        }
    }

    /// Returns the number of keys written.
    pub fn extend_from_record(&mut self, record: &RowRecord) -> usize {
        let keys = record.keys();
        let count = keys.len();
        for key in keys {
            self.insert(key, record.operator().clone());
        }
        count
    }

    pub fn get(&self, key: &str) -> Option<&OperatorName> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MccMnc, OperatorName)> for OperatorMap {
    fn from_iter<I: IntoIterator<Item = (MccMnc, OperatorName)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (key, operator) in iter {
            map.insert(key, operator);
        }
        map
    }
}
