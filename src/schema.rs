use std::borrow::Borrow;

use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

/// Lookup key of the operator table: the MCC digits immediately followed by the MNC digits,
/// e.g. `23430` for MCC `234` and MNC `30`.
#[derive(
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    From,
    AsRef,
    Display,
    Serialize,
    Deserialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct MccMnc(String);
impl MccMnc {
    /// Concatenates textually, so a written MNC like `05` keeps its leading zero.
    pub fn new(mcc: &str, mnc: impl std::fmt::Display) -> Self {
        Self(format!("{mcc}{mnc}"))
    }
}
impl Borrow<str> for MccMnc {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct OperatorName(String);
