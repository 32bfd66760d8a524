use std::collections::BTreeMap;

use crate::error::{RanktrailError, RanktrailResult};

/// One month of ranked activity. A slot is either fully present (rank and
/// count together) or fully absent; the `Option` wrapper in [`MonthSlot`]
/// enforces that.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonthActivity {
    pub rank: u32,
    pub count: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonthSlot(pub Option<MonthActivity>);

impl MonthSlot {
    pub const ABSENT: Self = Self(None);

    pub fn present(rank: u32, count: f64) -> Self {
        Self(Some(MonthActivity { rank, count }))
    }

    pub fn qualifies(&self, max_rank: u32) -> bool {
        matches!(self.0, Some(a) if a.rank <= max_rank)
    }

    pub fn activity(&self) -> Option<MonthActivity> {
        self.0
    }
}

/// One tracked influencer. `months` has an entry for every Timeline month,
/// possibly an absent slot. Never mutated after normalization; every pipeline
/// invocation derives a fresh view instead of annotating these in place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Influencer {
    pub influencer_id: String,
    pub screen_name: String,
    pub retweeted_count: f64,
    pub months: BTreeMap<String, MonthSlot>,
}

impl Influencer {
    pub fn slot(&self, month: &str) -> MonthSlot {
        self.months.get(month).copied().unwrap_or(MonthSlot::ABSENT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Earliest qualifying month first; ties broken by retweet count descending.
    First,
    /// Latest qualifying month, chronologically ascending; ties broken by
    /// retweet count descending.
    Last,
    /// Widest first-to-last index span first.
    Span,
    /// Retweet count descending.
    RetweetedCount,
    /// Most qualifying months first; ties broken chronologically by first month.
    MonthCount,
}

/// User-submitted view controls, immutable for one pipeline invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewParams {
    pub top_n: usize,
    pub max_rank: u32,
    pub order_by: OrderBy,
}

impl ViewParams {
    pub fn validate(&self) -> RanktrailResult<()> {
        if self.top_n == 0 {
            return Err(RanktrailError::invalid_parameter("top_n must be >= 1"));
        }
        if self.max_rank == 0 {
            return Err(RanktrailError::invalid_parameter("max_rank must be >= 1"));
        }
        Ok(())
    }
}
