use crate::{core::Timeline, model::Influencer};

/// Temporal summary of one influencer's qualifying months under a fixed
/// rank threshold. View-dependent: recomputed on every pipeline invocation,
/// never cached across thresholds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActivitySpan {
    pub first_month: String,
    pub last_month: String,
    pub first_index: usize,
    pub last_index: usize,
    pub month_count: usize,
}

impl ActivitySpan {
    /// Timeline distance between the first and last qualifying month.
    pub fn width(&self) -> usize {
        self.last_index - self.first_index
    }
}

/// A selected influencer paired with its freshly computed span. The borrow
/// keeps the normalized collection read-only; nothing is written back.
#[derive(Clone, Debug)]
pub struct InfluencerView<'a> {
    pub influencer: &'a Influencer,
    pub span: ActivitySpan,
}

/// Scans the Timeline once forward and once backward. `None` when the
/// influencer never qualifies under `max_rank`; the Selector guarantees that
/// cannot happen for influencers it lets through.
pub fn qualifying_span(
    influencer: &Influencer,
    timeline: &Timeline,
    max_rank: u32,
) -> Option<ActivitySpan> {
    let qualifies = |ym: &&str| influencer.slot(ym).qualifies(max_rank);

    let first_index = timeline.iter().position(|ym| qualifies(&ym))?;
    let from_end = timeline.iter_rev().position(|ym| qualifies(&ym))?;
    let last_index = timeline.len() - 1 - from_end;
    let month_count = timeline.iter().filter(qualifies).count();

    Some(ActivitySpan {
        first_month: timeline.months()[first_index].clone(),
        last_month: timeline.months()[last_index].clone(),
        first_index,
        last_index,
        month_count,
    })
}
