use crate::{core::Timeline, model::Influencer};

/// Narrows the full influencer set to the ones the current view shows.
///
/// Two passes, and the order matters: first keep the `top_n` influencers by
/// `retweeted_count` (stable sort, so equal counts keep their input order),
/// then keep only those with at least one month ranked at or under
/// `max_rank`. Running the threshold filter first would change which
/// influencers count as "top" and is deliberately not done.
pub fn select<'a>(
    influencers: &'a [Influencer],
    timeline: &Timeline,
    top_n: usize,
    max_rank: u32,
) -> Vec<&'a Influencer> {
    let mut by_retweets: Vec<&Influencer> = influencers.iter().collect();
    by_retweets.sort_by(|a, b| b.retweeted_count.total_cmp(&a.retweeted_count));
    by_retweets.truncate(top_n);

    by_retweets
        .into_iter()
        .filter(|inf| timeline.iter().any(|ym| inf.slot(ym).qualifies(max_rank)))
        .collect()
}
