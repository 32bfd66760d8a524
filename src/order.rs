use crate::{metrics::InfluencerView, model::OrderBy};

/// Reorders the selected influencers in place for row assignment.
///
/// Every strategy is a total order over the view, applied with a stable sort:
/// influencers equal under the comparator keep their pre-sort relative order.
/// Month identifiers compare lexicographically, which is chronological for
/// zero-padded `YYYY-MM`.
pub fn order_views(views: &mut [InfluencerView<'_>], order_by: OrderBy) {
    match order_by {
        OrderBy::First => views.sort_by(|a, b| {
            a.span
                .first_month
                .cmp(&b.span.first_month)
                .then_with(|| retweets_desc(a, b))
        }),
        OrderBy::Last => views.sort_by(|a, b| {
            a.span
                .last_month
                .cmp(&b.span.last_month)
                .then_with(|| retweets_desc(a, b))
        }),
        OrderBy::Span => views.sort_by(|a, b| b.span.width().cmp(&a.span.width())),
        OrderBy::RetweetedCount => views.sort_by(retweets_desc),
        OrderBy::MonthCount => views.sort_by(|a, b| {
            b.span
                .month_count
                .cmp(&a.span.month_count)
                .then_with(|| a.span.first_month.cmp(&b.span.first_month))
        }),
    }
}

fn retweets_desc(a: &InfluencerView<'_>, b: &InfluencerView<'_>) -> std::cmp::Ordering {
    b.influencer
        .retweeted_count
        .total_cmp(&a.influencer.retweeted_count)
}
