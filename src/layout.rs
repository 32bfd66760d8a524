use crate::{
    core::{Rgb8, Timeline},
    error::RanktrailResult,
    metrics::{ActivitySpan, InfluencerView, qualifying_span},
    model::{Influencer, ViewParams},
    order::order_views,
    scale::{LinearScale, RankColorScale, SqrtScale},
    select::select,
};

/// Horizontal distance between month columns, in surface units.
pub const COLUMN_SPACING: f64 = 20.0;
/// Vertical distance between influencer rows.
pub const ROW_SPACING: f64 = 30.0;

const MAX_BUBBLE_RADIUS: f64 = 25.0;
const STROKE_RANGE: (f64, f64) = (1.0, 20.0);

/// Everything the rendering surface needs to draw one view: rows in final
/// order, per-cell radius and fill, per-row stroke width, and canvas content
/// size. Fully owned and serializable so identical inputs can be checked for
/// byte-identical output.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderDescriptor {
    pub rows: Vec<RenderRow>,
    pub content_width: f64,
    pub content_height: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderRow {
    pub influencer_id: String,
    pub screen_name: String,
    /// Stroke width of the row's background line.
    pub line_width: f64,
    pub span: ActivitySpan,
    /// One cell per qualifying month only.
    pub cells: Vec<RenderCell>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderCell {
    pub month: String,
    pub column: usize,
    pub radius: f64,
    pub fill: Rgb8,
}

/// Runs the whole pipeline for one parameter submission: select, derive
/// spans, order, build scales, emit the descriptor. Pure and deterministic;
/// the normalized collection is only read.
#[tracing::instrument(skip(influencers, timeline))]
pub fn layout_view(
    influencers: &[Influencer],
    timeline: &Timeline,
    params: &ViewParams,
) -> RanktrailResult<RenderDescriptor> {
    params.validate()?;

    let selected = select(influencers, timeline, params.top_n, params.max_rank);
    let mut views: Vec<InfluencerView<'_>> = selected
        .into_iter()
        .filter_map(|inf| {
            qualifying_span(inf, timeline, params.max_rank).map(|span| InfluencerView {
                influencer: inf,
                span,
            })
        })
        .collect();
    order_views(&mut views, params.order_by);

    let content_width = COLUMN_SPACING * timeline.len() as f64;
    if views.is_empty() {
        // Scale domains would be undefined; hand back empty geometry instead.
        return Ok(RenderDescriptor {
            rows: Vec::new(),
            content_width,
            content_height: 0.0,
        });
    }

    let mut max_count = 0.0f64;
    let mut retweets = (f64::INFINITY, f64::NEG_INFINITY);
    for view in &views {
        retweets.0 = retweets.0.min(view.influencer.retweeted_count);
        retweets.1 = retweets.1.max(view.influencer.retweeted_count);
        for ym in timeline.iter() {
            let slot = view.influencer.slot(ym);
            if slot.qualifies(params.max_rank)
                && let Some(activity) = slot.activity()
            {
                max_count = max_count.max(activity.count);
            }
        }
    }

    let radius = SqrtScale::new(max_count, MAX_BUBBLE_RADIUS);
    let line_width = LinearScale::new(retweets, STROKE_RANGE);
    let rank_color = RankColorScale::new(params.max_rank);

    let rows: Vec<RenderRow> = views
        .into_iter()
        .map(|view| {
            let cells = timeline
                .iter()
                .enumerate()
                .filter_map(|(column, ym)| {
                    let slot = view.influencer.slot(ym);
                    if !slot.qualifies(params.max_rank) {
                        return None;
                    }
                    let activity = slot.activity()?;
                    Some(RenderCell {
                        month: ym.to_string(),
                        column,
                        radius: radius.scale(activity.count),
                        fill: rank_color.color(activity.rank),
                    })
                })
                .collect();

            RenderRow {
                influencer_id: view.influencer.influencer_id.clone(),
                screen_name: view.influencer.screen_name.clone(),
                line_width: line_width.scale(view.influencer.retweeted_count),
                span: view.span,
                cells,
            }
        })
        .collect();

    let content_height = ROW_SPACING * rows.len() as f64;
    Ok(RenderDescriptor {
        rows,
        content_width,
        content_height,
    })
}
