#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod order;
pub mod scale;
pub mod select;

pub use crate::core::{Rgb8, Timeline};
pub use error::{RanktrailError, RanktrailResult};
pub use layout::{COLUMN_SPACING, ROW_SPACING, RenderCell, RenderDescriptor, RenderRow, layout_view};
pub use metrics::{ActivitySpan, InfluencerView, qualifying_span};
pub use model::{Influencer, MonthActivity, MonthSlot, OrderBy, ViewParams};
pub use normalize::normalize_records;
