use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    core::Timeline,
    error::{RanktrailError, RanktrailResult},
    model::{Influencer, MonthSlot},
};

/// Converts the fetched raw JSON array into typed [`Influencer`] values.
///
/// All-or-nothing: the first malformed record fails the whole batch,
/// identifying the record by its position in the input array. Month slots are
/// soft: a falsy rank (missing, null, zero, empty or non-numeric string)
/// means the influencer did not qualify that month, matching the upstream
/// dataset's "rank 0 or omitted" convention. Out-of-range numbers pass
/// through unclamped.
pub fn normalize_records(
    records: &[Value],
    timeline: &Timeline,
) -> RanktrailResult<Vec<Influencer>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record, timeline))
        .collect()
}

fn normalize_record(index: usize, record: &Value, timeline: &Timeline) -> RanktrailResult<Influencer> {
    let obj = record
        .as_object()
        .ok_or_else(|| RanktrailError::malformed_record(index, "record is not a JSON object"))?;

    let influencer_id = identity_field(index, obj, "influencer_id")?;
    let screen_name = identity_field(index, obj, "screen_name")?;
    let retweeted_count = obj
        .get("retweeted_count")
        .and_then(coerce_number)
        .unwrap_or(0.0);

    let mut months = BTreeMap::new();
    for ym in timeline.iter() {
        months.insert(ym.to_string(), month_slot(obj.get(ym)));
    }

    Ok(Influencer {
        influencer_id,
        screen_name,
        retweeted_count,
        months,
    })
}

fn identity_field(
    index: usize,
    obj: &serde_json::Map<String, Value>,
    name: &str,
) -> RanktrailResult<String> {
    match obj.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        // Twitter dumps sometimes carry numeric ids unquoted.
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(RanktrailError::malformed_record(
            index,
            format!("missing identity field '{name}'"),
        )),
    }
}

/// Ranks are carried as `u32`, the upstream dataset's convention (integer
/// positions starting at 1). A fractional rank truncates; zero, negative,
/// and non-finite ranks are falsy and read as absent. Values above any
/// threshold pass through unclamped. Counts stay `f64` and are not range
/// checked.
fn month_slot(value: Option<&Value>) -> MonthSlot {
    let Some(Value::Object(pair)) = value else {
        return MonthSlot::ABSENT;
    };
    let rank = pair.get("rank").and_then(coerce_number).unwrap_or(0.0);
    if !rank.is_finite() || rank <= 0.0 {
        return MonthSlot::ABSENT;
    }
    let count = pair.get("count").and_then(coerce_number).unwrap_or(0.0);
    MonthSlot::present(rank as u32, count)
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timeline() -> Timeline {
        Timeline::from_range("2020-01", "2020-03").unwrap()
    }

    #[test]
    fn parses_present_and_absent_slots() {
        let records = vec![json!({
            "influencer_id": "42",
            "screen_name": "alice",
            "retweeted_count": "1200",
            "2020-01": {"rank": 0, "count": 0},
            "2020-02": {"rank": "3", "count": "50"},
        })];
        let out = normalize_records(&records, &timeline()).unwrap();
        assert_eq!(out.len(), 1);
        let inf = &out[0];
        assert_eq!(inf.influencer_id, "42");
        assert_eq!(inf.retweeted_count, 1200.0);
        assert_eq!(inf.slot("2020-01"), MonthSlot::ABSENT);
        assert_eq!(inf.slot("2020-02"), MonthSlot::present(3, 50.0));
        // Timeline month missing from the record normalizes to an absent slot.
        assert_eq!(inf.slot("2020-03"), MonthSlot::ABSENT);
        assert_eq!(inf.months.len(), 3);
    }

    #[test]
    fn numeric_id_is_accepted() {
        let records = vec![json!({
            "influencer_id": 42,
            "screen_name": "alice",
            "retweeted_count": 7,
        })];
        let out = normalize_records(&records, &timeline()).unwrap();
        assert_eq!(out[0].influencer_id, "42");
    }

    #[test]
    fn missing_identity_field_fails_the_batch() {
        let records = vec![
            json!({"influencer_id": "1", "screen_name": "a", "retweeted_count": 1}),
            json!({"influencer_id": "2", "retweeted_count": 2}),
        ];
        let err = normalize_records(&records, &timeline()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("index 1"), "{msg}");
        assert!(msg.contains("screen_name"), "{msg}");
    }

    #[test]
    fn non_object_record_fails() {
        let records = vec![json!([1, 2, 3])];
        assert!(normalize_records(&records, &timeline()).is_err());
    }

    #[test]
    fn retweeted_count_defaults_to_zero() {
        let records = vec![json!({"influencer_id": "1", "screen_name": "a"})];
        let out = normalize_records(&records, &timeline()).unwrap();
        assert_eq!(out[0].retweeted_count, 0.0);
    }

    #[test]
    fn rank_keeps_integer_representation() {
        let records = vec![json!({
            "influencer_id": "1",
            "screen_name": "a",
            "2020-01": {"rank": 2.7, "count": 5},
            "2020-02": {"rank": -3, "count": 5},
            "2020-03": {"rank": 99, "count": 5},
        })];
        let out = normalize_records(&records, &timeline()).unwrap();
        // Fractional ranks truncate to the integer position.
        assert_eq!(out[0].slot("2020-01"), MonthSlot::present(2, 5.0));
        // Negative ranks are falsy, like zero.
        assert_eq!(out[0].slot("2020-02"), MonthSlot::ABSENT);
        // Large ranks pass through unclamped.
        assert_eq!(out[0].slot("2020-03"), MonthSlot::present(99, 5.0));
    }

    #[test]
    fn unparseable_rank_reads_as_absent() {
        let records = vec![json!({
            "influencer_id": "1",
            "screen_name": "a",
            "2020-01": {"rank": "n/a", "count": 5},
        })];
        let out = normalize_records(&records, &timeline()).unwrap();
        assert_eq!(out[0].slot("2020-01"), MonthSlot::ABSENT);
    }
}
