use crate::domain::entities::holiday::{parse_date, Dataset, HolidayFlag, HolidayRecord};
use crate::domain::errors::{DomainError, DomainResult};
use serde::Deserialize;
use serde_json::Value;

/// Upstream envelope: `{"result": {"limit", "offset", "count", "sort", "results": [...]}}`.
/// `results` stays untyped so a wrong shape reports as a missing field, not a JSON error.
#[derive(Debug, Deserialize)]
struct Envelope {
    result: Option<ResultBlock>,
}

#[derive(Debug, Deserialize)]
struct ResultBlock {
    limit: Option<i64>,
    offset: Option<i64>,
    count: Option<i64>,
    sort: Option<String>,
    results: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(rename = "_id")]
    id: Option<i64>,
    date: Option<String>,
    name: Option<String>,
    #[serde(rename = "isHoliday")]
    is_holiday: Option<Value>,
    #[serde(rename = "holidaycategory")]
    category: Option<String>,
    description: Option<String>,
}

/// Decode the raw upstream document into a [`Dataset`].
///
/// No size limit is applied; callers that need one must enforce it before calling.
pub fn parse_dataset(raw: &[u8]) -> DomainResult<Dataset> {
    let envelope: Envelope =
        serde_json::from_slice(raw).map_err(|e| DomainError::MalformedJson(e.to_string()))?;

    let block = envelope
        .result
        .ok_or_else(|| DomainError::MissingField("result".to_string()))?;

    let elements = match block.results {
        Some(Value::Array(elements)) => elements,
        Some(_) => {
            return Err(DomainError::MissingField(
                "result.results (expected an array)".to_string(),
            ))
        }
        None => return Err(DomainError::MissingField("result.results".to_string())),
    };

    let records = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| decode_record(index, element))
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(Dataset {
        records,
        limit: block.limit,
        offset: block.offset,
        count: block.count,
        sort: block.sort,
    })
}

fn decode_record(index: usize, element: Value) -> DomainResult<HolidayRecord> {
    let wire: WireRecord = serde_json::from_value(element)
        .map_err(|e| DomainError::MalformedJson(format!("results[{}]: {}", index, e)))?;

    let date = wire
        .date
        .ok_or_else(|| DomainError::MissingField(format!("results[{}].date", index)))?;
    if parse_date(&date).is_none() {
        return Err(DomainError::InvalidDate(format!(
            "results[{}].date = {:?}",
            index, date
        )));
    }

    let is_holiday = match wire.is_holiday {
        None | Some(Value::Null) => {
            return Err(DomainError::MissingField(format!(
                "results[{}].isHoliday",
                index
            )))
        }
        Some(Value::String(token)) => HolidayFlag::from_token(&token).ok_or_else(|| {
            DomainError::InvalidEnumValue(format!("results[{}].isHoliday = {:?}", index, token))
        })?,
        Some(other) => {
            return Err(DomainError::InvalidEnumValue(format!(
                "results[{}].isHoliday = {}",
                index, other
            )))
        }
    };

    Ok(HolidayRecord {
        id: wire.id.unwrap_or_default(),
        date,
        name: wire.name.unwrap_or_default(),
        is_holiday,
        category: wire.category.unwrap_or_default(),
        description: wire.description.unwrap_or_default(),
    })
}
