use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Date layout used by the upstream dataset and by published files.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Category given to Saturdays and Sundays that have no dataset entry.
pub const WEEKEND_CATEGORY: &str = "星期六、星期日";

/// Armed Forces Day. Listed as a holiday upstream, but not a day off for the public.
pub const ARMED_FORCES_DAY: &str = "軍人節";

/// Upstream token for "no".
pub const TOKEN_NO: &str = "否";

/// Upstream token for "yes".
pub const TOKEN_YES: &str = "是";

/// Two-state holiday classification.
///
/// Upstream sends the localized tokens `"否"` / `"是"`; published files carry the
/// integers `0` / `1`. Decoding and encoding are deliberately separate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HolidayFlag {
    #[default]
    NotHoliday,
    IsHoliday,
}

impl HolidayFlag {
    /// Decode an upstream token. Anything other than the two known glyphs is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            TOKEN_NO => Some(HolidayFlag::NotHoliday),
            TOKEN_YES => Some(HolidayFlag::IsHoliday),
            _ => None,
        }
    }

    /// Decode the published integer form.
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(HolidayFlag::NotHoliday),
            1 => Some(HolidayFlag::IsHoliday),
            _ => None,
        }
    }

    /// Encode to the published integer form.
    pub fn as_int(self) -> u8 {
        match self {
            HolidayFlag::NotHoliday => 0,
            HolidayFlag::IsHoliday => 1,
        }
    }

    pub fn is_holiday(self) -> bool {
        self == HolidayFlag::IsHoliday
    }
}

impl Serialize for HolidayFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_int())
    }
}

impl<'de> Deserialize<'de> for HolidayFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        HolidayFlag::from_int(value).ok_or_else(|| {
            serde::de::Error::custom(format!("isHoliday must be 0 or 1, got {}", value))
        })
    }
}

/// One entry of the upstream dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    pub id: i64,
    pub date: String, // YYYYMMDD
    pub name: String,
    pub is_holiday: HolidayFlag,
    pub category: String,
    pub description: String,
}

/// Parsed upstream dataset. Only `records` matters for resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub records: Vec<HolidayRecord>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub count: Option<i64>,
    pub sort: Option<String>,
}

impl Dataset {
    pub fn new(records: Vec<HolidayRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Effective classification of one calendar date, in the published JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    #[serde(rename = "_id", default)]
    pub id: i64,
    pub date: String, // YYYYMMDD
    #[serde(default)]
    pub name: String,
    #[serde(rename = "isHoliday")]
    pub is_holiday: HolidayFlag,
    #[serde(rename = "holidaycategory", default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl ResolvedDay {
    /// Day with no dataset entry: not a holiday, weekend-tagged on Sat/Sun.
    pub fn synthesized(date: NaiveDate) -> Self {
        Self {
            id: 0,
            date: format_date(date),
            name: String::new(),
            is_holiday: HolidayFlag::NotHoliday,
            category: weekday_category(date).to_string(),
            description: String::new(),
        }
    }

    pub fn from_record(record: &HolidayRecord) -> Self {
        Self {
            id: record.id,
            date: record.date.clone(),
            name: record.name.clone(),
            is_holiday: record.is_holiday,
            category: record.category.clone(),
            description: record.description.clone(),
        }
    }

    /// Parse `date` back into a calendar date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Strict `YYYYMMDD` parse: exactly eight ASCII digits forming a real date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn weekday_category(date: NaiveDate) -> &'static str {
    if is_weekend(date) {
        WEEKEND_CATEGORY
    } else {
        ""
    }
}
