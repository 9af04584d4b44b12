/// Trimmed copy of the data.taipei payload shape.
pub const SAMPLE_DATASET: &str = r#"{
  "result": {
    "limit": 1000,
    "offset": 1316,
    "count": 5,
    "sort": "",
    "results": [
      {"_id": 1317, "date": "20240101", "name": "開國紀念日", "isHoliday": "是", "holidaycategory": "放假之紀念日及節日", "description": "全國各機關學校放假一日。"},
      {"_id": 1318, "date": "20240106", "name": "", "isHoliday": "是", "holidaycategory": "星期六、星期日", "description": ""},
      {"_id": 1319, "date": "20240210", "name": "春節", "isHoliday": "是", "holidaycategory": "放假之紀念日及節日", "description": ""},
      {"_id": 1320, "date": "20240210", "name": "duplicate", "isHoliday": "否", "holidaycategory": "", "description": ""},
      {"_id": 1321, "date": "20240903", "name": "軍人節", "isHoliday": "是", "holidaycategory": "特定節日", "description": "軍人放假一日。"}
    ]
  }
}"#;

pub fn dataset_with(results: &str) -> String {
    format!(r#"{{"result":{{"results":{}}}}}"#, results)
}

pub fn temp_dir(prefix: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()))
}
