use crate::common::*;

#[doc = r#"
    CSV 데이터셋의 한 행.

    헤더는 `Timestamp`, `Values` 두 컬럼을 필수로 가지며 그 외 컬럼은 무시한다.
    timestamp 는 설정된 포맷으로 별도 파싱하기 위해 문자열 그대로 받는다.
"#]
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesCsvRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Values")]
    pub values: f64,
}
