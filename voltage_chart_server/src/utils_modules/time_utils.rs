use crate::common::*;

#[doc = "문자열을 지정된 포맷의 NaiveDateTime 으로 파싱"]
pub fn parse_naive_datetime(raw: &str, format: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), format).with_context(|| {
        format!(
            "[parse_naive_datetime()] '{}' does not match format '{}'",
            raw, format
        )
    })
}

#[doc = "NaiveDateTime 을 차트 x 좌표로 쓰는 epoch 초 단위 값으로 변환"]
pub fn convert_epoch_from_naive(time: NaiveDateTime) -> i64 {
    time.and_utc().timestamp()
}

#[doc = "epoch 초 값을 지정된 포맷의 문자열로 변환, 범위를 벗어나면 빈 문자열"]
pub fn convert_str_from_epoch(secs: i64, format: &str) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc().format(format).to_string())
        .unwrap_or_default()
}
