use crate::common::*;

use crate::dto::series_csv_row::*;

use crate::model::series::{data_point::*, time_series::*};

use crate::traits::repository_traits::series_repository::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct CsvSeriesRepositoryImpl {
    csv_path: PathBuf,
    timestamp_format: String,
}

impl CsvSeriesRepositoryImpl {
    #[doc = r#"
        CSV 본문을 파싱하여 DataPoint 목록으로 변환하는 함수.

        1. 헤더에 `Timestamp`, `Values` 컬럼이 있는지 확인
        2. 각 행을 `SeriesCsvRow` 로 역직렬화 (그 외 컬럼은 무시)
        3. timestamp 를 설정된 포맷으로 파싱
        4. 어느 한 행이라도 실패하면 행 번호와 함께 오류 반환

        # Arguments
        * `raw_csv` - CSV 파일 전체 바이트

        # Returns
        * `anyhow::Result<Vec<DataPoint>>` - 파일 순서 그대로의 데이터 포인트 목록
    "#]
    fn parse_csv(&self, raw_csv: &[u8]) -> anyhow::Result<Vec<DataPoint>> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(raw_csv);

        let headers: StringRecord = reader
            .headers()
            .context("[CsvSeriesRepositoryImpl->parse_csv] Failed to read CSV header")?
            .clone();

        for required in ["Timestamp", "Values"] {
            if !headers.iter().any(|header| header == required) {
                return Err(anyhow!(
                    "[CsvSeriesRepositoryImpl->parse_csv] Missing required column '{}' in {:?}",
                    required,
                    self.csv_path
                ));
            }
        }

        let mut points: Vec<DataPoint> = Vec::new();

        for (row_idx, record) in reader.deserialize::<SeriesCsvRow>().enumerate() {
            /* header is line 1 */
            let line_no: usize = row_idx + 2;

            let row: SeriesCsvRow = record.with_context(|| {
                format!(
                    "[CsvSeriesRepositoryImpl->parse_csv] Malformed row at line {}",
                    line_no
                )
            })?;

            let timestamp: NaiveDateTime =
                parse_naive_datetime(&row.timestamp, &self.timestamp_format).with_context(|| {
                    format!(
                        "[CsvSeriesRepositoryImpl->parse_csv] Invalid timestamp at line {}",
                        line_no
                    )
                })?;

            /* f64 파싱은 NaN, inf 문자열도 받아들이므로 따로 거른다 */
            if !row.values.is_finite() {
                return Err(anyhow!(
                    "[CsvSeriesRepositoryImpl->parse_csv] Non-finite value '{}' at line {}",
                    row.values,
                    line_no
                ));
            }

            points.push(DataPoint::new(timestamp, row.values));
        }

        Ok(points)
    }
}

#[async_trait]
impl SeriesRepository for CsvSeriesRepositoryImpl {
    async fn load_time_series(&self) -> anyhow::Result<TimeSeries> {
        let raw_csv: Vec<u8> = tokio::fs::read(&self.csv_path).await.with_context(|| {
            format!(
                "[CsvSeriesRepositoryImpl->load_time_series] Failed to read {:?}",
                self.csv_path
            )
        })?;

        let points: Vec<DataPoint> = self.parse_csv(&raw_csv)?;

        if points.is_empty() {
            return Err(anyhow!(
                "[CsvSeriesRepositoryImpl->load_time_series] {:?} contains no data rows",
                self.csv_path
            ));
        }

        let time_series: TimeSeries = TimeSeries::new(points);

        info!(
            "Loaded {} rows from {:?} ({:?} ~ {:?})",
            time_series.len(),
            self.csv_path,
            time_series.first_timestamp(),
            time_series.last_timestamp()
        );

        Ok(time_series)
    }
}
