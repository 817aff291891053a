use crate::common::*;

#[doc = r#"
    차트 생성에 사용되는 설정값.

    모든 항목에 기본값이 있으므로 설정 파일에서 `[chart]` 섹션을 생략해도 된다.

    * `short_window` - 2, 3번 차트의 이동평균 윈도우
    * `long_window`, `longer_window` - 4번 차트의 장기 이동평균 윈도우
    * `acceleration_quantile` - 5번 차트에서 2차 차분의 임계 분위수
    * `classic_*`, `narrow_width`, `presentation_*` - 차트별 캔버스 크기 (px)
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub longer_window: usize,
    pub acceleration_quantile: f64,
    pub classic_width: u32,
    pub classic_height: u32,
    pub narrow_width: u32,
    pub presentation_width: u32,
    pub presentation_height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            short_window: 5,
            long_window: 1000,
            longer_window: 5000,
            acceleration_quantile: 0.05,
            classic_width: 1500,
            classic_height: 600,
            narrow_width: 1200,
            presentation_width: 1400,
            presentation_height: 700,
        }
    }
}

impl ChartConfig {
    #[doc = r#"
        설정값이 차트를 그릴 수 있는 범위인지 검사하는 함수.

        * 이동평균 윈도우는 모두 1 이상
        * `acceleration_quantile` 은 [0, 1] 범위
        * 캔버스 크기는 모두 0보다 커야 한다

        # Returns
        * `anyhow::Result<()>` - 잘못된 항목이 있으면 Err
    "#]
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, window) in [
            ("short_window", self.short_window),
            ("long_window", self.long_window),
            ("longer_window", self.longer_window),
        ] {
            if window == 0 {
                return Err(anyhow!(
                    "[ChartConfig->validate] '{}' must be at least 1",
                    name
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.acceleration_quantile) {
            return Err(anyhow!(
                "[ChartConfig->validate] 'acceleration_quantile' must be within [0, 1], got {}",
                self.acceleration_quantile
            ));
        }

        for (name, size) in [
            ("classic_width", self.classic_width),
            ("classic_height", self.classic_height),
            ("narrow_width", self.narrow_width),
            ("presentation_width", self.presentation_width),
            ("presentation_height", self.presentation_height),
        ] {
            if size == 0 {
                return Err(anyhow!(
                    "[ChartConfig->validate] '{}' must be greater than 0",
                    name
                ));
            }
        }

        Ok(())
    }
}
