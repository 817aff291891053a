use crate::common::*;

use crate::dto::chart_frame::*;

use crate::enums::{chart_kind::*, chart_style::*, marker_shape::*, trace_color::*};

use crate::model::{configs::chart_config::*, series::time_series::*};

use crate::traits::service_traits::visualization_service::*;

use crate::utils_modules::calc_utils::*;

pub const PEAKS_LABEL: &str = "Peaks";
pub const LOWS_LABEL: &str = "Lows";
pub const ACCELERATION_LABEL: &str = "Downward Acceleration Points";

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct VisualizationServiceImpl {
    chart_config: ChartConfig,
    timestamp_format: String,
}

impl VisualizationServiceImpl {
    #[doc = "Empty frame with the title, axis labels, style and canvas size of the given chart kind"]
    fn base_frame(&self, series: &TimeSeries, kind: ChartKind) -> ChartFrame {
        let config: &ChartConfig = &self.chart_config;

        let (style, width, height) = match kind {
            ChartKind::LongMovingAverages => (
                ChartStyle::Presentation,
                config.presentation_width,
                config.presentation_height,
            ),
            ChartKind::DropAcceleration => {
                (ChartStyle::Classic, config.narrow_width, config.classic_height)
            }
            _ => (
                ChartStyle::Classic,
                config.classic_width,
                config.classic_height,
            ),
        };

        ChartFrame::new(
            kind.title(config),
            "Timestamp".to_string(),
            kind.y_desc().to_string(),
            self.timestamp_format.clone(),
            style,
            width,
            height,
            series.timestamps(),
        )
    }

    fn raw_line(&self, label: &str, values: &[f64]) -> LineTrace {
        LineTrace::new(
            label.to_string(),
            TraceColor::Blue,
            values.iter().map(|value| Some(*value)).collect(),
        )
    }

    fn short_average_line(&self, values: &[f64]) -> LineTrace {
        LineTrace::new(
            format!("{}-Day Moving Average", self.chart_config.short_window),
            TraceColor::Red,
            rolling_mean(values, self.chart_config.short_window),
        )
    }

    fn markers_at(
        &self,
        series: &TimeSeries,
        label: &str,
        color: TraceColor,
        shape: MarkerShape,
        positions: &[usize],
    ) -> MarkerTrace {
        let points: Vec<(NaiveDateTime, f64)> = series
            .select(positions)
            .into_iter()
            .map(|point| (point.timestamp, point.value))
            .collect();

        MarkerTrace::new(label.to_string(), color, shape, points)
    }
}

impl VisualizationService for VisualizationServiceImpl {
    fn build_chart_frame(
        &self,
        series: &TimeSeries,
        kind: ChartKind,
    ) -> anyhow::Result<ChartFrame> {
        if series.is_empty() {
            return Err(anyhow!(
                "[VisualizationServiceImpl->build_chart_frame] Cannot build chart {} from an empty series",
                kind.chart_no()
            ));
        }

        let values: Vec<f64> = series.values();
        let frame: ChartFrame = self.base_frame(series, kind);

        let frame: ChartFrame = match kind {
            ChartKind::Raw => frame.with_line(self.raw_line("Voltage", &values)),
            ChartKind::MovingAverage => frame
                .with_line(self.raw_line("Voltage", &values))
                .with_line(self.short_average_line(&values)),
            ChartKind::PeaksAndLows => {
                let peaks: Vec<usize> = find_local_maxima(&values);
                let lows: Vec<usize> = find_local_minima(&values);

                info!(
                    "[VisualizationServiceImpl->build_chart_frame] peaks: {}, lows: {}",
                    peaks.len(),
                    lows.len()
                );

                frame
                    .with_line(self.raw_line("Voltage", &values))
                    .with_line(self.short_average_line(&values))
                    .with_markers(self.markers_at(
                        series,
                        PEAKS_LABEL,
                        TraceColor::Green,
                        MarkerShape::TriangleUp,
                        &peaks,
                    ))
                    .with_markers(self.markers_at(
                        series,
                        LOWS_LABEL,
                        TraceColor::Orange,
                        MarkerShape::TriangleDown,
                        &lows,
                    ))
            }
            ChartKind::LongMovingAverages => {
                let long_window: usize = self.chart_config.long_window;
                let longer_window: usize = self.chart_config.longer_window;

                frame
                    .with_line(self.raw_line("Original Value", &values))
                    .with_line(LineTrace::new(
                        format!("{} Value MA", long_window),
                        TraceColor::Red,
                        rolling_mean(&values, long_window),
                    ))
                    .with_line(LineTrace::new(
                        format!("{} Value MA", longer_window),
                        TraceColor::Green,
                        rolling_mean(&values, longer_window),
                    ))
            }
            ChartKind::DropAcceleration => {
                let accel_points: Vec<usize> =
                    find_acceleration_points(&values, self.chart_config.acceleration_quantile);

                info!(
                    "[VisualizationServiceImpl->build_chart_frame] acceleration points: {}",
                    accel_points.len()
                );

                frame
                    .with_line(self.raw_line("Values", &values))
                    .with_markers(self.markers_at(
                        series,
                        ACCELERATION_LABEL,
                        TraceColor::Red,
                        MarkerShape::Circle,
                        &accel_points,
                    ))
            }
        };

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::series::data_point::*;
    use chrono::{Duration, NaiveDate};

    fn series_of(values: &[f64]) -> TimeSeries {
        let start: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        TimeSeries::new(
            values
                .iter()
                .enumerate()
                .map(|(i, value)| DataPoint::new(start + Duration::seconds(i as i64 * 10), *value))
                .collect(),
        )
    }

    fn service() -> VisualizationServiceImpl {
        VisualizationServiceImpl::new(ChartConfig::default(), "%d-%m-%Y %H:%M:%S".to_string())
    }

    #[test]
    fn increasing_series_reports_no_peaks_or_lows() {
        let values: Vec<f64> = (1..=10).map(|i| i as f64).collect();

        let frame: ChartFrame = service()
            .build_chart_frame(&series_of(&values), ChartKind::PeaksAndLows)
            .unwrap();

        assert!(frame.find_markers(PEAKS_LABEL).unwrap().points().is_empty());
        assert!(frame.find_markers(LOWS_LABEL).unwrap().points().is_empty());
        assert_eq!(frame.lines().len(), 2);
    }

    #[test]
    fn peaks_and_lows_mark_the_raw_values() {
        let frame: ChartFrame = service()
            .build_chart_frame(&series_of(&[1.0, 5.0, 2.0, 0.0, 3.0]), ChartKind::PeaksAndLows)
            .unwrap();

        let peaks: &MarkerTrace = frame.find_markers(PEAKS_LABEL).unwrap();
        let lows: &MarkerTrace = frame.find_markers(LOWS_LABEL).unwrap();

        assert_eq!(peaks.points().iter().map(|p| p.1).collect::<Vec<f64>>(), vec![5.0]);
        assert_eq!(lows.points().iter().map(|p| p.1).collect::<Vec<f64>>(), vec![0.0]);
        assert_eq!(peaks.shape(), &MarkerShape::TriangleUp);
        assert_eq!(lows.shape(), &MarkerShape::TriangleDown);
    }

    #[test]
    fn moving_average_line_matches_series_length() {
        let values: Vec<f64> = (0..12).map(|i| i as f64).collect();

        let frame: ChartFrame = service()
            .build_chart_frame(&series_of(&values), ChartKind::MovingAverage)
            .unwrap();

        let average: &LineTrace = &frame.lines()[1];
        assert_eq!(average.values().len(), 12);
        assert_eq!(average.values()[3], None);
        assert_eq!(average.values()[4], Some(2.0));
        assert_eq!(average.label(), "5-Day Moving Average");
    }

    #[test]
    fn long_averages_use_presentation_style() {
        let frame: ChartFrame = service()
            .build_chart_frame(&series_of(&[1.0, 2.0, 3.0]), ChartKind::LongMovingAverages)
            .unwrap();

        assert_eq!(frame.style(), &ChartStyle::Presentation);
        assert_eq!(frame.width(), &1400);
        assert_eq!(frame.lines().len(), 3);
        assert_eq!(frame.lines()[1].label(), "1000 Value MA");
        assert!(frame.lines()[2].values().iter().all(|value| value.is_none()));
    }

    #[test]
    fn drop_acceleration_marks_threshold_points() {
        let mut values: Vec<f64> = (0..40).map(|i| i as f64).collect();
        values[20] = 0.0;

        let frame: ChartFrame = service()
            .build_chart_frame(&series_of(&values), ChartKind::DropAcceleration)
            .unwrap();

        let marks: &MarkerTrace = frame.find_markers(ACCELERATION_LABEL).unwrap();
        assert_eq!(marks.points().len(), 2);
        assert_eq!(marks.points()[0].1, 0.0);
        assert_eq!(frame.width(), &1200);
    }

    #[test]
    fn every_kind_uses_its_own_title() {
        let series: TimeSeries = series_of(&[1.0, 2.0, 1.0]);

        for kind in ChartKind::ALL {
            let frame: ChartFrame = service().build_chart_frame(&series, kind).unwrap();
            assert_eq!(frame.title(), &kind.title(&ChartConfig::default()));
            assert_eq!(frame.x_desc(), "Timestamp");
        }
    }

    #[test]
    fn custom_windows_keep_title_and_legend_in_sync() {
        let chart_config: ChartConfig = ChartConfig {
            short_window: 3,
            long_window: 4,
            longer_window: 6,
            ..ChartConfig::default()
        };
        let service: VisualizationServiceImpl =
            VisualizationServiceImpl::new(chart_config, "%d-%m-%Y %H:%M:%S".to_string());
        let series: TimeSeries = series_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let short_frame: ChartFrame = service
            .build_chart_frame(&series, ChartKind::MovingAverage)
            .unwrap();
        assert_eq!(short_frame.title(), "Voltage with 3-Day Moving Average");
        assert_eq!(short_frame.lines()[1].label(), "3-Day Moving Average");

        let long_frame: ChartFrame = service
            .build_chart_frame(&series, ChartKind::LongMovingAverages)
            .unwrap();
        assert_eq!(long_frame.title(), "Values with 4 and 6 Value Moving Averages");
        assert_eq!(long_frame.lines()[1].label(), "4 Value MA");
        assert_eq!(long_frame.lines()[2].label(), "6 Value MA");
    }

    #[test]
    fn empty_series_is_rejected() {
        let result: anyhow::Result<ChartFrame> =
            service().build_chart_frame(&TimeSeries::new(Vec::new()), ChartKind::Raw);

        assert!(result.is_err());
    }
}
