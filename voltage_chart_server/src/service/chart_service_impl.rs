use crate::common::*;
use crate::dto::chart_frame::*;
use crate::enums::{chart_style::*, marker_shape::*};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{io_utils::*, time_utils::*};
use plotters::prelude::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(frame: &ChartFrame) -> (f64, f64) {
        let (min_val, max_val) = match frame.y_bounds() {
            Some(bounds) => bounds,
            None => return (0.0, 1.0),
        };

        let padding: f64 = if max_val > min_val {
            (max_val - min_val) * 0.05
        } else {
            min_val.abs().max(1.0) * 0.05
        };

        (min_val - padding, max_val + padding)
    }

    #[doc = "X-axis range in epoch seconds, widened when the series covers a single instant"]
    fn calculate_x_range(frame: &ChartFrame) -> (i64, i64) {
        let epochs = frame.timestamps().iter().map(|ts| convert_epoch_from_naive(*ts));

        let x_min: i64 = epochs.clone().min().unwrap_or(0);
        let x_max: i64 = epochs.max().unwrap_or(0);

        if x_max > x_min {
            (x_min, x_max)
        } else {
            (x_min - 1, x_max + 1)
        }
    }

    #[doc = r#"
        ChartFrame 을 RGB 버퍼에 그린 뒤 PNG 로 인코딩하는 동기 함수.
        `spawn_blocking` 안에서 호출된다.
    "#]
    fn draw_frame(frame: &ChartFrame) -> anyhow::Result<Vec<u8>> {
        let width: u32 = *frame.width();
        let height: u32 = *frame.height();
        let style: ChartStyle = *frame.style();

        let (x_min, x_max) = Self::calculate_x_range(frame);
        let (y_min, y_max) = Self::calculate_y_range(frame);

        let text_color: RGBColor = RGBColor(30, 30, 30);
        let (axis_color, grid_color, line_width) = match style {
            ChartStyle::Classic => (RGBColor(0, 0, 0), RGBColor(220, 220, 220), 2),
            ChartStyle::Presentation => (RGBColor(235, 235, 235), RGBColor(235, 235, 235), 1),
        };

        let x_label_format: String = frame.x_label_format().to_string();
        let x_formatter = |x: &i64| convert_str_from_epoch(*x, &x_label_format);
        let y_formatter = |y: &f64| format!("{:.2}", y);

        let mut buffer: Vec<u8> = vec![0; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    frame.title(),
                    ("sans-serif", 28).into_font().color(&text_color),
                )
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(80)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

            let mut mesh = chart.configure_mesh();
            mesh.x_desc(frame.x_desc().as_str())
                .y_desc(frame.y_desc().as_str())
                .x_labels(6)
                .y_labels(10)
                .axis_style(ShapeStyle::from(&axis_color).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                .x_label_style(("sans-serif", 14).into_font().color(&text_color))
                .y_label_style(("sans-serif", 14).into_font().color(&text_color))
                .axis_desc_style(("sans-serif", 18).into_font().color(&text_color))
                .x_label_formatter(&x_formatter)
                .y_label_formatter(&y_formatter);

            match style {
                ChartStyle::Classic => {
                    mesh.light_line_style(ShapeStyle::from(&grid_color.mix(0.4)).stroke_width(1));
                }
                ChartStyle::Presentation => {
                    mesh.light_line_style(TRANSPARENT);
                }
            }

            mesh.draw()?;

            /* 라인 트레이스: 값이 정의된 구간만 그린다 */
            for line in frame.lines() {
                let color: RGBColor = line.color().rgb();

                chart
                    .draw_series(LineSeries::new(
                        frame
                            .timestamps()
                            .iter()
                            .zip(line.values().iter())
                            .filter_map(|(ts, value)| {
                                value.map(|value| (convert_epoch_from_naive(*ts), value))
                            }),
                        ShapeStyle::from(&color).stroke_width(line_width),
                    ))?
                    .label(line.label().as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
            }

            /* 마커 트레이스 */
            for marker in frame.markers() {
                let color: RGBColor = marker.color().rgb();
                let shape: MarkerShape = *marker.shape();
                let coords: Vec<(i64, f64)> = marker
                    .points()
                    .iter()
                    .map(|(ts, value)| (convert_epoch_from_naive(*ts), *value))
                    .collect();

                match shape {
                    MarkerShape::Circle => {
                        chart
                            .draw_series(
                                coords
                                    .iter()
                                    .map(|coord| Circle::new(*coord, 4, color.filled())),
                            )?
                            .label(marker.label().as_str())
                            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
                    }
                    MarkerShape::TriangleUp | MarkerShape::TriangleDown => {
                        let vertices: Vec<(i32, i32)> = shape.vertices();
                        let legend_vertices: Vec<(i32, i32)> = vertices.clone();

                        chart
                            .draw_series(coords.iter().map(|coord| {
                                EmptyElement::at(*coord)
                                    + Polygon::new(vertices.clone(), color.filled())
                            }))?
                            .label(marker.label().as_str())
                            .legend(move |(x, y)| {
                                let points: Vec<(i32, i32)> = legend_vertices
                                    .iter()
                                    .map(|(dx, dy)| (x + 10 + dx, y + dy))
                                    .collect();
                                Polygon::new(points, color.filled())
                            });
                    }
                }
            }

            let (legend_position, legend_border) = match style {
                ChartStyle::Classic => (SeriesLabelPosition::UpperLeft, RGBColor(120, 120, 120)),
                ChartStyle::Presentation => {
                    (SeriesLabelPosition::UpperRight, RGBColor(235, 235, 235))
                }
            };

            chart
                .configure_series_labels()
                .position(legend_position)
                .background_style(WHITE.mix(0.85))
                .border_style(legend_border)
                .label_font(("sans-serif", 15).into_font().color(&text_color))
                .draw()?;

            root.present()?;
        }

        encode_png(buffer, width, height)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_png(&self, frame: ChartFrame) -> anyhow::Result<Vec<u8>> {
        if frame.timestamps().is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_png] Cannot generate chart with empty data"
            ));
        }

        let title: String = frame.title().to_string();

        let handle: tokio::task::JoinHandle<Result<Vec<u8>, anyhow::Error>> =
            tokio::task::spawn_blocking(move || Self::draw_frame(&frame));

        let drawing_result: Result<Vec<u8>, anyhow::Error> = handle
            .await
            .context("[ChartServiceImpl->render_png] blocking task join failed (panic/cancelled)")?;

        let png: Vec<u8> =
            drawing_result.context("[ChartServiceImpl->render_png] drawing/present failed")?;

        info!("Chart generated successfully: {} ({} bytes)", title, png.len());

        Ok(png)
    }
}
