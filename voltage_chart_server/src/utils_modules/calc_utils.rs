#[doc = r#"
    후행(trailing) 이동평균을 계산하는 함수.

    출력 길이는 입력 길이와 같다. 앞의 `window - 1` 개 항목은 윈도우가 채워지지 않았으므로
    `None` 이며, 이후 i 번째 항목은 `values[i + 1 - window ..= i]` 의 산술평균이다.
    입력이 윈도우보다 짧거나 윈도우가 0이면 모든 항목이 `None` 이다.

    # Arguments
    * `values` - 원본 값 목록
    * `window` - 이동평균 윈도우 크기

    # Returns
    * `Vec<Option<f64>>` - 이동평균 값 목록
"#]
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut result: Vec<Option<f64>> = vec![None; values.len()];

    if window == 0 || values.len() < window {
        return result;
    }

    /* NaN 은 그 값을 포함하는 윈도우에만 영향을 준다 */
    for (offset, slice) in values.windows(window).enumerate() {
        let window_sum: f64 = slice.iter().sum();
        result[offset + window - 1] = Some(window_sum / window as f64);
    }

    result
}

#[doc = "1차 차분. 첫 항목은 `None`, 이후 `values[i] - values[i - 1]`"]
pub fn diff(values: &[f64]) -> Vec<Option<f64>> {
    let defined: Vec<Option<f64>> = values.iter().map(|value| Some(*value)).collect();
    diff_defined(&defined)
}

#[doc = "정의되지 않은 항목을 포함하는 열의 차분. 어느 한쪽이라도 `None` 이면 결과도 `None`"]
pub fn diff_defined(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut result: Vec<Option<f64>> = Vec::with_capacity(values.len());

    if values.is_empty() {
        return result;
    }

    result.push(None);

    for pair in values.windows(2) {
        let delta: Option<f64> = match (pair[0], pair[1]) {
            (Some(prev), Some(cur)) => Some(cur - prev),
            _ => None,
        };
        result.push(delta);
    }

    result
}

#[doc = "2차 차분 (1차 차분의 차분). 앞의 두 항목은 `None`"]
pub fn second_diff(values: &[f64]) -> Vec<Option<f64>> {
    diff_defined(&diff(values))
}

#[doc = r#"
    분위수를 계산하는 함수.

    `None` 및 NaN 항목은 무시하고, 정렬된 값들 사이에서 선형 보간한다.
    (위치 = q * (n - 1), 양옆 순위 값의 가중 평균)
    계산할 값이 하나도 없거나 `q` 가 [0, 1] 범위를 벗어나면 `None` 을 반환한다.
"#]
pub fn quantile(values: &[Option<f64>], q: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&q) {
        return None;
    }

    let mut defined: Vec<f64> = values
        .iter()
        .filter_map(|value| *value)
        .filter(|value| !value.is_nan())
        .collect();

    if defined.is_empty() {
        return None;
    }

    defined.sort_by(|a, b| a.total_cmp(b));

    let position: f64 = q * (defined.len() - 1) as f64;
    let lower: usize = position.floor() as usize;
    let upper: usize = position.ceil() as usize;
    let fraction: f64 = position - lower as f64;

    Some(defined[lower] + (defined[upper] - defined[lower]) * fraction)
}

#[doc = r#"
    극대점(local maximum) 위치를 찾는 함수.

    양쪽 이웃보다 모두 엄격하게 큰 점만 극대점으로 본다.
    첫 번째와 마지막 점은 이웃이 하나뿐이므로 절대 포함되지 않는다.
    같은 값이 이어지는 평탄한 꼭대기는 극대점이 아니다.
"#]
pub fn find_local_maxima(values: &[f64]) -> Vec<usize> {
    if values.len() < 3 {
        return Vec::new();
    }

    (1..values.len() - 1)
        .filter(|&i| values[i - 1] < values[i] && values[i] > values[i + 1])
        .collect()
}

#[doc = "극소점(local minimum) 위치. 양쪽 이웃보다 모두 엄격하게 작은 점"]
pub fn find_local_minima(values: &[f64]) -> Vec<usize> {
    if values.len() < 3 {
        return Vec::new();
    }

    (1..values.len() - 1)
        .filter(|&i| values[i - 1] > values[i] && values[i] < values[i + 1])
        .collect()
}

#[doc = r#"
    급격한 하강 가속 지점을 찾는 함수.

    2차 차분을 계산한 뒤 그 `q` 분위수를 임계값으로 잡고,
    2차 차분이 임계값보다 엄격하게 작은 위치들을 반환한다.
    임계값은 호출할 때마다 전체 시계열에 대해 새로 계산한다.
"#]
pub fn find_acceleration_points(values: &[f64], q: f64) -> Vec<usize> {
    let accel: Vec<Option<f64>> = second_diff(values);

    let threshold: f64 = match quantile(&accel, q) {
        Some(threshold) => threshold,
        None => return Vec::new(),
    };

    accel
        .iter()
        .enumerate()
        .filter_map(|(i, value)| match value {
            Some(value) if *value < threshold => Some(i),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual: f64 = actual.expect("expected a defined value");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn rolling_mean_leaves_warmup_undefined() {
        let ma: Vec<Option<f64>> = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);

        assert_eq!(ma.len(), 6);
        assert_eq!(ma[0], None);
        assert_eq!(ma[1], None);
        assert_close(ma[2], 2.0);
        assert_close(ma[3], 3.0);
        assert_close(ma[5], 5.0);
    }

    #[test]
    fn rolling_mean_shorter_than_window_is_undefined() {
        let ma: Vec<Option<f64>> = rolling_mean(&[1.0, 2.0, 3.0], 5);

        assert_eq!(ma, vec![None, None, None]);
    }

    #[test]
    fn rolling_mean_window_one_is_identity() {
        let ma: Vec<Option<f64>> = rolling_mean(&[4.0, -2.0, 9.5], 1);

        assert_eq!(ma, vec![Some(4.0), Some(-2.0), Some(9.5)]);
    }

    #[test]
    fn rolling_mean_recovers_after_nan_leaves_window() {
        let ma: Vec<Option<f64>> = rolling_mean(&[1.0, f64::NAN, 2.0, 3.0, 4.0, 5.0], 2);

        assert_eq!(ma[0], None);
        assert!(ma[1].unwrap().is_nan());
        assert!(ma[2].unwrap().is_nan());
        assert_close(ma[3], 2.5);
        assert_close(ma[4], 3.5);
        assert_close(ma[5], 4.5);
    }

    #[test]
    fn rolling_mean_zero_window_is_undefined() {
        assert_eq!(rolling_mean(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn first_and_second_difference() {
        let values: [f64; 5] = [1.0, 4.0, 9.0, 16.0, 25.0];

        assert_eq!(
            diff(&values),
            vec![None, Some(3.0), Some(5.0), Some(7.0), Some(9.0)]
        );
        assert_eq!(
            second_diff(&values),
            vec![None, None, Some(2.0), Some(2.0), Some(2.0)]
        );
    }

    #[test]
    fn difference_of_empty_and_single() {
        assert!(diff(&[]).is_empty());
        assert_eq!(diff(&[3.0]), vec![None]);
        assert_eq!(second_diff(&[3.0, 4.0]), vec![None, None]);
    }

    #[test]
    fn quantile_interpolates_between_ranks() {
        let values: Vec<Option<f64>> = vec![Some(4.0), None, Some(1.0), Some(3.0), Some(2.0)];

        assert_close(quantile(&values, 0.0), 1.0);
        assert_close(quantile(&values, 0.5), 2.5);
        assert_close(quantile(&values, 1.0), 4.0);
        assert_close(quantile(&values, 0.05), 1.15);
    }

    #[test]
    fn quantile_of_nothing_is_none() {
        assert_eq!(quantile(&[None, None], 0.05), None);
        assert_eq!(quantile(&[Some(1.0)], 1.5), None);
    }

    #[test]
    fn detects_strict_peaks_and_lows() {
        let values: [f64; 7] = [1.0, 3.0, 2.0, 2.0, 0.5, 4.0, 4.0];

        assert_eq!(find_local_maxima(&values), vec![1]);
        assert_eq!(find_local_minima(&values), vec![4]);
    }

    #[test]
    fn endpoints_are_never_extrema() {
        let values: [f64; 3] = [9.0, 1.0, 9.0];

        assert_eq!(find_local_maxima(&values), Vec::<usize>::new());
        assert_eq!(find_local_minima(&values), vec![1]);
        assert!(find_local_maxima(&[5.0, 1.0]).is_empty());
    }

    #[test]
    fn monotonic_series_has_no_extrema() {
        let values: Vec<f64> = (0..10).map(|i| i as f64).collect();

        assert!(find_local_maxima(&values).is_empty());
        assert!(find_local_minima(&values).is_empty());
    }

    #[test]
    fn acceleration_points_pick_sharpest_drop() {
        let mut values: Vec<f64> = (0..40).map(|i| i as f64).collect();
        values[20] = 0.0;

        /* the dip at 20 and the end of the rebound at 22 both have a second difference of -20 */
        let points: Vec<usize> = find_acceleration_points(&values, 0.05);

        assert_eq!(points, vec![20, 22]);
    }

    #[test]
    fn acceleration_points_need_three_samples() {
        assert!(find_acceleration_points(&[1.0, 2.0], 0.05).is_empty());
    }

    #[test]
    fn linear_series_has_no_acceleration_points() {
        let values: Vec<f64> = (0..50).map(|i| 2.0 * i as f64).collect();

        assert!(find_acceleration_points(&values, 0.05).is_empty());
    }

    proptest! {
        #[test]
        fn rolling_mean_matches_trailing_window(
            values in prop::collection::vec(-1_000.0f64..1_000.0, 0..120),
            window in 1usize..12,
        ) {
            let ma: Vec<Option<f64>> = rolling_mean(&values, window);

            prop_assert_eq!(ma.len(), values.len());

            for (i, entry) in ma.iter().enumerate() {
                if i + 1 < window {
                    prop_assert!(entry.is_none());
                } else {
                    let expected: f64 =
                        values[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
                    let actual: f64 = entry.unwrap();
                    prop_assert!((actual - expected).abs() < 1e-6);
                }
            }
        }

        #[test]
        fn extrema_are_strict_interior_points(values in prop::collection::vec(-50i32..50, 0..80)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();

            for i in find_local_maxima(&values) {
                prop_assert!(i > 0 && i + 1 < values.len());
                prop_assert!(values[i - 1] < values[i] && values[i + 1] < values[i]);
            }
            for i in find_local_minima(&values) {
                prop_assert!(i > 0 && i + 1 < values.len());
                prop_assert!(values[i - 1] > values[i] && values[i + 1] > values[i]);
            }
        }

        #[test]
        fn every_strict_interior_extremum_is_found(values in prop::collection::vec(-50i32..50, 0..80)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let maxima: Vec<usize> = find_local_maxima(&values);
            let minima: Vec<usize> = find_local_minima(&values);

            for i in 1..values.len().saturating_sub(1) {
                let is_peak: bool = values[i - 1] < values[i] && values[i + 1] < values[i];
                let is_low: bool = values[i - 1] > values[i] && values[i + 1] > values[i];

                prop_assert_eq!(maxima.contains(&i), is_peak);
                prop_assert_eq!(minima.contains(&i), is_low);
            }
        }
    }
}
