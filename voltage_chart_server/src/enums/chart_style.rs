#[doc = r#"
    차트 렌더링 스타일.

    * `Classic` - 흰 배경, 검은 축, 옅은 격자, 좌상단 범례
    * `Presentation` - 흰 배경, 회색 격자, 축 테두리 없음, 우상단 범례, 얇은 선
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Classic,
    Presentation,
}
