use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceColor {
    Blue,
    Red,
    Green,
    Orange,
}

impl TraceColor {
    pub fn rgb(&self) -> RGBColor {
        match self {
            TraceColor::Blue => RGBColor(0, 0, 255),
            TraceColor::Red => RGBColor(255, 0, 0),
            TraceColor::Green => RGBColor(0, 128, 0),
            TraceColor::Orange => RGBColor(255, 165, 0),
        }
    }
}
