//! Chart pane structure: the nested parts of a plotting surface that take theme colors.

use egui::Color32;

/// How an area is filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillType {
    /// Transparent; `color` is ignored.
    #[default]
    None,
    /// Single color.
    Solid,
    /// Gradient starting from `color`.
    Gradient,
}

/// Area fill: type plus base color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fill {
    pub fill_type: FillType,
    pub color: Color32,
}

impl Fill {
    pub fn solid(color: Color32) -> Self {
        Self {
            fill_type: FillType::Solid,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub color: Color32,
    pub width: f32,
    pub visible: bool,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 1.0,
            visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub color: Color32,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: 12.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub color: Color32,
    pub visible: bool,
    pub length: f32,
}

impl Tick {
    fn with_length(length: f32) -> Self {
        Self {
            color: Color32::BLACK,
            visible: true,
            length,
        }
    }
}

/// One axis of a chart pane.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    /// Axis line color.
    pub color: Color32,
    /// Tick label font.
    pub scale_font: FontSpec,
    pub major_tick: Tick,
    pub minor_tick: Tick,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: Color32::BLACK,
            scale_font: FontSpec::default(),
            major_tick: Tick::with_length(5.0),
            minor_tick: Tick::with_length(2.5),
        }
    }

    /// Give the line, labels and both tick sets the same color.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.scale_font.color = color;
        self.major_tick.color = color;
        self.minor_tick.color = color;
    }
}

/// Plot area inside the pane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartArea {
    pub fill: Fill,
    pub border: Border,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Legend {
    pub fill: Fill,
    pub border: Border,
    pub font: FontSpec,
    pub visible: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            fill: Fill::solid(Color32::WHITE),
            border: Border::default(),
            font: FontSpec::default(),
            visible: true,
        }
    }
}

/// A plotting surface with a category axis and any number of value axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPane {
    pub title: String,
    /// Fill of the whole pane around the plot area.
    pub fill: Fill,
    pub chart: ChartArea,
    pub legend: Legend,
    /// Category (horizontal) axis.
    pub x_axis: Axis,
    /// Primary value axes, left side.
    pub y_axes: Vec<Axis>,
    /// Secondary value axes, right side.
    pub y2_axes: Vec<Axis>,
}

impl Default for ChartPane {
    fn default() -> Self {
        Self::new("")
    }
}

impl ChartPane {
    /// Pane with one primary value axis and no secondary axes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fill: Fill::solid(Color32::WHITE),
            chart: ChartArea::default(),
            legend: Legend::default(),
            x_axis: Axis::new("X"),
            y_axes: vec![Axis::new("Y")],
            y2_axes: Vec::new(),
        }
    }

    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axes.push(axis);
        self
    }

    pub fn with_y2_axis(mut self, axis: Axis) -> Self {
        self.y2_axes.push(axis);
        self
    }

    /// All axes: primary value axes, secondary value axes, then the category axis.
    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.y_axes
            .iter()
            .chain(self.y2_axes.iter())
            .chain(std::iter::once(&self.x_axis))
    }

    pub fn axes_mut(&mut self) -> impl Iterator<Item = &mut Axis> {
        self.y_axes
            .iter_mut()
            .chain(self.y2_axes.iter_mut())
            .chain(std::iter::once(&mut self.x_axis))
    }

    /// Fills take `bg`; borders, legend text and every axis take `fg`.
    pub fn apply_colors(&mut self, bg: Color32, fg: Color32) {
        self.chart.fill = Fill::solid(bg);
        self.chart.border.color = fg;
        self.legend.fill = Fill::solid(bg);
        self.legend.border.color = fg;
        self.legend.font.color = fg;
        self.fill.color = bg;
        for axis in self.axes_mut() {
            axis.set_color(fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_iterates_every_axis_once() {
        let pane = ChartPane::new("scope")
            .with_y_axis(Axis::new("Y1"))
            .with_y2_axis(Axis::new("Y2"));
        let titles: Vec<_> = pane.axes().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Y", "Y1", "Y2", "X"]);
    }

    #[test]
    fn pane_fill_keeps_its_fill_type() {
        let mut pane = ChartPane::new("scope");
        pane.fill.fill_type = FillType::Gradient;
        pane.apply_colors(Color32::DARK_GRAY, Color32::WHITE);
        assert_eq!(pane.fill.fill_type, FillType::Gradient);
        assert_eq!(pane.fill.color, Color32::DARK_GRAY);
        assert_eq!(pane.chart.fill.fill_type, FillType::Solid);
        assert_eq!(pane.legend.fill.fill_type, FillType::Solid);
    }
}
