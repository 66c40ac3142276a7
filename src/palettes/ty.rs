pub(crate) use rgb::RGB8;

/// A colormap given by control points.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) typ: PaletteType,
    /// Positions in \[0, 1\] with their color.  Invariant: length ≥ 2,
    /// positions increasing, first is `0.` and last is `1.`.
    pub(crate) points: Vec<(f64, RGB8)>,
}

impl PaletteData {
    pub(crate) fn new(name: &'static str, typ: PaletteType,
                      points: &[(f64, [u8; 3])]) -> Self {
        let points = points.iter()
            .map(|&(t, [r, g, b])| (t, RGB8 { r, g, b }))
            .collect();
        PaletteData { name, typ, points }
    }
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range.
    Div,
}
