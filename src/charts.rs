// Line and bar charts of the temperature series.
//
// Each chart draws into its own `Figure`, an RGB canvas sized in inches at a
// fixed DPI. Saving crops the canvas to its drawn content (plus a small pad)
// and writes a PNG carrying the DPI as physical-pixel metadata.
use crate::error::RenderError;
use crate::types::WeatherTable;
use crate::util::format_verbatim;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::panic;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LINE_FIGSIZE: (f64, f64) = (12.0, 6.0);
pub const BAR_FIGSIZE: (f64, f64) = (15.0, 6.0);
pub const LINE_TITLE: &str = "Daily Temperature Trends";
pub const BAR_TITLE: &str = "Daily Temperature - Bar Chart";
pub const LEGEND_LABEL: &str = "Daily Temperature";
/// Every n-th bar carries its value.
pub const ANNOTATE_EVERY: usize = 3;
const FONT: &str = "sans-serif";
const INCH_M: f64 = 0.0254;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line chart",
            ChartKind::Bar => "Bar chart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    LightCoral,
    Orange,
    Red,
}

impl BarColor {
    pub fn rgb(&self) -> RGBColor {
        match self {
            BarColor::LightCoral => RGBColor(240, 128, 128),
            BarColor::Orange => RGBColor(255, 165, 0),
            BarColor::Red => RGBColor(255, 0, 0),
        }
    }
}

/// `< 30` light coral, `30..35` orange, `>= 35` red.
pub fn bar_color(temperature: f64) -> BarColor {
    if temperature < 30.0 {
        BarColor::LightCoral
    } else if temperature < 35.0 {
        BarColor::Orange
    } else {
        BarColor::Red
    }
}

pub fn is_annotated(index: usize) -> bool {
    index % ANNOTATE_EVERY == 0
}

/// An in-memory RGB canvas. Renderers draw into the figure they are given.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    width: u32,
    height: u32,
    dpi: u32,
    pixels: Vec<u8>,
}

impl Figure {
    pub fn new(title: &str, (width_in, height_in): (f64, f64), dpi: u32) -> Figure {
        let width = (width_in * dpi as f64).round() as u32;
        let height = (height_in * dpi as f64).round() as u32;
        Figure {
            title: title.to_string(),
            width,
            height,
            dpi,
            pixels: vec![255; (width * height * 3) as usize],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Typographic points to pixels at this figure's DPI.
    fn pt(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    fn root(&mut self) -> DrawingArea<TextSafeBackend<BitMapBackend<'_>>, Shift> {
        let size = (self.width, self.height);
        TextSafeBackend::new(BitMapBackend::with_buffer(&mut self.pixels, size)).into_drawing_area()
    }

    /// Crop to the drawn content, padded by a tenth of an inch.
    pub fn cropped(&self) -> (u32, u32, Vec<u8>) {
        let pad = self.dpi / 10;
        match tight_bbox(&self.pixels, self.width, self.height, pad) {
            Some(bbox) => {
                let (x0, y0, x1, y1) = bbox;
                (x1 - x0, y1 - y0, crop(&self.pixels, self.width, bbox))
            }
            None => (self.width, self.height, self.pixels.clone()),
        }
    }

    pub fn write_png<W: Write>(&self, w: W) -> Result<(u32, u32), RenderError> {
        let (width, height, data) = self.cropped();
        let ppm = (self.dpi as f64 / INCH_M).round() as u32;
        let mut encoder = png::Encoder::new(w, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
        Ok((width, height))
    }
}

/// A rendered chart, plus where it was saved if it was.
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub figure: Figure,
    pub saved_to: Option<PathBuf>,
}

impl ChartArtifact {
    pub fn save_png(&mut self, path: &Path) -> Result<(), RenderError> {
        let file = File::create(path)?;
        let (w, h) = self.figure.write_png(BufWriter::new(file))?;
        debug!(path = %path.display(), width = w, height = h, "saved chart");
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }
}

pub fn create_line_chart(
    table: &WeatherTable,
    dpi: u32,
    save_path: Option<&Path>,
) -> Result<ChartArtifact, RenderError> {
    let mut figure = Figure::new(LINE_TITLE, LINE_FIGSIZE, dpi);
    render_line_chart(&mut figure, table)?;
    finish(ChartKind::Line, figure, save_path)
}

pub fn create_bar_chart(
    table: &WeatherTable,
    dpi: u32,
    save_path: Option<&Path>,
) -> Result<ChartArtifact, RenderError> {
    let mut figure = Figure::new(BAR_TITLE, BAR_FIGSIZE, dpi);
    render_bar_chart(&mut figure, table)?;
    finish(ChartKind::Bar, figure, save_path)
}

fn finish(
    kind: ChartKind,
    figure: Figure,
    save_path: Option<&Path>,
) -> Result<ChartArtifact, RenderError> {
    let mut artifact = ChartArtifact {
        kind,
        figure,
        saved_to: None,
    };
    if let Some(path) = save_path {
        artifact.save_png(path)?;
    }
    Ok(artifact)
}

/// Font sizes and stroke widths, already converted to pixels.
struct Sizes {
    title: f64,
    axis_desc: f64,
    tick: f64,
    small: f64,
    margin: u32,
    x_label_area: u32,
    y_label_area: u32,
    line: u32,
    marker: u32,
}

impl Sizes {
    fn for_figure(fig: &Figure) -> Sizes {
        Sizes {
            title: fig.pt(16.0),
            axis_desc: fig.pt(12.0),
            tick: fig.pt(9.0),
            small: fig.pt(8.0),
            margin: fig.pt(12.0) as u32,
            x_label_area: fig.pt(72.0) as u32,
            y_label_area: fig.pt(48.0) as u32,
            line: fig.pt(2.0).max(1.0) as u32,
            marker: fig.pt(4.0).max(1.0) as u32,
        }
    }
}

pub fn render_line_chart(fig: &mut Figure, table: &WeatherTable) -> Result<(), RenderError> {
    let sizes = Sizes::for_figure(fig);
    let title = fig.title().to_string();
    let labels = table.dates();
    let temps = table.temperatures();
    let root = fig.root();
    draw_line_chart(root, &title, &labels, &temps, &sizes)
        .map_err(|e| RenderError::Drawing(e.to_string()))
}

pub fn render_bar_chart(fig: &mut Figure, table: &WeatherTable) -> Result<(), RenderError> {
    let sizes = Sizes::for_figure(fig);
    let title = fig.title().to_string();
    let labels = table.dates();
    let temps = table.temperatures();
    let root = fig.root();
    draw_bar_chart(root, &title, &labels, &temps, &sizes)
        .map_err(|e| RenderError::Drawing(e.to_string()))
}

fn segment_label(labels: &[String], v: &SegmentValue<usize>) -> String {
    match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

/// Data range with 10% headroom on both sides.
fn padded_range(temps: &[f64]) -> (f64, f64) {
    let (lo, hi) = temps
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(*t), hi.max(*t))
        });
    let pad = if (hi - lo).abs() > 1e-6 {
        (hi - lo) * 0.1
    } else {
        1.0
    };
    (lo - pad, hi + pad)
}

fn draw_line_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    title: &str,
    labels: &[String],
    temps: &[f64],
    sizes: &Sizes,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let n = temps.len();
    let (y_lo, y_hi) = padded_range(temps);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, FontDesc::from((FONT, sizes.title)).style(FontStyle::Bold))
        .margin(sizes.margin)
        .x_label_area_size(sizes.x_label_area)
        .y_label_area_size(sizes.y_label_area)
        .build_cartesian_2d((0..n.saturating_sub(1)).into_segmented(), y_lo..y_hi)?;

    let x_fmt = |v: &SegmentValue<usize>| segment_label(labels, v);
    chart
        .configure_mesh()
        .x_labels(n)
        .x_label_formatter(&x_fmt)
        // plotters only turns text in quarter turns
        .x_label_style(FontDesc::from((FONT, sizes.tick)).transform(FontTransform::Rotate90))
        .y_label_style((FONT, sizes.tick))
        .x_desc("Date")
        .y_desc("Temperature (°C)")
        .axis_desc_style((FONT, sizes.axis_desc))
        .bold_line_style(BLACK.mix(0.3).stroke_width(1))
        .light_line_style(BLACK.mix(0.08).stroke_width(1))
        .draw()?;

    let points: Vec<(SegmentValue<usize>, f64)> = temps
        .iter()
        .enumerate()
        .map(|(i, t)| (SegmentValue::CenterOf(i), *t))
        .collect();
    let line_style = RED.stroke_width(sizes.line);
    let legend_len = (sizes.axis_desc * 1.5) as i32;
    chart
        .draw_series(LineSeries::new(points.clone(), line_style))?
        .label(LEGEND_LABEL)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], line_style));
    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new(p.clone(), sizes.marker, RED.filled())),
    )?;

    chart
        .configure_series_labels()
        .label_font((FONT, sizes.tick))
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_bar_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    title: &str,
    labels: &[String],
    temps: &[f64],
    sizes: &Sizes,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let n = temps.len();
    let lo = temps.iter().copied().fold(0.0, f64::min);
    let hi = temps.iter().copied().fold(0.0, f64::max);
    // headroom for the value labels
    let span = (hi - lo).max(1.0);
    let (y_lo, y_hi) = (
        if lo < 0.0 { lo - span * 0.05 } else { 0.0 },
        hi + span * 0.1,
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(title, FontDesc::from((FONT, sizes.title)).style(FontStyle::Bold))
        .margin(sizes.margin)
        .x_label_area_size(sizes.x_label_area)
        .y_label_area_size(sizes.y_label_area)
        .build_cartesian_2d((0..n.saturating_sub(1)).into_segmented(), y_lo..y_hi)?;

    let x_fmt = |v: &SegmentValue<usize>| segment_label(labels, v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&x_fmt)
        // plotters only turns text in quarter turns
        .x_label_style(FontDesc::from((FONT, sizes.tick)).transform(FontTransform::Rotate90))
        .y_label_style((FONT, sizes.tick))
        .x_desc("Date")
        .y_desc("Temperature (°C)")
        .axis_desc_style((FONT, sizes.axis_desc))
        .bold_line_style(BLACK.mix(0.3).stroke_width(1))
        .light_line_style(BLACK.mix(0.08).stroke_width(1))
        .draw()?;

    let gap = (sizes.margin / 6).max(1);
    let bar_bounds = |i: usize, t: f64| {
        let right = if i + 1 < n {
            SegmentValue::Exact(i + 1)
        } else {
            SegmentValue::Last
        };
        [(SegmentValue::Exact(i), 0.0), (right, t)]
    };
    chart.draw_series(temps.iter().enumerate().flat_map(|(i, t)| {
        let mut fill = Rectangle::new(bar_bounds(i, *t), bar_color(*t).rgb().mix(0.7).filled());
        fill.set_margin(0, 0, gap, gap);
        let mut edge = Rectangle::new(bar_bounds(i, *t), BLACK.stroke_width(1));
        edge.set_margin(0, 0, gap, gap);
        [fill, edge]
    }))?;

    let value_style =
        TextStyle::from((FONT, sizes.small)).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(
        temps
            .iter()
            .enumerate()
            .filter(|(i, _)| is_annotated(*i))
            .map(|(i, t)| {
                Text::new(
                    format!("{}°C", format_verbatim(*t)),
                    (SegmentValue::CenterOf(i), *t + 0.3),
                    value_style.clone(),
                )
            }),
    )?;

    root.present()?;
    Ok(())
}

/// Bounding box `(x0, y0, x1, y1)` (end-exclusive) of every non-white pixel,
/// grown by `pad` and clamped to the canvas. `None` for a blank canvas.
pub fn tight_bbox(pixels: &[u8], width: u32, height: u32, pad: u32) -> Option<(u32, u32, u32, u32)> {
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (i, px) in pixels.chunks_exact(3).enumerate() {
        if px.iter().all(|c| *c == 255) {
            continue;
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        bbox = Some(match bbox {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bbox.map(|(x0, y0, x1, y1)| {
        (
            x0.saturating_sub(pad),
            y0.saturating_sub(pad),
            (x1 + 1 + pad).min(width),
            (y1 + 1 + pad).min(height),
        )
    })
}

fn crop(pixels: &[u8], width: u32, (x0, y0, x1, y1): (u32, u32, u32, u32)) -> Vec<u8> {
    let mut out = Vec::with_capacity(((x1 - x0) * (y1 - y0) * 3) as usize);
    for y in y0..y1 {
        let start = ((y * width + x0) * 3) as usize;
        let end = ((y * width + x1) * 3) as usize;
        out.extend_from_slice(&pixels[start..end]);
    }
    out
}

/// Forwards everything to the inner backend, except that text the inner
/// backend cannot render (no usable system font) is drawn with built-in 5x7
/// dot-matrix glyphs instead of failing the chart.
struct TextSafeBackend<DB> {
    inner: DB,
}

impl<DB> TextSafeBackend<DB> {
    fn new(inner: DB) -> Self {
        Self { inner }
    }
}

impl<DB: DrawingBackend> DrawingBackend for TextSafeBackend<DB> {
    type ErrorType = DB::ErrorType;

    fn get_size(&self) -> (u32, u32) {
        self.inner.get_size()
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.ensure_prepared()
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.present()
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_pixel(point, color)
    }

    fn draw_line<S: plotters_backend::BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_line(from, to, style)
    }

    fn draw_rect<S: plotters_backend::BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_rect(upper_left, bottom_right, style, fill)
    }

    fn draw_path<S: plotters_backend::BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_path(path, style)
    }

    fn draw_circle<S: plotters_backend::BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_circle(center, radius, style, fill)
    }

    fn fill_polygon<S: plotters_backend::BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.fill_polygon(vert, style)
    }

    fn blit_bitmap(
        &mut self,
        pos: BackendCoord,
        (iw, ih): (u32, u32),
        src: &[u8],
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.blit_bitmap(pos, (iw, ih), src)
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        match panic::catch_unwind(panic::AssertUnwindSafe(|| {
            self.inner.draw_text(text, style, pos)
        })) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(DrawingErrorKind::FontError(e))) => {
                debug!(error = %e, text, "no usable font; drawing bitmap glyphs");
                self.draw_text_fallback(text, style, pos)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                debug!(text, "text rendering panicked; drawing bitmap glyphs");
                self.draw_text_fallback(text, style, pos)
            }
        }
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        let estimated = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            self.inner.estimate_text_size(text, style)
        }));
        match estimated {
            Ok(Ok(size)) => Ok(size),
            Ok(Err(DrawingErrorKind::DrawingError(e))) => Err(DrawingErrorKind::DrawingError(e)),
            _ => Ok(fallback_text_size(text, style.size())),
        }
    }
}

impl<DB: DrawingBackend> TextSafeBackend<DB> {
    fn draw_text_fallback<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
        let color = style.color();
        if color.alpha == 0.0 || text.trim().is_empty() {
            return Ok(());
        }

        let scale = glyph_scale(style.size());
        let (width, height) = fallback_text_size(text, style.size());
        let (width, height) = (width as i32, height as i32);
        let anchor = style.anchor();
        let dx = match anchor.h_pos {
            HPos::Left => 0,
            HPos::Center => -width / 2,
            HPos::Right => -width,
        };
        let dy = match anchor.v_pos {
            VPos::Top => 0,
            VPos::Center => -height / 2,
            VPos::Bottom => -height,
        };
        let transform = style.transform();

        let mut cursor_x = dx;
        for ch in text.chars() {
            let Some(glyph) = fallback_glyph(ch) else {
                cursor_x += scale * GLYPH_SPACE_WIDTH;
                continue;
            };
            for (row, bits) in glyph.rows.iter().enumerate() {
                for col in 0..glyph.width {
                    if bits & (1 << (glyph.width - 1 - col)) != 0 {
                        let x = cursor_x + col as i32 * scale;
                        let y = dy + row as i32 * scale;
                        self.draw_glyph_block(pos, &transform, (x, y), scale, color)?;
                    }
                }
            }
            cursor_x += scale * (glyph.width as i32 + 1);
        }
        Ok(())
    }

    /// One glyph dot: a `scale` x `scale` block at `(x, y)` from `pos`, turned
    /// with the text.
    fn draw_glyph_block(
        &mut self,
        pos: BackendCoord,
        transform: &FontTransform,
        (x, y): (i32, i32),
        scale: i32,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
        for bx in 0..scale {
            for by in 0..scale {
                let (rx, ry) = transform.transform(x + bx, y + by);
                self.inner.draw_pixel((pos.0 + rx, pos.1 + ry), color)?;
            }
        }
        Ok(())
    }
}

const GLYPH_HEIGHT: usize = 7;
const GLYPH_SPACE_WIDTH: i32 = 3;

/// Glyph dot size for a font of `size` pixels; 7 rows plus leading.
fn glyph_scale(size: f64) -> i32 {
    ((size / 9.0).round() as i32).max(1)
}

/// Unrotated width and height of `text` drawn with the bitmap glyphs.
fn fallback_text_size(text: &str, size: f64) -> (u32, u32) {
    let scale = glyph_scale(size);
    let advance: i32 = text
        .chars()
        .map(|ch| match fallback_glyph(ch) {
            Some(glyph) => scale * (glyph.width as i32 + 1),
            None => scale * GLYPH_SPACE_WIDTH,
        })
        .sum();
    ((advance - scale).max(0) as u32, (scale * GLYPH_HEIGHT as i32) as u32)
}

#[derive(Clone, Copy)]
struct Glyph {
    width: u8,
    rows: [u8; GLYPH_HEIGHT],
}

const fn g(width: u8, rows: [u8; GLYPH_HEIGHT]) -> Glyph {
    Glyph { width, rows }
}

/// 5x7 dot-matrix glyphs; lowercase is drawn as uppercase.
fn fallback_glyph(ch: char) -> Option<Glyph> {
    Some(match ch.to_ascii_uppercase() {
        'A' => g(5, [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => g(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => g(5, [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => g(5, [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
        'E' => g(5, [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => g(5, [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => g(5, [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
        'H' => g(5, [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => g(3, [0b111, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111]),
        'J' => g(5, [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => g(5, [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => g(5, [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => g(5, [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => g(5, [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
        'O' => g(5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => g(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => g(5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => g(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => g(5, [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => g(5, [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => g(5, [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => g(5, [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => g(5, [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => g(5, [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => g(5, [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
        'Z' => g(5, [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        '0' => g(5, [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => g(3, [0b010, 0b110, 0b010, 0b010, 0b010, 0b010, 0b111]),
        '2' => g(5, [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => g(5, [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => g(5, [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => g(5, [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => g(5, [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => g(5, [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => g(5, [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => g(5, [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        '.' => g(1, [0, 0, 0, 0, 0, 0, 1]),
        ',' => g(2, [0, 0, 0, 0, 0, 0b01, 0b10]),
        ':' => g(1, [0, 0, 1, 0, 0, 1, 0]),
        '\'' => g(1, [1, 1, 0, 0, 0, 0, 0]),
        '-' => g(3, [0, 0, 0, 0b111, 0, 0, 0]),
        '+' => g(3, [0, 0, 0b010, 0b111, 0b010, 0, 0]),
        '_' => g(3, [0, 0, 0, 0, 0, 0, 0b111]),
        '(' => g(2, [0b01, 0b10, 0b10, 0b10, 0b10, 0b10, 0b01]),
        ')' => g(2, [0b10, 0b01, 0b01, 0b01, 0b01, 0b01, 0b10]),
        '/' => g(3, [0b001, 0b001, 0b010, 0b010, 0b010, 0b100, 0b100]),
        '%' => g(5, [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011]),
        '°' => g(3, [0b010, 0b101, 0b010, 0, 0, 0, 0]),
        _ => return None,
    })
}
