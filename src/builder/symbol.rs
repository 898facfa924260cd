use image::{GrayImage, Luma};

use crate::common::{
    metadata::{Symbology, WidthClass},
    pattern::ModulePattern,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Bar,
    Separator,
}

impl Module {
    pub fn is_dark(self) -> bool {
        !matches!(self, Module::Empty)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RowHeight {
    Fixed(u32),
    /// Takes whatever height the fixed rows leave.
    Fill,
}

/// Rows reserved above the linear symbol for a composite component.
pub const SEPARATOR_ROWS: usize = 3;
pub const SEPARATOR_ROW_HEIGHT: u32 = 2;

// Symbol
//------------------------------------------------------------------------------

/// An encoded symbol: its run-length pattern, the human-readable text and the
/// module grid built from them. Composite-linked symbols carry three separator
/// rows above the linear row.
#[derive(Debug, Clone)]
pub struct Symbol {
    grid: Vec<Module>,
    w: usize,
    sym: Symbology,
    pattern: String,
    text: String,
    row_heights: Vec<RowHeight>,
    separators: Vec<(usize, usize)>,
}

impl Symbol {
    /// Rasterizes the finished pattern. Only called once the whole pipeline
    /// succeeded.
    pub(crate) fn new(
        sym: Symbology,
        pattern: ModulePattern,
        text: String,
        class: Option<WidthClass>,
    ) -> Self {
        let runs: Vec<usize> = pattern.runs().map(|run| run as usize).collect();
        let linear_w = runs.iter().sum::<usize>();
        let (rows, w) = match class {
            Some(_) => (SEPARATOR_ROWS + 1, linear_w + 2),
            None => (1, linear_w),
        };

        let mut symbol = Self {
            grid: vec![Module::Empty; rows * w],
            w,
            sym,
            pattern: pattern.into_string(),
            text,
            row_heights: Vec::with_capacity(rows),
            separators: Vec::new(),
        };

        if let Some(class) = class {
            symbol.reserve_separator_rows(class);
        }
        symbol.row_heights.push(RowHeight::Fill);
        symbol.expand_last_row(&runs);
        if class.is_some() {
            symbol.shift_last_row();
        }

        symbol
    }

    pub fn symbology(&self) -> Symbology {
        self.sym
    }

    /// Run-length pattern, bar first, one hex digit per run.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    pub fn row_heights(&self) -> &[RowHeight] {
        &self.row_heights
    }

    /// Separator modules as (row, column).
    pub fn separators(&self) -> &[(usize, usize)] {
        &self.separators
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Symbology: {:?}, Text: {}, Width: {}, Rows: {} }}",
            self.sym,
            self.text,
            self.w,
            self.rows()
        )
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|m| m.is_dark()).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.grid.len() + self.rows() + 1);
        res.push('\n');
        for r in 0..self.rows() {
            for c in 0..self.w {
                let c = match self.get(r, c) {
                    Module::Empty => '.',
                    Module::Bar => 'b',
                    Module::Separator => 's',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: usize, c: usize) -> usize {
        debug_assert!(c < self.w, "column {c} should be less than width {}", self.w);
        debug_assert!((r + 1) * self.w <= self.grid.len(), "row {r} out of bounds");
        r * self.w + c
    }

    pub fn get(&self, r: usize, c: usize) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    fn set(&mut self, r: usize, c: usize, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}

// Linear row
//------------------------------------------------------------------------------

impl Symbol {
    /// Draws the pattern into the last row, alternating bar and space runs.
    fn expand_last_row(&mut self, runs: &[usize]) {
        let r = self.rows() - 1;

        let mut c = 0;
        for (i, &run) in runs.iter().enumerate() {
            if i & 1 == 0 {
                for j in c..c + run {
                    self.set(r, j, Module::Bar);
                }
            }
            c += run;
        }
    }
}

// Composite separator
//------------------------------------------------------------------------------

impl Symbol {
    /// Reserves the three separator rows above the linear symbol, with the
    /// left and right separator modules of ISO/IEC 24723 section 11.4.
    fn reserve_separator_rows(&mut self, class: WidthClass) {
        let e = class.separator_col();
        let cols = [(1, e), (0, e + 1), (1, e)];

        for (r, (left, right)) in cols.into_iter().enumerate() {
            self.set(r, left, Module::Separator);
            self.set(r, right, Module::Separator);
            self.separators.push((r, left));
            self.separators.push((r, right));
            self.row_heights.push(RowHeight::Fixed(SEPARATOR_ROW_HEIGHT));
        }
    }

    /// Moves the linear row one column to the right, clearing column 0, to
    /// leave room for the separator artwork.
    fn shift_last_row(&mut self) {
        let r = self.rows() - 1;
        for c in (1..self.w).rev() {
            let prev = self.get(r, c - 1);
            self.set(r, c, prev);
        }
        self.set(r, 0, Module::Empty);
    }
}

// Render
//------------------------------------------------------------------------------

/// Quiet zone around the rendered symbol, in modules
pub const QUIET_ZONE: u32 = 10;
/// Total height of a rendered symbol, in modules
pub const DEFAULT_HEIGHT: u32 = 50;

impl Symbol {
    /// Height of each row in modules, fill rows sharing what fixed rows leave.
    pub fn row_module_heights(&self) -> Vec<u32> {
        let fixed: u32 = self
            .row_heights
            .iter()
            .map(|h| match h {
                RowHeight::Fixed(h) => *h,
                RowHeight::Fill => 0,
            })
            .sum();
        let fill_count = self.row_heights.iter().filter(|h| **h == RowHeight::Fill).count() as u32;
        let fill = match fill_count {
            0 => 0,
            n => (DEFAULT_HEIGHT.saturating_sub(fixed) / n).max(1),
        };

        self.row_heights
            .iter()
            .map(|h| match h {
                RowHeight::Fixed(h) => *h,
                RowHeight::Fill => fill,
            })
            .collect()
    }

    pub fn render(&self, module_sz: u32) -> GrayImage {
        let heights = self.row_module_heights();
        let symbol_h: u32 = heights.iter().sum();
        let qz_sz = QUIET_ZONE * module_sz;
        let total_w = qz_sz + self.w as u32 * module_sz + qz_sz;
        let total_h = qz_sz + symbol_h * module_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_w, total_h, Luma([255]));
        let mut y = qz_sz;
        for (r, h) in heights.iter().enumerate() {
            let row_h = h * module_sz;
            for c in 0..self.w {
                if !self.get(r, c).is_dark() {
                    continue;
                }
                let x = qz_sz + c as u32 * module_sz;
                for i in y..y + row_h {
                    for j in x..x + module_sz {
                        canvas.put_pixel(j, i, Luma([0]));
                    }
                }
            }
            y += row_h;
        }

        canvas
    }

    /// One line per row, dark modules as full blocks.
    pub fn to_str(&self) -> String {
        let mut canvas = String::with_capacity((self.w + 1) * self.rows() * 3);
        for r in 0..self.rows() {
            for c in 0..self.w {
                canvas.push(if self.get(r, c).is_dark() { '█' } else { ' ' });
            }
            canvas.push('\n');
        }
        canvas
    }
}
