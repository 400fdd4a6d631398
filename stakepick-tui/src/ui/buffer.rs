//! Cell buffer the UI is composed into before hitting the terminal.

use super::color::Rgb;
use super::text::char_width;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
    /// True for the trailing half of a double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
            wide_continuation: false,
        }
    }
}

/// Fixed-size grid of cells with change tracking against a previous frame.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Paint a solid rectangle of `bg`, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, fg: Rgb, bg: Rgb) {
        for yy in y..y.saturating_add(h).min(self.height) {
            for xx in x..x.saturating_add(w).min(self.width) {
                self.set(
                    xx,
                    yy,
                    Cell {
                        fg,
                        bg,
                        ..Cell::default()
                    },
                );
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_width` columns.
    ///
    /// Double-width characters occupy two cells; the trailing cell is marked
    /// as a continuation so the flush pass skips it.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        bold: bool,
        dim: bool,
        max_width: u16,
    ) {
        let mut cursor = x;
        let clip = x.saturating_add(max_width).min(self.width);
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cursor + w > clip {
                break;
            }
            self.set(
                cursor,
                y,
                Cell {
                    ch,
                    fg,
                    bg,
                    bold,
                    dim,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    cursor + 1,
                    y,
                    Cell {
                        ch: ' ',
                        fg,
                        bg,
                        bold,
                        dim,
                        wide_continuation: true,
                    },
                );
            }
            cursor += w;
        }
    }

    /// Multiply every cell's colors towards black. Used for modal backdrops.
    pub fn dim_all(&mut self, factor: f32) {
        for cell in &mut self.cells {
            cell.fg = cell.fg.dimmed(factor);
            cell.bg = cell.bg.dimmed(factor);
        }
    }

    /// Cells that differ from `previous`, in row-major order.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (cur, prev))| cur != prev)
            .map(move |(i, (cur, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cur)
            })
    }
}
