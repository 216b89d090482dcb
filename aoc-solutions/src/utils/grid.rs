//! Dense rectangular grids addressed by [`Point`]

use super::point::Point;
use anyhow::{Context, bail};

/// A rectangular grid of cells read from lines of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from text, converting every character with `cell`
    ///
    /// Trailing whitespace and blank lines at the end are ignored; all other
    /// lines must have the same length.
    pub fn parse<F>(input: &str, mut cell: F) -> anyhow::Result<Self>
    where
        F: FnMut(Point, char) -> anyhow::Result<T>,
    {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;

        for (y, line) in input.trim_end().lines().enumerate() {
            let line = line.trim_end();
            let mut row_width = 0;
            for (x, c) in line.chars().enumerate() {
                let point = Point::new(x as i64, y as i64);
                cells.push(cell(point, c).with_context(|| format!("line {}", y + 1))?);
                row_width += 1;
            }

            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    bail!(
                        "line {} has {} cells, expected {}",
                        y + 1,
                        row_width,
                        expected
                    )
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.index(point).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        self.index(point).map(|i| &mut self.cells[i])
    }

    /// Every point of the grid in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x as i64, y as i64)))
    }

    /// Every cell with its position, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.points().zip(self.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(input: &str) -> Grid<char> {
        Grid::parse(input, |_, c| Ok(c)).unwrap()
    }

    #[test]
    fn test_dimensions_and_lookup() {
        let grid = chars("abc\ndef\n\n");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Point::new(2, 1)), Some(&'f'));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
        assert!(!grid.contains(Point::new(0, 2)));
    }

    #[test]
    fn test_crlf_input() {
        let grid = chars("ab\r\ncd\r\n");
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(Point::new(1, 1)), Some(&'d'));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::parse("abc\nde", |_, c| Ok(c)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_cell_errors_name_the_line() {
        let err = Grid::parse("12\n3x", |_, c| {
            c.to_digit(10).with_context(|| format!("not a digit: {c:?}"))
        })
        .unwrap_err();
        assert_eq!(format!("{err:#}"), "line 2: not a digit: 'x'");
    }

    #[test]
    fn test_iter_positions() {
        let mut grid = chars("ab\ncd");
        *grid.get_mut(Point::new(0, 1)).unwrap() = 'z';

        let cells: Vec<(Point, char)> = grid.iter().map(|(p, c)| (p, *c)).collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, 0), 'a'),
                (Point::new(1, 0), 'b'),
                (Point::new(0, 1), 'z'),
                (Point::new(1, 1), 'd'),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let grid = chars("");
        assert_eq!((grid.width(), grid.height()), (0, 0));
        assert_eq!(grid.points().count(), 0);
    }
}
