use crate::base;

const BOUNDING_SPACES_COUNT: usize = 2;
const MIN_DASHES_COUNT: usize = 2;

/// Aligned, human-readable rendering of station totals with a totals row.
pub struct Table<'a> {
    charset: &'a base::Charset,
    rows: Vec<[String; 3]>,
    total: [String; 3],
    widths: [usize; 3],
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub rows: Vec<(String, base::Totals)>,
}

impl Config {
    const HEADER: [&str; 3] = ["Station", "Capacity", "Consumption"];
    const TOTAL: &str = "Total";

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_table(&'_ self) -> Table<'_> {
        fn cells(label: &str, t: base::Totals) -> [String; 3] {
            [
                label.to_string(),
                t.capacity.grouped().to_string(),
                t.consumption.grouped().to_string(),
            ]
        }

        let rows = self
            .rows
            .iter()
            .map(|(station, t)| cells(station, *t))
            .collect::<Vec<_>>();
        let sum = self
            .rows
            .iter()
            .fold(base::Totals::default(), |acc, &(_, t)| acc + t);
        let total = cells(Self::TOTAL, sum);

        let mut widths = Self::HEADER.map(|s| s.chars().count());
        for row in rows.iter().chain(std::iter::once(&total)) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        Table {
            charset: &self.charset,
            rows,
            total,
            widths,
        }
    }
}

impl Table<'_> {
    /// Returns the number of chars in every line, excluding the newline.
    pub fn line_charlen(&self) -> usize {
        self.widths.iter().sum::<usize>()
            + 2 * (BOUNDING_SPACES_COUNT + MIN_DASHES_COUNT)
    }

    fn draw<S>(&self, w: &mut impl std::fmt::Write, cells: &[S; 3]) -> std::fmt::Result
    where
        S: AsRef<str>,
    {
        let [label, first, second] = cells.each_ref().map(|s| s.as_ref());
        let count = |s: &str| s.chars().count();
        w.write_str(label)?;
        w.write_char(' ')?;
        let first_dashes =
            self.widths[0] - count(label) + MIN_DASHES_COUNT + self.widths[1] - count(first);
        for _ in 0..first_dashes {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        w.write_str(first)?;
        w.write_char(' ')?;
        for _ in 0..(MIN_DASHES_COUNT + self.widths[2] - count(second)) {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        w.write_str(second)?;
        Ok(())
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.draw(f, &Config::HEADER)?;
        writeln!(f)?;
        for row in self.rows.iter() {
            self.draw(f, row)?;
            writeln!(f)?;
        }
        let mut total = String::with_capacity(self.line_charlen());
        self.draw(&mut total, &self.total)?;
        if self.charset.color {
            total = colored::Colorize::bold(total.as_str()).to_string();
        }
        writeln!(f, "{}", total)
    }
}
