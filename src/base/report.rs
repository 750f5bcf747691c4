use crate::base;

/// Station totals rendered as CSV, one line per station in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Csv {
    pub rows: Vec<(String, base::Totals)>,
}

impl Csv {
    pub const HEADER: &str = "Station ID,Capacity (kWh),Consumption (kWh)";
}

impl<'a> FromIterator<(&'a str, base::Kwh, base::Kwh)> for Csv {
    fn from_iter<T: IntoIterator<Item = (&'a str, base::Kwh, base::Kwh)>>(iter: T) -> Self {
        let rows = iter
            .into_iter()
            .map(|(s, c, d)| (s.to_string(), base::Totals::new(c, d)))
            .collect();
        Self { rows }
    }
}

impl std::fmt::Display for Csv {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        for (station, t) in self.rows.iter() {
            writeln!(f, "{},{},{}", station, t.capacity, t.consumption)?;
        }
        Ok(())
    }
}
