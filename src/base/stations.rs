use crate::base;

/// Per-station totals, ordered by station identifier.
#[derive(Debug, Default)]
pub struct Stations(base::Aggregate<String, base::Totals>);

impl Stations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// Adds the given quantities to `station`'s totals. Returns `true` if the
    /// station wasn't seen before.
    pub fn insert_or_merge(
        &mut self,
        station: &str,
        capacity: base::Kwh,
        consumption: base::Kwh,
    ) -> bool {
        self.0
            .insert_or_merge(station, base::Totals::new(capacity, consumption))
    }

    /// Iterates over `(station, capacity, consumption)` in ascending station
    /// order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, base::Kwh, base::Kwh)> + '_ {
        self.0
            .iter()
            .map(|(s, t)| (s.as_str(), t.capacity, t.consumption))
    }

    /// Releases all stations and returns how many there were.
    pub fn dispose(self) -> usize {
        self.0.dispose()
    }

    /// Reads one record per line from `reader` and aggregates them. Blank
    /// lines are skipped, as is the first line if `layout.skip_header` is set.
    pub fn from_reader<R>(mut reader: R, layout: &base::Layout) -> Result<Self, ReadError>
    where
        R: std::io::BufRead,
    {
        let mut stations = Self::new();
        let mut buf = Vec::new();
        let mut line = 0;
        let mut records = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line += 1;
            if line == 1 && layout.skip_header {
                continue;
            }
            let text = std::str::from_utf8(&buf).map_err(|e| ParseError {
                line,
                source: base::RecordError::InvalidUtf8(e),
            })?;
            log::trace!("line {}: {:?}", line, text);
            if text.trim().is_empty() {
                continue;
            }

            let r = layout
                .parse(text)
                .map_err(|e| ParseError { line, source: e })?;
            log::debug!(
                "line {}: station={} capacity={} consumption={}",
                line,
                r.station(),
                r.totals().capacity,
                r.totals().consumption,
            );
            let totals = r.totals();
            stations.insert_or_merge(r.station(), totals.capacity, totals.consumption);
            records += 1;
        }
        log::info!(
            "aggregated {} records into {} stations, tree height {}",
            records,
            stations.len(),
            stations.height(),
        );
        Ok(stations)
    }
}

impl FromIterator<base::Record> for Stations {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        let mut stations = Self::new();
        for r in iter {
            let totals = r.totals();
            stations.insert_or_merge(r.station(), totals.capacity, totals.consumption);
        }
        stations
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: base::RecordError,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
