use crate::base;

/// Accumulated measurements of one station.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    derive_more::Add,
    derive_more::AddAssign,
)]
pub struct Totals {
    pub capacity: base::Kwh,
    pub consumption: base::Kwh,
}

impl Totals {
    pub fn new(capacity: base::Kwh, consumption: base::Kwh) -> Self {
        Self {
            capacity,
            consumption,
        }
    }
}

/// One input line after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    station: String,
    totals: Totals,
}

impl Record {
    pub fn new(station: String, capacity: base::Kwh, consumption: base::Kwh) -> Self {
        Self {
            station,
            totals: Totals::new(capacity, consumption),
        }
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }
}

/// Describes how records are laid out in delimited text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layout {
    pub delimiter: char,
    pub missing_marker: String,
    pub station_column: usize,
    pub capacity_column: usize,
    pub consumption_column: usize,
    pub skip_header: bool,
    pub lenient_numbers: bool,
}

impl Default for Layout {
    /// Comma separated `station,hvb,hva,lv,company,individual,capacity,consumption`
    /// where `-` marks a missing value.
    fn default() -> Self {
        Self {
            delimiter: ',',
            missing_marker: "-".into(),
            station_column: 0,
            capacity_column: 6,
            consumption_column: 7,
            skip_header: false,
            lenient_numbers: false,
        }
    }
}

impl Layout {
    /// Returns the number of fields a line must have at minimum.
    pub fn min_columns(&self) -> usize {
        self.station_column
            .max(self.capacity_column)
            .max(self.consumption_column)
            .saturating_add(1)
    }

    /// Parses one line, without its line terminator.
    pub fn parse(&self, line: &str) -> Result<Record, RecordError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let fields = line.split(self.delimiter).map(str::trim).collect::<Vec<_>>();
        let field = |column: usize| {
            fields
                .get(column)
                .copied()
                .ok_or(RecordError::MissingColumn {
                    want: self.min_columns(),
                    found: fields.len(),
                })
        };

        let station = field(self.station_column)?;
        let capacity = field(self.capacity_column)?;
        let consumption = field(self.consumption_column)?;
        if station.is_empty() {
            return Err(RecordError::EmptyStation);
        }
        let capacity = self.parse_kwh(capacity, self.capacity_column)?;
        let consumption = self.parse_kwh(consumption, self.consumption_column)?;
        Ok(Record::new(station.to_string(), capacity, consumption))
    }

    fn parse_kwh(&self, field: &str, column: usize) -> Result<base::Kwh, RecordError> {
        if field == self.missing_marker {
            return Ok(base::Kwh(0));
        }
        match field.parse::<base::Kwh>() {
            Ok(kwh) => Ok(kwh),
            Err(_) if self.lenient_numbers => {
                log::warn!("column {}: '{}' is not a number, using 0", column, field);
                Ok(base::Kwh(0))
            }
            Err(e) => Err(RecordError::InvalidNumber {
                column,
                value: field.to_string(),
                source: e,
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("expected at least {want} columns, found {found}")]
    MissingColumn { want: usize, found: usize },
    #[error("station identifier is empty")]
    EmptyStation,
    #[error("line is not valid UTF-8")]
    InvalidUtf8(#[source] std::str::Utf8Error),
    #[error("column {column}: invalid quantity '{value}'")]
    InvalidNumber {
        column: usize,
        value: String,
        source: std::num::ParseIntError,
    },
}
