//! Tabular demand data keyed by province.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use dm_core::{CoreResult, DemandSeries, ProvinceKey, sum_series};
use tracing::{debug, warn};

use crate::error::{DataLoadError, DataResult};

/// One loaded spreadsheet: a shared year span and one row per province.
///
/// The file layout is a name column followed by one column per year, years
/// ascending without gaps, demand values in GWh.
#[derive(Debug, Clone)]
pub struct DemandTable {
    first_year: u16,
    last_year: u16,
    rows: BTreeMap<ProvinceKey, TableRow>,
}

/// A single province row.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Display name as spelled in the source file.
    pub name: String,
    pub series: DemandSeries,
}

impl DemandTable {
    /// Read a CSV table whose first column is `name_column` and whose
    /// remaining columns are consecutive years.
    pub fn from_csv(path: &Path, name_column: &str) -> DataResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = parse_csv(path, name_column, &content)?;
        debug!(
            path = %path.display(),
            provinces = table.len(),
            first_year = table.first_year,
            last_year = table.last_year,
            "loaded demand table"
        );
        Ok(table)
    }

    /// Build a table directly from rows sharing `first_year`. Used by tests
    /// and tooling that synthesize datasets without files.
    pub fn from_rows<S: AsRef<str>>(first_year: u16, rows: &[(S, Vec<f64>)]) -> CoreResult<Self> {
        let mut out = BTreeMap::new();
        let mut last_year = first_year;
        for (name, values) in rows {
            let series = DemandSeries::new(first_year, values.clone())?;
            if !out.is_empty() && series.last_year() != last_year {
                return Err(dm_core::CoreError::LengthMismatch {
                    what: "table rows",
                    expected: (last_year - first_year) as usize + 1,
                    got: series.len(),
                });
            }
            last_year = series.last_year();
            out.insert(
                ProvinceKey::new(name.as_ref()),
                TableRow {
                    name: name.as_ref().trim().to_string(),
                    series,
                },
            );
        }
        Ok(Self {
            first_year,
            last_year,
            rows: out,
        })
    }

    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    pub fn last_year(&self) -> u16 {
        self.last_year
    }

    pub fn years(&self) -> RangeInclusive<u16> {
        self.first_year..=self.last_year
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, key: &ProvinceKey) -> bool {
        self.rows.contains_key(key)
    }

    pub fn get(&self, key: &ProvinceKey) -> Option<&TableRow> {
        self.rows.get(key)
    }

    /// Rows in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProvinceKey, &TableRow)> {
        self.rows.iter()
    }

    /// Element-wise sum over every row: the national aggregate. None for an
    /// empty table.
    pub fn national_total(&self) -> Option<DemandSeries> {
        sum_series(self.rows.values().map(|row| &row.series)).ok()
    }
}

fn parse_csv(path: &Path, name_column: &str, content: &str) -> DataResult<DemandTable> {
    let to_path = || path.to_path_buf();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Csv {
            path: to_path(),
            source,
        })?
        .clone();

    let mut columns = headers.iter();
    match columns.next() {
        Some(first) if first.eq_ignore_ascii_case(name_column) => {}
        _ => {
            return Err(DataLoadError::MissingNameColumn {
                path: to_path(),
                column: name_column.to_string(),
            });
        }
    }

    let years = parse_year_columns(path, columns)?;
    let first_year = *years.first().ok_or_else(|| DataLoadError::NoYearColumns {
        path: to_path(),
    })?;
    let last_year = years[years.len() - 1];

    let mut rows: BTreeMap<ProvinceKey, TableRow> = BTreeMap::new();
    for record in reader.records() {
        let record = record.map_err(|source| DataLoadError::Csv {
            path: to_path(),
            source,
        })?;
        let name = record.get(0).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let key = ProvinceKey::new(name);
        if rows.contains_key(&key) {
            // Source files occasionally repeat a province; keep the first row.
            warn!(path = %path.display(), province = name, "dropping duplicate row");
            continue;
        }

        let mut values = Vec::with_capacity(years.len());
        for (i, &year) in years.iter().enumerate() {
            let cell = record.get(i + 1).unwrap_or("");
            let value: f64 = cell.parse().map_err(|_| DataLoadError::BadValue {
                path: to_path(),
                value: cell.to_string(),
                province: name.to_string(),
                year,
            })?;
            if !value.is_finite() {
                return Err(DataLoadError::BadValue {
                    path: to_path(),
                    value: cell.to_string(),
                    province: name.to_string(),
                    year,
                });
            }
            if value < 0.0 {
                return Err(DataLoadError::NegativeValue {
                    path: to_path(),
                    value,
                    province: name.to_string(),
                    year,
                });
            }
            values.push(value);
        }

        let series = DemandSeries::new(first_year, values).map_err(|source| {
            DataLoadError::Series {
                path: to_path(),
                source,
            }
        })?;
        rows.insert(
            key,
            TableRow {
                name: name.to_string(),
                series,
            },
        );
    }

    if rows.is_empty() {
        return Err(DataLoadError::EmptyTable { path: to_path() });
    }

    Ok(DemandTable {
        first_year,
        last_year,
        rows,
    })
}

fn parse_year_columns<'a, I>(path: &Path, columns: I) -> DataResult<Vec<u16>>
where
    I: Iterator<Item = &'a str>,
{
    let mut years = Vec::new();
    for column in columns {
        let year: u16 = column.parse().map_err(|_| DataLoadError::BadYearColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })?;
        if let Some(&prev) = years.last() {
            if year != prev + 1 {
                return Err(DataLoadError::YearGap {
                    path: path.to_path_buf(),
                    prev,
                    next: year,
                });
            }
        }
        years.push(year);
    }
    Ok(years)
}
