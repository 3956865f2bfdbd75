// File: crates/covid-plot/src/reader.rs
// Summary: CSV reader producing the header and the day/cases/deaths columns in file order.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, Result};

/// One parsed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub day: i64,
    pub cases: i64,
    pub deaths: i64,
}

/// Header plus three equal-length columns, in file (chronological) order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub header: Vec<String>,
    pub days: Vec<i64>,
    pub cases: Vec<i64>,
    pub deaths: Vec<i64>,
}

impl Dataset {
    pub fn len(&self) -> usize { self.days.len() }
    pub fn is_empty(&self) -> bool { self.days.is_empty() }

    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.days
            .iter()
            .zip(&self.cases)
            .zip(&self.deaths)
            .map(|((&day, &cases), &deaths)| Record { day, cases, deaths })
    }

    // i128 so that any i64 column sums without overflow
    pub fn total_cases(&self) -> i128 { widen_sum(&self.cases) }
    pub fn total_deaths(&self) -> i128 { widen_sum(&self.deaths) }

    /// `Cases: <N>\tDeaths: <M>`
    pub fn summary_line(&self) -> String {
        format!("Cases: {}\tDeaths: {}", self.total_cases(), self.total_deaths())
    }

    fn push(&mut self, r: Record) {
        self.days.push(r.day);
        self.cases.push(r.cases);
        self.deaths.push(r.deaths);
    }
}

fn widen_sum(v: &[i64]) -> i128 {
    v.iter().map(|&x| i128::from(x)).sum()
}

const COLUMNS: [&str; 3] = ["day", "cases", "deaths"];

/// Open `path` and parse it. The file is closed on every return path.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PlotError::FileNotFound { path: path.to_path_buf() },
        _ => PlotError::Io(e),
    })?;
    let data = read_dataset_from(file)?;
    debug!(path = %path.display(), rows = data.len(), header = ?data.header, "read dataset");
    Ok(data)
}

/// Parse comma-separated text: header line, then `day,cases,deaths[,...]` rows.
/// The first bad row aborts the whole read.
pub fn read_dataset_from<R: Read>(src: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(src);

    let header = rdr.headers()?.iter().map(str::to_owned).collect();
    let mut data = Dataset { header, ..Dataset::default() };

    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // header is line 1
        let line = rec.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        if rec.len() < COLUMNS.len() {
            return Err(PlotError::Parse {
                line,
                message: format!("expected at least {} columns, got {}", COLUMNS.len(), rec.len()),
            });
        }
        let field = |col: usize| -> Result<i64> {
            let raw = rec.get(col).unwrap_or_default();
            raw.parse::<i64>().map_err(|_| PlotError::Parse {
                line,
                message: format!("invalid {} value '{}'", COLUMNS[col], raw),
            })
        };
        data.push(Record { day: field(0)?, cases: field(1)?, deaths: field(2)? });
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Dataset> {
        read_dataset_from(text.as_bytes())
    }

    #[test]
    fn reads_columns_in_file_order() {
        let d = parse("day,cases,deaths\n0,10,1\n1,20,2\n2,15,3\n").unwrap();
        assert_eq!(d.header, vec!["day", "cases", "deaths"]);
        assert_eq!(d.days, vec![0, 1, 2]);
        assert_eq!(d.cases, vec![10, 20, 15]);
        assert_eq!(d.deaths, vec![1, 2, 3]);
        assert_eq!(d.summary_line(), "Cases: 45\tDeaths: 6");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let d = parse("day,cases,deaths,region\n5,7,0,UK\n4,3,1,Scotland\n").unwrap();
        assert_eq!(d.header.len(), 4);
        // unordered days are kept as given
        assert_eq!(d.days, vec![5, 4]);
        assert_eq!(d.records().collect::<Vec<_>>()[1], Record { day: 4, cases: 3, deaths: 1 });
    }

    #[test]
    fn header_only_is_empty() {
        let d = parse("day,cases,deaths\n").unwrap();
        assert!(d.is_empty());
        assert_eq!(d.summary_line(), "Cases: 0\tDeaths: 0");
    }

    #[test]
    fn totals_do_not_overflow_near_i64_max() {
        let big = 5_000_000_000_000_000_000i64;
        let d = parse(&format!("day,cases,deaths\n0,{big},{max}\n1,{big},{max}\n", max = i64::MAX)).unwrap();
        assert_eq!(d.total_cases(), 2 * big as i128);
        assert_eq!(d.total_deaths(), 2 * i64::MAX as i128);
        assert_eq!(
            d.summary_line(),
            "Cases: 10000000000000000000\tDeaths: 18446744073709551614"
        );
    }

    #[test]
    fn negative_totals_sum_exactly() {
        let d = parse(&format!("day,cases,deaths\n0,{min},-1\n1,{min},-2\n", min = i64::MIN)).unwrap();
        assert_eq!(d.total_cases(), 2 * i64::MIN as i128);
        assert_eq!(d.total_deaths(), -3);
    }

    #[test]
    fn short_row_is_a_parse_error() {
        let err = parse("day,cases,deaths\n0,1,2\n1,2\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 3, .. }), "{err:?}");
    }

    #[test]
    fn non_numeric_in_any_column_fails() {
        for row in ["x,1,1", "1,x,1", "1,1,x", "1,2.5,1"] {
            let err = parse(&format!("day,cases,deaths\n{row}\n")).unwrap_err();
            assert!(matches!(err, PlotError::Parse { line: 2, .. }), "{row}: {err:?}");
        }
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let d = parse("day, cases, deaths\n 0 , 10 , 1 \n").unwrap();
        // header comes back exactly as written
        assert_eq!(d.header, vec!["day", " cases", " deaths"]);
        assert_eq!((d.days[0], d.cases[0], d.deaths[0]), (0, 10, 1));
    }
}
