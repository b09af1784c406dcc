//! CSV Loader
//!
//! Reads the launch table into a [`Dataset`]. Columns are located by header
//! name, so extra columns (flight number, dates, an unnamed index) are ignored.

use std::io::Read;
use std::path::Path;

use super::error::{LoadError, LoadResult};
use super::types::{Dataset, LaunchRecord, OutcomeClass};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

/// Column indices resolved from the header row
struct ColumnMap {
    launch_site: usize,
    payload_mass: usize,
    booster_version: usize,
    booster_category: usize,
    class: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            launch_site: find(COL_LAUNCH_SITE)?,
            payload_mass: find(COL_PAYLOAD_MASS)?,
            booster_version: find(COL_BOOSTER_VERSION)?,
            booster_category: find(COL_BOOSTER_CATEGORY)?,
            class: find(COL_CLASS)?,
        })
    }
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: &Path) -> LoadResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let dataset = Self::from_reader(file).map_err(|e| e.at_path(path))?;

        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            min_payload = dataset.min_payload(),
            max_payload = dataset.max_payload(),
            sites = ?dataset.sites(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load the dataset from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            records.push(parse_row(&row, &columns)?);
        }

        Dataset::from_records(records)
    }
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap) -> LoadResult<LaunchRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let malformed = |reason: String| LoadError::MalformedRow { line, reason };

    let field = |idx: usize, name: &str| {
        row.get(idx)
            .map(str::trim)
            .ok_or_else(|| malformed(format!("missing value for '{}'", name)))
    };

    let payload_str = field(columns.payload_mass, COL_PAYLOAD_MASS)?;
    let payload_mass_kg: f64 = payload_str
        .parse()
        .map_err(|_| malformed(format!("invalid payload mass '{}'", payload_str)))?;
    if !payload_mass_kg.is_finite() {
        return Err(malformed(format!("invalid payload mass '{}'", payload_str)));
    }

    let class_str = field(columns.class, COL_CLASS)?;
    let outcome = parse_class(class_str).map_err(malformed)?;

    Ok(LaunchRecord {
        launch_site: field(columns.launch_site, COL_LAUNCH_SITE)?.to_string(),
        payload_mass_kg,
        booster_version: field(columns.booster_version, COL_BOOSTER_VERSION)?.to_string(),
        booster_version_category: field(columns.booster_category, COL_BOOSTER_CATEGORY)?
            .to_string(),
        outcome,
    })
}

/// Parse the `class` column. Accepts `0`/`1` and their float spellings.
fn parse_class(s: &str) -> Result<OutcomeClass, String> {
    match s {
        "0" | "0.0" => Ok(OutcomeClass::Failure),
        "1" | "1.0" => Ok(OutcomeClass::Success),
        other => Err(format!("class must be 0 or 1, got '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
4,5,VAFB SLC-4E,1,9600.0,F9 B4 B1041.1,B4";

    #[test]
    fn test_load_sample() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);

        let last = &dataset.records()[4];
        assert_eq!(last.launch_site, "VAFB SLC-4E");
        assert_eq!(last.booster_version, "F9 B4 B1041.1");
        assert_eq!(last.booster_version_category, "B4");
        assert_eq!(last.outcome, OutcomeClass::Success);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dataset::load(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_error_names_path() {
        // Opening a directory succeeds on unix; reading it fails
        let dir = tempfile::tempdir().unwrap();
        match Dataset::load(dir.path()) {
            Err(LoadError::Io { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version,class
CCAFS LC-40,0.0,F9 v1.0  B0003,0";

        let result = Dataset::from_reader(csv_data.as_bytes());
        match result {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, COL_BOOSTER_CATEGORY),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_class() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version,Booster Version Category,class
CCAFS LC-40,0.0,F9 v1.0  B0003,v1.0,0
CCAFS LC-40,10.0,F9 v1.0  B0004,v1.0,2";

        match Dataset::from_reader(csv_data.as_bytes()) {
            Err(LoadError::MalformedRow { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("class"));
            }
            other => panic!("Expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_payload() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version,Booster Version Category,class
CCAFS LC-40,heavy,F9 v1.0  B0003,v1.0,0";

        assert!(matches!(
            Dataset::from_reader(csv_data.as_bytes()),
            Err(LoadError::MalformedRow { line: 2, .. })
        ));

        let csv_data = "Launch Site,Payload Mass (kg),Booster Version,Booster Version Category,class
CCAFS LC-40,NaN,F9 v1.0  B0003,v1.0,0";

        assert!(matches!(
            Dataset::from_reader(csv_data.as_bytes()),
            Err(LoadError::MalformedRow { .. })
        ));
    }

    #[test]
    fn test_ragged_row() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version,Booster Version Category,class
CCAFS LC-40,0.0,F9 v1.0  B0003";

        assert!(matches!(
            Dataset::from_reader(csv_data.as_bytes()),
            Err(LoadError::MalformedRow { .. })
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version,Booster Version Category,class\n";

        assert!(matches!(
            Dataset::from_reader(csv_data.as_bytes()),
            Err(LoadError::EmptyDataset)
        ));
    }

    #[test]
    fn test_float_class_spelling() {
        assert_eq!(parse_class("1.0"), Ok(OutcomeClass::Success));
        assert_eq!(parse_class("0"), Ok(OutcomeClass::Failure));
        assert!(parse_class("yes").is_err());
    }
}
