use serde::Deserialize;
use tabled::Tabled;

/// One CSV row as it comes out of the reader. Columns other than these two
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub date: String,
    pub temperature: f64,
}

/// Loaded records in file order. Never empty.
#[derive(Debug, Clone)]
pub struct WeatherTable {
    records: Vec<WeatherRecord>,
}

impl WeatherTable {
    /// Returns `None` when there are no records.
    pub fn new(records: Vec<WeatherRecord>) -> Option<WeatherTable> {
        if records.is_empty() {
            None
        } else {
            Some(WeatherTable { records })
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn first(&self) -> &WeatherRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &WeatherRecord {
        &self.records[self.records.len() - 1]
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }

    pub fn dates(&self) -> Vec<String> {
        self.records.iter().map(|r| r.date.clone()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub count: usize,
    pub first_date: String,
    pub last_date: String,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    /// Sample standard deviation; undefined for a single record.
    pub std_dev: Option<f64>,
    pub hottest: WeatherRecord,
    pub coolest: WeatherRecord,
}

#[derive(Debug, Tabled, Clone)]
pub struct PreviewRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Temperature")]
    pub temperature: String,
}
