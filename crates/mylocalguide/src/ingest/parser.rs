use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::domain::{ListingSource, VenueCandidate};

#[derive(Debug)]
pub enum VenueImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownSource { row: usize, value: String },
}

impl std::fmt::Display for VenueImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VenueImportError::Io(err) => write!(f, "failed to read venue export: {}", err),
            VenueImportError::Csv(err) => write!(f, "invalid venue CSV data: {}", err),
            VenueImportError::UnknownSource { row, value } => {
                write!(f, "row {row}: unknown listing source '{value}'")
            }
        }
    }
}

impl std::error::Error for VenueImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VenueImportError::Io(err) => Some(err),
            VenueImportError::Csv(err) => Some(err),
            VenueImportError::UnknownSource { .. } => None,
        }
    }
}

impl From<std::io::Error> for VenueImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for VenueImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct VenueRow {
    #[serde(default)]
    source: String,
    external_id: String,
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    review_count: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

/// Reads venue listings exported as CSV.
///
/// Expected headers: `source, external_id, name, address, tags, rating,
/// review_count, phone, website`. Tags are semicolon-separated; unparseable
/// ratings and counts are treated as missing.
pub struct VenueCsvImporter;

impl VenueCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VenueCandidate>, VenueImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<VenueCandidate>, VenueImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut candidates = Vec::new();
        for (index, row) in csv_reader.deserialize::<VenueRow>().enumerate() {
            let row = row?;
            let source =
                ListingSource::parse(&row.source).ok_or_else(|| VenueImportError::UnknownSource {
                    row: index + 1,
                    value: row.source.clone(),
                })?;

            candidates.push(VenueCandidate {
                source,
                external_id: row.external_id,
                name: row.name,
                address: row.address,
                tags: split_tags(row.tags.as_deref()),
                rating: row.rating.and_then(|value| value.parse().ok()),
                review_count: row.review_count.and_then(|value| value.parse().ok()),
                phone: row.phone,
                website: row.website,
            });
        }

        Ok(candidates)
    }
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "source,external_id,name,address,tags,rating,review_count,phone,website\n";

    #[test]
    fn parses_rows_with_optional_cells() {
        let csv = format!(
            "{HEADER}yelp,tartine-sf,Tartine Bakery,\"600 Guerrero St, San Francisco, CA 94110\",Bakeries; Cafes ,4.5,8000,,\n\
google,ChIJ123,Pier Market,,,,not-a-number,+1 415 555 0100,https://example.com\n"
        );
        let candidates = VenueCsvImporter::from_reader(Cursor::new(csv)).expect("parses");
        assert_eq!(candidates.len(), 2);

        let tartine = &candidates[0];
        assert_eq!(tartine.source, ListingSource::Yelp);
        assert_eq!(tartine.address, "600 Guerrero St, San Francisco, CA 94110");
        assert_eq!(tartine.tags, ["Bakeries", "Cafes"]);
        assert_eq!(tartine.rating, Some(4.5));
        assert_eq!(tartine.review_count, Some(8000));
        assert!(tartine.phone.is_none());

        let market = &candidates[1];
        assert_eq!(market.source, ListingSource::Google);
        assert!(market.tags.is_empty());
        assert!(market.review_count.is_none());
        assert_eq!(market.website.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn rejects_unknown_sources_with_row_number() {
        let csv = format!("{HEADER}yelp,a,A,,,,,,\nfoursquare,b,B,,,,,,\n");
        match VenueCsvImporter::from_reader(Cursor::new(csv)) {
            Err(VenueImportError::UnknownSource { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "foursquare");
            }
            other => panic!("expected unknown source, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = VenueCsvImporter::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, VenueImportError::Io(_)));
    }
}
