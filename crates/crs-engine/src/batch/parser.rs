use super::normalizer::normalize_header;
use crate::scoring::BasicInfo;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct EstimateRecord {
    pub(crate) id: String,
    pub(crate) info: BasicInfo,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<EstimateRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect::<csv::StringRecord>();
    csv_reader.set_headers(headers);

    let mut records = Vec::new();
    for (index, record) in csv_reader.deserialize::<EstimateRow>().enumerate() {
        let row = record?;
        records.push(row.into_record(index + 1));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct EstimateRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    language: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    experience: Option<String>,
}

impl EstimateRow {
    fn into_record(self, line: usize) -> EstimateRecord {
        EstimateRecord {
            id: self.id.unwrap_or_else(|| format!("row-{line}")),
            info: BasicInfo {
                age: self.age.unwrap_or_default(),
                education: self.education.unwrap_or_default(),
                language_proficiency: self.language.unwrap_or_default(),
                canadian_work_experience: self.experience.unwrap_or_default(),
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
