//! Clinical and biospecimen tables of the case page.

use crate::case_record::CaseRecord;
use crate::query::PageQuery;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    pub key: String,
    pub cells: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityTable {
    pub headings: Vec<&'static str>,
    pub rows: Vec<EntityRow>,
}

fn or_dash(value: Option<&String>) -> String {
    value.filter(|v| !v.is_empty()).cloned().unwrap_or_else(|| "--".to_string())
}

fn number_or_dash(value: Option<f64>) -> String {
    value.map(|v| format!("{}", v.round() as i64)).unwrap_or_else(|| "--".to_string())
}

/// Age given in days, shown as `"62 years 14 days"`.
pub fn format_age(days: Option<f64>) -> String {
    let Some(days) = days else { return "--".to_string() };
    let days = days.max(0.0).round() as u64;
    let (years, rest) = (days / 365, days % 365);
    let plural = |n: u64, unit: &str| if n == 1 { format!("{n} {unit}") } else { format!("{n} {unit}s") };
    match (years, rest) {
        (0, rest) => plural(rest, "day"),
        (years, 0) => plural(years, "year"),
        (years, rest) => format!("{} {}", plural(years, "year"), plural(rest, "day")),
    }
}

pub fn demographic_table(case: &CaseRecord) -> EntityTable {
    let headings = vec!["Gender", "Race", "Ethnicity", "Vital Status", "Days to Death"];
    let rows = case
        .demographic
        .iter()
        .map(|d| EntityRow {
            key: case.case_id.clone(),
            cells: vec![
                or_dash(d.gender.as_ref()),
                or_dash(d.race.as_ref()),
                or_dash(d.ethnicity.as_ref()),
                or_dash(d.vital_status.as_ref()),
                number_or_dash(d.days_to_death),
            ],
            highlighted: false,
        })
        .collect();
    EntityTable { headings, rows }
}

pub fn diagnoses_table(case: &CaseRecord) -> EntityTable {
    let headings = vec!["Diagnosis UUID", "Primary Diagnosis", "Tumor Stage", "Age at Diagnosis", "Days to Last Follow Up"];
    let rows = case
        .diagnoses
        .iter()
        .map(|d| EntityRow {
            key: d.diagnosis_id.clone(),
            cells: vec![
                d.diagnosis_id.clone(),
                or_dash(d.primary_diagnosis.as_ref()),
                or_dash(d.tumor_stage.as_ref()),
                format_age(d.age_at_diagnosis),
                number_or_dash(d.days_to_last_follow_up),
            ],
            highlighted: false,
        })
        .collect();
    EntityTable { headings, rows }
}

/// Samples of the case; the one named by `bio_id` (UUID or submitter id) is highlighted.
pub fn samples_table(case: &CaseRecord, bio_id: Option<&str>) -> EntityTable {
    let headings = vec!["Sample ID", "Sample UUID", "Sample Type", "Tissue Type"];
    let rows = case
        .samples
        .iter()
        .map(|s| EntityRow {
            key: s.sample_id.clone(),
            cells: vec![
                s.submitter_id.clone(),
                s.sample_id.clone(),
                or_dash(s.sample_type.as_ref()),
                or_dash(s.tissue_type.as_ref()),
            ],
            highlighted: bio_id.is_some_and(|id| id == s.sample_id || id == s.submitter_id),
        })
        .collect();
    EntityTable { headings, rows }
}

/// Current query with `bioId` pointing at `sample_id`.
pub fn select_sample(current: &PageQuery, sample_id: &str) -> PageQuery {
    PageQuery { bio_id: Some(sample_id.to_string()), ..current.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_record::{Demographic, Diagnosis, Sample};
    use pretty_assertions::assert_eq;

    #[test]
    fn ages_read_as_years_and_days() {
        assert_eq!(format_age(None), "--");
        assert_eq!(format_age(Some(1.0)), "1 day");
        assert_eq!(format_age(Some(365.0)), "1 year");
        assert_eq!(format_age(Some(730.0)), "2 years");
        assert_eq!(format_age(Some(748.0)), "2 years 18 days");
    }

    #[test]
    fn clinical_tables_fill_missing_values() {
        let case = CaseRecord {
            case_id: "c1".to_string(),
            demographic: Some(Demographic { gender: Some("female".to_string()), ..Default::default() }),
            diagnoses: vec![Diagnosis { diagnosis_id: "d1".to_string(), age_at_diagnosis: Some(730.0), ..Default::default() }],
            ..Default::default()
        };
        assert_eq!(demographic_table(&case).rows[0].cells, vec!["female", "--", "--", "--", "--"]);
        assert_eq!(diagnoses_table(&case).rows[0].cells, vec!["d1", "--", "--", "2 years", "--"]);
        assert!(demographic_table(&CaseRecord::default()).rows.is_empty());
    }

    #[test]
    fn bio_id_highlights_one_sample() {
        let sample = |id: &str, submitter: &str| Sample {
            sample_id: id.to_string(),
            submitter_id: submitter.to_string(),
            ..Default::default()
        };
        let case = CaseRecord { samples: vec![sample("s1", "TCGA-01A"), sample("s2", "TCGA-10A")], ..Default::default() };
        let highlighted = |bio_id| {
            samples_table(&case, bio_id).rows.iter().filter(|r| r.highlighted).map(|r| r.key.clone()).collect::<Vec<_>>()
        };
        assert_eq!(highlighted(None), Vec::<String>::new());
        assert_eq!(highlighted(Some("s2")), vec!["s2"]);
        assert_eq!(highlighted(Some("TCGA-01A")), vec!["s1"]);

        let query = select_sample(&PageQuery::default(), "s1");
        assert_eq!(query.bio_id.as_deref(), Some("s1"));
    }
}
