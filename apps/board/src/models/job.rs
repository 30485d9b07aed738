use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a job within the merged set.
///
/// The static feed is free to send either a JSON number or a numeric string;
/// both deserialize to the same id. Ids always serialize as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(JobId)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(v) => Ok(JobId(v)),
            Repr::Float(v) if v.fract() == 0.0 => Ok(JobId(v as i64)),
            Repr::Float(v) => Err(serde::de::Error::custom(format!(
                "job id must be a whole number, got {v}"
            ))),
            Repr::Text(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("job id '{s}' is not numeric"))),
        }
    }
}

/// Employment category of a job.
///
/// Unknown categories are preserved verbatim so that feed data round-trips
/// and exact-match filtering still works on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
    Other(String),
}

impl JobType {
    /// Categories offered by the search selector and the post-job form.
    pub const KNOWN: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Temporary,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Temporary => "temporary",
            JobType::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Temporary => "Temporary",
            JobType::Other(s) => s,
        }
    }
}

impl Default for JobType {
    fn default() -> Self {
        JobType::Other(String::new())
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "full-time" => JobType::FullTime,
            "part-time" => JobType::PartTime,
            "contract" => JobType::Contract,
            "internship" => JobType::Internship,
            "temporary" => JobType::Temporary,
            _ => JobType::Other(value),
        }
    }
}

impl From<&str> for JobType {
    fn from(value: &str) -> Self {
        JobType::from(value.to_string())
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        match value {
            JobType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job listing, from the static feed or posted by an employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JobId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: JobType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub how_to_apply: String,
}

impl JobRecord {
    /// True when the record carries a usable id. Zero counts as missing.
    pub fn has_id(&self) -> bool {
        matches!(self.id, Some(JobId(v)) if v != 0)
    }

    /// Compares against an id held as text (the selected-job pointer and
    /// application rows store ids as strings).
    pub fn matches_id(&self, raw: &str) -> bool {
        match self.id {
            Some(id) => id.to_string() == raw.trim(),
            None => false,
        }
    }
}

/// Employer input for a new posting. Every field is trimmed on conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub how_to_apply: String,
}

impl JobDraft {
    pub fn into_record(self, id: JobId) -> JobRecord {
        JobRecord {
            id: Some(id),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: JobType::from(self.job_type.trim()),
            description: self.description.trim().to_string(),
            qualifications: self.qualifications.trim().to_string(),
            how_to_apply: self.how_to_apply.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_accepts_number_and_string() {
        let a: JobId = serde_json::from_str("42").unwrap();
        let b: JobId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "42");
    }

    #[test]
    fn test_job_id_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<JobId>("\"abc\"").is_err());
    }

    #[test]
    fn test_record_uses_camel_case_and_type_key() {
        let raw = r#"{
            "id": 7,
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "type": "full-time",
            "description": "Build things",
            "qualifications": "Rust",
            "howToApply": "Email us"
        }"#;
        let job: JobRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(job.id, Some(JobId(7)));
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.how_to_apply, "Email us");

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["type"], "full-time");
        assert_eq!(back["howToApply"], "Email us");
    }

    #[test]
    fn test_missing_fields_default() {
        let job: JobRecord = serde_json::from_str(r#"{"title":"Designer"}"#).unwrap();
        assert_eq!(job.id, None);
        assert!(!job.has_id());
        assert_eq!(job.company, "");
        assert_eq!(job.job_type.as_str(), "");
    }

    #[test]
    fn test_unknown_job_type_is_preserved() {
        let t = JobType::from("freelance");
        assert_eq!(t, JobType::Other("freelance".to_string()));
        assert_eq!(String::from(t), "freelance");
    }

    #[test]
    fn test_zero_id_counts_as_missing() {
        let job: JobRecord = serde_json::from_str(r#"{"id":0,"title":"x"}"#).unwrap();
        assert!(!job.has_id());
    }

    #[test]
    fn test_matches_id_compares_text_form() {
        let job: JobRecord = serde_json::from_str(r#"{"id":1001}"#).unwrap();
        assert!(job.matches_id("1001"));
        assert!(job.matches_id(" 1001 "));
        assert!(!job.matches_id("1002"));
    }

    #[test]
    fn test_draft_trims_fields() {
        let draft = JobDraft {
            title: "  Engineer ".to_string(),
            job_type: " contract ".to_string(),
            how_to_apply: "\tApply online\n".to_string(),
            ..Default::default()
        };
        let job = draft.into_record(JobId(5));
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.job_type, JobType::Contract);
        assert_eq!(job.how_to_apply, "Apply online");
        assert_eq!(job.id, Some(JobId(5)));
    }
}
