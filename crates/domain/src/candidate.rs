use std::str::FromStr;

use chrono::{DateTime, Utc};
use reliquary_core::{NonEmptyString, ProjectId, RetentionError, RetentionResult};
use serde::{Deserialize, Serialize};

/// Supported artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Container image artifact.
    Image,
    /// Chart artifact.
    Chart,
}

impl ArtifactKind {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Chart => "chart",
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = RetentionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "image" => Ok(Self::Image),
            "chart" => Ok(Self::Chart),
            _ => Err(RetentionError::Validation(format!(
                "unknown artifact kind '{value}'"
            ))),
        }
    }
}

/// One artifact under consideration for a single retention run.
///
/// Timestamps are seconds since the Unix epoch; zero means never/unknown and
/// sorts as earliest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    project_id: ProjectId,
    namespace: NonEmptyString,
    repository: NonEmptyString,
    kind: ArtifactKind,
    digest: NonEmptyString,
    tags: Vec<String>,
    pushed_time: i64,
    pulled_time: i64,
    labels: Vec<String>,
}

/// Input payload for constructing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInput {
    /// Artifact kind.
    pub kind: ArtifactKind,
    /// Tags attached to the artifact.
    pub tags: Vec<String>,
    /// Seconds since epoch of the push instant; zero means unknown.
    pub pushed_time: i64,
    /// Seconds since epoch of the last pull; zero means never pulled.
    pub pulled_time: i64,
    /// Labels attached to the artifact.
    pub labels: Vec<String>,
}

impl Candidate {
    /// Creates a validated candidate.
    pub fn new(
        project_id: ProjectId,
        namespace: impl Into<String>,
        repository: impl Into<String>,
        digest: impl Into<String>,
        input: CandidateInput,
    ) -> RetentionResult<Self> {
        let CandidateInput {
            kind,
            tags,
            pushed_time,
            pulled_time,
            labels,
        } = input;

        if pushed_time < 0 || pulled_time < 0 {
            return Err(RetentionError::Validation(
                "candidate timestamps must not be negative".to_owned(),
            ));
        }

        Ok(Self {
            project_id,
            namespace: NonEmptyString::new(namespace)?,
            repository: NonEmptyString::new(repository)?,
            kind,
            digest: NonEmptyString::new(digest)?,
            tags,
            pushed_time,
            pulled_time,
            labels,
        })
    }

    /// Returns owning project identifier.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns project namespace name.
    #[must_use]
    pub fn namespace(&self) -> &NonEmptyString {
        &self.namespace
    }

    /// Returns repository name.
    #[must_use]
    pub fn repository(&self) -> &NonEmptyString {
        &self.repository
    }

    /// Returns artifact kind.
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Returns artifact content digest.
    #[must_use]
    pub fn digest(&self) -> &NonEmptyString {
        &self.digest
    }

    /// Returns attached tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns push instant in epoch seconds; zero means unknown.
    #[must_use]
    pub fn pushed_time(&self) -> i64 {
        self.pushed_time
    }

    /// Returns last-pull instant in epoch seconds; zero means never pulled.
    #[must_use]
    pub fn pulled_time(&self) -> i64 {
        self.pulled_time
    }

    /// Returns attached labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the push instant when known.
    #[must_use]
    pub fn pushed_at(&self) -> Option<DateTime<Utc>> {
        datetime_view(self.pushed_time)
    }

    /// Returns the last-pull instant when known.
    #[must_use]
    pub fn pulled_at(&self) -> Option<DateTime<Utc>> {
        datetime_view(self.pulled_time)
    }
}

fn datetime_view(seconds: i64) -> Option<DateTime<Utc>> {
    if seconds == 0 {
        return None;
    }

    DateTime::from_timestamp(seconds, 0)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use reliquary_core::{ProjectId, RetentionResult};

    use super::{ArtifactKind, Candidate, CandidateInput};

    fn input(pushed_time: i64, pulled_time: i64) -> CandidateInput {
        CandidateInput {
            kind: ArtifactKind::Image,
            tags: vec!["latest".to_owned()],
            pushed_time,
            pulled_time,
            labels: Vec::new(),
        }
    }

    #[test]
    fn candidate_rejects_negative_timestamps() {
        let result = Candidate::new(
            ProjectId::new(),
            "library",
            "library/nginx",
            "sha256:aa11",
            input(100, -1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn candidate_rejects_empty_repository() {
        let result = Candidate::new(
            ProjectId::new(),
            "library",
            "  ",
            "sha256:aa11",
            input(100, 0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_timestamps_have_no_datetime_view() -> RetentionResult<()> {
        let candidate = Candidate::new(
            ProjectId::new(),
            "library",
            "library/nginx",
            "sha256:aa11",
            input(1_700_000_000, 0),
        )?;

        assert!(candidate.pushed_at().is_some());
        assert!(candidate.pulled_at().is_none());
        Ok(())
    }

    #[test]
    fn artifact_kind_round_trips_storage_value() -> RetentionResult<()> {
        assert_eq!(ArtifactKind::from_str("chart")?, ArtifactKind::Chart);
        assert_eq!(ArtifactKind::Image.as_str(), "image");
        assert!(ArtifactKind::from_str("bundle").is_err());
        Ok(())
    }
}
