use std::collections::HashSet;

use crate::JobListing;

/// Inputs of the local job filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text term, matched case-insensitively as a substring.
    pub term: String,
    /// Exact category to keep; `None` keeps every category.
    pub interest: Option<String>,
}

impl FilterCriteria {
    pub fn new(term: impl Into<String>, interest: Option<String>) -> Self {
        Self {
            term: term.into(),
            interest,
        }
    }

    fn matches(&self, lowered_term: &str, job: &JobListing) -> bool {
        let matches_search = job.job_role.to_lowercase().contains(lowered_term)
            || job.skills.to_lowercase().contains(lowered_term);
        let matches_interest = self
            .interest
            .as_deref()
            .is_none_or(|interest| job.interest == interest);
        matches_search && matches_interest
    }
}

/// Returns the listings that match `criteria`, keeping cache order.
///
/// The cache is only read; callers get fresh copies.
pub fn filter_jobs(jobs: &[JobListing], criteria: &FilterCriteria) -> Vec<JobListing> {
    let lowered = criteria.term.to_lowercase();
    jobs.iter()
        .filter(|job| criteria.matches(&lowered, job))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn distinct_interests(jobs: &[JobListing]) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .filter(|job| seen.insert(job.interest.as_str()))
        .map(|job| job.interest.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<JobListing> {
        vec![
            JobListing::new("Engineer", "Tech", "Go, SQL"),
            JobListing::new("Designer", "Art", "Figma"),
            JobListing::new("Data Engineer", "Tech", "Python, SQL"),
        ]
    }

    #[test]
    fn empty_criteria_keeps_everything() {
        assert_eq!(filter_jobs(&jobs(), &FilterCriteria::default()), jobs());
    }

    #[test]
    fn term_matches_role_or_raw_skills() {
        let by_role = filter_jobs(&jobs(), &FilterCriteria::new("DESIGN", None));
        assert_eq!(by_role.len(), 1);
        assert_eq!(by_role[0].job_role, "Designer");

        let by_skill = filter_jobs(&jobs(), &FilterCriteria::new("sql", None));
        let roles: Vec<_> = by_skill.iter().map(|j| j.job_role.as_str()).collect();
        assert_eq!(roles, vec!["Engineer", "Data Engineer"]);
    }

    #[test]
    fn term_and_category_must_both_match() {
        let hits = filter_jobs(
            &jobs(),
            &FilterCriteria::new("engineer", Some("Art".to_string())),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn raw_skills_string_is_searched_including_separators() {
        let hits = filter_jobs(&jobs(), &FilterCriteria::new("go, s", None));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn interests_are_deduped_in_first_seen_order() {
        assert_eq!(distinct_interests(&jobs()), vec!["Tech", "Art"]);
    }
}
