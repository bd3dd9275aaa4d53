use log::debug;

use crate::config::validate_threshold;
use crate::errors::DeedTraceResult;
use crate::models::common::{ MatchScore, StatusSource, Verdict };
use crate::models::property::PropertyRecord;
use crate::models::report::Classification;
use crate::traits::name_matcher::NameMatcher;

/// Decides owner-occupied vs. tenant from a name comparison.
///
/// A business is owner-occupied only when its score is strictly greater than
/// the threshold; a score equal to the threshold is a tenant.
#[derive(Debug, Clone)]
pub struct OccupancyClassifier<M: NameMatcher> {
    matcher: M,
    threshold: f64,
}

impl<M: NameMatcher> OccupancyClassifier<M> {
    pub fn new(matcher: M, threshold: f64) -> DeedTraceResult<Self> {
        validate_threshold(threshold)?;
        Ok(Self { matcher, threshold })
    }

    pub fn score(&self, business_name: &str, owner_name: &str) -> MatchScore {
        self.matcher.similarity(business_name, owner_name)
    }

    pub fn verdict_for_score(&self, score: MatchScore) -> Verdict {
        if f64::from(score) > self.threshold {
            Verdict::OwnerOccupied
        } else {
            Verdict::Tenant
        }
    }

    pub fn classify(&self, business_name: &str, owner_name: &str) -> Verdict {
        self.verdict_for_score(self.score(business_name, owner_name))
    }

    /// Classify a stored record. A stored status wins; the name-based verdict
    /// is still computed and reported as advisory.
    pub fn classify_record(
        &self,
        record: &PropertyRecord,
        business_name: &str,
        portfolio_size: usize
    ) -> Classification {
        let match_score = self.score(business_name, &record.owner_name);
        let derived_verdict = self.verdict_for_score(match_score);

        let (status, status_source) = match record.occupancy_status {
            Some(stored) => (stored, StatusSource::Stored),
            None => (derived_verdict.into(), StatusSource::Derived),
        };

        debug!(
            "Record {}: score {} vs threshold {} -> {} ({} status {})",
            record.id,
            match_score,
            self.threshold,
            derived_verdict,
            status_source,
            status
        );

        Classification {
            status,
            status_source,
            derived_verdict,
            match_score,
            owner_name: record.owner_name.clone(),
            portfolio_size,
            risk_score: record.risk_score,
            coordinates: record.coordinates,
        }
    }
}
