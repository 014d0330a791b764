//! Representative resolution: postal code + level → exactly one representative.
//!
//! Pipeline:
//! 1. Normalize the postal code and fetch candidates (single upstream call)
//! 2. Merge centroid then concordance matches
//! 3. Stable dedup by name, first occurrence wins
//! 4. Keep candidates whose `elected_office` matches the level's code
//! 5. Pick the first survivor and its mailing office

use std::collections::HashSet;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::lookup::civic_client::{PostcodeResponse, RepresentativeSource};
use crate::lookup::postal::normalize;
use crate::models::representative::{
    GovernmentLevel, Office, RepresentativeCandidate, ResolvedRepresentative,
};

pub const NOT_FOUND_MESSAGE: &str =
    "No representative found for this level. Check your postal code and level.";

/// Resolves the representative for a raw postal code at the requested level.
/// Blank inputs count as missing.
pub async fn resolve(
    source: &dyn RepresentativeSource,
    postal_code: Option<&str>,
    level: Option<&str>,
) -> Result<ResolvedRepresentative, AppError> {
    let (Some(raw_postal), Some(raw_level)) = (
        postal_code.filter(|p| !p.trim().is_empty()),
        level.filter(|l| !l.trim().is_empty()),
    ) else {
        return Err(AppError::InvalidRequest(
            "postalCode and level (federal|provincial) are required".to_string(),
        ));
    };

    let level: GovernmentLevel = raw_level.parse().map_err(AppError::InvalidRequest)?;
    let code = normalize(raw_postal);

    info!("Looking up {level} representative for {code}");
    let response = source.lookup(&code).await?;

    select_representative(response, level)
}

/// Steps 2–5 of the pipeline, over an already-fetched response.
pub fn select_representative(
    response: PostcodeResponse,
    level: GovernmentLevel,
) -> Result<ResolvedRepresentative, AppError> {
    let merged = merge_candidates(response);
    let unique = dedup_by_name(merged);
    let candidates = filter_by_level(unique, level);

    debug!(
        "{} {} candidate(s) after dedup and filtering",
        candidates.len(),
        level.office_code()
    );

    let chosen = candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    Ok(project(chosen))
}

/// Centroid matches first, then concordance matches.
pub fn merge_candidates(response: PostcodeResponse) -> Vec<RepresentativeCandidate> {
    let mut merged = response.representatives_centroid;
    merged.extend(response.representatives_concordance);
    merged
}

/// Drops any candidate whose name was already seen. The first record for a
/// name is kept whole; later records are never merged into it.
pub fn dedup_by_name(candidates: Vec<RepresentativeCandidate>) -> Vec<RepresentativeCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.name.clone()))
        .collect()
}

pub fn filter_by_level(
    candidates: Vec<RepresentativeCandidate>,
    level: GovernmentLevel,
) -> Vec<RepresentativeCandidate> {
    let code = level.office_code();
    candidates
        .into_iter()
        .filter(|c| c.elected_office == code)
        .collect()
}

/// Prefers a constituency office with a postal address, then any office
/// with one.
pub fn select_mailing_office(offices: &[Office]) -> Option<&Office> {
    offices
        .iter()
        .find(|o| o.office_type == "constituency" && o.has_postal())
        .or_else(|| offices.iter().find(|o| o.has_postal()))
}

fn project(candidate: RepresentativeCandidate) -> ResolvedRepresentative {
    let office = select_mailing_office(&candidate.offices);
    let office_postal = office.and_then(|o| o.postal.clone());
    let office_tel = office
        .and_then(|o| o.tel.clone())
        .filter(|t| !t.is_empty());

    ResolvedRepresentative {
        name: candidate.name,
        elected_office: candidate.elected_office,
        district_name: candidate.district_name,
        party_name: candidate.party_name.filter(|p| !p.is_empty()),
        email: candidate.email.filter(|e| !e.is_empty()),
        office_postal,
        office_tel,
    }
}
