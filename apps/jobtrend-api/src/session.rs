#![allow(dead_code)]

//! Client session state: the dashboard's view of one user's analysis.
//!
//! State only changes through [`reduce`], a pure function of the previous
//! state, one [`SessionAction`] and the current time. Persistence is a JSON
//! blob stored under [`STORAGE_KEY`]; restoring replays the blob through the
//! reducer so a restored session is indistinguishable from a live one.
//!
//! The server never holds sessions; this module is the shared definition of
//! the dashboard's state machine, checked here against the analysis types it
//! stores.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::gaps::GapEntry;
use crate::analysis::matching::ScoredJob;
use crate::analysis::recommendations::Recommendation;
use crate::analysis::report::ResumeAnalysis;
use crate::analysis::skills::SkillAnalysis;

pub const STORAGE_KEY: &str = "resumeAnalysis";
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub resume_analysis: Option<ResumeAnalysis>,
    pub job_matches: Vec<ScoredJob>,
    pub skills_analysis: Option<SkillAnalysis>,
    pub skill_gaps: Vec<GapEntry>,
    pub upgrade_recommendations: Vec<Recommendation>,
    pub skill_progress: BTreeMap<String, u8>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Stores the analysis and fans its parts out to the dedicated fields.
    SetResumeAnalysis(Box<ResumeAnalysis>),
    SetJobMatches(Vec<ScoredJob>),
    SetSkillsAnalysis(SkillAnalysis),
    SetSkillGaps(Vec<GapEntry>),
    SetUpgradeRecommendations(Vec<Recommendation>),
    UpdateSkillProgress { skill: String, progress: u8 },
    IncrementSkillProgress(String),
    DecrementSkillProgress(String),
    SetLoading(bool),
    SetError(String),
    ClearResumeData,
}

pub fn reduce(mut state: SessionState, action: SessionAction, now: DateTime<Utc>) -> SessionState {
    match action {
        SessionAction::SetResumeAnalysis(analysis) => {
            state.job_matches = analysis.job_matches.clone();
            state.skills_analysis = Some(analysis.skill_analysis.clone());
            state.skill_gaps = analysis.skill_gaps.clone();
            state.upgrade_recommendations = analysis.upgrade_recommendations.clone();
            state.resume_analysis = Some(*analysis);
            state.error = None;
            state.last_updated = Some(now);
        }
        SessionAction::SetJobMatches(matches) => {
            state.job_matches = matches;
            state.last_updated = Some(now);
        }
        SessionAction::SetSkillsAnalysis(analysis) => {
            state.skills_analysis = Some(analysis);
            state.last_updated = Some(now);
        }
        SessionAction::SetSkillGaps(gaps) => {
            state.skill_gaps = gaps;
            state.last_updated = Some(now);
        }
        SessionAction::SetUpgradeRecommendations(recs) => {
            state.upgrade_recommendations = recs;
            state.last_updated = Some(now);
        }
        SessionAction::UpdateSkillProgress { skill, progress } => {
            state.skill_progress.insert(skill, progress.min(PROGRESS_MAX));
            state.last_updated = Some(now);
        }
        SessionAction::IncrementSkillProgress(skill) => {
            let entry = state.skill_progress.entry(skill).or_insert(0);
            *entry = entry.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);
            state.last_updated = Some(now);
        }
        SessionAction::DecrementSkillProgress(skill) => {
            let entry = state.skill_progress.entry(skill).or_insert(0);
            *entry = entry.saturating_sub(PROGRESS_STEP);
            state.last_updated = Some(now);
        }
        SessionAction::SetLoading(loading) => state.is_loading = loading,
        SessionAction::SetError(error) => {
            state.error = Some(error);
            state.is_loading = false;
        }
        SessionAction::ClearResumeData => return SessionState::default(),
    }
    state
}

/// Display label for a progress percentage.
pub fn progress_label(progress: u8) -> &'static str {
    match progress {
        p if p >= 100 => "Completed",
        p if p >= 80 => "Advanced",
        p if p >= 60 => "Intermediate",
        p if p >= 40 => "Beginner+",
        p if p >= 20 => "Beginner",
        _ => "Not Started",
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    resume_analysis: ResumeAnalysis,
    #[serde(default)]
    job_matches: Option<Vec<ScoredJob>>,
    #[serde(default)]
    skills_analysis: Option<SkillAnalysis>,
    #[serde(default)]
    skill_gaps: Option<Vec<GapEntry>>,
    #[serde(default)]
    upgrade_recommendations: Option<Vec<Recommendation>>,
    #[serde(default)]
    skill_progress: BTreeMap<String, u8>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

/// Serializes the session for storage. Returns `None` while no resume has
/// been analyzed; nothing is persisted in that case.
pub fn persist(state: &SessionState) -> Option<Result<String, serde_json::Error>> {
    let analysis = state.resume_analysis.as_ref()?;
    let blob = PersistedSession {
        resume_analysis: analysis.clone(),
        job_matches: Some(state.job_matches.clone()),
        skills_analysis: state.skills_analysis.clone(),
        skill_gaps: Some(state.skill_gaps.clone()),
        upgrade_recommendations: Some(state.upgrade_recommendations.clone()),
        skill_progress: state.skill_progress.clone(),
        last_updated: state.last_updated,
    };
    Some(serde_json::to_string(&blob))
}

/// Rebuilds a session from a stored blob by replaying it through [`reduce`].
pub fn restore(raw: &str, now: DateTime<Utc>) -> Result<SessionState, serde_json::Error> {
    let blob: PersistedSession = serde_json::from_str(raw)?;

    let mut actions = vec![SessionAction::SetResumeAnalysis(Box::new(blob.resume_analysis))];
    if let Some(matches) = blob.job_matches {
        actions.push(SessionAction::SetJobMatches(matches));
    }
    if let Some(analysis) = blob.skills_analysis {
        actions.push(SessionAction::SetSkillsAnalysis(analysis));
    }
    if let Some(gaps) = blob.skill_gaps {
        actions.push(SessionAction::SetSkillGaps(gaps));
    }
    if let Some(recs) = blob.upgrade_recommendations {
        actions.push(SessionAction::SetUpgradeRecommendations(recs));
    }
    actions.extend(
        blob.skill_progress
            .into_iter()
            .map(|(skill, progress)| SessionAction::UpdateSkillProgress { skill, progress }),
    );

    let state = actions
        .into_iter()
        .fold(SessionState::default(), |state, action| reduce(state, action, now));

    Ok(SessionState {
        last_updated: blob.last_updated.or(state.last_updated),
        ..state
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::{analyze_resume_text, UploadMeta};

    fn sample_analysis() -> ResumeAnalysis {
        analyze_resume_text(
            UploadMeta {
                filename: "resume.pdf".to_string(),
                file_size: 2048,
            },
            "Python developer with React and Node.js, B.Tech from Anna University",
        )
    }

    fn apply(state: SessionState, action: SessionAction) -> SessionState {
        reduce(state, action, Utc::now())
    }

    #[test]
    fn test_set_resume_analysis_fans_out() {
        let analysis = sample_analysis();
        let state = apply(
            SessionState::default(),
            SessionAction::SetResumeAnalysis(Box::new(analysis.clone())),
        );
        assert_eq!(state.job_matches, analysis.job_matches);
        assert_eq!(state.skill_gaps, analysis.skill_gaps);
        assert_eq!(state.skills_analysis.as_ref(), Some(&analysis.skill_analysis));
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_progress_steps_by_ten_and_clamps() {
        let mut state = SessionState::default();
        for _ in 0..12 {
            state = apply(state, SessionAction::IncrementSkillProgress("AWS".into()));
        }
        assert_eq!(state.skill_progress["AWS"], 100);

        state = apply(state, SessionAction::DecrementSkillProgress("AWS".into()));
        assert_eq!(state.skill_progress["AWS"], 90);

        for _ in 0..15 {
            state = apply(state, SessionAction::DecrementSkillProgress("AWS".into()));
        }
        assert_eq!(state.skill_progress["AWS"], 0);
    }

    #[test]
    fn test_update_progress_clamped() {
        let state = apply(
            SessionState::default(),
            SessionAction::UpdateSkillProgress {
                skill: "Docker".into(),
                progress: 250,
            },
        );
        assert_eq!(state.skill_progress["Docker"], 100);
    }

    #[test]
    fn test_error_stops_loading() {
        let state = apply(SessionState::default(), SessionAction::SetLoading(true));
        let state = apply(state, SessionAction::SetError("upload error".into()));
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("upload error"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = apply(
            SessionState::default(),
            SessionAction::SetResumeAnalysis(Box::new(sample_analysis())),
        );
        let state = apply(state, SessionAction::IncrementSkillProgress("Go".into()));
        let state = apply(state, SessionAction::ClearResumeData);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_nothing_persisted_without_analysis() {
        let state = apply(
            SessionState::default(),
            SessionAction::IncrementSkillProgress("Rust".into()),
        );
        assert!(persist(&state).is_none());
    }

    #[test]
    fn test_persist_then_restore() {
        let state = apply(
            SessionState::default(),
            SessionAction::SetResumeAnalysis(Box::new(sample_analysis())),
        );
        let state = apply(state, SessionAction::IncrementSkillProgress("AWS".into()));
        let state = apply(state, SessionAction::IncrementSkillProgress("AWS".into()));

        let blob = persist(&state).unwrap().unwrap();
        let restored = restore(&blob, Utc::now()).unwrap();

        assert_eq!(restored.resume_analysis, state.resume_analysis);
        assert_eq!(restored.skill_progress["AWS"], 20);
        assert_eq!(restored.last_updated, state.last_updated);
    }

    #[test]
    fn test_restore_rejects_garbage() {
        assert!(restore("{\"not\": \"a session\"}", Utc::now()).is_err());
    }

    #[test]
    fn test_progress_labels() {
        assert_eq!(progress_label(100), "Completed");
        assert_eq!(progress_label(80), "Advanced");
        assert_eq!(progress_label(60), "Intermediate");
        assert_eq!(progress_label(40), "Beginner+");
        assert_eq!(progress_label(20), "Beginner");
        assert_eq!(progress_label(10), "Not Started");
    }
}
