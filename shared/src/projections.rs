//! Pure projections from profile and goal data into display-ready records.
//!
//! Everything here is recomputed on every render; nothing is cached.

use crate::{
    ChildProfile, Goal, GoalTimeframe, InsightKind, ProfileInsight, ProgressPoint, Skill,
    SkillNode, TimelinePhase, Trend, MAX_SKILL_LEVEL, TRENDING_UP_THRESHOLD,
};

/// Progress below this marks a growth area worth extra practice
const NEEDS_PRACTICE_BELOW: u8 = 70;

pub fn trend_for(progress: u8) -> Trend {
    if progress > TRENDING_UP_THRESHOLD {
        Trend::Up
    } else {
        Trend::Stable
    }
}

/// Map skills to chart points, keeping skill order
pub fn progress_data(skills: &[Skill]) -> Vec<ProgressPoint> {
    skills
        .iter()
        .map(|skill| ProgressPoint {
            subject: skill.category.clone(),
            progress: skill.progress,
            trend: trend_for(skill.progress),
        })
        .collect()
}

/// How many times a goal has been chosen; zero means not chosen
pub fn times_chosen(goals: &[Goal], goal_id: &str) -> usize {
    goals.iter().filter(|goal| goal.id == goal_id).count()
}

/// Group goals into the three yearly phases.
///
/// All three phases are always returned in Year 1..3 order, even when empty.
/// Within a phase goals keep the order they were chosen in.
pub fn learning_path(goals: &[Goal]) -> Vec<TimelinePhase> {
    GoalTimeframe::ALL
        .iter()
        .map(|timeframe| TimelinePhase {
            timeframe: *timeframe,
            label: timeframe.phase_label(),
            goals: goals
                .iter()
                .filter(|goal| goal.timeframe == *timeframe)
                .cloned()
                .collect(),
        })
        .collect()
}

pub fn skill_tree(skills: &[Skill]) -> Vec<SkillNode> {
    skills
        .iter()
        .map(|skill| SkillNode {
            category: skill.category.clone(),
            level: skill.level,
            progress: skill.progress,
            stars: (1..=MAX_SKILL_LEVEL).map(|star| star <= skill.level).collect(),
        })
        .collect()
}

/// Strength, growth area and a recommendation for a profile.
///
/// Ties go to the skill listed first. A profile with no skills gets no insights.
pub fn profile_insights(profile: &ChildProfile) -> Vec<ProfileInsight> {
    let strongest = profile
        .skills
        .iter()
        .reduce(|best, skill| if skill.progress > best.progress { skill } else { best });
    let weakest = profile
        .skills
        .iter()
        .reduce(|worst, skill| if skill.progress < worst.progress { skill } else { worst });

    let (Some(strongest), Some(weakest)) = (strongest, weakest) else {
        return Vec::new();
    };

    let recommendation = if weakest.progress < NEEDS_PRACTICE_BELOW {
        ProfileInsight {
            kind: InsightKind::Recommendation,
            title: format!("Practice {}", weakest.category),
            detail: format!(
                "Short, regular {} sessions will help {} build confidence.",
                weakest.category, profile.name
            ),
        }
    } else {
        ProfileInsight {
            kind: InsightKind::Recommendation,
            title: format!("Stretch in {}", strongest.category),
            detail: format!(
                "{} is ready for an advanced {} challenge.",
                profile.name, strongest.category
            ),
        }
    };

    vec![
        ProfileInsight {
            kind: InsightKind::Strength,
            title: format!("Strong in {}", strongest.category),
            detail: format!(
                "Level {} with {}% mastered.",
                strongest.level, strongest.progress
            ),
        },
        ProfileInsight {
            kind: InsightKind::GrowthArea,
            title: format!("Room to grow in {}", weakest.category),
            detail: format!("Level {} with {}% mastered.", weakest.level, weakest.progress),
        },
        recommendation,
    ]
}
