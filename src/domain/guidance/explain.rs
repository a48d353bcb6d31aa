//! Static per-phase summaries and tips.

use serde::Serialize;

use crate::domain::cycle::Phase;
use crate::domain::foundation::ValidationError;

/// Explanation of one phase with practical tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseGuidance {
    pub phase: Phase,
    pub summary: &'static str,
    pub tips: Vec<&'static str>,
}

impl PhaseGuidance {
    /// Fixed guidance for a phase.
    pub fn for_phase(phase: Phase) -> Self {
        Self {
            phase,
            summary: summary(phase),
            tips: tips(phase).to_vec(),
        }
    }
}

fn summary(phase: Phase) -> &'static str {
    match phase {
        Phase::Period => {
            "Bleeding phase. Energy may be lower; comfort and patience go a long way."
        }
        Phase::Follicular => "Rising hormones and energy. Great for plans, workouts, creativity.",
        Phase::Ovulation => "Peak fertility. Confidence and social energy often highest.",
        Phase::Luteal => {
            "PMS window. Sensitivity may rise—opt for calm, reassurance, and help."
        }
    }
}

fn tips(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Period => &[
            "Offer heat pad, cozy foods, and space if needed",
            "Keep plans flexible and low-pressure",
            "Proactively handle chores and logistics",
        ],
        Phase::Follicular => &[
            "Suggest a new activity or date",
            "Encourage goals and celebrate progress",
            "Share optimistic plans—she may be more up for it",
        ],
        Phase::Ovulation => &[
            "Give genuine compliments—she may feel her best",
            "Plan social time or a dress-up night",
            "Be playful and confident",
        ],
        Phase::Luteal => &[
            "Be patient; validate feelings without fixing right away",
            "Keep snacks and water handy; offer gentle support",
            "Avoid big conflicts—focus on comfort and reassurance",
        ],
    }
}

/// Looks up guidance by phase name, ignoring case.
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedPhase` for names outside the four phase keys.
pub fn explain(phase_name: &str) -> Result<PhaseGuidance, ValidationError> {
    let phase: Phase = phase_name.parse()?;
    Ok(PhaseGuidance::for_phase(phase))
}
