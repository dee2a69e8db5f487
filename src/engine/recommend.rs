use std::collections::BTreeMap;

use crate::model::{GateType, Recommendation};

use super::EngineError;

#[derive(Debug, Clone, Copy)]
pub struct GateNote {
    pub explanation: &'static str,
    pub safety_note: &'static str,
}

/// Domain-authored rationale and safety text per gate. This wording is part
/// of the output surface and is reproduced verbatim in reports.
pub fn gate_note(gate: GateType) -> GateNote {
    match gate {
        GateType::And => GateNote {
            explanation: "OPTIMAL for PDAC: Both tumor antigens must be present for activation. \
                 This maximizes tumor specificity and minimizes pancreatic healthy tissue \
                 damage, critical for preserving pancreatic function.",
            safety_note: "Lowest risk of pancreatic toxicity. Recommended for first-line PDAC \
                 therapy.",
        },
        GateType::Or => GateNote {
            explanation: "SENSITIVE for PDAC: Either tumor antigen can trigger activation. \
                 Increases sensitivity to heterogeneous PDAC tumors but may increase \
                 off-target effects on healthy pancreatic cells.",
            safety_note: "Monitor for pancreatic enzyme levels. Consider dose escalation \
                 protocol.",
        },
        GateType::Not => GateNote {
            explanation: "ALTERNATIVE for PDAC: Activates when primary antigen is absent. \
                 Useful for targeting PDAC antigen-loss escape variants but requires careful \
                 healthy tissue monitoring.",
            safety_note: "Requires extensive safety monitoring. Consider as second-line \
                 therapy.",
        },
        GateType::Xor => GateNote {
            explanation: "SELECTIVE for PDAC: Activates when only one antigen is present. \
                 Targets heterogeneous PDAC populations while avoiding dual-positive healthy \
                 pancreatic cells.",
            safety_note: "Moderate safety profile. Monitor for pancreatic function.",
        },
        GateType::Xnor => GateNote {
            explanation: "BALANCED for PDAC: Activates when both antigens have same state. \
                 Provides balanced targeting of consistent PDAC expression patterns.",
            safety_note: "Balanced safety profile. Standard monitoring recommended.",
        },
    }
}

/// Picks the gate with the highest selectivity score and attaches its note.
///
/// Ties break toward the earlier gate in priority order (AND first), which
/// the score map's key order already encodes. Fails when no scores were
/// computed.
pub fn best_gate_recommendation(
    scores: &BTreeMap<GateType, f64>,
) -> Result<Recommendation, EngineError> {
    let mut best: Option<(GateType, f64)> = None;
    for (&gate, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((gate, score)),
        }
    }
    let Some((gate, score)) = best else {
        return Err(EngineError::EmptyScores);
    };

    let note = gate_note(gate);
    Ok(Recommendation {
        gate,
        score,
        explanation: note.explanation.to_string(),
        safety_note: note.safety_note.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/recommend.rs"]
mod tests;
