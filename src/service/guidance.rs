use crate::core::CategoryLabel;

/// How strongly the advisory should be toned on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Safe,
    Caution,
    Hazard,
    /// The artifact produced a category this build has no advisory for.
    Unknown,
}

/// Advisory shown next to a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Guidance {
    pub severity: Severity,
    pub advice: &'static str,
}

/// Looks up the advisory for a predicted category.
///
/// Only the three categories the shipped model is known to emit have
/// catalogue entries. Any other label gets an explicit unknown advisory
/// rather than being lumped in with "Unhealthy": the artifact owns the
/// label set, and a label this build has never seen should be surfaced as
/// such, not guessed at.
pub fn guidance_for(label: &CategoryLabel) -> Guidance {
    match label.as_str() {
        "Good" => Guidance {
            severity: Severity::Safe,
            advice: "The air is fresh. Great conditions for outdoor exercise, \
                     cycling or a walk.",
        },
        "Moderate" => Guidance {
            severity: Severity::Caution,
            advice: "Sensitive groups (asthma sufferers, the elderly, young \
                     children) should cut down on strenuous outdoor activity.",
        },
        "Unhealthy" => Guidance {
            severity: Severity::Hazard,
            advice: "Wear a mask outdoors. Keep home ventilation closed and \
                     avoid going out unless strictly necessary.",
        },
        _ => Guidance {
            severity: Severity::Unknown,
            advice: "The model reported a category this build has no advisory \
                     for. Treat the reading with caution.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_severity() {
        assert_eq!(guidance_for(&"Good".into()).severity, Severity::Safe);
        assert_eq!(guidance_for(&"Moderate".into()).severity, Severity::Caution);
        assert_eq!(guidance_for(&"Unhealthy".into()).severity, Severity::Hazard);
    }

    #[test]
    fn unknown_categories_are_not_treated_as_unhealthy() {
        let guidance = guidance_for(&"Hazardous".into());
        assert_eq!(guidance.severity, Severity::Unknown);
        assert!(!guidance.advice.is_empty());
    }
}
