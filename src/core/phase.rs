//! Turn phases.

use serde::{Deserialize, Serialize};

/// Stage of a turn. Phases run in declaration order and wrap from `End`
/// back to `Start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Turn counter advances and both players draw.
    #[default]
    Start,
    /// Waiting for the human player's hand index.
    Select,
    /// Pre-battle modifiers.
    Effect,
    /// Damage exchange.
    Battle,
    /// Contract resolution.
    Contract,
    /// Win check, then loop or finish.
    End,
}

impl Phase {
    /// All phases in turn order.
    pub const ALL: [Phase; 6] = [
        Phase::Start,
        Phase::Select,
        Phase::Effect,
        Phase::Battle,
        Phase::Contract,
        Phase::End,
    ];

    /// The phase that follows this one in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::Start => Phase::Select,
            Phase::Select => Phase::Effect,
            Phase::Effect => Phase::Battle,
            Phase::Battle => Phase::Contract,
            Phase::Contract => Phase::End,
            Phase::End => Phase::Start,
        }
    }

    /// Lowercase name, as shown on the HUD.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Select => "select",
            Phase::Effect => "effect",
            Phase::Battle => "battle",
            Phase::Contract => "contract",
            Phase::End => "end",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_phase_once() {
        let mut phase = Phase::Start;
        let mut seen = Vec::new();

        for _ in 0..6 {
            seen.push(phase);
            phase = phase.next();
        }

        assert_eq!(seen, Phase::ALL.to_vec());
        assert_eq!(phase, Phase::Start);
    }

    #[test]
    fn test_names() {
        assert_eq!(Phase::default(), Phase::Start);
        assert_eq!(Phase::Contract.to_string(), "contract");
        assert_eq!(serde_json::to_string(&Phase::Battle).unwrap(), "\"battle\"");
    }
}
