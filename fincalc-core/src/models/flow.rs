use serde::{Deserialize, Serialize};

/// One stage of the guided onboarding sequence. The declaration order of
/// [`FlowStep::ALL`] is the total order used to pick the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowStep {
    #[serde(rename = "take-home-pay")]
    TakeHomePay,
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "debt-payoff")]
    DebtPayoff,
    #[serde(rename = "net-worth")]
    NetWorth,
}

impl FlowStep {
    /// All steps in guided order.
    pub const ALL: [FlowStep; 4] = [
        Self::TakeHomePay,
        Self::Budget,
        Self::DebtPayoff,
        Self::NetWorth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TakeHomePay => "take-home-pay",
            Self::Budget => "budget",
            Self::DebtPayoff => "debt-payoff",
            Self::NetWorth => "net-worth",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "take-home-pay" => Some(Self::TakeHomePay),
            "budget" => Some(Self::Budget),
            "debt-payoff" => Some(Self::DebtPayoff),
            "net-worth" => Some(Self::NetWorth),
            _ => None,
        }
    }
}

/// Progress through the guided flow.
///
/// `completed_steps` holds no duplicates and preserves completion order;
/// the derived accessors consult [`FlowStep::ALL`], not completion order.
/// `last_updated` is epoch milliseconds, matching the persisted format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowProgress {
    pub completed_steps: Vec<FlowStep>,
    pub dismissed: bool,
    pub last_updated: i64,
}

impl FlowProgress {
    pub fn is_step_complete(&self, step: FlowStep) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Records a completed step. Idempotent: repeats are ignored and do not
    /// touch `last_updated`.
    pub fn mark_complete(&mut self, step: FlowStep, now_millis: i64) {
        if self.is_step_complete(step) {
            return;
        }
        self.completed_steps.push(step);
        self.last_updated = now_millis;
    }

    /// One-way dismissal flag; cleared only by a full reset.
    pub fn dismiss(&mut self, now_millis: i64) {
        self.dismissed = true;
        self.last_updated = now_millis;
    }

    /// The first step in guided order that has not been completed yet.
    pub fn next_step(&self) -> Option<FlowStep> {
        FlowStep::ALL
            .into_iter()
            .find(|step| !self.is_step_complete(*step))
    }

    pub fn is_complete(&self) -> bool {
        self.next_step().is_none()
    }
}
