//! Danger/warning evaluation over both parents' records.
use crate::tables::{DangerRule, Severity};
use crate::GeneticsRecord;
use serde::Serialize;
use tracing::trace;

/// A fired danger rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
    pub locus: String,
    #[serde(skip)]
    pub penalty: u32,
}

impl From<&DangerRule> for Warning {
    fn from(rule: &DangerRule) -> Self {
        Self {
            severity: rule.severity,
            message: rule.message.into(),
            locus: rule.locus.into(),
            penalty: rule.penalty,
        }
    }
}

/// Whether `rule` fires for this pair.
///
/// Both parents must carry the rule's allele in either position at the
/// rule's locus, looked up in the rule's own category. A parent without
/// a complete genotype for the locus never fires a rule.
pub fn fires(rule: &DangerRule, dam: &GeneticsRecord, sire: &GeneticsRecord) -> bool {
    let carries = |record: &GeneticsRecord| {
        record
            .entry(rule.category, rule.locus)
            .map_or(false, |entry| entry.carries(rule.allele))
    };
    carries(dam) && carries(sire)
}

/// Evaluates every rule in table order.
pub fn evaluate(rules: &[DangerRule], dam: &GeneticsRecord, sire: &GeneticsRecord) -> Vec<Warning> {
    rules
        .iter()
        .filter(|rule| fires(rule, dam, sire))
        .inspect(|rule| trace!(locus = rule.locus, allele = rule.allele, "danger rule fired"))
        .map(Warning::from)
        .collect()
}
