//! Danger rules: allele pairings to flag when both parents carry them.
use crate::{Category, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
    Lethal,
}

/// Fires when the dam and the sire both carry `allele` at `locus`.
///
/// `category` is where the locus is looked up in the parents' records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerRule {
    pub locus: &'static str,
    pub category: Category,
    pub allele: &'static str,
    pub message: &'static str,
    pub severity: Severity,
    pub penalty: u32,
}

macro_rules! rule {
    ($category:ident, $locus:literal, $allele:literal, $severity:ident, $penalty:literal, $message:literal) => {
        DangerRule {
            locus: $locus,
            category: Category::$category,
            allele: $allele,
            message: $message,
            severity: Severity::$severity,
            penalty: $penalty,
        }
    };
}

/// Danger rules for a species. Unknown species have none.
pub fn for_species(species: &Species) -> &'static [DangerRule] {
    match species {
        Species::Dog => DOG,
        Species::Horse => HORSE,
        Species::Cat => CAT,
        Species::Rabbit => RABBIT,
        Species::Goat => GOAT,
        Species::Unknown(_) => &[],
    }
}

pub static DOG: &[DangerRule] = &[
    rule!(CoatColor, "M", "M", Danger, 40,
        "DOUBLE MERLE RISK: both parents carry merle. 25% of puppies are expected to be double merle (M/M) with a high risk of deafness and blindness."),
    rule!(CoatColor, "H", "H", Lethal, 50,
        "HARLEQUIN x HARLEQUIN: H/H is embryonic lethal. Expect reduced litter size."),
    rule!(PhysicalTraits, "BT", "BT", Lethal, 50,
        "BOBTAIL x BOBTAIL: BT/BT is embryonic lethal and associated with spinal defects."),
    rule!(Health, "DM", "DM", Warning, 20,
        "Both parents carry Degenerative Myelopathy. 25% of puppies may be affected."),
    rule!(Health, "PRA", "PRA", Warning, 20,
        "Both parents carry Progressive Retinal Atrophy. 25% of puppies may go blind."),
    rule!(Health, "MDR1", "MDR1", Warning, 15,
        "Both parents carry MDR1. Affected puppies react severely to common drugs."),
    rule!(Health, "CEA", "CEA", Warning, 15,
        "Both parents carry Collie Eye Anomaly. 25% of puppies may be affected."),
    rule!(Health, "EIC", "EIC", Warning, 15,
        "Both parents carry Exercise-Induced Collapse. 25% of puppies may be affected."),
    rule!(Health, "HUU", "HUU", Warning, 10,
        "Both parents carry Hyperuricosuria. 25% of puppies may form bladder stones."),
];

pub static HORSE: &[DangerRule] = &[
    rule!(CoatColor, "O", "O", Lethal, 100,
        "LETHAL WHITE OVERO: both parents carry frame overo. 25% of foals are expected to be O/O and die of Lethal White Foal Syndrome."),
    rule!(Health, "GBED", "GBED", Lethal, 60,
        "GBED x GBED: 25% of foals are expected to be affected; GBED is fatal."),
    rule!(Health, "WFFS", "WFFS", Lethal, 60,
        "WFFS x WFFS: 25% of foals are expected to be affected; WFFS is fatal."),
    rule!(Health, "HYPP", "H", Danger, 30,
        "Both parents carry HYPP. Affected foals suffer episodes of paralysis."),
    rule!(Health, "HERDA", "HRD", Danger, 30,
        "Both parents carry HERDA. Affected foals develop severe skin lesions."),
    rule!(Health, "MH", "MH", Danger, 25,
        "Both parents carry Malignant Hyperthermia. Affected foals may react fatally to anaesthesia."),
    rule!(Health, "PSSM1", "P1", Warning, 15,
        "Both parents carry PSSM1. Foals may inherit two copies of the myopathy variant."),
];

pub static CAT: &[DangerRule] = &[
    rule!(PhysicalTraits, "Fd", "Fd", Danger, 50,
        "FOLD x FOLD: Fd/Fd kittens develop severe osteochondrodysplasia. Never breed two folds."),
    rule!(PhysicalTraits, "M", "M", Lethal, 50,
        "MANX x MANX: M/M is embryonic lethal. Expect reduced litter size."),
    rule!(CoatColor, "W", "W", Warning, 20,
        "DOMINANT WHITE x DOMINANT WHITE: increased risk of congenital deafness."),
    rule!(Health, "PKD", "PKD", Danger, 30,
        "Both parents carry PKD. Kittens may develop polycystic kidneys."),
    rule!(Health, "HCM", "HCM", Warning, 20,
        "Both parents carry an HCM variant. Kittens risk hypertrophic cardiomyopathy."),
    rule!(Health, "PRA", "rdAc", Warning, 15,
        "Both parents carry rdAc PRA. 25% of kittens may go blind."),
    rule!(Health, "SMA", "SMA", Warning, 15,
        "Both parents carry Spinal Muscular Atrophy. 25% of kittens may be affected."),
    rule!(Health, "PK", "PK", Warning, 15,
        "Both parents carry Pyruvate Kinase Deficiency. 25% of kittens may be affected."),
];

pub static RABBIT: &[DangerRule] = &[
    rule!(PhysicalTraits, "Dw", "Dw", Lethal, 50,
        "DWARF x DWARF: 25% of kits are expected to be lethal peanuts (Dw/Dw)."),
    rule!(CoatColor, "En", "En", Warning, 20,
        "BROKEN x BROKEN: 25% of kits are expected to be charlies with a risk of megacolon."),
];

pub static GOAT: &[DangerRule] = &[
    rule!(PhysicalTraits, "P", "P", Danger, 30,
        "POLLED x POLLED: homozygous polled kids carry a risk of intersex (hermaphroditism)."),
    rule!(Health, "G6S", "G6S", Danger, 25,
        "Both parents carry G6S deficiency. 25% of kids may be affected."),
];
