//! Locus catalogs: display name, trait category and phenotype map per locus.
//!
//! Genotype keys are written the way breed registries usually write them,
//! which is not always canonical order (`N/DM`, `Em/E`). Lookups go
//! through [`crate::genotype::lookup_either_order`].
use crate::{Category, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocusDef {
    pub code: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub phenotypes: &'static [(&'static str, &'static str)],
}

impl LocusDef {
    /// Phenotype for a genotype key, exactly as written in the table.
    pub fn phenotype(&self, key: &str) -> Option<&'static str> {
        self.phenotypes
            .iter()
            .find(|(genotype, _)| *genotype == key)
            .map(|(_, phenotype)| *phenotype)
    }
}

macro_rules! locus {
    ($category:ident, $code:literal, $name:literal, { $($genotype:literal => $phenotype:literal),* $(,)? }) => {
        LocusDef {
            code: $code,
            name: $name,
            category: Category::$category,
            phenotypes: &[$(($genotype, $phenotype)),*],
        }
    };
}

/// A DNA health test reported as clear (`N/N`), carrier or affected.
macro_rules! carrier_panel {
    ($code:literal, $allele:literal, $name:literal) => {
        LocusDef {
            code: $code,
            name: $name,
            category: Category::Health,
            phenotypes: &[
                ("N/N", "Clear"),
                (concat!("N/", $allele), concat!("Carrier (", $name, ")")),
                (concat!($allele, "/", $allele), concat!("Affected (", $name, ")")),
            ],
        }
    };
}

pub fn for_species(species: &Species) -> Option<&'static [LocusDef]> {
    match species {
        Species::Dog => Some(DOG),
        Species::Horse => Some(HORSE),
        Species::Cat => Some(CAT),
        Species::Rabbit => Some(RABBIT),
        Species::Goat => Some(GOAT),
        Species::Unknown(_) => None,
    }
}

pub static DOG: &[LocusDef] = &[
    locus!(CoatColor, "E", "Extension", {
        "Em/Em" => "Melanistic mask",
        "Em/E" => "Melanistic mask",
        "Em/e" => "Melanistic mask, carries recessive red",
        "E/E" => "Normal extension",
        "E/e" => "Normal extension, carries recessive red",
        "e/e" => "Recessive red/yellow",
    }),
    locus!(CoatColor, "K", "Dominant Black", {
        "KB/KB" => "Dominant black",
        "KB/kbr" => "Dominant black, carries brindle",
        "KB/ky" => "Dominant black, carries agouti expression",
        "kbr/kbr" => "Brindle",
        "kbr/ky" => "Brindle",
        "ky/ky" => "Agouti pattern expressed",
    }),
    locus!(CoatColor, "A", "Agouti", {
        "ay/ay" => "Fawn/sable",
        "ay/aw" => "Fawn/sable",
        "ay/at" => "Fawn/sable, carries tan points",
        "ay/a" => "Fawn/sable, carries recessive black",
        "aw/aw" => "Wild sable",
        "aw/at" => "Wild sable, carries tan points",
        "at/at" => "Tan points",
        "at/a" => "Tan points, carries recessive black",
        "a/a" => "Recessive black",
    }),
    locus!(CoatColor, "B", "Brown", {
        "B/B" => "Black pigment",
        "B/b" => "Black pigment, carries brown",
        "b/b" => "Brown/liver pigment",
    }),
    locus!(CoatColor, "D", "Dilute", {
        "D/D" => "Full pigment",
        "D/d" => "Full pigment, carries dilute",
        "d/d" => "Dilute (blue/isabella)",
    }),
    locus!(CoatColor, "M", "Merle", {
        "M/M" => "Double merle",
        "M/m" => "Merle",
        "m/m" => "Non-merle",
    }),
    locus!(CoatColor, "H", "Harlequin", {
        "H/H" => "Embryonic lethal",
        "H/h" => "Harlequin (on merle)",
        "h/h" => "Non-harlequin",
    }),
    locus!(CoatColor, "S", "White Spotting", {
        "S/S" => "Solid",
        "S/sp" => "Solid with minor white, carries piebald",
        "sp/sp" => "Piebald",
    }),
    locus!(CoatColor, "I", "Intensity", {
        "I/I" => "Intense red",
        "I/i" => "Intermediate red",
        "i/i" => "Pale cream",
    }),
    locus!(CoatColor, "Co", "Cocoa", {
        "Co/Co" => "Normal brown pigment",
        "co/Co" => "Normal brown pigment, carries cocoa",
        "co/co" => "Cocoa",
    }),
    locus!(CoatType, "L", "Coat Length", {
        "L/L" => "Short coat",
        "L/l" => "Short coat, carries long",
        "l/l" => "Long coat",
    }),
    locus!(CoatType, "Cu", "Curl", {
        "Cu/Cu" => "Curly coat",
        "Cu/cu" => "Wavy coat",
        "cu/cu" => "Straight coat",
    }),
    locus!(CoatType, "IC", "Furnishings", {
        "F/F" => "Furnished",
        "F/IC" => "Furnished, carries improper coat",
        "IC/IC" => "Improper coat (no furnishings)",
    }),
    locus!(CoatType, "SD", "Shedding", {
        "SD/SD" => "Low shedding",
        "SD/sd" => "Moderate shedding",
        "sd/sd" => "Normal shedding",
    }),
    locus!(PhysicalTraits, "BT", "Natural Bobtail", {
        "BT/BT" => "Embryonic lethal",
        "BT/bt" => "Natural bobtail",
        "bt/bt" => "Full-length tail",
    }),
    locus!(PhysicalTraits, "CDPA", "Chondrodysplasia", {
        "CDPA/CDPA" => "Short legs",
        "N/CDPA" => "Short legs",
        "N/N" => "Normal leg length",
    }),
    carrier_panel!("DM", "DM", "Degenerative Myelopathy"),
    carrier_panel!("PRA", "PRA", "Progressive Retinal Atrophy"),
    carrier_panel!("MDR1", "MDR1", "Multidrug Sensitivity"),
    carrier_panel!("CEA", "CEA", "Collie Eye Anomaly"),
    carrier_panel!("EIC", "EIC", "Exercise-Induced Collapse"),
    carrier_panel!("HUU", "HUU", "Hyperuricosuria"),
];

pub static HORSE: &[LocusDef] = &[
    locus!(CoatColor, "E", "Extension", {
        "E/E" => "Black-based, cannot produce chestnut",
        "E/e" => "Black-based, carries red",
        "e/e" => "Chestnut/sorrel",
    }),
    locus!(CoatColor, "A", "Agouti", {
        "A/A" => "Bay (black restricted to points)",
        "A/a" => "Bay, carries non-agouti",
        "a/a" => "Non-agouti (black on black base)",
    }),
    locus!(CoatColor, "Cr", "Cream", {
        "Cr/Cr" => "Double cream dilute (cremello/perlino)",
        "Cr/n" => "Single cream dilute (palomino/buckskin)",
        "n/n" => "No cream",
    }),
    locus!(CoatColor, "D", "Dun", {
        "D/D" => "Dun",
        "D/nd2" => "Dun",
        "nd2/nd2" => "Non-dun",
    }),
    locus!(CoatColor, "G", "Grey", {
        "G/G" => "Grey (homozygous)",
        "G/g" => "Grey",
        "g/g" => "Non-grey",
    }),
    locus!(CoatColor, "O", "Frame Overo", {
        "O/O" => "Lethal white foal (LWFS)",
        "O/n" => "Frame overo",
        "n/n" => "Non-overo",
    }),
    locus!(CoatColor, "TO", "Tobiano", {
        "TO/TO" => "Homozygous tobiano",
        "TO/n" => "Tobiano",
        "n/n" => "Non-tobiano",
    }),
    locus!(CoatColor, "Z", "Silver", {
        "Z/Z" => "Silver (homozygous)",
        "Z/n" => "Silver",
        "n/n" => "Non-silver",
    }),
    locus!(CoatColor, "Ch", "Champagne", {
        "Ch/Ch" => "Champagne (homozygous)",
        "Ch/n" => "Champagne",
        "n/n" => "Non-champagne",
    }),
    locus!(CoatColor, "Rn", "Roan", {
        "Rn/Rn" => "Roan (homozygous)",
        "Rn/rn" => "Roan",
        "rn/rn" => "Non-roan",
    }),
    locus!(CoatColor, "LP", "Leopard Complex", {
        "LP/LP" => "Leopard complex, few-spot/snowcap",
        "LP/lp" => "Leopard complex, spotted",
        "lp/lp" => "Non-appaloosa",
    }),
    locus!(CoatColor, "SB1", "Sabino 1", {
        "SB1/SB1" => "Sabino white",
        "SB1/n" => "Sabino",
        "n/n" => "Non-sabino",
    }),
    locus!(CoatType, "Cu", "Curly Coat", {
        "Cu/Cu" => "Curly coat",
        "Cu/n" => "Curly coat",
        "n/n" => "Straight coat",
    }),
    locus!(Performance, "MSTN", "Myostatin (Speed)", {
        "C/C" => "Sprinter (short distance)",
        "C/T" => "Middle distance",
        "T/T" => "Stayer (endurance)",
    }),
    locus!(Performance, "DMRT3", "Gait Keeper", {
        "A/A" => "Gaited",
        "C/A" => "Gaited potential",
        "C/C" => "Non-gaited",
    }),
    carrier_panel!("HYPP", "H", "Hyperkalemic Periodic Paralysis"),
    carrier_panel!("HERDA", "HRD", "Hereditary Equine Regional Dermal Asthenia"),
    carrier_panel!("GBED", "GBED", "Glycogen Branching Enzyme Deficiency"),
    carrier_panel!("PSSM1", "P1", "Polysaccharide Storage Myopathy Type 1"),
    carrier_panel!("MH", "MH", "Malignant Hyperthermia"),
    carrier_panel!("WFFS", "WFFS", "Warmblood Fragile Foal Syndrome"),
];

pub static CAT: &[LocusDef] = &[
    locus!(CoatColor, "O", "Orange", {
        "O/O" => "Red/orange",
        "O/o" => "Tortoiseshell",
        "o/o" => "Non-orange",
    }),
    locus!(CoatColor, "B", "Brown", {
        "B/B" => "Black",
        "B/b" => "Black, carries chocolate",
        "B/bl" => "Black, carries cinnamon",
        "b/b" => "Chocolate",
        "b/bl" => "Chocolate, carries cinnamon",
        "bl/bl" => "Cinnamon",
    }),
    locus!(CoatColor, "D", "Dilute", {
        "D/D" => "Dense colour",
        "D/d" => "Dense colour, carries dilute",
        "d/d" => "Dilute (blue/lilac/fawn)",
    }),
    locus!(CoatColor, "A", "Agouti", {
        "A/A" => "Tabby (agouti)",
        "A/a" => "Tabby, carries solid",
        "a/a" => "Solid (non-agouti)",
    }),
    locus!(CoatColor, "C", "Colour Restriction", {
        "C/C" => "Full colour",
        "C/cs" => "Full colour, carries colourpoint",
        "C/cb" => "Full colour, carries sepia",
        "cs/cs" => "Colourpoint (Siamese)",
        "cb/cb" => "Sepia (Burmese)",
        "cs/cb" => "Mink (Tonkinese)",
    }),
    locus!(CoatColor, "W", "Dominant White", {
        "W/W" => "Dominant white",
        "W/w" => "Dominant white",
        "w/w" => "Non-white",
    }),
    locus!(CoatColor, "S", "White Spotting", {
        "S/S" => "High white (van/harlequin)",
        "S/s" => "Bicolour",
        "s/s" => "No white spotting",
    }),
    locus!(CoatColor, "I", "Inhibitor", {
        "I/I" => "Silver/smoke",
        "I/i" => "Silver/smoke",
        "i/i" => "Non-silver",
    }),
    locus!(CoatColor, "Mc", "Tabby Pattern", {
        "Mc/Mc" => "Mackerel tabby",
        "Mc/mc" => "Mackerel tabby, carries classic",
        "mc/mc" => "Classic tabby",
    }),
    locus!(CoatColor, "Ta", "Ticked Tabby", {
        "Ta/Ta" => "Ticked tabby",
        "Ta/ta" => "Ticked tabby",
        "ta/ta" => "Non-ticked",
    }),
    locus!(CoatType, "L", "Coat Length", {
        "L/L" => "Short hair",
        "L/l" => "Short hair, carries long",
        "l/l" => "Long hair",
    }),
    locus!(CoatType, "Re", "Devon Rex", {
        "Re/Re" => "Normal coat",
        "Re/re" => "Normal coat, carries Devon rex",
        "re/re" => "Devon rex",
    }),
    locus!(CoatType, "R", "Cornish Rex", {
        "R/R" => "Normal coat",
        "R/r" => "Normal coat, carries Cornish rex",
        "r/r" => "Cornish rex",
    }),
    locus!(CoatType, "Hr", "Hairless", {
        "Hr/Hr" => "Normal coat",
        "Hr/hr" => "Normal coat, carries hairless",
        "hr/hr" => "Hairless (Sphynx)",
    }),
    locus!(PhysicalTraits, "Fd", "Fold", {
        "Fd/Fd" => "Folded ears, severe osteochondrodysplasia",
        "Fd/fd" => "Folded ears",
        "fd/fd" => "Straight ears",
    }),
    locus!(PhysicalTraits, "M", "Manx", {
        "M/M" => "Embryonic lethal",
        "M/m" => "Manx (tailless/short tail)",
        "m/m" => "Normal tail",
    }),
    locus!(PhysicalTraits, "Pd", "Polydactyly", {
        "Pd/Pd" => "Polydactyl",
        "Pd/pd" => "Polydactyl",
        "pd/pd" => "Normal toe count",
    }),
    carrier_panel!("PKD", "PKD", "Polycystic Kidney Disease"),
    carrier_panel!("HCM", "HCM", "Hypertrophic Cardiomyopathy"),
    carrier_panel!("PRA", "rdAc", "Progressive Retinal Atrophy"),
    carrier_panel!("SMA", "SMA", "Spinal Muscular Atrophy"),
    carrier_panel!("PK", "PK", "Pyruvate Kinase Deficiency"),
];

pub static RABBIT: &[LocusDef] = &[
    locus!(CoatColor, "A", "Agouti", {
        "A/A" => "Agouti",
        "A/at" => "Agouti, carries tan",
        "A/a" => "Agouti, carries self",
        "at/at" => "Tan/otter",
        "at/a" => "Tan/otter, carries self",
        "a/a" => "Self",
    }),
    locus!(CoatColor, "B", "Brown", {
        "B/B" => "Black-based",
        "B/b" => "Black-based, carries chocolate",
        "b/b" => "Chocolate",
    }),
    locus!(CoatColor, "C", "Colour Series", {
        "C/C" => "Full colour",
        "C/chd" => "Full colour, carries chinchilla",
        "C/ch" => "Full colour, carries Himalayan",
        "C/c" => "Full colour, carries REW",
        "chd/chd" => "Chinchilla",
        "ch/ch" => "Himalayan",
        "ch/c" => "Himalayan, carries REW",
        "c/c" => "Ruby-eyed white",
    }),
    locus!(CoatColor, "D", "Dilute", {
        "D/D" => "Dense",
        "D/d" => "Dense, carries dilute",
        "d/d" => "Dilute (blue/lilac)",
    }),
    locus!(CoatColor, "E", "Extension", {
        "Es/Es" => "Steel",
        "Es/E" => "Steel",
        "E/E" => "Normal extension",
        "E/e" => "Normal extension, carries tort",
        "ej/ej" => "Harlequin/Japanese",
        "E/ej" => "Normal extension, carries harlequin",
        "e/e" => "Non-extension (tort)",
    }),
    locus!(CoatColor, "En", "English Spotting", {
        "En/En" => "Charlie (mostly white)",
        "En/en" => "Broken",
        "en/en" => "Solid",
    }),
    locus!(CoatColor, "V", "Vienna", {
        "V/V" => "Blue-eyed white",
        "V/v" => "Vienna carrier",
        "v/v" => "Non-Vienna",
    }),
    locus!(CoatColor, "Si", "Silvering", {
        "Si/Si" => "Non-silvered",
        "Si/si" => "Non-silvered, carries silvering",
        "si/si" => "Silvered",
    }),
    locus!(CoatColor, "W", "Wide Band", {
        "W/W" => "Normal band",
        "W/w" => "Normal band, carries wide band",
        "w/w" => "Wide band",
    }),
    locus!(CoatColor, "Du", "Dutch", {
        "Du/Du" => "Self",
        "du/Du" => "Self, carries Dutch",
        "du/du" => "Dutch pattern",
    }),
    locus!(CoatType, "L", "Angora", {
        "L/L" => "Normal fur",
        "L/l" => "Normal fur, carries angora",
        "l/l" => "Angora wool",
    }),
    locus!(CoatType, "R", "Rex", {
        "R/R" => "Normal fur",
        "R/r" => "Normal fur, carries rex",
        "r/r" => "Rex",
    }),
    locus!(CoatType, "Sa", "Satin", {
        "Sa/Sa" => "Normal fur",
        "Sa/sa" => "Normal fur, carries satin",
        "sa/sa" => "Satin",
    }),
    locus!(PhysicalTraits, "Dw", "Dwarf", {
        "Dw/Dw" => "Peanut (lethal)",
        "Dw/dw" => "True dwarf",
        "dw/dw" => "Normal size (false dwarf)",
    }),
];

pub static GOAT: &[LocusDef] = &[
    locus!(CoatColor, "A", "Agouti", {
        "Awt/Awt" => "White/tan",
        "Awt/a" => "White/tan, carries non-agouti",
        "Ab/Ab" => "Bezoar",
        "Ab/a" => "Bezoar, carries non-agouti",
        "a/a" => "Non-agouti (black)",
    }),
    locus!(CoatColor, "B", "Brown", {
        "B/B" => "Normal pigment",
        "B/b" => "Normal pigment, carries brown",
        "b/b" => "Brown",
    }),
    locus!(CoatColor, "S", "Spotting", {
        "S/S" => "Spotted",
        "S/s" => "Spotted",
        "s/s" => "Unspotted",
    }),
    locus!(CoatColor, "Rn", "Roan", {
        "Rn/Rn" => "Roan",
        "Rn/rn" => "Roan",
        "rn/rn" => "Non-roan",
    }),
    locus!(PhysicalTraits, "P", "Polled", {
        "P/P" => "Polled (homozygous)",
        "P/p" => "Polled",
        "p/p" => "Horned",
    }),
    locus!(PhysicalTraits, "Wa", "Wattles", {
        "Wa/Wa" => "Wattles",
        "Wa/wa" => "Wattles",
        "wa/wa" => "No wattles",
    }),
    locus!(PhysicalTraits, "Ea", "Ear Length", {
        "Ea/Ea" => "Gopher ears",
        "Ea/ea" => "Elf ears",
        "ea/ea" => "Normal ears",
    }),
    locus!(Performance, "CSN1S1", "Alpha-s1 Casein", {
        "A/A" => "High alpha-s1 casein",
        "A/F" => "Intermediate alpha-s1 casein",
        "F/F" => "Low alpha-s1 casein",
    }),
    carrier_panel!("G6S", "G6S", "G6S Deficiency (MPS IIID)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_panel_expands_keys() {
        let hypp = HORSE.iter().find(|def| def.code == "HYPP").unwrap();
        assert_eq!(hypp.category, Category::Health);
        assert_eq!(hypp.phenotype("N/N"), Some("Clear"));
        assert_eq!(
            hypp.phenotype("N/H"),
            Some("Carrier (Hyperkalemic Periodic Paralysis)")
        );
        assert_eq!(
            hypp.phenotype("H/H"),
            Some("Affected (Hyperkalemic Periodic Paralysis)")
        );
        assert_eq!(hypp.phenotype("H/N"), None);
    }

    #[test]
    fn test_unknown_species_has_no_catalog() {
        assert!(for_species(&Species::parse("llama")).is_none());
        assert_eq!(for_species(&Species::Goat).map(|l| l.len()), Some(GOAT.len()));
    }
}
