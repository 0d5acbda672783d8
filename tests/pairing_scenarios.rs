use pairing_genomics::prelude::*;

fn record(category: Category, entries: &[(&str, &str, &str)]) -> GeneticsRecord {
    entries.iter().fold(GeneticsRecord::new(), |record, (locus, a, b)| {
        record.with_entry(category, LocusEntry::new(locus, a, b))
    })
}

#[test]
fn dog_merle_carrier_by_clear() {
    let dam = record(Category::CoatColor, &[("M", "M", "m")]);
    let sire = record(Category::CoatColor, &[("M", "m", "m")]);
    let result = calculate_pairing(&dam, &sire, "DOG");

    let merle = result.prediction(Category::CoatColor, "M").unwrap();
    assert_eq!(merle.genotype_counts.keys(), vec!["M/m", "m/m"]);
    assert_eq!(merle.genotype_counts.get("M/m"), Some(50));
    assert_eq!(merle.genotype_counts.get("m/m"), Some(50));
    assert!(result.warnings.iter().all(|w| w.locus != "M"));
    assert_eq!(result.score, 100);
}

#[test]
fn dog_merle_carrier_by_carrier() {
    let carrier = record(Category::CoatColor, &[("M", "M", "m")]);
    let result = calculate_pairing(&carrier, &carrier, "dog");

    let merle = result.prediction(Category::CoatColor, "M").unwrap();
    assert_eq!(merle.genotype_counts.keys(), vec!["M/M", "M/m", "m/m"]);
    assert_eq!(merle.genotype_counts.get("M/M"), Some(25));
    assert_eq!(merle.genotype_counts.get("M/m"), Some(50));
    assert_eq!(merle.genotype_counts.get("m/m"), Some(25));
    assert!(result.warnings.iter().any(|w| w.message.contains("DOUBLE MERLE")));
    assert!(result.score <= 60);
}

#[test]
fn horse_frame_overo_carrier_by_carrier() {
    let carrier = record(Category::CoatColor, &[("O", "O", "n")]);
    let result = calculate_pairing(&carrier, &carrier, "Horse");

    let overo = result.prediction(Category::CoatColor, "O").unwrap();
    assert_eq!(overo.genotype_counts.keys(), vec!["O/O", "O/n", "n/n"]);
    assert_eq!(overo.genotype_counts.get("O/n"), Some(50));
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].severity, Severity::Lethal);
    assert!(result.warnings[0].message.contains("LETHAL WHITE OVERO"));
    let largest = pairing_genomics::tables::dangers::HORSE
        .iter()
        .map(|rule| rule.penalty)
        .max()
        .unwrap();
    assert_eq!(result.warnings[0].penalty, largest);
    assert!(result.score <= 20);
}

#[test]
fn goat_polled_by_polled() {
    let polled = record(Category::PhysicalTraits, &[("P", "P", "p")]);
    let result = calculate_pairing(&polled, &polled, "goat");

    assert!(result.warnings.iter().any(|w| w.message.contains("POLLED x POLLED")));
    assert!(result.score >= 50 && result.score <= 80);
    assert_eq!(
        result.prediction(Category::PhysicalTraits, "P").unwrap().prediction,
        "25% Polled (homozygous), 50% Polled, 25% Horned"
    );
}

#[test]
fn missing_alleles_exclude_locus_and_warnings() {
    for species in ["dog", "horse", "cat", "rabbit", "goat", "llama"].iter() {
        let dam = record(Category::CoatColor, &[("E", "E", "e")])
            .with_entry(Category::CoatColor, LocusEntry::partial("M", None, None));
        let sire = record(Category::CoatColor, &[("E", "e", "e")])
            .with_entry(Category::CoatColor, LocusEntry::partial("M", None, None));
        let result = calculate_pairing(&dam, &sire, species);

        assert!(result.prediction(Category::CoatColor, "M").is_none(), "{}", species);
        assert!(result.warnings.iter().all(|w| w.locus != "M"), "{}", species);
        assert!(result.prediction(Category::CoatColor, "E").is_some(), "{}", species);
    }
}

#[test]
fn one_missing_allele_per_parent_never_warns() {
    let cases = [
        ("dog", Category::CoatColor, "M"),
        ("horse", Category::CoatColor, "O"),
        ("goat", Category::PhysicalTraits, "P"),
    ];
    for (species, category, locus) in cases.iter() {
        let dam = GeneticsRecord::new()
            .with_entry(*category, LocusEntry::partial(locus, Some(locus), None));
        let sire = GeneticsRecord::new()
            .with_entry(*category, LocusEntry::partial(locus, None, Some(locus)));
        let result = calculate_pairing(&dam, &sire, species);

        assert!(result.prediction(*category, locus).is_none(), "{}", species);
        assert!(result.warnings.is_empty(), "{}", species);
        assert_eq!(result.score, 100, "{}", species);
    }
}

#[test]
fn warnings_stack_without_clamping() {
    let dam = record(Category::CoatColor, &[("O", "O", "n")])
        .with_entry(Category::Health, LocusEntry::new("HYPP", "N", "H"))
        .with_entry(Category::Health, LocusEntry::new("GBED", "GBED", "N"));
    let result = calculate_pairing(&dam, &dam, "horse");

    let loci: Vec<&str> = result.warnings.iter().map(|w| w.locus.as_str()).collect();
    assert_eq!(loci, vec!["O", "GBED", "HYPP"]);
    assert_eq!(result.score, 100 - 100 - 60 - 30);
    assert_eq!(result.category(Category::Health).len(), 2);
}

#[test]
fn pairing_from_json_records() -> Result<(), Box<dyn std::error::Error>> {
    let dam = GeneticsRecord::from_json(
        r#"{
            "coatColor": [{"locus": "E", "locusName": "Extension", "allele1": "E", "allele2": "e", "genotype": "E/e"}],
            "coatType": [{"locus": "L", "locusName": "Coat Length", "allele1": "L", "allele2": "l", "genotype": "L/l"}],
            "health": [{"locus": "DM", "allele1": "N", "allele2": "DM"}]
        }"#,
    )?;
    let sire = GeneticsRecord::from_json(
        r#"{
            "coatColor": [{"locus": "E", "allele1": "e", "allele2": "e"}],
            "coatType": [{"locus": "L", "allele1": "l", "allele2": "l"}],
            "health": [{"locus": "DM", "allele1": "DM", "allele2": "N"}]
        }"#,
    )?;
    let result = calculate_pairing(&dam, &sire, "dog");

    assert_eq!(
        result.prediction(Category::CoatColor, "E").unwrap().prediction,
        "50% Normal extension, carries recessive red, 50% Recessive red/yellow"
    );
    assert_eq!(
        result.prediction(Category::CoatType, "L").unwrap().prediction,
        "50% Short coat, carries long, 50% Long coat"
    );
    assert_eq!(
        result.prediction(Category::Health, "DM").unwrap().prediction,
        "50% Carrier (Degenerative Myelopathy), 25% Clear, 25% Affected (Degenerative Myelopathy)"
    );

    let json: serde_json::Value = serde_json::from_str(&result.to_json()?)?;
    assert_eq!(json["health"][0]["sireGenotype"], "DM/N");
    assert_eq!(json["score"], 80);
    Ok(())
}
