//! End-to-end classification scenarios over the built-in lexicon.

use partlex_engine::Classifier;

fn classifier() -> Classifier {
    Classifier::with_defaults().unwrap()
}

#[test]
fn air_filter_mazda_3_from_2013() {
    let rec = classifier().classify("פ.אויר מזדה 3 מ13");

    assert_eq!(rec.category.as_deref(), Some("Air Filter"));
    assert_eq!(rec.category_term.as_deref(), Some("פ.אויר"));
    assert_eq!(rec.brands, vec!["Mazda"]);
    assert_eq!(rec.models.len(), 1);
    assert_eq!(rec.models[0].model, "3");
    let years = rec.model_years.iter().find(|m| m.model == "3").unwrap();
    assert_eq!(years.years.from, Some(2013));
    assert!(rec.accuracy > 0.3);
}

#[test]
fn front_right_brake_discs_octavia() {
    let rec = classifier().classify("דסקיות קדמי ימין אוקטביה מ05");

    assert_eq!(rec.category.as_deref(), Some("Brake Discs"));
    assert_eq!(rec.position.as_deref(), Some("Front"));
    assert_eq!(rec.side.as_deref(), Some("Right"));
    assert_eq!(rec.brands, vec!["Skoda"]);
    assert_eq!(rec.models[0].model, "Octavia");
    let years = rec.model_years.iter().find(|m| m.model == "Octavia").unwrap();
    assert_eq!(years.years.from, Some(2005));
}

#[test]
fn empty_input_is_all_defaults() {
    let rec = classifier().classify("");
    assert_eq!(rec.accuracy, 0.0);
    assert!(rec.category.is_none());
    assert!(rec.brands.is_empty());
    assert!(rec.models.is_empty());
    assert!(rec.general_years.is_empty());
}

#[test]
fn two_models_get_their_own_year_ranges() {
    let rec = classifier().classify("בולם קורולה מ08 יאריס מ13");

    let corolla = rec.model_years.iter().find(|m| m.model == "Corolla").unwrap();
    let yaris = rec.model_years.iter().find(|m| m.model == "Yaris").unwrap();
    assert_eq!(corolla.years.from, Some(2008));
    assert_eq!(yaris.years.from, Some(2013));
    assert!(rec.general_years.is_empty());
}

#[test]
fn longest_lexicon_term_wins() {
    // "ג.ויטרה" must resolve as Grand Vitara, not Vitara.
    let rec = classifier().classify("פ.שמן ג.ויטרה");
    assert!(rec.models.iter().any(|m| m.model == "Grand Vitara"));
    assert!(!rec.models.iter().any(|m| m.model == "Vitara"));
}

#[test]
fn ambiguous_code_without_context_never_becomes_a_model() {
    let rec = classifier().classify("אטם ראש XV 2.0");
    assert!(!rec.models.iter().any(|m| m.model == "XV"));
    assert_eq!(rec.engine_code.as_deref(), Some("XV"));
    assert_eq!(rec.engine_displacement, Some(2.0));
}

#[test]
fn subaru_context_keeps_xv_as_a_model() {
    let rec = classifier().classify("בולם סובארו XV");
    assert!(rec.models.iter().any(|m| m.model == "XV"));
}

#[test]
fn unknown_text_gets_default_labels() {
    let rec = classifier().classify("דבר שאיננו מוכר כלל");
    assert_eq!(rec.category.as_deref(), Some("Other Parts"));
    assert_eq!(rec.brands, vec!["Other"]);
    assert_eq!(rec.models[0].model, "Generic Model");
}

#[test]
fn drive_marker_with_typical_model() {
    let rec = classifier().classify("ציריה 4x4 היילקס ויגו מ08");
    assert_eq!(rec.drive_type.map(|d| d.token()), Some("4x4"));
    assert_eq!(rec.brands, vec!["Toyota"]);
}

#[test]
fn pk_belt_sets_category_and_dimension() {
    let rec = classifier().classify("6PK 1230 קורולה");
    assert_eq!(rec.category.as_deref(), Some("6-Rib V-Belt"));
    let dim = rec.dimension.unwrap();
    assert_eq!(dim.value, 1230.0);
}

#[test]
fn year_range_without_model_stays_general() {
    let rec = classifier().classify("רפידות 08-13");
    assert_eq!(rec.general_years.from, Some(2008));
    assert_eq!(rec.general_years.to, Some(2013));
}

#[test]
fn brand_fragments_inside_part_words_are_not_vehicles() {
    // "רפידות" contains the Rapid term and "ציריה" the Chery term; both
    // are part names, not vehicles, and must fall through to the defaults.
    let pads = classifier().classify("רפידות 08-13");
    assert_eq!(pads.brands, vec!["Other"]);
    assert_eq!(pads.category.as_deref(), Some("Brake Pads"));

    let axle = classifier().classify("ציריה קדמית");
    assert_eq!(axle.brands, vec!["Other"]);
}

#[test]
fn confidences_are_always_in_bounds() {
    let classifier = classifier();
    for text in [
        "פ.אויר מזדה 3 מ13",
        "דסקיות קדמי ימין אוקטביה מ05 280 ממ",
        "אטם ראש CBZ 1.2 פולו",
        "ציריה 4x4 היילקס מ05 עד 15",
        "",
        "משהו לגמרי אחר 999",
    ] {
        let rec = classifier.classify(text);
        assert!(rec.confidences.all_in_bounds(), "out of bounds for {text:?}");
        assert!((0.0..=1.0).contains(&rec.accuracy));
    }
}
