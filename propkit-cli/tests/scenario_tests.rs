use pretty_assertions::assert_eq;
use propkit_cli::{Outcome, run_scenario};
use propkit_model::{ErrorKind, Variant};

#[test]
fn lists_fields_in_declaration_order() {
    let report = run_scenario().unwrap();
    assert_eq!(report.fields, vec!["myInt", "myDouble", "myString"]);
}

#[test]
fn step_outcomes_match_expected_errors() {
    let report = run_scenario().unwrap();
    let outcomes: Vec<&Outcome> = report.steps.iter().map(|s| &s.outcome).collect();

    assert_eq!(
        outcomes[0],
        &Outcome::Ok {
            value: Some(Variant::Int(5))
        }
    );
    assert!(matches!(
        outcomes[1],
        Outcome::Failed {
            kind: ErrorKind::ValidationFailed,
            ..
        }
    ));
    assert!(matches!(
        outcomes[2],
        Outcome::Failed {
            kind: ErrorKind::TypeMismatch,
            ..
        }
    ));
    assert_eq!(outcomes[3], &Outcome::Ok { value: None });
}

#[test]
fn final_values_are_zeroed() {
    let report = run_scenario().unwrap();
    let values: Vec<Variant> = report.final_values.into_iter().map(|e| e.value).collect();
    assert_eq!(
        values,
        vec![Variant::Int(0), Variant::Float(0.0), Variant::from("zero")]
    );
}

#[test]
fn text_report_mentions_every_step() {
    let text = run_scenario().unwrap().to_string();
    assert!(text.starts_with("Registered params:\n  myInt\n  myDouble\n  myString\n"));
    assert!(text.contains("set myInt = 5: ok (5)"));
    assert!(text.contains("set myDouble = \"123\": failed - type mismatch"));
    assert!(text.contains("myString: zero"));
}

#[test]
fn json_report_round_trips() {
    let report = run_scenario().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""status":"failed""#));
    let back: propkit_cli::ScenarioReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
