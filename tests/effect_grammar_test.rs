//! Integration test: the effect and gate grammars
//!
//! Exercises parsing across the whole grammar surface, the round-trip
//! guarantee, and the fail-fast errors that name the offending token.

use nightrun::effects::parser::{parse_effect, parse_gate, ParseError};
use nightrun::effects::types::{Comparison, Condition, Operator, Stat};
use nightrun::nodes::gates::GateCondition;
use nightrun::runners::types::RunnerType;

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn test_every_valid_effect_round_trips() {
    let inputs = [
        "None;+;5;Money",
        "None;-;0.5;Risk",
        "RunnerType:Hacker;+;5;Money",
        "RunnerType:Face;*;2;Money",
        "RunnerType:Ninja;-;1;Risk",
        "RunnerType:Muscle;+;3;Damage",
        "NodeColor:Red;+;1;Grit",
        "NodeColor:Purple;/;2;Risk",
        "NodeColorCombo:Red,Blue;+;100;Money",
        "NodeColorCombo:Orange,Yellow,Green;+;1;Veil",
        "RunnerStat:hacker>=5;+;6;Veil",
        "RunnerStat:muscle<=2;+;2;Damage",
        "RunnerStat:ninja>1;-;1;Risk",
        "RunnerStat:face<4;+;50;Money",
        "RunnerStat:hacker==3;+;1;Grit",
        "PrevDam;+;25;Money",
        "PrevRisk;+;1;Veil",
        "RiskDamPair;%;10;Money",
        "ColorForEach;+;75;Money",
    ];

    for input in inputs {
        let spec = parse_effect(input).unwrap_or_else(|e| panic!("`{}` failed: {}", input, e));
        let serialized = spec.to_string();
        let reparsed = parse_effect(&serialized)
            .unwrap_or_else(|e| panic!("re-parse of `{}` failed: {}", serialized, e));
        assert_eq!(spec, reparsed, "round trip changed `{}`", input);
    }
}

#[test]
fn test_gate_round_trips() {
    let inputs = [
        "RunnerType:Hacker;1",
        "RunnerType:Hacker,Muscle;3",
        "RunnerType:Face,Ninja,Muscle;2",
        "RunnerStat:hacker;10",
        "RunnerStat:ninja,face;8",
    ];
    for input in inputs {
        let gate = parse_gate(input).unwrap_or_else(|e| panic!("`{}` failed: {}", input, e));
        assert_eq!(parse_gate(&gate.to_string()).unwrap(), gate);
    }
}

#[test]
fn test_bare_equals_normalizes_to_double_equals() {
    let spec = parse_effect("RunnerStat:face=2;+;1;Veil").unwrap();
    assert_eq!(spec.to_string(), "RunnerStat:face==2;+;1;Veil");
    assert_eq!(parse_effect(&spec.to_string()).unwrap(), spec);
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn test_parsed_fields_land_where_expected() {
    let spec = parse_effect("RunnerType:Hacker;+;5;Money").unwrap();
    assert_eq!(spec.condition, Condition::RunnerType(RunnerType::Hacker));
    assert_eq!(spec.operator, Operator::Add);
    assert_eq!(spec.amount, 5.0);
    assert_eq!(spec.target, Stat::Money);

    let gate = parse_gate("RunnerType:Hacker,Muscle;3").unwrap();
    assert_eq!(
        gate,
        GateCondition::RunnerTypeGate {
            types: vec![RunnerType::Hacker, RunnerType::Muscle],
            min_count: 3,
        }
    );
}

#[test]
fn test_comparison_operators_all_parse() {
    let cases = [
        ("RunnerStat:hacker>=5;+;1;Money", Comparison::Ge),
        ("RunnerStat:hacker<=5;+;1;Money", Comparison::Le),
        ("RunnerStat:hacker>5;+;1;Money", Comparison::Gt),
        ("RunnerStat:hacker<5;+;1;Money", Comparison::Lt),
        ("RunnerStat:hacker==5;+;1;Money", Comparison::Eq),
        ("RunnerStat:hacker=5;+;1;Money", Comparison::Eq),
    ];
    for (input, expected) in cases {
        match parse_effect(input).unwrap().condition {
            Condition::RunnerStat { op, .. } => assert_eq!(op, expected, "for `{}`", input),
            other => panic!("`{}` parsed to {:?}", input, other),
        }
    }
}

// =============================================================================
// Errors name the offending token
// =============================================================================

#[test]
fn test_errors_identify_the_bad_token() {
    assert_eq!(
        parse_effect("None;^;5;Money"),
        Err(ParseError::UnknownOperator("^".to_string()))
    );
    assert_eq!(
        parse_effect("None;+;5;Fame"),
        Err(ParseError::UnknownStat("Fame".to_string()))
    );
    assert_eq!(
        parse_effect("Moonphase:Full;+;5;Money"),
        Err(ParseError::UnknownCondition("Moonphase:Full".to_string()))
    );
    assert_eq!(
        parse_effect("RunnerType:Wizard;+;5;Money"),
        Err(ParseError::UnknownRunnerType("Wizard".to_string()))
    );
    assert_eq!(
        parse_effect("NodeColor:Teal;+;5;Money"),
        Err(ParseError::UnknownColor("Teal".to_string()))
    );
    assert_eq!(
        parse_effect("RunnerStat:hacker5;+;5;Money"),
        Err(ParseError::MissingComparison("hacker5".to_string()))
    );
    assert_eq!(
        parse_effect("NodeColorCombo:Red;+;5;Money"),
        Err(ParseError::ComboTooShort("Red".to_string()))
    );
}

#[test]
fn test_error_messages_carry_the_token() {
    let err = parse_effect("None;&;5;Money").unwrap_err();
    assert!(err.to_string().contains('&'));
    let err = parse_effect("None;+;5;Karma").unwrap_err();
    assert!(err.to_string().contains("Karma"));
}

#[test]
fn test_parsing_is_pure() {
    // Same input, same result, any number of times
    let first = parse_effect("ColorForEach;%;10;Money");
    for _ in 0..3 {
        assert_eq!(parse_effect("ColorForEach;%;10;Money"), first);
    }
}
