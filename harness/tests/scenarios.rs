use harness::scenario::{Scenario, Step};
use xiangqi::location::Location;
use xiangqi::piece::{Color, PieceKind};

#[test]
fn shipped_suite_passes_in_full() {
    let text = include_str!("../scenarios/core_rules.txt");
    let scenarios = Scenario::parse(text);
    assert!(scenarios.len() >= 20, "suite shrank to {}", scenarios.len());

    for scenario in &scenarios {
        if let Err(reason) = scenario.run() {
            panic!("{}: {reason}", scenario.name);
        }
    }
}

#[test]
fn every_shipped_scenario_ends_in_an_expectation() {
    let text = include_str!("../scenarios/core_rules.txt");

    for scenario in Scenario::parse(text) {
        assert!(
            matches!(scenario.steps.last(), Some(Step::Expect { .. })),
            "{} has no expectation",
            scenario.name
        );
    }
}

#[test]
fn a_scenario_drives_the_engine_end_to_end() {
    let text = "\
scenario: wrong turn is rejected
given a Black Soldier at (7, 5)
when Red moves the Soldier from (7, 5) to (6, 5)
then the move is illegal

scenario: turn step hands the move to black
given a Black Soldier at (7, 5)
and it is Black's turn
when Black moves the Soldier from (7, 5) to (6, 5)
then the move is legal
";

    for scenario in Scenario::parse(text) {
        if let Err(reason) = scenario.run() {
            panic!("{}: {reason}", scenario.name);
        }
    }
}

#[test]
fn placements_carry_color_kind_and_square() {
    let step = Step::decode("and a Black Cannon at (10, 2)").unwrap();
    let Step::Place { piece, at } = step else {
        panic!("expected a placement, got {step}");
    };

    assert_eq!(piece.color(), Color::Black);
    assert_eq!(piece.kind(), PieceKind::Cannon);
    assert_eq!(at, Location::new(10, 2));
}
