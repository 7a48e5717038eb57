//! Compiled grammars must match their hand-built twins.

use cfdg_core::Transform2D;
use cfdg_grammar::ReplacementKind;
use cfdg_parser::compile;
use cfdg_tests::compare::{assert_same_grammar, colors_match, transforms_match};
use cfdg_tests::samples;
use pretty_assertions::assert_eq;

#[test]
fn number_test() {
    let grammar = compile(samples::NUMBER_TEST, Some("NumberTest")).unwrap();
    assert_same_grammar(&samples::number_test(), &grammar);
}

#[test]
fn simple_square() {
    let grammar = compile(samples::SIMPLE_SQUARE, Some("SimpleSquare")).unwrap();
    assert_same_grammar(&samples::simple_square(), &grammar);
}

#[test]
fn unit_shapes() {
    let grammar = compile(samples::UNIT_SHAPES, Some("UnitShapes")).unwrap();
    assert_same_grammar(&samples::unit_shapes(), &grammar);
}

#[test]
fn four_circles() {
    let grammar = compile(samples::FOUR_CIRCLES, Some("FourCircles")).unwrap();
    assert_same_grammar(&samples::four_circles(), &grammar);
}

#[test]
fn simple_bubble() {
    let grammar = compile(samples::SIMPLE_BUBBLE, Some("SimpleBubble")).unwrap();
    assert_same_grammar(&samples::simple_bubble(), &grammar);
}

#[test]
fn simple_spiral_squares() {
    let grammar = compile(samples::SIMPLE_SPIRAL_SQUARES, Some("SimpleSpiralSquares")).unwrap();
    assert_same_grammar(&samples::simple_spiral_squares(), &grammar);
}

#[test]
fn lots_of_square_pattern() {
    let grammar = compile(samples::LOTS_OF_SQUARE_PATTERN, Some("LotsOfSquarePattern")).unwrap();
    assert_same_grammar(&samples::lots_of_square_pattern(), &grammar);
}

#[test]
fn petal_loop_structure() {
    let grammar = compile(samples::PETAL_LOOP, None).unwrap();
    let flower = &grammar.group("flower").unwrap()[0];
    assert_eq!(flower.replacements.len(), 2);

    let petals = &flower.replacements[0];
    match &petals.kind {
        ReplacementKind::Loop { count, body } => {
            assert_eq!(*count, 6);
            assert_eq!(body.len(), 1);
            assert!(body[0].is_terminal());
        }
        other => panic!("expected loop, got {other:?}"),
    }
    // The loop's own adjustment is the per-iteration delta.
    assert!(transforms_match(&petals.transform, &Transform2D::rotation(60.0)));

    assert!(flower.replacements[1].is_terminal());
}

#[test]
fn nested_loops_parse() {
    let grammar = compile(samples::WITH_LOOP, None).unwrap();
    let init = &grammar.group("init").unwrap()[0];
    assert_eq!(init.replacements.len(), 2);

    match &init.replacements[0].kind {
        ReplacementKind::Loop { count, body } => {
            assert_eq!(*count, 2);
            assert_eq!(body.len(), 1);
        }
        other => panic!("expected loop, got {other:?}"),
    }

    match &init.replacements[1].kind {
        ReplacementKind::Loop { count, body } => {
            assert_eq!(*count, 3);
            assert_eq!(body.len(), 3);
            assert!(matches!(
                body[1].kind,
                ReplacementKind::Loop { count: 4, .. }
            ));
        }
        other => panic!("expected loop, got {other:?}"),
    }
}

#[test]
fn comments_are_skipped() {
    let grammar = compile(samples::WITH_COMMENTS, None).unwrap();
    assert!(colors_match(
        &grammar.background,
        &cfdg_core::HsvColor::new(20.0, 0.7, 0.9, 0.0)
    ));
    assert_eq!(grammar.len(), 2);
    assert!(grammar.group("init").is_some());
    assert!(grammar.group("square").is_some());
}

#[test]
fn z_adjustments_are_ignored() {
    let grammar = compile(samples::CUBE_CASTLE_FRAGMENT, None).unwrap();
    let zcube = &grammar.group("ZCUBE").unwrap()[0];
    let expected = Transform2D::translation(-1.0, 0.58).then(&Transform2D::scale(0.98, 0.98));
    assert!(transforms_match(&zcube.replacements[1].transform, &expected));
}

#[test]
fn forest_compiles_with_all_adjustment_forms() {
    let grammar = compile(samples::FOREST, None).unwrap();
    assert_eq!(grammar.start_shape.as_deref(), Some("FOREST"));
    assert_eq!(grammar.group("SEED").unwrap().len(), 6);
    assert_eq!(grammar.group("FORK").unwrap().len(), 4);

    // BRANCH variant 0 is a flip, variant 1 the identity.
    let branch = grammar.group("BRANCH").unwrap();
    assert!(transforms_match(
        &branch[0].replacements[0].transform,
        &Transform2D::reflection(90.0)
    ));
    assert!(transforms_match(
        &branch[1].replacements[0].transform,
        &Transform2D::IDENTITY
    ));
}

#[test]
fn weighted_variants_keep_declaration_order() {
    let grammar = compile(samples::SIMPLE_TREE, None).unwrap();
    let tree = grammar.group("TREE").unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].weight, 20.0);
    assert_eq!(tree[1].weight, 1.5);

    // Empty rule bodies are legal.
    let left = grammar.group("BRANCH_LEFT").unwrap();
    assert_eq!(left.len(), 4);
    assert!(left[3].replacements.is_empty());
}
