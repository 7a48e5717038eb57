//! Structural grammar comparison with float tolerance.

use cfdg_core::{HsvColor, Transform2D};
use cfdg_grammar::{Grammar, Replacement, ReplacementKind};

pub const EPS: f32 = 1e-5;

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

pub fn transforms_match(a: &Transform2D, b: &Transform2D) -> bool {
    a.m.iter().zip(b.m.iter()).all(|(x, y)| close(*x, *y))
}

pub fn colors_match(a: &HsvColor, b: &HsvColor) -> bool {
    close(a.h, b.h) && close(a.s, b.s) && close(a.v, b.v) && close(a.a, b.a)
}

/// Assert that `actual` matches `expected` group by group, rule by rule,
/// replacement by replacement. Transforms and colors are compared with
/// [`EPS`] tolerance; everything else exactly.
pub fn assert_same_grammar(expected: &Grammar, actual: &Grammar) {
    assert_eq!(expected.name, actual.name);
    assert_eq!(expected.start_shape, actual.start_shape);
    assert!(
        colors_match(&expected.background, &actual.background),
        "background differs: {:?} vs {:?}",
        expected.background,
        actual.background
    );

    for (name, _) in expected.groups() {
        assert!(actual.group(name).is_some(), "missing rule group {name}");
    }
    for (name, _) in actual.groups() {
        assert!(expected.group(name).is_some(), "unexpected rule group {name}");
    }

    for (name, expected_rules) in expected.groups() {
        let rules = actual.group(name).unwrap();
        assert_eq!(
            expected_rules.len(),
            rules.len(),
            "variant count differs in group {name}"
        );
        for (i, (expected_rule, rule)) in expected_rules.iter().zip(rules).enumerate() {
            assert_eq!(expected_rule.name, rule.name);
            assert!(
                close(expected_rule.weight, rule.weight),
                "weight differs in {name} variant {i}"
            );
            assert!(
                close(expected_rule.probability, rule.probability),
                "probability differs in {name} variant {i}"
            );
            assert_same_replacements(
                &expected_rule.replacements,
                &rule.replacements,
                &format!("{name} variant {i}"),
            );
        }
    }
}

fn assert_same_replacements(expected: &[Replacement], actual: &[Replacement], context: &str) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "replacement count differs in {context}"
    );
    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        assert_eq!(
            e.is_terminal(),
            a.is_terminal(),
            "terminal flag differs in {context} replacement {i}"
        );
        assert!(
            colors_match(&e.color, &a.color),
            "color differs in {context} replacement {i}: {:?} vs {:?}",
            e.color,
            a.color
        );
        assert!(
            transforms_match(&e.transform, &a.transform),
            "transform differs in {context} replacement {i}: {:?} vs {:?}",
            e.transform,
            a.transform
        );
        match (&e.kind, &a.kind) {
            (ReplacementKind::Primitive(ep), ReplacementKind::Primitive(ap)) => {
                assert_eq!(ep, ap, "primitive differs in {context} replacement {i}")
            }
            (ReplacementKind::Call(en), ReplacementKind::Call(an)) => {
                assert_eq!(en, an, "call target differs in {context} replacement {i}")
            }
            (
                ReplacementKind::Loop { count: ec, body: eb },
                ReplacementKind::Loop { count: ac, body: ab },
            ) => {
                assert_eq!(ec, ac, "loop count differs in {context} replacement {i}");
                assert_same_replacements(eb, ab, &format!("{context} loop {i}"));
            }
            (e, a) => panic!("replacement kind differs in {context} replacement {i}: {e:?} vs {a:?}"),
        }
    }
}
