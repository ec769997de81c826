//! FILENAME: tests/test_properties.rs
//! Integration tests for properties that hold across the formula corpus.

mod common;

use common::{FormatHarness, FormulaFixture};
use parser::parse;
use pretty_assertions::assert_eq;

// ============================================================================
// STABILITY
// ============================================================================

#[test]
fn test_reformatting_reaches_fixed_point() {
    let harness = FormatHarness::new();
    for formula in FormulaFixture::well_formed() {
        let outputs = harness.passes(formula, 2);
        assert_eq!(outputs[1], outputs[2], "not stable for {}", formula);
    }
}

#[test]
fn test_reformatting_is_stable_without_connectors() {
    let harness = FormatHarness::with_json(r#"{"useNestingIndicators": false}"#);
    for formula in FormulaFixture::well_formed() {
        let outputs = harness.passes(formula, 2);
        assert_eq!(outputs[1], outputs[2], "not stable for {}", formula);
    }
}

#[test]
fn test_formatted_output_parses_to_same_shape() {
    let harness = FormatHarness::new();
    for formula in FormulaFixture::well_formed() {
        let output = harness.beautify(formula);
        assert_eq!(
            parse(&output).to_string(),
            parse(&harness.beautify(&output)).to_string(),
            "shape changed for {}",
            formula
        );
    }
}

// ============================================================================
// LEADING '=' PRESERVATION
// ============================================================================

#[test]
fn test_leading_equals_is_preserved() {
    let harness = FormatHarness::new();
    let inputs = FormulaFixture::well_formed()
        .into_iter()
        .chain(FormulaFixture::malformed())
        .chain(FormulaFixture::glyph_prefixed());

    for formula in inputs {
        let output = harness.beautify(formula);
        assert_eq!(
            output.starts_with('='),
            formula.trim().starts_with('='),
            "'=' mismatch for {:?} -> {:?}",
            formula,
            output
        );
    }
}

#[test]
fn test_stripping_equals_only_drops_prefix() {
    let harness = FormatHarness::new();
    for formula in FormulaFixture::well_formed() {
        let Some(body) = formula.strip_prefix('=') else {
            continue;
        };
        assert_eq!(
            format!("={}", harness.beautify(body)),
            harness.beautify(formula)
        );
    }
}

// ============================================================================
// SEPARATOR NORMALIZATION
// ============================================================================

#[test]
fn test_separator_styles_parse_identically() {
    for (comma, semicolon) in FormulaFixture::separator_pairs() {
        assert_eq!(parse(comma).to_string(), parse(semicolon).to_string());
    }
}

#[test]
fn test_separator_styles_beautify_identically() {
    let harness = FormatHarness::new();
    for (comma, semicolon) in FormulaFixture::separator_pairs() {
        assert_eq!(harness.beautify(comma), harness.beautify(semicolon));
    }
}

// ============================================================================
// STRING LITERAL OPACITY
// ============================================================================

#[test]
fn test_string_with_delimiters_is_one_leaf() {
    let tree = parse("=\"a,b(c)\"");
    assert_eq!(tree.children().len(), 1);
    assert!(tree.children()[0].is_leaf());

    let harness = FormatHarness::new();
    assert_eq!(harness.beautify("=\"a,b(c)\""), "=\"a,b(c)\"");
}

// ============================================================================
// INLINE THRESHOLD BOUNDARY
// ============================================================================

#[test]
fn test_forty_characters_stay_inline() {
    let harness = FormatHarness::new();
    // 14 + 14 + 12 characters including quotes
    let formula = format!(
        "=CONCATENATE(\"{}\",\"{}\",\"{}\")",
        "a".repeat(12),
        "b".repeat(12),
        "c".repeat(10)
    );
    let output = harness.beautify(&formula);
    assert!(!output.contains('\n'), "expected inline, got {}", output);
    assert_eq!(
        output,
        format!(
            "=CONCATENATE(\"{}\"; \"{}\"; \"{}\")",
            "a".repeat(12),
            "b".repeat(12),
            "c".repeat(10)
        )
    );
}

#[test]
fn test_forty_one_characters_wrap() {
    let harness = FormatHarness::new();
    let formula = format!(
        "=CONCATENATE(\"{}\",\"{}\",\"{}\")",
        "a".repeat(12),
        "b".repeat(12),
        "c".repeat(11)
    );
    let output = harness.beautify(&formula);
    assert_eq!(output.lines().count(), 5);
    assert!(output.ends_with("\n)"));
}

// ============================================================================
// MALFORMED INPUT NEVER PANICS
// ============================================================================

#[test]
fn test_malformed_input_is_deterministic() {
    let harness = FormatHarness::new();
    for formula in FormulaFixture::malformed() {
        let first = harness.beautify(formula);
        let second = harness.beautify(formula);
        assert_eq!(first, second, "non-deterministic for {:?}", formula);
    }
}

#[test]
fn test_malformed_input_keeps_content() {
    let harness = FormatHarness::new();
    for formula in FormulaFixture::malformed() {
        if formula.trim().trim_start_matches('=').trim().is_empty() {
            continue;
        }
        assert!(
            !harness.beautify(formula).trim_start_matches('=').is_empty(),
            "lost all content for {:?}",
            formula
        );
    }
}
