use indoc::indoc;
use optable_core::{BitPattern, OpcodeSpace};

use super::{OpcodeMap, parse};
use crate::DiagnosticsPrinter;
use rowan::TextRange;
use crate::diagnostics::DiagnosticKind;

fn kinds(source: &str) -> Vec<DiagnosticKind> {
    parse(source).diagnostics.kinds()
}

fn plain(source: &str) -> String {
    let result = parse(source);
    DiagnosticsPrinter::new(&result.diagnostics).render()
}

#[test]
fn parses_sections_entries_and_fallbacks() {
    let source = indoc! {"
        # Game Boy subset
        fallback = instr_unimplemented

        [primary]
        0000_0000  instr_nop
        00xx_0001  instr_ld_r16_imm16

        [prefixed]
        fallback = instr_bad_prefixed
        0000_0xxx  instr_rlc_r8
    "};

    let result = parse(source);
    assert!(result.diagnostics.is_empty());

    let map = result.map;
    assert_eq!(map.fallback.as_ref().unwrap().as_str(), "instr_unimplemented");
    assert_eq!(map.sections.len(), 2);

    let primary = map.section(OpcodeSpace::Primary).unwrap();
    assert_eq!(primary.entries.len(), 2);
    assert_eq!(primary.entries[0].pattern, BitPattern::exact(0x00));
    assert_eq!(primary.entries[1].handler.as_str(), "instr_ld_r16_imm16");
    assert!(primary.fallback.is_none());

    let prefixed = map.section(OpcodeSpace::Prefixed).unwrap();
    assert_eq!(
        prefixed.fallback.as_ref().unwrap().as_str(),
        "instr_bad_prefixed"
    );
    assert_eq!(prefixed.entries[0].pattern.wildcard_count(), 3);
}

#[test]
fn fallback_lookup_prefers_section_directive() {
    let source = indoc! {"
        fallback = file_level
        [primary]
        [prefixed]
        fallback = section_level
    "};

    let map = parse(source).map;
    assert_eq!(
        map.fallback_for(OpcodeSpace::Primary).unwrap().as_str(),
        "file_level"
    );
    assert_eq!(
        map.fallback_for(OpcodeSpace::Prefixed).unwrap().as_str(),
        "section_level"
    );
}

#[test]
fn entries_keep_authoring_order() {
    let source = indoc! {"
        [primary]
        01xx_xxxx  instr_ld_r8_r8
        0111_0110  instr_halt
    "};

    let map = parse(source).map;
    let handlers: Vec<_> = map.sections[0]
        .entries
        .iter()
        .map(|e| e.handler.as_str())
        .collect();
    assert_eq!(handlers, ["instr_ld_r8_r8", "instr_halt"]);
}

#[test]
fn spans_point_into_source() {
    let source = "[primary]\n0000_0000 instr_nop\n";
    let map = parse(source).map;
    let section = &map.sections[0];
    let entry = &section.entries[0];

    assert_eq!(section.header, TextRange::new(0.into(), 9.into()));
    assert_eq!(&source[entry.pattern_span], "0000_0000");
    assert_eq!(&source[entry.handler.span], "instr_nop");
    assert_eq!(&source[entry.span()], "0000_0000 instr_nop");
}

#[test]
fn prefix_alias_opens_prefixed_section() {
    let map = parse("[prefix]\n0000_0000 instr_rlc_b\n").map;
    assert_eq!(map.sections[0].space, OpcodeSpace::Prefixed);
}

#[test]
fn underscores_anywhere_in_pattern() {
    let map = parse("[primary]\n01xxx_xxx instr_ld\n").map;
    assert_eq!(map.sections[0].entries[0].pattern.wildcard_count(), 6);
}

#[test]
fn missing_sections_are_absent() {
    let result = parse("fallback = instr_unimplemented\n");
    assert!(result.diagnostics.is_empty());
    assert!(result.map.sections.is_empty());
    assert!(result.map.section(OpcodeSpace::Primary).is_none());
}

#[test]
fn empty_source() {
    let result = parse("");
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.map, OpcodeMap::default());
}

#[test]
fn duplicate_section_points_at_first() {
    let source = indoc! {"
        fallback = instr_unimplemented
        [primary]
        0000_0000 instr_nop
        [prefixed]
        [primary]
    "};

    insta::assert_snapshot!(plain(source), @"error at 72..81: section `[primary]` is already defined (related: first defined here at 31..40)");
}

#[test]
fn entries_under_rejected_header_are_dropped() {
    let source = indoc! {"
        [primary]
        0000_0000 instr_nop
        [primary]
        0000_0000 instr_other
        [tertiary]
        0000_0000 instr_third
    "};

    let result = parse(source);
    assert_eq!(
        result.diagnostics.kinds(),
        vec![DiagnosticKind::DuplicateSection, DiagnosticKind::UnknownSpace]
    );
    assert_eq!(result.map.sections.len(), 1);
    assert_eq!(result.map.sections[0].entries.len(), 1);
    assert_eq!(
        result.map.sections[0].entries[0].handler.as_str(),
        "instr_nop"
    );
}

#[test]
fn malformed_entries_are_all_reported() {
    let source = indoc! {"
        [primary]
        0000_000 instr_nop
        0000_0001
        0000_0010 a b
    "};

    insta::assert_snapshot!(plain(source), @r"
    error at 10..18: pattern `0000_000` has 7 bit symbols, expected 8
    error at 38..38: expected handler name after pattern
    error at 51..52: unexpected tokens at end of line: `b`
    ");
}

#[test]
fn trailing_tokens_keep_the_entry() {
    let result = parse("[primary]\n0000_0010 a b\n");
    assert_eq!(result.map.sections[0].entries.len(), 1);
    assert!(result.diagnostics.has_errors());
}

#[test]
fn entry_outside_section() {
    assert_eq!(
        kinds("0000_0000 instr_nop\n"),
        vec![DiagnosticKind::EntryOutsideSection]
    );
}

#[test]
fn header_errors() {
    assert_eq!(kinds("[]\n"), vec![DiagnosticKind::ExpectedSpaceName]);
    assert_eq!(kinds("[\n"), vec![DiagnosticKind::ExpectedSpaceName]);
    assert_eq!(kinds("[primary\n"), vec![DiagnosticKind::UnclosedHeader]);
    assert_eq!(kinds("[bogus]\n"), vec![DiagnosticKind::UnknownSpace]);
    assert_eq!(
        kinds("[primary] extra\n"),
        vec![DiagnosticKind::TrailingTokens]
    );
}

#[test]
fn directive_errors() {
    assert_eq!(kinds("fallback =\n"), vec![DiagnosticKind::ExpectedValue]);
    assert_eq!(kinds("mode = fast\n"), vec![DiagnosticKind::UnknownDirective]);
    assert_eq!(
        kinds("fallback = a b\n"),
        vec![DiagnosticKind::TrailingTokens]
    );
    assert_eq!(
        kinds("fallback = a\nfallback = b\n"),
        vec![DiagnosticKind::DuplicateDirective]
    );
}

#[test]
fn same_directive_in_different_scopes_is_fine() {
    let source = indoc! {"
        fallback = a
        [primary]
        fallback = b
        [prefixed]
        fallback = c
    "};
    assert!(kinds(source).is_empty());
}

#[test]
fn wildcard_pattern_as_directive_key_is_unknown() {
    assert_eq!(
        kinds("xxxx_xxxx = instr_any\n"),
        vec![DiagnosticKind::UnknownDirective]
    );
}

#[test]
fn stray_tokens_at_line_start() {
    assert_eq!(kinds("] foo\n"), vec![DiagnosticKind::UnexpectedToken]);
    assert_eq!(kinds("= foo\n"), vec![DiagnosticKind::UnexpectedToken]);
}

#[test]
fn garbage_drops_the_line() {
    let result = parse("[primary]\n0000\u{1}0000 instr_nop\n0000_0001 instr_ok\n");
    assert_eq!(
        result.diagnostics.kinds(),
        vec![DiagnosticKind::UnexpectedCharacters]
    );
    assert_eq!(result.map.sections[0].entries.len(), 1);
    assert_eq!(
        result.map.sections[0].entries[0].handler.as_str(),
        "instr_ok"
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let source = indoc! {"
        # leading

        [primary]   # trailing on header
        0000_0000 instr_nop  # trailing on entry
    "};
    let result = parse(source);
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.map.sections[0].entries.len(), 1);
}
