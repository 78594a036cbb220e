use indoc::indoc;
use optable_core::OpcodeSpace;

use crate::dump::{dump_json, dump_summary, dump_table, dump_text, handler_counts};
use crate::presets::SM83;
use crate::{Colors, Compilation, TableCompiler};

const SMALL: &str = indoc! {"
    fallback = instr_unimplemented
    [primary]
    0000_0000 instr_nop
    1100_1011 instr_cb_prefix
    [prefixed]
    0xxx_xxxx instr_low
    1xxx_xxxx instr_high
"};

fn small() -> Compilation {
    TableCompiler::new(SMALL).compile().unwrap()
}

#[test]
fn table_lines() {
    let out = dump_table(&small().primary, Colors::OFF);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 256);
    assert_eq!(lines[0x00], "0x00  instr_nop");
    assert_eq!(lines[0x01], "0x01  instr_unimplemented");
    assert_eq!(lines[0xCB], "0xcb  instr_cb_prefix");
}

#[test]
fn fallback_lines_are_dimmed() {
    let out = dump_table(&small().primary, Colors::ON);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0x00], "\x1b[2m0x00\x1b[0m  \x1b[34minstr_nop\x1b[0m");
    assert_eq!(lines[0x01], "\x1b[2m0x01  instr_unimplemented\x1b[0m");
}

#[test]
fn explicit_fallback_handler_is_not_dimmed() {
    let source = indoc! {"
        fallback = instr_unimplemented
        [primary]
        0000_0000 instr_nop
        1101_0011 instr_unimplemented
    "};
    let compiled = TableCompiler::new(source).compile().unwrap();
    let out = dump_table(&compiled.primary, Colors::ON);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0xD3], "\x1b[2m0xd3\x1b[0m  \x1b[34minstr_unimplemented\x1b[0m");
    assert_eq!(lines[0xD4], "\x1b[2m0xd4  instr_unimplemented\x1b[0m");
    assert_eq!(compiled.primary.fallback_count(), 254);
}

#[test]
fn summary_counts_in_first_use_order() {
    let out = dump_summary(&small().primary, Colors::OFF);
    assert_eq!(
        out,
        "  1  instr_nop\n254  instr_unimplemented\n  1  instr_cb_prefix\n3 handlers, 254 fallback opcodes\n"
    );
}

#[test]
fn sm83_handler_counts() {
    let compiled = TableCompiler::new(SM83).compile().unwrap();
    let counts = handler_counts(&compiled.primary);

    assert_eq!(counts.len(), 50);
    assert_eq!(counts["instr_alu_op_r8"], 64);
    assert_eq!(counts["instr_ld_r8_r8"], 63);
    assert_eq!(counts["instr_halt"], 1);
    assert_eq!(counts["instr_unimplemented"], 11);
    assert_eq!(counts.values().sum::<usize>(), 256);
}

#[test]
fn text_dump_heads_each_space() {
    let out = dump_text(&small(), &OpcodeSpace::ALL, true, Colors::OFF);
    insta::assert_snapshot!(out, @r"
    [primary]
      1  instr_nop
    254  instr_unimplemented
      1  instr_cb_prefix
    3 handlers, 254 fallback opcodes

    [prefixed]
    128  instr_low
    128  instr_high
    2 handlers, 0 fallback opcodes
    ");
}

#[test]
fn text_dump_single_space() {
    let out = dump_text(&small(), &[OpcodeSpace::Prefixed], false, Colors::OFF);
    assert!(out.starts_with("[prefixed]\n0x00  instr_low\n"));
    assert!(out.ends_with("0xff  instr_high\n"));
    assert!(!out.contains("[primary]"));
}

#[test]
fn json_dump_selected_spaces() {
    let json = dump_json(&small(), &[OpcodeSpace::Primary], false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let primary = value["primary"].as_array().unwrap();
    assert_eq!(primary.len(), 256);
    assert_eq!(
        primary[0],
        serde_json::json!({"opcode": 0, "handler": "instr_nop"})
    );
    assert_eq!(
        primary[0xCB],
        serde_json::json!({"opcode": 203, "handler": "instr_cb_prefix"})
    );
    assert!(value.get("prefixed").is_none());
}

#[test]
fn json_dump_compact_prefix() {
    let json = dump_json(&small(), &OpcodeSpace::ALL, false).unwrap();
    assert!(json.starts_with(r#"{"primary":[{"opcode":0,"handler":"instr_nop"},{"opcode":1,"handler":"instr_unimplemented"}"#));
    assert!(json.contains(r#""prefixed":[{"opcode":0,"handler":"instr_low"}"#));
}

#[test]
fn json_dump_pretty_is_equivalent() {
    let compact = dump_json(&small(), &OpcodeSpace::ALL, false).unwrap();
    let pretty = dump_json(&small(), &OpcodeSpace::ALL, true).unwrap();
    assert!(pretty.contains('\n'));

    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}
