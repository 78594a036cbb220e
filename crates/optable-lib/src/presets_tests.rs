use crate::TableCompiler;
use crate::parser::parse;
use crate::presets::{PRESET_NAMES, SM83, preset};

#[test]
fn every_listed_preset_resolves() {
    for name in PRESET_NAMES {
        assert!(preset(name).is_some(), "missing preset {name}");
    }
    assert!(preset("z80").is_none());
}

#[test]
fn sm83_parses_cleanly() {
    let result = parse(SM83);
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.map.sections.len(), 2);
    assert_eq!(result.map.sections[0].entries.len(), 49);
    assert_eq!(result.map.sections[1].entries.len(), 11);
}

#[test]
fn sm83_compiles_without_options() {
    let compiled = TableCompiler::new(SM83).compile().unwrap();
    assert!(compiled.warnings.is_empty());
    assert_eq!(compiled.primary.fallback(), "instr_unimplemented");
    assert_eq!(compiled.prefixed.fallback(), "instr_unimplemented");
}
