use std::fs;
use std::path::PathBuf;

use optable_core::OpcodeSpace;
use optable_lib::EmitError;

use super::generate::{GenerateArgs, execute};
use super::run_common::CommandError;
use super::spec_loader::SpecInput;

fn args() -> GenerateArgs {
    GenerateArgs {
        input: SpecInput::new(None, Some("sm83".into())),
        fallback: None,
        template: None,
        output: None,
        primary_marker: None,
        prefixed_marker: None,
        color: false,
    }
}

fn write_template(dir: &tempfile::TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("template.rs");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn builtin_template_to_stdout() {
    let out = execute(&args()).unwrap().unwrap();

    assert!(!out.contains("/*[REPLACE_ME]*/"));
    assert!(!out.contains("/*PREFIX_OPTABLE*/"));
    assert!(out.contains("\t[0x76] \t= \tinstr_halt, \n"));
    assert!(out.contains("\t[0xd3] \t= \tinstr_unimplemented, \n"));
    assert!(out.contains("\t[0xff] \t= \tinstr_set_b3_r8, \n"));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("optable.h");
    let mut args = args();
    args.output = Some(output.clone());

    assert_eq!(execute(&args).unwrap(), None);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\t[0xcb] \t= \tinstr_cb_prefix, \n"));
}

#[test]
fn custom_template_and_markers() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args();
    args.template = Some(write_template(&dir, "A{@P}\nB{@X}\n"));
    args.primary_marker = Some("{@P}".to_string());
    args.prefixed_marker = Some("{@X}".to_string());

    let out = execute(&args).unwrap().unwrap();

    assert!(out.starts_with("A\n\t[0x00] \t= \tinstr_nop, \n"));
    assert!(out.contains("B\n\t[0x00] \t= \tinstr_rlc_r8, \n"));
    assert_eq!(out.matches("\t[0x").count(), 2 * 256);
}

#[test]
fn template_without_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args();
    args.template = Some(write_template(&dir, "only /*[REPLACE_ME]*/ here\n"));

    let err = execute(&args).unwrap_err();

    let CommandError::Emit(EmitError::MissingPlaceholder { space, .. }) = &err else {
        panic!("expected missing placeholder, got {err:?}");
    };
    assert_eq!(*space, OpcodeSpace::Prefixed);
    insta::assert_snapshot!(err, @"template has no `/*PREFIX_OPTABLE*/` placeholder for the prefixed table");
}

#[test]
fn unreadable_template() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args();
    args.template = Some(dir.path().join("missing.h"));

    let err = execute(&args).unwrap_err();

    assert!(matches!(err, CommandError::Template { .. }));
    assert!(err.to_string().starts_with("failed to read template '"));
}

#[test]
fn unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args();
    args.output = Some(dir.path().join("no-such-dir").join("optable.h"));

    assert!(matches!(execute(&args), Err(CommandError::Write { .. })));
}
