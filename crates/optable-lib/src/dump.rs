//! Human- and machine-readable views of compiled tables.

use indexmap::IndexMap;
use optable_core::{OpcodeSpace, OpcodeTable};
use serde::Serialize;
use std::fmt::Write;

use crate::{Colors, Compilation};

/// One line per opcode: `0x00  instr_nop`. Fallback slots are muted.
pub fn dump_table(table: &OpcodeTable, colors: Colors) -> String {
    let Colors {
        handler: name,
        muted,
        reset,
        ..
    } = colors;

    let mut out = String::new();
    for (opcode, handler) in table.entries() {
        if table.is_fallback(opcode) {
            writeln!(out, "{muted}0x{opcode:02x}  {handler}{reset}")
                .expect("String write never fails");
        } else {
            writeln!(out, "{muted}0x{opcode:02x}{reset}  {name}{handler}{reset}")
                .expect("String write never fails");
        }
    }
    out
}

/// Opcode count per handler, in first-use order.
pub fn handler_counts(table: &OpcodeTable) -> IndexMap<&str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for (_, handler) in table.entries() {
        *counts.entry(handler).or_default() += 1;
    }
    counts
}

/// Opcode count per handler followed by a totals line.
pub fn dump_summary(table: &OpcodeTable, colors: Colors) -> String {
    let Colors {
        handler: name,
        muted,
        reset,
        ..
    } = colors;

    let counts = handler_counts(table);
    let mut out = String::new();
    for (handler, count) in &counts {
        if *handler == table.fallback() {
            writeln!(out, "{muted}{count:>3}  {handler}{reset}").expect("String write never fails");
        } else {
            writeln!(out, "{count:>3}  {name}{handler}{reset}").expect("String write never fails");
        }
    }
    writeln!(
        out,
        "{muted}{} handlers, {} fallback opcodes{reset}",
        counts.len(),
        table.fallback_count()
    )
    .expect("String write never fails");
    out
}

/// Text dump of the selected spaces. Each space is headed by `[name]`.
pub fn dump_text(
    compilation: &Compilation,
    spaces: &[OpcodeSpace],
    summary: bool,
    colors: Colors,
) -> String {
    let Colors { bits, reset, .. } = colors;

    let mut out = String::new();
    for (i, &space) in spaces.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "{bits}[{space}]{reset}").expect("String write never fails");
        let table = compilation.table(space);
        if summary {
            out.push_str(&dump_summary(table, colors));
        } else {
            out.push_str(&dump_table(table, colors));
        }
    }
    out
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    opcode: u8,
    handler: &'a str,
}

#[derive(Serialize)]
struct JsonDump<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    primary: Option<Vec<JsonEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefixed: Option<Vec<JsonEntry<'a>>>,
}

fn json_entries(table: &OpcodeTable) -> Vec<JsonEntry<'_>> {
    table
        .entries()
        .map(|(opcode, handler)| JsonEntry { opcode, handler })
        .collect()
}

/// `{"primary": [{"opcode": 0, "handler": "..."}, ...], "prefixed": [...]}`,
/// restricted to the selected spaces.
pub fn dump_json(
    compilation: &Compilation,
    spaces: &[OpcodeSpace],
    pretty: bool,
) -> serde_json::Result<String> {
    let select = |space: OpcodeSpace| {
        spaces
            .contains(&space)
            .then(|| json_entries(compilation.table(space)))
    };
    let dump = JsonDump {
        primary: select(OpcodeSpace::Primary),
        prefixed: select(OpcodeSpace::Prefixed),
    };

    if pretty {
        serde_json::to_string_pretty(&dump)
    } else {
        serde_json::to_string(&dump)
    }
}
