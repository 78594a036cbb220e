//! Table construction with last-writer-wins override semantics.
//!
//! Specs are applied in authoring order. When two patterns cover the same
//! byte, the spec applied later owns it. Overlaps are recorded, never
//! rejected: callers that want a diagnostic read [`TableBuilder::overlaps`]
//! before finishing.

use std::collections::HashMap;
use std::ops::Index;

use tracing::{debug, trace};

use crate::pattern::PatternFormatError;
use crate::spec::InstructionSpec;

/// Number of entries in every opcode table.
pub const OPCODE_COUNT: usize = 256;

/// Index of an interned handler name within one [`OpcodeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u16);

impl HandlerId {
    pub fn get(self) -> u16 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A byte claimed by two specs. `earlier` lost it to `later`.
///
/// Both fields are spec indices in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub opcode: u8,
    pub earlier: usize,
    pub later: usize,
}

/// Handler names interned in first-use order.
#[derive(Debug, Default)]
struct HandlerInterner {
    names: Vec<String>,
    lookup: HashMap<String, HandlerId>,
}

impl HandlerInterner {
    fn intern(&mut self, name: &str) -> HandlerId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        // 256 slots plus the fallback never exceed u16.
        let id = HandlerId(self.names.len() as u16);
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    handler: HandlerId,
    spec: usize,
}

/// Working assignment for one opcode space.
///
/// Owns its state exclusively; build one per table.
#[derive(Debug)]
pub struct TableBuilder {
    handlers: HandlerInterner,
    slots: [Option<Slot>; OPCODE_COUNT],
    overlaps: Vec<Overlap>,
    applied: usize,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            handlers: HandlerInterner::default(),
            slots: [None; OPCODE_COUNT],
            overlaps: Vec::new(),
            applied: 0,
        }
    }

    /// Assign `spec.handler` to every byte of the spec's expansion.
    pub fn apply(&mut self, spec: &InstructionSpec) -> &mut Self {
        let index = self.applied;
        let handler = self.handlers.intern(&spec.handler);

        for opcode in spec.pattern.expand() {
            let slot = &mut self.slots[opcode as usize];
            if let Some(previous) = slot {
                trace!(
                    target: "optable::table",
                    opcode,
                    earlier = previous.spec,
                    later = index,
                    "later spec overrides earlier assignment"
                );
                self.overlaps.push(Overlap {
                    opcode,
                    earlier: previous.spec,
                    later: index,
                });
            }
            *slot = Some(Slot {
                handler,
                spec: index,
            });
        }

        self.applied += 1;
        self
    }

    pub fn extend<'s>(&mut self, specs: impl IntoIterator<Item = &'s InstructionSpec>) -> &mut Self {
        for spec in specs {
            self.apply(spec);
        }
        self
    }

    /// Number of specs applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Every override so far, in the order they happened.
    pub fn overlaps(&self) -> &[Overlap] {
        &self.overlaps
    }

    /// Indices of applied specs that no longer own any byte.
    pub fn shadowed(&self) -> Vec<usize> {
        let mut owns = vec![false; self.applied];
        for slot in self.slots.iter().flatten() {
            owns[slot.spec] = true;
        }
        owns.iter()
            .enumerate()
            .filter(|&(_, &owned)| !owned)
            .map(|(i, _)| i)
            .collect()
    }

    /// Fill unassigned bytes with `fallback` and freeze the table.
    pub fn finish(mut self, fallback: &str) -> OpcodeTable {
        let unassigned = self.slots.iter().filter(|s| s.is_none()).count();
        // Only intern the fallback when it is actually dispatched to.
        let fallback_id = if unassigned > 0 {
            self.handlers.intern(fallback)
        } else {
            HandlerId(0)
        };

        let slots = std::array::from_fn(|i| self.slots[i].map_or(fallback_id, |slot| slot.handler));
        let filled = std::array::from_fn(|i| self.slots[i].is_none());

        debug!(
            target: "optable::table",
            specs = self.applied,
            handlers = self.handlers.names.len(),
            overlaps = self.overlaps.len(),
            fallback_slots = unassigned,
            "table finished"
        );

        OpcodeTable {
            handlers: self.handlers.names,
            slots,
            filled,
            fallback: fallback.to_string(),
        }
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A total mapping from every byte value to a handler name.
///
/// Immutable once built. Two tables built from the same specs and fallback
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    handlers: Vec<String>,
    slots: [HandlerId; OPCODE_COUNT],
    /// Opcodes no spec claimed, filled by `finish`.
    filled: [bool; OPCODE_COUNT],
    fallback: String,
}

impl OpcodeTable {
    /// Handler name for `opcode`.
    pub fn get(&self, opcode: u8) -> &str {
        &self.handlers[self.slots[opcode as usize].index()]
    }

    pub fn handler_id(&self, opcode: u8) -> HandlerId {
        self.slots[opcode as usize]
    }

    /// Resolve an interned id from this table.
    pub fn handler_name(&self, id: HandlerId) -> &str {
        &self.handlers[id.index()]
    }

    /// Distinct handler names in first-use order.
    pub fn handlers(&self) -> &[String] {
        &self.handlers
    }

    /// All 256 `(opcode, handler)` pairs, opcodes ascending.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (u8, &str)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, id)| (i as u8, self.handlers[id.index()].as_str()))
    }

    pub fn len(&self) -> usize {
        OPCODE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of opcodes dispatched to `handler`.
    pub fn count(&self, handler: &str) -> usize {
        self.entries().filter(|&(_, h)| h == handler).count()
    }

    /// Fallback name this table was finished with.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Whether `opcode` was left unassigned and filled with the fallback.
    ///
    /// An opcode whose spec names the fallback handler explicitly is not
    /// a fallback slot.
    pub fn is_fallback(&self, opcode: u8) -> bool {
        self.filled[opcode as usize]
    }

    /// Number of opcodes no spec claimed.
    pub fn fallback_count(&self) -> usize {
        self.filled.iter().filter(|&&filled| filled).count()
    }
}

impl Index<u8> for OpcodeTable {
    type Output = str;

    fn index(&self, opcode: u8) -> &str {
        self.get(opcode)
    }
}

/// Build a table from already-parsed specs.
pub fn build_table<'s>(
    specs: impl IntoIterator<Item = &'s InstructionSpec>,
    fallback: &str,
) -> OpcodeTable {
    let mut builder = TableBuilder::new();
    builder.extend(specs);
    builder.finish(fallback)
}

/// Parse every pattern, then build. The first malformed pattern aborts the
/// whole build.
pub fn build_table_from_strs(
    specs: &[(&str, &str)],
    fallback: &str,
) -> Result<OpcodeTable, PatternFormatError> {
    let parsed = specs
        .iter()
        .map(|&(pattern, handler)| InstructionSpec::parse(pattern, handler))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_table(&parsed, fallback))
}
