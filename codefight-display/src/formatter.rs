//! Instruction and cell formatting

use codefight_runtime::Cell;
use codefight_spec::{Address, Instruction};

/// Format instruction as `OPCODE|a|b`
pub fn format_instruction(instr: &Instruction) -> String {
    let (a, b) = instr.args();
    format!("{}|{}|{}", instr.mnemonic(), a, b)
}

/// Column widths shared by every line of one detail listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailWidths {
    pub address: usize,
    pub opcode: usize,
    pub a: usize,
    pub b: usize,
}

impl DetailWidths {
    /// Widest entry per column over `cells`
    pub fn measure<'a>(cells: impl IntoIterator<Item = (Address, &'a Cell)>) -> Self {
        cells.into_iter().fold(Self::default(), |w, (addr, cell)| Self {
            address: w.address.max(addr.to_string().len()),
            opcode: w.opcode.max(cell.opcode().mnemonic().len()),
            a: w.a.max(cell.a().to_string().len()),
            b: w.b.max(cell.b().to_string().len()),
        })
    }
}

/// One listing line: `<glyph> <addr>: <OPCODE> | <a> | <b>`, right-aligned
pub fn format_detail_line(glyph: char, address: Address, cell: &Cell, widths: &DetailWidths) -> String {
    format!(
        "{} {:>aw$}: {:>ow$} | {:>a_w$} | {:>b_w$}",
        glyph,
        address,
        cell.opcode().mnemonic(),
        cell.a(),
        cell.b(),
        aw = widths.address,
        ow = widths.opcode,
        a_w = widths.a,
        b_w = widths.b,
    )
}
