//! Arena memory subsystem
//!
//! The arena is a fixed-length circular array of cells. Every address is
//! reduced into `[0, size)` before use, so addressing never fails.
//!
//! Each cell remembers who wrote it last and whether gameplay has ever
//! overwritten it. Cells written while the arena is being populated stay
//! `unmodified`; the first write made on behalf of a player clears the flag
//! for good.

use codefight_spec::{Address, ArenaConfig, FillMode, Instruction, Opcode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::state::PlayerId;

/// One arena slot: an instruction plus provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    opcode: Opcode,
    a: i32,
    b: i32,
    last_writer: Option<PlayerId>,
    unmodified: bool,
}

impl Cell {
    /// Fresh, unmodified cell holding `instruction`
    pub const fn new(instruction: Instruction) -> Self {
        let (a, b) = instruction.args();
        Self {
            opcode: instruction.opcode(),
            a,
            b,
            last_writer: None,
            unmodified: true,
        }
    }

    /// Rebuild the stored instruction from opcode and arguments
    #[inline]
    pub const fn instruction(&self) -> Instruction {
        Instruction::new(self.opcode, self.a, self.b)
    }

    #[inline]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    #[inline]
    pub const fn a(&self) -> i32 {
        self.a
    }

    #[inline]
    pub const fn b(&self) -> i32 {
        self.b
    }

    /// Player whose code last wrote this cell, if any
    #[inline]
    pub const fn last_writer(&self) -> Option<PlayerId> {
        self.last_writer
    }

    /// `true` until gameplay overwrites the cell
    #[inline]
    pub const fn is_unmodified(&self) -> bool {
        self.unmodified
    }

    /// A modified cell that halts or spins in place when executed.
    ///
    /// Only used for display; execution never looks at it.
    pub const fn is_bomb(&self) -> bool {
        !self.unmodified
            && match self.opcode {
                Opcode::Stop => true,
                Opcode::Jmp => self.a == 0,
                Opcode::Jmz => self.a == 0 && self.b == 0,
                _ => false,
            }
    }

    fn set_instruction(&mut self, instruction: Instruction) {
        let (a, b) = instruction.args();
        self.opcode = instruction.opcode();
        self.a = a;
        self.b = b;
    }

    fn touch(&mut self, writer: Option<PlayerId>) {
        self.last_writer = writer;
        if writer.is_some() {
            self.unmodified = false;
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(Instruction::stop())
    }
}

/// Circular arena shared by every player of a match
#[derive(Debug, Clone)]
pub struct Arena {
    cells: Vec<Cell>,
    fill: FillMode,
}

impl Arena {
    /// Create a fully populated arena according to the configured fill mode
    pub fn new(config: &ArenaConfig) -> Self {
        let cells = match config.fill {
            FillMode::Stop => vec![Cell::default(); config.size],
            FillMode::Random { seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
                (0..config.size).map(|_| Cell::new(random_instruction(&mut rng))).collect()
            }
        };

        Self {
            cells,
            fill: config.fill,
        }
    }

    /// Number of cells
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill
    }

    pub fn fill_seed(&self) -> i64 {
        self.fill.seed()
    }

    /// Map any integer onto `[0, size)`, wrapping in both directions
    #[inline]
    pub fn sanitize(&self, address: i64) -> Address {
        address.rem_euclid(self.size() as i64) as Address
    }

    /// `base + delta`, sanitized
    #[inline]
    pub fn offset(&self, base: Address, delta: i32) -> Address {
        self.sanitize(base as i64 + delta as i64)
    }

    /// Read the cell at `address`
    #[inline]
    pub fn read(&self, address: Address) -> &Cell {
        &self.cells[address % self.size()]
    }

    /// Replace the instruction at `address`.
    ///
    /// A write with a writer marks the cell as modified for good.
    pub fn write(&mut self, address: Address, instruction: Instruction, writer: Option<PlayerId>) {
        let cell = self.cell_mut(address);
        cell.set_instruction(instruction);
        cell.touch(writer);
    }

    /// Copy the content of `from` onto `to` on behalf of `writer`
    pub fn clone_cell(&mut self, from: Address, to: Address, writer: Option<PlayerId>) {
        let instruction = self.read(from).instruction();
        self.write(to, instruction, writer);
    }

    /// Overwrite the A argument of the cell at `address`
    pub fn set_a(&mut self, address: Address, value: i32, writer: Option<PlayerId>) {
        let cell = self.cell_mut(address);
        cell.a = value;
        cell.touch(writer);
    }

    /// Overwrite the B argument of the cell at `address`
    pub fn set_b(&mut self, address: Address, value: i32, writer: Option<PlayerId>) {
        let cell = self.cell_mut(address);
        cell.b = value;
        cell.touch(writer);
    }

    /// Check if the cell at `address` is a bomb
    pub fn is_bomb(&self, address: Address) -> bool {
        self.read(address).is_bomb()
    }

    /// First address at or after `from` that does not hold STOP.
    ///
    /// Scans at most one full lap; returns `from` if every cell is STOP.
    pub fn first_non_stop(&self, from: Address) -> Address {
        (0..self.size())
            .map(|step| (from + step) % self.size())
            .find(|&addr| self.cells[addr].opcode != Opcode::Stop)
            .unwrap_or(from % self.size())
    }

    /// All cells in address order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Deploy a program at `start` during setup, leaving every cell unmodified
    pub(crate) fn populate(&mut self, start: Address, code: &[Instruction], owner: PlayerId) {
        for (i, instruction) in code.iter().enumerate() {
            let cell = self.cell_mut(start + i);
            *cell = Cell::new(*instruction);
            cell.last_writer = Some(owner);
        }
    }

    fn cell_mut(&mut self, address: Address) -> &mut Cell {
        let size = self.size();
        &mut self.cells[address % size]
    }
}

fn random_instruction(rng: &mut ChaCha8Rng) -> Instruction {
    let opcode = Opcode::ALL[rng.gen_range(0..Opcode::COUNT)];
    Instruction::new(opcode, rng.gen(), rng.gen())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(size: usize) -> Arena {
        Arena::new(&ArenaConfig::new(size, FillMode::Stop).unwrap())
    }

    #[test]
    fn test_stop_fill() {
        let arena = arena(7);
        assert_eq!(arena.size(), 7);
        assert!(arena.cells().iter().all(|c| c.opcode() == Opcode::Stop && c.is_unmodified()));
        assert_eq!(arena.fill_seed(), 0);
    }

    #[test]
    fn test_random_fill_is_deterministic() {
        let config = ArenaConfig::new(50, FillMode::Random { seed: 42 }).unwrap();
        let first = Arena::new(&config);
        let second = Arena::new(&config);
        assert_eq!(first.cells(), second.cells());
        assert!(first.cells().iter().all(|c| c.is_unmodified() && c.last_writer().is_none()));
        assert_eq!(first.fill_seed(), 42);
    }

    #[test]
    fn test_random_fill_depends_on_seed() {
        let a = Arena::new(&ArenaConfig::new(50, FillMode::Random { seed: 1 }).unwrap());
        let b = Arena::new(&ArenaConfig::new(50, FillMode::Random { seed: 2 }).unwrap());
        assert_ne!(a.cells(), b.cells());
    }

    #[test]
    fn test_sanitize_wraps() {
        let arena = arena(7);
        assert_eq!(arena.sanitize(0), 0);
        assert_eq!(arena.sanitize(7), 0);
        assert_eq!(arena.sanitize(-1), 6);
        assert_eq!(arena.sanitize(-15), 6);
        assert_eq!(arena.sanitize(i32::MIN as i64), arena.sanitize(i32::MIN as i64 + 7));
        assert_eq!(arena.offset(5, 3), 1);
        assert_eq!(arena.offset(0, -1), 6);
    }

    #[test]
    fn test_write_with_writer_taints() {
        let mut arena = arena(7);
        arena.write(3, Instruction::Jmp { a: 0, b: 0 }, Some(PlayerId(1)));
        let cell = arena.read(3);
        assert_eq!(cell.instruction(), Instruction::Jmp { a: 0, b: 0 });
        assert_eq!(cell.last_writer(), Some(PlayerId(1)));
        assert!(!cell.is_unmodified());
        assert!(cell.is_bomb());
    }

    #[test]
    fn test_write_without_writer_keeps_unmodified() {
        let mut arena = arena(7);
        arena.write(2, Instruction::Stop { a: 0, b: 0 }, None);
        assert!(arena.read(2).is_unmodified());
        assert!(!arena.is_bomb(2));
    }

    #[test]
    fn test_taint_never_reverts() {
        let mut arena = arena(7);
        arena.write(1, Instruction::Add { a: 1, b: 1 }, Some(PlayerId(0)));
        arena.write(1, Instruction::Stop { a: 0, b: 0 }, None);
        assert!(!arena.read(1).is_unmodified());
        assert!(arena.is_bomb(1));
    }

    #[test]
    fn test_clone_cell_copies_content_only() {
        let mut arena = arena(7);
        arena.populate(0, &[Instruction::MovR { a: 4, b: 5 }], PlayerId(0));
        arena.clone_cell(0, 9, Some(PlayerId(1)));

        let source = arena.read(0);
        assert!(source.is_unmodified());
        assert_eq!(source.last_writer(), Some(PlayerId(0)));

        let dest = arena.read(2);
        assert_eq!(dest.instruction(), Instruction::MovR { a: 4, b: 5 });
        assert_eq!(dest.last_writer(), Some(PlayerId(1)));
        assert!(!dest.is_unmodified());
    }

    #[test]
    fn test_field_writes_taint() {
        let mut arena = arena(7);
        arena.set_a(4, 0, Some(PlayerId(0)));
        arena.set_b(5, 9, Some(PlayerId(1)));
        assert_eq!(arena.read(5).b(), 9);
        assert!(!arena.read(4).is_unmodified());
        assert!(!arena.read(5).is_unmodified());
    }

    #[test]
    fn test_bomb_patterns() {
        let mut arena = arena(10);
        let writer = Some(PlayerId(0));
        arena.write(0, Instruction::Jmp { a: 1, b: 0 }, writer);
        arena.write(1, Instruction::Jmz { a: 0, b: 0 }, writer);
        arena.write(2, Instruction::Jmz { a: 0, b: 1 }, writer);
        arena.write(3, Instruction::Stop { a: 5, b: 5 }, writer);
        arena.write(4, Instruction::MovR { a: 0, b: 0 }, writer);

        assert!(!arena.is_bomb(0));
        assert!(arena.is_bomb(1));
        assert!(!arena.is_bomb(2));
        assert!(arena.is_bomb(3));
        assert!(!arena.is_bomb(4));
    }

    #[test]
    fn test_populated_cells_are_never_bombs() {
        let mut arena = arena(7);
        arena.populate(2, &[Instruction::stop(), Instruction::Jmp { a: 0, b: 0 }], PlayerId(3));
        assert_eq!(arena.read(2).last_writer(), Some(PlayerId(3)));
        assert!(!arena.is_bomb(2));
        assert!(!arena.is_bomb(3));
    }

    #[test]
    fn test_first_non_stop() {
        let mut arena = arena(7);
        assert_eq!(arena.first_non_stop(3), 3);
        arena.write(1, Instruction::Jmp { a: 0, b: 0 }, None);
        assert_eq!(arena.first_non_stop(3), 1);
        assert_eq!(arena.first_non_stop(1), 1);
    }
}
