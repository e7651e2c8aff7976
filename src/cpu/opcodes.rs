//! LS-8 instruction set: the one canonical opcode enumeration.
//!
//! The [`for_each_opcode!`] macro holds the opcode definitions (variant, code,
//! mnemonic, handler) and invokes a callback macro with them, so the enum here
//! and the dispatch table in [`table`](super::table) are generated from the
//! same list and cannot drift apart.
//!
//! # Encoding
//!
//! ```text
//! 7 6 5 4 3 2 1 0
//! A A B C D D D D
//! ```
//! - `AA`: number of operand bytes that follow the opcode (0..=2).
//! - `B`:  ALU operation.
//! - `C`:  instruction sets PC itself (jump family).
//! - `DDDD`: instruction identifier.
//!
//! Operand count and the sets-PC bit are read straight from the opcode by
//! [`operand_count`] and [`sets_pc`]; they are never stored separately.

/// Bit 4: the instruction is responsible for the program counter.
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Bit 5: the instruction is executed by the ALU.
pub const ALU_BIT: u8 = 0b0010_0000;

/// Number of operand bytes following `opcode` (`opcode >> 6`).
#[inline]
pub const fn operand_count(opcode: u8) -> u8 {
    opcode >> 6
}

/// True when `opcode` sets PC itself, so the loop must not auto-advance.
#[inline]
pub const fn sets_pc(opcode: u8) -> bool {
    opcode & SETS_PC_BIT != 0
}

/// True when `opcode` belongs to the ALU group.
#[inline]
pub const fn is_alu(opcode: u8) -> bool {
    opcode & ALU_BIT != 0
}

/// Invokes a callback macro with the complete opcode definition list.
macro_rules! for_each_opcode {
    ($callback:ident) => {
        $callback! {
            // =========================
            // Basic
            // =========================
            /// NOP ; do nothing
            Nop = 0x00, "NOP" => $crate::cpu::dispatch::misc::op_nop,
            /// HLT ; halt the CPU
            Hlt = 0x01, "HLT" => $crate::cpu::dispatch::misc::op_hlt,
            // =========================
            // Memory Read/Write
            // =========================
            /// LDI r, imm ; r = imm
            Ldi = 0x82, "LDI" => $crate::cpu::dispatch::load_store::op_ldi,
            /// LD ra, rb ; ra = mem[rb]
            Ld = 0x83, "LD" => $crate::cpu::dispatch::load_store::op_ld,
            /// ST ra, rb ; mem[ra] = rb
            St = 0x84, "ST" => $crate::cpu::dispatch::load_store::op_st,
            // =========================
            // I/O
            // =========================
            /// PRN r ; print r as decimal
            Prn = 0x47, "PRN" => $crate::cpu::dispatch::io::op_prn,
            /// PRA r ; print r as a character
            Pra = 0x48, "PRA" => $crate::cpu::dispatch::io::op_pra,
            // =========================
            // ALU: arithmetic
            // =========================
            /// ADD ra, rb ; ra = ra + rb
            Add = 0xA0, "ADD" => $crate::cpu::dispatch::arithmetic::op_add,
            /// SUB ra, rb ; ra = ra - rb
            Sub = 0xA1, "SUB" => $crate::cpu::dispatch::arithmetic::op_sub,
            /// MUL ra, rb ; ra = ra * rb
            Mul = 0xA2, "MUL" => $crate::cpu::dispatch::arithmetic::op_mul,
            /// DIV ra, rb ; ra = ra / rb
            Div = 0xA3, "DIV" => $crate::cpu::dispatch::arithmetic::op_div,
            /// MOD ra, rb ; ra = ra % rb
            Mod = 0xA4, "MOD" => $crate::cpu::dispatch::arithmetic::op_mod,
            /// ADDI r, imm ; r = r + imm
            Addi = 0xA5, "ADDI" => $crate::cpu::dispatch::arithmetic::op_addi,
            /// INC r ; r = r + 1
            Inc = 0x65, "INC" => $crate::cpu::dispatch::arithmetic::op_inc,
            /// DEC r ; r = r - 1
            Dec = 0x66, "DEC" => $crate::cpu::dispatch::arithmetic::op_dec,
            /// SUBI r, imm ; r = r - imm
            Subi = 0xAE, "SUBI" => $crate::cpu::dispatch::arithmetic::op_subi,
            // =========================
            // ALU: compare
            // =========================
            /// CMP ra, rb ; FL = compare(ra, rb)
            Cmp = 0xA7, "CMP" => $crate::cpu::dispatch::compare::op_cmp,
            // =========================
            // ALU: logic / shifts
            // =========================
            /// AND ra, rb ; ra = ra & rb
            And = 0xA8, "AND" => $crate::cpu::dispatch::logical::op_and,
            /// OR ra, rb ; ra = ra | rb
            Or = 0xAA, "OR" => $crate::cpu::dispatch::logical::op_or,
            /// XOR ra, rb ; ra = ra ^ rb
            Xor = 0xAB, "XOR" => $crate::cpu::dispatch::logical::op_xor,
            /// NOT r ; r = !r
            Not = 0x69, "NOT" => $crate::cpu::dispatch::logical::op_not,
            /// SHL ra, rb ; ra = ra << rb
            Shl = 0xAC, "SHL" => $crate::cpu::dispatch::logical::op_shl,
            /// SHR ra, rb ; ra = ra >> rb
            Shr = 0xAD, "SHR" => $crate::cpu::dispatch::logical::op_shr,
            // =========================
            // Jump & Conditional Jump
            // =========================
            /// JMP r ; PC = r
            Jmp = 0x54, "JMP" => $crate::cpu::dispatch::branches::op_jmp,
            /// JEQ r ; if E: PC = r
            Jeq = 0x55, "JEQ" => $crate::cpu::dispatch::branches::op_jeq,
            /// JNE r ; if !E: PC = r
            Jne = 0x56, "JNE" => $crate::cpu::dispatch::branches::op_jne,
            /// JGT r ; if G: PC = r
            Jgt = 0x57, "JGT" => $crate::cpu::dispatch::branches::op_jgt,
            /// JLT r ; if L: PC = r
            Jlt = 0x58, "JLT" => $crate::cpu::dispatch::branches::op_jlt,
            /// JLE r ; if L or E: PC = r
            Jle = 0x59, "JLE" => $crate::cpu::dispatch::branches::op_jle,
            /// JGE r ; if G or E: PC = r
            Jge = 0x5A, "JGE" => $crate::cpu::dispatch::branches::op_jge,
        }
    };
}

pub(crate) use for_each_opcode;

macro_rules! define_opcodes {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $code:literal, $mnemonic:literal => $handler:path
        ),* $(,)?
    ) => {
        /// Every opcode the LS-8 implements.
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Opcode {
            $(
                $(#[$doc])*
                $name = $code,
            )*
        }

        impl Opcode {
            /// All opcodes in definition order.
            pub const ALL: &'static [Opcode] = &[ $( Opcode::$name, )* ];

            /// Assembly mnemonic, e.g. `"LDI"`.
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $( Opcode::$name => $mnemonic, )*
                }
            }

            /// Look up an opcode by mnemonic (case-insensitive).
            #[cfg(test)]
            pub(crate) fn from_mnemonic(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($mnemonic) {
                        return Some(Opcode::$name);
                    }
                )*
                None
            }
        }

        impl TryFrom<u8> for Opcode {
            type Error = u8;

            /// Fails with the raw byte when it names no instruction.
            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $code => Ok(Opcode::$name), )*
                    other => Err(other),
                }
            }
        }
    };
}

for_each_opcode!(define_opcodes);

impl Opcode {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn operand_count(self) -> u8 {
        operand_count(self as u8)
    }

    #[inline]
    pub const fn sets_pc(self) -> bool {
        sets_pc(self as u8)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_try_from() {
        for &op in Opcode::ALL {
            assert_eq!(Opcode::try_from(op.code()), Ok(op));
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        }
        assert_eq!(Opcode::ALL.len(), 30);
        assert_eq!(Opcode::try_from(0xFF), Err(0xFF));
        assert_eq!(Opcode::from_mnemonic("ldi"), Some(Opcode::Ldi));
        assert_eq!(Opcode::from_mnemonic("PUSH"), None);
    }

    #[test]
    fn operand_counts_follow_top_bits() {
        assert_eq!(Opcode::Nop.operand_count(), 0);
        assert_eq!(Opcode::Hlt.operand_count(), 0);
        assert_eq!(Opcode::Prn.operand_count(), 1);
        assert_eq!(Opcode::Jmp.operand_count(), 1);
        assert_eq!(Opcode::Not.operand_count(), 1);
        assert_eq!(Opcode::Ldi.operand_count(), 2);
        assert_eq!(Opcode::Cmp.operand_count(), 2);
        assert_eq!(operand_count(0xFF), 3);
    }

    #[test]
    fn only_jumps_set_pc() {
        let jumps = [
            Opcode::Jmp,
            Opcode::Jeq,
            Opcode::Jne,
            Opcode::Jgt,
            Opcode::Jlt,
            Opcode::Jle,
            Opcode::Jge,
        ];
        for &op in Opcode::ALL {
            assert_eq!(op.sets_pc(), jumps.contains(&op), "{op}");
        }
    }

    #[test]
    fn alu_bit_marks_register_arithmetic() {
        for op in [Opcode::Add, Opcode::Cmp, Opcode::Inc, Opcode::Not, Opcode::Shr] {
            assert!(is_alu(op.code()), "{op}");
        }
        for op in [Opcode::Ldi, Opcode::Prn, Opcode::Jmp, Opcode::Hlt] {
            assert!(!is_alu(op.code()), "{op}");
        }
    }
}
