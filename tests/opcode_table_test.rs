//! Tests for the instruction table: closure, byte values, mnemonics, and
//! operand sizes.

use libvm8::Opcode;

#[test]
fn test_every_listed_opcode_decodes_to_itself() {
    for opcode in Opcode::ALL {
        assert_eq!(Opcode::decode(opcode as u8), Some(opcode));
    }
}

#[test]
fn test_undefined_bytes_do_not_decode() {
    let defined: Vec<u8> = Opcode::ALL.iter().map(|op| *op as u8).collect();
    let mut undefined = 0;
    for byte in 0..=255u8 {
        if !defined.contains(&byte) {
            assert_eq!(Opcode::decode(byte), None, "0x{byte:02X} decoded");
            undefined += 1;
        }
    }
    assert_eq!(undefined, 256 - Opcode::ALL.len());
}

#[test]
fn test_listing_is_in_byte_order_without_duplicates() {
    let bytes: Vec<u8> = Opcode::ALL.iter().map(|op| *op as u8).collect();
    let mut sorted = bytes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(bytes, sorted);
}

#[test]
fn test_mnemonics_are_three_letters_and_unique() {
    let mut seen = Vec::new();
    for opcode in Opcode::ALL {
        let mnemonic = opcode.mnemonic();
        assert_eq!(mnemonic.len(), 3, "{mnemonic}");
        assert!(!seen.contains(&mnemonic), "{mnemonic} repeated");
        seen.push(mnemonic);
    }
}

#[test]
fn test_operand_sizes_match_the_encoding() {
    let expected = [
        (Opcode::Nop, 0),
        (Opcode::MoveLitReg, 2),
        (Opcode::MoveMemReg, 2),
        (Opcode::LogicalShiftLeft, 2),
        (Opcode::Inc, 1),
        (Opcode::Divide, 2),
        (Opcode::Jump, 2),
        (Opcode::JumpEqual, 3),
        (Opcode::StackPushLit, 1),
        (Opcode::Call, 2),
        (Opcode::Return, 0),
        (Opcode::Print, 3),
        (Opcode::ReadInput, 1),
        (Opcode::Halt, 0),
    ];
    for (opcode, operands) in expected {
        assert_eq!(opcode.operand_bytes(), operands, "{}", opcode.mnemonic());
    }
}
