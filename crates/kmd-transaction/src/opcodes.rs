//! Script opcode constants.
//!
//! Only the opcodes the SDK actually emits or inspects are named here;
//! anything between `OP_DATA_1` and `OP_DATA_75` is an implicit push of
//! that many bytes.

/// Smallest direct-push opcode (pushes 1 byte).
pub const OP_DATA_1: u8 = 0x01;

/// Push the next 20 bytes (the public key hash in a P2PKH script).
pub const OP_DATA_20: u8 = 0x14;

/// Largest direct-push opcode (pushes 75 bytes).
pub const OP_DATA_75: u8 = 0x4b;

/// The next byte holds the push length.
pub const OP_PUSHDATA1: u8 = 0x4c;

/// The next two bytes (LE) hold the push length.
pub const OP_PUSHDATA2: u8 = 0x4d;

/// The next four bytes (LE) hold the push length.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;

/// Pop two items and push equality; fails the script when they differ.
pub const OP_EQUALVERIFY: u8 = 0x88;

/// Pop the top item and push its hash160.
pub const OP_HASH160: u8 = 0xa9;

/// Verify an ECDSA signature against a public key.
pub const OP_CHECKSIG: u8 = 0xac;
