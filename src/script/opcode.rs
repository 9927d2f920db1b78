pub const OP_0: u8 = 0x00;
pub const OP_PUSHBYTES_1: u8 = 0x01;
pub const OP_PUSHBYTES_75: u8 = 0x4b;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_1: u8 = 0x51;
pub const OP_IF: u8 = 0x63;
pub const OP_ENDIF: u8 = 0x68;
pub const OP_CHECKSIG: u8 = 0xac;

pub const OP_0_NAME: &str = "OP_0";
pub const OP_1_NAME: &str = "OP_1";
pub const OP_PUSH_NAME: &str = "OP_PUSH";
pub const OP_PUSHDATA1_NAME: &str = "OP_PUSHDATA1";
pub const OP_IF_NAME: &str = "OP_IF";
pub const OP_ENDIF_NAME: &str = "OP_ENDIF";
pub const OP_CHECKSIG_NAME: &str = "OP_CHECKSIG";
pub const OP_UNKNOWN_NAME: &str = "OP_UNKNOWN";
pub const OP_NESTED_NAME: &str = "OP_NESTED";
