pub const CMD_FRAME_SIZE: usize = 7;

/// Outbound frame: sync, command id, 16-bit data, 16-bit checksum.
pub type Command = [u8; CMD_FRAME_SIZE];

pub const PASSIVE_MODE: Command = [0x42, 0x4D, 0xE1, 0x00, 0x00, 0x01, 0x70];
pub const ACTIVE_MODE: Command = [0x42, 0x4D, 0xE1, 0x00, 0x01, 0x01, 0x71];
pub const SLEEP: Command = [0x42, 0x4D, 0xE4, 0x00, 0x00, 0x01, 0x73];
pub const WAKE: Command = [0x42, 0x4D, 0xE4, 0x00, 0x01, 0x01, 0x74];
pub const PASSIVE_READ: Command = [0x42, 0x4D, 0xE2, 0x00, 0x00, 0x01, 0x71];

pub fn passive_mode() -> &'static Command {
    &PASSIVE_MODE
}

pub fn active_mode() -> &'static Command {
    &ACTIVE_MODE
}

pub fn sleep() -> &'static Command {
    &SLEEP
}

pub fn wake() -> &'static Command {
    &WAKE
}

///
/// Asks a sensor in passive mode for one data frame
///
pub fn passive_read() -> &'static Command {
    &PASSIVE_READ
}
