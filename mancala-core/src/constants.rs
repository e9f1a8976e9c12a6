//! 规则常量定义

/// 每方坑数
pub const PITS_PER_SIDE: usize = 6;

/// 槽位总数（12 个坑 + 2 个库）
pub const BOARD_SLOTS: usize = 14;

/// 每坑默认初始种子数
pub const DEFAULT_STARTING_SEEDS: u32 = 4;
