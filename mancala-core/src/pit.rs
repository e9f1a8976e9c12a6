//! 棋坑与阵营定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SLOTS, PITS_PER_SIDE};

/// 棋坑标识
///
/// 共 14 个槽位：南方 6 坑（A-F）、北方 6 坑（G-L）、两方各一个库。
/// 后继关系与对面关系是固定查表，不在运行时推导。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pit {
    // 南方坑（播种顺序 A→F）
    A,
    B,
    C,
    D,
    E,
    F,
    // 北方坑（播种顺序 L→G）
    G,
    H,
    I,
    J,
    K,
    L,
    /// 南方库
    SouthStore,
    /// 北方库
    NorthStore,
}

impl Pit {
    /// 环形播种顺序中的后继槽位
    ///
    /// A→B→…→F→南库→L→K→…→G→北库→A
    pub const fn successor(self) -> Pit {
        match self {
            Pit::A => Pit::B,
            Pit::B => Pit::C,
            Pit::C => Pit::D,
            Pit::D => Pit::E,
            Pit::E => Pit::F,
            Pit::F => Pit::SouthStore,
            Pit::SouthStore => Pit::L,
            Pit::L => Pit::K,
            Pit::K => Pit::J,
            Pit::J => Pit::I,
            Pit::I => Pit::H,
            Pit::H => Pit::G,
            Pit::G => Pit::NorthStore,
            Pit::NorthStore => Pit::A,
        }
    }

    /// 正对面的坑（用于捕获），库没有对面
    pub const fn opposite(self) -> Option<Pit> {
        match self {
            Pit::A => Some(Pit::G),
            Pit::B => Some(Pit::H),
            Pit::C => Some(Pit::I),
            Pit::D => Some(Pit::J),
            Pit::E => Some(Pit::K),
            Pit::F => Some(Pit::L),
            Pit::G => Some(Pit::A),
            Pit::H => Some(Pit::B),
            Pit::I => Some(Pit::C),
            Pit::J => Some(Pit::D),
            Pit::K => Some(Pit::E),
            Pit::L => Some(Pit::F),
            Pit::SouthStore | Pit::NorthStore => None,
        }
    }

    /// 槽位归属的阵营
    pub const fn owner(self) -> Side {
        match self {
            Pit::A | Pit::B | Pit::C | Pit::D | Pit::E | Pit::F | Pit::SouthStore => Side::South,
            _ => Side::North,
        }
    }

    /// 是否为库
    pub const fn is_store(self) -> bool {
        matches!(self, Pit::SouthStore | Pit::NorthStore)
    }

    /// 转换为数组索引
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Pit> {
        const ALL: [Pit; BOARD_SLOTS] = [
            Pit::A,
            Pit::B,
            Pit::C,
            Pit::D,
            Pit::E,
            Pit::F,
            Pit::G,
            Pit::H,
            Pit::I,
            Pit::J,
            Pit::K,
            Pit::L,
            Pit::SouthStore,
            Pit::NorthStore,
        ];
        ALL.get(index).copied()
    }

    /// 从坑位字母解析（不含库，大小写均可）
    pub fn from_letter(c: char) -> Option<Pit> {
        match c.to_ascii_uppercase() {
            'A' => Some(Pit::A),
            'B' => Some(Pit::B),
            'C' => Some(Pit::C),
            'D' => Some(Pit::D),
            'E' => Some(Pit::E),
            'F' => Some(Pit::F),
            'G' => Some(Pit::G),
            'H' => Some(Pit::H),
            'I' => Some(Pit::I),
            'J' => Some(Pit::J),
            'K' => Some(Pit::K),
            'L' => Some(Pit::L),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Pit::A => "A",
            Pit::B => "B",
            Pit::C => "C",
            Pit::D => "D",
            Pit::E => "E",
            Pit::F => "F",
            Pit::G => "G",
            Pit::H => "H",
            Pit::I => "I",
            Pit::J => "J",
            Pit::K => "K",
            Pit::L => "L",
            Pit::SouthStore => "south store",
            Pit::NorthStore => "north store",
        };
        write!(f, "{}", name)
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 南方（玩家 1，搜索中的极小方）
    South,
    /// 北方（玩家 2，搜索中的极大方）
    North,
}

impl Side {
    /// 获取对方阵营
    pub const fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// 本方的库
    pub const fn store(self) -> Pit {
        match self {
            Side::South => Pit::SouthStore,
            Side::North => Pit::NorthStore,
        }
    }

    /// 本方 6 个坑，按固定扫描顺序
    pub const fn pits(self) -> [Pit; PITS_PER_SIDE] {
        match self {
            Side::South => [Pit::A, Pit::B, Pit::C, Pit::D, Pit::E, Pit::F],
            Side::North => [Pit::G, Pit::H, Pit::I, Pit::J, Pit::K, Pit::L],
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::South => write!(f, "South"),
            Side::North => write!(f, "North"),
        }
    }
}
