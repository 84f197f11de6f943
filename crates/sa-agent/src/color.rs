//! Display identity for agents.
//!
//! The simulation never draws anything; these values exist so that every
//! renderer agrees on which snake is which.

use sa_core::AgentId;

/// RGB used for every dead agent's body.
pub const CORPSE_RGB: [u8; 3] = [100, 100, 100];

/// RGB used for the food cell.
pub const FOOD_RGB: [u8; 3] = [255, 0, 0];

/// Palette entry assigned to an agent at creation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentColor {
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Orange,
}

impl AgentColor {
    /// Assignment order.  Rosters larger than the palette wrap around.
    pub const PALETTE: [AgentColor; 6] = [
        AgentColor::Green,
        AgentColor::Blue,
        AgentColor::Yellow,
        AgentColor::Magenta,
        AgentColor::Cyan,
        AgentColor::Orange,
    ];

    /// The colour for roster slot `id`.
    #[inline]
    pub fn for_agent(id: AgentId) -> AgentColor {
        Self::PALETTE[id.index() % Self::PALETTE.len()]
    }

    pub const fn rgb(self) -> [u8; 3] {
        match self {
            AgentColor::Green   => [0, 255, 0],
            AgentColor::Blue    => [0, 0, 255],
            AgentColor::Yellow  => [255, 255, 0],
            AgentColor::Magenta => [255, 0, 255],
            AgentColor::Cyan    => [0, 255, 255],
            AgentColor::Orange  => [255, 165, 0],
        }
    }
}

impl std::fmt::Display for AgentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentColor::Green   => "green",
            AgentColor::Blue    => "blue",
            AgentColor::Yellow  => "yellow",
            AgentColor::Magenta => "magenta",
            AgentColor::Cyan    => "cyan",
            AgentColor::Orange  => "orange",
        };
        f.write_str(s)
    }
}
