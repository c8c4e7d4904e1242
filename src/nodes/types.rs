use serde::{Deserialize, Serialize};

use super::gates::GateCondition;
use crate::effects::types::EffectSpec;

/// The six node colors. On Gate nodes the color is display-only and never
/// contributes to color counting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl NodeColor {
    pub fn all() -> [NodeColor; 6] {
        [
            NodeColor::Red,
            NodeColor::Orange,
            NodeColor::Yellow,
            NodeColor::Green,
            NodeColor::Blue,
            NodeColor::Purple,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeColor::Red => "Red",
            NodeColor::Orange => "Orange",
            NodeColor::Yellow => "Yellow",
            NodeColor::Green => "Green",
            NodeColor::Blue => "Blue",
            NodeColor::Purple => "Purple",
        }
    }

    pub fn from_name(name: &str) -> Option<NodeColor> {
        NodeColor::all().into_iter().find(|c| c.name() == name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeType {
    Normal,
    Synergy,
    Gate,
}

/// A node in the contract tree. Immutable once the contract is loaded;
/// selection state lives in `GameState`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: u32,
    pub node_type: NodeType,
    pub color: NodeColor,
    pub layer: u32,
    pub slot: u32,
    pub effects: Vec<EffectSpec>,
    pub gate: Option<GateCondition>,
    pub connections: Vec<u32>,
}

impl Node {
    pub fn is_gate(&self) -> bool {
        self.node_type == NodeType::Gate
    }

    /// Stable processing key: layer, then slot, then id.
    pub fn order_key(&self) -> (u32, u32, u32) {
        (self.layer, self.slot, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_name_round_trip() {
        for color in NodeColor::all() {
            assert_eq!(NodeColor::from_name(color.name()), Some(color));
        }
        assert_eq!(NodeColor::from_name("Chartreuse"), None);
    }

    #[test]
    fn test_order_key_sorts_layer_then_slot_then_id() {
        let mut keys = [(1, 0, 9), (0, 2, 1), (0, 2, 0), (0, 0, 5)];
        keys.sort();
        assert_eq!(keys, [(0, 0, 5), (0, 2, 0), (0, 2, 1), (1, 0, 9)]);
    }
}
