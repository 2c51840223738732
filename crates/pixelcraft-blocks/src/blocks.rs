//! Block definitions and registry

use crate::tools::{ToolKind, ToolTier};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Stack limit for anything that is not a tool
pub const DEFAULT_STACK_SIZE: u32 = 64;

/// Every kind of tile, item and tool in the game.
///
/// The discriminant is the stable block code stored in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Wood = 4,
    Leaves = 5,
    Coal = 6,
    Iron = 7,
    Flower = 8,
    Beef = 9,
    Wool = 10,
    Stick = 11,
    PickaxeWood = 12,
    AxeWood = 13,
    PickaxeStone = 14,
    AxeStone = 15,
    Sand = 16,
    Cactus = 17,
    Planks = 18,
    SwordWood = 19,
    SwordStone = 20,
    ShovelWood = 21,
    ShovelStone = 22,
    WoodBirch = 23,
    LeavesBirch = 24,
    WoodSpruce = 25,
    LeavesSpruce = 26,
    IronIngot = 27,
    Furnace = 28,
    PickaxeIron = 29,
    AxeIron = 30,
    SwordIron = 31,
    ShovelIron = 32,
    DiamondOre = 33,
    Diamond = 34,
    PickaxeDiamond = 35,
    AxeDiamond = 36,
    SwordDiamond = 37,
    ShovelDiamond = 38,
}

impl BlockType {
    /// All block types, indexed by code
    pub const ALL: [BlockType; 39] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Leaves,
        BlockType::Coal,
        BlockType::Iron,
        BlockType::Flower,
        BlockType::Beef,
        BlockType::Wool,
        BlockType::Stick,
        BlockType::PickaxeWood,
        BlockType::AxeWood,
        BlockType::PickaxeStone,
        BlockType::AxeStone,
        BlockType::Sand,
        BlockType::Cactus,
        BlockType::Planks,
        BlockType::SwordWood,
        BlockType::SwordStone,
        BlockType::ShovelWood,
        BlockType::ShovelStone,
        BlockType::WoodBirch,
        BlockType::LeavesBirch,
        BlockType::WoodSpruce,
        BlockType::LeavesSpruce,
        BlockType::IronIngot,
        BlockType::Furnace,
        BlockType::PickaxeIron,
        BlockType::AxeIron,
        BlockType::SwordIron,
        BlockType::ShovelIron,
        BlockType::DiamondOre,
        BlockType::Diamond,
        BlockType::PickaxeDiamond,
        BlockType::AxeDiamond,
        BlockType::SwordDiamond,
        BlockType::ShovelDiamond,
    ];

    /// Numeric block code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a block by its code. Unknown codes have no block.
    pub fn from_code(code: u8) -> Option<BlockType> {
        Self::ALL.get(code as usize).copied()
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    /// Tool kind and tier if this block is a tool item
    pub fn tool(self) -> Option<(ToolKind, ToolTier)> {
        use BlockType::*;
        match self {
            PickaxeWood => Some((ToolKind::Pickaxe, ToolTier::Wood)),
            AxeWood => Some((ToolKind::Axe, ToolTier::Wood)),
            ShovelWood => Some((ToolKind::Shovel, ToolTier::Wood)),
            SwordWood => Some((ToolKind::Sword, ToolTier::Wood)),
            PickaxeStone => Some((ToolKind::Pickaxe, ToolTier::Stone)),
            AxeStone => Some((ToolKind::Axe, ToolTier::Stone)),
            ShovelStone => Some((ToolKind::Shovel, ToolTier::Stone)),
            SwordStone => Some((ToolKind::Sword, ToolTier::Stone)),
            PickaxeIron => Some((ToolKind::Pickaxe, ToolTier::Iron)),
            AxeIron => Some((ToolKind::Axe, ToolTier::Iron)),
            ShovelIron => Some((ToolKind::Shovel, ToolTier::Iron)),
            SwordIron => Some((ToolKind::Sword, ToolTier::Iron)),
            PickaxeDiamond => Some((ToolKind::Pickaxe, ToolTier::Diamond)),
            AxeDiamond => Some((ToolKind::Axe, ToolTier::Diamond)),
            ShovelDiamond => Some((ToolKind::Shovel, ToolTier::Diamond)),
            SwordDiamond => Some((ToolKind::Sword, ToolTier::Diamond)),
            Air | Grass | Dirt | Stone | Wood | Leaves | Coal | Iron | Flower | Beef | Wool
            | Stick | Sand | Cactus | Planks | WoodBirch | LeavesBirch | WoodSpruce
            | LeavesSpruce | IronIngot | Furnace | DiamondOre | Diamond => None,
        }
    }

    /// Static metadata from the shared block table
    #[inline]
    pub fn def(self) -> &'static BlockDef {
        Blocks::shared().get(self)
    }

    /// Maximum count of this block in one inventory slot
    #[inline]
    pub fn stack_size(self) -> u32 {
        self.def().stack_size
    }
}

/// Static properties of a block type
#[derive(Clone, Debug, Serialize)]
pub struct BlockDef {
    pub block: BlockType,
    pub name: &'static str,

    /// Base color (RGBA)
    pub color: [u8; 4],
    /// Detail color used for texture speckles
    pub secondary_color: Option<[u8; 4]>,

    /// Collides with the player
    pub solid: bool,
    /// Mining resistance (0-100)
    pub hardness: u8,
    pub food: bool,

    /// Preferred tool for mining this block, or the kind of tool this item is
    pub tool_kind: Option<ToolKind>,
    /// Mining speed multiplier (tools only)
    pub efficiency_bonus: Option<u8>,
    /// Uses before breaking (tools only)
    pub max_durability: Option<u32>,
    pub stack_size: u32,
    /// Melee damage (swords only)
    pub damage: Option<u8>,
}

impl Default for BlockDef {
    fn default() -> Self {
        Self {
            block: BlockType::Air,
            name: "unknown",
            color: [255, 0, 255, 255], // Magenta for missing blocks
            secondary_color: None,
            solid: true,
            hardness: 1,
            food: false,
            tool_kind: None,
            efficiency_bonus: None,
            max_durability: None,
            stack_size: DEFAULT_STACK_SIZE,
            damage: None,
        }
    }
}

/// Registry of all block definitions, indexed by block code
pub struct Blocks {
    defs: Vec<BlockDef>,
}

static SHARED: OnceLock<Blocks> = OnceLock::new();

impl Blocks {
    pub fn new() -> Self {
        let mut blocks = Self {
            defs: vec![BlockDef::default(); BlockType::ALL.len()],
        };
        blocks.register_defaults();
        blocks
    }

    /// Process-wide read-only table, built on first use
    pub fn shared() -> &'static Blocks {
        SHARED.get_or_init(|| {
            log::debug!("Building block table ({} types)", BlockType::ALL.len());
            Blocks::new()
        })
    }

    fn register_defaults(&mut self) {
        use BlockType::*;

        self.register(BlockDef {
            block: Air,
            name: "Air",
            color: [0, 0, 0, 0],
            solid: false,
            hardness: 0,
            ..Default::default()
        });

        // TERRAIN

        self.register(BlockDef {
            block: Grass,
            name: "Grass",
            color: [76, 175, 80, 255],
            secondary_color: Some([56, 142, 60, 255]),
            hardness: 10,
            tool_kind: Some(ToolKind::Shovel),
            ..Default::default()
        });
        self.register(BlockDef {
            block: Dirt,
            name: "Dirt",
            color: [121, 85, 72, 255],
            secondary_color: Some([93, 64, 55, 255]),
            hardness: 10,
            tool_kind: Some(ToolKind::Shovel),
            ..Default::default()
        });
        self.register(BlockDef {
            block: Stone,
            name: "Stone",
            color: [158, 158, 158, 255],
            secondary_color: Some([117, 117, 117, 255]),
            hardness: 40,
            tool_kind: Some(ToolKind::Pickaxe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: Sand,
            name: "Sand",
            color: [253, 216, 53, 255],
            secondary_color: Some([251, 192, 45, 255]),
            hardness: 8,
            tool_kind: Some(ToolKind::Shovel),
            ..Default::default()
        });

        // VEGETATION

        self.register(BlockDef {
            block: Wood,
            name: "Oak Wood",
            color: [93, 64, 55, 255],
            secondary_color: Some([62, 39, 35, 255]),
            hardness: 25,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: WoodBirch,
            name: "Birch Wood",
            color: [224, 224, 224, 255],
            secondary_color: Some([66, 66, 66, 255]),
            hardness: 25,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: WoodSpruce,
            name: "Spruce Wood",
            color: [62, 39, 35, 255],
            secondary_color: Some([33, 33, 33, 255]),
            hardness: 30,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: Leaves,
            name: "Oak Leaves",
            color: [46, 125, 50, 255],
            secondary_color: Some([27, 94, 32, 255]),
            hardness: 5,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: LeavesBirch,
            name: "Birch Leaves",
            color: [104, 159, 56, 255],
            secondary_color: Some([51, 105, 30, 255]),
            hardness: 5,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: LeavesSpruce,
            name: "Spruce Leaves",
            color: [27, 94, 32, 255],
            secondary_color: Some([0, 51, 0, 255]),
            hardness: 5,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: Cactus,
            name: "Cactus",
            color: [46, 125, 50, 255],
            secondary_color: Some([27, 94, 32, 255]),
            hardness: 5,
            ..Default::default()
        });
        self.register(BlockDef {
            block: Flower,
            name: "Poppy",
            color: [244, 67, 54, 255],
            secondary_color: Some([46, 125, 50, 255]),
            solid: false,
            ..Default::default()
        });

        // ORES

        self.register(BlockDef {
            block: Coal,
            name: "Coal Ore",
            color: [66, 66, 66, 255],
            secondary_color: Some([33, 33, 33, 255]),
            hardness: 45,
            tool_kind: Some(ToolKind::Pickaxe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: Iron,
            name: "Iron Ore",
            color: [215, 204, 200, 255],
            secondary_color: Some([188, 170, 164, 255]),
            hardness: 50,
            tool_kind: Some(ToolKind::Pickaxe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: DiamondOre,
            name: "Diamond Ore",
            color: [158, 158, 158, 255],
            secondary_color: Some([0, 188, 212, 255]),
            hardness: 70,
            tool_kind: Some(ToolKind::Pickaxe),
            ..Default::default()
        });

        // ITEMS AND PROCESSED MATERIALS

        self.register(BlockDef {
            block: Diamond,
            name: "Diamond",
            color: [0, 188, 212, 255],
            solid: false,
            ..Default::default()
        });
        self.register(BlockDef {
            block: Beef,
            name: "Raw Beef",
            color: [229, 115, 115, 255],
            secondary_color: Some([239, 83, 80, 255]),
            solid: false,
            food: true,
            ..Default::default()
        });
        self.register(BlockDef {
            block: Wool,
            name: "Wool",
            color: [238, 238, 238, 255],
            secondary_color: Some([189, 189, 189, 255]),
            hardness: 5,
            ..Default::default()
        });
        self.register(BlockDef {
            block: Stick,
            name: "Stick",
            color: [161, 136, 127, 255],
            solid: false,
            ..Default::default()
        });
        self.register(BlockDef {
            block: Planks,
            name: "Planks",
            color: [141, 110, 99, 255],
            secondary_color: Some([93, 64, 55, 255]),
            hardness: 20,
            tool_kind: Some(ToolKind::Axe),
            ..Default::default()
        });
        self.register(BlockDef {
            block: IronIngot,
            name: "Iron Ingot",
            color: [240, 240, 240, 255],
            secondary_color: Some([209, 209, 209, 255]),
            solid: false,
            ..Default::default()
        });
        self.register(BlockDef {
            block: Furnace,
            name: "Furnace",
            color: [66, 66, 66, 255],
            secondary_color: Some([33, 33, 33, 255]),
            hardness: 50,
            tool_kind: Some(ToolKind::Pickaxe),
            ..Default::default()
        });

        // TOOLS

        self.register_tool(PickaxeWood, "Wooden Pickaxe");
        self.register_tool(AxeWood, "Wooden Axe");
        self.register_tool(ShovelWood, "Wooden Shovel");
        self.register_tool(SwordWood, "Wooden Sword");
        self.register_tool(PickaxeStone, "Stone Pickaxe");
        self.register_tool(AxeStone, "Stone Axe");
        self.register_tool(ShovelStone, "Stone Shovel");
        self.register_tool(SwordStone, "Stone Sword");
        self.register_tool(PickaxeIron, "Iron Pickaxe");
        self.register_tool(AxeIron, "Iron Axe");
        self.register_tool(ShovelIron, "Iron Shovel");
        self.register_tool(SwordIron, "Iron Sword");
        self.register_tool(PickaxeDiamond, "Diamond Pickaxe");
        self.register_tool(AxeDiamond, "Diamond Axe");
        self.register_tool(ShovelDiamond, "Diamond Shovel");
        self.register_tool(SwordDiamond, "Diamond Sword");
    }

    /// Tool items derive color, speed, durability and damage from their tier
    fn register_tool(&mut self, block: BlockType, name: &'static str) {
        let Some((kind, tier)) = block.tool() else {
            log::warn!("{:?} registered as a tool but has no tool kind", block);
            return;
        };

        let color = match tier {
            ToolTier::Wood => [141, 110, 99, 255],
            ToolTier::Stone => [117, 117, 117, 255],
            ToolTier::Iron => [240, 240, 240, 255],
            ToolTier::Diamond => [0, 188, 212, 255],
        };
        let (efficiency_bonus, damage) = match kind {
            ToolKind::Sword => (None, Some(tier.sword_damage())),
            ToolKind::Pickaxe | ToolKind::Axe | ToolKind::Shovel => {
                (Some(tier.efficiency()), None)
            }
        };

        self.register(BlockDef {
            block,
            name,
            color,
            secondary_color: Some([93, 64, 55, 255]), // Wooden handle
            solid: false,
            tool_kind: Some(kind),
            efficiency_bonus,
            max_durability: Some(tier.max_durability()),
            stack_size: 1,
            damage,
            ..Default::default()
        });
    }

    fn register(&mut self, def: BlockDef) {
        let index = def.block.code() as usize;
        self.defs[index] = def;
    }

    /// Get block definition by type
    #[inline]
    pub fn get(&self, block: BlockType) -> &BlockDef {
        &self.defs[block.code() as usize]
    }

    /// Get block definition by raw code
    pub fn get_by_code(&self, code: u8) -> Option<&BlockDef> {
        BlockType::from_code(code).map(|block| self.get(block))
    }

    pub fn is_solid(&self, block: BlockType) -> bool {
        self.get(block).solid
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockDef> {
        self.defs.iter()
    }
}

impl Default for Blocks {
    fn default() -> Self {
        Self::new()
    }
}
