//! Block naming
//!
//! Wood-family materials keep their species in the low bits of the data
//! value; everything else is named by its material.

use contracts::BlockType;

/// Species encoded in a wood block's data value
///
/// Only the nibble range 0..=15 carries block data; anything else is
/// `UNKNOWN`.
pub fn wood_species(data: i32) -> &'static str {
    match data {
        0..=15 => match data % 4 {
            0 => "OAK",
            1 => "SPRUCE",
            2 => "BIRCH",
            _ => "JUNGLE",
        },
        _ => "UNKNOWN",
    }
}

fn wood_shape(material: &str) -> Option<&'static str> {
    match material {
        "LOG" => Some("LOG"),
        "WOOD_STEP" | "WOOD_DOUBLE_STEP" => Some("SLAB"),
        "WOOD_STAIRS" => Some("STAIRS"),
        _ => None,
    }
}

/// `<SPECIES>_<SHAPE>` for wood-family blocks, the material name otherwise
pub fn block_name(block: &BlockType) -> String {
    match wood_shape(&block.material) {
        Some(shape) => format!("{}_{}", wood_species(block.data), shape),
        None => block.material.clone(),
    }
}
