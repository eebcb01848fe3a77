use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_CELL_SIZE_PX: u32 = 8;
const MAX_CELL_SIZE_PX: u32 = 64;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub cell_size_px: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_CELL_SIZE_PX..=MAX_CELL_SIZE_PX).contains(&self.cell_size_px) {
            return Err(format!(
                "cell_size_px must be between {} and {}",
                MIN_CELL_SIZE_PX, MAX_CELL_SIZE_PX
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { cell_size_px: 20 }
    }
}
