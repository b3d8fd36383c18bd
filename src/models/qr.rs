use super::ModuleGrid;
use crate::error::{Error, Result};

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    /// Low (~7% recovery capacity)
    Low = 0,
    /// Medium (~15% recovery capacity)
    Medium = 1,
    /// Quartile (~25% recovery capacity)
    Quartile = 2,
    /// High (~30% recovery capacity)
    High = 3,
}

impl EcLevel {
    /// All levels in table order
    pub const ALL: [EcLevel; 4] = [
        EcLevel::Low,
        EcLevel::Medium,
        EcLevel::Quartile,
        EcLevel::High,
    ];

    /// Parse a level from its name, case-insensitively
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "low" => Ok(EcLevel::Low),
            "medium" => Ok(EcLevel::Medium),
            "quartile" => Ok(EcLevel::Quartile),
            "high" => Ok(EcLevel::High),
            _ => Err(Error::InvalidConfiguration("unknown ECC level name")),
        }
    }

    /// Table index (0=Low, 1=Medium, 2=Quartile, 3=High)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The 2-bit value carried in the format information (not the table
    /// index: Low=1, Medium=0, Quartile=3, High=2)
    pub fn format_bits(self) -> u8 {
        match self {
            EcLevel::Low => 1,
            EcLevel::Medium => 0,
            EcLevel::Quartile => 3,
            EcLevel::High => 2,
        }
    }
}

impl std::str::FromStr for EcLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EcLevel::from_name(s)
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from its index
    pub fn from_index(index: u8) -> Option<Self> {
        match index & 0x07 {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// Index of the pattern (0-7)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Check if the data module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// A generated QR symbol
///
/// Immutable once built: the encoder pipeline is the only place that
/// assembles one, and nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct QrCode {
    version: u8,
    ec_level: EcLevel,
    mask: MaskPattern,
    modules: ModuleGrid,
    function: ModuleGrid,
}

impl QrCode {
    /// Assemble a symbol from the encoder's final state
    pub(crate) fn from_parts(
        version: u8,
        ec_level: EcLevel,
        mask: MaskPattern,
        modules: ModuleGrid,
        function: ModuleGrid,
    ) -> Self {
        Self {
            version,
            ec_level,
            mask,
            modules,
            function,
        }
    }

    /// QR version (1-40)
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Error correction level the symbol was encoded at
    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    /// Mask pattern selected by penalty scoring
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Side length in modules (version*4 + 17)
    pub fn size(&self) -> usize {
        self.version as usize * 4 + 17
    }

    /// Module color at (x, y); true = dark
    pub fn module(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Whether (x, y) belongs to a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// The bare module grid, without quiet zone
    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    /// The module grid padded with a light quiet zone of `border` modules.
    /// A negative border is rejected.
    pub fn to_matrix(&self, border: i32) -> Result<ModuleGrid> {
        if border < 0 {
            return Err(Error::InvalidConfiguration("border must not be negative"));
        }
        Ok(self.modules.with_border(border as usize))
    }
}
