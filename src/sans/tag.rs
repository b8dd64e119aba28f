//! Item categories, tags and size classes.

use core::fmt;

/// Number of payload bytes declared by the two size bits of a prefix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    #[default]
    Zero,
    One,
    Two,
    Four,
}

impl SizeClass {
    /// Recover a size class from the low two bits of a prefix.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Zero,
            0b01 => Self::One,
            0b10 => Self::Two,
            _ => Self::Four,
        }
    }

    /// The two bits encoding this size class.
    pub fn bits(self) -> u8 {
        match self {
            Self::Zero => 0b00,
            Self::One => 0b01,
            Self::Two => 0b10,
            Self::Four => 0b11,
        }
    }

    /// Number of payload bytes following the prefix.
    pub fn bytes(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "Zero bytes",
            Self::One => "One byte",
            Self::Two => "Two bytes",
            Self::Four => "Four bytes",
        }
    }
}

/// The three short item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Main,
    Global,
    Local,
}

impl Category {
    /// Recover a category from bits 2 and 3 of a prefix. The fourth value is
    /// reserved for long items.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Main),
            0b01 => Some(Self::Global),
            0b10 => Some(Self::Local),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            Self::Main => 0b00,
            Self::Global => 0b01,
            Self::Local => 0b10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Global => "Global",
            Self::Local => "Local",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! tag_enum {
    ($(#[$attr:meta])* $name:ident { $($variant:ident = $bits:literal => $doc:literal,)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $name {
            $(#[doc = $doc] $variant = $bits,)*
        }

        impl $name {
            /// Recover a tag from the upper four bits of a prefix, if defined.
            pub fn from_bits(bits: u8) -> Option<Self> {
                match bits {
                    $($bits => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The four bits encoding this tag.
            pub fn bits(self) -> u8 {
                self as u8
            }

            /// Documented name of this tag, as written in the HID specification.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $doc,)*
                }
            }
        }
    };
}

tag_enum!(
    /// Tags of items emitting fields or delimiting collections.
    MainTag {
        Input = 0x8 => "Input",
        Output = 0x9 => "Output",
        Collection = 0xA => "Collection",
        Feature = 0xB => "Feature",
        EndCollection = 0xC => "End Collection",
    }
);

tag_enum!(
    /// Tags of items describing persistent field context.
    GlobalTag {
        UsagePage = 0x0 => "Usage Page",
        LogicalMinimum = 0x1 => "Logical Minimum",
        LogicalMaximum = 0x2 => "Logical Maximum",
        PhysicalMinimum = 0x3 => "Physical Minimum",
        PhysicalMaximum = 0x4 => "Physical Maximum",
        UnitExponent = 0x5 => "Unit Exponent",
        Unit = 0x6 => "Unit",
        ReportSize = 0x7 => "Report Size",
        ReportId = 0x8 => "Report ID",
        ReportCount = 0x9 => "Report Count",
        Push = 0xA => "Push",
        Pop = 0xB => "Pop",
    }
);

tag_enum!(
    /// Tags of items describing context for the next field only.
    LocalTag {
        Usage = 0x0 => "Usage",
        UsageMinimum = 0x1 => "Usage Minimum",
        UsageMaximum = 0x2 => "Usage Maximum",
        DesignatorIndex = 0x3 => "Designator Index",
        DesignatorMinimum = 0x4 => "Designator Minimum",
        DesignatorMaximum = 0x5 => "Designator Maximum",
        StringIndex = 0x7 => "String Index",
        StringMinimum = 0x8 => "String Minimum",
        StringMaximum = 0x9 => "String Maximum",
        Delimiter = 0xA => "Delimiter",
    }
);

/// A defined tag, together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Main(MainTag),
    Global(GlobalTag),
    Local(LocalTag),
}

impl Tag {
    /// Recover a tag from the category and tag bits of a prefix, if the
    /// combination is defined.
    pub fn from_bits(category: u8, tag: u8) -> Option<Self> {
        match Category::from_bits(category)? {
            Category::Main => MainTag::from_bits(tag).map(Self::Main),
            Category::Global => GlobalTag::from_bits(tag).map(Self::Global),
            Category::Local => LocalTag::from_bits(tag).map(Self::Local),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Main(_) => Category::Main,
            Self::Global(_) => Category::Global,
            Self::Local(_) => Category::Local,
        }
    }

    /// The four bits encoding this tag within its category.
    pub fn bits(self) -> u8 {
        match self {
            Self::Main(tag) => tag.bits(),
            Self::Global(tag) => tag.bits(),
            Self::Local(tag) => tag.bits(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Main(tag) => tag.name(),
            Self::Global(tag) => tag.name(),
            Self::Local(tag) => tag.name(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.category(), self.name())
    }
}
