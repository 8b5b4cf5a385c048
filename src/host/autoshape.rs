//! Autoshape types by their ribbon argument names

macro_rules! auto_shape_types {
    (@name $variant:ident $name:literal) => { $name };
    (@name $variant:ident) => { stringify!($variant) };
    ($($variant:ident $(=> $name:literal)?),* $(,)?) => {
        /// Preset geometry of an autoshape
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AutoShapeType {
            $($variant,)*
        }

        impl AutoShapeType {
            pub const ALL: &'static [AutoShapeType] = &[$(AutoShapeType::$variant,)*];

            /// Name used in command arguments and settings
            pub fn name(self) -> &'static str {
                match self {
                    $(AutoShapeType::$variant => auto_shape_types!(@name $variant $($name)?),)*
                }
            }

            pub fn from_name(name: &str) -> Option<AutoShapeType> {
                Self::ALL.iter().copied().find(|t| t.name() == name)
            }
        }
    };
}

// Names that start with a digit get a `StarN` variant and keep their spelling
auto_shape_types! {
    Rectangle,
    Parallelogram,
    Trapezoid,
    Diamond,
    RoundedRectangle,
    Octagon,
    IsoscelesTriangle,
    RightTriangle,
    Oval,
    Hexagon,
    Cross,
    RegularPentagon,
    Can,
    Cube,
    Bevel,
    FoldedCorner,
    SmileyFace,
    Donut,
    NoSymbol,
    BlockArc,
    Heart,
    LightningBolt,
    Sun,
    Moon,
    Arc,
    DoubleBracket,
    DoubleBrace,
    Plaque,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    RightArrow,
    LeftArrow,
    UpArrow,
    DownArrow,
    LeftRightArrow,
    UpDownArrow,
    QuadArrow,
    LeftRightUpArrow,
    BentArrow,
    UTurnArrow,
    LeftUpArrow,
    BentUpArrow,
    CurvedRightArrow,
    CurvedLeftArrow,
    CurvedUpArrow,
    CurvedDownArrow,
    StripedRightArrow,
    NotchedRightArrow,
    Pentagon,
    Chevron,
    RightArrowCallout,
    LeftArrowCallout,
    UpArrowCallout,
    DownArrowCallout,
    LeftRightArrowCallout,
    UpDownArrowCallout,
    QuadArrowCallout,
    CircularArrow,
    FlowchartProcess,
    FlowchartAlternateProcess,
    FlowchartDecision,
    FlowchartData,
    FlowchartPredefinedProcess,
    FlowchartInternalStorage,
    FlowchartDocument,
    FlowchartMultidocument,
    FlowchartTerminator,
    FlowchartPreparation,
    FlowchartManualInput,
    FlowchartManualOperation,
    FlowchartConnector,
    FlowchartOffpageConnector,
    FlowchartCard,
    FlowchartPunchedTape,
    FlowchartSummingJunction,
    FlowchartOr,
    FlowchartCollate,
    FlowchartSort,
    FlowchartExtract,
    FlowchartMerge,
    FlowchartStoredData,
    FlowchartDelay,
    FlowchartSequentialAccessStorage,
    FlowchartMagneticDisk,
    FlowchartDirectAccessStorage,
    FlowchartDisplay,
    Explosion1,
    Explosion2,
    Star4 => "4pointStar",
    Star5 => "5pointStar",
    Star8 => "8pointStar",
    Star16 => "16pointStar",
    Star24 => "24pointStar",
    Star32 => "32pointStar",
    UpRibbon,
    DownRibbon,
    CurvedUpRibbon,
    CurvedDownRibbon,
    VerticalScroll,
    HorizontalScroll,
    Wave,
    DoubleWave,
    RectangularCallout,
    RoundedRectangularCallout,
    OvalCallout,
    CloudCallout,
    LineCallout1,
    LineCallout2,
    LineCallout3,
    LineCallout4,
    LineCallout1AccentBar,
    LineCallout2AccentBar,
    LineCallout3AccentBar,
    LineCallout4AccentBar,
    LineCallout1NoBorder,
    LineCallout2NoBorder,
    LineCallout3NoBorder,
    LineCallout4NoBorder,
    LineCallout1BorderandAccentBar,
    LineCallout2BorderandAccentBar,
    LineCallout3BorderandAccentBar,
    LineCallout4BorderandAccentBar,
    ActionButtonCustom,
    ActionButtonHome,
    ActionButtonHelp,
    ActionButtonInformation,
    ActionButtonBackorPrevious,
    ActionButtonForwardorNext,
    ActionButtonBeginning,
    ActionButtonEnd,
    ActionButtonReturn,
    ActionButtonDocument,
    ActionButtonSound,
    ActionButtonMovie,
    Balloon,
    NotPrimitive,
    FlowchartOfflineStorage,
    LeftRightRibbon,
    DiagonalStripe,
    Pie,
    NonIsoscelesTrapezoid,
    Decagon,
    Heptagon,
    Dodecagon,
    Star6 => "6pointStar",
    Star7 => "7pointStar",
    Star10 => "10pointStar",
    Star12 => "12pointStar",
    Round1Rectangle,
    Round2SameRectangle,
    Round2DiagRectangle,
    SnipRoundRectangle,
    Snip1Rectangle,
    Snip2SameRectangle,
    Snip2DiagRectangle,
    Frame,
    HalfFrame,
    Tear,
    Chord,
    Corner,
    MathPlus,
    MathMinus,
    MathMultiply,
    MathDivide,
    MathEqual,
    MathNotEqual,
    CornerTabs,
    SquareTabs,
    PlaqueTabs,
    Gear6,
    Gear9,
    Funnel,
    PieWedge,
    LeftCircularArrow,
    LeftRightCircularArrow,
    SwooshArrow,
    Cloud,
    ChartX,
    ChartStar,
    ChartPlus,
    LineInverse,
}

/// Built-in ribbon images standing in for types without an icon of their own
const BUILTIN_IMAGES: &[(AutoShapeType, &str)] = &[
    (AutoShapeType::Rectangle, "ShapeRectangle"),
    (AutoShapeType::RoundedRectangle, "ShapeRoundedRectangle"),
    (AutoShapeType::IsoscelesTriangle, "ShapeIsoscelesTriangle"),
    (AutoShapeType::Oval, "ShapeOval"),
    (AutoShapeType::SmileyFace, "ShapeSmileyFace"),
    (AutoShapeType::Donut, "ShapeDonut"),
    (AutoShapeType::Heart, "ShapeHeart"),
    (AutoShapeType::RightArrow, "ShapeRightArrow"),
    (AutoShapeType::LeftArrow, "ShapeLeftArrow"),
    (AutoShapeType::UpArrow, "ShapeUpArrow"),
    (AutoShapeType::DownArrow, "ShapeDownArrow"),
    (AutoShapeType::RoundedRectangularCallout, "ShapeRoundedRectangularCallout"),
    (AutoShapeType::Star5, "ShapeStar"),
    (AutoShapeType::Star8, "ShapeSeal8"),
    (AutoShapeType::Star16, "ShapeSeal16"),
    (AutoShapeType::Star24, "ShapeSeal24"),
];

impl AutoShapeType {
    /// Built-in ribbon image for this type, if the host has one
    pub fn builtin_image(self) -> Option<&'static str> {
        BUILTIN_IMAGES.iter().find(|(t, _)| *t == self).map(|(_, image)| *image)
    }
}

impl std::fmt::Display for AutoShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &t in AutoShapeType::ALL {
            assert_eq!(AutoShapeType::from_name(t.name()), Some(t));
        }
        assert_eq!(AutoShapeType::ALL.len(), 183);
    }

    #[test]
    fn digit_names_keep_their_spelling() {
        assert_eq!(AutoShapeType::Star4.name(), "4pointStar");
        assert_eq!(AutoShapeType::from_name("32pointStar"), Some(AutoShapeType::Star32));
        assert_eq!(AutoShapeType::from_name("Mixed"), None);
    }

    #[test]
    fn builtin_images() {
        assert_eq!(AutoShapeType::Star8.builtin_image(), Some("ShapeSeal8"));
        assert_eq!(AutoShapeType::Cloud.builtin_image(), None);
    }
}
