use bitflags::bitflags;

/// A semantic event produced by one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Pressed,
    Released,
    Single,
    Double,
    Triple,
    Long,
}

impl GestureKind {
    pub const ALL: [GestureKind; 6] = [
        GestureKind::Pressed,
        GestureKind::Released,
        GestureKind::Single,
        GestureKind::Double,
        GestureKind::Triple,
        GestureKind::Long,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            GestureKind::Pressed => 0,
            GestureKind::Released => 1,
            GestureKind::Single => 2,
            GestureKind::Double => 3,
            GestureKind::Triple => 4,
            GestureKind::Long => 5,
        }
    }

    pub const fn is_click(self) -> bool {
        matches!(
            self,
            GestureKind::Single | GestureKind::Double | GestureKind::Triple | GestureKind::Long
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            GestureKind::Pressed => "pressed",
            GestureKind::Released => "released",
            GestureKind::Single => "single",
            GestureKind::Double => "double",
            GestureKind::Triple => "triple",
            GestureKind::Long => "long",
        }
    }
}

bitflags! {
    /// Set of [`GestureKind`]s, used both to select what to wait for and to
    /// report what fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GestureSet: u8 {
        const PRESSED  = 0b00_0001;
        const RELEASED = 0b00_0010;
        const SINGLE   = 0b00_0100;
        const DOUBLE   = 0b00_1000;
        const TRIPLE   = 0b01_0000;
        const LONG     = 0b10_0000;
        /// Any of single, double, triple or long click.
        const ANY_CLICK = Self::SINGLE.bits()
            | Self::DOUBLE.bits()
            | Self::TRIPLE.bits()
            | Self::LONG.bits();
        const ALL_EVENTS = Self::PRESSED.bits() | Self::RELEASED.bits() | Self::ANY_CLICK.bits();
    }
}

impl GestureSet {
    pub fn contains_kind(self, kind: GestureKind) -> bool {
        self.contains(GestureSet::from(kind))
    }

    /// Members in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = GestureKind> {
        GestureKind::ALL
            .into_iter()
            .filter(move |kind| self.contains_kind(*kind))
    }

    pub fn first(self) -> Option<GestureKind> {
        self.kinds().next()
    }

    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl From<GestureKind> for GestureSet {
    fn from(kind: GestureKind) -> Self {
        match kind {
            GestureKind::Pressed => GestureSet::PRESSED,
            GestureKind::Released => GestureSet::RELEASED,
            GestureKind::Single => GestureSet::SINGLE,
            GestureKind::Double => GestureSet::DOUBLE,
            GestureKind::Triple => GestureSet::TRIPLE,
            GestureKind::Long => GestureSet::LONG,
        }
    }
}

impl FromIterator<GestureKind> for GestureSet {
    fn from_iter<I: IntoIterator<Item = GestureKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(GestureSet::empty(), |set, kind| set | GestureSet::from(kind))
    }
}

impl<const N: usize> From<[GestureKind; N]> for GestureSet {
    fn from(kinds: [GestureKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}
