use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Room {
    Kitchen,
    Living,
    Dining,
    Bedroom,
    Lighting,
    Bath,
    Outdoor,
}

impl Room {
    pub const ALL: [Room; 7] = [
        Room::Kitchen,
        Room::Living,
        Room::Dining,
        Room::Bedroom,
        Room::Lighting,
        Room::Bath,
        Room::Outdoor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Room::Kitchen => "Kitchen",
            Room::Living => "Living",
            Room::Dining => "Dining",
            Room::Bedroom => "Bedroom",
            Room::Lighting => "Lighting",
            Room::Bath => "Bath",
            Room::Outdoor => "Outdoor",
        }
    }

    /// Matches the labels used in the Airtable `Room` column. Anything else
    /// is treated as an unknown room.
    pub fn parse(raw: &str) -> Option<Room> {
        let raw = raw.trim();
        Room::ALL
            .into_iter()
            .find(|room| room.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KitchenStyle {
    Modern,
    Traditional,
    ArtDeco,
}

impl KitchenStyle {
    pub const ALL: [KitchenStyle; 3] = [
        KitchenStyle::Modern,
        KitchenStyle::Traditional,
        KitchenStyle::ArtDeco,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KitchenStyle::Modern => "Modern",
            KitchenStyle::Traditional => "Traditional",
            KitchenStyle::ArtDeco => "Art Deco",
        }
    }

    pub fn parse(raw: &str) -> Option<KitchenStyle> {
        let raw = raw.trim();
        KitchenStyle::ALL
            .into_iter()
            .find(|style| style.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for KitchenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoomFilter {
    #[default]
    All,
    Only(Room),
}

impl RoomFilter {
    pub fn matches(self, room: Option<Room>) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Only(selected) => room == Some(selected),
        }
    }

    pub fn is_kitchen(self) -> bool {
        self == RoomFilter::Only(Room::Kitchen)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleFilter {
    #[default]
    All,
    Only(KitchenStyle),
}

impl StyleFilter {
    pub fn matches(self, style: Option<KitchenStyle>) -> bool {
        match self {
            StyleFilter::All => true,
            StyleFilter::Only(selected) => style == Some(selected),
        }
    }
}

const STYLE_NAMES: [&str; 40] = [
    "Eclipse", "Nova", "Zenith", "Vertex", "Prism", "Quantum", "Nebula", "Aurora",
    "Apex", "Horizon", "Celestial", "Cosmos", "Stellar", "Galaxy", "Orbit", "Solstice",
    "Equinox", "Spectrum", "Fusion", "Radiance", "Mirage", "Vortex", "Obsidian", "Infinity",
    "Eternity", "Momentum", "Pulse", "Essence", "Serenity", "Ethereal", "Luminous", "Vista",
    "Verve", "Synthesis", "Reverie", "Enigma", "Lumina", "Catalyst", "Reflection", "Empyrean",
];

/// Decorative collection name for a record. Keyed on the record id (FNV-1a)
/// so a card keeps its name whichever filter is active.
pub fn style_name_for(id: &str) -> &'static str {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    STYLE_NAMES[(hash % STYLE_NAMES.len() as u64) as usize]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub room: Option<Room>,
    /// Only ever set for kitchens.
    pub style: Option<KitchenStyle>,
    pub image_url: String,
    pub style_name: &'static str,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        room: Option<Room>,
        style: Option<KitchenStyle>,
        image_url: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let style = if room == Some(Room::Kitchen) { style } else { None };
        Self {
            style_name: style_name_for(&id),
            id,
            title: title.into(),
            room,
            style,
            image_url: image_url.into(),
        }
    }

    /// "Kitchen / Modern", "Living", or empty for records without a room.
    pub fn category_label(&self) -> String {
        match (self.room, self.style) {
            (Some(room), Some(style)) => format!("{} / {}", room, style),
            (Some(room), None) => room.to_string(),
            (None, _) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_room_labels_case_insensitively() {
        assert_eq!(Room::parse("Kitchen"), Some(Room::Kitchen));
        assert_eq!(Room::parse(" outdoor "), Some(Room::Outdoor));
        assert_eq!(Room::parse("Office"), None);
        assert_eq!(Room::parse(""), None);
    }

    #[test]
    fn parses_art_deco_with_space() {
        assert_eq!(KitchenStyle::parse("Art Deco"), Some(KitchenStyle::ArtDeco));
        assert_eq!(KitchenStyle::parse("ArtDeco"), None);
    }

    #[test]
    fn style_is_dropped_outside_kitchen() {
        let living = Project::new("rec1", "Sofa", Some(Room::Living), Some(KitchenStyle::Modern), "u");
        assert_eq!(living.style, None);
        assert_eq!(living.category_label(), "Living");

        let kitchen = Project::new("rec2", "Island", Some(Room::Kitchen), Some(KitchenStyle::ArtDeco), "u");
        assert_eq!(kitchen.category_label(), "Kitchen / Art Deco");
    }

    #[test]
    fn style_name_depends_only_on_id() {
        let a = Project::new("recAAA", "One", Some(Room::Bath), None, "u1");
        let b = Project::new("recAAA", "Two", Some(Room::Dining), None, "u2");
        assert_eq!(a.style_name, b.style_name);
        assert!(STYLE_NAMES.contains(&a.style_name));
    }

    #[test]
    fn room_filter_all_accepts_unknown_rooms() {
        assert!(RoomFilter::All.matches(None));
        assert!(!RoomFilter::Only(Room::Bath).matches(None));
        assert!(RoomFilter::Only(Room::Bath).matches(Some(Room::Bath)));
    }
}
