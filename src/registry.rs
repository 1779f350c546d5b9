//! # Room Kind Registry
//!
//! Room node categories are a closed set of tagged variants, each with a static
//! capability table. The registry itself is external configuration: the host
//! loads an ordered list of kinds once, before the editor becomes interactive,
//! and the editor looks up the singleton entrance and unassigned kinds from it
//! when seeding new nodes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a room node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// The unique root of the graph. Has no parents and cannot be deleted.
    Entrance,
    /// Placeholder kind for freshly created nodes, before the designer picks
    /// a real room type.
    Unassigned,
    Corridor,
    Room,
}

/// Static capabilities of a room kind.
#[derive(Clone, Copy, Debug)]
pub struct KindCaps {
    pub display_name: &'static str,
    /// The kind is the graph root (entrance).
    pub is_root: bool,
    /// Sentinel kind assigned to newly created nodes.
    pub placeholder: bool,
    /// Whether "Delete Selected" may remove nodes of this kind.
    pub deletable: bool,
    /// Maximum child corridors leading out of a node of this kind.
    ///
    /// Carried for the downstream dungeon builder; the editor itself does not
    /// enforce it when links are created.
    pub max_child_corridors: Option<usize>,
}

const ENTRANCE_CAPS: KindCaps = KindCaps {
    display_name: "Entrance",
    is_root: true,
    placeholder: false,
    deletable: false,
    max_child_corridors: Some(3),
};

const UNASSIGNED_CAPS: KindCaps = KindCaps {
    display_name: "None (Unassigned)",
    is_root: false,
    placeholder: true,
    deletable: true,
    max_child_corridors: Some(3),
};

const CORRIDOR_CAPS: KindCaps = KindCaps {
    display_name: "Corridor",
    is_root: false,
    placeholder: false,
    deletable: true,
    max_child_corridors: None,
};

const ROOM_CAPS: KindCaps = KindCaps {
    display_name: "Room",
    is_root: false,
    placeholder: false,
    deletable: true,
    max_child_corridors: Some(3),
};

impl RoomKind {
    pub fn caps(self) -> &'static KindCaps {
        match self {
            RoomKind::Entrance => &ENTRANCE_CAPS,
            RoomKind::Unassigned => &UNASSIGNED_CAPS,
            RoomKind::Corridor => &CORRIDOR_CAPS,
            RoomKind::Room => &ROOM_CAPS,
        }
    }

    pub fn display_name(self) -> &'static str {
        self.caps().display_name
    }
}

/// Errors from loading or validating a kind registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse room kind registry: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("registry must contain exactly one entrance kind, found {0}")]
    EntranceCount(usize),
    #[error("registry must contain exactly one unassigned kind, found {0}")]
    UnassignedCount(usize),
}

/// The ordered set of room kinds available in this editing session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindRegistry {
    kinds: Vec<RoomKind>,
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self {
            kinds: vec![
                RoomKind::Entrance,
                RoomKind::Unassigned,
                RoomKind::Corridor,
                RoomKind::Room,
            ],
        }
    }
}

impl KindRegistry {
    pub fn new(kinds: Vec<RoomKind>) -> Self {
        Self { kinds }
    }

    /// Parses a registry from a JSON array, e.g. `["entrance", "unassigned", "corridor"]`,
    /// and validates the singleton constraints.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let registry: Self = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Checks that the registry carries exactly one entrance kind and exactly
    /// one unassigned kind. Upstream configuration is expected to guarantee
    /// this; the editor assumes a validated registry.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let entrances = self.kinds.iter().filter(|k| k.caps().is_root).count();
        if entrances != 1 {
            return Err(RegistryError::EntranceCount(entrances));
        }
        let unassigned = self.kinds.iter().filter(|k| k.caps().placeholder).count();
        if unassigned != 1 {
            return Err(RegistryError::UnassignedCount(unassigned));
        }
        Ok(())
    }

    /// Finds the first kind matching a predicate.
    pub fn find(&self, predicate: impl Fn(RoomKind) -> bool) -> Option<RoomKind> {
        self.kinds.iter().copied().find(|&k| predicate(k))
    }

    /// The singleton entrance kind.
    pub fn entrance(&self) -> Option<RoomKind> {
        self.find(|k| k.caps().is_root)
    }

    /// The singleton placeholder kind assigned to newly created nodes.
    pub fn unassigned(&self) -> Option<RoomKind> {
        self.find(|k| k.caps().placeholder)
    }

    pub fn iter(&self) -> impl Iterator<Item = RoomKind> + '_ {
        self.kinds.iter().copied()
    }
}
