//! Static metadata a host needs to list the layout and its properties.

/// Display information about the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Host-defined quality ranking; `-1` means unranked.
    pub quality_rank: i32,
    /// Host-defined speed ranking; `-1` means unranked.
    pub speed_rank: i32,
}

pub const LAYOUT_INFO: LayoutInfo = LayoutInfo {
    name: "Satellite Layout",
    description: "Pick one central node in the graph and lay out all its successors \
                  (directed graph) or neighbours (undirected graph) around it.",
    quality_rank: -1,
    speed_rank: -1,
};

/// A configurable property as shown on a host property sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Field name in `LayoutConfig`.
    pub key: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

const CATEGORY: &str = "Satellite Layout";

pub const PROPERTIES: [PropertyDescriptor; 4] = [
    PropertyDescriptor {
        key: "direction",
        display_name: "Satellites type",
        category: CATEGORY,
        description: "Choose to show successors or predecessors of the Earth",
    },
    PropertyDescriptor {
        key: "area_size",
        display_name: "Area size",
        category: CATEGORY,
        description: "The area size",
    },
    PropertyDescriptor {
        key: "threshold",
        display_name: "Threshold",
        category: CATEGORY,
        description: "Edges with weight less than Threshold will be amplified",
    },
    PropertyDescriptor {
        key: "earth",
        display_name: "Earth",
        category: CATEGORY,
        description: "The node surrounded by satellites",
    },
];
