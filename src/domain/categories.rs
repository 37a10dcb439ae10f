// src/domain/categories.rs

/// A display category. `icon` names the icon the front end draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// The catalog shown in the category bar, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        label: "Beach",
        icon: "beach",
        description: "This property is close to the beach!",
    },
    Category {
        label: "Windmills",
        icon: "windmill",
        description: "This property has windmills!",
    },
    Category {
        label: "Modern",
        icon: "modern",
        description: "This property is modern!",
    },
    Category {
        label: "Countryside",
        icon: "mountain",
        description: "This property is in the countryside!",
    },
    Category {
        label: "Pools",
        icon: "pool",
        description: "This property has a pool!",
    },
    Category {
        label: "Islands",
        icon: "island",
        description: "This property is on an island!",
    },
    Category {
        label: "Lake",
        icon: "boat",
        description: "This property is close to a lake!",
    },
    Category {
        label: "Skiing",
        icon: "skiing",
        description: "This property has skiing activities!",
    },
    Category {
        label: "Castles",
        icon: "castle",
        description: "This property is in a castle!",
    },
    Category {
        label: "Caves",
        icon: "cave",
        description: "This property is in a spooky cave!",
    },
    Category {
        label: "Camping",
        icon: "camping",
        description: "This property offers camping activities!",
    },
    Category {
        label: "Arctic",
        icon: "snowflake",
        description: "This property is in arctic environment!",
    },
    Category {
        label: "Desert",
        icon: "cactus",
        description: "This property is in the desert!",
    },
    Category {
        label: "Barns",
        icon: "barn",
        description: "This property is in a barn!",
    },
    Category {
        label: "Lux",
        icon: "diamond",
        description: "This property is brand new and luxurious!",
    },
];

/// First entry whose label matches exactly.
pub fn find_category<'a>(label: &str, catalog: &'a [Category]) -> Option<&'a Category> {
    catalog.iter().find(|c| c.label == label)
}
