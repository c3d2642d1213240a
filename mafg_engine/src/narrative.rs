//! Narrative text tables.
//!
//! Pure data: the presentation strings keyed by `Location` and the
//! first-visit flag. The core's only responsibility is picking which key
//! applies; wrapping and styling happen in the view layer.

use crate::world::Location;

/// Region banner printed above a location description.
pub fn heading(location: Location) -> &'static str {
    match location.region() {
        "Grassy Field" => "GRASSY FIELD",
        "Forest" => "FOREST",
        "Mineshaft Entrance" => "MINESHAFT ENTRANCE",
        "Cave" => "CAVE",
        _ => "CABIN",
    }
}

/// Description template for a location, branched on first visit vs repeat.
pub fn description(location: Location, first_visit: bool) -> &'static str {
    match location {
        Location::GrassyField if first_visit => {
            "You awaken in a grassy field surrounded by mountains. You have no idea \
             who you are or how you got here. There looks to be a mineshaft far off \
             into the distance, tunneling into one of the mountains, to the west. \
             There is also a creepy old looking log cabin to the south east and a \
             forest to the north."
        }
        Location::GrassyField => {
            "There looks to be a mineshaft far off into the distance, tunneling into \
             one of the mountains, to the west. There is also a creepy old looking \
             log cabin to the south east and a forest to the north."
        }
        Location::ForestPart1 => "You walk into a forest.",
        Location::MineshaftEntrance => {
            "You stand at the entrance to the mineshaft. All you can see is darkness, \
             and you smell the strong stench of sulfur emanating from the cave."
        }
        Location::CavePart1 => {
            "You are now in the pitch black cave. You are surrounded by darkness, but \
             there is a faint light coming from down the tunnel. The smell of sulfur \
             has gotten stronger although there is now a new stench, it smells of \
             decaying meat. If you decide to go further into the tunnel like cave, \
             go west."
        }
        Location::CavePart2 => {
            "As you continue further into the cave the potent smells continue to get \
             stronger and stronger, however the light at the end of the tunnel \
             proceeds to grow brighter. Eventually you come to a branching split in \
             the cave where there are two tunnels, one to the left and one to the \
             right. Everything around you has become strangely block like, and a \
             block like torch is pinned to the wall between the two branching paths."
        }
        Location::CavePart2L1 => {
            "You travel down the left tunnel, which opens up into a large room filled \
             with mine carts and bright block like torches. You also notice people, \
             but they aren't normal people, NO! They are all blocky, their arms, \
             their legs, even their heads!"
        }
        Location::CavePart2R1 => {
            "The right tunnel narrows and narrows until it dead-ends at a wall of \
             neatly squared stone. Somebody mined this passage out and stopped."
        }
        Location::CabinFront => "You stand at the front entrance of the creepy log cabin.",
        Location::CabinLivingRoom => {
            "In the living room there is a table in the middle and a lit fireplace."
        }
        Location::Cabin1stFloorBathroom => "You enter the bathroom.",
        Location::Cabin1stFloorBedroom => "You enter the downstairs bedroom.",
        Location::Cabin2ndFloorBedroomConnector => {
            "You go upstairs. A short landing ends at a single bedroom door."
        }
        Location::Cabin2ndFloorBedroom => {
            "The upstairs bedroom is sparse: a squared-off bed frame and a window \
             looking out over the grassy field."
        }
    }
}
