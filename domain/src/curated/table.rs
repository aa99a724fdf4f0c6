//! Static curated data

use crate::core::country::CountryQuery;
use crate::fact::FactRecord;

type Entry = (&'static str, [(&'static str, &'static str); 3]);

const CURATED: &[Entry] = &[
    (
        "japan",
        [
            (
                "Vending Machine Paradise",
                "Japan has roughly one vending machine for every 23 people, selling everything from hot soup to umbrellas.",
            ),
            (
                "Punctual Trains",
                "Shinkansen bullet trains have an average annual delay measured in seconds, and operators apologize for leaving early.",
            ),
            (
                "Island Nation",
                "Japan is made up of more than 14,000 islands, although most people live on the four largest.",
            ),
        ],
    ),
    (
        "france",
        [
            (
                "Most Visited Country",
                "France welcomes more international tourists each year than any other country in the world.",
            ),
            (
                "Cheese Champion",
                "France produces well over 1,000 distinct varieties of cheese.",
            ),
            (
                "Twelve Time Zones",
                "Thanks to its overseas territories, France spans more time zones than any other country.",
            ),
        ],
    ),
    (
        "italy",
        [
            (
                "World Heritage Leader",
                "Italy has more UNESCO World Heritage Sites than almost any other nation.",
            ),
            (
                "Country Within a Country",
                "Italy completely surrounds two independent states: Vatican City and San Marino.",
            ),
            (
                "Europe's Oldest University",
                "The University of Bologna, founded in 1088, is the oldest continuously operating university in the world.",
            ),
        ],
    ),
    (
        "brazil",
        [
            (
                "Amazon Giant",
                "About 60 percent of the Amazon rainforest lies within Brazil's borders.",
            ),
            (
                "Coffee Powerhouse",
                "Brazil has been the world's largest coffee producer for more than 150 years.",
            ),
            (
                "Continental Neighbor",
                "Brazil shares a border with every South American country except Chile and Ecuador.",
            ),
        ],
    ),
    (
        "australia",
        [
            (
                "Unique Wildlife",
                "More than 80 percent of Australia's mammals, reptiles and frogs are found nowhere else on Earth.",
            ),
            (
                "The Dingo Fence",
                "Australia's Dingo Fence stretches over 5,600 kilometers, one of the longest structures ever built.",
            ),
            (
                "Sheep Country",
                "Australia is home to several times more sheep than people.",
            ),
        ],
    ),
    (
        "canada",
        [
            (
                "Land of Lakes",
                "Canada holds more lakes than the rest of the world combined.",
            ),
            (
                "Longest Coastline",
                "Canada has the longest coastline of any country, at over 200,000 kilometers.",
            ),
            (
                "Maple Syrup Reserve",
                "Quebec maintains a strategic reserve of maple syrup to stabilize global supply.",
            ),
        ],
    ),
    (
        "egypt",
        [
            (
                "Ancient Wonder",
                "The Great Pyramid of Giza was the tallest man-made structure on Earth for nearly 4,000 years.",
            ),
            (
                "Life Along the Nile",
                "About 95 percent of Egyptians live within a few kilometers of the Nile River.",
            ),
            (
                "Early Writers",
                "Ancient Egyptians were among the first people to write on papyrus, a paper made from river reeds.",
            ),
        ],
    ),
    (
        "india",
        [
            (
                "Linguistic Diversity",
                "India recognizes 22 scheduled languages, and hundreds more are spoken across the country.",
            ),
            (
                "Chess Origins",
                "The game of chess traces its roots to chaturanga, played in India around the 6th century.",
            ),
            (
                "Monsoon Lifeline",
                "The summer monsoon delivers around three quarters of India's annual rainfall.",
            ),
        ],
    ),
    (
        "norway",
        [
            (
                "Midnight Sun",
                "In northern Norway the sun does not set for weeks around midsummer.",
            ),
            (
                "Fjord Coastline",
                "Norway's coastline, traced along its fjords, is long enough to wrap halfway around the Earth.",
            ),
            (
                "Salmon to Sushi",
                "Norwegian exporters helped popularize salmon sushi in Japan during the 1980s.",
            ),
        ],
    ),
    (
        "mexico",
        [
            (
                "Biggest Pyramid",
                "The Great Pyramid of Cholula in Mexico is the largest pyramid in the world by volume.",
            ),
            (
                "Chocolate Heritage",
                "Chocolate, chilies and corn were all first cultivated in what is now Mexico.",
            ),
            (
                "Largest Spanish-Speaking Nation",
                "Mexico has the largest population of Spanish speakers of any country.",
            ),
        ],
    ),
];

/// Lookup over the static curated data
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedTable;

impl CuratedTable {
    pub fn new() -> Self {
        Self
    }

    /// Facts for `country`, if the table covers it
    pub fn lookup(&self, country: &CountryQuery) -> Option<Vec<FactRecord>> {
        CURATED
            .iter()
            .find(|(key, _)| *key == country.key())
            .map(|(_, facts)| {
                facts
                    .iter()
                    .map(|(title, content)| FactRecord::new(*title, *content))
                    .collect()
            })
    }

    pub fn contains(&self, country: &CountryQuery) -> bool {
        CURATED.iter().any(|(key, _)| *key == country.key())
    }

    /// Lowercase keys of every covered country
    pub fn countries(&self) -> impl Iterator<Item = &'static str> {
        CURATED.iter().map(|(key, _)| *key)
    }
}
