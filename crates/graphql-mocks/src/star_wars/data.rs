use schema::{ResolvedValue, ResolverError, SourceObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Episode {
    #[serde(rename = "NEWHOPE")]
    NewHope,
    #[serde(rename = "EMPIRE")]
    Empire,
    #[serde(rename = "JEDI")]
    Jedi,
}

const ALL_EPISODES: [Episode; 3] = [Episode::NewHope, Episode::Empire, Episode::Jedi];

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Human {
    pub id: String,
    pub name: String,
    pub appears_in: Vec<Episode>,
    #[serde(skip)]
    pub friends: Vec<String>,
    #[serde(skip)]
    pub home_planet: String,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Droid {
    pub id: String,
    pub name: String,
    pub appears_in: Vec<Episode>,
    pub primary_function: String,
    #[serde(skip)]
    pub friends: Vec<String>,
}

/// Either a human or a droid.
#[derive(Debug, Clone, Copy)]
pub enum Character<'a> {
    Human(&'a Human),
    Droid(&'a Droid),
}

impl<'a> Character<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Character::Human(human) => &human.id,
            Character::Droid(droid) => &droid.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Character::Human(human) => &human.name,
            Character::Droid(droid) => &droid.name,
        }
    }

    pub fn friends(&self) -> &'a [String] {
        match *self {
            Character::Human(human) => &human.friends,
            Character::Droid(droid) => &droid.friends,
        }
    }

    pub fn to_value(self) -> Result<ResolvedValue, ResolverError> {
        match self {
            Character::Human(human) => human.to_value(),
            Character::Droid(droid) => droid.to_value(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SearchResult<'a> {
    Planet(&'a Planet),
    Human(&'a Human),
    Droid(&'a Droid),
}

impl SearchResult<'_> {
    pub fn to_value(self) -> Result<ResolvedValue, ResolverError> {
        match self {
            SearchResult::Planet(planet) => planet.to_value(),
            SearchResult::Human(human) => human.to_value(),
            SearchResult::Droid(droid) => droid.to_value(),
        }
    }
}

impl Planet {
    pub fn to_value(&self) -> Result<ResolvedValue, ResolverError> {
        SourceObject::from_serializable("Planet", self).map(Into::into)
    }
}

impl Human {
    pub fn to_value(&self) -> Result<ResolvedValue, ResolverError> {
        SourceObject::from_serializable("Human", self).map(Into::into)
    }
}

impl Droid {
    pub fn to_value(&self) -> Result<ResolvedValue, ResolverError> {
        SourceObject::from_serializable("Droid", self).map(Into::into)
    }
}

/// The data behind the Star Wars schema, also used as its context. Every collection is ordered
/// by id.
#[derive(Debug, Clone)]
pub struct StarWarsStore {
    planets: Vec<Planet>,
    humans: Vec<Human>,
    droids: Vec<Droid>,
}

impl Default for StarWarsStore {
    fn default() -> Self {
        let planet = |id: &str, name: &str, diameter, rotation_period, orbital_period| Planet {
            id: id.into(),
            name: name.into(),
            diameter,
            rotation_period,
            orbital_period,
        };
        let human = |id: &str, name: &str, friends: &[&str], appears_in: &[Episode], home_planet: &str| Human {
            id: id.into(),
            name: name.into(),
            appears_in: appears_in.to_vec(),
            friends: friends.iter().map(|id| id.to_string()).collect(),
            home_planet: home_planet.into(),
        };
        let droid = |id: &str, name: &str, friends: &[&str], primary_function: &str| Droid {
            id: id.into(),
            name: name.into(),
            appears_in: ALL_EPISODES.to_vec(),
            primary_function: primary_function.into(),
            friends: friends.iter().map(|id| id.to_string()).collect(),
        };

        StarWarsStore {
            planets: vec![
                planet("10001", "Tatooine", 10465, 23, 304),
                planet("10002", "Alderaan", 12500, 24, 364),
            ],
            humans: vec![
                human("1000", "Luke Skywalker", &["1002", "1003", "2000", "2001"], &ALL_EPISODES, "10001"),
                human("1001", "Darth Vader", &["1004"], &ALL_EPISODES, "10001"),
                human("1002", "Han Solo", &["1000", "1003", "2001"], &ALL_EPISODES, "10002"),
                human("1003", "Leia Organa", &["1000", "1002", "2000", "2001"], &ALL_EPISODES, "10002"),
                human("1004", "Wilhuff Tarkin", &["1001"], &[Episode::NewHope], "10002"),
            ],
            droids: vec![
                droid("2000", "C-3PO", &["1000", "1002", "1003", "2001"], "Protocol"),
                droid("2001", "R2-D2", &["1000", "1002", "1003"], "Astromech"),
            ],
        }
    }
}

impl StarWarsStore {
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn humans(&self) -> &[Human] {
        &self.humans
    }

    pub fn droids(&self) -> &[Droid] {
        &self.droids
    }

    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.id == id)
    }

    pub fn human(&self, id: &str) -> Option<&Human> {
        self.humans.iter().find(|human| human.id == id)
    }

    pub fn droid(&self, id: &str) -> Option<&Droid> {
        self.droids.iter().find(|droid| droid.id == id)
    }

    pub fn character(&self, id: &str) -> Option<Character<'_>> {
        self.human(id)
            .map(Character::Human)
            .or_else(|| self.droid(id).map(Character::Droid))
    }

    /// Luke is the hero of The Empire Strikes Back, R2-D2 of every other episode.
    pub fn hero(&self, episode: Option<Episode>) -> Option<Character<'_>> {
        match episode {
            Some(Episode::Empire) => self.character("1000"),
            _ => self.character("2001"),
        }
    }

    /// Friends of a character, in the order they were declared. Unknown ids are skipped.
    pub fn friends(&self, id: &str) -> Vec<Character<'_>> {
        self.character(id)
            .map(|character| {
                character
                    .friends()
                    .iter()
                    .filter_map(|friend| self.character(friend))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn residents(&self, planet_id: &str) -> Vec<&Human> {
        self.humans
            .iter()
            .filter(|human| human.home_planet == planet_id)
            .collect()
    }

    /// Planets, then humans, then droids whose name contains the query, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        let query = query.to_lowercase();
        let is_match = |name: &str| name.to_lowercase().contains(&query);

        let planets = self
            .planets
            .iter()
            .filter(|planet| is_match(&planet.name))
            .map(SearchResult::Planet);
        let humans = self
            .humans
            .iter()
            .filter(|human| is_match(&human.name))
            .map(SearchResult::Human);
        let droids = self
            .droids
            .iter()
            .filter(|droid| is_match(&droid.name))
            .map(SearchResult::Droid);

        planets.chain(humans).chain(droids).collect()
    }
}
