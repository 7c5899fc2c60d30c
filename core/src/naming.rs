/// Anything with a full, human-readable name.
pub trait FullyNamed {
    fn full_name(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub full_name: String,
}

impl FullyNamed for Person {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarShip {
    pub prefix: Option<String>,
    pub name: String,
}

impl StarShip {
    pub fn new(name: impl Into<String>, prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            name: name.into(),
        }
    }
}

impl FullyNamed for StarShip {
    fn full_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix} {}", self.name),
            None => self.name.clone(),
        }
    }
}
