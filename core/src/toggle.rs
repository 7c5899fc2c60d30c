pub trait Togglable {
    fn toggle(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnOffSwitch {
    #[default]
    Off,
    On,
}

impl Togglable for OnOffSwitch {
    fn toggle(&mut self) {
        *self = match self {
            OnOffSwitch::Off => OnOffSwitch::On,
            OnOffSwitch::On => OnOffSwitch::Off,
        };
    }
}
