/// Keys the frontends know how to report. Anything else arrives as `None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    None,
}
