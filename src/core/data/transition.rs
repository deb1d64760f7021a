/// Outcome of a navigation state transition.
///
/// `Rejected` is a routine boundary hit (e.g. zooming past the limit), not an
/// error: the state is left exactly as it was.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Rejected,
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}
