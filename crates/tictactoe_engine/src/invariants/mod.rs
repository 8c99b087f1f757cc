//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every state
//! transition. [`GameHistory`](crate::GameHistory) checks the full set in
//! debug builds after each recorded move; each one is also testable on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($name::holds(state), $name::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod no_move_after_win;
pub mod root_is_empty;
pub mod single_mark;
pub mod step_in_range;

pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use root_is_empty::RootIsEmptyInvariant;
pub use single_mark::SingleMarkInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    RootIsEmptyInvariant,
    SingleMarkInvariant,
    StepInRangeInvariant,
    NoMoveAfterWinInvariant,
);
