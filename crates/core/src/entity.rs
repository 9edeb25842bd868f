//! Things with identity: a product stays the same product while its stock changes.

use core::fmt::{Debug, Display};
use core::hash::Hash;

pub trait Entity {
    /// Identifier type; `Display` so it can be used as a log field.
    type Id: Copy + Eq + Hash + Debug + Display;

    fn id(&self) -> Self::Id;
}
