//! The standard ActiveRecord generator units.
//!
//! Each unit reads one facet of the [`ModelShape`](crate::ModelShape) and
//! declares the matching methods. Units never look at each other's output;
//! overlaps are settled by the resolver.

mod associations;
mod attributes;
mod enums;
pub mod inflect;
mod querying;
mod scopes;

pub use associations::AssociationUnit;
pub use attributes::AttributeUnit;
pub use enums::EnumUnit;
pub use querying::QueryingUnit;
pub use scopes::NamedScopeUnit;

/// Sorbet's escape hatch for values of unknown type.
pub const UNTYPED: &str = "T.untyped";
/// Sorbet's boolean type.
pub const BOOLEAN: &str = "T::Boolean";

/// Wraps `ty` in `T.nilable`, leaving `T.untyped` alone.
#[must_use]
pub fn nilable(ty: &str) -> String {
    if ty == UNTYPED {
        ty.to_owned()
    } else {
        format!("T.nilable({ty})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nilable_skips_untyped() {
        assert_eq!(nilable("String"), "T.nilable(String)");
        assert_eq!(nilable(UNTYPED), UNTYPED);
    }
}
