//! Macros for code generation in EDM class types.
//!
//! Every EDM class is a thin newtype over [`Entity`](crate::entity::Entity).
//! The macro here generates the newtype, its [`EdmClass`](crate::entity::EdmClass)
//! impl, and one accessor per schema field.

/// Macro to generate a typed EDM class over a generic entity.
///
/// Each field line names the accessor, its arity (`one` for single-valued
/// fields, `many` for lists) and the schema field name:
///
/// - `one` generates `fn <method>(&self) -> Option<&Value>`
/// - `many` generates `fn <method>(&self) -> &[Value]`
///
/// # Example
///
/// ```ignore
/// edm_class! {
///     /// A `cc:License`.
///     License => License {
///         odrl_inherit_from: one "odrl_inheritFrom",
///         cc_deprecated_on: one "cc_deprecatedOn",
///     }
/// }
/// ```
#[macro_export]
macro_rules! edm_class {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident {
            $( $method:ident : $arity:ident $field:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name($crate::entity::Entity);

        impl $crate::entity::EdmClass for $name {
            const KIND: $crate::schema::EntityKind = $crate::schema::EntityKind::$kind;

            fn entity(&self) -> &$crate::entity::Entity {
                &self.0
            }

            fn into_entity(self) -> $crate::entity::Entity {
                self.0
            }

            fn try_from_entity(entity: $crate::entity::Entity) -> $crate::error::Result<Self> {
                if entity.kind() == Self::KIND {
                    Ok(Self(entity))
                } else {
                    Err($crate::error::EdmError::Mapping(format!(
                        "expected an entity of class {}, got {}",
                        Self::KIND,
                        entity.kind()
                    )))
                }
            }
        }

        impl $name {
            /// Starts building an instance with the given identifier.
            #[must_use]
            pub fn builder(
                id: $crate::value::Reference,
            ) -> $crate::entity::ClassBuilder<Self> {
                $crate::entity::ClassBuilder::new(id)
            }

            /// The identifier of this instance.
            #[must_use]
            pub fn id(&self) -> &$crate::value::Reference {
                self.0.id()
            }

            $( $crate::edm_class!(@accessor $arity $method $field); )*
        }

        impl AsRef<$crate::entity::Entity> for $name {
            fn as_ref(&self) -> &$crate::entity::Entity {
                &self.0
            }
        }
    };
    (@accessor one $method:ident $field:literal) => {
        #[doc = concat!("The `", $field, "` value, if present.")]
        #[must_use]
        pub fn $method(&self) -> Option<&$crate::value::Value> {
            self.0.first($field)
        }
    };
    (@accessor many $method:ident $field:literal) => {
        #[doc = concat!("All `", $field, "` values.")]
        #[must_use]
        pub fn $method(&self) -> &[$crate::value::Value] {
            self.0.values($field)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::entity::EdmClass;
    use crate::value::{Literal, Reference};

    edm_class! {
        /// A trimmed-down license with one accessor of each arity.
        TestLicense => License {
            inherit_from: one "odrl_inheritFrom",
            deprecated_on: many "cc_deprecatedOn",
        }
    }

    #[test]
    fn test_edm_class_macro() {
        let license = TestLicense::builder(Reference::new("http://example.org/license").unwrap())
            .add(
                "odrl_inheritFrom",
                Reference::new("http://creativecommons.org/licenses/by/4.0/").unwrap(),
            )
            .add("cc_deprecatedOn", Literal::new("2030-01-01"))
            .build()
            .unwrap();

        assert_eq!(license.id().as_str(), "http://example.org/license");
        assert_eq!(
            license.inherit_from().map(crate::Value::text),
            Some("http://creativecommons.org/licenses/by/4.0/")
        );
        assert_eq!(license.deprecated_on().len(), 1);
        assert_eq!(TestLicense::KIND, crate::EntityKind::License);
    }
}
