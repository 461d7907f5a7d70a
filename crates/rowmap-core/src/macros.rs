/// Implements [`Model`](crate::Model) for a struct.
///
/// Each entry maps a logical field name onto a struct field holding a
/// [`Primitive`](crate::model::Primitive). Relation fields hold a
/// [`BelongsTo`](crate::model::BelongsTo) and go in the optional
/// `relations` block.
///
/// ```
/// use rowmap_core::{impl_model, model::BelongsTo};
///
/// #[derive(Debug, Default)]
/// struct Owner {
///     id: i64,
///     name: String,
/// }
///
/// impl_model!(Owner {
///     "Id" => id: i64,
///     "Name" => name: String,
/// });
///
/// #[derive(Debug, Default)]
/// struct Pet {
///     id: i64,
///     nickname: Option<String>,
///     owner: BelongsTo<Owner>,
/// }
///
/// impl_model!(Pet {
///     "Id" => id: i64,
///     "Nickname" => nickname: Option<String>,
/// } relations {
///     "Owner" => owner,
/// });
/// ```
#[macro_export]
macro_rules! impl_model {
    (
        $model:ty {
            $( $name:literal => $field:ident : $fty:ty ),* $(,)?
        }
        $( relations {
            $( $rname:literal => $rfield:ident ),* $(,)?
        } )?
    ) => {
        impl $crate::Model for $model {
            fn fields() -> &'static [$crate::model::Field] {
                const FIELDS: &[$crate::model::Field] = &[
                    $(
                        $crate::model::Field::primitive(
                            $name,
                            <$fty as $crate::model::Primitive>::TYPE,
                            <$fty as $crate::model::Primitive>::NULLABLE,
                        ),
                    )*
                    $($(
                        $crate::model::Field::relation($rname),
                    )*)?
                ];
                FIELDS
            }

            fn get(&self, field: &str) -> ::core::option::Option<$crate::stmt::Value> {
                match field {
                    $(
                        $name => ::core::option::Option::Some(
                            $crate::model::Primitive::to_value(&self.$field),
                        ),
                    )*
                    $($(
                        $rname => ::core::option::Option::Some(self.$rfield.key_value()),
                    )*)?
                    _ => ::core::option::Option::None,
                }
            }

            fn set(&mut self, field: &str, value: $crate::stmt::Value) -> $crate::Result<()> {
                match field {
                    $(
                        $name => {
                            self.$field = <$fty as $crate::model::Primitive>::load(value)?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    $($(
                        $rname => ::core::result::Result::Err($crate::err!(
                            "relation field `{}` on `{}` is not writable",
                            field,
                            <Self as $crate::Model>::type_name(),
                        )),
                    )*)?
                    _ => ::core::result::Result::Err($crate::Error::unresolved_field(
                        "field",
                        field,
                        <Self as $crate::Model>::type_name(),
                    )),
                }
            }
        }
    };
}
