//! Macros for ergonomic symbol declaration.

/// Generate a fieldless symbol enum and its `State`, `Event`, or `Action`
/// implementation.
///
/// The kind after the colon selects the trait. A variant may carry a
/// string label that `name()` returns instead of the variant identifier;
/// serde uses the same label. The macro also generates an `ALL` constant
/// with every variant in declaration order, and a `Display` impl that
/// prints `name()`.
///
/// The expansion goes through `fsm_dispatch`'s own serde re-export, so
/// callers do not need a direct `serde` dependency.
///
/// # Example
///
/// ```
/// use fsm_dispatch::symbol_enum;
/// use fsm_dispatch::core::{Action, State};
///
/// symbol_enum! {
///     pub enum DoorState: State {
///         Open,
///         Closed,
///     }
/// }
///
/// symbol_enum! {
///     pub enum DoorAction: Action {
///         Beep = "beep",
///         Latch = "latch",
///     }
/// }
///
/// assert_eq!(DoorState::ALL, &[DoorState::Open, DoorState::Closed]);
/// assert_eq!(DoorAction::Latch.name(), "latch");
/// assert_eq!(DoorState::Closed.to_string(), "Closed");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::serde::Serialize,
            $crate::serde::Deserialize,
        )]
        #[serde(crate = "fsm_dispatch::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::$kind for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::symbol_enum!(@label $variant $($label)?)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::$kind::name(self))
            }
        }
    };
}
