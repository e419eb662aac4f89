//! Macros for declaring state enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Each variant's name doubles as its label.
///
/// # Example
///
/// ```
/// use patterncraft::core::State;
/// use patterncraft::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::Green.name(), "Green");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
