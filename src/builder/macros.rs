//! Macros for declaring state enums.

/// Generate a `State` trait implementation for a plain enum.
///
/// Extra derives and attributes on the enum and its variants are passed
/// through, so `#[derive(Copy, Default)]` with a `#[default]` variant works.
///
/// # Example
///
/// ```
/// use kiosk::core::State;
/// use kiosk::state_enum;
///
/// state_enum! {
///     #[derive(Copy)]
///     pub enum CoinValidator {
///         Ready,
///         Counting,
///         Jammed,
///     }
/// }
///
/// assert_eq!(CoinValidator::Counting.name(), "Counting");
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

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Door {
            Open,
            Closed,
            Jammed,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Door::Open.name(), "Open");
        assert_eq!(Door::Closed.name(), "Closed");
        assert_eq!(Door::Jammed.name(), "Jammed");
    }

    #[test]
    fn state_enum_passes_derives_through() {
        state_enum! {
            #[derive(Copy, Default)]
            pub enum Lamp {
                #[default]
                Off,
                On,
            }
        }

        let lamp = Lamp::default();
        let copy = lamp;
        assert_eq!(lamp, copy);
        assert_eq!(lamp, Lamp::Off);
        assert_eq!(Lamp::On.name(), "On");
    }

    #[test]
    fn generated_enum_serializes_by_variant_name() {
        let json = serde_json::to_string(&Door::Jammed).unwrap();
        assert_eq!(json, "\"Jammed\"");
        assert_eq!(serde_json::from_str::<Door>(&json).unwrap(), Door::Jammed);
    }
}
