//! Macros for declaring closed identifier enums.

/// Declare an enum together with its [`Tag`](crate::core::Tag) and
/// `Display` implementations.
///
/// Each variant carries its display label. The generated enum also gets an
/// `ALL` constant listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use neural_adapter::tag_enum;
///
/// tag_enum! {
///     pub enum Signal {
///         Idle => "Idle",
///         Firing => "Firing",
///         Silent => "Silent",
///     }
/// }
/// ```
#[macro_export]
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::Tag for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Tag::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Tag;

    tag_enum! {
        enum Sample {
            Alpha => "alpha",
            Beta => "beta",
        }
    }

    #[test]
    fn tag_enum_macro_generates_trait() {
        assert_eq!(Sample::Alpha.name(), "alpha");
        assert_eq!(Sample::Beta.name(), "beta");
        assert_eq!(Sample::ALL, &[Sample::Alpha, Sample::Beta]);
    }

    #[test]
    fn tag_enum_supports_visibility() {
        tag_enum! {
            pub enum PublicTag {
                A => "a",
                B => "b",
            }
        }

        assert_eq!(PublicTag::ALL.len(), 2);
    }

    #[test]
    fn tag_enum_generates_display() {
        tag_enum! {
            enum Minimal {
                One => "one",
                Two => "two",
            }
        }

        assert_eq!(format!("{}", Minimal::One), "one");
        assert_eq!(format!("{}", Minimal::Two), "two");
    }
}
