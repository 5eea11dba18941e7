// Declares a field-less tag enum together with its rendered names. Variants
// keep declaration order as their discriminant.
macro_rules! named_tag {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Deserialize, serde::Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = unicase::UniCase::new(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|tag| unicase::UniCase::new(tag.name()) == key)
                    .ok_or_else(|| $crate::Error::UnknownTag {
                        kind: stringify!($name),
                        name: s.to_owned(),
                    })
            }
        }
    };
}
