use std::sync::LazyLock;

use astgraft_core::Definition;

use crate::DialectInfo;

macro_rules! define_dialects {
    (
        $(
            $fn_name:ident => {
                $(feature: $feature:literal,)?
                name: $name:literal,
                aliases: [$($alias:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            $(#[cfg(feature = $feature)])?
            pub fn $fn_name() -> &'static Definition {
                static DIALECT: LazyLock<Definition> = LazyLock::new(|| {
                    Definition::from_binary(include_bytes!(concat!(
                        env!("OUT_DIR"),
                        "/",
                        $name,
                        ".bin"
                    )))
                    .expect("embedded dialect should decode")
                });
                &DIALECT
            }
        )*

        /// Look up a dialect by name or alias, case-insensitively.
        pub fn from_name(name: &str) -> Option<&'static Definition> {
            match name.to_ascii_lowercase().as_str() {
                $(
                    $(#[cfg(feature = $feature)])?
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        /// Every dialect compiled into this build.
        pub fn all() -> Vec<DialectInfo> {
            vec![
                $(
                    $(#[cfg(feature = $feature)])?
                    DialectInfo {
                        name: $name,
                        aliases: &[$($alias),*],
                        definition: $fn_name(),
                    },
                )*
            ]
        }
    };
}

define_dialects! {
    core => {
        name: "core",
        aliases: ["core", "es5", "estree"],
    },
    es2017 => {
        feature: "dialect-es2017",
        name: "es2017",
        aliases: ["es2017", "es8"],
    },
    jsx => {
        feature: "dialect-jsx",
        name: "jsx",
        aliases: ["jsx"],
    },
    typescript => {
        feature: "dialect-typescript",
        name: "typescript",
        aliases: ["typescript", "ts"],
    },
}
