//! Types for the namespaces that recognised elements belong to
use std::fmt::Display;

macro_rules! define_namespace {
    ($($namespace:ident {
        name: $name:literal,
        uri: $uri:literal,
    },)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        /// The namespace a recognised element belongs to
        pub enum Namespace {
            $(
                #[doc=concat!("The namespace for `", $name, "`, i.e. `", $uri, "`")]
                $namespace,
            )+
        }

        impl Namespace {
            /// Every known namespace
            pub const ALL: &'static [Self] = &[$(Self::$namespace,)+];

            /// Returns the associated namespace based on the uri
            pub fn from_uri(uri: &str) -> Option<Self> {
                match uri {
                    $($uri => Some(Self::$namespace),)+
                    _ => None,
                }
            }

            /// Returns the uri of this namespace
            pub const fn uri(self) -> &'static str {
                match self {
                    $(Self::$namespace => $uri,)+
                }
            }

            /// Returns the conventional prefix of this namespace, e.g. `html` of `html:div`
            pub const fn prefix(self) -> &'static str {
                match self {
                    $(Self::$namespace => $name,)+
                }
            }
        }
    };
}

define_namespace! {
    Html {
        name: "html",
        uri: "http://www.w3.org/1999/xhtml",
    },
    MathMl {
        name: "mathml",
        uri: "http://www.w3.org/1998/Math/MathML",
    },
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod test {
    use super::Namespace;

    #[test]
    fn from_uri() {
        assert_eq!(
            Namespace::from_uri("http://www.w3.org/1999/xhtml"),
            Some(Namespace::Html)
        );
        assert_eq!(
            Namespace::from_uri("http://www.w3.org/1998/Math/MathML"),
            Some(Namespace::MathMl)
        );
        assert_eq!(Namespace::from_uri("http://www.w3.org/2000/svg"), None);
        assert_eq!(Namespace::from_uri(""), None);
    }

    #[test]
    fn uri_round_trip() {
        for namespace in Namespace::ALL {
            assert_eq!(Namespace::from_uri(namespace.uri()), Some(*namespace));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Namespace::Html.to_string(), "html");
        assert_eq!(Namespace::MathMl.to_string(), "mathml");
    }
}
