use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

/// A namespaced resource name, `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub namespace: String,
    pub path: String,
}

impl Identifier {
    pub fn vanilla(path: &str) -> Self {
        Self {
            namespace: "minecraft".to_string(),
            path: path.to_string(),
        }
    }
}

impl From<&str> for Identifier {
    /// An input without a `:` is read as a path in the `minecraft`
    /// namespace, the way vanilla reads bare resource names.
    fn from(identifier: &str) -> Self {
        match identifier.split_once(':') {
            Some((namespace, path)) => Identifier {
                namespace: namespace.to_string(),
                path: path.to_string(),
            },
            None => Identifier::vanilla(identifier),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdentifierVisitor;

        impl Visitor<'_> for IdentifierVisitor {
            type Value = Identifier;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a valid Identifier (namespace:path)")
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_str<E>(self, identifier: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match identifier.split_once(':') {
                    Some((namespace, path)) => Ok(Identifier {
                        namespace: namespace.to_string(),
                        path: path.to_string(),
                    }),
                    None => Ok(Identifier::vanilla(identifier)),
                }
            }
        }
        deserializer.deserialize_str(IdentifierVisitor)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::Identifier;

    #[test]
    fn parses_namespaced_and_bare_names() {
        let full = Identifier::from("minecraft:diamond");
        assert_eq!(full, Identifier::vanilla("diamond"));
        assert_eq!(full.to_string(), "minecraft:diamond");

        assert_eq!(Identifier::from("stick"), Identifier::vanilla("stick"));
    }

    #[test]
    fn serde_uses_the_string_form() {
        let id: Identifier = serde_json::from_str("\"minecraft:pig\"").unwrap();
        assert_eq!(id, Identifier::vanilla("pig"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"minecraft:pig\"");
    }
}
