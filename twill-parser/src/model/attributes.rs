use serde::{
    Deserialize, Serialize,
    de::{self, Deserializer},
    ser::{SerializeMap, Serializer},
};

/// An ordered collection of HTML attributes with unique names.
///
/// Iteration, rendering, and serialization all follow insertion order, which
/// is how the canonical `style, class, id, lang, colspan, rowspan, span,
/// width` ordering survives from parsing to output.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct AttributeList(Vec<(AttributeName, String)>);

impl Serialize for AttributeList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // We serialize the attributes as a map in insertion order.
        let mut state = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            state.serialize_entry(name, value)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for AttributeList {
    fn deserialize<D>(deserializer: D) -> Result<AttributeList, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListVisitor;

        impl<'de> de::Visitor<'de> for ListVisitor {
            type Value = AttributeList;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of attribute names to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut list = AttributeList::default();
                while let Some((name, value)) = access.next_entry()? {
                    list.insert(name, value);
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}

impl AttributeList {
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &String)> {
        self.0.iter().map(|(name, value)| (name, value))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Insert a new attribute at the end of the list.
    //
    // NOTE: This will *NOT* overwrite an existing attribute with the same name.
    pub fn insert(&mut self, name: AttributeName, value: String) {
        if !self.contains_key(&name) {
            self.0.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.iter().any(|(key, _)| key == name)
    }
}

/// An `AttributeName` represents the name of an HTML attribute.
pub type AttributeName = String;
