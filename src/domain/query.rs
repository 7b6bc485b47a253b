use crate::domain::model::Pokemon;

/// Search predicate over stored records. Set clauses are combined with AND;
/// an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct DexFilter {
    /// Case-insensitive substring match against the record name.
    pub name_contains: Option<String>,
    /// Case-insensitive equality against any of the record's type tags.
    pub type_tag: Option<String>,
    pub favorites_only: bool,
}

impl DexFilter {
    pub fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.type_tag.is_none() && !self.favorites_only
    }

    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        if self.favorites_only && !pokemon.favorite {
            return false;
        }

        if let Some(needle) = &self.name_contains {
            if !pokemon
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(tag) = &self.type_tag {
            if !pokemon.types.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }

        true
    }
}
