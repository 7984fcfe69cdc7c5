//! Operation identifier derivation and collision tracking.

use std::collections::HashMap;

use crate::error::GenerateError;

use super::utils::capitalize_first;

/// Canonical identifier stem for one (method, path) pair.
///
/// The method is capitalized and leads; each literal path segment is
/// capitalized; each `{param}` placeholder becomes `By` plus the
/// lowercased, capitalized parameter name. `get /pet/{petId}/uploadImage`
/// yields `GetPetByPetidUploadImage`. The stem names the payload type,
/// the response type, and the request function of the operation.
pub fn operation_stem(method: &str, path: &str) -> String {
    let mut stem = capitalize_first(method);
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        match segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(param) => {
                stem.push_str("By");
                stem.push_str(&capitalize_first(&param.to_lowercase()));
            }
            None => stem.push_str(&capitalize_first(segment)),
        }
    }
    stem
}

/// Tracks which operation first claimed each stem. Two distinct
/// operations collapsing to one stem would silently alias each other's
/// generated artifacts, so a second claim is a structural conflict.
#[derive(Debug, Default)]
pub struct StemRegistry {
    seen: HashMap<String, (String, String)>,
}

impl StemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, stem: &str, method: &str, path: &str) -> Result<(), GenerateError> {
        if let Some((method_a, path_a)) = self.seen.get(stem) {
            return Err(GenerateError::DuplicateOperationStem {
                stem: stem.to_string(),
                method_a: method_a.clone(),
                path_a: path_a.clone(),
                method_b: method.to_string(),
                path_b: path.to_string(),
            });
        }
        self.seen
            .insert(stem.to_string(), (method.to_string(), path.to_string()));
        Ok(())
    }
}
