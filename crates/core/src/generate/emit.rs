//! Artifact emission: joins declarations and functions into the two
//! output documents. Formatting and persistence stay outside the crate;
//! this only produces ordered text.

use super::assemble::TypeDeclaration;

const AXIOS_IMPORTS: &str =
    "import axios from 'axios'\nimport type { AxiosRequestConfig } from 'axios'";

/// The generated output for one tag: type declarations in dependency
/// order, then one function fragment per operation.
#[derive(Debug)]
pub struct TagArtifacts {
    pub declarations: Vec<TypeDeclaration>,
    pub functions: Vec<String>,
}

impl TagArtifacts {
    /// Names of the exported declarations, in declaration order.
    pub fn exported_names(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .filter(|declaration| declaration.exported)
            .map(|declaration| declaration.name.as_str())
            .collect()
    }

    /// The type-declarations document (`types.gen.ts`).
    pub fn types_document(&self) -> String {
        if self.declarations.is_empty() {
            return String::new();
        }
        let fragments: Vec<&str> = self
            .declarations
            .iter()
            .map(|declaration| declaration.text.as_str())
            .collect();
        fragments.join("\n\n") + "\n"
    }

    /// The request-functions document (`http.gen.ts`): axios imports, an
    /// import of the exported type names, then the function fragments.
    pub fn requests_document(&self) -> String {
        let mut header = AXIOS_IMPORTS.to_string();
        let exported = self.exported_names();
        if !exported.is_empty() {
            header.push_str("\nimport type {\n");
            for name in exported {
                header.push_str("  ");
                header.push_str(name);
                header.push_str(",\n");
            }
            header.push_str("} from './types.gen'");
        }

        let mut fragments = vec![header];
        fragments.extend(self.functions.iter().cloned());
        fragments.join("\n\n") + "\n"
    }
}
