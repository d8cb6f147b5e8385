//! # Stored Procedure Names
//!
//! The four procedures the repository calls. Defaults match the functions
//! created by the bundled migration; deployments that already own their
//! procedures can point at them by name.
//!
//! | Operation | Default | Parameters | Returns |
//! |---|---|---|---|
//! | fetch by code | `sp_se1_produto` | `code integer` | 0..1 rows |
//! | search by description | `sp_se_produto` | `pattern varchar(80)` | 0..n rows |
//! | save (upsert) | `sp_gr_produto` | `code integer, description varchar(80)` | 0..1 rows |
//! | delete | `sp_ex_produto` | `code integer` | nothing |
//!
//! Names are spliced into SQL text (procedures cannot be bound as
//! parameters), so they are restricted to `[A-Za-z_][A-Za-z0-9_]*`,
//! optionally schema-qualified once.

use crate::error::{DbError, DbResult};

/// Default fetch-by-code procedure.
pub const DEFAULT_FETCH_BY_CODE: &str = "sp_se1_produto";
/// Default search-by-description procedure.
pub const DEFAULT_SEARCH_BY_DESCRIPTION: &str = "sp_se_produto";
/// Default save (upsert) procedure.
pub const DEFAULT_SAVE: &str = "sp_gr_produto";
/// Default delete procedure.
pub const DEFAULT_DELETE: &str = "sp_ex_produto";

/// Names of the stored procedures backing the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureSet {
    pub fetch_by_code: String,
    pub search_by_description: String,
    pub save: String,
    pub delete: String,
}

impl Default for ProcedureSet {
    fn default() -> Self {
        ProcedureSet {
            fetch_by_code: DEFAULT_FETCH_BY_CODE.to_string(),
            search_by_description: DEFAULT_SEARCH_BY_DESCRIPTION.to_string(),
            save: DEFAULT_SAVE.to_string(),
            delete: DEFAULT_DELETE.to_string(),
        }
    }
}

impl ProcedureSet {
    /// Checks every name, returning the first invalid one as an error.
    pub fn validate(&self) -> DbResult<()> {
        for name in [
            &self.fetch_by_code,
            &self.search_by_description,
            &self.save,
            &self.delete,
        ] {
            if !is_valid_procedure_name(name) {
                return Err(DbError::InvalidProcedureName(name.clone()));
            }
        }
        Ok(())
    }

    /// `SELECT code, description FROM <fetch_by_code>($1)`
    pub(crate) fn fetch_by_code_sql(&self) -> String {
        format!("SELECT code, description FROM {}($1)", self.fetch_by_code)
    }

    /// `SELECT code, description FROM <search_by_description>($1)`
    pub(crate) fn search_by_description_sql(&self) -> String {
        format!(
            "SELECT code, description FROM {}($1)",
            self.search_by_description
        )
    }

    /// `SELECT code, description FROM <save>($1, $2)`
    pub(crate) fn save_sql(&self) -> String {
        format!("SELECT code, description FROM {}($1, $2)", self.save)
    }

    /// `SELECT <delete>($1)`
    pub(crate) fn delete_sql(&self) -> String {
        format!("SELECT {}($1)", self.delete)
    }
}

/// Returns true for `ident` or `schema.ident` built from
/// `[A-Za-z_][A-Za-z0-9_]*` segments.
pub fn is_valid_procedure_name(name: &str) -> bool {
    let segments: Vec<&str> = name.split('.').collect();
    if segments.is_empty() || segments.len() > 2 {
        return false;
    }
    segments.iter().all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ProcedureSet::default().validate().is_ok());
    }

    #[test]
    fn test_schema_qualified_names() {
        assert!(is_valid_procedure_name("dbo.SpSe1Produto"));
        assert!(is_valid_procedure_name("_private"));
        assert!(!is_valid_procedure_name("a.b.c"));
        assert!(!is_valid_procedure_name(""));
        assert!(!is_valid_procedure_name("1abc"));
    }

    #[test]
    fn test_rejects_injection() {
        let procedures = ProcedureSet {
            delete: "sp_ex_produto($1); DROP TABLE products; --".to_string(),
            ..ProcedureSet::default()
        };
        assert!(matches!(
            procedures.validate(),
            Err(DbError::InvalidProcedureName(_))
        ));
    }

    #[test]
    fn test_generated_sql() {
        let procedures = ProcedureSet::default();
        assert_eq!(
            procedures.save_sql(),
            "SELECT code, description FROM sp_gr_produto($1, $2)"
        );
        assert_eq!(procedures.delete_sql(), "SELECT sp_ex_produto($1)");
    }
}
