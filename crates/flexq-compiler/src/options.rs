use flexq_core::PLAINTEXT_FIELD;

/// Classic limit on clauses in a single boolean query.
pub const DEFAULT_MAX_CLAUSE_COUNT: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub(crate) default_field: String,
    pub(crate) max_clause_count: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_field: PLAINTEXT_FIELD.to_owned(),
            max_clause_count: DEFAULT_MAX_CLAUSE_COUNT,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field used for terms that do not name one.
    pub fn default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = field.into();
        self
    }

    pub fn max_clause_count(mut self, value: usize) -> Self {
        self.max_clause_count = value;
        self
    }

    /// An absent field and the `_plain` placeholder both mean the default field.
    pub fn field_or_default<'a>(&'a self, field: Option<&'a str>) -> &'a str {
        match field {
            None | Some(PLAINTEXT_FIELD) => &self.default_field,
            Some(field) => field,
        }
    }

    pub fn max_clauses(&self) -> usize {
        self.max_clause_count
    }
}
