//! Column module - a named sequence of raw values read from one table column

/// A column of raw string values
///
/// Values keep file row order. A column is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    values: Vec<String>,
}

impl Column {
    /// Create a new column
    ///
    /// # Examples
    ///
    /// ```
    /// use coltype_domain::Column;
    ///
    /// let column = Column::new("phone", vec!["555-123-4567".to_string(), "".to_string()]);
    /// assert_eq!(column.len(), 2);
    /// assert_eq!(column.non_blank().count(), 1);
    /// ```
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column from string slices (convenient in tests and fixtures)
    pub fn from_strs(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(name, values.iter().map(|v| v.to_string()).collect())
    }

    /// Column header name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values, blanks included, in row order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values that are not blank, in row order
    pub fn non_blank(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .map(String::as_str)
            .filter(|v| !is_blank(v))
    }
}

/// A value is blank when it is empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
