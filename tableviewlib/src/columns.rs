//! Column definitions and inference from record shape.

use std::fmt;
use std::sync::Arc;

use crate::data::record::Record;
use crate::data::value::Value;

/// Turns a field value into cell text.
pub type Renderer = Arc<dyn Fn(&Value<'_>) -> String + Send + Sync>;

fn display_value(value: &Value<'_>) -> String {
    value.to_string()
}

/// A displayed column: which field, its header label, and how to render it.
#[derive(Clone)]
pub struct Column {
    /// Field name
    pub key: String,
    /// Header text
    pub label: String,
    render: Renderer,
}

impl Column {
    /// Column rendering values with their plain string form.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: Arc::new(display_value),
        }
    }

    /// Column whose label is the field name itself.
    pub fn for_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(key.clone(), key)
    }

    pub fn with_render(
        mut self,
        render: impl Fn(&Value<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Arc::new(render);
        self
    }

    pub fn render(&self, value: &Value<'_>) -> String {
        (self.render)(value)
    }

    /// Render this column's cell for `record`.
    pub fn cell<R: Record + ?Sized>(&self, record: &R) -> String {
        self.render(&record.field(&self.key))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Infer one column per field of the first record, in declaration order.
///
/// No records means no columns. With `hide_identity`, the `identity_key`
/// column is left out.
pub fn infer_columns<R: Record>(
    records: &[R],
    identity_key: &str,
    hide_identity: bool,
) -> Vec<Column> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    first
        .keys()
        .into_iter()
        .filter(|key| !(hide_identity && *key == identity_key))
        .map(Column::for_key)
        .collect()
}
