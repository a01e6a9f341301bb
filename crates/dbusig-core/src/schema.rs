use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::model::SignatureOptions;

/// Emit the JSON Schema for signature option profiles.
pub fn options_json_schema() -> RootSchema {
    schema_for!(SignatureOptions)
}
