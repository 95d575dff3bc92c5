use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::terminal::Sink;
use crate::types::{self, AccessOutcome};

pub struct Json {
    result: JsonFullResult,
}

#[derive(Serialize)]
struct JsonResourceResult {
    name: String,
    access: BTreeMap<String, AccessOutcome>,
}

#[derive(Serialize)]
struct JsonFullResult {
    items: Vec<JsonResourceResult>,
}

impl JsonResourceResult {
    fn new(verbs: &[String], value: types::ResultRow) -> Self {
        let access = verbs
            .iter()
            .map(|v| (v.clone(), value.outcome(v)))
            .collect::<BTreeMap<String, AccessOutcome>>();
        Self {
            name: value.name,
            access,
        }
    }
}

impl Json {
    pub fn new(verbs: &[String], full_result: types::FullResult) -> Self {
        Self {
            result: JsonFullResult {
                items: full_result
                    .items
                    .into_iter()
                    .map(|i| JsonResourceResult::new(verbs, i))
                    .collect::<Vec<JsonResourceResult>>(),
            },
        }
    }

    pub fn write<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let output = serde_json::to_string(&self.result)?;
        writeln!(sink, "{}", output)?;
        sink.flush()?;
        Ok(())
    }
}
